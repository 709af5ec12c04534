//! Treatment-plan, home-remedy and medication tables for the treatment
//! agent. Content reflects Indian standard-of-care habits and commonly
//! available brands; none of it is a prescription.

/// Keyword to standard-of-care checklist.
pub const TREATMENT_PLANS: &[(&str, &[&str])] = &[
    (
        "fever",
        &[
            "Rest and increase fluid intake",
            "Paracetamol 500mg if fever above 101°F",
            "Light diet - khichdi, soup, fruits",
        ],
    ),
    (
        "cough",
        &[
            "Warm water with honey and ginger",
            "Steam inhalation 2-3 times daily",
            "Avoid cold foods and drinks",
        ],
    ),
    (
        "stomach",
        &[
            "BRAT diet (banana, rice, apple, toast)",
            "ORS solution for hydration",
            "Avoid spicy and oily foods",
        ],
    ),
    (
        "diarrhea",
        &[
            "Start ORS immediately, small sips through the day",
            "Avoid milk and spicy food",
            "Watch for blood in stool or fever above 101°F",
        ],
    ),
    (
        "headache",
        &[
            "Rest in a quiet, dark room",
            "Stay hydrated",
            "Track triggers - sleep, screens, skipped meals",
        ],
    ),
];

/// Keyword to curated home remedies. The agent caps these at three items.
pub const HOME_REMEDIES: &[(&str, &[&str])] = &[
    (
        "cough",
        &[
            "Honey and ginger tea 2-3 times daily",
            "Tulsi (basil) leaves with warm water",
        ],
    ),
    (
        "cold",
        &[
            "Garlic and turmeric milk before bed",
            "Steam inhalation with ajwain (carom seeds)",
        ],
    ),
    (
        "fever",
        &[
            "Garlic and turmeric milk before bed",
            "Steam inhalation with ajwain (carom seeds)",
        ],
    ),
    (
        "stomach",
        &[
            "Coconut water for natural electrolytes",
            "Jeera (cumin) water on an empty stomach",
        ],
    ),
    (
        "acid reflux",
        &[
            "Coconut water for natural electrolytes",
            "Jeera (cumin) water on an empty stomach",
        ],
    ),
    (
        "headache",
        &[
            "Balm application on the temples",
            "Ginger tea with cardamom",
        ],
    ),
];

/// Keyword to over-the-counter medication suggestions with common Indian
/// brand names. A consult-first caveat is always appended by the agent.
pub const MEDICATIONS: &[(&str, &[&str])] = &[
    (
        "fever",
        &["Paracetamol 500mg (Crocin/Dolo) every 6-8 hours"],
    ),
    (
        "pain",
        &["Ibuprofen 400mg (Brufen) if no stomach issues"],
    ),
    (
        "acid reflux",
        &[
            "Pantoprazole 40mg (Pan-40) before breakfast",
            "Simethicone (Digene) after meals",
        ],
    ),
    (
        "cough",
        &["Benadryl cough syrup (5ml) 3 times daily"],
    ),
];

pub const MEDICATION_CAVEAT: &str = "Consult a pharmacist or doctor before taking any medication";

pub const MAX_HOME_REMEDIES: usize = 3;
