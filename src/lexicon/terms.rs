//! Clinical term tables: colloquial-to-canonical normalization, specialist
//! routing patterns and the symptom vocabulary used by the diagnostic agent.

/// Colloquial/romanized term to canonical English clinical term.
///
/// Invariant (checked by test): no replacement value contains another rule's
/// source key, so normalization is idempotent. Longer keys come before any
/// key they contain.
pub const NORMALIZATION_TABLE: &[(&str, &str)] = &[
    ("saans lene mein takleef", "breathing difficulty"),
    ("loose motions", "diarrhea"),
    ("loose motion", "diarrhea"),
    ("pet mein dard", "abdominal pain"),
    ("pet kharab", "stomach upset"),
    ("chakkar aana", "dizziness"),
    ("body pain", "myalgia"),
    ("sir dard", "headache"),
    ("sugar", "diabetes"),
    ("bukhar", "fever"),
    ("khasi", "cough"),
    ("ulti", "vomiting"),
    ("dast", "diarrhea"),
    ("acidity", "acid reflux"),
    ("weakness", "fatigue"),
];

/// Symptom keyword patterns to medical specialty. First match wins; the
/// router falls back to "General Physician". Bare "headache" deliberately
/// stays unrouted: an uncomplicated headache is general-physician territory.
pub const SPECIALIZATIONS: &[(&str, &str)] = &[
    ("chest pain|heart|cardiac", "Cardiologist"),
    ("skin|rash|allergy", "Dermatologist"),
    ("stomach|abdominal|digestive", "Gastroenterologist"),
    ("migraine|neurological|seizure", "Neurologist"),
    ("joint|bone|arthritis", "Orthopedist"),
    ("cough|breathing|lung", "Pulmonologist"),
    ("eye|vision", "Ophthalmologist"),
    ("ear|hearing|throat", "ENT Specialist"),
    ("pregnancy|gynecological", "Gynecologist"),
    ("child|pediatric|infant", "Pediatrician"),
];

pub const DEFAULT_SPECIALIST: &str = "General Physician";

/// Keywords marking a symptom description as severe or mild; anything else
/// is treated as moderate.
pub const SEVERE_KEYWORDS: &[&str] = &[
    "severe", "intense", "unbearable", "तेज़", "बहुत", "khup", "romba", "chala", "tumba",
];

pub const MILD_KEYWORDS: &[&str] = &["mild", "slight", "little", "हल्का", "थोड़ा", "thoda", "konjam"];

/// Fixed vocabulary of associated symptoms the diagnostic agent extracts.
pub const ASSOCIATED_SYMPTOMS: &[&str] = &[
    "fever",
    "headache",
    "nausea",
    "vomiting",
    "diarrhea",
    "fatigue",
    "dizziness",
    "pain",
    "cough",
];

/// Differential-diagnosis shortlists keyed by symptom combinations. Every
/// keyword of a row must be present; first matching row wins.
pub const DIFFERENTIALS: &[(&[&str], &[&str])] = &[
    (
        &["fever", "headache"],
        &[
            "Viral fever",
            "Dengue (if monsoon)",
            "Malaria",
            "Typhoid",
        ],
    ),
    (
        &["stomach"],
        &[
            "Gastroenteritis",
            "Food poisoning",
            "Peptic ulcer",
            "Appendicitis",
        ],
    ),
    (
        &["abdominal"],
        &[
            "Gastroenteritis",
            "Food poisoning",
            "Peptic ulcer",
            "Appendicitis",
        ],
    ),
    (
        &["chest", "pain"],
        &[
            "Cardiac issue (urgent)",
            "Acid reflux",
            "Muscle strain",
            "Respiratory infection",
        ],
    ),
];

pub const DEFAULT_DIFFERENTIAL: &[&str] = &[
    "General consultation needed",
    "Symptomatic treatment",
    "Follow-up in 2-3 days",
];
