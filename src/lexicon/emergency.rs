//! Red-flag phrase sets for the emergency detector.
//!
//! Critical categories are scanned first and short-circuit to a critical
//! level on any hit. Each clinical category carries its English, romanized
//! and native-script phrases together, so code-mixed input is caught without
//! translation and the flag always names the clinical category.

use super::PhraseCategory;

/// Critical red-flag categories. One hit in any of these forces the
/// emergency level to critical.
pub const CRITICAL_CATEGORIES: [PhraseCategory; 6] = [
    PhraseCategory {
        name: "cardiac",
        phrases: &[
            "chest pain",
            "palpitations",
            "sweating with chest pain",
            "heart attack",
            "chhati mein dard",
            "seene mein dard",
            "chhatit dukhne",
            "nenju vali",
            "छाती में दर्द",
            "सीने में दर्द",
            "छातीत दुखणे",
            "छाती दुखते",
            "நெஞ்சு வலி",
            "ఛాతీ నొప్పి",
            "ಎದೆ ನೋವು",
            "বুকে ব্যথা",
            "છાતીમાં દુખાવો",
            "നെഞ്ചുവേദന",
        ],
    },
    PhraseCategory {
        name: "respiratory",
        phrases: &[
            "shortness of breath",
            "difficulty breathing",
            "saans lene mein",
            "shwas ghenyat tras",
            "moochu vida",
            "oopiri",
            "usirata tondare",
            "सांस लेने में तकलीफ",
            "श्वास घेण्यात त्रास",
            "மூச்சு விட கஷ்டம்",
            "ఊపిరి తీసుకోవడం కష్టం",
            "ಉಸಿರಾಟದ ತೊಂದರೆ",
            "শ্বাসকষ্ট",
            "શ્વાસ લેવામાં તકલીફ",
            "ശ്വാസതടസ്സം",
        ],
    },
    PhraseCategory {
        name: "neurological",
        phrases: &[
            "sudden weakness",
            "speech difficulty",
            "face drooping",
            "severe headache",
            "behosh",
            "ek taraf kamzori",
            "बेहोश",
        ],
    },
    PhraseCategory {
        name: "sepsis",
        phrases: &[
            "high fever with confusion",
            "rapid heart rate",
        ],
    },
    PhraseCategory {
        name: "pediatric",
        phrases: &[
            "difficulty breathing in child",
            "high fever in infant",
            "lethargy in child",
        ],
    },
    PhraseCategory {
        name: "obstetric",
        phrases: &[
            "severe abdominal pain pregnancy",
            "bleeding pregnancy",
            "severe headache pregnancy",
        ],
    },
];

/// Medium-priority symptoms: no immediate emergency, but the consultation
/// is flagged high rather than routine.
pub const MEDIUM_PRIORITY: PhraseCategory = PhraseCategory {
    name: "medium_priority",
    phrases: &[
        "high fever",
        "severe pain",
        "persistent vomiting",
        "difficulty breathing",
        "tez bukhar",
        "bahut dard",
        "तेज बुखार",
        "खूप ताप",
    ],
};

/// Critical signs the emergency agent re-checks before declaring the case
/// manageable. Narrower than the red-flag sets: these are the presentations
/// that warrant "go to hospital now" messaging.
pub const CRITICAL_SIGNS: &[&str] = &[
    "chest pain with sweating",
    "chest pain",
    "difficulty breathing",
    "sudden weakness",
    "severe headache",
    "high fever with confusion",
    "severe abdominal pain",
    "saans lene mein",
    "chhati mein dard",
    "seene mein dard",
    "behosh",
];
