//! Romanized word lists used by language detection.
//!
//! Function words are everyday pronouns, copulas and question words a patient
//! types when writing an Indian language in Latin script. Medical keywords
//! are weighted double by the detector because they are strong evidence of a
//! medical consultation in that language.

use crate::language::Language;

pub fn function_words(lang: Language) -> &'static [&'static str] {
    match lang {
        Language::Hindi => HINDI_FUNCTION_WORDS,
        Language::Marathi => MARATHI_FUNCTION_WORDS,
        Language::Tamil => TAMIL_FUNCTION_WORDS,
        Language::Telugu => TELUGU_FUNCTION_WORDS,
        Language::Kannada => KANNADA_FUNCTION_WORDS,
        Language::Bengali => BENGALI_FUNCTION_WORDS,
        Language::Gujarati => GUJARATI_FUNCTION_WORDS,
        Language::Malayalam => MALAYALAM_FUNCTION_WORDS,
        Language::English => &[],
    }
}

pub fn medical_keywords(lang: Language) -> &'static [&'static str] {
    match lang {
        Language::Hindi => HINDI_MEDICAL_KEYWORDS,
        Language::Marathi => MARATHI_MEDICAL_KEYWORDS,
        Language::Tamil => TAMIL_MEDICAL_KEYWORDS,
        Language::Telugu => TELUGU_MEDICAL_KEYWORDS,
        Language::Kannada => KANNADA_MEDICAL_KEYWORDS,
        Language::Bengali => BENGALI_MEDICAL_KEYWORDS,
        Language::Gujarati => GUJARATI_MEDICAL_KEYWORDS,
        Language::Malayalam => MALAYALAM_MEDICAL_KEYWORDS,
        Language::English => &[],
    }
}

const HINDI_FUNCTION_WORDS: &[&str] = &[
    "mujhe", "mera", "hai", "hain", "tha", "thi", "kya", "kaise", "kab", "kyun", "theek", "bura",
    "achha", "bahut", "thoda", "zyada", "nahi", "haan", "ji", "aur", "lekin", "agar", "toh", "bhi",
];

const MARATHI_FUNCTION_WORDS: &[&str] = &[
    "mala", "maze", "aahe", "hote", "kay", "kasa", "keva", "thik", "vaait", "changle", "khup",
    "thode", "jast", "ani", "pan", "tar",
];

const TAMIL_FUNCTION_WORDS: &[&str] = &[
    "enakku", "ennoda", "irukku", "irundhudhu", "enna", "eppadi", "eppo", "nalla", "mosam",
    "romba", "konjam", "adhigam", "illa", "aama", "aana", "appo",
];

const TELUGU_FUNCTION_WORDS: &[&str] = &[
    "naaku", "naa", "undi", "undedi", "enti", "ela", "eppudu", "enduku", "manchidi", "cheddadi",
    "chala", "konchem", "ekkuva", "ledu", "avunu", "mariyu", "kani", "aithe",
];

const KANNADA_FUNCTION_WORDS: &[&str] = &[
    "nanage", "nanna", "ide", "ittu", "enu", "hegae", "yaavaga", "yaake", "olleyadhu", "kedu",
    "tumba", "swalpa", "hechchu", "haudu", "mattu", "aadre", "andre",
];

const BENGALI_FUNCTION_WORDS: &[&str] = &[
    "amar", "amake", "achhe", "chhilo", "kemon", "kokhon", "keno", "bhalo", "kharap", "onek",
    "ektu", "beshi", "kintu", "tahole",
];

const GUJARATI_FUNCTION_WORDS: &[&str] = &[
    "mane", "maru", "che", "hatu", "shu", "kem", "kyare", "saaru", "kharaab", "ganu", "thodu",
    "vadhu", "ane",
];

const MALAYALAM_FUNCTION_WORDS: &[&str] = &[
    "enikku", "ente", "undu", "undayirunnu", "enthu", "engane", "eppol", "enthinaanu", "mosham",
    "valare", "koodi", "kuravu", "athe", "pakshe", "enkil",
];

const HINDI_MEDICAL_KEYWORDS: &[&str] = &[
    "bukhar", "dard", "ulti", "jhada", "dawai", "chakkar", "khasi", "kamzori",
];

const MARATHI_MEDICAL_KEYWORDS: &[&str] = &[
    "taap", "dukhte", "julabh", "sakhar", "aushadh", "goli", "thakva",
];

const TAMIL_MEDICAL_KEYWORDS: &[&str] = &[
    "kaichal", "vali", "vaandhi", "vayiru", "marundhu", "oosi", "thalaivali",
];

const TELUGU_MEDICAL_KEYWORDS: &[&str] = &[
    "jwaram", "noppi", "vanthi", "virechanalu", "marundu", "daham",
];

const KANNADA_MEDICAL_KEYWORDS: &[&str] = &["jwara", "novu", "vanti", "bidi", "marandu", "hotte"];

const BENGALI_MEDICAL_KEYWORDS: &[&str] = &["jor", "byatha", "bomi", "paikhaana", "oshudh"];

const GUJARATI_MEDICAL_KEYWORDS: &[&str] = &["taav", "dukhave", "jaman", "dawai"];

const MALAYALAM_MEDICAL_KEYWORDS: &[&str] = &["pani", "vedana", "okshanam", "vayaru", "marunu"];

// Devanagari disambiguation: words distinctive of Marathi or Hindi, used to
// attribute shared-script coverage to one of the two languages.

pub const MARATHI_DEVANAGARI_MARKERS: &[&str] = &[
    "आहे", "होते", "माझे", "तुझे", "त्याचे", "तिचे", "करा", "मला", "आम्हाला", "तुम्हाला", "त्यांना", "कसे",
    "केव्हा", "दुखते", "दुखत", "आहेत", "आणि", "पण", "डोके", "पोट", "छाती", "ताप", "सर्दी", "खोकला",
    "थकवा", "जुलाब", "उलटी",
];

pub const HINDI_DEVANAGARI_MARKERS: &[&str] = &[
    "है", "हैं", "था", "थी", "थे", "मेरा", "मेरी", "तेरा", "तेरी", "उसका", "उसकी", "करो", "जाओ", "मुझे",
    "हमको", "तुमको", "उनको", "क्या", "कैसे", "कब", "हो रहा", "हो रही", "कर रहा", "कर रही", "दर्द",
    "तकलीफ", "बुखार", "खांसी", "जुकाम", "कमजोरी",
];

pub const MARATHI_ROMANIZED_MARKERS: &[&str] = &[
    "aahe", "hote", "maze", "tuze", "tyache", "tiche", "kara", "mala", "dukhte",
];

pub const HINDI_ROMANIZED_MARKERS: &[&str] = &[
    "hai", "hain", "tha", "thi", "mera", "tera", "uska", "karo", "jao", "mujhe", "dard",
];
