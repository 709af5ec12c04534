//! Language identification for code-mixed Indian medical text.
//!
//! Detection combines two signals: coverage of a language's native Unicode
//! script over the input, and matches against curated romanized word lists
//! (function words weighted 1, medical keywords weighted 2). Hindi and
//! Marathi share the Devanagari block and are disambiguated with
//! distinctive-word counts; an exact tie resolves to Hindi.

use serde::{Deserialize, Serialize};

use crate::lexicon::romanized;

/// The nine languages the pipeline understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Hindi,
    Marathi,
    Tamil,
    Telugu,
    Kannada,
    Bengali,
    Gujarati,
    Malayalam,
    English,
}

/// The eight supported Indian languages, in tie-break priority order
/// (Hindi first: it wins any exact score tie).
pub const INDIAN_LANGUAGES: [Language; 8] = [
    Language::Hindi,
    Language::Marathi,
    Language::Tamil,
    Language::Telugu,
    Language::Kannada,
    Language::Bengali,
    Language::Gujarati,
    Language::Malayalam,
];

/// Display metadata for a supported language.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LanguageMetadata {
    pub name: &'static str,
    pub native_name: &'static str,
    pub region: &'static str,
}

impl Language {
    /// Lowercase tag used in serialized output and logs.
    pub fn tag(self) -> &'static str {
        match self {
            Language::Hindi => "hindi",
            Language::Marathi => "marathi",
            Language::Tamil => "tamil",
            Language::Telugu => "telugu",
            Language::Kannada => "kannada",
            Language::Bengali => "bengali",
            Language::Gujarati => "gujarati",
            Language::Malayalam => "malayalam",
            Language::English => "english",
        }
    }

    pub fn is_indian(self) -> bool {
        self != Language::English
    }

    pub fn metadata(self) -> LanguageMetadata {
        match self {
            Language::Hindi => LanguageMetadata {
                name: "Hindi",
                native_name: "हिंदी",
                region: "North India",
            },
            Language::Marathi => LanguageMetadata {
                name: "Marathi",
                native_name: "मराठी",
                region: "Maharashtra",
            },
            Language::Tamil => LanguageMetadata {
                name: "Tamil",
                native_name: "தமிழ்",
                region: "Tamil Nadu",
            },
            Language::Telugu => LanguageMetadata {
                name: "Telugu",
                native_name: "తెలుగు",
                region: "Andhra Pradesh & Telangana",
            },
            Language::Kannada => LanguageMetadata {
                name: "Kannada",
                native_name: "ಕನ್ನಡ",
                region: "Karnataka",
            },
            Language::Bengali => LanguageMetadata {
                name: "Bengali",
                native_name: "বাংলা",
                region: "West Bengal",
            },
            Language::Gujarati => LanguageMetadata {
                name: "Gujarati",
                native_name: "ગુજરાતી",
                region: "Gujarat",
            },
            Language::Malayalam => LanguageMetadata {
                name: "Malayalam",
                native_name: "മലയാളം",
                region: "Kerala",
            },
            Language::English => LanguageMetadata {
                name: "English",
                native_name: "English",
                region: "Pan-India",
            },
        }
    }

    /// The contiguous Unicode block of the language's native script.
    /// Hindi and Marathi both map to Devanagari.
    pub fn script_range(self) -> Option<(char, char)> {
        match self {
            Language::Hindi | Language::Marathi => Some(('\u{0900}', '\u{097F}')),
            Language::Tamil => Some(('\u{0B80}', '\u{0BFF}')),
            Language::Telugu => Some(('\u{0C00}', '\u{0C7F}')),
            Language::Kannada => Some(('\u{0C80}', '\u{0CFF}')),
            Language::Bengali => Some(('\u{0980}', '\u{09FF}')),
            Language::Gujarati => Some(('\u{0A80}', '\u{0AFF}')),
            Language::Malayalam => Some(('\u{0D00}', '\u{0D7F}')),
            Language::English => None,
        }
    }
}

/// Outcome of language detection for one input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageDetectionResult {
    pub language: Language,
    /// Combined-evidence confidence in [0, 1].
    pub confidence: f32,
    pub is_indian_language: bool,
}

impl LanguageDetectionResult {
    fn english(confidence: f32) -> Self {
        Self {
            language: Language::English,
            confidence,
            is_indian_language: false,
        }
    }
}

/// Combined score below which we treat the input as "no Indian language
/// detected" rather than a low-confidence Indian guess.
const ENGLISH_FALLBACK_THRESHOLD: f32 = 0.2;

/// Scale factor turning a combined score into a confidence value.
const CONFIDENCE_DIVISOR: f32 = 50.0;

/// Detect the language of raw patient input.
///
/// Mixed-script (code-switched) input resolves to whichever language's
/// evidence dominates numerically; this never fails.
pub fn detect(text: &str) -> LanguageDetectionResult {
    if text.trim().is_empty() {
        return LanguageDetectionResult::english(1.0);
    }

    let total_chars = text.chars().filter(|c| !c.is_whitespace()).count() as f32;
    let lower = text.to_lowercase();

    let mut scores = [0f32; INDIAN_LANGUAGES.len()];

    // Native-script coverage. The Devanagari block is scored once and
    // attributed to Hindi or Marathi by the distinctive-word tie-break.
    for (idx, lang) in INDIAN_LANGUAGES.iter().enumerate() {
        if *lang == Language::Hindi || *lang == Language::Marathi {
            continue;
        }
        if let Some((lo, hi)) = lang.script_range() {
            let matched = text.chars().filter(|c| (lo..=hi).contains(c)).count();
            if matched > 0 {
                scores[idx] += (matched as f32 / total_chars) * 100.0;
            }
        }
    }

    let devanagari = text
        .chars()
        .filter(|c| ('\u{0900}'..='\u{097F}').contains(c))
        .count();
    if devanagari > 0 {
        let coverage = (devanagari as f32 / total_chars) * 100.0;
        match devanagari_tie_break(text, &lower) {
            Language::Marathi => scores[lang_index(Language::Marathi)] += coverage,
            _ => scores[lang_index(Language::Hindi)] += coverage,
        }
    }

    // Romanized evidence: function words count once, medical keywords twice.
    for (idx, lang) in INDIAN_LANGUAGES.iter().enumerate() {
        let mut matches = 0u32;
        for word in romanized::function_words(*lang) {
            if lower.contains(word) {
                matches += 1;
            }
        }
        for term in romanized::medical_keywords(*lang) {
            if lower.contains(term) {
                matches += 2;
            }
        }
        if matches > 0 {
            scores[idx] += matches as f32 * 5.0;
        }
    }

    let (best_idx, best_score) = scores
        .iter()
        .enumerate()
        .fold((0usize, 0f32), |(bi, bs), (i, &s)| {
            if s > bs { (i, s) } else { (bi, bs) }
        });

    let confidence = if best_score > 0.0 {
        (best_score / CONFIDENCE_DIVISOR).min(1.0)
    } else {
        0.1
    };

    if confidence < ENGLISH_FALLBACK_THRESHOLD {
        // Deliberate "no Indian language" signal, not a weak Indian guess.
        return LanguageDetectionResult::english(0.9);
    }

    LanguageDetectionResult {
        language: INDIAN_LANGUAGES[best_idx],
        confidence,
        is_indian_language: true,
    }
}

fn lang_index(lang: Language) -> usize {
    INDIAN_LANGUAGES
        .iter()
        .position(|l| *l == lang)
        .unwrap_or(0)
}

/// Disambiguate Devanagari text between Hindi and Marathi by counting hits
/// in curated distinctive-word lists (native script and romanized).
/// An exact tie defaults to Hindi, the more prevalent language.
fn devanagari_tie_break(text: &str, lower: &str) -> Language {
    let marathi = count_hits(text, romanized::MARATHI_DEVANAGARI_MARKERS)
        + count_hits(lower, romanized::MARATHI_ROMANIZED_MARKERS);
    let hindi = count_hits(text, romanized::HINDI_DEVANAGARI_MARKERS)
        + count_hits(lower, romanized::HINDI_ROMANIZED_MARKERS);

    if marathi > hindi {
        Language::Marathi
    } else {
        Language::Hindi
    }
}

fn count_hits(text: &str, words: &[&str]) -> usize {
    words.iter().filter(|w| text.contains(*w)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_english_with_full_confidence() {
        let result = detect("   ");
        assert_eq!(result.language, Language::English);
        assert!((result.confidence - 1.0).abs() < f32::EPSILON);
        assert!(!result.is_indian_language);
    }

    #[test]
    fn english_input_falls_back_to_english() {
        let result = detect("I have a mild headache since yesterday");
        assert_eq!(result.language, Language::English);
        assert!(!result.is_indian_language);
        assert!((result.confidence - 0.9).abs() < f32::EPSILON);
    }

    #[test]
    fn native_script_sentences_detected_with_high_confidence() {
        let cases = [
            (Language::Hindi, "मुझे बुखार है और सिर में दर्द हो रहा है"),
            (Language::Marathi, "मला ताप आहे आणि डोके दुखते आहे"),
            (Language::Tamil, "எனக்கு காய்ச்சல் இருக்கிறது தலைவலி உள்ளது"),
            (Language::Telugu, "నాకు జ్వరం ఉంది తలనొప్పి వస్తుంది"),
            (Language::Kannada, "ನನಗೆ ಜ್ವರ ಇದೆ ತಲೆನೋವು ಇದೆ"),
            (Language::Bengali, "আমার জ্বর আছে মাথা ব্যথা করছে"),
            (Language::Gujarati, "મને તાવ છે માથાનો દુખાવો થાય છે"),
            (Language::Malayalam, "എനിക്ക് പനി ഉണ്ട് തലവേദന ഉണ്ട്"),
        ];
        for (expected, sentence) in cases {
            let result = detect(sentence);
            assert_eq!(result.language, expected, "input: {sentence}");
            assert!(
                result.confidence >= 0.5,
                "confidence for {expected:?} was {}",
                result.confidence
            );
            assert!(result.is_indian_language);
        }
    }

    #[test]
    fn romanized_sentences_detected() {
        let cases = [
            (Language::Hindi, "mujhe bukhar hai aur dard bhi hai"),
            (Language::Marathi, "mala taap aahe ani pot dukhte"),
            (Language::Tamil, "enakku kaichal irukku romba vali"),
            (Language::Telugu, "naaku jwaram undi chala noppi"),
            (Language::Kannada, "nanage jwara ide tumba novu"),
            (Language::Bengali, "amar jor achhe onek byatha"),
            (Language::Gujarati, "mane taav che ganu dukhave"),
            (Language::Malayalam, "enikku pani undu valare vedana"),
        ];
        for (expected, sentence) in cases {
            let result = detect(sentence);
            assert_eq!(result.language, expected, "input: {sentence}");
            assert!(result.is_indian_language);
        }
    }

    #[test]
    fn devanagari_tie_defaults_to_hindi() {
        // One Marathi marker, one Hindi marker: exact tie.
        assert_eq!(devanagari_tie_break("आहे है", "आहे है"), Language::Hindi);
        // Pure Devanagari digits match neither list.
        assert_eq!(devanagari_tie_break("१२३", "१२३"), Language::Hindi);
    }

    #[test]
    fn marathi_markers_win_devanagari() {
        let result = detect("मला पोटात दुखते आहे");
        assert_eq!(result.language, Language::Marathi);
    }

    #[test]
    fn code_mixed_input_resolves_to_dominant_language() {
        let result = detect("mujhe chest pain ho raha hai aur saans lene mein problem hai");
        assert_eq!(result.language, Language::Hindi);
        assert!(result.is_indian_language);
    }
}
