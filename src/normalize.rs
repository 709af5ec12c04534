//! Symptom text normalization.
//!
//! Rewrites colloquial and romanized symptom phrases to canonical clinical
//! terms so downstream keyword logic only has to know one vocabulary.

use crate::lexicon::terms::NORMALIZATION_TABLE;

/// Lowercase the input and apply every normalization rule in table order.
///
/// The table guarantees no replacement value contains another rule's key,
/// so the function is idempotent: `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    let mut out = text.to_lowercase();
    for (from, to) in NORMALIZATION_TABLE {
        if out.contains(from) {
            out = out.replace(from, to);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_romanized_terms() {
        assert_eq!(normalize("Mujhe BUKHAR hai"), "mujhe fever hai");
        assert_eq!(
            normalize("saans lene mein takleef aur khasi"),
            "breathing difficulty aur cough"
        );
    }

    #[test]
    fn longer_phrases_win_over_contained_words() {
        // "loose motions" must not be left as "diarrheas".
        assert_eq!(normalize("loose motions since morning"), "diarrhea since morning");
    }

    #[test]
    fn sugar_means_diabetes() {
        assert_eq!(normalize("mother has sugar problem"), "mother has diabetes problem");
    }

    #[test]
    fn is_idempotent_over_the_whole_table() {
        for (from, _) in NORMALIZATION_TABLE {
            let once = normalize(from);
            assert_eq!(once, normalize(&once), "rule source: {from}");
        }
        let mixed = "pet mein dard aur ulti, body pain bhi, acidity se weakness";
        let once = normalize(mixed);
        assert_eq!(once, normalize(&once));
    }

    #[test]
    fn leaves_clinical_text_alone() {
        assert_eq!(
            normalize("persistent fever with chills"),
            "persistent fever with chills"
        );
    }
}
