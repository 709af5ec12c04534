//! Curated phrase tables and the narrow matching interface over them.
//!
//! All tables are immutable static data: no mutation, no hidden state.
//! Matching components take the tables as plain slices so the engine behind
//! [`match_any`] can be swapped (e.g. for an Aho-Corasick automaton) without
//! touching the curated data.

pub mod emergency;
pub mod romanized;
pub mod templates;
pub mod terms;
pub mod treatment;

/// A named set of phrases, e.g. the cardiac red-flag set.
#[derive(Debug, Clone, Copy)]
pub struct PhraseCategory {
    pub name: &'static str,
    pub phrases: &'static [&'static str],
}

/// A single phrase hit: which category matched and the exact phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseMatch {
    pub category: &'static str,
    pub phrase: &'static str,
}

/// Scan `text` against every category and return all phrase hits in table
/// order. Callers are expected to pass lowercased text; phrases in the
/// tables are stored lowercase (native-script phrases are unaffected by
/// case folding).
pub fn match_any(categories: &[PhraseCategory], text: &str) -> Vec<PhraseMatch> {
    let mut matches = Vec::new();
    for category in categories {
        for phrase in category.phrases {
            if text.contains(phrase) {
                matches.push(PhraseMatch {
                    category: category.name,
                    phrase,
                });
            }
        }
    }
    matches
}

/// True if any phrase of any category occurs in `text`.
pub fn matches_any(categories: &[PhraseCategory], text: &str) -> bool {
    categories
        .iter()
        .any(|c| c.phrases.iter().any(|p| text.contains(p)))
}
