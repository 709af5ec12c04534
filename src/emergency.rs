//! Emergency red-flag scan.
//!
//! Runs before any agent: critical phrase hits short-circuit the whole turn
//! to a critical urgency, medium-priority symptoms raise it to high, and a
//! plain medical consultation still starts at medium. The scan never returns
//! low; low is reserved for the agents to settle on after assessment.

use tracing::info;

use crate::lexicon::emergency::{CRITICAL_CATEGORIES, MEDIUM_PRIORITY};
use crate::lexicon::match_any;
use crate::types::UrgencyLevel;

/// Result of scanning one input for red flags.
#[derive(Debug, Clone)]
pub struct EmergencyScan {
    /// "category: phrase" for every red-flag hit, in table order.
    pub flags: Vec<String>,
    pub level: UrgencyLevel,
}

impl EmergencyScan {
    pub fn is_critical(&self) -> bool {
        self.level == UrgencyLevel::Critical
    }
}

/// Scan lowercased/normalized input for emergency indicators.
pub fn scan(text: &str) -> EmergencyScan {
    let critical_hits = match_any(&CRITICAL_CATEGORIES, text);
    if !critical_hits.is_empty() {
        let flags: Vec<String> = critical_hits
            .iter()
            .map(|hit| format!("{}: {}", hit.category, hit.phrase))
            .collect();
        info!(flags = flags.len(), "critical red flags detected");
        return EmergencyScan {
            flags,
            level: UrgencyLevel::Critical,
        };
    }

    let medium_hits = match_any(std::slice::from_ref(&MEDIUM_PRIORITY), text);
    if !medium_hits.is_empty() {
        let flags: Vec<String> = medium_hits
            .iter()
            .map(|hit| format!("{}: {}", hit.category, hit.phrase))
            .collect();
        return EmergencyScan {
            flags,
            level: UrgencyLevel::High,
        };
    }

    EmergencyScan {
        flags: Vec::new(),
        level: UrgencyLevel::Medium,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chest_pain_is_critical() {
        let result = scan("chest pain since one hour");
        assert!(result.is_critical());
        assert!(result.flags.iter().any(|f| f.starts_with("cardiac:")));
    }

    #[test]
    fn romanized_breathing_trouble_is_critical() {
        let result = scan("saans lene mein problem hai");
        assert_eq!(result.level, UrgencyLevel::Critical);
        // Romanized phrases carry their clinical category, not a script tag.
        assert!(result.flags.iter().any(|f| f.starts_with("respiratory:")));
    }

    #[test]
    fn native_script_red_flag_is_critical() {
        let result = scan("छाती में दर्द हो रहा है");
        assert_eq!(result.level, UrgencyLevel::Critical);
    }

    #[test]
    fn high_fever_is_high_not_critical() {
        let result = scan("high fever since two days");
        assert_eq!(result.level, UrgencyLevel::High);
        assert!(!result.flags.is_empty());
    }

    #[test]
    fn plain_consultation_is_medium_with_no_flags() {
        let result = scan("mild headache since yesterday");
        assert_eq!(result.level, UrgencyLevel::Medium);
        assert!(result.flags.is_empty());
    }

    #[test]
    fn appending_critical_phrase_never_lowers_urgency() {
        let benign = ["mild headache since yesterday", "routine checkup", "i feel fine"];
        let critical = ["chest pain", "saans lene mein", "सांस लेने में तकलीफ"];
        for base_text in benign {
            let base = scan(base_text).level;
            for phrase in critical {
                let level = scan(&format!("{base_text} {phrase}")).level;
                assert!(level >= base, "{base_text} + {phrase}");
                assert_eq!(level, UrgencyLevel::Critical);
            }
        }
    }

    #[test]
    fn scan_never_returns_low() {
        for text in ["", "hello", "i feel fine", "routine checkup"] {
            assert!(scan(text).level >= UrgencyLevel::Medium);
        }
    }
}
