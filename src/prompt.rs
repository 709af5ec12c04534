//! System prompt assembly for the completion call.
//!
//! The prompt carries everything deterministic the pipeline already knows:
//! target language, regional and seasonal disease context, red flags, risk
//! assessment and the agents' findings. The model is asked to phrase, not
//! to triage.

use chrono::{Datelike, Utc};

use crate::language::Language;
use crate::types::{AgentResponse, PatientContext, RiskAssessment};

const DOCTOR_PREAMBLE: &str = "You are an experienced doctor practicing in India. You speak to \
patients warmly and simply, ask one or two clarifying questions when details are missing, and \
never give a definitive diagnosis over chat. For anything that sounds like an emergency, tell \
the patient to call 108 or go to the nearest hospital. Keep answers short: 3-5 sentences.";

const REGIONAL_DISEASES: &[(&str, &str)] = &[
    ("kerala", "leptospirosis, dengue, chikungunya"),
    ("karnataka", "dengue, chikungunya, Kyasanur forest disease"),
    ("tamil nadu", "dengue, typhoid, chikungunya"),
    ("bengal", "kala-azar, dengue, typhoid"),
    ("gujarat", "malaria, dengue, hepatitis"),
];

const ALL_STATES_DISEASES: &str = "dengue, malaria, typhoid, tuberculosis, viral fever";

/// Few-shot pairs keyed by condition keyword; at most two are included.
/// Hindi pairs anchor native-script output for the highest-volume language.
const HINDI_FEW_SHOT: &[(&str, &str, &str)] = &[
    (
        "fever",
        "मुझे दो दिन से बुखार है",
        "बुखार कितना है? क्या ठंड लगकर आता है? फिलहाल आराम करें, खूब पानी पिएं, और बुखार 101 से ऊपर जाए तो पैरासिटामोल लें।",
    ),
    (
        "headache",
        "सिर में दर्द हो रहा है",
        "दर्द कब से है? तेज़ धड़कता हुआ है या हल्का? अंधेरे कमरे में आराम करें और पानी पीते रहें।",
    ),
    (
        "cough",
        "खांसी आ रही है",
        "सूखी खांसी है या कफ आता है? शहद-अदरक वाली चाय लें और भाप लें। बुखार भी हो तो बताएं।",
    ),
];

/// Builds the system prompt for one turn.
pub struct PromptBuilder<'a> {
    ctx: &'a PatientContext,
    risk: Option<&'a RiskAssessment>,
    responses: &'a [AgentResponse],
    month: u32,
}

impl<'a> PromptBuilder<'a> {
    pub fn new(ctx: &'a PatientContext) -> Self {
        Self {
            ctx,
            risk: None,
            responses: &[],
            month: Utc::now().month(),
        }
    }

    pub fn with_risk(mut self, risk: &'a RiskAssessment) -> Self {
        self.risk = Some(risk);
        self
    }

    pub fn with_responses(mut self, responses: &'a [AgentResponse]) -> Self {
        self.responses = responses;
        self
    }

    /// Explicit 1-based month, for testing seasonal sections.
    pub fn with_month(mut self, month: u32) -> Self {
        self.month = month;
        self
    }

    pub fn build(self) -> String {
        let mut prompt = String::from(DOCTOR_PREAMBLE);
        prompt.push_str("\n\n");

        let language = self.ctx.detection.language;
        if language.is_indian() {
            let meta = language.metadata();
            prompt.push_str(&format!(
                "IMPORTANT: Respond ONLY in {} ({}). Do not mix in English words or Latin \
                 script; write numbers as digits if needed.\n\n",
                meta.name, meta.native_name
            ));
        }

        prompt.push_str(&format!(
            "Common diseases to keep in mind for this region: {}.\n",
            regional_diseases(self.ctx.location.as_deref())
        ));
        prompt.push_str(&format!(
            "Seasonal context: {}.\n\n",
            seasonal_context(self.month)
        ));

        if !self.ctx.emergency_flags.is_empty() {
            prompt.push_str(&format!(
                "RED FLAGS detected in this conversation: {}. Urge immediate care.\n\n",
                self.ctx.emergency_flags.join("; ")
            ));
        }

        if !self.ctx.allergies.is_empty() {
            prompt.push_str(&format!(
                "Known patient allergies: {}. Do not suggest anything containing these.\n\n",
                self.ctx.allergies.join(", ")
            ));
        }

        let mut demographics = Vec::new();
        if let Some(age) = self.ctx.age {
            demographics.push(format!("age {age}"));
        }
        if let Some(gender) = &self.ctx.gender {
            demographics.push(gender.clone());
        }
        if !demographics.is_empty() {
            prompt.push_str(&format!("Patient: {}.\n\n", demographics.join(", ")));
        }

        if let Some(risk) = self.risk {
            prompt.push_str(&format!(
                "Internal risk assessment: {:?} (score {}). Follow-up: {}.\n\n",
                risk.band, risk.display_score, risk.follow_up_timeline
            ));
        }

        if !self.responses.is_empty() {
            prompt.push_str("Specialist pipeline findings:\n");
            for response in self.responses {
                prompt.push_str(&format!(
                    "- [{}] {}\n",
                    response.role.label(),
                    response.assessment
                ));
            }
            prompt.push('\n');
        }

        if language == Language::Hindi {
            let examples = few_shot_for(&self.ctx.normalized_input);
            if !examples.is_empty() {
                prompt.push_str("Answer in this style:\n");
                for (patient, doctor) in examples {
                    prompt.push_str(&format!("Patient: {patient}\nDoctor: {doctor}\n"));
                }
            }
        }

        prompt
    }
}

fn regional_diseases(location: Option<&str>) -> &'static str {
    if let Some(location) = location {
        let lower = location.to_lowercase();
        for (region, diseases) in REGIONAL_DISEASES {
            if lower.contains(region) {
                return diseases;
            }
        }
    }
    ALL_STATES_DISEASES
}

fn seasonal_context(month: u32) -> &'static str {
    match month {
        6..=9 => "monsoon season; elevated dengue, malaria, leptospirosis and water-borne illness",
        10 => "post-monsoon; dengue cases typically peak",
        11 | 12 | 1 | 2 => "winter; respiratory infections and asthma flare-ups are common",
        _ => "summer; watch for heat exhaustion, dehydration and food-borne illness",
    }
}

/// Up to two few-shot pairs whose condition keyword appears in the input.
fn few_shot_for(normalized: &str) -> Vec<(&'static str, &'static str)> {
    HINDI_FEW_SHOT
        .iter()
        .filter(|(keyword, _, _)| normalized.contains(keyword))
        .map(|(_, patient, doctor)| (*patient, *doctor))
        .take(2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::LanguageDetectionResult;

    fn ctx(input: &str, language: Language) -> PatientContext {
        PatientContext {
            raw_input: input.to_string(),
            normalized_input: input.to_lowercase(),
            detection: LanguageDetectionResult {
                language,
                confidence: 0.8,
                is_indian_language: language.is_indian(),
            },
            age: None,
            gender: None,
            location: None,
            allergies: Vec::new(),
            emergency_flags: Vec::new(),
        }
    }

    #[test]
    fn hindi_prompt_forbids_latin_script() {
        let context = ctx("bukhar hai", Language::Hindi);
        let prompt = PromptBuilder::new(&context).build();
        assert!(prompt.contains("Respond ONLY in Hindi"));
        assert!(prompt.contains("हिंदी"));
    }

    #[test]
    fn english_prompt_has_no_language_constraint() {
        let context = ctx("i have a headache", Language::English);
        let prompt = PromptBuilder::new(&context).build();
        assert!(!prompt.contains("Respond ONLY"));
    }

    #[test]
    fn kerala_location_selects_regional_diseases() {
        let mut context = ctx("fever", Language::English);
        context.location = Some("Kochi, Kerala".to_string());
        let prompt = PromptBuilder::new(&context).build();
        assert!(prompt.contains("leptospirosis"));
    }

    #[test]
    fn unknown_location_falls_back_to_all_states() {
        let context = ctx("fever", Language::English);
        let prompt = PromptBuilder::new(&context).build();
        assert!(prompt.contains(ALL_STATES_DISEASES));
    }

    #[test]
    fn monsoon_month_mentions_dengue() {
        let context = ctx("fever", Language::English);
        let prompt = PromptBuilder::new(&context).with_month(7).build();
        assert!(prompt.contains("monsoon season"));
        let winter = PromptBuilder::new(&context).with_month(12).build();
        assert!(winter.contains("winter"));
    }

    #[test]
    fn red_flags_and_allergies_are_included() {
        let mut context = ctx("chest pain", Language::English);
        context.emergency_flags = vec!["cardiac: chest pain".to_string()];
        context.allergies = vec!["penicillin".to_string()];
        let prompt = PromptBuilder::new(&context).build();
        assert!(prompt.contains("RED FLAGS"));
        assert!(prompt.contains("penicillin"));
    }

    #[test]
    fn demographics_appear_when_known() {
        let mut context = ctx("fever", Language::English);
        context.age = Some(34);
        context.gender = Some("female".to_string());
        let prompt = PromptBuilder::new(&context).build();
        assert!(prompt.contains("Patient: age 34, female."));
    }

    #[test]
    fn few_shot_is_capped_at_two() {
        let examples = few_shot_for("fever headache cough sab kuch");
        assert_eq!(examples.len(), 2);
        assert!(few_shot_for("knee pain").is_empty());
    }
}
