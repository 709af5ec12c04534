//! Deterministic risk scoring.
//!
//! The score is additive and reproducible: the same context and month always
//! produce the same number. Critical symptom categories are worth 9 points
//! each and counted at most once per category, seasonal dengue/malaria risk
//! adds 6, elderly age 4, metro location 3.

use chrono::{Datelike, Utc};
use tracing::debug;

use crate::types::{
    AgentResponse, IndicatorCategory, PatientContext, RiskAssessment, RiskBand, RiskIndicator,
};

const CRITICAL_CATEGORY_POINTS: u8 = 9;
const SEASONAL_POINTS: u8 = 6;
const ELDERLY_POINTS: u8 = 4;
const METRO_POINTS: u8 = 3;

const ELDERLY_AGE: u8 = 60;
const DISPLAY_CAP: u8 = 20;

/// Monsoon months (1-based, June through September): dengue and malaria
/// season across most of India.
const MONSOON_MONTHS: std::ops::RangeInclusive<u32> = 6..=9;

const METRO_CITIES: &[&str] = &["mumbai", "delhi"];

const CRITICAL_PATTERNS: &[(IndicatorCategory, &[&str])] = &[
    (
        IndicatorCategory::Cardiac,
        &[
            "chest pain",
            "heart attack",
            "seene mein dard",
            "chhati mein dard",
            "palpitations",
        ],
    ),
    (
        IndicatorCategory::Respiratory,
        &[
            "difficulty breathing",
            "breathing difficulty",
            "shortness of breath",
            "cannot breathe",
            "saans lene mein",
        ],
    ),
    (
        IndicatorCategory::Neurological,
        &[
            "unconscious",
            "seizure",
            "stroke",
            "sudden weakness",
            "face drooping",
            "behosh",
        ],
    ),
    (
        IndicatorCategory::Bleeding,
        &[
            "heavy bleeding",
            "blood in vomit",
            "blood in stool",
            "coughing blood",
        ],
    ),
];

/// Score the turn using the current month for seasonal factors.
pub fn score(ctx: &PatientContext, responses: &[AgentResponse]) -> RiskAssessment {
    score_with_month(ctx, responses, Utc::now().month())
}

/// Score the turn with an explicit 1-based month. Split out so seasonal
/// behavior is testable without clock control.
pub fn score_with_month(
    ctx: &PatientContext,
    responses: &[AgentResponse],
    month: u32,
) -> RiskAssessment {
    let mut text = ctx.normalized_input.clone();
    for response in responses {
        text.push(' ');
        text.push_str(&response.assessment.to_lowercase());
    }

    let mut total: u8 = 0;
    let mut indicators = Vec::new();
    let mut emergency_flags = ctx.emergency_flags.clone();

    for (category, patterns) in CRITICAL_PATTERNS {
        // One hit per category; the first matching pattern names it.
        if let Some(pattern) = patterns.iter().find(|p| text.contains(*p)) {
            total += CRITICAL_CATEGORY_POINTS;
            let flag = format!("{}: {pattern}", category.label());
            if !emergency_flags.contains(&flag) {
                emergency_flags.push(flag);
            }
            // Attribute to the agent whose assessment surfaced the pattern;
            // a hit in the patient's own words stays unattributed.
            let source_agent = if ctx.normalized_input.contains(*pattern) {
                None
            } else {
                responses
                    .iter()
                    .find(|r| r.assessment.to_lowercase().contains(*pattern))
                    .map(|r| r.role)
            };
            indicators.push(RiskIndicator {
                id: format!("critical-{}", category.label()),
                category: *category,
                factor: format!("critical symptom: {pattern}"),
                description: format!(
                    "The conversation mentions a {} red flag (\"{pattern}\")",
                    category.label()
                ),
                points: CRITICAL_CATEGORY_POINTS,
                recommendation: "Call 108 or reach an emergency department".to_string(),
                regional_note: Some("108 is India's free emergency ambulance number".to_string()),
                source_agent,
            });
        }
    }

    if MONSOON_MONTHS.contains(&month) && text.contains("fever") && text.contains("headache") {
        total += SEASONAL_POINTS;
        indicators.push(RiskIndicator {
            id: "seasonal-monsoon".to_string(),
            category: IndicatorCategory::Seasonal,
            factor: "fever with headache in monsoon".to_string(),
            description: "Fever with headache during monsoon months raises dengue and malaria \
                          suspicion"
                .to_string(),
            points: SEASONAL_POINTS,
            recommendation: "Get a blood test if the fever lasts beyond two days".to_string(),
            regional_note: Some(
                "Dengue cases across India peak during and just after monsoon".to_string(),
            ),
            source_agent: None,
        });
    }

    if let Some(age) = ctx.age {
        if age > ELDERLY_AGE {
            total += ELDERLY_POINTS;
            indicators.push(RiskIndicator {
                id: "age-elderly".to_string(),
                category: IndicatorCategory::Age,
                factor: format!("elderly patient (age {age})"),
                description: "Patients over 60 deteriorate faster and under-report symptoms"
                    .to_string(),
                points: ELDERLY_POINTS,
                recommendation: "Prefer an in-person consultation over remote advice".to_string(),
                regional_note: None,
                source_agent: None,
            });
        }
    }

    if let Some(location) = &ctx.location {
        let lower = location.to_lowercase();
        if let Some(city) = METRO_CITIES.iter().find(|c| lower.contains(*c)) {
            total += METRO_POINTS;
            indicators.push(RiskIndicator {
                id: "location-metro".to_string(),
                category: IndicatorCategory::Location,
                factor: format!("high-density metro area ({city})"),
                description: "Dense urban areas carry higher transmission risk for communicable \
                              disease"
                    .to_string(),
                points: METRO_POINTS,
                recommendation: "Avoid crowded waiting rooms; consider tele-consultation for \
                                 follow-up"
                    .to_string(),
                regional_note: None,
                source_agent: None,
            });
        }
    }

    let band = band_for(total);
    debug!(score = total, ?band, "risk assessment computed");

    RiskAssessment {
        score: total,
        display_score: total.min(DISPLAY_CAP),
        band,
        indicators,
        emergency_flags,
        follow_up_timeline: follow_up_for(band).to_string(),
    }
}

/// Band thresholds for a raw score.
pub fn band_for(score: u8) -> RiskBand {
    match score {
        15.. => RiskBand::Critical,
        10..=14 => RiskBand::High,
        5..=9 => RiskBand::Moderate,
        _ => RiskBand::Low,
    }
}

fn follow_up_for(band: RiskBand) -> &'static str {
    match band {
        RiskBand::Critical => "Immediate: call 108 or reach an emergency department now",
        RiskBand::High => "Within 24 hours: see a doctor today",
        RiskBand::Moderate => "Within 2-3 days, sooner if symptoms worsen",
        RiskBand::Low => "Within 2-4 weeks if symptoms persist",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::{Language, LanguageDetectionResult};

    fn ctx(input: &str) -> PatientContext {
        PatientContext {
            raw_input: input.to_string(),
            normalized_input: input.to_lowercase(),
            detection: LanguageDetectionResult {
                language: Language::English,
                confidence: 0.9,
                is_indian_language: false,
            },
            age: None,
            gender: None,
            location: None,
            allergies: Vec::new(),
            emergency_flags: Vec::new(),
        }
    }

    #[test]
    fn band_thresholds_are_exact() {
        assert_eq!(band_for(0), RiskBand::Low);
        assert_eq!(band_for(4), RiskBand::Low);
        assert_eq!(band_for(5), RiskBand::Moderate);
        assert_eq!(band_for(9), RiskBand::Moderate);
        assert_eq!(band_for(10), RiskBand::High);
        assert_eq!(band_for(14), RiskBand::High);
        assert_eq!(band_for(15), RiskBand::Critical);
    }

    #[test]
    fn category_counted_once_despite_multiple_patterns() {
        let assessment = score_with_month(&ctx("chest pain and palpitations"), &[], 1);
        assert_eq!(assessment.score, 9);
        assert_eq!(assessment.indicators.len(), 1);
    }

    #[test]
    fn two_critical_categories_are_critical_band() {
        let assessment = score_with_month(&ctx("chest pain and difficulty breathing"), &[], 1);
        assert_eq!(assessment.score, 18);
        assert_eq!(assessment.band, RiskBand::Critical);
    }

    #[test]
    fn monsoon_fever_headache_scores_seasonal_points() {
        let july = score_with_month(&ctx("fever and headache since morning"), &[], 7);
        assert_eq!(july.score, 6);
        assert_eq!(july.band, RiskBand::Moderate);

        let january = score_with_month(&ctx("fever and headache since morning"), &[], 1);
        assert_eq!(january.score, 0);
        assert_eq!(january.band, RiskBand::Low);
    }

    #[test]
    fn age_and_metro_add_points() {
        let mut context = ctx("fever and headache");
        context.age = Some(65);
        context.location = Some("Mumbai".to_string());
        let assessment = score_with_month(&context, &[], 7);
        // 6 seasonal + 4 elderly + 3 metro
        assert_eq!(assessment.score, 13);
        assert_eq!(assessment.band, RiskBand::High);
    }

    #[test]
    fn age_sixty_exactly_does_not_count() {
        let mut context = ctx("fever");
        context.age = Some(60);
        let assessment = score_with_month(&context, &[], 1);
        assert_eq!(assessment.score, 0);
    }

    #[test]
    fn display_score_is_capped() {
        let assessment = score_with_month(
            &ctx("chest pain, difficulty breathing, seizure, heavy bleeding"),
            &[],
            1,
        );
        assert_eq!(assessment.score, 36);
        assert_eq!(assessment.display_score, 20);
    }

    #[test]
    fn critical_matches_append_category_named_flags() {
        let mut context = ctx("mujhe chest pain ho raha hai aur saans lene mein problem hai");
        context.emergency_flags = vec!["cardiac: chest pain".to_string()];
        let assessment = score_with_month(&context, &[], 1);
        assert!(
            assessment
                .emergency_flags
                .iter()
                .any(|f| f.starts_with("respiratory:"))
        );
        // A flag the scan already produced is not duplicated.
        assert_eq!(
            assessment
                .emergency_flags
                .iter()
                .filter(|f| f.as_str() == "cardiac: chest pain")
                .count(),
            1
        );
    }

    #[test]
    fn bleeding_missed_by_the_scan_still_gets_a_flag() {
        let assessment = score_with_month(&ctx("coughing blood since morning"), &[], 1);
        assert!(
            assessment
                .emergency_flags
                .iter()
                .any(|f| f.starts_with("bleeding:"))
        );
    }

    #[test]
    fn critical_indicator_carries_identity_and_recommendation() {
        let assessment = score_with_month(&ctx("chest pain"), &[], 1);
        let indicator = &assessment.indicators[0];
        assert_eq!(indicator.id, "critical-cardiac");
        assert_eq!(indicator.category, IndicatorCategory::Cardiac);
        assert!(indicator.recommendation.contains("108"));
        // The pattern came from the patient's own words.
        assert_eq!(indicator.source_agent, None);
    }

    #[test]
    fn same_input_same_score() {
        let a = score_with_month(&ctx("chest pain and fever"), &[], 7);
        let b = score_with_month(&ctx("chest pain and fever"), &[], 7);
        assert_eq!(a.score, b.score);
        assert_eq!(a.indicators.len(), b.indicators.len());
    }
}
