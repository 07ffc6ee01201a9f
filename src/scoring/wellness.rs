use super::aggregate::tally_categories;
use super::response::ResponseSet;
use crate::catalog::{InstrumentBank, Polarity};
use crate::error::ScoringError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WellnessLevel {
    High,
    Medium,
    Low,
}

/// Combined-score shape shared by the wellness_behavior, hormonal_health, and
/// physical_vitality screeners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellnessScore {
    /// Normalized 0-100 over the items actually answered.
    pub score: u8,
    pub level: WellnessLevel,
    pub raw_score: i64,
    pub max_score: i64,
}

/// Positive items count directly, negative-polarity items arrive
/// reverse-scored from the aggregator, and the combined total normalizes to
/// 0-100.
pub(crate) fn score(
    bank: &InstrumentBank<Polarity>,
    responses: &ResponseSet,
) -> Result<WellnessScore, ScoringError> {
    let tallies = tally_categories(responses, bank)?;

    let mut raw_score = 0i64;
    let mut max_score = 0i64;
    for polarity in [Polarity::Positive, Polarity::Negative] {
        if let Some(tally) = tallies.get(&polarity) {
            raw_score += tally.raw_sum;
            max_score += tally.achievable_max;
        }
    }

    let score = if max_score > 0 {
        (raw_score as f64 / max_score as f64 * 100.0).round() as u8
    } else {
        0
    };
    let level = if score >= 70 {
        WellnessLevel::High
    } else if score >= 40 {
        WellnessLevel::Medium
    } else {
        WellnessLevel::Low
    };

    Ok(WellnessScore {
        score,
        level,
        raw_score,
        max_score,
    })
}
