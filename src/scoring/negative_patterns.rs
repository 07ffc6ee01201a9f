use super::aggregate::{category_percent, tally_categories};
use super::response::ResponseSet;
use crate::catalog::{InstrumentBank, NegativePattern};
use crate::error::ScoringError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NegativePatternsScore {
    pub criticism: u8,
    pub defensiveness: u8,
    pub disrespect: u8,
    pub withdrawal: u8,
    /// Normalized 0-100, defaulting to exactly 50 when no closeness items were
    /// answered.
    pub closeness: u8,
    /// Rounded mean of the four pattern percentages.
    pub overall_risk: u8,
}

pub(crate) fn score(
    bank: &InstrumentBank<NegativePattern>,
    responses: &ResponseSet,
) -> Result<NegativePatternsScore, ScoringError> {
    let tallies = tally_categories(responses, bank)?;

    let criticism = category_percent(&tallies, NegativePattern::Criticism).unwrap_or(0);
    let defensiveness = category_percent(&tallies, NegativePattern::Defensiveness).unwrap_or(0);
    let disrespect = category_percent(&tallies, NegativePattern::Disrespect).unwrap_or(0);
    let withdrawal = category_percent(&tallies, NegativePattern::Withdrawal).unwrap_or(0);
    let closeness = category_percent(&tallies, NegativePattern::Closeness).unwrap_or(50);

    let overall_risk = (f64::from(
        u32::from(criticism) + u32::from(defensiveness) + u32::from(disrespect)
            + u32::from(withdrawal),
    ) / 4.0)
        .round() as u8;

    Ok(NegativePatternsScore {
        criticism,
        defensiveness,
        disrespect,
        withdrawal,
        closeness,
        overall_risk,
    })
}
