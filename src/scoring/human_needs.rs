use super::aggregate::{category_percent, tally_categories};
use super::response::ResponseSet;
use crate::catalog::{HumanNeed, InstrumentBank};
use crate::error::ScoringError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeedTally {
    pub need: HumanNeed,
    /// Normalized 0-100; 0 when no items of the need were answered.
    pub percentage: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HumanNeedsScore {
    pub top_two: [HumanNeed; 2],
    /// All six needs, descending by percentage; ties keep declared need order.
    pub ranking: Vec<NeedTally>,
}

pub(crate) fn score(
    bank: &InstrumentBank<HumanNeed>,
    responses: &ResponseSet,
) -> Result<HumanNeedsScore, ScoringError> {
    let tallies = tally_categories(responses, bank)?;

    // An answered need scores at least 20 on the 1-5 scale, so unanswered
    // needs (0) always rank behind answered ones.
    let mut ranking: Vec<NeedTally> = HumanNeed::ordered()
        .into_iter()
        .map(|need| NeedTally {
            need,
            percentage: category_percent(&tallies, need).unwrap_or(0),
        })
        .collect();
    ranking.sort_by(|a, b| b.percentage.cmp(&a.percentage));

    Ok(HumanNeedsScore {
        top_two: [ranking[0].need, ranking[1].need],
        ranking,
    })
}
