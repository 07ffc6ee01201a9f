use super::response::{ForcedChoice, ResponseSet};
use crate::catalog::{ForcedChoiceBank, LoveLanguage};
use crate::error::ScoringError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageTally {
    pub language: LoveLanguage,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoveLanguageScore {
    pub primary: LoveLanguage,
    pub secondary: LoveLanguage,
    /// All five buckets, descending by count; ties keep declared bucket order.
    pub ranking: Vec<LanguageTally>,
}

/// Each answered pair credits one point to the chosen option's language.
/// Skipped pairs contribute nothing; an answer that is present but not A/B is
/// a validation error.
pub(crate) fn score(
    bank: &ForcedChoiceBank,
    responses: &ResponseSet,
) -> Result<LoveLanguageScore, ScoringError> {
    let mut counts: BTreeMap<LoveLanguage, u32> =
        LoveLanguage::ordered().into_iter().map(|l| (l, 0)).collect();

    for pair in bank.pairs() {
        let Some(answer) = responses.get(pair.id) else {
            continue;
        };
        let chosen = match answer.choice() {
            Some(ForcedChoice::A) => pair.option_a,
            Some(ForcedChoice::B) => pair.option_b,
            None => {
                return Err(ScoringError::InvalidChoice {
                    question: pair.id,
                    value: answer.clone(),
                })
            }
        };
        *counts.entry(chosen).or_default() += 1;
    }

    // Stable sort preserves declared bucket order among equal counts.
    let mut ranking: Vec<LanguageTally> = LoveLanguage::ordered()
        .into_iter()
        .map(|language| LanguageTally {
            language,
            count: counts[&language],
        })
        .collect();
    ranking.sort_by(|a, b| b.count.cmp(&a.count));

    Ok(LoveLanguageScore {
        primary: ranking[0].language,
        secondary: ranking[1].language,
        ranking,
    })
}
