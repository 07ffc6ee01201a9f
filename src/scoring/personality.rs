use super::response::ResponseSet;
use crate::catalog::{InstrumentBank, PersonalityPole};
use crate::error::ScoringError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw pole tallies for one dimension and the pole that won it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionTally {
    pub first: PersonalityPole,
    pub second: PersonalityPole,
    pub first_total: u32,
    pub second_total: u32,
    pub winner: PersonalityPole,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityScore {
    /// Four-letter type code, one winning pole per dimension.
    pub code: String,
    pub description: String,
    pub dimensions: Vec<DimensionTally>,
}

/// Tally raw scores per pole and pick each dimension's winner.
///
/// A strictly greater tally wins; ties resolve to the second pole of the pair
/// (I, N, F, P). This tie-break is load-bearing for reproducibility and must
/// not be reordered.
pub(crate) fn score(
    bank: &InstrumentBank<PersonalityPole>,
    responses: &ResponseSet,
) -> Result<PersonalityScore, ScoringError> {
    let scale = bank.scale();
    let mut totals: BTreeMap<PersonalityPole, u32> = BTreeMap::new();

    for item in bank.items() {
        let Some(answer) = responses.get(item.id) else {
            continue;
        };
        let value = answer
            .scale_value()
            .ok_or_else(|| ScoringError::NonNumericValue {
                question: item.id,
                value: answer.clone(),
            })?;
        if !scale.contains(value) {
            return Err(ScoringError::OutOfScale {
                question: item.id,
                value,
                min: scale.min,
                max: scale.max,
            });
        }
        *totals.entry(item.category).or_default() += value as u32;
    }

    let mut code = String::with_capacity(4);
    let mut dimensions = Vec::with_capacity(4);
    for (first, second) in PersonalityPole::dimensions() {
        let first_total = totals.get(&first).copied().unwrap_or(0);
        let second_total = totals.get(&second).copied().unwrap_or(0);
        let winner = if first_total > second_total {
            first
        } else {
            second
        };
        code.push(winner.letter());
        dimensions.push(DimensionTally {
            first,
            second,
            first_total,
            second_total,
            winner,
        });
    }

    Ok(PersonalityScore {
        description: type_description(&code).to_string(),
        code,
        dimensions,
    })
}

/// Immutable 16-entry description table with a generic fallback for any
/// unmapped code.
fn type_description(code: &str) -> &'static str {
    match code {
        "INTJ" => "The Architect - strategic and independent, guided by a long-range inner vision.",
        "INTP" => "The Logician - curious and analytical, at home in the world of ideas.",
        "ENTJ" => "The Commander - decisive and organized, drawn to leading and planning.",
        "ENTP" => "The Debater - quick-witted and inventive, energized by possibility.",
        "INFJ" => "The Advocate - insightful and principled, motivated by deep values.",
        "INFP" => "The Mediator - idealistic and empathetic, steered by an inner compass.",
        "ENFJ" => "The Protagonist - warm and persuasive, invested in others' growth.",
        "ENFP" => "The Campaigner - enthusiastic and imaginative, drawn to genuine connection.",
        "ISTJ" => "The Logistician - dependable and thorough, grounded in duty and follow-through.",
        "ISFJ" => "The Defender - loyal and considerate, attentive to others' needs.",
        "ESTJ" => "The Executive - structured and direct, committed to order and results.",
        "ESFJ" => "The Consul - sociable and caring, a builder of harmony and support.",
        "ISTP" => "The Virtuoso - practical and observant, calm under pressure.",
        "ISFP" => "The Adventurer - gentle and spontaneous, with a strong aesthetic sense.",
        "ESTP" => "The Entrepreneur - energetic and perceptive, focused on the here and now.",
        "ESFP" => "The Entertainer - lively and generous, drawn to shared experience.",
        _ => "A distinctive blend of preferences across all four dimensions.",
    }
}
