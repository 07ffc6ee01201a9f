//! Aggregate-then-normalize instruments that report a per-category profile:
//! Gottman checkup, emotional intelligence, conflict style, and
//! differentiation of self.

use super::aggregate::{mean_percent, tally_categories, CategoryTally};
use super::ratio::interaction_ratio;
use super::response::ResponseSet;
use crate::catalog::{
    ConflictMode, DifferentiationSubscale, EqDomain, GottmanCategory, InstrumentBank,
};
use crate::error::ScoringError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One answered category of a profile instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore<K> {
    pub category: K,
    pub percentage: u8,
}

fn answered_scores<K: Ord + Copy>(tallies: &BTreeMap<K, CategoryTally>) -> Vec<CategoryScore<K>> {
    tallies
        .iter()
        .filter_map(|(category, tally)| {
            tally.rounded_percentage().map(|percentage| CategoryScore {
                category: *category,
                percentage,
            })
        })
        .collect()
}

fn mean_of<K>(scores: &[CategoryScore<K>]) -> Option<u8> {
    mean_percent(
        &scores
            .iter()
            .map(|score| Some(score.percentage))
            .collect::<Vec<_>>(),
    )
}

// --- Gottman checkup ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipHealthLevel {
    Thriving,
    Healthy,
    Struggling,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GottmanScore {
    pub horsemen: Vec<CategoryScore<GottmanCategory>>,
    pub strengths: Vec<CategoryScore<GottmanCategory>>,
    /// Rounded mean of the answered horsemen percentages; lower is better.
    pub horsemen_severity: u8,
    /// Rounded mean of the answered strength percentages; higher is better.
    pub strength_score: u8,
    /// 0-100 blend of strengths against horsemen severity.
    pub overall_health: u8,
    pub level: RelationshipHealthLevel,
    /// Approximate positive-to-negative interaction ratio.
    pub estimated_ratio: f64,
}

pub(crate) fn score_gottman(
    bank: &InstrumentBank<GottmanCategory>,
    responses: &ResponseSet,
) -> Result<GottmanScore, ScoringError> {
    let tallies = tally_categories(responses, bank)?;
    let all = answered_scores(&tallies);

    let (horsemen, strengths): (Vec<_>, Vec<_>) = all
        .into_iter()
        .partition(|score| score.category.is_horseman());

    let horsemen_severity = mean_of(&horsemen).unwrap_or(0);
    let strength_score = mean_of(&strengths).unwrap_or(0);

    let blended =
        (f64::from(strength_score) * 0.6 + (100.0 - f64::from(horsemen_severity)) * 0.4).round();
    let overall_health = blended.clamp(0.0, 100.0) as u8;

    let level = if overall_health >= 80 {
        RelationshipHealthLevel::Thriving
    } else if overall_health >= 60 {
        RelationshipHealthLevel::Healthy
    } else if overall_health >= 40 {
        RelationshipHealthLevel::Struggling
    } else {
        RelationshipHealthLevel::Critical
    };

    Ok(GottmanScore {
        estimated_ratio: interaction_ratio(
            f64::from(strength_score),
            f64::from(horsemen_severity),
        ),
        horsemen,
        strengths,
        horsemen_severity,
        strength_score,
        overall_health,
        level,
    })
}

// --- Emotional intelligence ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EqLevel {
    Exceptional,
    Strong,
    Developing,
    Emerging,
    Foundational,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionalIntelligenceScore {
    pub domains: Vec<CategoryScore<EqDomain>>,
    /// Rounded mean of the answered domain percentages.
    pub overall: u8,
    pub level: EqLevel,
}

pub(crate) fn score_emotional_intelligence(
    bank: &InstrumentBank<EqDomain>,
    responses: &ResponseSet,
) -> Result<EmotionalIntelligenceScore, ScoringError> {
    let tallies = tally_categories(responses, bank)?;
    let domains = answered_scores(&tallies);
    let overall = mean_of(&domains).unwrap_or(0);

    let level = if overall >= 80 {
        EqLevel::Exceptional
    } else if overall >= 65 {
        EqLevel::Strong
    } else if overall >= 50 {
        EqLevel::Developing
    } else if overall >= 35 {
        EqLevel::Emerging
    } else {
        EqLevel::Foundational
    };

    Ok(EmotionalIntelligenceScore {
        domains,
        overall,
        level,
    })
}

// --- Conflict style ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictStyleScore {
    pub primary: ConflictMode,
    pub secondary: ConflictMode,
    pub modes: Vec<CategoryScore<ConflictMode>>,
}

pub(crate) fn score_conflict_style(
    bank: &InstrumentBank<ConflictMode>,
    responses: &ResponseSet,
) -> Result<ConflictStyleScore, ScoringError> {
    let tallies = tally_categories(responses, bank)?;

    // Stable sort over declared mode order keeps ties deterministic.
    let mut ranked: Vec<CategoryScore<ConflictMode>> = ConflictMode::ordered()
        .into_iter()
        .filter_map(|mode| {
            tallies
                .get(&mode)
                .and_then(CategoryTally::rounded_percentage)
                .map(|percentage| CategoryScore {
                    category: mode,
                    percentage,
                })
        })
        .collect();
    ranked.sort_by(|a, b| b.percentage.cmp(&a.percentage));

    let primary = ranked
        .first()
        .map_or(ConflictMode::Collaborating, |score| score.category);
    let secondary = ranked
        .get(1)
        .map_or(ConflictMode::Compromising, |score| score.category);

    Ok(ConflictStyleScore {
        primary,
        secondary,
        modes: ranked,
    })
}

// --- Differentiation of self ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DifferentiationLevel {
    WellDifferentiated,
    ModeratelyDifferentiated,
    LowDifferentiation,
    Undifferentiated,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifferentiationScore {
    /// Subscale percentages where higher always means stronger
    /// differentiation; the reactivity, cutoff, and fusion items are
    /// reverse-scored by the catalog.
    pub subscales: Vec<CategoryScore<DifferentiationSubscale>>,
    pub overall: u8,
    pub level: DifferentiationLevel,
}

pub(crate) fn score_differentiation(
    bank: &InstrumentBank<DifferentiationSubscale>,
    responses: &ResponseSet,
) -> Result<DifferentiationScore, ScoringError> {
    let tallies = tally_categories(responses, bank)?;
    let subscales = answered_scores(&tallies);
    let overall = mean_of(&subscales).unwrap_or(0);

    let level = if overall >= 75 {
        DifferentiationLevel::WellDifferentiated
    } else if overall >= 55 {
        DifferentiationLevel::ModeratelyDifferentiated
    } else if overall >= 35 {
        DifferentiationLevel::LowDifferentiation
    } else {
        DifferentiationLevel::Undifferentiated
    };

    Ok(DifferentiationScore {
        subscales,
        overall,
        level,
    })
}
