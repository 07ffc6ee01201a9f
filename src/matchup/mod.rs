//! Partner compatibility matching over two users' assessment score sets.

mod rules;

pub use rules::CategoryDetail;

use crate::scoring::{AssessmentKind, AssessmentScore};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// The score areas compared between partners, each worth an even share of the
/// 100-point total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonCategory {
    Attachment,
    Personality,
    Wellness,
    NegativePatterns,
}

impl ComparisonCategory {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Attachment,
            Self::Personality,
            Self::Wellness,
            Self::NegativePatterns,
        ]
    }

    /// Even weighting: 100 points split across the defined categories.
    pub const fn ceiling() -> u32 {
        100 / Self::ordered().len() as u32
    }
}

/// One stored assessment result for a user. The matcher keeps only the most
/// recent record per instrument type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileAssessment {
    pub completed_at: DateTime<Utc>,
    pub score: AssessmentScore,
}

impl ProfileAssessment {
    pub fn new(completed_at: DateTime<Utc>, score: AssessmentScore) -> Self {
        Self {
            completed_at,
            score,
        }
    }

    pub const fn kind(&self) -> AssessmentKind {
        self.score.kind()
    }
}

/// A categorized alignment or mismatch annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityNote {
    pub area: ComparisonCategory,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    /// 0-100. The denominator is the full possible-category total, so a single
    /// present category at partial credit yields a small overall number rather
    /// than a renormalized percentage.
    pub overall_score: u8,
    pub total_points: u32,
    pub max_points: u32,
    /// Per-category comparison detail, only for categories present in both
    /// profiles.
    pub details: Vec<CategoryDetail>,
    pub alignments: Vec<CompatibilityNote>,
    pub misses: Vec<CompatibilityNote>,
}

/// Stateless matcher combining two partners' score collections.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompatibilityMatcher;

impl CompatibilityMatcher {
    pub fn new() -> Self {
        Self
    }

    pub fn score(
        &self,
        partner_a: &[ProfileAssessment],
        partner_b: &[ProfileAssessment],
    ) -> CompatibilityResult {
        let latest_a = latest_by_kind(partner_a);
        let latest_b = latest_by_kind(partner_b);
        let ceiling = ComparisonCategory::ceiling();

        let mut total_points = 0u32;
        let mut max_points = 0u32;
        let mut details = Vec::new();
        let mut alignments = Vec::new();
        let mut misses = Vec::new();

        for category in ComparisonCategory::ordered() {
            max_points += ceiling;
            // Categories missing from either side earn nothing and emit no
            // notes; they are never scored as zero-point mismatches.
            let Some(outcome) = rules::compare(category, &latest_a, &latest_b, ceiling) else {
                continue;
            };
            total_points += outcome.points;
            details.push(outcome.detail);
            if let Some(note) = outcome.alignment {
                alignments.push(CompatibilityNote {
                    area: category,
                    note,
                });
            }
            if let Some(note) = outcome.miss {
                misses.push(CompatibilityNote {
                    area: category,
                    note,
                });
            }
        }

        let overall_score = if max_points > 0 {
            (f64::from(total_points) * 100.0 / f64::from(max_points)).round() as u8
        } else {
            0
        };
        debug!(
            overall_score,
            compared = details.len(),
            "calculated matchup score"
        );

        CompatibilityResult {
            overall_score,
            total_points,
            max_points,
            details,
            alignments,
            misses,
        }
    }
}

/// Index a user's records by instrument type, keeping the latest completion
/// for each.
fn latest_by_kind(records: &[ProfileAssessment]) -> BTreeMap<AssessmentKind, &ProfileAssessment> {
    let mut latest: BTreeMap<AssessmentKind, &ProfileAssessment> = BTreeMap::new();
    for record in records {
        match latest.entry(record.kind()) {
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(record);
            }
            std::collections::btree_map::Entry::Occupied(mut slot) => {
                if record.completed_at >= slot.get().completed_at {
                    slot.insert(record);
                }
            }
        }
    }
    latest
}
