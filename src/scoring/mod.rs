//! Stateless assessment scoring: dispatch by instrument kind, aggregate raw
//! answers through the catalog metadata, and classify into typed scores.

pub(crate) mod aggregate;
mod attachment;
mod human_needs;
mod love_language;
mod negative_patterns;
mod personality;
mod profile;
mod ratio;
pub mod response;
mod wellness;

pub use attachment::{AttachmentScore, AttachmentStyle};
pub use human_needs::{HumanNeedsScore, NeedTally};
pub use love_language::{LanguageTally, LoveLanguageScore};
pub use negative_patterns::NegativePatternsScore;
pub use personality::{DimensionTally, PersonalityScore};
pub use profile::{
    CategoryScore, ConflictStyleScore, DifferentiationLevel, DifferentiationScore,
    EmotionalIntelligenceScore, EqLevel, GottmanScore, RelationshipHealthLevel,
};
pub use ratio::interaction_ratio;
pub use response::{AnswerValue, ForcedChoice, ResponseSet};
pub use wellness::{WellnessLevel, WellnessScore};

use crate::catalog::QuestionCatalog;
use crate::error::ScoringError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// The instrument types the engine can score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentKind {
    Attachment,
    Personality,
    LoveLanguage,
    HumanNeeds,
    WellnessBehavior,
    HormonalHealth,
    PhysicalVitality,
    NegativePatterns,
    GottmanCheckup,
    EmotionalIntelligence,
    ConflictStyle,
    Differentiation,
}

impl AssessmentKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Attachment => "attachment",
            Self::Personality => "personality",
            Self::LoveLanguage => "love_language",
            Self::HumanNeeds => "human_needs",
            Self::WellnessBehavior => "wellness_behavior",
            Self::HormonalHealth => "hormonal_health",
            Self::PhysicalVitality => "physical_vitality",
            Self::NegativePatterns => "negative_patterns",
            Self::GottmanCheckup => "gottman_checkup",
            Self::EmotionalIntelligence => "emotional_intelligence",
            Self::ConflictStyle => "conflict_style",
            Self::Differentiation => "differentiation",
        }
    }
}

impl fmt::Display for AssessmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssessmentKind {
    type Err = ScoringError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "attachment" => Ok(Self::Attachment),
            "personality" => Ok(Self::Personality),
            "love_language" => Ok(Self::LoveLanguage),
            "human_needs" => Ok(Self::HumanNeeds),
            "wellness_behavior" => Ok(Self::WellnessBehavior),
            "hormonal_health" => Ok(Self::HormonalHealth),
            "physical_vitality" => Ok(Self::PhysicalVitality),
            // Legacy clients still submit the long form.
            "negative_patterns" | "negative_patterns_closeness" => Ok(Self::NegativePatterns),
            "gottman_checkup" => Ok(Self::GottmanCheckup),
            "emotional_intelligence" => Ok(Self::EmotionalIntelligence),
            "conflict_style" => Ok(Self::ConflictStyle),
            "differentiation" => Ok(Self::Differentiation),
            other => Err(ScoringError::UnknownKind(other.to_string())),
        }
    }
}

/// Structured result of scoring one assessment submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "score", rename_all = "snake_case")]
pub enum AssessmentScore {
    Attachment(AttachmentScore),
    Personality(PersonalityScore),
    LoveLanguage(LoveLanguageScore),
    HumanNeeds(HumanNeedsScore),
    WellnessBehavior(WellnessScore),
    HormonalHealth(WellnessScore),
    PhysicalVitality(WellnessScore),
    NegativePatterns(NegativePatternsScore),
    GottmanCheckup(GottmanScore),
    EmotionalIntelligence(EmotionalIntelligenceScore),
    ConflictStyle(ConflictStyleScore),
    Differentiation(DifferentiationScore),
}

impl AssessmentScore {
    pub const fn kind(&self) -> AssessmentKind {
        match self {
            Self::Attachment(_) => AssessmentKind::Attachment,
            Self::Personality(_) => AssessmentKind::Personality,
            Self::LoveLanguage(_) => AssessmentKind::LoveLanguage,
            Self::HumanNeeds(_) => AssessmentKind::HumanNeeds,
            Self::WellnessBehavior(_) => AssessmentKind::WellnessBehavior,
            Self::HormonalHealth(_) => AssessmentKind::HormonalHealth,
            Self::PhysicalVitality(_) => AssessmentKind::PhysicalVitality,
            Self::NegativePatterns(_) => AssessmentKind::NegativePatterns,
            Self::GottmanCheckup(_) => AssessmentKind::GottmanCheckup,
            Self::EmotionalIntelligence(_) => AssessmentKind::EmotionalIntelligence,
            Self::ConflictStyle(_) => AssessmentKind::ConflictStyle,
            Self::Differentiation(_) => AssessmentKind::Differentiation,
        }
    }
}

/// Stateless scorer that applies the catalog metadata to raw submissions.
///
/// Safe to share across threads; every call depends only on its arguments.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    catalog: QuestionCatalog,
}

impl ScoringEngine {
    pub fn new(catalog: QuestionCatalog) -> Self {
        Self { catalog }
    }

    /// Engine over the platform's standard question banks.
    pub fn standard() -> Self {
        Self::new(QuestionCatalog::standard())
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// Score one submission. An entirely empty response set is rejected
    /// upfront rather than flowing into every classifier's default branch.
    pub fn score(
        &self,
        kind: AssessmentKind,
        responses: &ResponseSet,
    ) -> Result<AssessmentScore, ScoringError> {
        if responses.is_empty() {
            return Err(ScoringError::EmptyResponses { kind });
        }
        debug!(kind = %kind, answers = responses.len(), "scoring assessment");

        let catalog = &self.catalog;
        Ok(match kind {
            AssessmentKind::Attachment => {
                AssessmentScore::Attachment(attachment::score(catalog.attachment(), responses)?)
            }
            AssessmentKind::Personality => {
                AssessmentScore::Personality(personality::score(catalog.personality(), responses)?)
            }
            AssessmentKind::LoveLanguage => AssessmentScore::LoveLanguage(love_language::score(
                catalog.love_language(),
                responses,
            )?),
            AssessmentKind::HumanNeeds => {
                AssessmentScore::HumanNeeds(human_needs::score(catalog.human_needs(), responses)?)
            }
            AssessmentKind::WellnessBehavior => AssessmentScore::WellnessBehavior(wellness::score(
                catalog.wellness_behavior(),
                responses,
            )?),
            AssessmentKind::HormonalHealth => AssessmentScore::HormonalHealth(wellness::score(
                catalog.hormonal_health(),
                responses,
            )?),
            AssessmentKind::PhysicalVitality => AssessmentScore::PhysicalVitality(wellness::score(
                catalog.physical_vitality(),
                responses,
            )?),
            AssessmentKind::NegativePatterns => AssessmentScore::NegativePatterns(
                negative_patterns::score(catalog.negative_patterns(), responses)?,
            ),
            AssessmentKind::GottmanCheckup => AssessmentScore::GottmanCheckup(
                profile::score_gottman(catalog.gottman_checkup(), responses)?,
            ),
            AssessmentKind::EmotionalIntelligence => AssessmentScore::EmotionalIntelligence(
                profile::score_emotional_intelligence(
                    catalog.emotional_intelligence(),
                    responses,
                )?,
            ),
            AssessmentKind::ConflictStyle => AssessmentScore::ConflictStyle(
                profile::score_conflict_style(catalog.conflict_style(), responses)?,
            ),
            AssessmentKind::Differentiation => AssessmentScore::Differentiation(
                profile::score_differentiation(catalog.differentiation(), responses)?,
            ),
        })
    }
}
