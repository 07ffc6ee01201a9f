use super::aggregate::{category_percent, merged_percent, tally_categories};
use super::response::ResponseSet;
use crate::catalog::{AttachmentCategory, InstrumentBank};
use crate::error::ScoringError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttachmentStyle {
    Secure,
    Anxious,
    Avoidant,
    DismissiveFearful,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentScore {
    pub style: AttachmentStyle,
    /// Normalized dimension scores in 0-100; 0 when no items of the dimension
    /// were answered.
    pub secure: u8,
    pub anxiety: u8,
    pub avoidance: u8,
}

fn above(value: Option<u8>, threshold: u8) -> bool {
    value.map_or(false, |v| v > threshold)
}

fn below(value: Option<u8>, threshold: u8) -> bool {
    value.map_or(false, |v| v < threshold)
}

/// Classify attachment style from the three dimension percentages.
///
/// The rules are ordered and use strict inequalities; an unanswered dimension
/// fails every comparison, so boundary and missing data both fall through to
/// the documented secure default.
pub(crate) fn score(
    bank: &InstrumentBank<AttachmentCategory>,
    responses: &ResponseSet,
) -> Result<AttachmentScore, ScoringError> {
    let tallies = tally_categories(responses, bank)?;

    let secure = category_percent(&tallies, AttachmentCategory::Secure);
    let anxiety = merged_percent(
        &tallies,
        &[AttachmentCategory::Anxious, AttachmentCategory::Fearful],
    );
    let avoidance = merged_percent(
        &tallies,
        &[AttachmentCategory::Avoidant, AttachmentCategory::Dismissive],
    );

    let style = if above(secure, 60) && below(anxiety, 40) && below(avoidance, 40) {
        AttachmentStyle::Secure
    } else if above(anxiety, 60) && below(avoidance, 50) {
        AttachmentStyle::Anxious
    } else if above(avoidance, 60) && below(anxiety, 50) {
        AttachmentStyle::Avoidant
    } else if above(anxiety, 50) && above(avoidance, 50) {
        AttachmentStyle::DismissiveFearful
    } else {
        AttachmentStyle::Secure
    };

    Ok(AttachmentScore {
        style,
        secure: secure.unwrap_or(0),
        anxiety: anxiety.unwrap_or(0),
        avoidance: avoidance.unwrap_or(0),
    })
}
