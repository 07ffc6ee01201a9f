use super::{ComparisonCategory, ProfileAssessment};
use crate::scoring::{
    AssessmentKind, AssessmentScore, AttachmentScore, AttachmentStyle, NegativePatternsScore,
    PersonalityScore, WellnessScore,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What the matcher recorded about one compared category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "area", rename_all = "snake_case")]
pub enum CategoryDetail {
    Attachment {
        style_a: AttachmentStyle,
        style_b: AttachmentStyle,
    },
    Personality {
        code_a: String,
        code_b: String,
        matches: u8,
    },
    Wellness {
        score_a: u8,
        score_b: u8,
    },
    NegativePatterns {
        risk_a: u8,
        risk_b: u8,
        closeness_a: u8,
        closeness_b: u8,
    },
}

pub(super) struct CategoryOutcome {
    pub points: u32,
    pub detail: CategoryDetail,
    pub alignment: Option<String>,
    pub miss: Option<String>,
}

type LatestScores<'a> = BTreeMap<AssessmentKind, &'a ProfileAssessment>;

/// Compare one category, or `None` when either partner has no score for it.
pub(super) fn compare(
    category: ComparisonCategory,
    partner_a: &LatestScores<'_>,
    partner_b: &LatestScores<'_>,
    ceiling: u32,
) -> Option<CategoryOutcome> {
    match category {
        ComparisonCategory::Attachment => Some(compare_attachment(
            attachment_of(partner_a)?,
            attachment_of(partner_b)?,
            ceiling,
        )),
        ComparisonCategory::Personality => Some(compare_personality(
            personality_of(partner_a)?,
            personality_of(partner_b)?,
            ceiling,
        )),
        ComparisonCategory::Wellness => Some(compare_wellness(
            wellness_of(partner_a)?,
            wellness_of(partner_b)?,
            ceiling,
        )),
        ComparisonCategory::NegativePatterns => Some(compare_negative_patterns(
            negative_patterns_of(partner_a)?,
            negative_patterns_of(partner_b)?,
            ceiling,
        )),
    }
}

fn attachment_of<'a>(latest: &LatestScores<'a>) -> Option<&'a AttachmentScore> {
    match &latest.get(&AssessmentKind::Attachment)?.score {
        AssessmentScore::Attachment(score) => Some(score),
        _ => None,
    }
}

fn personality_of<'a>(latest: &LatestScores<'a>) -> Option<&'a PersonalityScore> {
    match &latest.get(&AssessmentKind::Personality)?.score {
        AssessmentScore::Personality(score) => Some(score),
        _ => None,
    }
}

fn wellness_of<'a>(latest: &LatestScores<'a>) -> Option<&'a WellnessScore> {
    match &latest.get(&AssessmentKind::WellnessBehavior)?.score {
        AssessmentScore::WellnessBehavior(score) => Some(score),
        _ => None,
    }
}

fn negative_patterns_of<'a>(latest: &LatestScores<'a>) -> Option<&'a NegativePatternsScore> {
    match &latest.get(&AssessmentKind::NegativePatterns)?.score {
        AssessmentScore::NegativePatterns(score) => Some(score),
        _ => None,
    }
}

/// Rounded share of the category ceiling.
fn portion(ceiling: u32, percent: u32) -> u32 {
    (f64::from(ceiling) * f64::from(percent) / 100.0).round() as u32
}

fn compare_attachment(
    a: &AttachmentScore,
    b: &AttachmentScore,
    ceiling: u32,
) -> CategoryOutcome {
    use AttachmentStyle::{Anxious, Avoidant, Secure};

    let detail = CategoryDetail::Attachment {
        style_a: a.style,
        style_b: b.style,
    };

    if a.style == Secure && b.style == Secure {
        return CategoryOutcome {
            points: ceiling,
            detail,
            alignment: Some(
                "Both partners report a secure attachment style, a strong foundation of \
                 safety and trust."
                    .to_string(),
            ),
            miss: None,
        };
    }
    if a.style == Secure || b.style == Secure {
        return CategoryOutcome {
            points: portion(ceiling, 60),
            detail,
            alignment: None,
            miss: None,
        };
    }
    let pursue_withdraw = (a.style == Anxious && b.style == Avoidant)
        || (a.style == Avoidant && b.style == Anxious);
    if pursue_withdraw {
        return CategoryOutcome {
            points: portion(ceiling, 20),
            detail,
            alignment: None,
            miss: Some(
                "Anxious and avoidant styles tend to lock into a pursue-withdraw cycle; \
                 naming the pattern is the first step out of it."
                    .to_string(),
            ),
        };
    }
    CategoryOutcome {
        points: portion(ceiling, 40),
        detail,
        alignment: None,
        miss: None,
    }
}

fn compare_personality(
    a: &PersonalityScore,
    b: &PersonalityScore,
    ceiling: u32,
) -> CategoryOutcome {
    let matches = a
        .code
        .chars()
        .zip(b.code.chars())
        .take(4)
        .filter(|(left, right)| left == right)
        .count() as u8;

    let points = (f64::from(matches) / 4.0 * f64::from(ceiling)).round() as u32;
    let alignment = (matches >= 3).then(|| {
        format!(
            "Strong personality alignment ({matches}/4 dimensions match); you naturally \
             understand each other's approach."
        )
    });
    let miss = (matches <= 1).then(|| {
        "Very different personality styles; understanding each other's wiring will take \
         patience."
            .to_string()
    });

    CategoryOutcome {
        points,
        detail: CategoryDetail::Personality {
            code_a: a.code.clone(),
            code_b: b.code.clone(),
            matches,
        },
        alignment,
        miss,
    }
}

fn compare_wellness(a: &WellnessScore, b: &WellnessScore, ceiling: u32) -> CategoryOutcome {
    let average = (f64::from(a.score) + f64::from(b.score)) / 2.0;
    let gap = (f64::from(a.score) - f64::from(b.score)).abs();

    let detail = CategoryDetail::Wellness {
        score_a: a.score,
        score_b: b.score,
    };

    if average >= 70.0 && gap < 20.0 {
        CategoryOutcome {
            points: ceiling,
            detail,
            alignment: Some(
                "Both partners maintain strong wellness habits at a similar level.".to_string(),
            ),
            miss: None,
        }
    } else if average >= 50.0 {
        CategoryOutcome {
            points: portion(ceiling, 60),
            detail,
            alignment: None,
            miss: None,
        }
    } else {
        CategoryOutcome {
            points: portion(ceiling, 20),
            detail,
            alignment: None,
            miss: Some(
                "Wellness habits are a shared growth area; supporting each other here pays \
                 off quickly."
                    .to_string(),
            ),
        }
    }
}

fn compare_negative_patterns(
    a: &NegativePatternsScore,
    b: &NegativePatternsScore,
    ceiling: u32,
) -> CategoryOutcome {
    let average_risk = (f64::from(a.overall_risk) + f64::from(b.overall_risk)) / 2.0;
    let average_closeness = (f64::from(a.closeness) + f64::from(b.closeness)) / 2.0;

    let detail = CategoryDetail::NegativePatterns {
        risk_a: a.overall_risk,
        risk_b: b.overall_risk,
        closeness_a: a.closeness,
        closeness_b: b.closeness,
    };

    if average_risk < 30.0 && average_closeness > 70.0 {
        CategoryOutcome {
            points: ceiling,
            detail,
            alignment: Some(
                "Low negative-interaction patterns and high closeness on both sides."
                    .to_string(),
            ),
            miss: None,
        }
    } else if average_risk < 50.0 {
        CategoryOutcome {
            points: portion(ceiling, 60),
            detail,
            alignment: None,
            miss: None,
        }
    } else {
        CategoryOutcome {
            points: portion(ceiling, 20),
            detail,
            alignment: None,
            miss: Some(
                "Frequent negative interaction patterns on one or both sides; reducing \
                 criticism and withdrawal should come first."
                    .to_string(),
            ),
        }
    }
}
