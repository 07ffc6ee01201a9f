use chrono::{DateTime, TimeZone, Utc};
use pairbond::matchup::{CategoryDetail, ComparisonCategory};
use pairbond::scoring::{AttachmentStyle, ResponseSet};
use pairbond::{
    AssessmentKind, AssessmentScore, CompatibilityMatcher, ProfileAssessment, ScoringEngine,
};

fn at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, day, 12, 0, 0).unwrap()
}

fn scored(kind: AssessmentKind, values: &[(u16, i64)]) -> AssessmentScore {
    let responses: ResponseSet = values.iter().copied().collect();
    ScoringEngine::standard()
        .score(kind, &responses)
        .expect("valid submission")
}

fn record(day: u32, kind: AssessmentKind, values: &[(u16, i64)]) -> ProfileAssessment {
    ProfileAssessment::new(at(day), scored(kind, values))
}

const SECURE: &[(u16, i64)] = &[
    (1, 1),
    (2, 1),
    (3, 5),
    (4, 1),
    (5, 1),
    (6, 5),
    (7, 1),
    (8, 1),
    (9, 1),
    (10, 1),
    (11, 5),
    (12, 1),
];

const ANXIOUS: &[(u16, i64)] = &[
    (1, 5),
    (2, 1),
    (3, 1),
    (4, 1),
    (5, 5),
    (6, 1),
    (7, 1),
    (8, 5),
    (9, 1),
    (10, 5),
    (11, 1),
    (12, 5),
];

const AVOIDANT: &[(u16, i64)] = &[
    (1, 1),
    (2, 5),
    (3, 1),
    (4, 5),
    (5, 1),
    (6, 1),
    (7, 5),
    (8, 1),
    (9, 5),
    (10, 1),
    (11, 1),
    (12, 1),
];

const ESTJ: &[(u16, i64)] = &[
    (1, 5),
    (5, 5),
    (17, 5),
    (9, 1),
    (13, 1),
    (2, 5),
    (6, 1),
    (10, 1),
    (14, 1),
    (18, 1),
    (3, 5),
    (11, 5),
    (19, 5),
    (7, 1),
    (15, 1),
    (4, 5),
    (12, 5),
    (20, 5),
    (8, 1),
    (16, 1),
];

const INFP: &[(u16, i64)] = &[
    (1, 1),
    (5, 1),
    (17, 1),
    (9, 5),
    (13, 5),
    (2, 1),
    (6, 5),
    (10, 5),
    (14, 5),
    (18, 5),
    (3, 1),
    (11, 1),
    (19, 1),
    (7, 5),
    (15, 5),
    (4, 1),
    (12, 1),
    (20, 1),
    (8, 5),
    (16, 5),
];

const WELLNESS_STRONG: &[(u16, i64)] = &[
    (1, 5),
    (2, 1),
    (3, 1),
    (4, 5),
    (5, 1),
    (6, 5),
    (7, 1),
    (8, 5),
    (9, 1),
    (10, 5),
];

const PATTERNS_CALM: &[(u16, i64)] = &[
    (1, 1),
    (2, 1),
    (3, 1),
    (4, 1),
    (5, 5),
    (6, 5),
    (7, 1),
    (8, 1),
    (9, 1),
    (10, 1),
    (11, 5),
    (12, 5),
    (13, 1),
    (14, 1),
    (15, 5),
];

#[test]
fn two_empty_profiles_score_zero_without_notes() {
    let result = CompatibilityMatcher::new().score(&[], &[]);

    assert_eq!(result.overall_score, 0);
    assert_eq!(result.total_points, 0);
    assert_eq!(result.max_points, 100);
    assert!(result.details.is_empty());
    assert!(result.alignments.is_empty());
    assert!(result.misses.is_empty());
}

#[test]
fn pursue_withdraw_pairing_scores_against_the_full_denominator() {
    let partner_a = vec![record(1, AssessmentKind::Attachment, ANXIOUS)];
    let partner_b = vec![record(1, AssessmentKind::Attachment, AVOIDANT)];

    let result = CompatibilityMatcher::new().score(&partner_a, &partner_b);

    // One category at 20% of its 25-point share; the other three still count
    // toward the denominator.
    assert_eq!(result.total_points, 5);
    assert_eq!(result.max_points, 100);
    assert_eq!(result.overall_score, 5);
    assert_eq!(result.details.len(), 1);
    assert!(matches!(
        result.details[0],
        CategoryDetail::Attachment {
            style_a: AttachmentStyle::Anxious,
            style_b: AttachmentStyle::Avoidant,
        }
    ));
    assert!(result.alignments.is_empty());
    assert_eq!(result.misses.len(), 1);
    assert_eq!(result.misses[0].area, ComparisonCategory::Attachment);
}

#[test]
fn fully_aligned_partners_score_one_hundred() {
    let profile = |day| {
        vec![
            record(day, AssessmentKind::Attachment, SECURE),
            record(day, AssessmentKind::Personality, ESTJ),
            record(day, AssessmentKind::WellnessBehavior, WELLNESS_STRONG),
            record(day, AssessmentKind::NegativePatterns, PATTERNS_CALM),
        ]
    };

    let result = CompatibilityMatcher::new().score(&profile(1), &profile(2));

    assert_eq!(result.total_points, 100);
    assert_eq!(result.overall_score, 100);
    assert_eq!(result.details.len(), 4);
    assert_eq!(result.alignments.len(), 4);
    assert!(result.misses.is_empty());
}

#[test]
fn only_the_most_recent_record_per_instrument_counts() {
    // The newer anxious result supersedes the older secure one.
    let partner_a = vec![
        record(1, AssessmentKind::Attachment, SECURE),
        record(5, AssessmentKind::Attachment, ANXIOUS),
    ];
    let partner_b = vec![record(1, AssessmentKind::Attachment, AVOIDANT)];

    let result = CompatibilityMatcher::new().score(&partner_a, &partner_b);

    assert_eq!(result.overall_score, 5);
    assert_eq!(result.misses.len(), 1);
}

#[test]
fn opposite_personality_codes_earn_nothing_and_a_miss() {
    let partner_a = vec![record(1, AssessmentKind::Personality, ESTJ)];
    let partner_b = vec![record(1, AssessmentKind::Personality, INFP)];

    let result = CompatibilityMatcher::new().score(&partner_a, &partner_b);

    assert_eq!(result.total_points, 0);
    assert_eq!(result.overall_score, 0);
    let CategoryDetail::Personality {
        code_a,
        code_b,
        matches,
    } = &result.details[0]
    else {
        panic!("expected personality detail, got {:?}", result.details[0]);
    };
    assert_eq!(code_a, "ESTJ");
    assert_eq!(code_b, "INFP");
    assert_eq!(*matches, 0);
    assert_eq!(result.misses.len(), 1);
    assert_eq!(result.misses[0].area, ComparisonCategory::Personality);
}

#[test]
fn identical_personality_codes_earn_the_full_share() {
    let partner_a = vec![record(1, AssessmentKind::Personality, ESTJ)];
    let partner_b = vec![record(2, AssessmentKind::Personality, ESTJ)];

    let result = CompatibilityMatcher::new().score(&partner_a, &partner_b);

    assert_eq!(result.total_points, 25);
    assert_eq!(result.overall_score, 25);
    assert_eq!(result.alignments.len(), 1);
    assert!(result.misses.is_empty());
}

#[test]
fn one_secure_partner_earns_partial_attachment_credit() {
    let partner_a = vec![record(1, AssessmentKind::Attachment, SECURE)];
    let partner_b = vec![record(1, AssessmentKind::Attachment, ANXIOUS)];

    let result = CompatibilityMatcher::new().score(&partner_a, &partner_b);

    // 60% of the 25-point share, no note either way.
    assert_eq!(result.total_points, 15);
    assert!(result.alignments.is_empty());
    assert!(result.misses.is_empty());
}

#[test]
fn moderate_wellness_earns_the_middle_band() {
    // All 3s lands both partners at 60: average 60, gap 0.
    let moderate: Vec<(u16, i64)> = (1..=10).map(|id| (id, 3)).collect();
    let partner_a = vec![record(1, AssessmentKind::WellnessBehavior, &moderate)];
    let partner_b = vec![record(1, AssessmentKind::WellnessBehavior, &moderate)];

    let result = CompatibilityMatcher::new().score(&partner_a, &partner_b);

    assert_eq!(result.total_points, 15);
    assert!(matches!(
        result.details[0],
        CategoryDetail::Wellness {
            score_a: 60,
            score_b: 60,
        }
    ));
}

#[test]
fn categories_missing_from_one_side_are_skipped_not_zeroed() {
    // Partner B never took the attachment assessment; only wellness compares.
    let partner_a = vec![
        record(1, AssessmentKind::Attachment, SECURE),
        record(1, AssessmentKind::WellnessBehavior, WELLNESS_STRONG),
    ];
    let partner_b = vec![record(1, AssessmentKind::WellnessBehavior, WELLNESS_STRONG)];

    let result = CompatibilityMatcher::new().score(&partner_a, &partner_b);

    assert_eq!(result.total_points, 25);
    assert_eq!(result.overall_score, 25);
    assert_eq!(result.details.len(), 1);
    assert!(matches!(
        result.details[0],
        CategoryDetail::Wellness { .. }
    ));
}

#[test]
fn results_serialize_with_tagged_category_details() {
    let partner_a = vec![record(1, AssessmentKind::Attachment, ANXIOUS)];
    let partner_b = vec![record(1, AssessmentKind::Attachment, AVOIDANT)];

    let result = CompatibilityMatcher::new().score(&partner_a, &partner_b);
    let json = serde_json::to_value(&result).expect("serializable");

    assert_eq!(json["overall_score"], 5);
    assert_eq!(json["details"][0]["area"], "attachment");
    assert_eq!(json["details"][0]["style_a"], "anxious");
    assert_eq!(json["misses"][0]["area"], "attachment");
}
