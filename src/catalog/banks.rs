//! Standard question banks, metadata only. Item prose lives with the content
//! team; scoring needs ids, categories, polarity, and scale bounds.

use super::categories::{
    AttachmentCategory, ConflictMode, DifferentiationSubscale, EqDomain, GottmanCategory,
    HumanNeed, LoveLanguage, NegativePattern, PersonalityPole, Polarity,
};
use super::{
    ChoicePair, ForcedChoiceBank, InstrumentBank, QuestionCatalog, QuestionId, ScaleBounds,
    ScaleItem,
};

fn item<K>(id: QuestionId, category: K) -> ScaleItem<K> {
    ScaleItem {
        id,
        category,
        reverse_scored: false,
    }
}

fn reversed<K>(id: QuestionId, category: K) -> ScaleItem<K> {
    ScaleItem {
        id,
        category,
        reverse_scored: true,
    }
}

fn pair(id: QuestionId, option_a: LoveLanguage, option_b: LoveLanguage) -> ChoicePair {
    ChoicePair {
        id,
        option_a,
        option_b,
    }
}

pub(super) fn standard_catalog() -> QuestionCatalog {
    let scale = ScaleBounds::standard();

    QuestionCatalog {
        attachment: InstrumentBank::new(scale, attachment_items()),
        personality: InstrumentBank::new(scale, personality_items()),
        love_language: ForcedChoiceBank::new(love_language_pairs()),
        human_needs: InstrumentBank::new(scale, human_needs_items()),
        wellness_behavior: InstrumentBank::new(scale, wellness_behavior_items()),
        hormonal_health: InstrumentBank::new(scale, hormonal_health_items()),
        physical_vitality: InstrumentBank::new(scale, physical_vitality_items()),
        negative_patterns: InstrumentBank::new(scale, negative_patterns_items()),
        gottman_checkup: InstrumentBank::new(scale, gottman_items()),
        emotional_intelligence: InstrumentBank::new(scale, emotional_intelligence_items()),
        conflict_style: InstrumentBank::new(scale, conflict_style_items()),
        differentiation: InstrumentBank::new(scale, differentiation_items()),
    }
}

fn attachment_items() -> Vec<ScaleItem<AttachmentCategory>> {
    use AttachmentCategory::*;
    vec![
        item(1, Anxious),
        item(2, Avoidant),
        item(3, Secure),
        item(4, Dismissive),
        item(5, Anxious),
        item(6, Secure),
        item(7, Avoidant),
        item(8, Anxious),
        item(9, Dismissive),
        item(10, Fearful),
        item(11, Secure),
        item(12, Anxious),
    ]
}

fn personality_items() -> Vec<ScaleItem<PersonalityPole>> {
    use PersonalityPole::*;
    vec![
        item(1, E),
        item(2, S),
        item(3, T),
        item(4, J),
        item(5, E),
        item(6, N),
        item(7, F),
        item(8, P),
        item(9, I),
        item(10, N),
        item(11, T),
        item(12, J),
        item(13, I),
        item(14, N),
        item(15, F),
        item(16, P),
        item(17, E),
        item(18, N),
        item(19, T),
        item(20, J),
    ]
}

// Every language appears in exactly four pairs.
fn love_language_pairs() -> Vec<ChoicePair> {
    use LoveLanguage::*;
    vec![
        pair(1, WordsOfAffirmation, ActsOfService),
        pair(2, WordsOfAffirmation, ReceivingGifts),
        pair(3, WordsOfAffirmation, QualityTime),
        pair(4, WordsOfAffirmation, PhysicalTouch),
        pair(5, ActsOfService, ReceivingGifts),
        pair(6, ActsOfService, QualityTime),
        pair(7, ActsOfService, PhysicalTouch),
        pair(8, ReceivingGifts, QualityTime),
        pair(9, ReceivingGifts, PhysicalTouch),
        pair(10, QualityTime, PhysicalTouch),
    ]
}

fn human_needs_items() -> Vec<ScaleItem<HumanNeed>> {
    use HumanNeed::*;
    vec![
        item(1, Certainty),
        item(2, Variety),
        item(3, Significance),
        item(4, Connection),
        item(5, Growth),
        item(6, Contribution),
        item(7, Certainty),
        item(8, Variety),
        item(9, Significance),
        item(10, Connection),
        item(11, Growth),
        item(12, Contribution),
    ]
}

fn wellness_behavior_items() -> Vec<ScaleItem<Polarity>> {
    use Polarity::*;
    vec![
        item(1, Positive),
        reversed(2, Negative),
        reversed(3, Negative),
        item(4, Positive),
        reversed(5, Negative),
        item(6, Positive),
        reversed(7, Negative),
        item(8, Positive),
        reversed(9, Negative),
        item(10, Positive),
    ]
}

fn hormonal_health_items() -> Vec<ScaleItem<Polarity>> {
    use Polarity::*;
    vec![
        item(1, Positive),
        reversed(2, Negative),
        item(3, Positive),
        reversed(4, Negative),
        reversed(5, Negative),
        item(6, Positive),
        reversed(7, Negative),
        item(8, Positive),
        reversed(9, Negative),
        item(10, Positive),
    ]
}

fn physical_vitality_items() -> Vec<ScaleItem<Polarity>> {
    use Polarity::*;
    vec![
        item(1, Positive),
        item(2, Positive),
        reversed(3, Negative),
        item(4, Positive),
        reversed(5, Negative),
        item(6, Positive),
        reversed(7, Negative),
        item(8, Positive),
        reversed(9, Negative),
        item(10, Positive),
    ]
}

fn negative_patterns_items() -> Vec<ScaleItem<NegativePattern>> {
    use NegativePattern::*;
    vec![
        item(1, Criticism),
        item(2, Defensiveness),
        item(3, Disrespect),
        item(4, Withdrawal),
        item(5, Closeness),
        item(6, Closeness),
        item(7, Disrespect),
        item(8, Defensiveness),
        item(9, Criticism),
        item(10, Withdrawal),
        item(11, Closeness),
        item(12, Closeness),
        item(13, Disrespect),
        item(14, Defensiveness),
        item(15, Closeness),
    ]
}

fn gottman_items() -> Vec<ScaleItem<GottmanCategory>> {
    use GottmanCategory::*;
    vec![
        item(1, Criticism),
        item(2, Criticism),
        item(3, Contempt),
        item(4, Contempt),
        item(5, Defensiveness),
        item(6, Defensiveness),
        item(7, Stonewalling),
        item(8, Stonewalling),
        item(9, TurningToward),
        item(10, TurningToward),
        item(11, FondnessAdmiration),
        item(12, FondnessAdmiration),
        item(13, LoveMaps),
        item(14, LoveMaps),
        item(15, SharedMeaning),
        item(16, SharedMeaning),
        item(17, RepairAttempts),
        item(18, RepairAttempts),
    ]
}

fn emotional_intelligence_items() -> Vec<ScaleItem<EqDomain>> {
    use EqDomain::*;
    vec![
        item(1, SelfAwareness),
        item(2, SelfAwareness),
        item(3, SelfRegulation),
        item(4, SelfRegulation),
        item(5, Motivation),
        item(6, Motivation),
        item(7, Empathy),
        item(8, Empathy),
        item(9, SocialSkills),
        item(10, SocialSkills),
    ]
}

fn conflict_style_items() -> Vec<ScaleItem<ConflictMode>> {
    use ConflictMode::*;
    vec![
        item(1, Competing),
        item(2, Collaborating),
        item(3, Compromising),
        item(4, Avoiding),
        item(5, Accommodating),
        item(6, Competing),
        item(7, Collaborating),
        item(8, Compromising),
        item(9, Avoiding),
        item(10, Accommodating),
    ]
}

// Reactivity, cutoff, and fusion items are reverse-scored so higher subscale
// percentages always mean stronger differentiation.
fn differentiation_items() -> Vec<ScaleItem<DifferentiationSubscale>> {
    use DifferentiationSubscale::*;
    vec![
        reversed(1, EmotionalReactivity),
        reversed(2, EmotionalReactivity),
        reversed(3, EmotionalReactivity),
        item(4, IPosition),
        item(5, IPosition),
        item(6, IPosition),
        reversed(7, EmotionalCutoff),
        reversed(8, EmotionalCutoff),
        reversed(9, EmotionalCutoff),
        reversed(10, Fusion),
        reversed(11, Fusion),
        reversed(12, Fusion),
    ]
}
