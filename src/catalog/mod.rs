//! Read-only question metadata consumed by every classifier.
//!
//! The catalog is the single source of truth for item-to-category mappings,
//! polarity, reverse-scoring flags, and scale bounds. Classifiers never carry
//! their own id tables, so question-bank changes cannot drift out of sync with
//! scoring.

mod banks;
mod categories;

pub use categories::{
    AttachmentCategory, ConflictMode, DifferentiationSubscale, EqDomain, GottmanCategory,
    HumanNeed, LoveLanguage, NegativePattern, PersonalityPole, Polarity,
};

pub type QuestionId = u16;

/// Inclusive bounds of a Likert-style answer scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleBounds {
    pub min: i64,
    pub max: i64,
}

impl ScaleBounds {
    /// The fixed 1-5 agreement scale used by every standard bank.
    pub const fn standard() -> Self {
        Self { min: 1, max: 5 }
    }

    pub const fn contains(self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Reverse-scoring inversion: on the standard scale this is `6 - value`.
    pub const fn invert(self, value: i64) -> i64 {
        self.min + self.max - value
    }
}

/// A single scale-rated item: which category it feeds and whether its raw
/// value must be inverted before aggregation.
#[derive(Debug, Clone, Copy)]
pub struct ScaleItem<K> {
    pub id: QuestionId,
    pub category: K,
    pub reverse_scored: bool,
}

/// All scale items of one instrument together with their shared bounds.
#[derive(Debug, Clone)]
pub struct InstrumentBank<K> {
    scale: ScaleBounds,
    items: Vec<ScaleItem<K>>,
}

impl<K> InstrumentBank<K> {
    pub fn new(scale: ScaleBounds, items: Vec<ScaleItem<K>>) -> Self {
        Self { scale, items }
    }

    pub fn scale(&self) -> ScaleBounds {
        self.scale
    }

    pub fn items(&self) -> &[ScaleItem<K>] {
        &self.items
    }
}

/// A two-option forced-choice item; each option credits one love language.
#[derive(Debug, Clone, Copy)]
pub struct ChoicePair {
    pub id: QuestionId,
    pub option_a: LoveLanguage,
    pub option_b: LoveLanguage,
}

#[derive(Debug, Clone)]
pub struct ForcedChoiceBank {
    pairs: Vec<ChoicePair>,
}

impl ForcedChoiceBank {
    pub fn new(pairs: Vec<ChoicePair>) -> Self {
        Self { pairs }
    }

    pub fn pairs(&self) -> &[ChoicePair] {
        &self.pairs
    }
}

/// Static per-instrument item metadata for the whole assessment suite.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    attachment: InstrumentBank<AttachmentCategory>,
    personality: InstrumentBank<PersonalityPole>,
    love_language: ForcedChoiceBank,
    human_needs: InstrumentBank<HumanNeed>,
    wellness_behavior: InstrumentBank<Polarity>,
    hormonal_health: InstrumentBank<Polarity>,
    physical_vitality: InstrumentBank<Polarity>,
    negative_patterns: InstrumentBank<NegativePattern>,
    gottman_checkup: InstrumentBank<GottmanCategory>,
    emotional_intelligence: InstrumentBank<EqDomain>,
    conflict_style: InstrumentBank<ConflictMode>,
    differentiation: InstrumentBank<DifferentiationSubscale>,
}

impl QuestionCatalog {
    /// The platform's standard question banks.
    pub fn standard() -> Self {
        banks::standard_catalog()
    }

    pub fn attachment(&self) -> &InstrumentBank<AttachmentCategory> {
        &self.attachment
    }

    pub fn personality(&self) -> &InstrumentBank<PersonalityPole> {
        &self.personality
    }

    pub fn love_language(&self) -> &ForcedChoiceBank {
        &self.love_language
    }

    pub fn human_needs(&self) -> &InstrumentBank<HumanNeed> {
        &self.human_needs
    }

    pub fn wellness_behavior(&self) -> &InstrumentBank<Polarity> {
        &self.wellness_behavior
    }

    pub fn hormonal_health(&self) -> &InstrumentBank<Polarity> {
        &self.hormonal_health
    }

    pub fn physical_vitality(&self) -> &InstrumentBank<Polarity> {
        &self.physical_vitality
    }

    pub fn negative_patterns(&self) -> &InstrumentBank<NegativePattern> {
        &self.negative_patterns
    }

    pub fn gottman_checkup(&self) -> &InstrumentBank<GottmanCategory> {
        &self.gottman_checkup
    }

    pub fn emotional_intelligence(&self) -> &InstrumentBank<EqDomain> {
        &self.emotional_intelligence
    }

    pub fn conflict_style(&self) -> &InstrumentBank<ConflictMode> {
        &self.conflict_style
    }

    pub fn differentiation(&self) -> &InstrumentBank<DifferentiationSubscale> {
        &self.differentiation
    }
}
