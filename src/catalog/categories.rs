use serde::{Deserialize, Serialize};

/// Fine-grained attachment item categories. The classifier folds anxious and
/// fearful items into the anxiety dimension, avoidant and dismissive items
/// into the avoidance dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentCategory {
    Secure,
    Anxious,
    Fearful,
    Avoidant,
    Dismissive,
}

/// One pole of a personality dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PersonalityPole {
    E,
    I,
    S,
    N,
    T,
    F,
    J,
    P,
}

impl PersonalityPole {
    pub const fn letter(self) -> char {
        match self {
            Self::E => 'E',
            Self::I => 'I',
            Self::S => 'S',
            Self::N => 'N',
            Self::T => 'T',
            Self::F => 'F',
            Self::J => 'J',
            Self::P => 'P',
        }
    }

    /// The four dimensions as (first, second) pole pairs. Tie-breaks resolve
    /// to the second pole of each pair.
    pub const fn dimensions() -> [(Self, Self); 4] {
        [
            (Self::E, Self::I),
            (Self::S, Self::N),
            (Self::T, Self::F),
            (Self::J, Self::P),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoveLanguage {
    WordsOfAffirmation,
    ActsOfService,
    ReceivingGifts,
    QualityTime,
    PhysicalTouch,
}

impl LoveLanguage {
    /// Declared bucket order; ranking ties resolve in this order.
    pub const fn ordered() -> [Self; 5] {
        [
            Self::WordsOfAffirmation,
            Self::ActsOfService,
            Self::ReceivingGifts,
            Self::QualityTime,
            Self::PhysicalTouch,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::WordsOfAffirmation => "Words of Affirmation",
            Self::ActsOfService => "Acts of Service",
            Self::ReceivingGifts => "Receiving Gifts",
            Self::QualityTime => "Quality Time",
            Self::PhysicalTouch => "Physical Touch",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HumanNeed {
    Certainty,
    Variety,
    Significance,
    Connection,
    Growth,
    Contribution,
}

impl HumanNeed {
    /// Declared need order; top-two ties resolve in this order.
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Certainty,
            Self::Variety,
            Self::Significance,
            Self::Connection,
            Self::Growth,
            Self::Contribution,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Certainty => "Certainty / Security",
            Self::Variety => "Variety / Excitement",
            Self::Significance => "Significance / Recognition",
            Self::Connection => "Connection / Love",
            Self::Growth => "Growth / Learning",
            Self::Contribution => "Contribution / Giving",
        }
    }
}

/// Direction of a wellness-style item. Negative-polarity items are stored
/// reverse-scored so higher combined totals always mean better wellness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Positive,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativePattern {
    Criticism,
    Defensiveness,
    Disrespect,
    Withdrawal,
    Closeness,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GottmanCategory {
    Criticism,
    Contempt,
    Defensiveness,
    Stonewalling,
    TurningToward,
    FondnessAdmiration,
    LoveMaps,
    SharedMeaning,
    RepairAttempts,
}

impl GottmanCategory {
    /// Whether the category is one of the four horsemen (higher = worse)
    /// rather than a relationship-health strength (higher = better).
    pub const fn is_horseman(self) -> bool {
        matches!(
            self,
            Self::Criticism | Self::Contempt | Self::Defensiveness | Self::Stonewalling
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EqDomain {
    SelfAwareness,
    SelfRegulation,
    Motivation,
    Empathy,
    SocialSkills,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictMode {
    Competing,
    Collaborating,
    Compromising,
    Avoiding,
    Accommodating,
}

impl ConflictMode {
    /// Declared mode order; primary/secondary ties resolve in this order.
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Competing,
            Self::Collaborating,
            Self::Compromising,
            Self::Avoiding,
            Self::Accommodating,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifferentiationSubscale {
    EmotionalReactivity,
    IPosition,
    EmotionalCutoff,
    Fusion,
}
