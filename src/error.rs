use crate::catalog::QuestionId;
use crate::scoring::response::AnswerValue;
use crate::scoring::AssessmentKind;
use thiserror::Error;

/// Validation failures surfaced before any scoring arithmetic runs.
///
/// The engine is otherwise total: a well-formed, in-scale response set never
/// fails, and partially answered categories flow through documented default
/// branches instead of producing errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    #[error("no responses supplied for {kind} assessment")]
    EmptyResponses { kind: AssessmentKind },
    #[error("question {question}: {value:?} is not a numeric response")]
    NonNumericValue {
        question: QuestionId,
        value: AnswerValue,
    },
    #[error("question {question}: value {value} is outside the {min}-{max} scale")]
    OutOfScale {
        question: QuestionId,
        value: i64,
        min: i64,
        max: i64,
    },
    #[error("question {question}: {value:?} is not a forced-choice answer")]
    InvalidChoice {
        question: QuestionId,
        value: AnswerValue,
    },
    #[error("unknown assessment type {0:?}")]
    UnknownKind(String),
}
