//! Assessment scoring and partner compatibility matching engine.
//!
//! Converts raw multi-item questionnaire answers into normalized trait scores
//! across the platform's psychometric-style instruments, and combines two
//! partners' score sets into a weighted compatibility result. The engine is
//! stateless and performs no I/O; persistence, transport, and question-bank
//! curation belong to the surrounding service.

pub mod catalog;
pub mod error;
pub mod matchup;
pub mod scoring;

pub use error::ScoringError;
pub use matchup::{CompatibilityMatcher, CompatibilityResult, ProfileAssessment};
pub use scoring::{AssessmentKind, AssessmentScore, ResponseSet, ScoringEngine};
