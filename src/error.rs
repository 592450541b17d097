use crate::Span;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A maneuver carries a difficulty character with no entry in the multiplier table.
    #[error("invalid difficulty grade {grade:?} on maneuver {index} (expected one of A-F)")]
    InvalidDifficultyGrade { grade: char, index: usize },

    #[error("repeat count {digits} at {}..{} does not fit in 32 bits", .span.start, .span.end)]
    RepeatCountOverflow { digits: String, span: Span },
}

pub type Result<T> = std::result::Result<T, Error>;
