//! Engine run metrics.
//!
//! - `Parser::run` for normal operation.
//! - `Parser::run_with_metrics` for debugging a score: it keeps every token
//!   and term and times both stages.
//!
//! The plain path allocates none of this.

use super::scorer::Term;
use crate::{AerobaticSequence, Token};
use std::time::Duration;

#[derive(Debug, Default, Clone)]
pub(crate) struct RunMetrics {
    /// Total elapsed time for [`Parser::run_with_metrics`].
    pub total: Duration,
    /// Time spent scanning the signature.
    pub tokenize: Duration,
    /// Time spent scoring and rounding.
    pub score: Duration,
}

/// Parser output bundled with the intermediate data behind the score.
#[derive(Debug, Clone)]
pub(crate) struct RunResult {
    pub sequence: AerobaticSequence,
    /// Tokens in scan order, parallel to `terms`.
    pub tokens: Vec<Token>,
    pub terms: Vec<Term>,
    pub raw_total: f64,
    pub metrics: RunMetrics,
}
