//! Signature parser: tokenize, then score.
//!
//! ```text
//! new() -> run()              -> AerobaticSequence
//!       └─ run_with_metrics() -> RunResult (tokens, terms, timings)
//! ```
//!
//! Both paths produce the same sequence for the same input.

use super::metrics::{RunMetrics, RunResult};
use super::scorer::{raw_total, round_to_cents, score_terms};
use super::tokenizer::tokenize;
use crate::error::Result;
use crate::{AerobaticSequence, Maneuver};
use std::time::Instant;
use tracing::{debug, warn};

#[derive(Debug)]
pub(crate) struct Parser<'a> {
    /// Signature text to parse.
    input: &'a str,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }

    pub fn run(&self) -> Result<AerobaticSequence> {
        self.try_run().inspect_err(|err| warn!(input = self.input, %err, "signature parse failed"))
    }

    fn try_run(&self) -> Result<AerobaticSequence> {
        let maneuvers: Vec<Maneuver> = tokenize(self.input)?.into_iter().map(|t| t.maneuver).collect();
        let difficulty = round_to_cents(raw_total(&maneuvers)?);

        debug!(maneuvers = maneuvers.len(), difficulty, "parsed signature");

        Ok(AerobaticSequence::new(maneuvers, difficulty))
    }

    pub fn run_with_metrics(&self) -> Result<RunResult> {
        self.try_run_with_metrics().inspect_err(|err| warn!(input = self.input, %err, "signature parse failed"))
    }

    fn try_run_with_metrics(&self) -> Result<RunResult> {
        let start = Instant::now();

        let tokens = tokenize(self.input)?;
        let tokenize_elapsed = start.elapsed();

        let score_start = Instant::now();
        let maneuvers: Vec<Maneuver> = tokens.iter().map(|t| t.maneuver).collect();
        let terms = score_terms(&maneuvers)?;
        // Same left-to-right accumulation as `raw_total`.
        let raw_total = terms.iter().fold(0.0, |acc, t| acc + t.score);
        let difficulty = round_to_cents(raw_total);
        let score_elapsed = score_start.elapsed();

        debug!(maneuvers = maneuvers.len(), raw_total, difficulty, "parsed signature with metrics");

        Ok(RunResult {
            sequence: AerobaticSequence::new(maneuvers, difficulty),
            tokens,
            terms,
            raw_total,
            metrics: RunMetrics { total: start.elapsed(), tokenize: tokenize_elapsed, score: score_elapsed },
        })
    }
}
