//! Tokenizing and scoring engine.
//!
//! Parsing a signature is a two-stage pipeline:
//!
//! ```text
//! signature ── tokenize (tokenizer.rs) ──▶ Vec<Token>      (maneuver + span)
//!                                             │
//!                                             v
//!                        score_terms / raw_total (scorer.rs)
//!                          - grade multiplier lookup
//!                          - adjacency bonus vs previous maneuver
//!                                             │
//!                                             v
//!                        round_to_cents ──▶ AerobaticSequence
//! ```
//!
//! ## Responsibilities by module
//!
//! - `tokenizer.rs`: leftmost, non-overlapping regex scan producing `Token`s.
//!   Performs no validation beyond the token grammar.
//! - `scorer.rs`: the multiplier lookup, the adjacency bonus table and the
//!   final rounding. All domain validation (unknown grades) lives here.
//! - `parser.rs`: glues the two stages together, with an optional metrics path.
//! - `metrics.rs`: timing and breakdown data for verbose runs.
//!
//! ## Debugging
//!
//! Every extracted token and scored term is emitted as a `tracing` event at
//! `debug`/`trace` level under the `aerobatics` target.

#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/parser.rs"]
mod parser;
#[path = "engine/scorer.rs"]
mod scorer;
#[path = "engine/tokenizer.rs"]
mod tokenizer;

pub(crate) use metrics::RunResult;
pub(crate) use parser::Parser;
pub(crate) use scorer::{raw_total, round_to_cents};
