use crate::engine::{self, RunResult};
use crate::error::Result;
use crate::{AerobaticSequence, Maneuver, Span};
use serde::Serialize;
use std::time::Duration;

/// One maneuver's contribution to the difficulty, as reported by [`parse_verbose`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreTerm {
    /// Position of the maneuver in the sequence.
    pub index: usize,
    /// The matched signature text, e.g. `"R2A"`.
    pub token: String,
    pub span: Span,
    /// `repeat_count * multiplier`.
    pub base: f64,
    /// Adjacency factor applied to `base` (1.0 when none applies).
    pub bonus: f64,
    /// `base * bonus`.
    pub score: f64,
}

/// Additional details returned by [`parse_verbose`].
#[derive(Debug, Clone)]
pub struct ParseDetails {
    /// Total elapsed time.
    pub total: Duration,
    /// Time spent scanning for tokens.
    pub tokenize: Duration,
    /// Time spent scoring and rounding.
    pub score: Duration,
    /// Per-maneuver breakdown, in sequence order.
    pub terms: Vec<ScoreTerm>,
    /// Sum of all terms before rounding.
    pub raw_total: f64,
}

/// Result from [`parse_verbose`].
#[derive(Debug, Clone)]
pub struct ParseResultVerbose {
    pub text: String,
    pub sequence: AerobaticSequence,
    pub elapsed: Duration,
    pub details: ParseDetails,
}

/// Parse a signature into its maneuvers and total difficulty.
///
/// Text that does not form a token is skipped; a signature with no tokens
/// parses to an empty sequence with difficulty `0.0`.
///
/// # Example
/// ```
/// use aerobatics::parse;
///
/// let seq = parse("L2A R2A").unwrap();
/// assert_eq!(seq.maneuvers().len(), 2);
/// assert_eq!(seq.difficulty(), 6.0);
/// ```
///
/// # Errors
///
/// [`Error::RepeatCountOverflow`](crate::Error::RepeatCountOverflow) when a
/// digit run does not fit in a `u32`.
pub fn parse(text: &str) -> Result<AerobaticSequence> {
    engine::Parser::new(text).run()
}

/// Parse `text` and also return the scoring breakdown and stage timings.
///
/// The default [`parse`] path does not allocate the breakdown.
pub fn parse_verbose(text: &str) -> Result<ParseResultVerbose> {
    let run = engine::Parser::new(text).run_with_metrics()?;
    Ok(into_verbose(text, run))
}

/// Score maneuvers that were built directly rather than parsed.
///
/// # Errors
///
/// [`Error::InvalidDifficultyGrade`](crate::Error::InvalidDifficultyGrade)
/// when a maneuver's grade is not one of `A` to `F`.
pub fn score(maneuvers: &[Maneuver]) -> Result<f64> {
    Ok(engine::round_to_cents(engine::raw_total(maneuvers)?))
}

fn into_verbose(text: &str, run: RunResult) -> ParseResultVerbose {
    let terms = run
        .tokens
        .iter()
        .zip(&run.terms)
        .enumerate()
        .map(|(index, (token, term))| ScoreTerm {
            index,
            token: text.get(token.span.start..token.span.end).unwrap_or_default().to_string(),
            span: token.span,
            base: term.base,
            bonus: term.bonus,
            score: term.score,
        })
        .collect();

    let details = ParseDetails {
        total: run.metrics.total,
        tokenize: run.metrics.tokenize,
        score: run.metrics.score,
        terms,
        raw_total: run.raw_total,
    };

    ParseResultVerbose { text: text.to_string(), sequence: run.sequence, elapsed: run.metrics.total, details }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn empty_and_noise_inputs_score_zero() {
        for input in ["", "xyz", "  \n\t", "lra 123"] {
            let seq = parse(input).unwrap();
            assert!(seq.is_empty(), "input {input:?}");
            assert_eq!(seq.difficulty(), 0.0);
        }
    }

    #[test]
    fn single_maneuver() {
        let seq = parse("L3A").unwrap();
        assert_eq!(seq.maneuvers(), &[Maneuver::new('L', 3, 'A')]);
        assert_eq!(seq.difficulty(), 3.0);
    }

    #[test]
    fn roll_after_loop_bonus() {
        assert_eq!(parse("L2A R2A").unwrap().difficulty(), 6.0);
    }

    #[test]
    fn spin_after_turn_bonus() {
        assert_eq!(parse("T1AS1A").unwrap().difficulty(), 4.0);
    }

    #[test]
    fn highest_grade_multiplier() {
        assert_eq!(parse("H5F").unwrap().difficulty(), 10.0);
    }

    #[test]
    fn mixed_sequence() {
        // L 1*1.2 + R 3*1.4*2 + T 2*1.6 + S 4*1.8*3 + H 1*2.0
        let seq = parse("L1B R3C T2D S4E H1F").unwrap();
        assert_eq!(seq.len(), 5);
        assert_eq!(seq.difficulty(), 36.4);
    }

    #[test]
    fn parsing_is_idempotent() {
        let sig = "xxL4C--R2BT9DS1F";
        assert_eq!(parse(sig).unwrap(), parse(sig).unwrap());
    }

    #[test]
    fn maneuver_count_matches_token_count() {
        let sig = "L1A R1A H1A T1A S1A and L22F";
        assert_eq!(parse(sig).unwrap().len(), 6);
    }

    #[test]
    fn score_rejects_hand_built_invalid_grade() {
        let maneuvers = [Maneuver::new('L', 1, 'A'), Maneuver::new('H', 3, 'Z')];
        assert_eq!(score(&maneuvers), Err(Error::InvalidDifficultyGrade { grade: 'Z', index: 1 }));
    }

    #[test]
    fn score_matches_parse_for_parsed_maneuvers() {
        let seq = parse("T3E S2B L1C R5D").unwrap();
        assert_eq!(score(seq.maneuvers()).unwrap(), seq.difficulty());
    }

    #[test]
    fn score_rounds_after_accumulating() {
        // 1*1.2 + 1*1.4 + 1*1.6 = 4.2 with float noise, rounded once.
        let maneuvers = [Maneuver::new('H', 1, 'B'), Maneuver::new('H', 1, 'C'), Maneuver::new('H', 1, 'D')];
        assert_eq!(score(&maneuvers).unwrap(), 4.2);
    }

    #[test]
    fn overflow_surfaces_from_parse() {
        assert!(matches!(parse("S5000000000A"), Err(Error::RepeatCountOverflow { .. })));
    }

    #[test]
    fn verbose_reports_terms_and_spans() {
        let res = parse_verbose("> L2A R2A <").unwrap();

        assert_eq!(res.text, "> L2A R2A <");
        assert_eq!(res.sequence.difficulty(), 6.0);
        assert_eq!(res.elapsed, res.details.total);
        assert_eq!(res.details.raw_total, 6.0);

        let terms = &res.details.terms;
        assert_eq!(terms.len(), 2);
        assert_eq!(terms[0].token, "L2A");
        assert_eq!(terms[0].span, Span { start: 2, end: 5 });
        assert_eq!(terms[0].bonus, 1.0);
        assert_eq!(terms[1].token, "R2A");
        assert_eq!(terms[1].index, 1);
        assert_eq!(terms[1].base, 2.0);
        assert_eq!(terms[1].bonus, 2.0);
        assert_eq!(terms[1].score, 4.0);
    }

    #[test]
    fn verbose_and_plain_agree() {
        let sig = "T2B S2B L3F R1E";
        assert_eq!(parse_verbose(sig).unwrap().sequence, parse(sig).unwrap());
    }
}
