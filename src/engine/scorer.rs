//! Difficulty scoring.
//!
//! Each maneuver contributes `repeat_count * multiplier(grade)`, multiplied by
//! an adjacency bonus when it directly follows a specific other kind. Terms are
//! summed unrounded and the total is rounded to cents once at the end.

use crate::error::{Error, Result};
use crate::{Grade, Maneuver};
use tracing::trace;

/// Bonus factor applied to `current` when it immediately follows `previous`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AdjacencyBonus {
    pub previous: char,
    pub current: char,
    pub factor: f64,
}

pub(crate) const ADJACENCY_BONUSES: [AdjacencyBonus; 2] = [
    AdjacencyBonus { previous: 'L', current: 'R', factor: 2.0 },
    AdjacencyBonus { previous: 'T', current: 'S', factor: 3.0 },
];

/// One maneuver's contribution to the total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Term {
    pub base: f64,
    pub bonus: f64,
    pub score: f64,
}

fn adjacency_bonus(previous: Option<&Maneuver>, current: &Maneuver) -> f64 {
    let Some(previous) = previous else {
        return 1.0;
    };

    ADJACENCY_BONUSES
        .iter()
        .find(|b| b.previous == previous.kind && b.current == current.kind)
        .map_or(1.0, |b| b.factor)
}

/// Score the maneuver at `index`, looking back one position for the bonus.
pub(crate) fn score_term(maneuvers: &[Maneuver], index: usize) -> Result<Term> {
    let current = &maneuvers[index];
    let grade = Grade::from_char(current.difficulty)
        .ok_or(Error::InvalidDifficultyGrade { grade: current.difficulty, index })?;

    let previous = index.checked_sub(1).map(|i| &maneuvers[i]);
    let base = f64::from(current.repeat_count) * grade.multiplier();
    let bonus = adjacency_bonus(previous, current);
    let score = base * bonus;

    trace!(index, maneuver = %current, base, bonus, score, "scored term");

    Ok(Term { base, bonus, score })
}

/// Every term of `maneuvers`, in order. Stops at the first unknown grade.
pub(crate) fn score_terms(maneuvers: &[Maneuver]) -> Result<Vec<Term>> {
    (0..maneuvers.len()).map(|i| score_term(maneuvers, i)).collect()
}

/// Unrounded sum of all terms.
pub(crate) fn raw_total(maneuvers: &[Maneuver]) -> Result<f64> {
    (0..maneuvers.len()).try_fold(0.0, |acc, i| Ok(acc + score_term(maneuvers, i)?.score))
}

/// Round to two decimal places, ties to even.
pub(crate) fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(kind: char, repeat_count: u32, difficulty: char) -> Maneuver {
        Maneuver::new(kind, repeat_count, difficulty)
    }

    #[test]
    fn empty_sequence_scores_zero() {
        assert_eq!(raw_total(&[]).unwrap(), 0.0);
        assert!(score_terms(&[]).unwrap().is_empty());
    }

    #[test]
    fn first_maneuver_never_gets_a_bonus() {
        let term = score_term(&[m('R', 2, 'A')], 0).unwrap();
        assert_eq!(term, Term { base: 2.0, bonus: 1.0, score: 2.0 });
    }

    #[test]
    fn roll_after_loop_doubles() {
        let seq = [m('L', 2, 'A'), m('R', 2, 'A')];
        assert_eq!(score_term(&seq, 1).unwrap(), Term { base: 2.0, bonus: 2.0, score: 4.0 });
        assert_eq!(raw_total(&seq).unwrap(), 6.0);
    }

    #[test]
    fn spin_after_turn_triples() {
        let seq = [m('T', 1, 'A'), m('S', 1, 'A')];
        assert_eq!(score_term(&seq, 1).unwrap(), Term { base: 1.0, bonus: 3.0, score: 3.0 });
        assert_eq!(raw_total(&seq).unwrap(), 4.0);
    }

    #[test]
    fn bonus_pairs_are_directional() {
        assert_eq!(raw_total(&[m('R', 1, 'A'), m('L', 1, 'A')]).unwrap(), 2.0);
        assert_eq!(raw_total(&[m('S', 1, 'A'), m('T', 1, 'A')]).unwrap(), 2.0);
        assert_eq!(raw_total(&[m('L', 1, 'A'), m('S', 1, 'A')]).unwrap(), 2.0);
    }

    #[test]
    fn bonus_only_looks_at_immediate_predecessor() {
        let seq = [m('L', 1, 'A'), m('H', 1, 'A'), m('R', 1, 'A')];
        assert_eq!(raw_total(&seq).unwrap(), 3.0);
    }

    #[test]
    fn bonus_scales_graded_base() {
        let seq = [m('T', 1, 'A'), m('S', 2, 'C')];
        let term = score_term(&seq, 1).unwrap();
        assert!((term.base - 2.8).abs() < 1e-9);
        assert!((term.score - 8.4).abs() < 1e-9);
    }

    #[test]
    fn every_grade_uses_its_multiplier() {
        for (grade, expected) in [('A', 5.0), ('B', 6.0), ('C', 7.0), ('D', 8.0), ('E', 9.0), ('F', 10.0)] {
            let total = raw_total(&[m('H', 5, grade)]).unwrap();
            assert_eq!(round_to_cents(total), expected, "grade {grade}");
        }
    }

    #[test]
    fn unknown_grade_is_reported_with_its_index() {
        let seq = [m('L', 1, 'A'), m('H', 2, 'Z')];
        assert_eq!(raw_total(&seq).unwrap_err(), Error::InvalidDifficultyGrade { grade: 'Z', index: 1 });
        assert_eq!(score_terms(&seq).unwrap_err(), Error::InvalidDifficultyGrade { grade: 'Z', index: 1 });
    }

    #[test]
    fn lowercase_grade_is_not_in_table() {
        assert!(matches!(
            raw_total(&[m('L', 1, 'a')]),
            Err(Error::InvalidDifficultyGrade { grade: 'a', index: 0 })
        ));
    }

    #[test]
    fn rounds_to_two_places() {
        assert_eq!(round_to_cents(3.14159), 3.14);
        assert_eq!(round_to_cents(2.71828), 2.72);
        assert_eq!(round_to_cents(0.0), 0.0);
        assert_eq!(round_to_cents(3.0 * 1.4), 4.2);
    }

    #[test]
    fn exact_midpoints_round_to_even() {
        // 0.125 and 0.375 are exact in binary, so the tie is real.
        assert_eq!(round_to_cents(0.125), 0.12);
        assert_eq!(round_to_cents(0.375), 0.38);
    }
}
