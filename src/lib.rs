use serde::{Deserialize, Serialize};
use std::fmt;

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;

pub use api::{ParseDetails, ParseResultVerbose, ScoreTerm, parse, parse_verbose, score};
pub use error::{Error, Result};

// --- Public types -----------------------------------------------------------

/// One parsed signature token: a category code, a repeat count and a grade.
///
/// Maneuvers produced by [`parse`] always carry `kind` from `{L,H,R,T,S}` and
/// `difficulty` from `{A..F}`. Values built by hand are not checked until they
/// are scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Maneuver {
    /// Category code (`L`, `H`, `R`, `T` or `S`).
    #[serde(rename = "type")]
    pub kind: char,
    pub repeat_count: u32,
    /// Difficulty grade character (`A` to `F`).
    pub difficulty: char,
}

impl Maneuver {
    pub fn new(kind: char, repeat_count: u32, difficulty: char) -> Self {
        Self { kind, repeat_count, difficulty }
    }

    /// Typed grade, or `None` when `difficulty` is outside the multiplier table.
    pub fn grade(&self) -> Option<Grade> {
        Grade::from_char(self.difficulty)
    }
}

impl fmt::Display for Maneuver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.kind, self.repeat_count, self.difficulty)
    }
}

/// Result of parsing a signature: the maneuvers in source order plus the
/// total difficulty rounded to two decimal places.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AerobaticSequence {
    maneuvers: Vec<Maneuver>,
    difficulty: f64,
}

impl AerobaticSequence {
    pub(crate) fn new(maneuvers: Vec<Maneuver>, difficulty: f64) -> Self {
        Self { maneuvers, difficulty }
    }

    pub fn maneuvers(&self) -> &[Maneuver] {
        &self.maneuvers
    }

    pub fn difficulty(&self) -> f64 {
        self.difficulty
    }

    pub fn len(&self) -> usize {
        self.maneuvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maneuvers.is_empty()
    }

    pub fn into_maneuvers(self) -> Vec<Maneuver> {
        self.maneuvers
    }
}

impl std::str::FromStr for AerobaticSequence {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

/// Difficulty grade with its fixed score multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Grade {
    pub const ALL: [Grade; 6] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::E, Grade::F];

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            'E' => Some(Self::E),
            'F' => Some(Self::F),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            Self::A => 1.0,
            Self::B => 1.2,
            Self::C => 1.4,
            Self::D => 1.6,
            Self::E => 1.8,
            Self::F => 2.0,
        }
    }
}

/// Byte range of a token within the signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    /// Start byte index (inclusive).
    pub start: usize,
    /// End byte index (exclusive).
    pub end: usize,
}

// --- Internal types ---------------------------------------------------------

/// A maneuver together with where it was found in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    pub maneuver: Maneuver,
    pub span: Span,
}
