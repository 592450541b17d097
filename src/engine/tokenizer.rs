//! Signature tokenizer.
//!
//! A token is `<kind><digits><grade>`:
//!
//! ```text
//!   L 12 C
//!   │ │  └─ grade   [A-F]
//!   │ └──── digits  [0-9]+
//!   └────── kind    [LHRTS]
//! ```
//!
//! Matches are collected left to right without overlap; anything between them
//! is skipped. Digits are restricted to ASCII so `str::parse` accepts every
//! run the pattern admits.

use crate::error::{Error, Result};
use crate::{Maneuver, Span, Token};
use regex::Match;
use tracing::debug;

/// Scan `signature` for every maneuver token in order of appearance.
pub(crate) fn tokenize(signature: &str) -> Result<Vec<Token>> {
    let re = regex!(r"[LHRTS][0-9]+[A-F]");
    re.find_iter(signature).map(token_from_match).collect()
}

fn token_from_match(m: Match<'_>) -> Result<Token> {
    let text = m.as_str();
    let span = Span { start: m.start(), end: m.end() };

    // The pattern only admits ASCII, so byte indexing is char indexing here.
    let bytes = text.as_bytes();
    let kind = char::from(bytes[0]);
    let difficulty = char::from(bytes[bytes.len() - 1]);
    let digits = &text[1..text.len() - 1];

    let repeat_count = digits
        .parse::<u32>()
        .map_err(|_| Error::RepeatCountOverflow { digits: digits.to_string(), span })?;

    debug!(token = text, start = span.start, end = span.end, "extracted maneuver");

    Ok(Token { maneuver: Maneuver { kind, repeat_count, difficulty }, span })
}
