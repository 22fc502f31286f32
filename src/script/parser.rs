//! Line-oriented script parser for dial paths.
//!
//! One path per non-blank line, written as a concatenation of bracket
//! groups `[d1,d2,...]`. Tokens are decimal digits or the placeholder
//! symbols `x`/`y`, resolved through [`CustomerId`].
//!
//! Delay policy: a multi-digit group is keyed as one gesture and gets no
//! delay; a single-digit group gets the supplied menu-transition delay.
//!
//! Error policy: the whole input is scanned and every malformed line is
//! reported in one [`ScriptError::Malformed`]; any error aborts the parse,
//! so a catalog is never partially loaded.

use super::{CustomerId, DialPath, ToneGroup};
use std::time::Duration;
use thiserror::Error;

/// A single malformed script line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LineError {
    /// A token was neither a digit nor a placeholder symbol.
    #[error("line {line}: invalid token '{token}'")]
    InvalidToken { line: usize, token: String },

    /// A non-blank line contained no bracket groups, which would produce a
    /// path with nothing to send.
    #[error("line {line}: no digit groups")]
    NoGroups { line: usize },
}

/// Errors raised while building a catalog from script text.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// One or more lines were malformed; one entry per offending line.
    #[error("malformed script: {}", join_lines(.0))]
    Malformed(Vec<LineError>),

    /// The script file could not be read.
    #[error("failed to read script '{path}'")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

fn join_lines(errors: &[LineError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Parse script text into dial paths.
///
/// Blank lines are skipped; line numbers in errors are 1-based.
pub(crate) fn parse_lines(
    text: &str,
    customer: CustomerId,
    single_digit_delay: Duration,
) -> Result<Vec<DialPath>, ScriptError> {
    let mut paths = Vec::new();
    let mut errors = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }
        match parse_line(raw, idx + 1, customer, single_digit_delay) {
            Ok(path) => paths.push(path),
            Err(err) => errors.push(err),
        }
    }

    if !errors.is_empty() {
        return Err(ScriptError::Malformed(errors));
    }
    Ok(paths)
}

fn parse_line(
    raw: &str,
    line: usize,
    customer: CustomerId,
    single_digit_delay: Duration,
) -> Result<DialPath, LineError> {
    let mut groups = Vec::new();

    // Scan bracket groups left to right: split on ']', then take everything
    // after the '[' in each piece. Text outside brackets is ignored.
    for part in raw.split(']') {
        let Some(open) = part.find('[') else {
            continue;
        };
        let body = &part[open + 1..];

        let mut digits = Vec::new();
        for token in body.split(',') {
            let token = token.trim();
            match customer.resolve_token(token) {
                Some(digit) => digits.push(digit),
                None => {
                    return Err(LineError::InvalidToken {
                        line,
                        token: token.to_string(),
                    })
                }
            }
        }

        let delay = if digits.len() > 1 {
            Duration::ZERO
        } else {
            single_digit_delay
        };
        groups.push(ToneGroup::new(digits, delay));
    }

    if groups.is_empty() {
        return Err(LineError::NoGroups { line });
    }
    Ok(DialPath::new(groups))
}
