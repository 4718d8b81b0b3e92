//! Command-line parsing.
//!
//! A raw line is an optional run of leading digits (the repeat count),
//! a command name, and everything after the first space as the
//! parameter. Chains are split on a literal `|` before any of that
//! happens; a `|` inside a parameter cannot be expressed.

use thiserror::Error;

/// Successfully parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// Leading repeat count; 0 when none was given.
    pub count: usize,
    pub name: String,
    /// `None` when no parameter followed the name. An empty remainder
    /// after the separating space also counts as none.
    pub param: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty command line")]
    Empty,
    #[error("missing command name")]
    MissingName,
}

/// Parse one piece of a command chain.
///
/// Leading whitespace is dropped; whitespace inside the parameter is
/// preserved. Counts bind directly to the name, vim style (`3jumpbottom`).
pub fn parse(line: &str) -> Result<ParsedLine, ParseError> {
    let line = line.trim_start();
    if line.is_empty() {
        return Err(ParseError::Empty);
    }

    let digit_end = line
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(line.len());
    let count = line[..digit_end].bytes().fold(0usize, |acc, digit| {
        acc.saturating_mul(10).saturating_add((digit - b'0') as usize)
    });

    let rest = &line[digit_end..];
    let (name, param) = match rest.split_once(' ') {
        Some((name, param)) => {
            let param = if param.is_empty() {
                None
            } else {
                Some(param.to_string())
            };
            (name, param)
        }
        None => (rest, None),
    };
    if name.is_empty() {
        return Err(ParseError::MissingName);
    }

    Ok(ParsedLine {
        count,
        name: name.to_string(),
        param,
    })
}

/// Split a line into its `|`-separated chain pieces.
///
/// No escaping; an empty line yields no pieces at all, while a trailing
/// or doubled separator yields an empty piece that will fail to parse.
pub fn split_chain(line: &str) -> Vec<&str> {
    if line.is_empty() {
        return Vec::new();
    }
    line.split('|').collect()
}
