//! Content line lexer (RFC 5545 §3.1).
//!
//! Handles line unfolding and tokenization of `DTSTART` and `RRULE` lines.

use super::error::{ParseError, ParseErrorKind, ParseResult};

/// A tokenized content line: `name *(";" param) ":" value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Upper-cased property name.
    pub name: String,
    /// Parameters as (upper-cased name, value) pairs, quotes removed.
    pub params: Vec<(String, String)>,
    /// Raw value after the first unquoted colon.
    pub value: String,
    /// 1-based column at which the value starts.
    pub value_column: usize,
}

impl ContentLine {
    /// Returns the value of a parameter (case-insensitive name).
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Splits input into content lines, merging folded continuations.
///
/// Handles both CRLF and bare LF line endings. Lines starting with SP/HTAB are
/// treated as continuations of the previous line. Per RFC 5545 §3.1, unfolding
/// removes the line break and the whitespace character (no space is inserted).
/// Blank lines are skipped; returned line numbers are 1-based.
#[must_use]
pub fn split_lines(input: &str) -> Vec<(usize, String)> {
    let mut lines: Vec<(usize, String)> = Vec::new();

    for (i, raw_line) in input.lines().enumerate() {
        let line = raw_line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        if let Some(continuation) = line.strip_prefix([' ', '\t']) {
            if let Some((_, prev)) = lines.last_mut() {
                prev.push_str(continuation);
            } else {
                lines.push((i + 1, continuation.trim_start().to_string()));
            }
        } else {
            lines.push((i + 1, line.to_string()));
        }
    }

    lines
}

/// Parses a single content line.
///
/// Format: `name *(";" param) ":" value`
///
/// ## Errors
/// Returns an error if the line is malformed or contains invalid characters.
pub fn parse_content_line(line: &str, line_num: usize) -> ParseResult<ContentLine> {
    let name_end = line.find([';', ':']).ok_or_else(|| {
        ParseError::new(ParseErrorKind::MissingColon, line_num, line.len().max(1))
    })?;

    if name_end == 0 {
        return Err(ParseError::new(
            ParseErrorKind::MissingPropertyName,
            line_num,
            1,
        ));
    }

    let name = &line[..name_end];
    if let Some(pos) = name.find(|c: char| !c.is_ascii_alphanumeric() && c != '-') {
        return Err(ParseError::new(
            ParseErrorKind::InvalidPropertyName,
            line_num,
            pos + 1,
        ));
    }

    let mut params = Vec::new();
    let mut pos = name_end;

    // `pos` always points at a ';' or ':' separator here
    while line[pos..].starts_with(';') {
        let (param, next) = parse_parameter(line, pos + 1, line_num)?;
        params.push(param);
        pos = next;
    }

    Ok(ContentLine {
        name: name.to_ascii_uppercase(),
        params,
        value: line[pos + 1..].to_string(),
        value_column: pos + 2,
    })
}

/// Parses `NAME=VALUE` starting at byte `start`; returns the parameter and the
/// byte offset of the separator that ends it.
fn parse_parameter(
    line: &str,
    start: usize,
    line_num: usize,
) -> ParseResult<((String, String), usize)> {
    let rest = &line[start..];
    let eq = rest
        .find('=')
        .filter(|eq| !rest[..*eq].contains([';', ':']))
        .ok_or_else(|| ParseError::new(ParseErrorKind::InvalidParameter, line_num, start + 1))?;

    let name = &rest[..eq];
    if name.is_empty() {
        return Err(ParseError::new(
            ParseErrorKind::InvalidParameter,
            line_num,
            start + 1,
        ));
    }

    let value_start = start + eq + 1;
    let after = &line[value_start..];

    let (value, end) = if let Some(quoted) = after.strip_prefix('"') {
        let close = quoted.find('"').ok_or_else(|| {
            ParseError::new(ParseErrorKind::UnclosedQuote, line_num, value_start + 1)
        })?;
        (&quoted[..close], value_start + close + 2)
    } else {
        let len = after.find([';', ':']).unwrap_or(after.len());
        (&after[..len], value_start + len)
    };

    if !line[end..].starts_with([';', ':']) {
        return Err(ParseError::new(
            ParseErrorKind::MissingColon,
            line_num,
            end + 1,
        ));
    }

    Ok(((name.to_ascii_uppercase(), value.to_string()), end))
}
