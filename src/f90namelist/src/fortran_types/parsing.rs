// f90namelist/src/fortran_types/parsing.rs

//! Type inference for the raw text on the right side of an assignment.

use super::value::FortranValue;
use crate::error::{F90nmlError, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref COMPLEX_RE: Regex = {
        let part = r"[+-]?(?:(?:\d+\.?\d*|\.\d+)(?:[eEdD][+-]?\d+)?|(?i:infinity|inf|nan))";
        Regex::new(&format!(r"^\(\s*({0})\s*,\s*({0})\s*\)$", part)).unwrap()
    };
    static ref D_EXPONENT_RE: Regex =
        Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)[dD][+-]?\d+$").unwrap();
}

type Matcher = fn(&str) -> Option<FortranValue>;

/// Scalar matchers in priority order. Integers must win over reals, and
/// complex over logical/character.
const MATCHERS: [(&str, Matcher); 5] = [
    ("integer", parse_integer),
    ("real", parse_real),
    ("complex", parse_complex),
    ("logical", parse_logical),
    ("character", parse_character),
];

/// Parse a single scalar value.
///
/// Returns `None` when the text is not one scalar literal; the caller may
/// then try [`parse_value_list`].
pub fn parse_value(raw: &str) -> Option<FortranValue> {
    let trimmed = raw.trim();
    MATCHERS.iter().find_map(|(_, matcher)| matcher(trimmed))
}

/// Name of the scalar type `raw` would be parsed as.
pub fn infer_fortran_type(raw: &str) -> Option<&'static str> {
    let trimmed = raw.trim();
    MATCHERS
        .iter()
        .find(|(_, matcher)| matcher(trimmed).is_some())
        .map(|(name, _)| *name)
}

pub fn parse_integer(value: &str) -> Option<FortranValue> {
    value.parse::<i64>().ok().map(FortranValue::Integer)
}

/// Parse a real, accepting Fortran `d` exponents (`1.5d-3`).
pub fn parse_real(value: &str) -> Option<FortranValue> {
    if D_EXPONENT_RE.is_match(value) {
        let normalized = value.replace(|c: char| c == 'd' || c == 'D', "e");
        return normalized.parse::<f64>().ok().map(FortranValue::Real);
    }
    value.parse::<f64>().ok().map(FortranValue::Real)
}

/// Parse a `(real,imag)` literal.
pub fn parse_complex(value: &str) -> Option<FortranValue> {
    let caps = COMPLEX_RE.captures(value)?;
    let real = parse_real(&caps[1])?.as_real()?;
    let imag = parse_real(&caps[2])?.as_real()?;
    Some(FortranValue::Complex(real, imag))
}

pub fn parse_logical(value: &str) -> Option<FortranValue> {
    match value.to_lowercase().as_str() {
        ".true." | ".t." | "t" => Some(FortranValue::Logical(true)),
        ".false." | ".f." | "f" => Some(FortranValue::Logical(false)),
        _ => None,
    }
}

/// Parse a quoted string. Exactly two delimiter characters are allowed, so
/// text such as `'a' 'b'` is left for list parsing.
pub fn parse_character(value: &str) -> Option<FortranValue> {
    ['\'', '"'].iter().find_map(|&quote| {
        let is_quoted = value.len() >= 2
            && value.starts_with(quote)
            && value.ends_with(quote)
            && value.matches(quote).count() == 2;
        is_quoted.then(|| FortranValue::Character(value[1..value.len() - 1].to_string()))
    })
}

/// Parse several values written on one right-hand side.
///
/// The text is split on whitespace and commas, except inside parentheses
/// or quotes, so every quoted substring stays one entry with its spaces
/// and leading characters intact.
pub fn parse_value_list(raw: &str, line: usize) -> Result<Vec<FortranValue>> {
    let entries = split_entries(raw);

    if entries.is_empty() {
        return Err(F90nmlError::malformed(line, raw, "no value found"));
    }

    entries
        .into_iter()
        .map(|entry| {
            parse_value(entry).ok_or_else(|| {
                F90nmlError::malformed(line, raw, format!("cannot parse value '{}'", entry))
            })
        })
        .collect()
}

/// Split on whitespace and commas found outside parentheses and quotes.
fn split_entries(raw: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start: Option<usize> = None;

    for (i, c) in raw.char_indices() {
        let is_separator = match quote {
            Some(q) => {
                if c == q {
                    quote = None;
                }
                false
            }
            None => match c {
                '\'' | '"' => {
                    quote = Some(c);
                    false
                }
                '(' => {
                    depth += 1;
                    false
                }
                ')' => {
                    depth = depth.saturating_sub(1);
                    false
                }
                ',' => depth == 0,
                _ => depth == 0 && c.is_whitespace(),
            },
        };

        if is_separator {
            if let Some(s) = start.take() {
                entries.push(&raw[s..i]);
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }

    if let Some(s) = start {
        entries.push(&raw[s..]);
    }
    entries
}
