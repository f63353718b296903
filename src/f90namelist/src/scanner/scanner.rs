// f90namelist/src/scanner/scanner.rs

//! Splits namelist text into group blocks.

use super::lines::{logical_lines, strip_inline_comment, LogicalLine};
use crate::error::{F90nmlError, Result};
use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

lazy_static! {
    /// A block runs from `&` to the last `/` before the next `&`.
    static ref GROUP_RE: Regex = Regex::new(r"&([^&]+)/").unwrap();
}

/// A `&name ... /` block with its assignment lines.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupBlock {
    pub name: String,
    /// 1-based line number of the `&name` header
    pub line: usize,
    pub lines: Vec<LogicalLine>,
}

/// Scanner over the text of a namelist file.
pub struct Scanner {
    filtered: String,
}

impl Scanner {
    /// Create a new scanner with all comments removed.
    ///
    /// Every line keeps its place, so line numbers still refer to the
    /// input. A `&` or `/` inside a comment, including commented-out groups
    /// such as `!&BOGUS x=1 /`, never reaches block extraction.
    pub fn new(input: &str) -> Self {
        let filtered = input
            .split('\n')
            .map(strip_inline_comment)
            .collect::<Vec<_>>()
            .join("\n");
        Self { filtered }
    }

    /// Extract all terminated groups in source order. Text after the last
    /// `/` that never closes is ignored.
    pub fn blocks(&self) -> Result<Vec<GroupBlock>> {
        GROUP_RE
            .captures_iter(&self.filtered)
            .filter_map(|caps| caps.get(1))
            .map(|body| {
                let first_line = self.filtered[..body.start()].matches('\n').count() + 1;
                parse_block(body.as_str(), first_line)
            })
            .collect()
    }
}

fn parse_block(body: &str, first_line: usize) -> Result<GroupBlock> {
    let mut raw_lines = body
        .split('\n')
        .enumerate()
        .map(|(offset, text)| (first_line + offset, text));

    let (line, header) = raw_lines
        .next()
        .ok_or_else(|| F90nmlError::malformed(first_line, body, "empty group"))?;
    let header = header.trim();

    let (name, rest) = match header.find(char::is_whitespace) {
        Some(pos) => (&header[..pos], header[pos..].trim()),
        None => (header, ""),
    };
    if name.is_empty() {
        return Err(F90nmlError::malformed(line, header, "missing group name"));
    }
    trace!("found group '{}' at line {}", name, line);

    // Assignments may follow the name on the header line.
    let lines = logical_lines(std::iter::once((line, rest)).chain(raw_lines))?;

    Ok(GroupBlock {
        name: name.to_string(),
        line,
        lines,
    })
}
