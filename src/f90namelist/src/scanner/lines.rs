// f90namelist/src/scanner/lines.rs

//! Line-level helpers: inline comments, unquoted character search and
//! joining of continued assignment lines.

use crate::error::{F90nmlError, Result};

/// One assignment after continuation lines have been joined.
#[derive(Debug, Clone, PartialEq)]
pub struct LogicalLine {
    /// 1-based line number in the original input
    pub number: usize,
    pub text: String,
}

/// Byte offsets of `target` outside single- or double-quoted strings.
pub fn unquoted_positions(line: &str, target: char) -> Vec<usize> {
    let mut positions = Vec::new();
    let mut quote: Option<char> = None;

    for (i, c) in line.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '\'' || c == '"' => quote = Some(c),
            None if c == target => positions.push(i),
            None => {}
        }
    }
    positions
}

/// Remove a trailing `! comment` that is not inside a string.
pub fn strip_inline_comment(line: &str) -> &str {
    match unquoted_positions(line, '!').first() {
        Some(&pos) => &line[..pos],
        None => line,
    }
}

/// Turn the raw lines of a group body into assignments.
///
/// Blank and comment lines are dropped. A line without `=` continues the
/// previous assignment when that one ends with a comma.
pub fn logical_lines<'a, I>(lines: I) -> Result<Vec<LogicalLine>>
where
    I: IntoIterator<Item = (usize, &'a str)>,
{
    let mut logical: Vec<LogicalLine> = Vec::new();

    for (number, raw) in lines {
        let text = strip_inline_comment(raw.trim()).trim();
        if text.is_empty() {
            continue;
        }

        if unquoted_positions(text, '=').is_empty() {
            match logical.last_mut() {
                Some(previous) if previous.text.ends_with(',') => {
                    previous.text.push(' ');
                    previous.text.push_str(text);
                }
                _ => {
                    return Err(F90nmlError::malformed(
                        number,
                        text,
                        "expected a 'name = value' assignment",
                    ))
                }
            }
        } else {
            logical.push(LogicalLine {
                number,
                text: text.to_string(),
            });
        }
    }

    Ok(logical)
}
