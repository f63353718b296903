// f90namelist/src/parser/mod.rs

//! Parser turning scanned group blocks into a typed [`Namelist`].
//!
//! Each assignment's right side is first tried as a single scalar. When no
//! scalar matches it is read as an inline list of values. Indexed
//! assignments such as `a(2) = 1` are collected per variable and turned
//! into dense arrays once the whole group has been read.

pub mod array;

pub use array::PartialArray;

use crate::error::{F90nmlError, Result};
use crate::fortran_types::{parse_value, parse_value_list, FortranValue};
use crate::namelist::{Namelist, NamelistGroup};
use crate::scanner::lines::unquoted_positions;
use crate::scanner::{GroupBlock, LogicalLine, Scanner};
use lazy_static::lazy_static;
use linked_hash_map::LinkedHashMap;
use log::{debug, trace};
use regex::Regex;
use std::collections::HashMap;

lazy_static! {
    static ref ARRAY_REF_RE: Regex = Regex::new(r"^(\w+)\s*\(\s*(\d+)\s*\)$").unwrap();
}

/// Parser for namelist text.
pub struct NamelistParser {
    scanner: Scanner,
}

impl NamelistParser {
    /// Create a new parser for the given input.
    pub fn new(input: &str) -> Self {
        Self {
            scanner: Scanner::new(input),
        }
    }

    /// Parse the input and return a namelist.
    pub fn parse(&self) -> Result<Namelist> {
        let mut namelist = Namelist::new();
        let mut namer = GroupNamer::default();

        for block in self.scanner.blocks()? {
            let group = parse_group(&block)?;
            let name = namer.assign(&block.name, &namelist);
            if name != block.name {
                debug!(
                    "group '{}' at line {} is a repeat, stored as '{}'",
                    block.name, block.line, name
                );
            }
            namelist.insert_group_object(&name, group);
        }

        debug!("parsed {} groups", namelist.len());
        Ok(namelist)
    }
}

/// Hands out unique names for repeated groups: the first `RELEASE` keeps
/// its name, the following ones become `RELEASE0`, `RELEASE1`, ...
#[derive(Debug, Default)]
struct GroupNamer {
    counters: HashMap<String, usize>,
}

impl GroupNamer {
    fn assign(&mut self, name: &str, namelist: &Namelist) -> String {
        if !namelist.has_group(name) {
            return name.to_string();
        }
        let counter = self.counters.entry(name.to_string()).or_insert(0);
        loop {
            let candidate = format!("{}{}", name, counter);
            *counter += 1;
            if !namelist.has_group(&candidate) {
                return candidate;
            }
        }
    }
}

/// Left and right side of one assignment.
#[derive(Debug, PartialEq)]
struct Assignment<'a> {
    name: &'a str,
    /// 0-based element index for `name(k)` references
    index: Option<usize>,
    value: &'a str,
}

fn split_assignment(line: &LogicalLine) -> Result<Assignment<'_>> {
    // Commas at the end of a line are optional.
    let text = line
        .text
        .trim_end_matches(|c: char| c == ',' || c.is_whitespace());

    let equals = unquoted_positions(text, '=');
    if equals.len() != 1 {
        return Err(F90nmlError::malformed(
            line.number,
            line.text.as_str(),
            format!("expected exactly one '=', found {}", equals.len()),
        ));
    }

    let lhs = text[..equals[0]].trim();
    let value = text[equals[0] + 1..].trim();
    if value.is_empty() {
        return Err(F90nmlError::malformed(
            line.number,
            line.text.as_str(),
            "missing value",
        ));
    }

    let (name, index) = parse_reference(lhs, line)?;
    Ok(Assignment { name, index, value })
}

fn parse_reference<'a>(lhs: &'a str, line: &LogicalLine) -> Result<(&'a str, Option<usize>)> {
    if lhs.is_empty() {
        return Err(F90nmlError::malformed(
            line.number,
            line.text.as_str(),
            "missing variable name",
        ));
    }

    if let Some(caps) = ARRAY_REF_RE.captures(lhs) {
        if let (Some(name), Some(digits)) = (caps.get(1), caps.get(2)) {
            let index: usize = digits.as_str().parse().map_err(|_| {
                F90nmlError::malformed(line.number, line.text.as_str(), "array index out of range")
            })?;
            if index == 0 {
                return Err(F90nmlError::malformed(
                    line.number,
                    line.text.as_str(),
                    "array indices start at 1",
                ));
            }
            return Ok((name.as_str(), Some(index - 1)));
        }
    }

    if lhs.contains(|c| c == '(' || c == ')') {
        return Err(F90nmlError::malformed(
            line.number,
            line.text.as_str(),
            format!("unsupported variable reference '{}'", lhs),
        ));
    }
    Ok((lhs, None))
}

#[derive(Debug)]
enum Slot {
    Value(FortranValue),
    Partial(PartialArray),
}

/// Variables of one group while its lines are being read.
struct GroupBuilder<'a> {
    name: &'a str,
    slots: LinkedHashMap<String, Slot>,
}

impl<'a> GroupBuilder<'a> {
    fn new(name: &'a str) -> Self {
        Self {
            name,
            slots: LinkedHashMap::new(),
        }
    }

    fn assign(&mut self, line: &LogicalLine) -> Result<()> {
        let assignment = split_assignment(line)?;
        trace!(
            "{}: {}{} = {}",
            self.name,
            assignment.name,
            assignment
                .index
                .map(|i| format!("({})", i + 1))
                .unwrap_or_default(),
            assignment.value
        );

        match (assignment.index, parse_value(assignment.value)) {
            (None, Some(value)) => self.set_scalar(assignment.name, value),
            (Some(index), Some(value)) => self.set_element(assignment.name, index, value, line)?,
            (start, None) => {
                let values = parse_value_list(assignment.value, line.number)?;
                if start.is_none() {
                    self.clear_scalar(assignment.name);
                }
                let start = start.unwrap_or(0);
                for (offset, value) in values.into_iter().enumerate() {
                    let index = start.checked_add(offset).ok_or_else(|| {
                        F90nmlError::malformed(
                            line.number,
                            line.text.as_str(),
                            "array index out of range",
                        )
                    })?;
                    self.set_element(assignment.name, index, value, line)?;
                }
            }
        }
        Ok(())
    }

    /// A later scalar assignment wins but the variable keeps its position.
    fn set_scalar(&mut self, name: &str, value: FortranValue) {
        match self.slots.get_mut(name) {
            Some(slot) => *slot = Slot::Value(value),
            None => {
                self.slots.insert(name.to_string(), Slot::Value(value));
            }
        }
    }

    /// An inline list replaces a scalar of the same name.
    fn clear_scalar(&mut self, name: &str) {
        if let Some(slot) = self.slots.get_mut(name) {
            if matches!(slot, Slot::Value(_)) {
                *slot = Slot::Partial(PartialArray::new());
            }
        }
    }

    fn set_element(
        &mut self,
        name: &str,
        index: usize,
        value: FortranValue,
        line: &LogicalLine,
    ) -> Result<()> {
        let slot = self
            .slots
            .entry(name.to_string())
            .or_insert_with(|| Slot::Partial(PartialArray::new()));
        match slot {
            Slot::Partial(array) => {
                array.set(index, value);
                Ok(())
            }
            Slot::Value(_) => Err(F90nmlError::malformed(
                line.number,
                line.text.as_str(),
                format!("'{}' already holds a scalar value", name),
            )),
        }
    }

    fn finish(self) -> Result<NamelistGroup> {
        let mut group = NamelistGroup::new();
        for (variable, slot) in self.slots {
            let value = match slot {
                Slot::Value(value) => value,
                Slot::Partial(array) => FortranValue::Array(array.resolve(self.name, &variable)?),
            };
            group.insert_value(&variable, value);
        }
        Ok(group)
    }
}

fn parse_group(block: &GroupBlock) -> Result<NamelistGroup> {
    let mut builder = GroupBuilder::new(&block.name);
    for line in &block.lines {
        builder.assign(line)?;
    }
    let group = builder.finish()?;
    debug!(
        "group '{}' (line {}): {} variables",
        block.name,
        block.line,
        group.len()
    );
    Ok(group)
}
