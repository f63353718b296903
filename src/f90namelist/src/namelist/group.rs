// f90namelist/src/namelist/group.rs

//! Namelist group data structure and operations.

use crate::error::{F90nmlError, Result};
use crate::fortran_types::{FormatOptions, FortranValue};
use crate::WriteOptions;
use linked_hash_map::LinkedHashMap;
use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// A single namelist group containing variables in assignment order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamelistGroup {
    variables: LinkedHashMap<String, FortranValue>,
}

impl NamelistGroup {
    /// Create a new empty namelist group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a variable with automatic type conversion.
    pub fn insert<T: Into<FortranValue>>(&mut self, name: &str, value: T) -> &mut Self {
        self.insert_value(name, value.into())
    }

    /// Insert a variable with explicit FortranValue.
    ///
    /// An existing variable is overwritten but keeps its position.
    pub fn insert_value(&mut self, name: &str, value: FortranValue) -> &mut Self {
        match self.variables.get_mut(name) {
            Some(slot) => *slot = value,
            None => {
                self.variables.insert(name.to_string(), value);
            }
        }
        self
    }

    /// Get a variable by name.
    pub fn get(&self, name: &str) -> Option<&FortranValue> {
        self.variables.get(name)
    }

    /// Get a mutable reference to a variable by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut FortranValue> {
        self.variables.get_mut(name)
    }

    /// Check if a variable exists.
    pub fn has_variable(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Remove a variable by name.
    pub fn remove(&mut self, name: &str) -> Option<FortranValue> {
        self.variables.remove(name)
    }

    /// Get all variable names in order.
    pub fn variable_names(&self) -> impl Iterator<Item = &str> {
        self.variables.keys().map(String::as_str)
    }

    /// Get an iterator over all variables.
    pub fn variables(&self) -> impl Iterator<Item = (&String, &FortranValue)> {
        self.variables.iter()
    }

    /// Get a mutable iterator over all variables.
    pub fn variables_mut(&mut self) -> impl Iterator<Item = (&String, &mut FortranValue)> {
        self.variables.iter_mut()
    }

    /// Render the assignment lines of this group, without the `&name` and
    /// `/` delimiters.
    pub fn fortran_lines(&self, options: &WriteOptions) -> Result<Vec<String>> {
        let format_options = FormatOptions {
            float_precision: options.float_precision,
        };
        let comma = if options.end_comma { "," } else { "" };
        let mut lines = Vec::with_capacity(self.variables.len());

        for (name, value) in self.variables() {
            trace!("formatting {} = {}", name, value.summary());
            match value {
                FortranValue::Array(elements) => {
                    if elements.is_empty() {
                        return Err(F90nmlError::value_formatting(
                            name.as_str(),
                            "empty arrays have no namelist representation",
                        ));
                    }
                    let formatted = elements
                        .iter()
                        .map(|element| format_element(name, element, &format_options))
                        .collect::<Result<Vec<_>>>()?;

                    // `a = v` would read back as a scalar, so a single
                    // element always keeps its index.
                    if options.array_inline && formatted.len() > 1 {
                        lines.push(format!(
                            "{}{} = {}{}",
                            options.indent,
                            name,
                            formatted.join(" "),
                            comma
                        ));
                    } else {
                        for (i, element) in formatted.iter().enumerate() {
                            lines.push(format!(
                                "{}{}({}) = {}{}",
                                options.indent,
                                name,
                                i + 1,
                                element,
                                comma
                            ));
                        }
                    }
                }
                scalar => {
                    let formatted = format_element(name, scalar, &format_options)?;
                    lines.push(format!("{}{} = {}{}", options.indent, name, formatted, comma));
                }
            }
        }

        Ok(lines)
    }

    /// Convert this group to a Fortran string representation.
    pub fn to_fortran_string(&self, options: &WriteOptions) -> Result<String> {
        Ok(self.fortran_lines(options)?.join("\n"))
    }

    /// Convenience methods for getting typed values
    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.get(name)?.as_integer()
    }

    pub fn get_f64(&self, name: &str) -> Option<f64> {
        self.get(name)?.as_real()
    }

    pub fn get_complex(&self, name: &str) -> Option<(f64, f64)> {
        self.get(name)?.as_complex()
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name)?.as_logical()
    }

    pub fn get_string(&self, name: &str) -> Option<&str> {
        self.get(name)?.as_character()
    }

    pub fn get_array(&self, name: &str) -> Option<&[FortranValue]> {
        self.get(name)?.as_array()
    }

    /// Check if the group is empty.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Get the number of variables.
    pub fn len(&self) -> usize {
        self.variables.len()
    }
}

fn format_element(name: &str, value: &FortranValue, options: &FormatOptions) -> Result<String> {
    if value.is_array() {
        return Err(F90nmlError::value_formatting(
            name,
            "arrays may only contain scalar values",
        ));
    }
    value.to_fortran_string_with_options(options).ok_or_else(|| {
        F90nmlError::value_formatting(name.to_string(), format!("unsupported {}", value.type_name()))
    })
}

impl Index<&str> for NamelistGroup {
    type Output = FortranValue;

    fn index(&self, name: &str) -> &FortranValue {
        self.get(name)
            .unwrap_or_else(|| panic!("variable '{}' not found in group", name))
    }
}

impl IndexMut<&str> for NamelistGroup {
    fn index_mut(&mut self, name: &str) -> &mut FortranValue {
        self.get_mut(name)
            .unwrap_or_else(|| panic!("variable '{}' not found in group", name))
    }
}

impl fmt::Display for NamelistGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_fortran_string(&WriteOptions::default()) {
            Ok(s) => write!(f, "{}", s),
            Err(_) => write!(f, "<invalid group>"),
        }
    }
}
