// f90namelist/src/fortran_types/value.rs

//! Core FortranValue enum and basic operations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a Fortran value that can appear in a namelist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum FortranValue {
    /// Integer value
    Integer(i64),

    /// Real (floating-point) value
    Real(f64),

    /// Complex value (real, imag)
    Complex(f64, f64),

    /// Logical (boolean) value
    Logical(bool),

    /// Character string
    Character(String),

    /// One-dimensional array of values
    Array(Vec<FortranValue>),
}

impl FortranValue {
    /// Create a new complex value.
    pub fn complex(real: f64, imag: f64) -> Self {
        FortranValue::Complex(real, imag)
    }

    /// Create a new character value.
    pub fn character<S: Into<String>>(value: S) -> Self {
        FortranValue::Character(value.into())
    }

    /// Get the type name as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            FortranValue::Integer(_) => "integer",
            FortranValue::Real(_) => "real",
            FortranValue::Complex(_, _) => "complex",
            FortranValue::Logical(_) => "logical",
            FortranValue::Character(_) => "character",
            FortranValue::Array(_) => "array",
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, FortranValue::Array(_))
    }

    /// Get the array length if this is an array.
    pub fn array_len(&self) -> Option<usize> {
        match self {
            FortranValue::Array(arr) => Some(arr.len()),
            _ => None,
        }
    }

    /// Integer value, including integral reals.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FortranValue::Integer(i) => Some(*i),
            FortranValue::Real(f)
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 =>
            {
                Some(*f as i64)
            }
            _ => None,
        }
    }

    /// Real value, widening integers.
    pub fn as_real(&self) -> Option<f64> {
        match self {
            FortranValue::Real(f) => Some(*f),
            FortranValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_complex(&self) -> Option<(f64, f64)> {
        match self {
            FortranValue::Complex(r, i) => Some((*r, *i)),
            FortranValue::Real(f) => Some((*f, 0.0)),
            FortranValue::Integer(i) => Some((*i as f64, 0.0)),
            _ => None,
        }
    }

    pub fn as_logical(&self) -> Option<bool> {
        match self {
            FortranValue::Logical(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_character(&self) -> Option<&str> {
        match self {
            FortranValue::Character(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[FortranValue]> {
        match self {
            FortranValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Short description for log output.
    pub fn summary(&self) -> String {
        match self {
            FortranValue::Array(arr) => format!("array[{}]", arr.len()),
            FortranValue::Character(s) if s.chars().count() > 20 => {
                let preview: String = s.chars().take(17).collect();
                format!("character(\"{}...\")", preview)
            }
            other => format!("{}({})", other.type_name(), other),
        }
    }
}

impl fmt::Display for FortranValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use crate::fortran_types::formatting::FormatOptions;
        match self.to_fortran_string_with_options(&FormatOptions::default()) {
            Some(s) => write!(f, "{}", s),
            None => write!(f, "<{}>", self.type_name()),
        }
    }
}
