// f90namelist/src/error.rs

//! Error types for reading and writing namelists.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for namelist operations.
pub type Result<T> = std::result::Result<T, F90nmlError>;

/// Errors that can occur when parsing or writing Fortran namelists.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum F90nmlError {
    /// I/O error when reading or writing files
    #[error("I/O error: {0}")]
    Io(String),

    /// A line that cannot be read as a single `name = value` assignment
    #[error("Malformed input at line {line}: {message} (`{text}`)")]
    MalformedInput {
        line: usize,
        text: String,
        message: String,
    },

    /// Indexed array assignments that leave gaps
    #[error(
        "Variable '{variable}' in group '{group}' has an array index assignment \
         ({index}) inconsistent with the number of list values ({count})"
    )]
    ArrayIndexInconsistency {
        group: String,
        variable: String,
        index: usize,
        count: usize,
    },

    /// A value that has no namelist representation
    #[error("Cannot format variable '{variable}': {message}")]
    ValueFormatting { variable: String, message: String },

    /// Variable not found
    #[error("Variable '{variable}' not found in group '{group}'")]
    VariableNotFound { variable: String, group: String },

    /// Group not found
    #[error("Group '{group}' not found")]
    GroupNotFound { group: String },

    /// File already exists (when force=false)
    #[error("File already exists: {}", .0.display())]
    FileAlreadyExists(PathBuf),

    /// JSON serialization/deserialization error
    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization error
    #[cfg(feature = "yaml")]
    #[error("YAML error: {0}")]
    Yaml(String),
}

impl From<io::Error> for F90nmlError {
    fn from(err: io::Error) -> Self {
        F90nmlError::Io(err.to_string())
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for F90nmlError {
    fn from(err: serde_json::Error) -> Self {
        F90nmlError::Json(err.to_string())
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for F90nmlError {
    fn from(err: serde_yaml::Error) -> Self {
        F90nmlError::Yaml(err.to_string())
    }
}

impl F90nmlError {
    /// Create a new malformed input error.
    pub fn malformed<S: Into<String>, T: Into<String>>(line: usize, text: T, message: S) -> Self {
        F90nmlError::MalformedInput {
            line,
            text: text.into(),
            message: message.into(),
        }
    }

    /// Create a new array index inconsistency error.
    pub fn array_index<S: Into<String>>(group: S, variable: S, index: usize, count: usize) -> Self {
        F90nmlError::ArrayIndexInconsistency {
            group: group.into(),
            variable: variable.into(),
            index,
            count,
        }
    }

    /// Create a new value formatting error.
    pub fn value_formatting<S: Into<String>>(variable: S, message: S) -> Self {
        F90nmlError::ValueFormatting {
            variable: variable.into(),
            message: message.into(),
        }
    }

    /// Get the error category as a string.
    pub fn category(&self) -> &'static str {
        match self {
            F90nmlError::Io(_) | F90nmlError::FileAlreadyExists(_) => "io",
            F90nmlError::MalformedInput { .. } => "parse",
            F90nmlError::ArrayIndexInconsistency { .. } => "array",
            F90nmlError::ValueFormatting { .. } => "format",
            F90nmlError::VariableNotFound { .. } | F90nmlError::GroupNotFound { .. } => "lookup",
            #[cfg(feature = "json")]
            F90nmlError::Json(_) => "json",
            #[cfg(feature = "yaml")]
            F90nmlError::Yaml(_) => "yaml",
        }
    }

    /// Source line the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            F90nmlError::MalformedInput { line, .. } => Some(*line),
            _ => None,
        }
    }
}
