// f90namelist/src/lib.rs

//! Parse and write Fortran 90 namelist files.
//!
//! A namelist file holds named groups of `name = value` assignments:
//!
//! ```text
//! &CCFMSIM_SETUP
//!   CCFMrad = 800.
//! /
//! ```
//!
//! [`reads`] turns such text into a [`Namelist`] of typed
//! [`FortranValue`]s, keeping group and variable order. Arrays given as
//! inline lists or as `name(k) = value` assignments become one array.
//! [`dump`] writes a namelist back to text.

pub mod error;
pub mod fortran_types;
pub mod namelist;
pub mod parser;
pub mod scanner;

use log::debug;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub use error::{F90nmlError, Result};
pub use fortran_types::FortranValue;
pub use namelist::{GroupView, Namelist, NamelistGroup};
pub use parser::NamelistParser;

/// Parse a Fortran namelist from a file path.
///
/// # Examples
///
/// ```no_run
/// fn main() -> Result<(), f90namelist::F90nmlError> {
///     let nml = f90namelist::read("param.nml")?;
///     println!("{:#?}", nml);
///     Ok(())
/// }
/// ```
pub fn read<P: AsRef<Path>>(path: P) -> Result<Namelist> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    debug!("read {} bytes from {}", contents.len(), path.display());
    reads(&contents)
}

/// Parse a Fortran namelist from a string.
///
/// # Examples
///
/// ```
/// # use f90namelist::FortranValue;
/// fn main() -> Result<(), f90namelist::F90nmlError> {
///     let nml = f90namelist::reads("&data_nml\n  x = 1\n  y = 2.0\n  z = T\n/")?;
///     let group = nml.get_group("data_nml").unwrap();
///     assert_eq!(group.get("x"), Some(&FortranValue::Integer(1)));
///     assert_eq!(group.get_bool("z"), Some(true));
///     Ok(())
/// }
/// ```
pub fn reads(content: &str) -> Result<Namelist> {
    NamelistParser::new(content).parse()
}

/// Render a namelist as text, with arrays either on one line
/// (`array_inline`) or as one `name(k) = value` line per element.
///
/// # Examples
///
/// ```
/// # use f90namelist::Namelist;
/// # fn main() -> Result<(), f90namelist::F90nmlError> {
/// let mut nml = Namelist::new();
/// nml.insert_group("XXDATA").insert("XXREAL", vec![1.0, 2.0]);
///
/// assert_eq!(f90namelist::dump(&nml, true)?, "&XXDATA\n  XXREAL = 1. 2.\n/");
/// assert_eq!(
///     f90namelist::dump(&nml, false)?,
///     "&XXDATA\n  XXREAL(1) = 1.\n  XXREAL(2) = 2.\n/"
/// );
/// # Ok(())
/// # }
/// ```
pub fn dump(nml: &Namelist, array_inline: bool) -> Result<String> {
    let options = WriteOptions {
        array_inline,
        ..WriteOptions::default()
    };
    nml.to_fortran_string(&options)
}

/// Write a namelist to a file.
///
/// # Examples
///
/// ```no_run
/// # use f90namelist::Namelist;
/// # fn main() -> Result<(), f90namelist::F90nmlError> {
/// let mut nml = Namelist::new();
/// nml.insert_group("data_nml")
///    .insert("x", 1i64)
///    .insert("y", 2.0f64)
///    .insert("enabled", true);
///
/// f90namelist::write(&nml, "output.nml")?;
/// # Ok(())
/// # }
/// ```
pub fn write<P: AsRef<Path>>(nml: &Namelist, path: P) -> Result<()> {
    write_with_options(nml, path, &WriteOptions::default())
}

/// Write a namelist to a file with specific options.
pub fn write_with_options<P: AsRef<Path>>(
    nml: &Namelist,
    path: P,
    options: &WriteOptions,
) -> Result<()> {
    let path = path.as_ref();

    if !options.force && path.exists() {
        return Err(F90nmlError::FileAlreadyExists(path.to_path_buf()));
    }

    let mut writer = BufWriter::new(File::create(path)?);
    write_to_writer(nml, &mut writer, options)?;
    writer.flush()?;
    debug!("wrote {} groups to {}", nml.len(), path.display());
    Ok(())
}

/// Write a namelist to any writer implementing the Write trait.
pub fn write_to_writer<W: Write>(
    nml: &Namelist,
    writer: &mut W,
    options: &WriteOptions,
) -> Result<()> {
    writer.write_all(nml.to_fortran_string(options)?.as_bytes())?;
    Ok(())
}

/// Options for controlling namelist output formatting.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Force overwrite existing files
    pub force: bool,
    /// Indentation of variable lines
    pub indent: String,
    /// Write arrays on one line instead of one indexed line per element
    pub array_inline: bool,
    /// Whether to add commas at the end of lines
    pub end_comma: bool,
    /// Fixed number of decimals for reals before trailing zeros are stripped
    pub float_precision: Option<usize>,
    /// Terminate the output with a newline
    pub end_newline: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            force: false,
            indent: "  ".to_string(),
            array_inline: true,
            end_comma: false,
            float_precision: None,
            end_newline: false,
        }
    }
}

#[cfg(feature = "json")]
/// Convert a namelist to JSON string.
pub fn to_json(nml: &Namelist) -> Result<String> {
    serde_json::to_string_pretty(nml).map_err(F90nmlError::from)
}

#[cfg(feature = "json")]
/// Parse a namelist from JSON string.
pub fn from_json(json: &str) -> Result<Namelist> {
    serde_json::from_str(json).map_err(F90nmlError::from)
}

#[cfg(feature = "yaml")]
/// Convert a namelist to YAML string.
pub fn to_yaml(nml: &Namelist) -> Result<String> {
    serde_yaml::to_string(nml).map_err(F90nmlError::from)
}

#[cfg(feature = "yaml")]
/// Parse a namelist from YAML string.
pub fn from_yaml(yaml: &str) -> Result<Namelist> {
    serde_yaml::from_str(yaml).map_err(F90nmlError::from)
}
