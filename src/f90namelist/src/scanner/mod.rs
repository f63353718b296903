// f90namelist/src/scanner/mod.rs

//! Text scanning for Fortran namelist files.
//!
//! Scanning happens in two passes: comments are removed over the
//! entire input, then `&name ... /` blocks are cut out and their bodies
//! split into assignment lines.

pub mod lines;
pub mod scanner;

// Re-export main types and functions
pub use lines::{logical_lines, strip_inline_comment, LogicalLine};
pub use scanner::{GroupBlock, Scanner};
