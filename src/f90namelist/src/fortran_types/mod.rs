// f90namelist/src/fortran_types/mod.rs

//! Fortran data types, their inference from text, and their formatting.

pub mod conversion;
pub mod formatting;
pub mod parsing;
pub mod value;


pub use formatting::{format_real, FormatOptions};
pub use parsing::{
    infer_fortran_type, parse_character, parse_complex, parse_integer, parse_logical,
    parse_real, parse_value, parse_value_list,
};
pub use value::FortranValue;
