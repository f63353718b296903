// f90namelist/src/fortran_types/conversion.rs

//! Type conversion implementations for FortranValue.

use super::value::FortranValue;

// Convenient From implementations for common Rust types
impl From<i32> for FortranValue {
    fn from(value: i32) -> Self {
        FortranValue::Integer(value as i64)
    }
}

impl From<i64> for FortranValue {
    fn from(value: i64) -> Self {
        FortranValue::Integer(value)
    }
}

impl From<f32> for FortranValue {
    fn from(value: f32) -> Self {
        FortranValue::Real(value as f64)
    }
}

impl From<f64> for FortranValue {
    fn from(value: f64) -> Self {
        FortranValue::Real(value)
    }
}

impl From<bool> for FortranValue {
    fn from(value: bool) -> Self {
        FortranValue::Logical(value)
    }
}

impl From<String> for FortranValue {
    fn from(value: String) -> Self {
        FortranValue::Character(value)
    }
}

impl From<&str> for FortranValue {
    fn from(value: &str) -> Self {
        FortranValue::Character(value.to_string())
    }
}

impl From<(f64, f64)> for FortranValue {
    fn from((real, imag): (f64, f64)) -> Self {
        FortranValue::Complex(real, imag)
    }
}

impl From<Vec<FortranValue>> for FortranValue {
    fn from(value: Vec<FortranValue>) -> Self {
        FortranValue::Array(value)
    }
}

macro_rules! impl_from_vec {
    ($($t:ty),*) => {
        $(
            impl From<Vec<$t>> for FortranValue {
                fn from(values: Vec<$t>) -> Self {
                    FortranValue::Array(values.into_iter().map(FortranValue::from).collect())
                }
            }
        )*
    };
}

impl_from_vec!(i32, i64, f32, f64, bool, String, &str, (f64, f64));
