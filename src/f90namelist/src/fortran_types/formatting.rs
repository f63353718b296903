// f90namelist/src/fortran_types/formatting.rs

//! Formatting options and output logic for Fortran values.

use super::value::FortranValue;

/// Formatting options for Fortran value output.
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// Round reals to this many decimal places before trimming zeros
    pub float_precision: Option<usize>,
}

impl FortranValue {
    /// Format this value as it would appear on the right side of an assignment.
    ///
    /// Arrays render space-separated. Returns `None` for values with no
    /// namelist spelling: empty arrays and arrays that contain arrays.
    pub fn to_fortran_string_with_options(&self, options: &FormatOptions) -> Option<String> {
        match self {
            FortranValue::Integer(i) => Some(i.to_string()),
            FortranValue::Real(f) => Some(format_real(*f, options)),
            FortranValue::Complex(r, i) => Some(format!(
                "({},{})",
                format_real(*r, options),
                format_real(*i, options)
            )),
            FortranValue::Logical(b) => Some(format_logical(*b).to_string()),
            FortranValue::Character(s) => Some(format!("'{}'", s)),
            FortranValue::Array(values) => {
                if values.is_empty() || values.iter().any(FortranValue::is_array) {
                    return None;
                }
                let formatted: Option<Vec<String>> = values
                    .iter()
                    .map(|v| v.to_fortran_string_with_options(options))
                    .collect();
                formatted.map(|parts| parts.join(" "))
            }
        }
    }
}

/// Fixed-point notation with trailing zeros removed; the decimal point stays.
///
/// `f64`'s `Display` never switches to exponent notation and prints the
/// shortest digits that read back to the same value.
pub fn format_real(value: f64, options: &FormatOptions) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let s = match options.float_precision {
        Some(precision) => format!("{:.precision$}", value, precision = precision),
        None => value.to_string(),
    };

    if s.contains('.') {
        s.trim_end_matches('0').to_string()
    } else {
        format!("{}.", s)
    }
}

fn format_logical(value: bool) -> &'static str {
    if value {
        ".true."
    } else {
        ".false."
    }
}
