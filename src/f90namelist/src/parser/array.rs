// f90namelist/src/parser/array.rs

//! Accumulator for arrays assigned element by element.

use crate::error::{F90nmlError, Result};
use crate::fortran_types::FortranValue;
use std::collections::BTreeMap;

/// Sparse array under construction, keyed by 0-based index.
///
/// The final length is only known once the whole group has been read, so
/// gaps are checked in [`PartialArray::resolve`] rather than on insertion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialArray {
    elements: BTreeMap<usize, FortranValue>,
}

impl PartialArray {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign one element; an earlier value at the same index is replaced.
    pub fn set(&mut self, index: usize, value: FortranValue) {
        self.elements.insert(index, value);
    }

    /// Number of distinct indices assigned so far.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Convert into a dense array. Every index must be below the number of
    /// distinct indices, so any gap is an error.
    pub fn resolve(self, group: &str, variable: &str) -> Result<Vec<FortranValue>> {
        let count = self.elements.len();
        if let Some(&max_index) = self.elements.keys().next_back() {
            if max_index >= count {
                return Err(F90nmlError::array_index(group, variable, max_index + 1, count));
            }
        }
        Ok(self.elements.into_values().collect())
    }
}
