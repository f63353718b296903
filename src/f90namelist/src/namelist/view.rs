// f90namelist/src/namelist/view.rs

//! Field-style access to the variables of a group.

use super::group::NamelistGroup;
use crate::error::{F90nmlError, Result};
use crate::fortran_types::FortranValue;

/// Read/write view over one group that refuses to create new variables.
#[derive(Debug)]
pub struct GroupView<'a> {
    name: String,
    group: &'a mut NamelistGroup,
}

impl<'a> GroupView<'a> {
    pub(crate) fn new(name: &str, group: &'a mut NamelistGroup) -> Self {
        Self {
            name: name.to_string(),
            group,
        }
    }

    /// Name of the viewed group.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, variable: &str) -> Option<&FortranValue> {
        self.group.get(variable)
    }

    /// Overwrite an existing variable and return its previous value.
    pub fn set<T: Into<FortranValue>>(&mut self, variable: &str, value: T) -> Result<FortranValue> {
        match self.group.get_mut(variable) {
            Some(slot) => Ok(std::mem::replace(slot, value.into())),
            None => Err(F90nmlError::VariableNotFound {
                variable: variable.to_string(),
                group: self.name.clone(),
            }),
        }
    }

    pub fn variable_names(&self) -> impl Iterator<Item = &str> {
        self.group.variable_names()
    }
}
