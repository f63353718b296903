// f90namelist/src/namelist/core.rs

//! Core Namelist struct and basic operations.

use super::group::NamelistGroup;
use super::view::GroupView;
use crate::error::{F90nmlError, Result};
use crate::WriteOptions;
use linked_hash_map::LinkedHashMap;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A complete Fortran namelist: groups keyed by name, in source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Namelist {
    groups: LinkedHashMap<String, NamelistGroup>,
}

impl Namelist {
    /// Create a new empty namelist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new group (or find the existing one) and return a mutable
    /// reference to it.
    pub fn insert_group(&mut self, name: &str) -> &mut NamelistGroup {
        self.groups
            .entry(name.to_string())
            .or_insert_with(NamelistGroup::new)
    }

    /// Insert a group object directly, replacing a same-named group in place.
    pub fn insert_group_object(&mut self, name: &str, group: NamelistGroup) {
        match self.groups.get_mut(name) {
            Some(slot) => *slot = group,
            None => {
                self.groups.insert(name.to_string(), group);
            }
        }
    }

    /// Get a group by name.
    pub fn get_group(&self, name: &str) -> Option<&NamelistGroup> {
        self.groups.get(name)
    }

    /// Get a mutable reference to a group by name.
    pub fn get_group_mut(&mut self, name: &str) -> Option<&mut NamelistGroup> {
        self.groups.get_mut(name)
    }

    /// Check if a group exists.
    pub fn has_group(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    /// Remove a group by name.
    pub fn remove_group(&mut self, name: &str) -> Option<NamelistGroup> {
        self.groups.remove(name)
    }

    /// Get all group names in order.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Get an iterator over all groups.
    pub fn groups(&self) -> impl Iterator<Item = (&String, &NamelistGroup)> {
        self.groups.iter()
    }

    /// Get a mutable iterator over all groups.
    pub fn groups_mut(&mut self) -> impl Iterator<Item = (&String, &mut NamelistGroup)> {
        self.groups.iter_mut()
    }

    /// Field-style access to the variables of one group.
    ///
    /// The view can read and overwrite existing variables but never
    /// creates new ones.
    pub fn view(&mut self, group: &str) -> Result<GroupView<'_>> {
        match self.groups.get_mut(group) {
            Some(inner) => Ok(GroupView::new(group, inner)),
            None => Err(F90nmlError::GroupNotFound {
                group: group.to_string(),
            }),
        }
    }

    /// Convert this namelist to a Fortran string representation.
    pub fn to_fortran_string(&self, options: &WriteOptions) -> Result<String> {
        let mut lines = Vec::new();

        for (group_name, group) in self.groups() {
            debug!(
                "writing group '{}' with {} variables",
                group_name,
                group.len()
            );
            lines.push(format!("&{}", group_name));
            lines.extend(group.fortran_lines(options)?);
            lines.push("/".to_string());
        }

        let mut output = lines.join("\n");
        if options.end_newline && !output.is_empty() {
            output.push('\n');
        }
        Ok(output)
    }

    /// Check if the namelist is empty.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Get the number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }
}

impl FromStr for Namelist {
    type Err = F90nmlError;

    fn from_str(s: &str) -> Result<Self> {
        crate::reads(s)
    }
}

impl fmt::Display for Namelist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_fortran_string(&WriteOptions::default()) {
            Ok(s) => write!(f, "{}", s),
            Err(_) => write!(f, "<invalid namelist>"),
        }
    }
}
