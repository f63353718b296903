// f90namelist/src/namelist/mod.rs

//! Fortran namelist data structures.
//!
//! A [`Namelist`] maps group names to [`NamelistGroup`]s, which map
//! variable names to values. Both keep insertion order so that writing a
//! parsed namelist reproduces the order of the source.

pub mod core;
pub mod group;
pub mod view;

// Re-export the main types
pub use self::core::Namelist;
pub use group::NamelistGroup;
pub use view::GroupView;
