//! Generic testing utilities for state machines.
//!
//! ## Organization
//!
//! - [`fixtures`] - Pre-configured bridges with mock collaborators
//! - [`transition`] - Value-based transition testing helpers
//! - [`proptest`] - Property-based testing macros

pub(crate) mod fixtures;
pub(crate) mod proptest;
pub(crate) mod transition;
