// src/bind.rs
// ============================================================================
// Module: Section Binder
// Description: Maps configuration section keys onto typed object fields.
// Purpose: Total, infallible transformation from sections to typed objects.
// Dependencies: none
// ============================================================================

//! ## Overview
//! Binding walks a [`Section`] into a typed object. Each target type
//! implements [`FromSection`] explicitly, reading its fields by name through
//! the section's case-insensitive lookup helpers; no reflection is involved.
//!
//! Binding never fails. Missing keys leave fields at their zero/absent value
//! and malformed values are carried as-is, so that validation is the single
//! error channel reporting all problems.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::section::Section;

// ============================================================================
// SECTION: Binder Seam
// ============================================================================

/// Constructs a typed object from a configuration section.
///
/// Implementations read each field through [`Section::get_string`],
/// [`Section::get_sequence`], or recursive [`Section::section`] lookups, and
/// must be total: an empty section binds to the type's default shape.
pub trait FromSection: Sized {
    /// Binds the section's keys onto the target type's fields.
    fn from_section(section: &Section) -> Self;
}

/// Binds a section into `T` without validating it.
///
/// Most callers want [`crate::validate::get_valid`] instead, which refuses to
/// hand back an object violating its declared constraints.
#[must_use]
pub fn bind<T: FromSection>(section: &Section) -> T {
    T::from_section(section)
}
