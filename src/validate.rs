// src/validate.rs
// ============================================================================
// Module: Constraint Validator
// Description: Fail-fast validation of bound objects and single values.
// Purpose: Ensure no partially valid object escapes the pipeline.
// Dependencies: thiserror, url
// ============================================================================

//! ## Overview
//! The validator runs a shape's constraint table in declaration order against
//! the bound field values and raises on the first violation. Single-value
//! accessors give ad-hoc lookups the same guarantees as object fields.
//!
//! Callers treat a [`ValidationError`] as fatal for the section, typically
//! aborting startup; there is no partial or degraded success path.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::any;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use url::Url;

use crate::bind::FromSection;
use crate::bind::bind;
use crate::constraint::Constrained;
use crate::constraint::Constraint;
use crate::constraint::ConstraintKind;
use crate::constraint::FieldValue;
use crate::section::Section;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Shape a malformed value was expected to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    /// A well-formed absolute URI.
    AbsoluteUri,
    /// A named scalar or custom shape.
    Named(&'static str),
}

impl fmt::Display for ValueShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AbsoluteUri => f.write_str("absolute URI"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// Constraint violation raised by the validator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Field had no value after binding and optional defaulting.
    #[error("required field `{field}` is missing or empty")]
    RequiredFieldMissing {
        /// Name of the offending field.
        field: String,
    },
    /// Field had a value that failed shape validation.
    #[error("field `{field}` is not a well-formed {expected}")]
    MalformedValue {
        /// Name of the offending field.
        field: String,
        /// Shape the value was expected to have.
        expected: ValueShape,
    },
}

// ============================================================================
// SECTION: Validator Core
// ============================================================================

/// Validates a bound object against its declared constraint table.
///
/// Constraints run in declaration order and the first violation is raised;
/// the object is returned untouched when every constraint holds.
///
/// # Errors
///
/// Returns [`ValidationError`] identifying the offending field and rule.
pub fn validate<T: Constrained>(object: T) -> Result<T, ValidationError> {
    for constraint in T::constraints() {
        check(constraint, &object.field(constraint.field))?;
    }
    Ok(object)
}

/// Binds a section and validates the result in one step.
///
/// Shapes with a default-derivation step (see [`crate::azure::AzureAdConfig`])
/// expose their own entry points that run derivation between these phases.
///
/// # Errors
///
/// Returns [`ValidationError`] when the bound object violates a constraint.
pub fn get_valid<T: FromSection + Constrained>(section: &Section) -> Result<T, ValidationError> {
    validate(bind::<T>(section))
}

/// Applies one constraint to one bound field value.
fn check(constraint: &Constraint, value: &FieldValue<'_>) -> Result<(), ValidationError> {
    match constraint.kind {
        ConstraintKind::Required => {
            if value.is_absent() {
                return Err(ValidationError::RequiredFieldMissing {
                    field: constraint.field.to_string(),
                });
            }
            Ok(())
        }
        // Shape rules only judge present values; pair with `Required` to
        // make a well-formed value mandatory.
        ConstraintKind::ValidUri => match value.text() {
            Some(text) if Url::parse(text).is_err() => Err(ValidationError::MalformedValue {
                field: constraint.field.to_string(),
                expected: ValueShape::AbsoluteUri,
            }),
            _ => Ok(()),
        },
        ConstraintKind::Custom {
            shape,
            check: predicate,
        } => match value.text() {
            Some(text) if !predicate(text) => Err(ValidationError::MalformedValue {
                field: constraint.field.to_string(),
                expected: ValueShape::Named(shape),
            }),
            _ => Ok(()),
        },
    }
}

// ============================================================================
// SECTION: Single-Value Accessors
// ============================================================================

/// Reads one scalar key with the same guarantees as object fields.
///
/// # Errors
///
/// Returns [`ValidationError::RequiredFieldMissing`] when the key is absent
/// or empty, and [`ValidationError::MalformedValue`] when the value does not
/// parse as `T`.
pub fn get_valid_value<T: FromStr>(section: &Section, key: &str) -> Result<T, ValidationError> {
    let Some(text) = section.get(key).filter(|text| !text.is_empty()) else {
        return Err(ValidationError::RequiredFieldMissing {
            field: key.to_string(),
        });
    };
    text.parse().map_err(|_| ValidationError::MalformedValue {
        field: key.to_string(),
        expected: ValueShape::Named(short_type_name::<T>()),
    })
}

/// Reads one URI-shaped key with the same guarantees as object fields.
///
/// # Errors
///
/// Returns [`ValidationError::RequiredFieldMissing`] when the key is absent
/// or empty, and [`ValidationError::MalformedValue`] when the value is not a
/// well-formed absolute URI.
pub fn get_valid_uri(section: &Section, key: &str) -> Result<Url, ValidationError> {
    let Some(text) = section.get(key).filter(|text| !text.is_empty()) else {
        return Err(ValidationError::RequiredFieldMissing {
            field: key.to_string(),
        });
    };
    Url::parse(text).map_err(|_| ValidationError::MalformedValue {
        field: key.to_string(),
        expected: ValueShape::AbsoluteUri,
    })
}

/// Returns the unqualified type name for accessor violation messages.
fn short_type_name<T>() -> &'static str {
    let full = any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
