// src/constraint.rs
// ============================================================================
// Module: Declarative Field Constraints
// Description: Static per-field validation rules for bound objects.
// Purpose: Let shapes declare rules once; the validator consumes them.
// Dependencies: none
// ============================================================================

//! ## Overview
//! A shape declares its rules as a static, declaration-ordered table of
//! [`Constraint`] values and exposes bound field values through
//! [`Constrained::field`]. The validator walks the table in order and stops
//! at the first violation. Nested fields are addressed with dotted names
//! (`"KeyVault.Url"`).

// ============================================================================
// SECTION: Constraint Model
// ============================================================================

/// Predicate used by [`ConstraintKind::Custom`] rules.
///
/// Receives the present, non-empty text value; absent values never reach it.
pub type CustomCheck = fn(&str) -> bool;

/// The rule a [`Constraint`] applies to its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    /// The field must have a non-empty value after binding and defaulting.
    Required,
    /// A present text value must parse as a well-formed absolute URI.
    ValidUri,
    /// A present text value must satisfy a named predicate.
    Custom {
        /// Human-readable shape name used in violation messages.
        shape: &'static str,
        /// Predicate deciding whether the value is well-formed.
        check: CustomCheck,
    },
}

/// One declarative rule attached to a named field.
///
/// Constraint tables are static and shared read-only across all bind
/// operations for the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraint {
    /// Field the rule applies to; dotted names address nested fields.
    pub field: &'static str,
    /// Rule kind.
    pub kind: ConstraintKind,
}

impl Constraint {
    /// Declares a `Required` rule for a field.
    #[must_use]
    pub const fn required(field: &'static str) -> Self {
        Self {
            field,
            kind: ConstraintKind::Required,
        }
    }

    /// Declares a `ValidUri` rule for a field.
    #[must_use]
    pub const fn valid_uri(field: &'static str) -> Self {
        Self {
            field,
            kind: ConstraintKind::ValidUri,
        }
    }

    /// Declares a `Custom` rule with a named shape predicate.
    #[must_use]
    pub const fn custom(field: &'static str, shape: &'static str, check: CustomCheck) -> Self {
        Self {
            field,
            kind: ConstraintKind::Custom {
                shape,
                check,
            },
        }
    }
}

// ============================================================================
// SECTION: Field Access
// ============================================================================

/// Borrowed view of one bound field, as seen by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Scalar text field; `None` when the field is absent.
    Text(Option<&'a str>),
    /// Ordered sequence field.
    Sequence(&'a [String]),
}

impl FieldValue<'_> {
    /// Returns true when the field counts as absent for `Required` rules.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        match self {
            Self::Text(value) => value.is_none_or(str::is_empty),
            Self::Sequence(items) => items.is_empty(),
        }
    }

    /// Returns the present, non-empty text value, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => value.filter(|text| !text.is_empty()),
            Self::Sequence(_) => None,
        }
    }
}

/// Exposes a shape's static constraint table and bound field values.
///
/// `constraints` and `field` are declared side by side in the shape's module
/// so the field names cannot drift apart silently; an unknown name resolves
/// to absent text and surfaces as a `Required` failure in the shape's tests.
pub trait Constrained {
    /// Returns the declaration-ordered constraint table for the shape.
    fn constraints() -> &'static [Constraint];

    /// Returns the bound value of the named field.
    fn field(&self, name: &str) -> FieldValue<'_>;
}
