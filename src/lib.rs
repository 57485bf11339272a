// src/lib.rs
// ============================================================================
// Module: Section Bind Library
// Description: Typed binding and validation for hierarchical configuration.
// Purpose: Single source of truth for section -> typed-object semantics.
// Dependencies: serde, serde_json, thiserror, toml, url
// ============================================================================

//! ## Overview
//! `section-bind` walks a named section of hierarchical key/value
//! configuration into a strongly-typed object, validates the object against
//! declared field constraints, and for the Azure AD shape derives a default
//! scope from the application identifier when the scope list is absent.
//!
//! Validation is strict and fail-fast: a bound object is never observable
//! outside the pipeline unless every declared constraint holds.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod azure;
pub mod bind;
pub mod constraint;
pub mod section;
pub mod source;
pub mod validate;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use azure::AzureAdConfig;
pub use azure::CertificateConfig;
pub use azure::DEFAULT_SCOPE_SUFFIX;
pub use azure::KeyVaultConfig;
pub use bind::FromSection;
pub use bind::bind;
pub use constraint::Constrained;
pub use constraint::Constraint;
pub use constraint::ConstraintKind;
pub use constraint::FieldValue;
pub use section::Section;
pub use source::SourceError;
pub use source::from_json_str;
pub use source::from_json_value;
pub use source::from_toml_str;
pub use source::from_toml_value;
pub use source::load_settings;
pub use validate::ValidationError;
pub use validate::ValueShape;
pub use validate::get_valid;
pub use validate::get_valid_uri;
pub use validate::get_valid_value;
pub use validate::validate;
