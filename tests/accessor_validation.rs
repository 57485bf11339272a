//! Single-value accessor tests for section-bind.
// tests/accessor_validation.rs
// =============================================================================
// Module: Single-Value Accessor Tests
// Description: Validate ad-hoc scalar and URI lookups with full guarantees.
// Purpose: Ensure accessors enforce the same rules as object fields.
// =============================================================================

use section_bind::Section;
use section_bind::ValidationError;
use section_bind::ValueShape;
use section_bind::get_valid_uri;
use section_bind::get_valid_value;

mod common;

type TestResult = Result<(), String>;

#[test]
fn valid_uri_accessor_parses_value() -> TestResult {
    let section = common::section("Configuration1")?;
    let uri = get_valid_uri(&section, "AppIdentifier").map_err(|err| err.to_string())?;
    if uri.scheme() != "http" {
        return Err(format!("unexpected scheme {}", uri.scheme()));
    }
    Ok(())
}

#[test]
fn malformed_uri_accessor_rejected() -> TestResult {
    let section = common::section("InvalidConfiguration4")?;
    let want = ValidationError::MalformedValue {
        field: "AppIdentifier".to_string(),
        expected: ValueShape::AbsoluteUri,
    };
    match get_valid_uri(&section, "AppIdentifier") {
        Err(error) if error == want => Ok(()),
        Err(error) => Err(format!("expected {want}, got {error}")),
        Ok(uri) => Err(format!("expected failure, got {uri}")),
    }
}

#[test]
fn missing_key_accessor_rejected() -> TestResult {
    let section = common::section("InvalidConfiguration4")?;
    let want = ValidationError::RequiredFieldMissing {
        field: "TenantId".to_string(),
    };
    match get_valid_value::<String>(&section, "TenantId") {
        Err(error) if error == want => Ok(()),
        Err(error) => Err(format!("expected {want}, got {error}")),
        Ok(value) => Err(format!("expected failure, got {value}")),
    }
}

#[test]
fn present_value_accessor_returns_it() -> TestResult {
    let section = common::section("Configuration1")?;
    let tenant = get_valid_value::<String>(&section, "TenantId").map_err(|err| err.to_string())?;
    if tenant != "11111111-2222-3333-4444-555555555555" {
        return Err(format!("unexpected tenant id {tenant}"));
    }
    Ok(())
}

#[test]
fn typed_accessor_parses_scalar() -> TestResult {
    let section = Section::new("Server").with_child(Section::new("Port").with_value("8080"));
    let port = get_valid_value::<u16>(&section, "Port").map_err(|err| err.to_string())?;
    if port != 8080 {
        return Err(format!("unexpected port {port}"));
    }
    Ok(())
}

#[test]
fn typed_accessor_rejects_unparsable_scalar() -> TestResult {
    let section = Section::new("Server").with_child(Section::new("Port").with_value("eighty"));
    let want = ValidationError::MalformedValue {
        field: "Port".to_string(),
        expected: ValueShape::Named("u16"),
    };
    match get_valid_value::<u16>(&section, "Port") {
        Err(error) if error == want => Ok(()),
        Err(error) => Err(format!("expected {want}, got {error}")),
        Ok(port) => Err(format!("expected failure, got {port}")),
    }
}

#[test]
fn empty_value_counts_as_missing() -> TestResult {
    let section = Section::new("Sparse").with_child(Section::new("TenantId").with_value(""));
    let want = ValidationError::RequiredFieldMissing {
        field: "TenantId".to_string(),
    };
    match get_valid_value::<String>(&section, "TenantId") {
        Err(error) if error == want => Ok(()),
        Err(error) => Err(format!("expected {want}, got {error}")),
        Ok(value) => Err(format!("expected failure, got {value}")),
    }
}
