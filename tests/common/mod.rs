// tests/common/mod.rs
// =============================================================================
// Module: Section Bind Test Helpers
// Description: Shared settings fixture for binding and validation tests.
// Purpose: Reduce duplication across integration tests for section-bind.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use section_bind::Section;
use section_bind::from_json_str;

/// Settings document mirroring a typical appsettings.json layout.
pub const APPSETTINGS_JSON: &str = r#"{
  "Configuration1": {
    "Instance": "https://login.microsoftonline.com/",
    "TenantId": "11111111-2222-3333-4444-555555555555",
    "ClientId": "66666666-7777-8888-9999-000000000000",
    "AppIdentifier": "http://AppIdentifier",
    "Scopes": ["api://configuration1/read", "api://configuration1/write"]
  },
  "Configuration2": {
    "TenantId": "11111111-2222-3333-4444-555555555555",
    "ClientId": "66666666-7777-8888-9999-000000000000",
    "AppIdentifier": "http://AppIdentifier"
  },
  "InvalidConfiguration1": {
    "TenantId": "11111111-2222-3333-4444-555555555555",
    "ClientId": "66666666-7777-8888-9999-000000000000",
    "AppIdentifier": "not an absolute uri",
    "Scopes": ["api://invalid/read"]
  },
  "InvalidConfiguration3": {
    "TenantId": "11111111-2222-3333-4444-555555555555",
    "ClientId": "66666666-7777-8888-9999-000000000000",
    "Scopes": ["api://invalid/read"]
  },
  "InvalidConfiguration4": {
    "AppIdentifier": "not an absolute uri"
  },
  "CertificateConfiguration1": {
    "TenantId": "11111111-2222-3333-4444-555555555555",
    "ClientId": "66666666-7777-8888-9999-000000000000",
    "Thumbprint": "0123456789abcdef0123456789abcdef01234567",
    "KeyVault": {
      "Url": "https://vault.example.net/",
      "CertificateName": "signing-cert"
    }
  }
}"#;

/// Parses the shared settings fixture into a root section tree.
pub fn settings() -> Result<Section, String> {
    from_json_str(APPSETTINGS_JSON).map_err(|err| err.to_string())
}

/// Returns an owned copy of one named section of the fixture.
pub fn section(path: &str) -> Result<Section, String> {
    Ok(settings()?.section(path).clone())
}
