// src/azure.rs
// ============================================================================
// Module: Azure AD Configuration Shapes
// Description: Constraint-annotated shapes for Azure AD client settings.
// Purpose: Typed, validated access to app registration and certificate data.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Two configuration shapes with static constraint tables: [`AzureAdConfig`]
//! for an app registration (with default-scope derivation) and
//! [`CertificateConfig`] for certificate-based credentials backed by a nested
//! `KeyVault` section.
//!
//! Scope derivation is all-or-nothing: only a fully empty scope list is
//! replaced with the canonical `<AppIdentifier>/.default` entry, and the
//! derivation never invents an application identifier.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;

use crate::bind::FromSection;
use crate::bind::bind;
use crate::constraint::Constrained;
use crate::constraint::Constraint;
use crate::constraint::FieldValue;
use crate::section::Section;
use crate::validate::ValidationError;
use crate::validate::validate;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Suffix appended to the app identifier when deriving the default scope.
pub const DEFAULT_SCOPE_SUFFIX: &str = "/.default";

/// Expected length of a hex-encoded SHA-1 certificate thumbprint.
const THUMBPRINT_LENGTH: usize = 40;

// ============================================================================
// SECTION: Azure AD Shape
// ============================================================================

/// Azure AD app registration settings bound from a configuration section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AzureAdConfig {
    /// Authority instance base address.
    pub instance: String,
    /// Directory (tenant) identifier.
    pub tenant_id: String,
    /// Application (client) identifier.
    pub client_id: String,
    /// Optional client secret for confidential clients.
    pub client_secret: Option<String>,
    /// URI identifying the protected application.
    pub app_identifier: String,
    /// Scopes requested for tokens, in declared order.
    pub scopes: Vec<String>,
}

/// Declaration-ordered constraint table for [`AzureAdConfig`].
const AZURE_AD_CONSTRAINTS: &[Constraint] = &[
    Constraint::required("TenantId"),
    Constraint::required("ClientId"),
    Constraint::required("AppIdentifier"),
    Constraint::valid_uri("AppIdentifier"),
    Constraint::required("Scopes"),
];

impl FromSection for AzureAdConfig {
    fn from_section(section: &Section) -> Self {
        Self {
            instance: section.get_string("Instance"),
            tenant_id: section.get_string("TenantId"),
            client_id: section.get_string("ClientId"),
            client_secret: section.get("ClientSecret").map(str::to_string),
            app_identifier: section.get_string("AppIdentifier"),
            scopes: section.get_sequence("Scopes"),
        }
    }
}

impl Constrained for AzureAdConfig {
    fn constraints() -> &'static [Constraint] {
        AZURE_AD_CONSTRAINTS
    }

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "Instance" => FieldValue::Text(Some(&self.instance)),
            "TenantId" => FieldValue::Text(Some(&self.tenant_id)),
            "ClientId" => FieldValue::Text(Some(&self.client_id)),
            "ClientSecret" => FieldValue::Text(self.client_secret.as_deref()),
            "AppIdentifier" => FieldValue::Text(Some(&self.app_identifier)),
            "Scopes" => FieldValue::Sequence(&self.scopes),
            _ => FieldValue::Text(None),
        }
    }
}

impl AzureAdConfig {
    /// Binds, derives defaults, and validates the section.
    ///
    /// Prefer this over the generic [`crate::validate::get_valid`], which
    /// skips scope derivation.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the defaulted object violates a
    /// constraint.
    pub fn get_valid(section: &Section) -> Result<Self, ValidationError> {
        Self::get_valid_with(section, None)
    }

    /// Like [`AzureAdConfig::get_valid`], with a per-call fallback for the
    /// application identifier.
    ///
    /// A non-empty bound `AppIdentifier` always wins over the fallback; the
    /// fallback only fills an empty field. When the scope list is fully empty
    /// after binding, a single `<AppIdentifier>/.default` scope is derived
    /// from whichever identifier is in effect. Derivation runs before
    /// validation so derived values can satisfy the constraint table, and it
    /// never invents an identifier where none exists.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the defaulted object violates a
    /// constraint.
    pub fn get_valid_with(
        section: &Section,
        fallback_app_identifier: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let mut config = bind::<Self>(section);
        if config.app_identifier.is_empty()
            && let Some(fallback) = fallback_app_identifier
        {
            config.app_identifier = fallback.to_string();
        }
        if config.scopes.is_empty() && !config.app_identifier.is_empty() {
            config.scopes.push(format!("{}{DEFAULT_SCOPE_SUFFIX}", config.app_identifier));
        }
        validate(config)
    }
}

// ============================================================================
// SECTION: Certificate Shape
// ============================================================================

/// Key Vault lookup settings nested beneath a certificate section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeyVaultConfig {
    /// Vault base address.
    pub url: String,
    /// Name of the certificate stored in the vault.
    pub certificate_name: String,
}

impl FromSection for KeyVaultConfig {
    fn from_section(section: &Section) -> Self {
        Self {
            url: section.get_string("Url"),
            certificate_name: section.get_string("CertificateName"),
        }
    }
}

/// Certificate-credential settings bound from a configuration section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CertificateConfig {
    /// Directory (tenant) identifier.
    pub tenant_id: String,
    /// Application (client) identifier.
    pub client_id: String,
    /// Optional hex-encoded thumbprint pinning a specific certificate.
    pub thumbprint: Option<String>,
    /// Nested `KeyVault` section locating the certificate.
    pub key_vault: KeyVaultConfig,
}

/// Declaration-ordered constraint table for [`CertificateConfig`].
const CERTIFICATE_CONSTRAINTS: &[Constraint] = &[
    Constraint::required("TenantId"),
    Constraint::required("ClientId"),
    Constraint::custom("Thumbprint", "hex certificate thumbprint", is_hex_thumbprint),
    Constraint::required("KeyVault.Url"),
    Constraint::valid_uri("KeyVault.Url"),
    Constraint::required("KeyVault.CertificateName"),
];

impl FromSection for CertificateConfig {
    fn from_section(section: &Section) -> Self {
        Self {
            tenant_id: section.get_string("TenantId"),
            client_id: section.get_string("ClientId"),
            thumbprint: section.get("Thumbprint").map(str::to_string),
            key_vault: KeyVaultConfig::from_section(section.section("KeyVault")),
        }
    }
}

impl Constrained for CertificateConfig {
    fn constraints() -> &'static [Constraint] {
        CERTIFICATE_CONSTRAINTS
    }

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "TenantId" => FieldValue::Text(Some(&self.tenant_id)),
            "ClientId" => FieldValue::Text(Some(&self.client_id)),
            "Thumbprint" => FieldValue::Text(self.thumbprint.as_deref()),
            "KeyVault.Url" => FieldValue::Text(Some(&self.key_vault.url)),
            "KeyVault.CertificateName" => {
                FieldValue::Text(Some(&self.key_vault.certificate_name))
            }
            _ => FieldValue::Text(None),
        }
    }
}

/// Returns true when the text is a well-formed hex thumbprint.
fn is_hex_thumbprint(text: &str) -> bool {
    text.len() == THUMBPRINT_LENGTH && text.bytes().all(|byte| byte.is_ascii_hexdigit())
}
