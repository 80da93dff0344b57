// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for contact-warden
//!
//! Field identifiers, the raw form state supplied by the UI layer, and the
//! transient verdicts produced on every blur, input and submit.

use crate::load::read_document;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Identifier used for the consent checkbox, which sits outside the rule
/// registry but still takes part in focus ordering.
pub const CONSENT_FIELD_ID: &str = "consent";

/// The tracked controls of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldId {
    FullName,
    Email,
    Message,
    Company,
    Consent,
}

impl FieldId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FullName => "full-name",
            Self::Email => "email",
            Self::Message => "message",
            Self::Company => "company",
            Self::Consent => CONSENT_FIELD_ID,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "full-name" | "full_name" | "name" => Some(Self::FullName),
            "email" => Some(Self::Email),
            "message" => Some(Self::Message),
            "company" => Some(Self::Company),
            "consent" => Some(Self::Consent),
            _ => None,
        }
    }

    /// Text inputs, in the order the form checks them on submit.
    pub fn text_fields() -> &'static [FieldId] {
        &[Self::FullName, Self::Email, Self::Message, Self::Company]
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current raw contents of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FormFields {
    #[serde(alias = "name", alias = "full_name")]
    pub full_name: String,
    pub email: String,
    pub message: String,
    pub company: String,
    pub consent: bool,
}

impl FormFields {
    /// Raw text for a text field. The consent checkbox has no text.
    pub fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::FullName => &self.full_name,
            FieldId::Email => &self.email,
            FieldId::Message => &self.message,
            FieldId::Company => &self.company,
            FieldId::Consent => "",
        }
    }

    /// Store a value typed for `field`. Consent text must spell a boolean.
    pub fn set_value(&mut self, field: FieldId, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        match field {
            FieldId::FullName => self.full_name = value,
            FieldId::Email => self.email = value,
            FieldId::Message => self.message = value,
            FieldId::Company => self.company = value,
            FieldId::Consent => self.consent = parse_checked(&value)?,
        }
        Ok(())
    }

    /// Load a submission from a JSON or YAML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        read_document(path, "form")
    }
}

/// Checkbox state written as text. An empty value means unchecked.
pub fn parse_checked(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" | "" => Ok(false),
        _ => bail!(
            "'{}' is not a checkbox state (expected true/false, yes/no, on/off, 1/0)",
            value.trim()
        ),
    }
}

/// Why a field failed. These are user-input outcomes, never faults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationFailure {
    /// A required field is empty or whitespace only.
    RequiredFieldEmpty,
    /// A check in the field's rule failed; `rule` is its message key.
    RuleViolated { rule: String },
}

/// Outcome of evaluating one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldVerdict {
    pub field_id: String,
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<ValidationFailure>,
}

impl FieldVerdict {
    pub fn valid(field_id: &str) -> Self {
        Self {
            field_id: field_id.to_string(),
            is_valid: true,
            message: None,
            failure: None,
        }
    }

    pub fn invalid(field_id: &str, failure: ValidationFailure, message: String) -> Self {
        Self {
            field_id: field_id.to_string(),
            is_valid: false,
            message: Some(message),
            failure: Some(failure),
        }
    }
}

/// Outcome of evaluating the whole form on submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormVerdict {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_invalid_field_id: Option<String>,
    /// Every check that ran, in evaluation order (consent last).
    pub fields: Vec<FieldVerdict>,
}

impl FormVerdict {
    pub fn verdict_for(&self, field_id: &str) -> Option<&FieldVerdict> {
        self.fields.iter().find(|v| v.field_id == field_id)
    }

    pub fn invalid_count(&self) -> usize {
        self.fields.iter().filter(|v| !v.is_valid).count()
    }
}
