// SPDX-License-Identifier: PMPL-1.0-or-later

//! Field and form validation
//!
//! Pure evaluation: given the registry, a language and the current raw
//! values, produce verdicts. Rendering them is the presenter's job.

pub mod engine;

use crate::i18n::Lang;
use crate::rules::RuleRegistry;
use crate::types::*;

pub use engine::ValidationEngine;

/// Evaluate one field against the built-in rules.
pub fn validate_field(field_id: &str, raw: &str, lang: Lang) -> FieldVerdict {
    ValidationEngine::new(RuleRegistry::builtin(), lang).evaluate(field_id, raw)
}

/// Evaluate a full submission against the built-in rules.
pub fn validate_form(fields: &FormFields, lang: Lang) -> FormVerdict {
    ValidationEngine::new(RuleRegistry::builtin(), lang).evaluate_form(fields, fields.consent)
}
