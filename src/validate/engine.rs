// SPDX-License-Identifier: PMPL-1.0-or-later

//! Field evaluator and form aggregator

use crate::i18n::{format_message, t, Lang};
use crate::rules::RuleRegistry;
use crate::types::*;

const REQUIRED_KEY: &str = "field.required";
const CONSENT_KEY: &str = "consent.required";

/// Evaluates field values against a rule registry, reporting messages in
/// one language. Holds no mutable state; every call is independent.
#[derive(Debug, Clone)]
pub struct ValidationEngine {
    registry: RuleRegistry,
    lang: Lang,
}

impl ValidationEngine {
    pub fn new(registry: RuleRegistry, lang: Lang) -> Self {
        Self { registry, lang }
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    /// Evaluate one field's raw value.
    pub fn evaluate(&self, field_id: &str, raw: &str) -> FieldVerdict {
        let Some(rule) = self.registry.lookup(field_id) else {
            return FieldVerdict::valid(field_id);
        };

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            if rule.required {
                tracing::debug!(field = field_id, "required field is empty");
                return FieldVerdict::invalid(
                    field_id,
                    ValidationFailure::RequiredFieldEmpty,
                    t(self.lang, REQUIRED_KEY).to_string(),
                );
            }
            return FieldVerdict::valid(field_id);
        }

        // First failing check wins; the rest are skipped.
        match rule.validators.iter().find(|v| !v.check.passes(trimmed)) {
            Some(failed) => {
                tracing::debug!(field = field_id, rule = %failed.message, "check failed");
                FieldVerdict::invalid(
                    field_id,
                    ValidationFailure::RuleViolated {
                        rule: failed.message.clone(),
                    },
                    format_message(self.lang, &failed.message, &failed.check.message_args()),
                )
            }
            None => {
                tracing::debug!(field = field_id, "field valid");
                FieldVerdict::valid(field_id)
            }
        }
    }

    /// The consent checkbox, checked outside the registry.
    pub fn evaluate_consent(&self, checked: bool) -> FieldVerdict {
        if checked {
            FieldVerdict::valid(CONSENT_FIELD_ID)
        } else {
            FieldVerdict::invalid(
                CONSENT_FIELD_ID,
                ValidationFailure::RuleViolated {
                    rule: CONSENT_KEY.to_string(),
                },
                t(self.lang, CONSENT_KEY).to_string(),
            )
        }
    }

    /// Evaluate the whole form as on submit.
    ///
    /// Name, email and message are always checked so empty required fields
    /// surface; company only when filled; consent last. No early exit across
    /// fields, so every failing field gets its verdict.
    pub fn evaluate_form(&self, fields: &FormFields, consent_checked: bool) -> FormVerdict {
        let mut verdicts = Vec::with_capacity(5);

        for field in [FieldId::FullName, FieldId::Email, FieldId::Message] {
            verdicts.push(self.evaluate(field.as_str(), fields.value(field)));
        }
        if !fields.company.trim().is_empty() {
            verdicts.push(self.evaluate(FieldId::Company.as_str(), &fields.company));
        }
        verdicts.push(self.evaluate_consent(consent_checked));

        let first_invalid_field_id = verdicts
            .iter()
            .find(|v| !v.is_valid)
            .map(|v| v.field_id.clone());

        FormVerdict {
            is_valid: first_invalid_field_id.is_none(),
            first_invalid_field_id,
            fields: verdicts,
        }
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new(RuleRegistry::builtin(), Lang::En)
    }
}
