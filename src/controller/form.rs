// SPDX-License-Identifier: PMPL-1.0-or-later

//! Contact form controller: blur, input, consent change and submit

use crate::present::{FormView, RenderOp};
use crate::types::*;
use crate::validate::ValidationEngine;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Blur { field: FieldId },
    Input { field: FieldId, value: String },
    ConsentChanged { checked: bool },
    Submit,
}

/// Holds the form's current values and display state; every event runs to
/// completion before the next one is handled.
#[derive(Debug, Clone)]
pub struct FormController {
    engine: ValidationEngine,
    fields: FormFields,
    view: FormView,
}

impl FormController {
    pub fn new(engine: ValidationEngine) -> Self {
        Self::with_fields(engine, FormFields::default())
    }

    pub fn with_fields(engine: ValidationEngine, fields: FormFields) -> Self {
        let mut view = FormView::new();
        view.mark_consent(fields.consent);
        Self {
            engine,
            fields,
            view,
        }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn view(&self) -> &FormView {
        &self.view
    }

    pub fn handle(&mut self, event: &FormEvent) -> Vec<RenderOp> {
        match event {
            FormEvent::Blur { field } => self.on_blur(*field),
            FormEvent::Input { field, value } => self.on_input(*field, value),
            FormEvent::ConsentChanged { checked } => self.on_consent(*checked),
            FormEvent::Submit => self.on_submit(),
        }
    }

    fn on_blur(&mut self, field: FieldId) -> Vec<RenderOp> {
        if field == FieldId::Consent {
            return Vec::new();
        }
        self.revalidate(field).into_iter().collect()
    }

    fn on_input(&mut self, field: FieldId, value: &str) -> Vec<RenderOp> {
        if field == FieldId::Consent {
            return Vec::new();
        }
        if let Err(err) = self.fields.set_value(field, value) {
            tracing::warn!("ignoring input for {}: {:#}", field, err);
            return Vec::new();
        }

        let mut ops = Vec::new();
        // Typing only re-checks a field that is already showing an error.
        if self.view.has_error(field.as_str()) {
            ops.extend(self.revalidate(field));
        }
        ops.extend(self.view.clear_aggregate());
        ops
    }

    fn on_consent(&mut self, checked: bool) -> Vec<RenderOp> {
        self.fields.consent = checked;
        let mut ops = Vec::new();
        ops.extend(self.view.mark_consent(checked));
        if checked {
            ops.extend(self.view.clear_field(CONSENT_FIELD_ID));
        }
        ops.extend(self.view.clear_aggregate());
        ops
    }

    fn on_submit(&mut self) -> Vec<RenderOp> {
        let verdict = self.engine.evaluate_form(&self.fields, self.fields.consent);
        tracing::info!(
            valid = verdict.is_valid,
            invalid_fields = verdict.invalid_count(),
            first_invalid = verdict.first_invalid_field_id.as_deref().unwrap_or("-"),
            "form submitted"
        );
        self.view.render_form(&verdict, self.engine.lang())
    }

    fn revalidate(&mut self, field: FieldId) -> Option<RenderOp> {
        let verdict = self.engine.evaluate(field.as_str(), self.fields.value(field));
        self.view.render_field(&verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> FormController {
        FormController::new(ValidationEngine::default())
    }

    fn input(field: FieldId, value: &str) -> FormEvent {
        FormEvent::Input {
            field,
            value: value.to_string(),
        }
    }

    fn fill_valid(c: &mut FormController) {
        c.handle(&input(FieldId::FullName, "Jane Doe"));
        c.handle(&input(FieldId::Email, "jane@example.com"));
        c.handle(&input(FieldId::Message, "Please call me back tomorrow."));
    }

    #[test]
    fn input_without_error_does_not_validate() {
        let mut c = controller();
        let ops = c.handle(&input(FieldId::Email, "nope"));
        assert!(ops.is_empty());
        assert!(!c.view().has_error("email"));
    }

    #[test]
    fn blur_shows_then_input_clears() {
        let mut c = controller();
        c.handle(&input(FieldId::Email, "nope"));
        let ops = c.handle(&FormEvent::Blur {
            field: FieldId::Email,
        });
        assert_eq!(
            ops,
            vec![RenderOp::ShowFieldError {
                field: "email".to_string(),
                text: "enter a valid email".to_string()
            }]
        );

        // Still wrong: no new op, text already on screen.
        assert!(c.handle(&input(FieldId::Email, "nope@")).is_empty());

        let ops = c.handle(&input(FieldId::Email, "nope@example.com"));
        assert_eq!(
            ops,
            vec![RenderOp::ClearFieldError {
                field: "email".to_string()
            }]
        );
    }

    #[test]
    fn submit_without_consent_focuses_checkbox() {
        let mut c = controller();
        fill_valid(&mut c);
        let ops = c.handle(&FormEvent::Submit);
        assert!(ops.contains(&RenderOp::ShowFieldError {
            field: "consent".to_string(),
            text: "agreement required".to_string()
        }));
        assert!(ops.contains(&RenderOp::ShowAggregate {
            text: "Please check the form fields".to_string()
        }));
        assert_eq!(
            ops.last(),
            Some(&RenderOp::Focus {
                field: "consent".to_string()
            })
        );
    }

    #[test]
    fn consent_change_clears_errors_and_aggregate() {
        let mut c = controller();
        fill_valid(&mut c);
        c.handle(&FormEvent::Submit);
        let ops = c.handle(&FormEvent::ConsentChanged { checked: true });
        assert_eq!(
            ops,
            vec![
                RenderOp::SetConsentMark { checked: true },
                RenderOp::ClearFieldError {
                    field: "consent".to_string()
                },
                RenderOp::ClearAggregate,
            ]
        );
        let ops = c.handle(&FormEvent::Submit);
        assert_eq!(ops, vec![RenderOp::Submit]);
    }

    #[test]
    fn repeated_submit_is_stable() {
        let mut c = controller();
        let first = c.handle(&FormEvent::Submit);
        assert!(!first.is_empty());
        let second = c.handle(&FormEvent::Submit);
        // Same errors already shown; only focus is re-applied.
        assert_eq!(
            second,
            vec![RenderOp::Focus {
                field: "full-name".to_string()
            }]
        );
        assert_eq!(c.view().error_count(), 4);
    }

    #[test]
    fn empty_company_not_checked_on_submit() {
        let mut c = controller();
        fill_valid(&mut c);
        c.handle(&FormEvent::ConsentChanged { checked: true });
        c.handle(&input(FieldId::Company, "   "));
        let ops = c.handle(&FormEvent::Submit);
        assert_eq!(ops, vec![RenderOp::Submit]);
    }

    #[test]
    fn short_company_blocks_submit() {
        let mut c = controller();
        fill_valid(&mut c);
        c.handle(&FormEvent::ConsentChanged { checked: true });
        c.handle(&input(FieldId::Company, "X"));
        let ops = c.handle(&FormEvent::Submit);
        assert_eq!(
            ops.last(),
            Some(&RenderOp::Focus {
                field: "company".to_string()
            })
        );
    }

    #[test]
    fn any_input_clears_aggregate() {
        let mut c = controller();
        c.handle(&FormEvent::Submit);
        assert!(c.view().aggregate().is_some());
        let ops = c.handle(&input(FieldId::Company, "A"));
        assert_eq!(ops, vec![RenderOp::ClearAggregate]);
        assert!(c.view().aggregate().is_none());
    }
}
