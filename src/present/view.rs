// SPDX-License-Identifier: PMPL-1.0-or-later

//! Per-field display state and render operations

use crate::i18n::{t, Lang};
use crate::types::{FieldVerdict, FormVerdict};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One change the UI layer must apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum RenderOp {
    /// Show `text` under `field`, replacing any message already there.
    ShowFieldError { field: String, text: String },
    ClearFieldError { field: String },
    /// The single form-level message next to the submit action.
    ShowAggregate { text: String },
    ClearAggregate,
    Focus { field: String },
    SetConsentMark { checked: bool },
    /// The form passed; hand off to whatever submission mechanism exists.
    Submit,
    SetMenuOpen { open: bool, aria_expanded: String },
    SetActiveLink { href: String },
    ScrollTo { top: f64 },
    SetFaqOpen { index: usize, open: bool },
}

impl std::fmt::Display for RenderOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderOp::ShowFieldError { field, text } => write!(f, "show error on {}: {}", field, text),
            RenderOp::ClearFieldError { field } => write!(f, "clear error on {}", field),
            RenderOp::ShowAggregate { text } => write!(f, "show form message: {}", text),
            RenderOp::ClearAggregate => write!(f, "clear form message"),
            RenderOp::Focus { field } => write!(f, "focus {}", field),
            RenderOp::SetConsentMark { checked } => write!(f, "consent mark = {}", checked),
            RenderOp::Submit => write!(f, "submit"),
            RenderOp::SetMenuOpen { open, aria_expanded } => {
                write!(f, "menu open = {} (aria-expanded={})", open, aria_expanded)
            }
            RenderOp::SetActiveLink { href } => write!(f, "active link = {}", href),
            RenderOp::ScrollTo { top } => write!(f, "smooth scroll to {:.0}", top),
            RenderOp::SetFaqOpen { index, open } => write!(f, "faq item {} open = {}", index, open),
        }
    }
}

/// What the form currently displays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormView {
    field_errors: BTreeMap<String, String>,
    aggregate: Option<String>,
    consent_marked: bool,
}

impl FormView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_error(&self, field_id: &str) -> bool {
        self.field_errors.contains_key(field_id)
    }

    pub fn error_text(&self, field_id: &str) -> Option<&str> {
        self.field_errors.get(field_id).map(String::as_str)
    }

    /// Number of error messages on screen (one node per field at most).
    pub fn error_count(&self) -> usize {
        self.field_errors.len()
    }

    pub fn aggregate(&self) -> Option<&str> {
        self.aggregate.as_deref()
    }

    pub fn consent_marked(&self) -> bool {
        self.consent_marked
    }

    /// Show the verdict's message when invalid, clear any message when valid.
    pub fn render_field(&mut self, verdict: &FieldVerdict) -> Option<RenderOp> {
        match (&verdict.message, verdict.is_valid) {
            (Some(text), false) => {
                if self.error_text(&verdict.field_id) == Some(text.as_str()) {
                    return None;
                }
                self.field_errors.insert(verdict.field_id.clone(), text.clone());
                Some(RenderOp::ShowFieldError {
                    field: verdict.field_id.clone(),
                    text: text.clone(),
                })
            }
            _ => self.clear_field(&verdict.field_id),
        }
    }

    pub fn clear_field(&mut self, field_id: &str) -> Option<RenderOp> {
        self.field_errors
            .remove(field_id)
            .map(|_| RenderOp::ClearFieldError {
                field: field_id.to_string(),
            })
    }

    pub fn show_aggregate(&mut self, text: &str) -> Option<RenderOp> {
        if self.aggregate.as_deref() == Some(text) {
            return None;
        }
        self.aggregate = Some(text.to_string());
        Some(RenderOp::ShowAggregate {
            text: text.to_string(),
        })
    }

    pub fn clear_aggregate(&mut self) -> Option<RenderOp> {
        self.aggregate.take().map(|_| RenderOp::ClearAggregate)
    }

    pub fn mark_consent(&mut self, checked: bool) -> Option<RenderOp> {
        if self.consent_marked == checked {
            return None;
        }
        self.consent_marked = checked;
        Some(RenderOp::SetConsentMark { checked })
    }

    /// Render a submit verdict: every evaluated field, then either the
    /// aggregate message plus focus, or the hand-off.
    pub fn render_form(&mut self, verdict: &FormVerdict, lang: Lang) -> Vec<RenderOp> {
        let mut ops: Vec<RenderOp> = verdict
            .fields
            .iter()
            .filter_map(|field| self.render_field(field))
            .collect();

        if verdict.is_valid {
            ops.extend(self.clear_aggregate());
            ops.push(RenderOp::Submit);
        } else {
            ops.extend(self.show_aggregate(t(lang, "form.check_fields")));
            if let Some(field) = &verdict.first_invalid_field_id {
                ops.push(RenderOp::Focus {
                    field: field.clone(),
                });
            }
        }
        ops
    }
}
