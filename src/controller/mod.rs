// SPDX-License-Identifier: PMPL-1.0-or-later

//! Event-to-handler table for the contact page
//!
//! Each UI event is dispatched to exactly one handler, which runs to
//! completion and returns the render operations it produced.

pub mod form;
pub mod page;

use crate::load::read_document;
use crate::present::RenderOp;
use crate::types::{FieldId, FormFields};
use crate::validate::ValidationEngine;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub use form::{FormController, FormEvent};
pub use page::{FaqAccordion, NavMenu, PageController, PageEvent, PageLayout};

/// Any event the page reacts to, as recorded in event scripts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum UiEvent {
    Blur { field: FieldId },
    Input { field: FieldId, value: String },
    ConsentChanged { checked: bool },
    Submit,
    MenuToggle,
    NavClick { href: String },
    FaqToggle { index: usize },
    Scroll { y: f64 },
}

/// The controller an event belongs to.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Form(FormEvent),
    Page(PageEvent),
}

impl UiEvent {
    pub fn route(&self) -> Route {
        match self {
            UiEvent::Blur { field } => Route::Form(FormEvent::Blur { field: *field }),
            UiEvent::Input { field, value } => Route::Form(FormEvent::Input {
                field: *field,
                value: value.clone(),
            }),
            UiEvent::ConsentChanged { checked } => {
                Route::Form(FormEvent::ConsentChanged { checked: *checked })
            }
            UiEvent::Submit => Route::Form(FormEvent::Submit),
            UiEvent::MenuToggle => Route::Page(PageEvent::MenuToggle),
            UiEvent::NavClick { href } => Route::Page(PageEvent::NavClick { href: href.clone() }),
            UiEvent::FaqToggle { index } => Route::Page(PageEvent::FaqToggle { index: *index }),
            UiEvent::Scroll { y } => Route::Page(PageEvent::Scroll { y: *y }),
        }
    }
}

/// The whole page: contact form plus navigation and FAQ.
#[derive(Debug, Clone)]
pub struct Session {
    pub form: FormController,
    pub page: PageController,
}

impl Session {
    pub fn new(form: FormController, page: PageController) -> Self {
        Self { form, page }
    }

    pub fn dispatch(&mut self, event: &UiEvent) -> Vec<RenderOp> {
        match event.route() {
            Route::Form(event) => self.form.handle(&event),
            Route::Page(event) => self.page.handle(&event),
        }
    }
}

/// A recorded sequence of UI events with the page's starting state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayScript {
    pub layout: PageLayout,
    pub faq_items: usize,
    pub form: FormFields,
    pub events: Vec<UiEvent>,
}

impl ReplayScript {
    pub fn from_file(path: &Path) -> Result<Self> {
        read_document(path, "event script")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayStep {
    pub event: UiEvent,
    pub ops: Vec<RenderOp>,
}

/// Run every scripted event in order against a fresh session.
pub fn replay(script: &ReplayScript, engine: ValidationEngine) -> Vec<ReplayStep> {
    let mut session = Session::new(
        FormController::with_fields(engine, script.form.clone()),
        PageController::new(script.layout.clone(), script.faq_items),
    );
    script
        .events
        .iter()
        .map(|event| ReplayStep {
            event: event.clone(),
            ops: session.dispatch(event),
        })
        .collect()
}
