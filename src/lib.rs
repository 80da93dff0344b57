// SPDX-License-Identifier: PMPL-1.0-or-later

//! Contact-Warden: declarative contact-form validation.
//!
//! The core is a small rule engine: a registry maps each form field to a
//! required flag and an ordered list of checks; an evaluator turns a raw
//! value into a verdict; an aggregator checks the whole form on submit.
//!
//! ENGINE PILLARS:
//! 1. **Rules**: built-in or catalog-loaded, immutable once built.
//! 2. **Validate**: pure field and form evaluation.
//! 3. **Present**: explicit per-field display state and render operations.
//! 4. **Controller**: the event-to-handler table for the form, the
//!    navigation menu and the FAQ accordion.
//!
//! Messages come from one locale-keyed table ([`i18n`]) instead of one copy
//! of the page logic per language.

pub mod controller;
pub mod i18n;
mod load;
pub mod present;
pub mod report;
pub mod rules;
pub mod types;
pub mod validate;
