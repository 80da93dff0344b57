// SPDX-License-Identifier: PMPL-1.0-or-later

//! Declarative validation rules for the contact form
//!
//! A rule maps a field identifier to a required flag and an ordered list of
//! checks, each paired with the message reported when it is the first to fail.

pub mod check;
pub mod registry;

pub use check::{Check, CheckSpec, EMAIL_PATTERN, NAME_PATTERN};
pub use registry::{RuleRegistry, RuleSpec, ValidationRule, Validator, ValidatorSpec};
