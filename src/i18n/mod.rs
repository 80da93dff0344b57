// SPDX-License-Identifier: PMPL-1.0-or-later

//! Localised message tables for contact-warden.
//!
//! ## Supported languages
//!
//! | Code | Language | Native name |
//! |------|----------|-------------|
//! | en   | English  | English     |
//! | ru   | Russian  | Русский     |
//!
//! ## Design
//!
//! Message keys use dotted namespaces: `"field.required"`, `"email.invalid"`,
//! `"form.check_fields"`. Lookups fall back to English when a key is missing
//! in the requested language. Unknown keys resolve to the empty string with
//! [`t`] or to the key itself with [`t_or_key`] (never panics).

mod catalog;

pub use catalog::{format_message, t, t_or_key, Lang};
