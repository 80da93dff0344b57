// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error presentation adapter
//!
//! Owns what is currently on screen (per-field error text, the aggregate
//! message near the submit button, the consent mark) and turns verdicts into
//! the minimal list of render operations. Error text is overwritten in place,
//! so re-rendering an unchanged verdict emits nothing.

pub mod view;

pub use view::{FormView, RenderOp};
