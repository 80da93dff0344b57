// SPDX-License-Identifier: PMPL-1.0-or-later

//! Predicates a field value is tested against.
//!
//! Every check is a total, side-effect-free function of the trimmed value.

use anyhow::{bail, Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Letters (Latin and Cyrillic, including Ё/ё), whitespace and hyphen.
pub const NAME_PATTERN: &str = r"^[a-zA-Zа-яА-ЯёЁ\s-]+$";

/// `local@domain.tld`: no `@` or whitespace in any segment.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static IRREGULAR_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}|[^\S ]").expect("static pattern compiles"));

/// Declarative form of a check, as written in a rule catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CheckSpec {
    MinLength { min: usize },
    MaxLength { max: usize },
    Pattern { pattern: String },
    NoIrregularWhitespace,
}

/// A compiled check, ready to run.
#[derive(Debug, Clone)]
pub enum Check {
    MinLength(usize),
    MaxLength(usize),
    Pattern(Regex),
    NoIrregularWhitespace,
}

impl Check {
    pub fn compile(spec: &CheckSpec) -> Result<Self> {
        Ok(match spec {
            CheckSpec::MinLength { min } => Check::MinLength(*min),
            CheckSpec::MaxLength { max } => Check::MaxLength(*max),
            CheckSpec::Pattern { pattern } => {
                if pattern.is_empty() {
                    bail!("pattern check has an empty pattern");
                }
                Check::Pattern(
                    Regex::new(pattern).with_context(|| format!("compiling pattern {}", pattern))?,
                )
            }
            CheckSpec::NoIrregularWhitespace => Check::NoIrregularWhitespace,
        })
    }

    /// Returns `true` when `trimmed` satisfies the check.
    pub fn passes(&self, trimmed: &str) -> bool {
        match self {
            Check::MinLength(min) => char_len(trimmed) >= *min,
            Check::MaxLength(max) => char_len(trimmed) <= *max,
            Check::Pattern(re) => re.is_match(trimmed),
            Check::NoIrregularWhitespace => !IRREGULAR_WHITESPACE.is_match(trimmed),
        }
    }

    /// Placeholder arguments for the failure message.
    pub fn message_args(&self) -> Vec<(&'static str, String)> {
        match self {
            Check::MinLength(min) => vec![("min", min.to_string())],
            Check::MaxLength(max) => vec![("max", max.to_string())],
            Check::Pattern(_) | Check::NoIrregularWhitespace => Vec::new(),
        }
    }

    pub fn to_spec(&self) -> CheckSpec {
        match self {
            Check::MinLength(min) => CheckSpec::MinLength { min: *min },
            Check::MaxLength(max) => CheckSpec::MaxLength { max: *max },
            Check::Pattern(re) => CheckSpec::Pattern {
                pattern: re.as_str().to_string(),
            },
            Check::NoIrregularWhitespace => CheckSpec::NoIrregularWhitespace,
        }
    }
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}
