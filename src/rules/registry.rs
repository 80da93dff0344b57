// SPDX-License-Identifier: PMPL-1.0-or-later

//! Rule registry: field identifier to required flag and ordered checks.
//!
//! The registry is built once (from the built-in table or a catalog file)
//! and never mutated afterwards. Lookup of an unknown identifier yields
//! `None`, which the evaluator treats as "always valid".

use crate::load::read_document;
use crate::rules::check::{Check, CheckSpec, EMAIL_PATTERN, NAME_PATTERN};
use crate::types::FieldId;
use anyhow::{bail, Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

const DEFAULT_CATALOG_PATH: &str = "rules/contact_rules.json";

/// One check paired with the message key reported when it fails.
#[derive(Debug, Clone)]
pub struct Validator {
    pub check: Check,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct ValidationRule {
    pub field_id: String,
    pub required: bool,
    pub validators: Vec<Validator>,
}

/// Serialized form of a rule, as stored in JSON/YAML catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    pub field: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub validators: Vec<ValidatorSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorSpec {
    pub check: CheckSpec,
    pub message: String,
}

impl RuleSpec {
    pub fn to_rule(&self) -> Result<ValidationRule> {
        let field_id = self.field.trim();
        if field_id.is_empty() {
            bail!("rule with an empty field identifier");
        }
        let validators = self
            .validators
            .iter()
            .enumerate()
            .map(|(idx, spec)| {
                let check = Check::compile(&spec.check)
                    .with_context(|| format!("field {} validator #{}", field_id, idx + 1))?;
                Ok(Validator {
                    check,
                    message: spec.message.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        check_length_bounds(field_id, &validators)?;
        Ok(ValidationRule {
            field_id: field_id.to_string(),
            required: self.required,
            validators,
        })
    }
}

impl ValidationRule {
    pub fn to_spec(&self) -> RuleSpec {
        RuleSpec {
            field: self.field_id.clone(),
            required: self.required,
            validators: self
                .validators
                .iter()
                .map(|v| ValidatorSpec {
                    check: v.check.to_spec(),
                    message: v.message.clone(),
                })
                .collect(),
        }
    }
}

fn check_length_bounds(field_id: &str, validators: &[Validator]) -> Result<()> {
    let min = validators
        .iter()
        .filter_map(|v| match v.check {
            Check::MinLength(min) => Some(min),
            _ => None,
        })
        .max();
    let max = validators
        .iter()
        .filter_map(|v| match v.check {
            Check::MaxLength(max) => Some(max),
            _ => None,
        })
        .min();
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            bail!(
                "field {} can never pass: minimum length {} exceeds maximum {}",
                field_id,
                min,
                max
            );
        }
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct RuleRegistry {
    rules: Vec<ValidationRule>,
}

impl RuleRegistry {
    /// The contact form's built-in rules.
    pub fn builtin() -> Self {
        Self {
            rules: Self::build_rules(),
        }
    }

    fn build_rules() -> Vec<ValidationRule> {
        vec![
            ValidationRule {
                field_id: FieldId::FullName.as_str().to_string(),
                required: true,
                validators: vec![
                    validator(Check::MinLength(2), "field.min_length"),
                    validator(builtin_pattern(&NAME_RE), "name.invalid"),
                    validator(Check::NoIrregularWhitespace, "name.whitespace"),
                ],
            },
            ValidationRule {
                field_id: FieldId::Email.as_str().to_string(),
                required: true,
                validators: vec![validator(builtin_pattern(&EMAIL_RE), "email.invalid")],
            },
            ValidationRule {
                field_id: FieldId::Message.as_str().to_string(),
                required: true,
                validators: vec![
                    validator(Check::MinLength(10), "field.min_length"),
                    validator(Check::MaxLength(1000), "field.max_length"),
                ],
            },
            ValidationRule {
                field_id: FieldId::Company.as_str().to_string(),
                required: false,
                validators: vec![validator(Check::MinLength(2), "field.min_length")],
            },
        ]
    }

    /// Build a registry from catalog entries, rejecting duplicate fields.
    pub fn from_specs(specs: &[RuleSpec]) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut rules = Vec::with_capacity(specs.len());
        for spec in specs {
            let rule = spec.to_rule()?;
            if !seen.insert(rule.field_id.clone()) {
                bail!("duplicate rule for field {}", rule.field_id);
            }
            rules.push(rule);
        }
        Ok(Self { rules })
    }

    /// Load a JSON or YAML catalog; the format follows the file extension.
    pub fn from_file(path: &Path) -> Result<Self> {
        let specs: Vec<RuleSpec> = read_document(path, "rule catalog")?;
        Self::from_specs(&specs).with_context(|| format!("loading {}", path.display()))
    }

    /// Use the catalog in `rules/contact_rules.json` when present, the
    /// built-in rules otherwise (or when that catalog is broken).
    pub fn load_default() -> Self {
        Self::load_default_from(Path::new(DEFAULT_CATALOG_PATH))
    }

    /// Optional catalog: missing or unreadable files give the built-in rules.
    pub fn load_default_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::builtin();
        }
        match Self::from_file(path) {
            Ok(registry) => registry,
            Err(err) => {
                tracing::warn!("failed to load rule catalog, using built-in rules: {:#}", err);
                Self::builtin()
            }
        }
    }

    /// An explicit catalog path must load; without one, fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::load_default()),
        }
    }

    pub fn lookup(&self, field_id: &str) -> Option<&ValidationRule> {
        self.rules.iter().find(|rule| rule.field_id == field_id)
    }

    pub fn rules(&self) -> &[ValidationRule] {
        &self.rules
    }

    pub fn to_specs(&self) -> Vec<RuleSpec> {
        self.rules.iter().map(ValidationRule::to_spec).collect()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NAME_PATTERN).expect("name pattern compiles"));
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"));

fn builtin_pattern(re: &Regex) -> Check {
    Check::Pattern(re.clone())
}

fn validator(check: Check, message: &str) -> Validator {
    Validator {
        check,
        message: message.to_string(),
    }
}
