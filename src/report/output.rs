// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for printed/exported reports

use crate::report::formatter::ReportFormatter;
use crate::report::CheckReport;
use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn serialize(&self, report: &CheckReport) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(report)?),
            OutputFormat::Text => Ok(ReportFormatter::new(report.lang).render_plain(report)),
        }
    }

    /// Structured formats only; text falls back to JSON.
    pub fn serialize_value<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            OutputFormat::Json | OutputFormat::Text => Ok(serde_json::to_string_pretty(value)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_values_serialize_as_json() {
        let value = vec!["full-name", "email"];
        let text = OutputFormat::Text.serialize_value(&value).unwrap();
        assert_eq!(text, OutputFormat::Json.serialize_value(&value).unwrap());
        assert_eq!(
            OutputFormat::Yaml.serialize_value(&value).unwrap(),
            "- full-name\n- email\n"
        );
    }
}
