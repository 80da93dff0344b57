// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report generation module

pub mod formatter;
pub mod output;

use crate::i18n::Lang;
use crate::types::FormVerdict;
use anyhow::Result;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub use formatter::ReportFormatter;
pub use output::OutputFormat;

/// A submission check, as printed or exported by the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    pub checked_at: String,
    pub lang: Lang,
    pub verdict: FormVerdict,
}

impl CheckReport {
    pub fn new(lang: Lang, verdict: FormVerdict) -> Self {
        Self {
            checked_at: Utc::now().to_rfc3339(),
            lang,
            verdict,
        }
    }
}

/// Save report to file
pub fn save_report<P: AsRef<Path>>(report: &CheckReport, path: P, format: OutputFormat) -> Result<()> {
    fs::write(path.as_ref(), format.serialize(report)?)?;
    Ok(())
}

/// Print report to console
pub fn print_report(report: &CheckReport) {
    ReportFormatter::new(report.lang).print(report);
}
