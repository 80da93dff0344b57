// SPDX-License-Identifier: PMPL-1.0-or-later

//! JSON/YAML file loading shared by rule catalogs, submissions and event
//! scripts. The format follows the file extension; anything that is not
//! `.yaml`/`.yml` is read as JSON.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub(crate) fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
        .unwrap_or(false)
}

/// Read and parse `path`; `what` names the document in error context.
pub(crate) fn read_document<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading {} {}", what, path.display()))?;
    if is_yaml(path) {
        serde_yaml::from_str(&data).with_context(|| format!("parsing {}", what))
    } else {
        serde_json::from_str(&data).with_context(|| format!("parsing {}", what))
    }
}
