// SPDX-License-Identifier: PMPL-1.0-or-later

//! Rule catalogs loaded from disk

use contact_warden::i18n::Lang;
use contact_warden::rules::RuleRegistry;
use contact_warden::validate::ValidationEngine;
use std::fs;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_yaml_catalog() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "rules.yaml",
        r#"
- field: full-name
  required: true
  validators:
    - check: { kind: min_length, min: 3 }
      message: field.min_length
- field: phone
  validators:
    - check: { kind: pattern, pattern: '^\+?[0-9 ]{7,}$' }
      message: enter a phone number
"#,
    );
    let registry = RuleRegistry::from_file(&path).expect("yaml catalog loads");
    let engine = ValidationEngine::new(registry, Lang::En);

    assert_eq!(
        engine.evaluate("full-name", "Jo").message.as_deref(),
        Some("minimum 3 characters")
    );
    assert!(engine.evaluate("full-name", "Joe").is_valid);
    assert_eq!(
        engine.evaluate("phone", "12").message.as_deref(),
        Some("enter a phone number")
    );
    assert!(engine.evaluate("phone", "").is_valid);
    assert!(engine.evaluate("email", "").is_valid, "email has no rule here");
}

#[test]
fn test_json_catalog_roundtrip() {
    let dir = TempDir::new().unwrap();
    let json = serde_json::to_string_pretty(&RuleRegistry::builtin().to_specs()).unwrap();
    let path = write(&dir, "rules.json", &json);
    let registry = RuleRegistry::from_file(&path).expect("exported catalog reloads");
    let engine = ValidationEngine::new(registry, Lang::En);
    assert!(!engine.evaluate("full-name", "A").is_valid);
    assert!(engine.evaluate("email", "a@b.co").is_valid);
}

#[test]
fn test_bad_catalogs_rejected() {
    let dir = TempDir::new().unwrap();
    let bad_regex = write(
        &dir,
        "regex.json",
        r#"[{"field": "x", "validators": [{"check": {"kind": "pattern", "pattern": "(["}, "message": "m"}]}]"#,
    );
    let unknown_kind = write(
        &dir,
        "kind.json",
        r#"[{"field": "x", "validators": [{"check": {"kind": "telepathy"}, "message": "m"}]}]"#,
    );
    let duplicate = write(
        &dir,
        "dup.json",
        r#"[{"field": "x"}, {"field": "x"}]"#,
    );
    for path in [bad_regex, unknown_kind, duplicate] {
        assert!(
            RuleRegistry::from_file(&path).is_err(),
            "{} should be rejected",
            path.display()
        );
    }
    assert!(RuleRegistry::from_file(&dir.path().join("missing.json")).is_err());
}

#[test]
fn test_load_without_path_uses_builtin() {
    let registry = RuleRegistry::load(None).expect("defaults always load");
    assert!(registry.lookup("email").is_some());
}

#[test]
fn test_demo_catalog_matches_builtin_rules() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/rules.yaml");
    let registry = RuleRegistry::from_file(&path).expect("demo catalog should load");
    for spec in RuleRegistry::builtin().to_specs() {
        let loaded = registry
            .lookup(&spec.field)
            .unwrap_or_else(|| panic!("demo catalog lacks {}", spec.field));
        assert_eq!(loaded.to_spec(), spec, "{} differs from built-in", spec.field);
    }
    assert!(registry.lookup("phone").is_some());
}

#[test]
fn test_broken_default_catalog_falls_back_to_builtin() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "contact_rules.json", r#"[{"field": "email", "validators": ["#);
    let registry = RuleRegistry::load_default_from(&path);
    assert_eq!(registry.to_specs(), RuleRegistry::builtin().to_specs());

    let invalid = write(&dir, "dup.json", r#"[{"field": "x"}, {"field": "x"}]"#);
    let registry = RuleRegistry::load_default_from(&invalid);
    assert!(registry.lookup("x").is_none());
    assert!(registry.lookup("full-name").is_some());
}

#[test]
fn test_missing_default_catalog_uses_builtin() {
    let dir = TempDir::new().unwrap();
    let registry = RuleRegistry::load_default_from(&dir.path().join("contact_rules.json"));
    assert_eq!(registry.to_specs(), RuleRegistry::builtin().to_specs());
}

#[test]
fn test_present_default_catalog_is_used() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "contact_rules.json",
        r#"[{"field": "email", "required": true}]"#,
    );
    let registry = RuleRegistry::load_default_from(&path);
    assert_eq!(registry.rules().len(), 1);
    assert!(registry.lookup("full-name").is_none());
}
