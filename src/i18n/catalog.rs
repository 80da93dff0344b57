// SPDX-License-Identifier: PMPL-1.0-or-later

//! Message catalog for contact-warden.
//!
//! Embeds every user-facing validation message as a compile-time static
//! table, one table per language. The page used to ship one script per
//! locale; all behavior now lives in a single implementation and only these
//! tables differ.
//!
//! ## Adding a new language
//!
//! 1. Add a variant to [`Lang`]
//! 2. Add arms to `Lang::code()` and `Lang::from_code()`
//! 3. Create a `const XX: &[(&str, &str)]` table below
//! 4. Add `Lang::Xx => XX` to the match in `catalog_for()`
//!
//! ## Placeholders
//!
//! Messages may contain `{name}` placeholders, filled by [`format_message`]
//! from the arguments of the check that failed (`{min}`, `{max}`).

use serde::{Deserialize, Serialize};

/// Supported message languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Ru,
}

impl Lang {
    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ru => "ru",
        }
    }

    /// Parse an ISO 639-1 code into a supported language.
    ///
    /// Returns `None` for unsupported codes. Case-sensitive.
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "en" => Some(Lang::En),
            "ru" => Some(Lang::Ru),
            _ => None,
        }
    }

    /// All supported languages, in display order.
    pub fn all() -> &'static [Lang] {
        &[Lang::En, Lang::Ru]
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Lang {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lang::from_code(&s.trim().to_ascii_lowercase())
            .ok_or_else(|| format!("unsupported language '{}' (expected en or ru)", s))
    }
}

// ─── Translation Lookup ─────────────────────────────────────────────

/// Look up a message key in the specified language.
///
/// Falls back to English if the key is not found in the requested language,
/// and to the empty string if English lacks it too.
///
/// # Examples
///
/// ```
/// use contact_warden::i18n::{t, Lang};
/// assert_eq!(t(Lang::En, "field.required"), "this field is required");
/// assert_eq!(t(Lang::Ru, "field.required"), "это поле обязательно");
/// ```
pub fn t(lang: Lang, key: &str) -> &'static str {
    if let Some(value) = lookup(catalog_for(lang), key) {
        return value;
    }
    if lang != Lang::En {
        if let Some(value) = lookup(EN, key) {
            return value;
        }
    }
    ""
}

/// Returns the translation, or the key itself if no catalog knows it.
///
/// Rule catalogs loaded from disk may use literal text instead of a key;
/// this is how that text reaches the user unchanged.
pub fn t_or_key<'a>(lang: Lang, key: &'a str) -> &'a str {
    let result = t(lang, key);
    if result.is_empty() {
        key
    } else {
        result
    }
}

/// Resolve `key` and substitute `{name}` placeholders from `args`.
pub fn format_message(lang: Lang, key: &str, args: &[(&str, String)]) -> String {
    let mut text = t_or_key(lang, key).to_string();
    for (name, value) in args {
        text = text.replace(&format!("{{{}}}", name), value);
    }
    text
}

fn lookup(catalog: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    catalog.iter().find(|(k, _)| *k == key).map(|&(_, v)| v)
}

fn catalog_for(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::En => EN,
        Lang::Ru => RU,
    }
}

// ─── English (source language, all keys defined here) ──────────────

const EN: &[(&str, &str)] = &[
    // Field-level messages
    ("field.required", "this field is required"),
    ("field.min_length", "minimum {min} characters"),
    ("field.max_length", "maximum {max} characters"),
    ("name.invalid", "enter a valid name"),
    ("name.whitespace", "remove extra spaces"),
    ("email.invalid", "enter a valid email"),
    // Form-level messages
    ("consent.required", "agreement required"),
    ("form.check_fields", "Please check the form fields"),
    ("form.ready", "Form is valid, submitting..."),
    // Report labels
    ("report.title", "Contact Form Check"),
    ("report.field", "Field"),
    ("report.valid", "valid"),
    ("report.invalid", "invalid"),
    ("report.focus", "Focus"),
    ("report.overall", "Overall"),
];

// ─── Russian ────────────────────────────────────────────────────────

const RU: &[(&str, &str)] = &[
    ("field.required", "это поле обязательно"),
    ("field.min_length", "не менее {min} символов"),
    ("field.max_length", "не более {max} символов"),
    ("name.invalid", "введите корректное имя"),
    ("name.whitespace", "уберите лишние пробелы"),
    ("email.invalid", "введите корректный email"),
    ("consent.required", "необходимо согласие"),
    ("form.check_fields", "Пожалуйста, проверьте поля формы"),
    ("form.ready", "Форма заполнена верно, отправка..."),
    ("report.title", "Проверка контактной формы"),
    ("report.field", "Поле"),
    ("report.valid", "верно"),
    ("report.invalid", "ошибка"),
    ("report.focus", "Фокус"),
    ("report.overall", "Итог"),
];
