// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report formatting and output

use crate::i18n::{t, Lang};
use crate::report::CheckReport;
use crate::types::FieldVerdict;
use colored::*;

pub struct ReportFormatter {
    lang: Lang,
}

impl ReportFormatter {
    pub fn new(lang: Lang) -> Self {
        Self { lang }
    }

    pub fn print(&self, report: &CheckReport) {
        println!("\n{}", t(self.lang, "report.title").bold().cyan());
        println!();
        for verdict in &report.verdict.fields {
            self.print_field(verdict);
        }
        println!();
        self.print_overall(report);
    }

    pub fn print_field(&self, verdict: &FieldVerdict) {
        let status = if verdict.is_valid {
            t(self.lang, "report.valid").green()
        } else {
            t(self.lang, "report.invalid").red()
        };
        match &verdict.message {
            Some(message) => println!(
                "  {:12} [{}] {}",
                verdict.field_id.bold(),
                status,
                message
            ),
            None => println!("  {:12} [{}]", verdict.field_id.bold(), status),
        }
    }

    fn print_overall(&self, report: &CheckReport) {
        let verdict = &report.verdict;
        if verdict.is_valid {
            println!(
                "{}: {}",
                t(self.lang, "report.overall").bold(),
                t(self.lang, "form.ready").green()
            );
        } else {
            println!(
                "{}: {}",
                t(self.lang, "report.overall").bold(),
                t(self.lang, "form.check_fields").red()
            );
            if let Some(field) = &verdict.first_invalid_field_id {
                println!("{}: {}", t(self.lang, "report.focus"), field.yellow());
            }
        }
    }

    /// Uncoloured rendering, for files.
    pub fn render_plain(&self, report: &CheckReport) -> String {
        let mut lines = vec![
            t(self.lang, "report.title").to_string(),
            format!("checked_at: {}", report.checked_at),
        ];
        for verdict in &report.verdict.fields {
            let status = if verdict.is_valid {
                t(self.lang, "report.valid")
            } else {
                t(self.lang, "report.invalid")
            };
            let line = match &verdict.message {
                Some(message) => format!("  {:12} [{}] {}", verdict.field_id, status, message),
                None => format!("  {:12} [{}]", verdict.field_id, status),
            };
            lines.push(line);
        }
        let overall = if report.verdict.is_valid {
            t(self.lang, "form.ready")
        } else {
            t(self.lang, "form.check_fields")
        };
        lines.push(format!("{}: {}", t(self.lang, "report.overall"), overall));
        if let Some(field) = &report.verdict.first_invalid_field_id {
            lines.push(format!("{}: {}", t(self.lang, "report.focus"), field));
        }
        lines.join("\n") + "\n"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FormFields;
    use crate::validate::validate_form;

    #[test]
    fn plain_report_lists_failures_and_focus() {
        let fields = FormFields {
            full_name: "A".to_string(),
            ..FormFields::default()
        };
        let report = CheckReport::new(Lang::En, validate_form(&fields, Lang::En));
        let text = ReportFormatter::new(Lang::En).render_plain(&report);
        assert!(text.contains("full-name"));
        assert!(text.contains("minimum 2 characters"));
        assert!(text.contains("Please check the form fields"));
        assert!(text.contains("Focus: full-name"));
    }

    #[test]
    fn plain_report_in_russian() {
        let fields = FormFields {
            full_name: "Анна".to_string(),
            email: "anna@example.ru".to_string(),
            message: "Перезвоните мне, пожалуйста".to_string(),
            company: String::new(),
            consent: true,
        };
        let report = CheckReport::new(Lang::Ru, validate_form(&fields, Lang::Ru));
        let text = ReportFormatter::new(Lang::Ru).render_plain(&report);
        assert!(text.starts_with("Проверка контактной формы"));
        assert!(text.contains("Форма заполнена верно"));
    }
}
