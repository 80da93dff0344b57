// SPDX-License-Identifier: PMPL-1.0-or-later

//! contact-warden: contact-form validation from the command line
//!
//! Evaluates submissions against the contact form's rules, exports the active
//! rule catalog, and replays recorded UI event scripts through the page
//! controllers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use contact_warden::controller::{self, ReplayScript};
use contact_warden::i18n::Lang;
use contact_warden::report::{self, CheckReport, OutputFormat, ReportFormatter};
use contact_warden::rules::RuleRegistry;
use contact_warden::types::*;
use contact_warden::validate::ValidationEngine;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "contact-warden")]
#[command(version)]
#[command(about = "Declarative contact-form validation")]
#[command(long_about = None)]
struct Cli {
    /// Message language
    #[arg(short, long, global = true, value_enum, default_value = "en")]
    lang: LangArg,

    /// Rule catalog (JSON or YAML) replacing the built-in rules
    #[arg(short, long, global = true)]
    rules: Option<PathBuf>,

    /// Log every field evaluation
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a full form submission
    Check {
        /// Submission file (JSON or YAML); flags below override its values
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        message: Option<String>,

        #[arg(long)]
        company: Option<String>,

        /// Consent checkbox is ticked
        #[arg(long)]
        consent: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check a single field value
    Field {
        /// Field identifier (full-name, email, message, company, ...)
        #[arg(value_name = "FIELD")]
        field: String,

        #[arg(value_name = "VALUE", default_value = "")]
        value: String,
    },

    /// Export the active rule catalog
    Rules {
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,
    },

    /// Replay a UI event script and print the render operations
    Replay {
        /// Event script (JSON or YAML)
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum LangArg {
    En,
    Ru,
}

impl From<LangArg> for Lang {
    fn from(arg: LangArg) -> Self {
        match arg {
            LangArg::En => Lang::En,
            LangArg::Ru => Lang::Ru,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let lang: Lang = cli.lang.into();
    let registry = RuleRegistry::load(cli.rules.as_deref())?;
    let engine = ValidationEngine::new(registry, lang);

    match cli.command {
        Commands::Check {
            input,
            name,
            email,
            message,
            company,
            consent,
            format,
            output,
        } => {
            let mut fields = match input {
                Some(path) => FormFields::from_file(&path)?,
                None => FormFields::default(),
            };
            let overrides = [
                (FieldId::FullName, name),
                (FieldId::Email, email),
                (FieldId::Message, message),
                (FieldId::Company, company),
            ];
            for (field, value) in overrides {
                if let Some(value) = value {
                    fields.set_value(field, value)?;
                }
            }
            fields.consent |= consent;

            let verdict = engine.evaluate_form(&fields, fields.consent);
            let is_valid = verdict.is_valid;
            let check = CheckReport::new(lang, verdict);

            if let Some(path) = output {
                report::save_report(&check, &path, format)?;
                println!("Report saved to: {}", path.display());
            } else if format == OutputFormat::Text {
                report::print_report(&check);
            } else {
                println!("{}", format.serialize(&check)?);
            }

            if !is_valid {
                std::process::exit(1);
            }
        }

        Commands::Field { field, value } => {
            let field_id = FieldId::parse(&field)
                .map(|id| id.as_str().to_string())
                .unwrap_or(field);
            let verdict = if field_id == CONSENT_FIELD_ID {
                engine.evaluate_consent(parse_checked(&value)?)
            } else {
                engine.evaluate(&field_id, &value)
            };
            ReportFormatter::new(lang).print_field(&verdict);
            if !verdict.is_valid {
                std::process::exit(1);
            }
        }

        Commands::Rules { format } => {
            println!("{}", format.serialize_value(&engine.registry().to_specs())?);
        }

        Commands::Replay { script, format } => {
            let script = ReplayScript::from_file(&script)?;
            let steps = controller::replay(&script, engine);
            if format == OutputFormat::Text {
                for (idx, step) in steps.iter().enumerate() {
                    println!("#{} {}", idx + 1, serde_json::to_string(&step.event)?);
                    for op in &step.ops {
                        println!("    {}", op);
                    }
                }
            } else {
                println!("{}", format.serialize_value(&steps)?);
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "contact_warden=debug"
    } else {
        "contact_warden=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
