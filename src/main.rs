//! `fdostui-strings`: inspect, validate and export the shell's string tables.
//!
//! Configuration comes from the environment (or a `.env` file):
//! - FDOSTUI_LANGUAGE: language code ("tr") or selector value ("2")
//! - FDOSTUI_STRINGS_FILE: legacy language header to load
//! - FDOSTUI_CODE_PAGE: code page of that header ("cp857", "cp437")

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use fdostui_strings::config::Config;
use fdostui_strings::i18n::{
    render_header, to_json, LanguageRegistry, LocalizedStringTable, LookupMetrics,
    StringKey, TranslationValidator,
};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info, warn};

#[derive(Debug, Parser)]
#[command(name = "fdostui-strings", version, about = "FreeDOS TUI shell string tables")]
struct Cli {
    /// Override FDOSTUI_LANGUAGE (code or selector value)
    #[arg(short, long, global = true)]
    language: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print every key with its string
    List,
    /// Print the string for one key (id or STRING_* name)
    Get { key: String },
    /// Check the active table against the canonical language
    Validate,
    /// Write the active table as JSON or as a legacy header
    Export {
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List supported languages
    Languages,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ExportFormat {
    Json,
    Header,
}

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fdostui_strings=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let config = Config::from_env_with_language(cli.language.as_deref())?;
    info!(
        language = config.language.code(),
        selector = config.language.selector(),
        "Selected language"
    );

    match cli.command {
        Command::Languages => print_languages(),
        command => {
            let table = config.string_table()?;
            run(command, &table)?;
        }
    }

    debug!(metrics = ?LookupMetrics::global().report(), "Done");
    Ok(())
}

fn print_languages() {
    for lang in LanguageRegistry::get().list_all() {
        println!(
            "{}\t{}\t{} ({})\t{}{}",
            lang.selector,
            lang.code,
            lang.name,
            lang.native_name,
            lang.code_page,
            if lang.is_canonical { "\tcanonical" } else { "" }
        );
    }
}

fn run(command: Command, table: &LocalizedStringTable) -> Result<()> {
    match command {
        Command::List => {
            for (key, value) in table.iter() {
                println!("{:<30} {}", key.id(), value);
            }
        }
        Command::Get { key } => {
            let key: StringKey = key.parse()?;
            println!("{}", table.lookup(key));
        }
        Command::Validate => {
            let report = TranslationValidator::validate(table);
            for warning in &report.warnings {
                warn!("{}", warning);
            }
            for error in &report.errors {
                eprintln!("error: {}", error);
            }
            if report.has_errors() {
                bail!(
                    "{} string(s) failed validation for '{}'",
                    report.errors.len(),
                    table.language()
                );
            }
            info!(warnings = report.warnings.len(), "Validation passed");
        }
        Command::Export { format, output } => {
            let bytes = match format {
                ExportFormat::Json => to_json(table)?.into_bytes(),
                ExportFormat::Header => render_header(table)?,
            };
            match output {
                Some(path) => {
                    std::fs::write(&path, &bytes)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!(path = %path.display(), bytes = bytes.len(), "Exported string table");
                }
                None => std::io::stdout()
                    .write_all(&bytes)
                    .context("Failed to write to stdout")?,
            }
        }
        Command::Languages => print_languages(),
    }
    Ok(())
}
