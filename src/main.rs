//! Rejoinder CLI entry point.
//!
//! Provides `compose`, `notices`, and `seed` subcommands for writing a
//! response letter from a context file, listing the registered notices, and
//! printing the variant seed for a set of context fields.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use rejoinder::config::RejoinderConfig;
use rejoinder::format::{display_date, DATE_DISPLAY_FORMAT};
#[allow(deprecated)]
use rejoinder::legacy::LegacyGenerator;
use rejoinder::{
    derive_seed, registered_notices, LetterComposer, LetterContext, LetterGenerator,
};

/// Rejoinder: deterministic response letters for tax-authority notices.
#[derive(Parser)]
#[command(name = "rejoinder", version, about)]
struct Cli {
    /// Config file to use instead of the default search path.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    command: Command,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Command {
    /// Compose a response letter from a JSON or TOML context file.
    Compose {
        /// Letter context file (`.toml` is read as TOML, anything else as JSON).
        #[arg(long)]
        context: PathBuf,
        /// Letter date; defaults to the local date.
        #[arg(long)]
        today: Option<String>,
        /// Use the deprecated fixed-wording generator for CP14, CP2000, or LT11.
        #[arg(long)]
        legacy: bool,
        /// Write the letter to this file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// List registered notices with their family and mailing requirement.
    Notices,
    /// Print the variant seed derived from the given fields.
    Seed {
        /// Fields in seed order: notice id, name, external id, notice date.
        #[arg(required = true)]
        parts: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            let mut config = RejoinderConfig::load_from(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            config.apply_overrides(|key| std::env::var(key).ok());
            config
        }
        None => RejoinderConfig::load().context("failed to load configuration")?,
    };

    let _logging_guard = match &config.logging.dir {
        Some(dir) => Some(rejoinder::logging::init_file(dir, &config.logging.level)?),
        None => {
            rejoinder::logging::init_cli(&config.logging.level);
            None
        }
    };

    match cli.command {
        Command::Compose {
            context,
            today,
            legacy,
            output,
        } => handle_compose(&config, &context, today.as_deref(), legacy, output.as_deref()),
        Command::Notices => {
            handle_notices();
            Ok(())
        }
        Command::Seed { parts } => {
            let parts: Vec<Option<&str>> = parts.iter().map(|p| Some(p.as_str())).collect();
            println!("{}", derive_seed(&parts));
            Ok(())
        }
    }
}

/// Compose one letter and write it out.
fn handle_compose(
    config: &RejoinderConfig,
    context_path: &Path,
    today: Option<&str>,
    legacy: bool,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let ctx = read_context(context_path)?;
    let today = today.map_or_else(
        || chrono::Local::now().format(DATE_DISPLAY_FORMAT).to_string(),
        display_date,
    );

    let generator = generator_for(config, &ctx, legacy)?;
    let letter = generator
        .generate(&ctx, &today)
        .with_context(|| {
            format!(
                "failed to compose letter for notice '{}'",
                ctx.notice_id.trim()
            )
        })?;

    match output {
        Some(path) => {
            std::fs::write(path, &letter.text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(
                notice = %letter.notice,
                certified_mail = letter.certified_mail,
                path = %path.display(),
                "letter written"
            );
        }
        None => println!("{}", letter.text),
    }
    Ok(())
}

#[allow(deprecated)]
fn generator_for(
    config: &RejoinderConfig,
    ctx: &LetterContext,
    legacy: bool,
) -> anyhow::Result<Box<dyn LetterGenerator>> {
    if legacy {
        warn!(notice = %ctx.notice_id.trim(), "using deprecated legacy generator");
        let generator = LegacyGenerator::for_notice(&ctx.notice_id, config.letterhead.clone())
            .context("no legacy generator for this notice")?;
        return Ok(Box::new(generator));
    }
    Ok(Box::new(LetterComposer::new(config.letterhead.clone())))
}

/// Read a letter context from JSON or TOML.
fn read_context(path: &Path) -> anyhow::Result<LetterContext> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    if is_toml {
        toml::from_str(&raw).with_context(|| format!("invalid TOML context {}", path.display()))
    } else {
        serde_json::from_str(&raw)
            .with_context(|| format!("invalid JSON context {}", path.display()))
    }
}

fn handle_notices() {
    for bp in registered_notices() {
        let mail = if bp.certified_mail {
            "certified"
        } else {
            "regular"
        };
        println!("{:<8} {:<14} {:<10} {}", bp.notice, bp.family.as_str(), mail, bp.title);
    }
}
