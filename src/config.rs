// src/config.rs
use crate::constants::FIXTURES_ENV_VAR;
use crate::error::AppError;
use crate::validation::{PolicyAction, ValidationPolicy};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about = "Inspect articles built from typed content blocks", long_about = None)]
pub struct CommandLineInput {
    #[command(subcommand)]
    pub command: Command,

    /// JSON file of articles to load instead of the bundled fixtures
    #[arg(long, global = true)]
    pub fixtures: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// What to do with table rows whose width differs from the header row
    #[arg(long, global = true, value_enum, default_value_t = PolicyAction::Warn)]
    pub table_shape: PolicyAction,

    /// What to do with column groups spanning more than the 12-unit grid
    #[arg(long, global = true, value_enum, default_value_t = PolicyAction::Warn)]
    pub column_spans: PolicyAction,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every article with a short preview
    List,
    /// Print one article as canonical JSON
    Show { id: String },
    /// Print one article's body as plain text
    Text {
        id: String,
        /// Print a single-line preview of at most this many characters
        #[arg(long)]
        preview: Option<usize>,
    },
    /// Print one article's table of contents
    Outline { id: String },
    /// Print block and word statistics for one article
    Stats { id: String },
    /// Print one article converted to the structured format, as JSON
    Migrate { id: String },
}

/// Where articles are loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureSource {
    Bundled,
    File(PathBuf),
}

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub command: Command,
    pub fixtures: FixtureSource,
    pub policy: ValidationPolicy,
    pub verbose: bool,
}

impl AppConfig {
    /// Resolves configuration from CLI input and the process environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let from_env = std::env::var(FIXTURES_ENV_VAR).ok();
        Self::resolve_with(cli, from_env)
    }

    /// The flag wins over the environment; neither means bundled fixtures.
    pub fn resolve_with(
        cli: CommandLineInput,
        fixtures_env: Option<String>,
    ) -> Result<Self, AppError> {
        let fixtures = match (cli.fixtures, fixtures_env) {
            (Some(path), _) => FixtureSource::File(path),
            (None, Some(value)) if value.trim().is_empty() => {
                return Err(AppError::MissingConfiguration(format!(
                    "{} is set but empty",
                    FIXTURES_ENV_VAR
                )))
            }
            (None, Some(value)) => FixtureSource::File(PathBuf::from(value)),
            (None, None) => FixtureSource::Bundled,
        };

        Ok(Self {
            command: cli.command,
            fixtures,
            policy: ValidationPolicy {
                table_shape: cli.table_shape,
                column_span_total: cli.column_spans,
            },
            verbose: cli.verbose,
        })
    }
}
