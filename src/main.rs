// src/main.rs
use anyhow::Context;
use article_blocks::commands;
use article_blocks::constants::LOG_FILE_NAME;
use article_blocks::{AppConfig, AppError, CommandLineInput, FixtureSource, InMemoryArticleStore};
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use std::fs;
use std::io::Write;

/// Sets up logging configuration.
///
/// Console logs go to stderr so command output on stdout stays pipeable.
fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join(LOG_FILE_NAME);
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stderr_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stderr")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::debug!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

fn load_store(config: &AppConfig) -> Result<InMemoryArticleStore, AppError> {
    let store = match &config.fixtures {
        FixtureSource::Bundled => InMemoryArticleStore::seeded()?,
        FixtureSource::File(path) => InMemoryArticleStore::from_json(path)?,
    };
    // Warnings are logged as they are found
    store.validate(&config.policy)?;
    Ok(store)
}

fn execute(config: &AppConfig) -> Result<(), AppError> {
    let store = load_store(config)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(&config.command, &store, &mut out)?;
    out.flush()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();
    let verbose = cli.verbose;
    setup_logging(verbose).context("failed to initialise logging")?;

    let config = AppConfig::resolve(cli)?;
    log::debug!("Resolved configuration: {:?}", config);

    if let Err(err) = execute(&config) {
        eprintln!("Error: {}", err);
        std::process::exit(err.exit_code());
    }
    Ok(())
}
