//! CLI entrypoint for Supplement Advisor
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use advisor_application::{QuizEventLogger, RecommendInput, RecommendSupplementsUseCase};
use advisor_domain::{OutputFormat, QuizResponse, RecommendationTables, SupplementCatalog};
use advisor_infrastructure::{ConfigLoader, FileConfig, JsonlQuizEventLogger, QuizAnswersLoader};
use advisor_presentation::{Cli, ConsoleFormatter, OutputFormatter};
use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    validate_config(&config)?;

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    if cli.list_keys {
        print!(
            "{}",
            ConsoleFormatter::format_vocabulary(RecommendationTables::builtin())
        );
        return Ok(());
    }

    info!("Starting Supplement Advisor");

    // Collect answers: file first, flags on top
    let response = match &cli.answers {
        Some(path) => QuizAnswersLoader::load(path)
            .with_context(|| format!("Failed to load answers from {}", path.display()))?,
        None => QuizResponse::default(),
    }
    .merge(cli.quiz_response());

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    // === Dependency Injection ===
    let mut use_case =
        RecommendSupplementsUseCase::new(config.scoring.to_recommendation_config())?;

    let event_log = cli.event_log.clone().or(config.logging.event_log.clone());
    if let Some(path) = event_log {
        // An unwritable log degrades to no logging; the adapter already warned.
        if let Some(logger) = JsonlQuizEventLogger::new(&path) {
            info!("Logging quiz events to {}", logger.path().display());
            let logger: Arc<dyn QuizEventLogger> = Arc::new(logger);
            use_case = use_case.with_event_logger(logger);
        }
    }

    if !cli.quiet && format == OutputFormat::Full {
        print_answers(&response);
    }

    let mut input = RecommendInput::new(response);
    if let Some(limit) = cli.limit {
        input = input.with_limit(limit);
    }

    let report = use_case.execute(input);

    // Output results
    let output = ConsoleFormatter.render(format, &report, SupplementCatalog::builtin());

    println!("{}", output);

    Ok(())
}

/// Warn on config warnings, abort on config errors
fn validate_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();

    for issue in issues.iter().filter(|issue| !issue.is_error()) {
        warn!("{}", issue.message);
    }

    if FileConfig::has_errors(&issues) {
        for issue in issues.iter().filter(|issue| issue.is_error()) {
            eprintln!("{}", issue);
        }
        bail!("Invalid configuration");
    }

    Ok(())
}

fn print_answers(response: &QuizResponse) {
    let join = |labels: &[String]| {
        if labels.is_empty() {
            "-".to_string()
        } else {
            labels.join(", ")
        }
    };

    let lifestyle: Vec<String> = response
        .lifestyle_keys()
        .into_iter()
        .map(str::to_string)
        .collect();

    println!();
    println!("Symptoms:  {}", join(&response.symptoms));
    println!("Goals:     {}", join(&response.goals));
    println!("Lifestyle: {}", join(&lifestyle));
    if let Some(age) = &response.age {
        println!("Age:       {}", age);
    }
    if let Some(gender) = &response.gender {
        println!("Gender:    {}", gender);
    }
    println!();
}
