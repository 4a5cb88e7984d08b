use anyhow::{Context, Result};
use i18n_translate::batch::ContentKind;
use i18n_translate::config::Config;
use i18n_translate::locales::LocaleResolver;
use i18n_translate::messages::{user_message, ENGLISH_MESSAGES};
use i18n_translate::orchestrator::Orchestrator;
use i18n_translate::{data, translator};
use std::io::Read as _;
use std::path::Path;
use std::process::ExitCode;
use tracing::info;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("i18n_translate=info".parse()?),
        )
        .init();

    // Load configuration from environment
    let config = Config::from_env()?;

    // Parse arguments: an optional locale list (default "all") and --html.
    // Argument parsing is deliberately minimal; this binary is a thin driver.
    let mut kind = ContentKind::Plain;
    let mut raw_locales: Vec<String> = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--html" => kind = ContentKind::Html,
            "--help" | "-h" => {
                print_usage();
                return Ok(ExitCode::SUCCESS);
            }
            other => raw_locales.push(other.to_string()),
        }
    }

    // Resolve the target locale set
    let resolver = LocaleResolver::new(config.base_locale.clone());
    let locales_dir = config.locales_dir.clone();
    let targets = match resolver.resolve(&raw_locales, || {
        enumerate_or_warn(Path::new(&locales_dir))
    }) {
        Ok(locales) => locales,
        Err(err) => {
            eprintln!("{}", user_message(&ENGLISH_MESSAGES, &err));
            return Ok(ExitCode::FAILURE);
        }
    };

    // Read source texts from stdin, one per line
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read source texts from stdin")?;
    let texts: Vec<String> = input.lines().map(str::to_string).collect();

    if texts.is_empty() {
        info!("No source texts on stdin, nothing to translate");
        return Ok(ExitCode::SUCCESS);
    }

    // Construct the provider once; fails fast when the backend is absent
    let provider = match translator::provider_from_config(&config) {
        Ok(provider) => provider,
        Err(err) => {
            eprintln!("{}", user_message(&ENGLISH_MESSAGES, &err));
            return Ok(ExitCode::FAILURE);
        }
    };

    let mut orchestrator = Orchestrator::new(provider.as_ref(), config.max_batch_size);
    let mut output = serde_json::Map::new();

    for target in &targets {
        if target == &config.base_locale {
            continue;
        }
        info!("Translating {} texts to {}", texts.len(), target);
        match orchestrator
            .translate_all(&texts, &config.base_locale, target, kind)
            .await
        {
            Ok(translations) => {
                output.insert(target.clone(), serde_json::json!(translations));
            }
            Err(err) => {
                eprintln!("{}", user_message(&ENGLISH_MESSAGES, &err));
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(ExitCode::SUCCESS)
}

/// Enumerate locales for the "all" alias, treating a missing directory as an
/// empty set (with a warning) rather than a hard failure.
fn enumerate_or_warn(dir: &Path) -> Vec<String> {
    match data::enumerate_locales(dir) {
        Ok(locales) => locales,
        Err(err) => {
            tracing::warn!("{:#}", err);
            Vec::new()
        }
    }
}

fn print_usage() {
    println!(
        "Usage: i18n-translate [LOCALES] [--html]\n\n\
         Translate source texts (read from stdin, one per line) from the base\n\
         locale into each target locale, printing a JSON object of results.\n\n\
         LOCALES  comma/colon/plus-delimited locale list, \"base\", or \"all\"\n\
                  (default \"all\", enumerated from $LOCALES_DIR)\n\
         --html   treat source texts as markup-bearing"
    );
}
