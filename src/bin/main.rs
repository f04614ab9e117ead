//! sqlscout CLI - filter a database schema down to what a question needs
//!
//! Usage:
//!   sqlscout keywords "show me all customers"
//!   sqlscout filter "show me all customers" --snapshot catalog.json
//!   sqlscout schema --snapshot catalog.json
//!   sqlscout prompt "show me all customers" --snapshot catalog.json
//!
//! Examples:
//!   sqlscout filter "orders over 500 dollars" --snapshot demo/catalog.json
//!   sqlscout filter "orders over 500 dollars" --snapshot demo/catalog.json --relaxed

use clap::{Parser, Subcommand};
use sqlscout::catalog::StaticCatalog;
use sqlscout::config::Settings;
use sqlscout::filter::{extract_keywords, FilterConfig, FormatConfig, SchemaFilter};
use sqlscout::llm::prompt;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "sqlscout")]
#[command(about = "sqlscout - schema-relevance filtering for natural-language-to-SQL")]
#[command(version)]
struct Cli {
    /// Path to a sqlscout.toml config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to a JSON catalog snapshot (overrides the config)
    #[arg(short, long, global = true)]
    snapshot: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract question keywords after stop-word and synonym handling
    Keywords {
        /// The natural-language question
        question: String,
    },

    /// Print the filtered schema for a question
    Filter {
        /// The natural-language question
        question: String,

        /// Disable the table/column caps of the compact format
        #[arg(long)]
        relaxed: bool,
    },

    /// Print the full, unfiltered schema
    Schema,

    /// Print the assembled model prompt for a question
    Prompt {
        /// The natural-language question
        question: String,

        /// Disable the table/column caps of the compact format
        #[arg(long)]
        relaxed: bool,
    },

    /// List configured database connections
    Connections,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let settings = match load_settings(cli.config.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Keywords { question } => cmd_keywords(&settings, &question),
        Commands::Filter { question, relaxed } => {
            cmd_filter(&settings, cli.snapshot, &question, relaxed)
        }
        Commands::Schema => cmd_schema(&settings, cli.snapshot),
        Commands::Prompt { question, relaxed } => {
            cmd_prompt(&settings, cli.snapshot, &question, relaxed)
        }
        Commands::Connections => cmd_connections(&settings),
    }
}

fn load_settings(path: Option<&std::path::Path>) -> Result<Settings, sqlscout::config::SettingsError> {
    match path {
        Some(p) => Settings::from_file(p),
        None => Settings::load(),
    }
}

fn build_filter_config(settings: &Settings, relaxed: bool) -> Result<FilterConfig, ExitCode> {
    let mut config = match settings.filter.to_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return Err(ExitCode::FAILURE);
        }
    };
    if relaxed {
        config.format = FormatConfig::relaxed();
    }
    Ok(config)
}

fn load_catalog(settings: &Settings, snapshot: Option<PathBuf>) -> Result<StaticCatalog, ExitCode> {
    let path = match snapshot.or_else(|| settings.catalog_snapshot.clone()) {
        Some(p) => p,
        None => {
            eprintln!("No catalog snapshot given; pass --snapshot or set catalog_snapshot in sqlscout.toml");
            return Err(ExitCode::FAILURE);
        }
    };

    match StaticCatalog::load(&path) {
        Ok(catalog) => Ok(catalog),
        Err(e) => {
            eprintln!("Error loading snapshot '{}': {}", path.display(), e);
            Err(ExitCode::FAILURE)
        }
    }
}

fn cmd_keywords(settings: &Settings, question: &str) -> ExitCode {
    let config = match build_filter_config(settings, false) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let rewritten = if config.synonyms.is_empty() {
        question.to_string()
    } else {
        config.synonyms.rewrite(question)
    };

    for keyword in extract_keywords(&rewritten) {
        println!("{}", keyword);
    }
    ExitCode::SUCCESS
}

fn cmd_filter(
    settings: &Settings,
    snapshot: Option<PathBuf>,
    question: &str,
    relaxed: bool,
) -> ExitCode {
    let config = match build_filter_config(settings, relaxed) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let catalog = match load_catalog(settings, snapshot) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let filter = SchemaFilter::with_config(catalog, config);
    match filter.filter(question) {
        Ok(schema) => {
            println!("{}", schema);
            eprintln!(
                "{} of {} tables selected",
                schema.table_count_selected, schema.table_count_total
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Filtering error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_schema(settings: &Settings, snapshot: Option<PathBuf>) -> ExitCode {
    let catalog = match load_catalog(settings, snapshot) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let filter = SchemaFilter::new(catalog);
    println!("{}", filter.full_schema_text());
    ExitCode::SUCCESS
}

fn cmd_prompt(
    settings: &Settings,
    snapshot: Option<PathBuf>,
    question: &str,
    relaxed: bool,
) -> ExitCode {
    let config = match build_filter_config(settings, relaxed) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let catalog = match load_catalog(settings, snapshot) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let filter = SchemaFilter::with_config(catalog, config);
    match filter.filter(question) {
        Ok(schema) => {
            println!("{}", prompt::build_prompt(question, &schema.text));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Filtering error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_connections(settings: &Settings) -> ExitCode {
    if settings.connections.is_empty() {
        println!("No connections configured.");
        return ExitCode::SUCCESS;
    }

    let mut names: Vec<&String> = settings.connections.keys().collect();
    names.sort();

    for name in names {
        let conn = &settings.connections[name];
        match conn.driver_type() {
            Ok(driver) => println!("{}  [{}]", name, driver.as_str()),
            Err(_) => println!("{}  [unsupported driver: {}]", name, conn.driver),
        }
    }
    ExitCode::SUCCESS
}
