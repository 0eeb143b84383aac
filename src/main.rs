//! gamingai-db CLI - create, reset and inspect the GamingAI database

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use gamingai_db::config::{self, PopulateConfig};
use gamingai_db::output::{is_quiet, log_directive};
use gamingai_db::storage::{DEFAULT_BUSY_TIMEOUT_MS, DEFAULT_DATABASE};
use gamingai_db::{populate, ui};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "gamingai-db")]
#[command(version)]
#[command(about = "Create or reset the GamingAI SQLite database")]
#[command(long_about = r#"
Creates the system_input_text, api_keys and user_questions tables in a local
SQLite file, optionally dropping them first.

Example usage:
  gamingai-db
  gamingai-db populate --reset --database data/gamingai.db
  gamingai-db status --format json
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the config file (defaults to gamingai.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the tables, dropping them first with --reset
    Populate {
        /// Drop all tables (and their data) before creating them
        #[arg(long)]
        reset: bool,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Show which tables exist and how many rows they hold
    Status {
        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Write a config file with the default settings
    InitConfig {
        /// Database path to record in the config
        #[arg(short, long)]
        database: Option<String>,

        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::new(log_directive(cli.verbose, is_quiet()));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let command = cli.command.unwrap_or(Commands::Populate {
        reset: false,
        database: None,
    });

    match command {
        Commands::Populate { reset, database } => {
            let settings = config::load_config(cli.config.as_deref())?.unwrap_or_default();
            let manager = settings.schema_manager(database.as_deref());
            config::ensure_db_dir(manager.path())?;

            if !is_quiet() {
                ui::header(&format!("Populating {}", manager.path().display()));
            }

            if let Err(e) = populate::run_with(&manager, reset) {
                if !is_quiet() {
                    ui::error(&format!("Could not populate {}", manager.path().display()));
                }
                return Err(e.into());
            }

            if !is_quiet() {
                ui::success("Database ready");
            }
        }

        Commands::Status { database, format } => {
            let settings = config::load_config(cli.config.as_deref())?.unwrap_or_default();
            let manager = settings.schema_manager(database.as_deref());
            let status = manager.inspect()?;

            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&status)?);
                }
                OutputFormat::Text => {
                    ui::info("Database", &status.database);
                    if !status.file_exists {
                        ui::warn("Database file does not exist yet");
                    }
                    ui::section("Tables");
                    println!("{}", ui::status_table(&status.tables));
                    if status.is_complete() {
                        ui::success("All tables present");
                    } else {
                        ui::warn("Some tables are missing; run `gamingai-db populate`");
                    }
                }
            }
        }

        Commands::InitConfig { database, force } => {
            let path = cli.config.unwrap_or_else(config::default_config_path);
            let settings = PopulateConfig {
                database: Some(database.unwrap_or_else(|| DEFAULT_DATABASE.to_string())),
                busy_timeout_ms: Some(DEFAULT_BUSY_TIMEOUT_MS),
            };
            config::write_config(&path, &settings, force)?;

            if !is_quiet() {
                ui::success(&format!("Wrote {}", path.display()));
            }
        }
    }

    Ok(())
}
