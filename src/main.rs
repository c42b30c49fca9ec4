//! topo-tools: Structural diff tool for node-graph topology snapshots
//!
//! Compares two captures of a running system's node graph and reports which
//! nodes, topics, services, connections and parameters went missing, appeared,
//! or changed value.

#![allow(clippy::struct_excessive_bools, clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use topo_tools::{
    cli::{self, SchemaTarget},
    config::{
        self, AppConfig, CliOverrides, DiffConfigBuilder, ValidateConfig, CONFIG_FILE_NAMES,
    },
    pipeline::exit_codes,
    reports::ReportFormat,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "topo-tools")]
#[command(version)]
#[command(about = "Structural diff tool for node-graph topology snapshots", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success (no changes, or changes without --fail-on-change)
    1  Changes detected with --fail-on-change
    2  Structural warnings found by validate --strict
    3  Error occurred

EXAMPLES:
    # Diff two captures, writing ./diff_result.json
    topo-tools diff before.json after.json

    # CI check with a readable summary
    topo-tools diff before.json after.json -o summary --fail-on-change

    # Check a capture for producer mistakes
    topo-tools validate snapshot.json --strict")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Arguments for the `diff` subcommand
#[derive(Parser)]
struct DiffArgs {
    /// Path to the earlier snapshot
    before: PathBuf,

    /// Path to the later snapshot
    after: PathBuf,

    /// Output format (the JSON report file is always written)
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Diff report file path [default: diff_result.json]
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Entries listed per section of the summary
    #[arg(long)]
    max_items: Option<usize>,

    /// Exit with code 1 if any changes detected
    #[arg(long)]
    fail_on_change: bool,

    /// Compare entity kinds in parallel
    #[arg(long)]
    parallel: bool,
}

/// Arguments for the `validate` subcommand
#[derive(Parser)]
struct ValidateArgs {
    /// Path to the snapshot
    snapshot: PathBuf,

    /// Exit with code 2 if any structural warning is found
    #[arg(long)]
    strict: bool,
}

/// Arguments for the `schema` subcommand
#[derive(Parser)]
struct SchemaArgs {
    /// Document to describe
    #[arg(value_enum, default_value = "snapshot")]
    kind: SchemaTarget,

    /// Write schema to file instead of stdout
    #[arg(short = 'O', long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two topology snapshots
    Diff(DiffArgs),

    /// Check a snapshot for structural problems
    Validate(ValidateArgs),

    /// Print the JSON Schema of the snapshot (or config) format
    Schema(SchemaArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .topo-tools.yaml in the current directory
    Init,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(exit_codes::ERROR);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Diff(args) => {
            let overrides = CliOverrides {
                format: args.output,
                file: args.output_file,
                max_items: args.max_items,
                no_color: cli.no_color,
                fail_on_change: args.fail_on_change,
                quiet: cli.quiet,
                parallel: args.parallel,
            };
            let (app_config, loaded_from) =
                AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);
            if let Some(path) = &loaded_from {
                tracing::debug!("Using config file {}", path.display());
            }

            let config = DiffConfigBuilder::from_app(app_config)
                .before_path(args.before)
                .after_path(args.after)
                .build()?;

            let exit_code = cli::run_diff(config)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Validate(args) => {
            let config = ValidateConfig {
                path: args.snapshot,
                strict: args.strict,
                quiet: cli.quiet,
            };
            let exit_code = cli::run_validate(config)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Schema(args) => cli::run_schema(args.kind, args.output),

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "topo-tools", &mut io::stdout());
            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (effective, loaded_from) = config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&effective).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Path => {
                eprintln!("Config file search paths (in order):");
                for dir in config::search_dirs() {
                    eprintln!("  {}", dir.display());
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".topo-tools.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = config::generate_full_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
        },
    }
}
