//! aasx-tools: Asset Administration Shell viewer and transformer
//!
//! Normalizes AAS environment JSON and presents it as a tree.

#![allow(clippy::needless_pass_by_value)]

use aasx_tools::{
    cli,
    config::{
        AppConfig, SummaryConfig, TransformConfig, Validatable, ValidateConfig, ViewConfig,
        CONFIG_FILE_NAMES,
    },
    pipeline::exit_codes,
    reports::ReportFormat,
};
use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with input support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nSupported inputs:",
        "\n  AAS environment JSON (metamodel V2 and V3)",
        "\n  Normalized {AAS, SM} documents",
        "\n\nOutput formats:",
        "\n  tree, json, summary"
    )
}

#[derive(Parser)]
#[command(name = "aasx-tools")]
#[command(version, long_version = build_long_version())]
#[command(about = "Asset Administration Shell viewer and transformer", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Input is not an AAS document
    2  Diagnostics found (--strict)
    3  Error occurred

EXAMPLES:
    # Browse an environment as a tree
    aasx-tools view environment.json -o tree

    # Normalize for another tool
    aasx-tools transform environment.json --compact > normalized.json

    # CI check for dangling submodel references
    aasx-tools validate environment.json --strict

    # Overview of a directory of exports
    aasx-tools summary exports/*.json")]
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

/// Arguments for the `view` subcommand
#[derive(Parser)]
struct ViewArgs {
    /// Path to the AAS document
    file: PathBuf,

    /// Output format (auto detects TTY: tree if interactive, summary otherwise)
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Append node ids to each tree line
    #[arg(long)]
    show_ids: bool,

    /// Number of tree levels to draw
    #[arg(long)]
    max_depth: Option<usize>,

    /// Truncate tree labels wider than this
    #[arg(long)]
    max_label_width: Option<usize>,

    /// Single-line JSON output
    #[arg(long)]
    compact: bool,

    /// Exit with code 2 when diagnostics are found
    #[arg(long)]
    strict: bool,
}

/// Arguments for the `transform` subcommand
#[derive(Parser)]
struct TransformArgs {
    /// Path to the AAS environment
    file: PathBuf,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Single-line JSON output
    #[arg(long)]
    compact: bool,
}

/// Arguments for the `validate` subcommand
#[derive(Parser)]
struct ValidateArgs {
    /// Path to the AAS document
    file: PathBuf,

    /// Exit with code 2 when diagnostics are found
    #[arg(long)]
    strict: bool,
}

/// Arguments for the `summary` subcommand
#[derive(Parser)]
struct SummaryArgs {
    /// AAS documents to summarize
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// View a single AAS document
    View(ViewArgs),

    /// Print the normalized form of an AAS environment as JSON
    Transform(TransformArgs),

    /// Check detection and submodel references of an AAS document
    Validate(ValidateArgs),

    /// Summarize many AAS documents
    Summary(SummaryArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
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
    /// Generate an example .aasx-tools.yaml in the current directory
    Init,
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(io::stderr))
        .init();

    let code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit_codes::ERROR
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::View(args) => {
            let overrides = AppConfig::builder()
                .output_format(args.output)
                .output_file(args.output_file)
                .no_color(cli.no_color)
                .compact_json(args.compact)
                .show_ids(args.show_ids)
                .max_depth(args.max_depth)
                .max_label_width(args.max_label_width)
                .quiet(cli.quiet)
                .strict(args.strict)
                .build();
            let app = load_config(cli.config.as_deref(), &overrides)?;
            cli::run_view(ViewConfig {
                path: args.file,
                output: app.output,
                tree: app.tree,
                behavior: app.behavior,
            })
        }

        Commands::Transform(args) => {
            let overrides = AppConfig::builder()
                .output_file(args.output_file)
                .compact_json(args.compact)
                .quiet(cli.quiet)
                .build();
            let app = load_config(cli.config.as_deref(), &overrides)?;
            cli::run_transform(TransformConfig {
                path: args.file,
                quiet: app.behavior.quiet,
                output: app.output,
            })
        }

        Commands::Validate(args) => {
            let overrides = AppConfig::builder()
                .quiet(cli.quiet)
                .strict(args.strict)
                .build();
            let app = load_config(cli.config.as_deref(), &overrides)?;
            cli::run_validate(ValidateConfig {
                path: args.file,
                behavior: app.behavior,
            })
        }

        Commands::Summary(args) => {
            let overrides = AppConfig::builder()
                .output_file(args.output_file)
                .no_color(cli.no_color)
                .quiet(cli.quiet)
                .build();
            let app = load_config(cli.config.as_deref(), &overrides)?;
            cli::run_summary(SummaryConfig {
                paths: args.files,
                quiet: app.behavior.quiet,
                output: app.output,
            })
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "aasx-tools", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = aasx_tools::config::generate_json_schema()
                .context("failed to generate config schema")?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => run_config_action(action, cli.config.as_deref()),
    }
}

/// Load the config file, merge CLI overrides and validate the result.
fn load_config(explicit: Option<&std::path::Path>, overrides: &AppConfig) -> Result<AppConfig> {
    let (config, loaded_from) = AppConfig::from_file_with_overrides(explicit, overrides);
    if let Some(path) = &loaded_from {
        tracing::debug!("Loaded config from {}", path.display());
    }

    let errors = config.validate();
    if !errors.is_empty() {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        anyhow::bail!("invalid configuration: {}", messages.join("; "));
    }
    Ok(config)
}

fn run_config_action(action: ConfigAction, explicit: Option<&std::path::Path>) -> Result<i32> {
    match action {
        ConfigAction::Show => {
            let (config, loaded_from) = aasx_tools::config::load_or_default(explicit);
            if let Some(path) = &loaded_from {
                eprintln!("# Loaded from: {}", path.display());
            } else {
                eprintln!("# No config file found; showing defaults");
            }
            let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
            print!("{yaml}");
        }
        ConfigAction::Path => {
            let search_paths: [Option<String>; 3] = [
                std::env::current_dir()
                    .ok()
                    .map(|p| p.display().to_string()),
                dirs::config_dir().map(|p| p.join("aasx-tools").display().to_string()),
                dirs::home_dir().map(|p| p.display().to_string()),
            ];
            eprintln!("Config file search paths (in order, git root after the first):");
            for path in search_paths.into_iter().flatten() {
                eprintln!("  {path}");
            }
            eprintln!();
            eprintln!("Recognized file names:");
            for name in CONFIG_FILE_NAMES {
                eprintln!("  {name}");
            }
            eprintln!();
            match aasx_tools::config::discover_config_file(explicit) {
                Some(path) => eprintln!("Active config file: {}", path.display()),
                None => eprintln!("No config file found."),
            }
        }
        ConfigAction::Init => {
            let target = std::env::current_dir()
                .context("cannot determine current directory")?
                .join(".aasx-tools.yaml");
            if target.exists() {
                anyhow::bail!(
                    "{} already exists. Remove it first to re-initialize.",
                    target.display()
                );
            }
            let content = aasx_tools::config::generate_full_example_config();
            std::fs::write(&target, content)
                .with_context(|| format!("failed to write {}", target.display()))?;
            eprintln!("Created {}", target.display());
        }
    }
    Ok(exit_codes::SUCCESS)
}
