#![forbid(unsafe_code)]
//! Simple Annotation Command Line Interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

use simple_annotation::commands::{
    execute_cache, execute_inspect, execute_parse, CacheSubcommand, InspectOptions,
    InspectTarget, ParseOptions,
};
use simple_annotation::config::DEFAULT_CONFIG_FILE;
use simple_annotation::Config;

#[derive(Parser)]
#[command(name = "simple-annotation")]
#[command(about = "Extract typed values from docblock @annotations")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one comment block and print its annotations as JSON
    Parse {
        /// File containing the comment block (reads from stdin if not provided)
        input: Option<PathBuf>,

        /// Single-line JSON output
        #[arg(long)]
        compact: bool,
    },

    /// Show the annotations of a type from a descriptor file
    Inspect {
        /// Descriptor file (.json, .yaml or .yml)
        descriptor: PathBuf,

        /// Type name as declared in the descriptor
        type_name: String,

        /// Only the type's own annotations
        #[arg(long, conflicts_with_all = ["property", "method"])]
        class: bool,

        /// Only this property
        #[arg(long, conflicts_with = "method")]
        property: Option<String>,

        /// Only this method
        #[arg(long)]
        method: Option<String>,

        /// Bypass the cache even if enabled in config
        #[arg(long)]
        no_cache: bool,
    },

    /// Manage cached parse results
    Cache {
        #[command(subcommand)]
        cmd: CacheCommands,
    },
}

#[derive(Subcommand)]
enum CacheCommands {
    /// Print the cached annotations of a type
    Show {
        /// Type name
        type_name: String,
    },

    /// Delete a type's cache file, or the whole cache directory
    Clear {
        /// Type name (all types if omitted)
        type_name: Option<String>,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Load config
    let config = if cli.config.exists() {
        Config::load(&cli.config)?
    } else {
        Config::default()
    };

    let result = match cli.command {
        Commands::Parse { input, compact } => {
            let options = ParseOptions {
                input,
                pretty: config.output.pretty && !compact,
            };
            execute_parse(options)
        }

        Commands::Inspect { descriptor, type_name, class, property, method, no_cache } => {
            let target = match (class, property, method) {
                (true, _, _) => InspectTarget::Class,
                (_, Some(name), _) => InspectTarget::Property(name),
                (_, _, Some(name)) => InspectTarget::Method(name),
                _ => InspectTarget::All,
            };
            let options = InspectOptions { descriptor, type_name, target, no_cache };
            execute_inspect(options, &config)
        }

        Commands::Cache { cmd } => {
            let subcommand = match cmd {
                CacheCommands::Show { type_name } => CacheSubcommand::Show { type_name },
                CacheCommands::Clear { type_name } => CacheSubcommand::Clear { type_name },
            };
            execute_cache(subcommand, &config)
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", style("✗").red(), e);
        std::process::exit(1);
    }

    Ok(())
}
