mod commands;
mod exit_code;
mod output;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub use exit_code::ExitCode;
pub use output::OutputFormat;

#[derive(Parser)]
#[command(name = "graphql-fields")]
#[command(about = "Print the fields a GraphQL resolver is asked for", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a `.graphql-fields.yml` config file
    ///
    /// Without this flag the nearest config file above the input is used.
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Force colored output even when not a TTY
    #[arg(long, global = true, conflicts_with = "no_color")]
    color: bool,

    /// Disable colored output
    #[arg(long, global = true, conflicts_with = "color")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Locates a resolver inside a GraphQL document.
#[derive(Debug, Args)]
pub struct DocumentArgs {
    /// GraphQL document containing the operation and its fragments
    pub document: PathBuf,

    /// Response path of the resolver, e.g. `viewer.users`
    #[arg(short, long)]
    pub path: String,

    /// Operation to use when the document defines more than one
    #[arg(short, long)]
    pub operation: Option<String>,

    /// Variable values as a JSON object
    #[arg(long, value_name = "JSON", conflicts_with = "variables_file")]
    pub variables: Option<String>,

    /// File containing variable values as a JSON object
    #[arg(long, value_name = "FILE")]
    pub variables_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the fields requested below a resolver path
    Collect {
        #[command(flatten)]
        document: DocumentArgs,

        /// Field names to leave out at every depth (comma-separated)
        #[arg(short = 'x', long, value_delimiter = ',')]
        exclude: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "tree")]
        format: OutputFormat,
    },

    /// Print the resolver context for a path as JSON
    ///
    /// The captured context can be stored and fed back into `replay`
    /// without the original document.
    Capture {
        #[command(flatten)]
        document: DocumentArgs,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Print the fields requested by a captured resolver context
    Replay {
        /// JSON file written by `capture`
        info: PathBuf,

        /// Field names to leave out at every depth (comma-separated)
        #[arg(short = 'x', long, value_delimiter = ',')]
        exclude: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "tree")]
        format: OutputFormat,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing();
    configure_colors(cli.color, cli.no_color);

    match cli.command {
        Commands::Collect {
            document,
            exclude,
            format,
        } => commands::collect::run(cli.config, &document, exclude, format),
        Commands::Capture { document, pretty } => {
            commands::capture::run(cli.config, &document, pretty)
        }
        Commands::Replay {
            info,
            exclude,
            format,
        } => commands::replay::run(cli.config, &info, exclude, format),
    }
}

/// Initialize tracing, silent unless `RUST_LOG` asks for output
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Apply `--color` / `--no-color`.
///
/// Without either flag the `colored` crate decides, honouring `NO_COLOR`,
/// `CLICOLOR` and TTY detection.
fn configure_colors(force_color: bool, no_color: bool) {
    use colored::control;

    if force_color {
        control::set_override(true);
    } else if no_color {
        control::set_override(false);
    }
}
