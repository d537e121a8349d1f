//! # codetabs CLI
//!
//! Command-line interface for rendering synchronized Java/Kotlin code tabs.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "codetabs")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "codetabs.yml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a markdown file to an HTML fragment
    Render {
        /// Markdown input file
        input: PathBuf,

        /// Optional output file (defaults to stdout)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Print the code tab groups found in a markdown file as JSON
    Panels {
        /// Markdown input file
        input: PathBuf,

        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },

    /// List the languages that get their own tab
    Languages {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so rendered output stays clean on stdout
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if cli.verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::INFO.into()
            }),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Render { input, output } => {
            commands::render_file(&cli.config, &input, output.as_deref())
        }
        Commands::Panels { input, pretty } => commands::print_panels(&cli.config, &input, pretty),
        Commands::Languages { json } => commands::list_languages(json),
    }
}
