//! # shortlink CLI
//!
//! Command-line interface for building markdown sites with shortcut links.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shortlink")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "shortlink.yml", env = "SHORTLINK_CONFIG")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the site, expanding shortcut links
    Build,

    /// Compile every page without writing output and report diagnostics
    Check {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Resolve a single shortcut target such as `@github:kowainik(relude)`
    Resolve {
        /// Link target, starting with '@'
        target: String,

        /// Link text, used when the target has no `(text)` part
        #[arg(long)]
        text: Option<String>,
    },

    /// List the available shortcut names
    List {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; logs go to stderr so stdout stays parseable
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
        Commands::Build => commands::build_site(&cli.config),
        Commands::Check { json } => commands::check_site(&cli.config, json),
        Commands::Resolve { target, text } => {
            commands::resolve_target(&cli.config, &target, text.as_deref())
        }
        Commands::List { json } => commands::list_shortcuts(&cli.config, json),
    }
}
