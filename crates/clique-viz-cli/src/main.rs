//! cliqueviz - front end tooling for the k-clique SAT solver.
//!
//! Serves the browser UI, uploads graph files from the terminal, and renders
//! solver results to SVG.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

mod commands;
mod config;

use commands::config as config_cmd;
use config::Config;

/// cliqueviz - upload a graph, see its clique.
#[derive(Parser, Debug)]
#[command(
    name = "cliqueviz",
    author,
    version,
    about = "cliqueviz: upload graph files to a k-clique SAT solver and draw the result",
    long_about = None
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the browser front end and forward uploads to the solver.
    Serve {
        /// Port to listen on.
        #[arg(short, long)]
        port: Option<u16>,

        /// Solver endpoint uploads are forwarded to.
        #[arg(long)]
        solver_url: Option<String>,

        /// Directory with the WASM bundle of the web front end.
        #[arg(long)]
        assets: Option<PathBuf>,
    },

    /// Upload a graph file and print the answer.
    ///
    /// The file starts with a `<n> <m> <k>` header followed by `m` edge
    /// lines; only the solver reads it.
    Upload {
        /// Graph file to upload.
        file: PathBuf,

        /// Base URL of the server exposing `/upload`.
        #[arg(short, long)]
        server: Option<String>,

        /// Write the drawing to this SVG file.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render a saved result payload (JSON) to SVG.
    Render {
        /// JSON file with `{ sat, edges, clique }`.
        payload: PathBuf,

        /// Output file path (stdout when omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Manage CLI configuration.
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show current configuration.
    Show,

    /// Set a configuration value.
    Set {
        /// Configuration key.
        key: String,
        /// Configuration value.
        value: String,
    },

    /// Get a configuration value.
    Get {
        /// Configuration key.
        key: String,
    },

    /// Reset configuration to defaults.
    Reset,

    /// Show path to config file.
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN // Default to less noise
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = Config::load()?;

    match cli.command {
        Commands::Serve {
            port,
            solver_url,
            assets,
        } => {
            commands::serve::execute(
                port.unwrap_or(config.port),
                solver_url.unwrap_or_else(|| config.solver_url.clone()),
                assets.or_else(|| config.assets_dir.clone()),
            )
            .await?;
        }

        Commands::Upload {
            file,
            server,
            output,
        } => {
            let server = server.unwrap_or_else(|| config.server_url.clone());
            commands::upload::execute(&server, &file, output).await?;
        }

        Commands::Render { payload, output } => {
            commands::render::execute(&payload, output)?;
        }

        Commands::Config(config_cmd_inner) => {
            let mut config = config;
            match config_cmd_inner {
                ConfigCommands::Show => {
                    config_cmd::show(&config)?;
                }
                ConfigCommands::Set { key, value } => {
                    config_cmd::set(&mut config, &key, &value)?;
                }
                ConfigCommands::Get { key } => {
                    config_cmd::get(&config, &key)?;
                }
                ConfigCommands::Reset => {
                    config_cmd::reset()?;
                }
                ConfigCommands::Path => {
                    if let Some(path) = Config::config_file_path() {
                        println!("{}", path.display());
                    } else {
                        println!("(no config file path available)");
                    }
                }
            }
        }
    }

    Ok(())
}
