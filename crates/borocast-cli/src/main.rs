//! CLI for borocast — predict boroughs, run the live dashboard, serve the API.

mod commands;
mod tui;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "borocast")]
#[command(about = "borocast — NYC 311 complaint borough dashboard")]
#[command(version = borocast_core::VERSION)]
struct Cli {
    /// Path to the serialized model artifact (or set BOROCAST_MODEL)
    #[arg(long, global = true)]
    model: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict the borough for a single complaint
    Predict {
        /// Complaint description (free text)
        text: String,

        /// Print the full prediction as JSON instead of the table
        #[arg(long)]
        json: bool,
    },

    /// Live interactive dashboard (TUI): prediction, analytics, heatmap
    Dashboard,

    /// Start the HTTP dashboard server
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "8311")]
        port: u16,

        /// Bind address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Verify that the model artifact loads
    Check {
        /// Write a placeholder artifact first, then load it
        #[arg(long)]
        init: bool,
    },

    /// List the canned example complaints
    Examples,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    let model_path = commands::resolve_model_path(cli.model);

    let result = match cli.command {
        Commands::Predict { text, json } => commands::predict::run(&model_path, &text, json),
        Commands::Dashboard => commands::dashboard::run(&model_path),
        Commands::Serve { port, host } => commands::serve::run(&model_path, &host, port),
        Commands::Check { init } => commands::check::run(&model_path, init),
        Commands::Examples => {
            commands::examples::run();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
