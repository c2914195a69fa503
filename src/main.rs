// src/main.rs

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pawhub::application::commands::*;
use pawhub::application::dto::*;
use pawhub::application::AppState;
use pawhub::config::{default_config_path, Config};

#[derive(Parser)]
#[command(name = "pawhub")]
#[command(about = "PawHub - pet adoption and lost-and-found toolkit", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to the user config directory)
    #[arg(long, global = true, env = "PAWHUB_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show registered / found / for-adoption pet counts
    Stats,

    /// Upload image files and print their public URLs
    Upload {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Print one result per file, including failures
        #[arg(long)]
        detailed: bool,
    },

    /// Upload every image below a directory
    UploadDir { directory: PathBuf },

    /// Build share links for a pet, clinic or event page
    Share {
        /// pet | clinic | event
        kind: String,
        id: String,
        title: String,
    },

    /// Delete a pet record
    DeletePet { pet_id: String },

    /// Print the post-login route for an account role
    Redirect { role: Option<String> },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = cli.config.clone().or_else(default_config_path);
    let config = Config::load_from(config_path.as_deref()).context("Failed to load configuration")?;
    let state = AppState::from_config(&config).context("Failed to initialize application")?;

    match cli.command {
        Commands::Stats => render(get_pet_statistics(&state).await),
        Commands::Upload { files, detailed } => {
            let dto = UploadImagesDto {
                paths: files
                    .into_iter()
                    .map(|p| p.to_string_lossy().into_owned())
                    .collect(),
            };
            if detailed {
                render(upload_images_detailed(dto, &state).await)
            } else {
                render(upload_images(dto, &state).await)
            }
        }
        Commands::UploadDir { directory } => render(
            upload_directory(
                UploadDirectoryDto {
                    directory_path: directory.to_string_lossy().into_owned(),
                },
                &state,
            )
            .await,
        ),
        Commands::Share { kind, id, title } => {
            render(share_item(ShareRequestDto { kind, id, title }, &state).await)
        }
        Commands::DeletePet { pet_id } => {
            render(delete_pet(DeletePetDto { pet_id }, &state).await)
        }
        Commands::Redirect { role } => render(post_login_redirect(role, &state).await),
    }
}

/// Print a command result as JSON; errors go to stderr
fn render<T: Serialize>(result: Result<T, String>) -> Result<ExitCode> {
    match result {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            eprintln!("{}", error);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}
