// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, Subcommand};
use snapcam::{FlashMode, i18n};
use std::sync::Mutex;

mod cli;

#[derive(Parser)]
#[command(name = "snapcam")]
#[command(about = "Minimal camera: preview, capture, review and save photos")]
#[command(version)]
#[command(subcommand_required = false)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive camera in the terminal (default)
    Terminal,

    /// Take a photo without the interactive UI
    Photo {
        /// Use the front camera
        #[arg(long)]
        front: bool,

        /// Flash mode: off, on or auto
        #[arg(long, default_value = "off")]
        flash: FlashMode,

        /// Save the photo to the library after capture
        #[arg(short, long)]
        save: bool,
    },

    /// Show stored permission decisions
    Permissions {
        /// Forget all stored decisions
        #[arg(long)]
        reset: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let interactive = matches!(cli.command, None | Some(Commands::Terminal));

    init_logging(interactive);

    let config = snapcam::config::load()?;

    // Get the system's preferred languages, unless the config overrides them
    match config.language.as_deref() {
        Some(tag) => {
            if let Err(e) = i18n::set_language(tag) {
                tracing::warn!(language = tag, error = %e, "Falling back to desktop language");
                i18n::init(&i18n_embed::DesktopLanguageRequester::requested_languages());
            }
        }
        None => i18n::init(&i18n_embed::DesktopLanguageRequester::requested_languages()),
    }

    match cli.command {
        None | Some(Commands::Terminal) => snapcam::terminal::run(&config),
        Some(Commands::Photo { front, flash, save }) => cli::take_photo(&config, front, flash, save),
        Some(Commands::Permissions { reset }) => cli::permissions(reset),
    }
}

/// Initialize logging
///
/// Set RUST_LOG to control the level (default `warn`). While the terminal UI
/// owns the screen, logs go to a file in the cache directory.
fn init_logging(interactive: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true);

    if interactive {
        let log_dir = snapcam::storage::default_capture_directory()
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(std::env::temp_dir);
        let file = std::fs::create_dir_all(&log_dir).and_then(|_| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_dir.join(snapcam::constants::LOG_FILE))
        });
        match file {
            Ok(file) => builder.with_ansi(false).with_writer(Mutex::new(file)).init(),
            // No log file; stay quiet rather than draw over the UI
            Err(_) => builder.with_writer(std::io::sink).init(),
        }
    } else {
        builder.init();
    }
}
