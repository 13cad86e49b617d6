mod config;
mod consts;
mod editor;
mod entries;
mod error;
mod events;
mod ids;
mod keys;
mod logging;
mod logs;
mod router;
mod session;
mod theme;
mod ui;

use crate::config::{Config, get_config_path};
use crate::session::{run_tui_mode, setup_session};
use crate::theme::Theme;
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Terminal password and links log
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the terminal UI
    Start {
        /// Theme to start with, overriding the config file
        #[arg(long, value_enum)]
        theme: Option<Theme>,

        /// Initial route, e.g. /dashboard/links
        #[arg(long, value_name = "PATH")]
        route: Option<String>,

        /// Keep the terminal's own background color
        #[arg(long, default_value_t = false)]
        no_background: bool,
    },
    /// Print a freshly generated secret key
    Keygen,
    /// Show or change startup preferences
    Config {
        /// Theme used at startup
        #[arg(long, value_enum)]
        theme: Option<Theme>,

        /// Whether to paint the theme background
        #[arg(long, value_name = "BOOL")]
        background: Option<bool>,
    },
    /// Delete the config file
    Reset,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    match args.command {
        Command::Start {
            theme,
            route,
            no_background,
        } => {
            let session = setup_session(theme, route, no_background)?;
            run_tui_mode(session).await.map_err(Into::into)
        }
        Command::Keygen => {
            println!("{}", keys::generate_secret_key());
            Ok(())
        }
        Command::Config { theme, background } => {
            let config_path = get_config_path()?;
            let config = Config::load_or_default(&config_path)?;
            if theme.is_none() && background.is_none() {
                println!("{}", serde_json::to_string_pretty(&config)?);
                return Ok(());
            }
            let config = Config::new(
                theme.unwrap_or(config.theme),
                background.unwrap_or(config.with_background_color),
            );
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            println!("Saved config to {}", config_path.display());
            Ok(())
        }
        Command::Reset => {
            println!("Removing config file...");
            let config_path = get_config_path()?;
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}
