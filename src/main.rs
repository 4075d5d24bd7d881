//! euroulette - An interactive European roulette wheel for the terminal
//!
//! The wheel spins in place on the current line until stopped, then coasts
//! to a halt on a final number.
//!
//! # Quick Start
//!
//! ```text
//! euroulette                  # Start with the default colors
//! euroulette -t solarized     # Start with a different color scheme
//! ```
//!
//! # Keys
//!
//! | Key | Action |
//! |-----|--------|
//! | Space | Start the wheel / stop the wheel |
//! | q, Esc, Ctrl+C | Quit |
//!
//! Set `EUROULETTE_DEBUG=true` to write spin diagnostics to the log file.

mod config;
mod input;
mod session;
mod spin;
mod ui;
mod wheel;

use std::env;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use crate::config::{debug_enabled, ColorScheme, Config as GameConfig};
use crate::input::InputSource;
use crate::session::Session;
use crate::ui::Renderer;

/// Version string from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Command line options
#[derive(Default)]
struct Config {
    /// Color scheme override
    theme: Option<String>,
}

fn print_version() {
    eprintln!("euroulette {}", VERSION);
}

fn print_help() {
    eprintln!(
        "euroulette {} - An interactive European roulette wheel for the terminal",
        VERSION
    );
    eprintln!();
    eprintln!("Usage: euroulette [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -t, --theme <NAME>    Color scheme for the wheel pockets");
    eprintln!("  -v, --version         Show version");
    eprintln!("  -h, --help            Show this help");
    eprintln!();
    eprintln!("Keys:");
    eprintln!("  SPACE                 Start the wheel / stop the wheel");
    eprintln!("  q, Esc, Ctrl+C        Quit");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  EUROULETTE_DEBUG=true  Write spin diagnostics to the log file");
    eprintln!();
    eprintln!("Configuration: ~/.euroulette/config.toml");
    eprintln!("Log file:      ~/.euroulette/euroulette.log");
    eprintln!();
    eprintln!("Color schemes: {}", ColorScheme::list().join(", "));
}

fn parse_args() -> Result<Config, String> {
    let args: Vec<String> = env::args().collect();
    let mut config = Config::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-v" | "--version" => {
                print_version();
                std::process::exit(0);
            }
            "-t" | "--theme" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing theme argument".to_string());
                }
                config.theme = Some(args[i].clone());
            }
            arg => {
                return Err(format!("Unknown argument: {}. Use -h for help.", arg));
            }
        }
        i += 1;
    }

    Ok(config)
}

/// Initialize logging to `~/.euroulette/euroulette.log`. The debug flag
/// raises the level so the spin diagnostics are captured.
fn init_logging(debug: bool) {
    let home = env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .map(std::path::PathBuf::from);

    let log_path = home
        .map(|h| h.join(".euroulette").join("euroulette.log"))
        .unwrap_or_else(|| std::path::PathBuf::from("euroulette.log"));

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .ok();

    if let Some(file) = log_file {
        let level = if debug { Level::DEBUG } else { Level::INFO };
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }
}

fn main() -> anyhow::Result<()> {
    let cli = match parse_args() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Use --help for usage information");
            std::process::exit(1);
        }
    };

    let debug_mode = debug_enabled();
    init_logging(debug_mode);
    info!("euroulette starting...");

    // Command line theme overrides the config file
    let mut game_config = GameConfig::load();
    if let Some(theme) = cli.theme {
        game_config.color_scheme = theme;
    }
    info!("Color scheme: {}", game_config.color_scheme().name);
    info!("Debug diagnostics: {}", debug_mode);

    let renderer = Renderer::new(game_config.color_scheme());
    renderer.banner()?;

    // Raw mode is held by the input source and released by its guard on
    // every exit path, including error returns.
    let mut input = InputSource::open()
        .context("failed to put the terminal into raw mode")?;

    let mut session = Session::new(renderer.clone());
    let result = session.run(&mut input);

    let _ = input.close();
    result?;

    renderer.goodbye()?;
    info!("euroulette exiting");
    Ok(())
}
