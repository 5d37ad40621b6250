//! ttyprompt - interactive demo of the console helper
//!
//! Walks through every operation of `TerminalSession`: color presets,
//! a plain prompt, a hidden prompt, a masked password and a yes/no
//! confirmation.
//!
//! # Quick Start
//!
//! ```text
//! ttyprompt               # Colors when stdout is a terminal
//! ttyprompt --no-colors   # Plain text output
//! ttyprompt --init-config # Write ~/.ttyprompt/config.toml
//! ```

use std::env;

use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use ttyprompt::{Args, ColorMode, Config, TerminalSession};

/// Options from the command line
#[derive(Default)]
struct Options {
    /// Force plain output
    no_colors: bool,
    /// Override the stty binary
    stty: Option<String>,
    /// Write the effective configuration and exit
    init_config: bool,
}

/// Version string from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding the log filter
const LOG_ENV: &str = "TTYPROMPT_LOG";

fn print_version() {
    eprintln!("ttyprompt {}", VERSION);
}

fn print_help() {
    eprintln!("ttyprompt {} - Colorized console prompts for Unix terminals", VERSION);
    eprintln!();
    eprintln!("Usage: ttyprompt [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --no-colors           Disable color escape sequences");
    eprintln!("  --stty <PATH>         Terminal control binary (default: /bin/stty)");
    eprintln!("  --init-config         Write the configuration file and exit");
    eprintln!("  -v, --version         Show version");
    eprintln!("  -h, --help            Show this help");
    eprintln!();
    eprintln!("Configuration: ~/.ttyprompt/config.toml");
    eprintln!("Log file:      ~/.ttyprompt/ttyprompt.log ({}=debug for more)", LOG_ENV);
}

fn parse_args() -> Result<Options, String> {
    let args: Vec<String> = env::args().collect();
    let mut options = Options::default();
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
            "--no-colors" => {
                options.no_colors = true;
            }
            "--stty" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing stty path".to_string());
                }
                options.stty = Some(args[i].clone());
            }
            "--init-config" => {
                options.init_config = true;
            }
            arg => {
                return Err(format!("Unknown argument: {}. Use -h for help.", arg));
            }
        }
        i += 1;
    }

    Ok(options)
}

fn init_logging() {
    let Some(dir) = ttyprompt::config::config_dir() else {
        return;
    };
    let _ = std::fs::create_dir_all(&dir);

    // Open log file (append mode)
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("ttyprompt.log"))
        .ok();

    if let Some(file) = log_file {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }
}

fn run_demo(io: &mut TerminalSession) -> ttyprompt::Result<()> {
    io.write_line("Hello :-)")?;
    io.write_line("")?;

    io.write_line("Here are some colors:")?;
    for color in ["red", "green", "yellow", "blue", "magenta", "cyan", "white"] {
        let template = format!("%{{{0}}}Var: %{{{0}-bold}}value%{{reset}}", color);
        io.write_formatted_line(&template, &Args::new())?;
    }
    io.write_line("")?;

    let answer = io.ask("Tell me something:")?;
    io.write_formatted_line("Your answer: %{cyan-bold}%s%{reset}", &Args::new().push(answer))?;

    let answer = io.ask_and_hide_answer("Tell me something secret:")?;
    io.write_formatted_line("Your secret: %s", &Args::new().push(answer))?;

    let answer = io.ask_for_password("Tell me your password:")?;
    io.write_formatted_line("Your password: %s", &Args::new().push(answer))?;

    let answer = io.ask_confirmation("Do you want anything else?", true)?;
    io.write_line(if answer { "That's too bad..." } else { "Bye bye then." })?;
    io.write_line("")?;

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let options = match parse_args() {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Use --help for usage information");
            std::process::exit(1);
        }
    };

    init_logging();
    info!("ttyprompt starting...");

    let mut config = Config::load();
    if options.no_colors {
        config.colors = ColorMode::Never;
    }
    if let Some(stty) = options.stty {
        config.stty = stty;
    }

    if options.init_config {
        config.save().map_err(anyhow::Error::msg)?;
        eprintln!("Configuration written");
        return Ok(());
    }

    if !cfg!(unix) {
        eprintln!("ttyprompt requires a Unix terminal with stty.");
        std::process::exit(1);
    }

    let mut io = TerminalSession::from_config(&config);
    if let Err(e) = run_demo(&mut io) {
        error!("demo failed: {}", e);
        return Err(e.into());
    }

    info!("ttyprompt finished");
    Ok(())
}
