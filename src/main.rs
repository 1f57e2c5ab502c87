mod cow;
mod module;
mod text_utils;

use crate::cow::CowsayError;
use crate::module::{ModuleArgs, ModuleResult};
use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Application configuration from CLI
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about = "Let the cow say it")]
pub struct Config {
    /// Text for the cow to say (read from stdin when omitted)
    #[arg(value_name = "TEXT")]
    text: Vec<String>,
    /// Run as a host module: read JSON arguments from FILE and print a JSON result
    #[arg(long, value_name = "FILE", conflicts_with = "text")]
    args: Option<PathBuf>,
    /// Check mode. Rendering has no side effects, so this only adds a warning in module mode.
    #[arg(long)]
    check: bool,
    /// Enable debug logging to stderr
    #[arg(long)]
    pub debug_log: bool,
}

fn init_tracing(debug_log: bool) {
    let filter = if debug_log {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Positional words joined by spaces, or all of stdin when there are none.
fn input_text(cfg: &Config) -> Result<String, CowsayError> {
    if !cfg.text.is_empty() {
        return Ok(cfg.text.join(" "));
    }
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn run_cli(cfg: &Config) -> ExitCode {
    match input_text(cfg).and_then(|text| cow::render(&text)) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_host_module(path: &Path, check: bool) -> ExitCode {
    let result = match ModuleArgs::load(path) {
        Ok(mut args) => {
            args.check_mode |= check;
            tracing::debug!(path = %path.display(), check_mode = args.check_mode, "Loaded module arguments");
            module::run_module(&args)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), "Failed to load module arguments: {}", e);
            ModuleResult::failure(&e)
        }
    };
    println!("{}", result.to_json());
    if result.failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

fn main() -> ExitCode {
    let cfg = Config::parse();
    init_tracing(cfg.debug_log);
    tracing::debug!(?cfg, "cowsay starting");

    match &cfg.args {
        Some(path) => run_host_module(path, cfg.check),
        None => run_cli(&cfg),
    }
}
