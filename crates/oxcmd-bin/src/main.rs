//! oxcmd entrypoint: runs a directive script against the line editor.
use anyhow::{Context, Result};
use clap::Parser;
use core_config::load_from;
use core_dirs::OsFilesystem;
use core_state::EngineLimits;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;

mod script;
mod session;

use script::parse_directive;
use session::Session;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "oxcmd", version, about = "Scripted shell line editor")]
struct Args {
    /// Directive script to run. Reads stdin when omitted.
    pub script: Option<PathBuf>,
    /// Optional configuration file path (overrides discovery of `oxcmd.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
    /// Prompt printed in front of the line.
    #[arg(long = "prompt", default_value = "> ")]
    pub prompt: String,
}

fn configure_logging() -> Option<WorkerGuard> {
    let log_dir = Path::new(".");
    let log_path = log_dir.join("oxcmd.log");
    if log_path.exists() {
        let _ = std::fs::remove_file(&log_path);
    }

    let file_appender = tracing_appender::rolling::never(log_dir, "oxcmd.log");
    let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
    match tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(nb_writer)
        .with_ansi(false)
        .try_init()
    {
        Ok(_) => Some(guard),
        // Global subscriber already installed; dropping the guard shuts the writer down.
        Err(_) => None,
    }
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!(target: "runtime.panic", ?info, "panic");
            default_panic(info);
        }));
    });
}

fn open_script(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    Ok(match path {
        Some(p) => {
            let file =
                File::open(p).with_context(|| format!("opening script {}", p.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin())),
    })
}

fn main() -> Result<()> {
    let _log_guard = configure_logging();
    install_panic_hook();
    info!(target: "runtime", "startup");

    let args = Args::parse();
    let config = load_from(args.config.clone())?;
    let limits = config.limits();
    let history_file = config.history_file();
    info!(
        target: "runtime.startup",
        config_override = args.config.is_some(),
        max_cmd_history = limits.max_cmd_history,
        max_dir_history = limits.max_dir_history,
        undo_limit = limits.undo_limit,
        "bootstrap_complete"
    );

    let engine_limits = EngineLimits {
        max_cmd_history: limits.max_cmd_history,
        undo_limit: limits.undo_limit,
    };
    let mut session = Session::new(
        &args.prompt,
        engine_limits,
        limits.max_dir_history,
        OsFilesystem,
    );
    if let Some(path) = history_file.as_deref()
        && let Err(e) = session.state.history_mut().load_from(path)
    {
        warn!(target: "runtime", error = %e, "history_load_failed");
    }
    session.start();

    let reader = open_script(args.script.as_deref())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (number, line) in reader.lines().enumerate() {
        let line = line.context("reading script")?;
        match parse_directive(&line) {
            Ok(Some(directive)) => session.run(directive, &mut out)?,
            Ok(None) => {}
            Err(e) => {
                warn!(target: "runtime", line = number + 1, error = %e, "directive_skipped");
                writeln!(out, "line {}: {e}", number + 1)?;
            }
        }
    }
    out.flush()?;

    if let Some(path) = history_file.as_deref()
        && let Err(e) = session.state.history().save_to(path)
    {
        error!(target: "runtime", error = %e, "history_save_failed");
    }
    info!(target: "runtime", accepted = session.accepted(), "shutdown");
    Ok(())
}
