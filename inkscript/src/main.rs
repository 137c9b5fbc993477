#![warn(clippy::pedantic)]

//! Headless host for the inkscript drawing language. Feeds command lines
//! from script files (or stdin) through the interpreter, with draw calls
//! traced to the log and notifications printed to stdout. Pen settings are
//! restored before the run and optionally saved back after.

mod trace;

use anyhow::{Context, Result as AnyResult};
use inkscript_core::{persist, Interpreter};
use std::{
    io::BufRead,
    path::{Path, PathBuf},
};
use trace::{StdoutNotifier, TraceCanvas};

struct Args {
    scripts: Vec<PathBuf>,
    settings: Option<PathBuf>,
    save_settings: bool,
}

fn parse_args() -> AnyResult<Args> {
    let mut args = Args {
        scripts: Vec::new(),
        settings: None,
        save_settings: false,
    };
    let mut argv = std::env::args().skip(1);
    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "--settings" => {
                let path = argv.next().context("--settings requires a path")?;
                args.settings = Some(path.into());
            }
            "--save-settings" => args.save_settings = true,
            "--help" | "-h" => {
                eprintln!("usage: inkscript [--settings <path>] [--save-settings] [script...]");
                std::process::exit(0);
            }
            other if other.starts_with('-') => {
                anyhow::bail!("unknown flag {other:?}");
            }
            script => args.scripts.push(script.into()),
        }
    }
    Ok(args)
}

/// `<config dir>/inkscript/settings.txt`, if a config dir exists at all.
fn default_settings_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push("inkscript");
    path.push("settings.txt");
    Some(path)
}

fn run_script(
    interpreter: &mut Interpreter,
    canvas: &mut TraceCanvas,
    notifier: &mut StdoutNotifier,
    source: impl BufRead,
) -> AnyResult<()> {
    for line in source.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        // Failures are already reported through the notifier; keep going,
        // the interpreter is built to outlive any one bad command.
        if let Err(e) = interpreter.execute(&line, canvas, notifier) {
            log::debug!("command {line:?} failed: {e}");
        }
    }
    Ok(())
}

fn main() -> AnyResult<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = parse_args()?;
    let settings = args.settings.clone().or_else(default_settings_path);

    let mut interpreter = Interpreter::new();
    if let Some(path) = settings.as_deref() {
        persist::load_path(interpreter.state_mut(), path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?;
    }

    let mut canvas = TraceCanvas::new();
    let mut notifier = StdoutNotifier;

    if args.scripts.is_empty() {
        let stdin = std::io::stdin();
        run_script(
            &mut interpreter,
            &mut canvas,
            &mut notifier,
            stdin.lock(),
        )?;
    } else {
        for script in &args.scripts {
            let file = std::fs::File::open(script)
                .with_context(|| format!("failed to open script {}", script.display()))?;
            run_script(
                &mut interpreter,
                &mut canvas,
                &mut notifier,
                std::io::BufReader::new(file),
            )?;
        }
    }

    log::info!(
        "done: {} draw operation(s), pen at {}",
        canvas.operations(),
        interpreter.state().pen_position()
    );

    if args.save_settings {
        let path = settings.context("no settings path available to save to")?;
        ensure_parent(&path)?;
        persist::save_path(interpreter.state(), &path)
            .with_context(|| format!("failed to save settings to {}", path.display()))?;
        log::info!("settings saved to {}", path.display());
    }
    Ok(())
}

fn ensure_parent(path: &Path) -> AnyResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    Ok(())
}
