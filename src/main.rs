use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;

use clap::{Parser, ValueEnum};
use hospital_dojo::{AppMode, Dojo, DojoError};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the scenarios from instead of the bundled set
    #[arg(short, long)]
    scenarios: Option<PathBuf>,

    /// Screen to open on start
    #[arg(short, long, value_enum, default_value_t = StartMode::Home)]
    mode: StartMode,

    /// Seed for option shuffling, for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StartMode {
    Home,
    Study,
    Quiz,
}

impl From<StartMode> for AppMode {
    fn from(mode: StartMode) -> Self {
        match mode {
            StartMode::Home => AppMode::Home,
            StartMode::Study => AppMode::Study,
            StartMode::Quiz => AppMode::Quiz,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        if let Err(e) = init_logging(path) {
            eprintln!("Failed to open log file {}: {}", path.display(), e);
            return ExitCode::FAILURE;
        }
    }

    if let Err(e) = run(args) {
        eprintln!("Error running dojo: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: Args) -> Result<(), DojoError> {
    let mut dojo = match &args.scenarios {
        Some(path) => Dojo::from_json(path, args.seed)?,
        None => Dojo::builtin(args.seed)?,
    };
    dojo.open(args.mode.into())?;
    dojo.run()
}

/// The UI owns stdout, so logs only go to a file.
fn init_logging(path: &Path) -> std::io::Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
