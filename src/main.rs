//! keymill CLI - generates G-code for milling the curves of a key.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use keymill::gcode::{write_program, GCodeWriter};
use keymill::operations::mapping::{CurveKind, LockCode};
use keymill::{KeyToolpaths, MachineConfig};

#[derive(Parser)]
#[command(name = "keymill")]
#[command(about = "Generates G-code for the double and single curve of a key", long_about = None)]
struct Cli {
    /// Key codes, e.g. `d123456 s765432`
    #[arg(required = true)]
    codes: Vec<String>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML file overriding the machine constants
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config = match &cli.config {
        Some(path) => MachineConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => MachineConfig::default(),
    };

    let double = LockCode::from_arguments(CurveKind::Double, &cli.codes)?;
    let single = LockCode::from_arguments(CurveKind::Single, &cli.codes)?;
    info!("generating G-code for key code: d{double} s{single}");

    let toolpaths = KeyToolpaths::generate(&double, &single, &config)?;

    let out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = GCodeWriter::new(BufWriter::new(out));
    write_program(&mut writer, &toolpaths, config.safety_z)?;

    if let Some(path) = &cli.output {
        info!(path = %path.display(), "wrote G-code");
    }
    Ok(())
}
