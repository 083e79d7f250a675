use std::path::PathBuf;

use anyhow::Context;
use clap::Parser as ClapParser;
use layir::Library;
use tracing_subscriber::EnvFilter;
use transmon::{DifferentialTransmon, TransmonOptions};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    transmongen(args)
}

/// Arguments to [`transmongen`].
#[derive(ClapParser)]
#[command(
    version,
    about,
    long_about = "Generate the layout of a differential transmon qubit"
)]
pub struct Args {
    /// A TOML file of transmon options.
    ///
    /// Options that are not given take their default values.
    file: Option<PathBuf>,
    /// The name of the generated cell.
    #[arg(short, long, default_value = "Q1")]
    name: String,
    /// Overrides a single option, as `key=value`.
    ///
    /// Applied after the options file, in the order given.
    #[arg(short, long = "set", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    set: Vec<(String, String)>,
    /// The path where the generated cell should be saved, as TOML.
    ///
    /// If the file already exists, it will be overwritten.
    /// If unspecified, the output will be written to stdout.
    #[arg(short, long)]
    out: Option<PathBuf>,
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, found `{s}`"))?;
    Ok((key.trim().to_string(), value.trim().to_string()))
}

/// Generates a transmon cell and writes it out as TOML.
pub fn transmongen(args: Args) -> anyhow::Result<()> {
    let mut options = match args.file {
        Some(ref path) => TransmonOptions::from_file(path)
            .with_context(|| format!("Failed to load options from {:?}.", path))?,
        None => TransmonOptions::default(),
    };
    for (key, value) in args.set {
        options
            .set(&key, value)
            .with_context(|| format!("Failed to apply override for `{key}`."))?;
    }

    let mut lib = Library::new();
    let id = DifferentialTransmon::new(args.name, options)
        .add_to(&mut lib)
        .with_context(|| "Failed to generate transmon.")?;
    let cell = toml::to_string_pretty(lib.cell(id))
        .with_context(|| "Failed to serialize generated cell.")?;

    if let Some(path) = args.out {
        std::fs::write(&path, cell)
            .with_context(|| format!("Failed to write generated cell to {:?}.", path))?;
        tracing::info!("wrote generated cell to {:?}", path);
    } else {
        print!("{cell}");
    }

    Ok(())
}
