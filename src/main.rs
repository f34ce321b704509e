// Copyright (C) 2026 Michael Wilson <mike@mdwn.dev>
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, version 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//
use std::error::Error;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{crate_version, Parser, Subcommand};
use dspreset::batch::scan_and_convert;
use dspreset::codegen::{generate_setup_code, generate_setup_file};
use dspreset::config::{load_settings, Settings};
use dspreset::preset::{load_preset, write_json, PresetBundle, PresetDocument};
use dspreset::util::default_output_path;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(
    author = "Michael Wilson",
    version = crate_version!(),
    about = "Converts Decent Sampler presets into Vivid instrument JSON."
)]
struct Cli {
    /// An optional settings file. DSPRESET_* environment variables override it.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Converts a single preset and prints its setup code.
    Convert {
        /// The path to the .dspreset file.
        input: PathBuf,
        /// Where to write the JSON. Defaults to the input path with a .json extension.
        output: Option<PathBuf>,
    },
    /// Converts every preset found under a sample pack folder.
    Folder {
        /// The path to the sample pack folder.
        path: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;

    match cli.command {
        Commands::Convert { input, output } => {
            let output = output.unwrap_or_else(|| default_output_path(&input));
            convert(&input, &output)
        }
        Commands::Folder { path } => folder(&path, &settings),
    }
}

/// Converts one preset, writes its JSON and prints a summary along with its setup code.
fn convert(input: &Path, output: &Path) -> Result<(), Box<dyn Error>> {
    println!("Parsing {}...", input.display());
    let preset = load_preset(input)?;

    println!("  Name: {}", preset.name);
    println!("  Samples: {}", preset.samples.len());
    for sample in preset.samples.iter() {
        println!("    {}", sample);
    }
    if let Some(group) = preset.groups.first() {
        let envelope = group.envelope;
        println!(
            "  ADSR: A={}, D={}, S={}, R={}",
            envelope.attack, envelope.decay, envelope.sustain, envelope.release
        );
    }

    let mut writer = BufWriter::new(File::create(output)?);
    write_json(&mut writer, &PresetDocument::from(&preset))?;
    writer.flush()?;
    println!("\nWrote {}", output.display());

    let base_path = input
        .parent()
        .map(|parent| parent.display().to_string())
        .unwrap_or_default();
    println!("\n// Vivid C++ setup code:");
    println!("{}", generate_setup_code(&preset, &base_path));

    Ok(())
}

/// Converts every preset under the folder and writes the aggregate JSON and setup code into it.
fn folder(path: &Path, settings: &Settings) -> Result<(), Box<dyn Error>> {
    println!(
        "Scanning {} for .{} files...",
        path.display(),
        settings.extension()
    );
    let batch = scan_and_convert(path, settings)?;

    if batch.presets.is_empty() {
        return Err(format!(
            "no .{} files could be converted in {}",
            settings.extension(),
            path.display()
        )
        .into());
    }

    let presets_path = path.join(settings.presets_file());
    let mut writer = BufWriter::new(File::create(&presets_path)?);
    write_json(&mut writer, &PresetBundle::new(&batch.presets))?;
    writer.flush()?;
    println!("\nWrote {}", presets_path.display());

    let setup_path = path.join(settings.setup_file());
    fs::write(
        &setup_path,
        generate_setup_file(&batch.presets, &path.display().to_string()),
    )?;
    println!("Wrote {}", setup_path.display());

    info!(
        converted = batch.presets.len(),
        failed = batch.failures.len(),
        "Finished converting folder"
    );
    println!(
        "\nConverted {} presets ({} failed).",
        batch.presets.len(),
        batch.failures.len()
    );

    Ok(())
}
