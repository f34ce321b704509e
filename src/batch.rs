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

//! Batch conversion of every preset found under a directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, error, info};

use crate::config::Settings;
use crate::preset::{load_preset, ConvertError, InstrumentPreset};
use crate::util::{file_stem, filename_display, has_extension};

/// The outcome of a batch conversion.
#[derive(Debug, Default)]
pub struct BatchResult {
    /// The presets that converted, in discovery order.
    pub presets: Vec<InstrumentPreset>,
    /// The documents that failed, in discovery order.
    pub failures: Vec<ConvertError>,
}

/// Recurse into the given path and return every preset document found, visiting
/// the entries of each directory in file name order. Symlinked directories are not
/// followed. Only an unreadable root is an error; unreadable subdirectories are
/// logged and skipped.
pub fn discover_presets(path: &Path, settings: &Settings) -> io::Result<Vec<PathBuf>> {
    let mut presets = Vec::new();
    visit_directory(path, settings, &mut presets)?;
    Ok(presets)
}

fn visit_directory(
    path: &Path,
    settings: &Settings,
    presets: &mut Vec<PathBuf>,
) -> io::Result<()> {
    debug!("Discovering presets in directory {path:?}");
    let mut entries = fs::read_dir(path)?
        .map(|entry| {
            let entry = entry?;
            Ok((entry.path(), entry.file_type()?.is_dir()))
        })
        .collect::<io::Result<Vec<(PathBuf, bool)>>>()?;
    entries.sort();

    for (path, is_dir) in entries {
        if is_dir {
            if settings.skip_hidden() && filename_display(&path).starts_with('.') {
                continue;
            }
            visit_subdirectory(&path, settings, presets);
        } else if has_extension(&path, settings.extension()) {
            presets.push(path);
        }
    }

    Ok(())
}

/// Visits a directory below the root, logging rather than returning any failure.
fn visit_subdirectory(path: &Path, settings: &Settings, presets: &mut Vec<PathBuf>) {
    let found = presets.len();
    if let Err(e) = visit_directory(path, settings, presets) {
        error!(path = ?path, err = %e, "Unable to read directory, skipping it");
        presets.truncate(found);
    }
}

/// Converts one document, naming the preset after its file so names stay unique
/// across the batch.
fn convert(path: &Path) -> Result<InstrumentPreset, ConvertError> {
    let mut preset = load_preset(path)?;
    preset.name = file_stem(path).to_string();
    Ok(preset)
}

/// Finds and converts every preset under the given directory. A document that
/// fails to convert is logged and skipped; only an unreadable directory is an error.
pub fn scan_and_convert(path: &Path, settings: &Settings) -> io::Result<BatchResult> {
    let paths = discover_presets(path, settings)?;
    info!(count = paths.len(), "Found preset documents");

    let results: Vec<Result<InstrumentPreset, ConvertError>> = if settings.parallel() {
        paths.par_iter().map(|path| convert(path)).collect()
    } else {
        paths.iter().map(|path| convert(path)).collect()
    };

    let mut batch = BatchResult::default();
    for (path, result) in paths.iter().zip(results) {
        match result {
            Ok(preset) => {
                info!(
                    "Parsed: {} ({} samples)",
                    filename_display(path),
                    preset.samples.len()
                );
                batch.presets.push(preset);
            }
            Err(e) => {
                error!(path = ?path, err = %e, "Error parsing preset");
                batch.failures.push(e);
            }
        }
    }

    Ok(batch)
}
