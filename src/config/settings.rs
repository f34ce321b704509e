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
use serde::Deserialize;

/// The default extension of preset documents.
pub const DEFAULT_EXTENSION: &str = "dspreset";

/// Settings for the converter. Every field has a default, so an empty
/// configuration is valid.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// The extension of preset documents, matched case-insensitively.
    extension: String,
    /// The name of the aggregate JSON file written in folder mode.
    presets_file: String,
    /// The name of the setup code file written in folder mode.
    setup_file: String,
    /// Whether to parse presets in parallel.
    parallel: bool,
    /// Whether to skip directories whose names start with a dot.
    skip_hidden: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            extension: DEFAULT_EXTENSION.to_string(),
            presets_file: "vivid_presets.json".to_string(),
            setup_file: "vivid_setup.cpp".to_string(),
            parallel: true,
            skip_hidden: true,
        }
    }
}

impl Settings {
    /// Gets the preset document extension.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Gets the aggregate JSON file name.
    pub fn presets_file(&self) -> &str {
        &self.presets_file
    }

    /// Gets the setup code file name.
    pub fn setup_file(&self) -> &str {
        &self.setup_file
    }

    /// Returns true if presets should be parsed in parallel.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Returns true if hidden directories should be skipped.
    pub fn skip_hidden(&self) -> bool {
        self.skip_hidden
    }

    /// Returns a copy of these settings with parallel parsing toggled.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
