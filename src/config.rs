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
use std::path::Path;

use config::{Config, Environment, File};
use tracing::debug;

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::{Settings, DEFAULT_EXTENSION};

/// The prefix of environment variables that override settings, e.g. DSPRESET_PARALLEL.
pub const ENV_PREFIX: &str = "DSPRESET";

/// Loads the converter settings. The optional file is read first, then any
/// DSPRESET_* environment variables are applied on top of it.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        debug!("Loading settings from {path:?}");
        builder = builder.add_source(File::from(path));
    }

    Ok(builder
        .add_source(Environment::with_prefix(ENV_PREFIX))
        .build()?
        .try_deserialize::<Settings>()?)
}
