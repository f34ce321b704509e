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
use std::path::{Path, PathBuf};

/// The preset text could not be read as XML at all.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Malformed preset document: {0}")]
    MalformedDocument(#[from] roxmltree::Error),
}

/// A preset file could not be converted.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Unable to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unable to parse {}: {source}", path.display())]
    Parse { path: PathBuf, source: ParseError },
}

impl ConvertError {
    /// The preset file this error refers to.
    pub fn path(&self) -> &Path {
        match self {
            ConvertError::Io { path, .. } | ConvertError::Parse { path, .. } => path,
        }
    }
}
