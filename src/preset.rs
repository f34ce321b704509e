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

//! Decent Sampler preset conversion.
//!
//! This module provides:
//! - Lenient readers for note, decibel and time attributes
//! - The normalized instrument model
//! - The preset parser, with group-to-sample inheritance
//! - The canonical JSON document form

mod effects;
mod error;
mod model;
mod parser;
pub mod scalar;
mod serialize;
#[cfg(test)]
mod test;

pub use effects::EffectKind;
pub use error::{ConvertError, ParseError};
pub use model::{
    EffectSettings, Envelope, EnvelopeAttributes, FilterType, GroupSettings, InstrumentPreset,
    Loop, ParsedPreset, SampleMapping, SOURCE_FORMAT,
};
pub use parser::{load_preset, parse_document, parse_preset};
pub use serialize::{serialize, write_json, PresetBundle, PresetDocument, SampleDocument};
