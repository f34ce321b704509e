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
use std::io::Write;

use serde::{Deserialize, Serialize};

use super::model::{EffectSettings, GroupSettings, InstrumentPreset, Loop, SampleMapping};

/// The JSON representation of a sample mapping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampleDocument {
    pub path: String,
    pub root_note: i32,
    pub lo_note: i32,
    pub hi_note: i32,
    pub lo_vel: i32,
    pub hi_vel: i32,
    pub volume_db: f64,
    pub pan: f64,
    pub tune_cents: i32,
    pub loop_enabled: bool,
    pub loop_start: i32,
    pub loop_end: i32,
    pub loop_crossfade: i32,
}

impl From<&SampleMapping> for SampleDocument {
    fn from(sample: &SampleMapping) -> Self {
        SampleDocument {
            path: sample.path.clone(),
            root_note: sample.root_note,
            lo_note: sample.lo_note,
            hi_note: sample.hi_note,
            lo_vel: sample.lo_velocity,
            hi_vel: sample.hi_velocity,
            volume_db: sample.volume_db,
            pan: sample.pan,
            tune_cents: sample.tune_cents,
            loop_enabled: sample.sample_loop.enabled,
            loop_start: sample.sample_loop.start,
            loop_end: sample.sample_loop.end,
            loop_crossfade: sample.sample_loop.crossfade,
        }
    }
}

/// The JSON representation of an instrument preset. Only the first group
/// collection's settings are carried, as the preset's envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PresetDocument {
    pub name: String,
    pub source_format: String,
    pub samples: Vec<SampleDocument>,
    pub envelope: GroupSettings,
    pub effects: EffectSettings,
}

impl From<&InstrumentPreset> for PresetDocument {
    fn from(preset: &InstrumentPreset) -> Self {
        PresetDocument {
            name: preset.name.clone(),
            source_format: preset.source_format.clone(),
            samples: preset.samples.iter().map(SampleDocument::from).collect(),
            envelope: preset.envelope(),
            effects: preset.effects,
        }
    }
}

impl From<PresetDocument> for InstrumentPreset {
    /// Rebuilds a preset from its document. The document's envelope becomes the
    /// only group collection.
    fn from(document: PresetDocument) -> Self {
        InstrumentPreset {
            name: document.name,
            source_format: document.source_format,
            samples: document
                .samples
                .into_iter()
                .map(|sample| SampleMapping {
                    path: sample.path,
                    root_note: sample.root_note,
                    lo_note: sample.lo_note,
                    hi_note: sample.hi_note,
                    lo_velocity: sample.lo_vel,
                    hi_velocity: sample.hi_vel,
                    volume_db: sample.volume_db,
                    pan: sample.pan,
                    tune_cents: sample.tune_cents,
                    sample_loop: Loop {
                        enabled: sample.loop_enabled,
                        start: sample.loop_start,
                        end: sample.loop_end,
                        crossfade: sample.loop_crossfade,
                    },
                })
                .collect(),
            groups: vec![document.envelope],
            effects: document.effects,
        }
    }
}

/// The aggregate document written in folder mode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PresetBundle {
    pub instruments: Vec<PresetDocument>,
}

impl PresetBundle {
    /// Creates a bundle from presets, keeping their order.
    pub fn new(presets: &[InstrumentPreset]) -> PresetBundle {
        PresetBundle {
            instruments: presets.iter().map(PresetDocument::from).collect(),
        }
    }
}

/// Converts a preset into its canonical document form.
pub fn serialize(preset: &InstrumentPreset) -> PresetDocument {
    PresetDocument::from(preset)
}

/// Writes a value as indented JSON.
pub fn write_json<W: Write, T: Serialize>(writer: W, value: &T) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(writer, value)
}
