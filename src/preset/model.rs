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
use std::fmt;

use serde::{Deserialize, Serialize};

use super::scalar;

/// The tag recorded for presets read from Decent Sampler documents.
pub const SOURCE_FORMAT: &str = "DecentSampler";

/// An amplitude envelope. Times are in seconds, sustain is a level from 0 to 1.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub attack: f64,
    pub decay: f64,
    pub sustain: f64,
    pub release: f64,
}

impl Default for Envelope {
    fn default() -> Self {
        Envelope {
            attack: 0.0,
            decay: 0.0,
            sustain: 1.0,
            release: 0.3,
        }
    }
}

/// The raw envelope attributes found on a single element. An attribute that is
/// missing or empty is treated as not set.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnvelopeAttributes<'a> {
    pub attack: Option<&'a str>,
    pub decay: Option<&'a str>,
    pub sustain: Option<&'a str>,
    pub release: Option<&'a str>,
}

impl EnvelopeAttributes<'_> {
    /// Resolves these attributes against the envelope of the enclosing element.
    /// Every field not set here is taken from `inherited`.
    pub fn resolve(&self, inherited: &Envelope) -> Envelope {
        Envelope {
            attack: resolve_time(self.attack, inherited.attack),
            decay: resolve_time(self.decay, inherited.decay),
            sustain: scalar::float_or(present(self.sustain), inherited.sustain),
            release: resolve_time(self.release, inherited.release),
        }
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

fn resolve_time(value: Option<&str>, inherited: f64) -> f64 {
    match present(value) {
        Some(value) => scalar::parse_time(Some(value)),
        None => inherited,
    }
}

/// The settings of a group collection: its envelope plus its gain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupSettings {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub volume_db: f64,
}

/// Loop points for a sample, in sample frames.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Loop {
    pub enabled: bool,
    pub start: i32,
    pub end: i32,
    pub crossfade: i32,
}

/// A single playable sample and the key/velocity region it covers.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleMapping {
    /// The audio file, relative to the preset document.
    pub path: String,
    pub root_note: i32,
    pub lo_note: i32,
    pub hi_note: i32,
    pub lo_velocity: i32,
    pub hi_velocity: i32,
    /// Sample gain plus the gain of its group.
    pub volume_db: f64,
    pub pan: f64,
    pub tune_cents: i32,
    pub sample_loop: Loop,
}

impl SampleMapping {
    /// Creates a mapping that covers only its root note at every velocity.
    pub fn new(path: &str, root_note: i32) -> SampleMapping {
        SampleMapping {
            path: path.to_string(),
            root_note,
            lo_note: root_note,
            hi_note: root_note,
            lo_velocity: 0,
            hi_velocity: 127,
            volume_db: 0.0,
            pan: 0.0,
            tune_cents: 0,
            sample_loop: Loop::default(),
        }
    }
}

impl fmt::Display for SampleMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: root={}, range={}-{}",
            self.path, self.root_note, self.lo_note, self.hi_note
        )
    }
}

/// The filter types a preset may specify.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    Lowpass,
    Highpass,
}

impl FilterType {
    /// The cutoff used when a filter effect doesn't name one.
    pub fn default_frequency(&self) -> f64 {
        match self {
            FilterType::Lowpass => 22000.0,
            FilterType::Highpass => 20.0,
        }
    }
}

/// A summary of the effect chain. Each effect kind appears at most once.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EffectSettings {
    /// The filter in use, serialized as null when there is none.
    pub filter_type: Option<FilterType>,
    #[serde(rename = "filter_freq")]
    pub filter_frequency: f64,
    #[serde(rename = "filter_res")]
    pub filter_resonance: f64,
    pub reverb_wet: f64,
    pub reverb_size: f64,
    pub chorus_mix: f64,
    pub chorus_rate: f64,
    pub chorus_depth: f64,
}

/// The resonance used when a filter effect doesn't name one.
pub const DEFAULT_FILTER_RESONANCE: f64 = 0.707;

impl Default for EffectSettings {
    fn default() -> Self {
        EffectSettings {
            filter_type: None,
            filter_frequency: FilterType::Lowpass.default_frequency(),
            filter_resonance: DEFAULT_FILTER_RESONANCE,
            reverb_wet: 0.0,
            reverb_size: 0.5,
            chorus_mix: 0.0,
            chorus_rate: 0.2,
            chorus_depth: 0.2,
        }
    }
}

/// A complete instrument converted from a preset document.
#[derive(Clone, Debug, PartialEq)]
pub struct InstrumentPreset {
    pub name: String,
    pub source_format: String,
    /// Samples in document order.
    pub samples: Vec<SampleMapping>,
    /// One entry per group collection, in document order.
    pub groups: Vec<GroupSettings>,
    pub effects: EffectSettings,
}

impl InstrumentPreset {
    /// Creates an empty preset with the given name.
    pub fn new(name: &str) -> InstrumentPreset {
        InstrumentPreset {
            name: name.to_string(),
            source_format: SOURCE_FORMAT.to_string(),
            samples: Vec::new(),
            groups: Vec::new(),
            effects: EffectSettings::default(),
        }
    }

    /// The envelope that represents the whole preset: the first collection's
    /// settings, or the defaults when there are no collections.
    pub fn envelope(&self) -> GroupSettings {
        self.groups.first().copied().unwrap_or_default()
    }

    /// Returns true if the collections disagree on their settings, in which case
    /// only the first is carried into the serialized form.
    pub fn has_divergent_groups(&self) -> bool {
        match self.groups.split_first() {
            Some((first, rest)) => rest.iter().any(|group| group != first),
            None => false,
        }
    }
}

/// A parsed preset along with the envelope each of its samples resolves to once
/// sample, group and collection settings are layered.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedPreset {
    pub preset: InstrumentPreset,
    /// Indexed like `preset.samples`.
    pub sample_envelopes: Vec<Envelope>,
}

impl fmt::Display for InstrumentPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} samples)", self.name, self.samples.len())
    }
}
