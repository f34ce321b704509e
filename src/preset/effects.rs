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
use roxmltree::Node;

use super::model::{EffectSettings, FilterType, DEFAULT_FILTER_RESONANCE};
use super::scalar::float_or;

/// The effect kinds that map onto the effect summary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectKind {
    Filter(FilterType),
    Reverb,
    Chorus,
    /// Any effect the summary has no slot for.
    Unrecognized,
}

impl EffectKind {
    /// Determines the effect kind from an effect's type attribute, ignoring case.
    pub fn from_type(effect_type: &str) -> EffectKind {
        match effect_type.trim().to_lowercase().as_str() {
            "lowpass" => EffectKind::Filter(FilterType::Lowpass),
            "highpass" => EffectKind::Filter(FilterType::Highpass),
            "reverb" => EffectKind::Reverb,
            "chorus" => EffectKind::Chorus,
            _ => EffectKind::Unrecognized,
        }
    }
}

impl EffectSettings {
    /// Applies an effect element to the summary. Fields for the effect's kind are
    /// overwritten, so the last effect of a kind in the document wins.
    pub(super) fn apply(&mut self, effect: &Node) {
        match EffectKind::from_type(effect.attribute("type").unwrap_or_default()) {
            EffectKind::Filter(filter_type) => {
                self.filter_type = Some(filter_type);
                self.filter_frequency = float_or(
                    effect.attribute("frequency"),
                    filter_type.default_frequency(),
                );
                self.filter_resonance =
                    float_or(effect.attribute("resonance"), DEFAULT_FILTER_RESONANCE);
            }
            EffectKind::Reverb => {
                self.reverb_wet = float_or(effect.attribute("wetLevel"), 0.0);
                self.reverb_size = float_or(effect.attribute("roomSize"), 0.5);
            }
            EffectKind::Chorus => {
                self.chorus_mix = float_or(effect.attribute("mix"), 0.0);
                self.chorus_rate = float_or(effect.attribute("modRate"), 0.2);
                self.chorus_depth = float_or(effect.attribute("modDepth"), 0.2);
            }
            EffectKind::Unrecognized => {}
        }
    }
}
