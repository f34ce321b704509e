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

//! Reads Decent Sampler preset documents into [`InstrumentPreset`]s.
//!
//! The document layout is `<groups>` collections (found anywhere) holding `<group>`
//! elements, which in turn hold `<sample>` elements. `<effect>` elements may appear
//! anywhere. Only a document that isn't XML is an error; every attribute is read
//! leniently.

use std::fs;
use std::path::Path;

use roxmltree::{Document, Node};
use tracing::{debug, warn};

use super::error::{ConvertError, ParseError};
use super::model::{
    EffectSettings, Envelope, EnvelopeAttributes, GroupSettings, InstrumentPreset, Loop,
    ParsedPreset, SampleMapping,
};
use super::scalar::{bool_attr, float_or, int_or, parse_db, parse_note};
use crate::util;

/// Parses preset text into an instrument with the given name.
pub fn parse_preset(xml: &str, name: &str) -> Result<InstrumentPreset, ParseError> {
    parse_document(xml, name).map(|parsed| parsed.preset)
}

/// Parses preset text, also resolving the envelope of every sample.
pub fn parse_document(xml: &str, name: &str) -> Result<ParsedPreset, ParseError> {
    let doc = Document::parse(xml)?;
    let mut preset = InstrumentPreset::new(name);
    let mut sample_envelopes = Vec::new();

    for collection in doc.descendants().filter(|node| node.has_tag_name("groups")) {
        let settings = collection_settings(&collection);
        preset.groups.push(settings);

        for group in children(&collection, "group") {
            let group_envelope = envelope_attributes(&group).resolve(&settings.envelope);
            let group_volume = parse_db(group.attribute("volume"));

            for sample in children(&group, "sample") {
                preset.samples.push(sample_mapping(&sample, group_volume));
                sample_envelopes.push(envelope_attributes(&sample).resolve(&group_envelope));
            }
        }
    }

    preset.effects = effect_settings(&doc);

    if preset.has_divergent_groups() {
        warn!(
            preset = %preset.name,
            groups = preset.groups.len(),
            "Preset has group collections with differing settings, only the first is exported"
        );
    }
    debug!(
        preset = %preset.name,
        samples = preset.samples.len(),
        "Parsed preset"
    );

    Ok(ParsedPreset {
        preset,
        sample_envelopes,
    })
}

/// Reads and parses a preset file, naming the preset after the file stem.
pub fn load_preset(path: &Path) -> Result<InstrumentPreset, ConvertError> {
    let xml = fs::read_to_string(path).map_err(|source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_preset(&xml, util::file_stem(path)).map_err(|source| ConvertError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Returns the child elements of a node with the given tag name.
fn children<'a, 'input: 'a>(
    node: &Node<'a, 'input>,
    tag: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(move |child| child.has_tag_name(tag))
}

fn envelope_attributes<'a>(node: &Node<'a, '_>) -> EnvelopeAttributes<'a> {
    EnvelopeAttributes {
        attack: node.attribute("attack"),
        decay: node.attribute("decay"),
        sustain: node.attribute("sustain"),
        release: node.attribute("release"),
    }
}

/// The settings of a group collection, resolved against the global defaults.
fn collection_settings(collection: &Node) -> GroupSettings {
    GroupSettings {
        envelope: envelope_attributes(collection).resolve(&Envelope::default()),
        volume_db: parse_db(collection.attribute("volume")),
    }
}

fn sample_mapping(sample: &Node, group_volume: f64) -> SampleMapping {
    let root_note = parse_note(sample.attribute("rootNote"));
    let note_or_root = |attribute: &str| match sample.attribute(attribute) {
        Some(note) => parse_note(Some(note)),
        None => root_note,
    };

    SampleMapping {
        path: sample.attribute("path").unwrap_or_default().to_string(),
        root_note,
        lo_note: note_or_root("loNote"),
        hi_note: note_or_root("hiNote"),
        lo_velocity: int_or(sample.attribute("loVel"), 0),
        hi_velocity: int_or(sample.attribute("hiVel"), 127),
        volume_db: parse_db(sample.attribute("volume")) + group_volume,
        pan: float_or(sample.attribute("pan"), 0.0),
        tune_cents: int_or(sample.attribute("tuning"), 0),
        sample_loop: Loop {
            enabled: bool_attr(sample.attribute("loopEnabled")),
            start: int_or(sample.attribute("loopStart"), 0),
            end: int_or(sample.attribute("loopEnd"), 0),
            crossfade: int_or(sample.attribute("loopCrossfade"), 0),
        },
    }
}

/// Folds every effect element in the document into a single summary.
fn effect_settings(doc: &Document) -> EffectSettings {
    let mut effects = EffectSettings::default();
    doc.descendants()
        .filter(|node| node.has_tag_name("effect"))
        .for_each(|effect| effects.apply(&effect));
    effects
}
