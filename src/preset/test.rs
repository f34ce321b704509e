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
use std::path::Path;

use super::*;
use crate::testutil::{write_file, PIANO_PRESET};

fn parse(xml: &str) -> InstrumentPreset {
    parse_preset(xml, "test").expect("preset should parse")
}

fn sample_envelopes(xml: &str) -> Vec<Envelope> {
    parse_document(xml, "test")
        .expect("preset should parse")
        .sample_envelopes
}

fn round_trip(preset: &InstrumentPreset) -> Result<InstrumentPreset, Box<dyn Error>> {
    let document = serialize(preset);
    let mut json = Vec::new();
    write_json(&mut json, &document)?;
    let decoded: PresetDocument = serde_json::from_slice(&json)?;
    assert_eq!(decoded, document);
    Ok(InstrumentPreset::from(decoded))
}

#[test]
fn test_piano_preset() {
    let preset = parse(PIANO_PRESET);

    assert_eq!(preset.name, "test");
    assert_eq!(preset.source_format, "DecentSampler");
    assert_eq!(
        preset.groups,
        vec![GroupSettings {
            envelope: Envelope {
                attack: 0.005,
                decay: 0.5,
                sustain: 0.8,
                release: 1.2,
            },
            volume_db: -2.0,
        }]
    );

    let paths: Vec<&str> = preset.samples.iter().map(|s| s.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "samples/C4_soft.wav",
            "samples/E4_soft.wav",
            "samples/C4_hard.wav"
        ]
    );

    let c4_soft = &preset.samples[0];
    assert_eq!(
        (c4_soft.root_note, c4_soft.lo_note, c4_soft.hi_note),
        (60, 58, 62)
    );
    assert_eq!((c4_soft.lo_velocity, c4_soft.hi_velocity), (0, 63));
    assert_eq!(c4_soft.volume_db, -1.0);
    assert_eq!(c4_soft.sample_loop, Loop::default());

    let e4_soft = &preset.samples[1];
    assert_eq!(
        (e4_soft.root_note, e4_soft.lo_note, e4_soft.hi_note),
        (64, 64, 64)
    );
    assert_eq!((e4_soft.lo_velocity, e4_soft.hi_velocity), (0, 127));
    assert_eq!(e4_soft.volume_db, 2.0);
    assert_eq!(e4_soft.pan, -0.5);
    assert_eq!(e4_soft.tune_cents, -12);

    let c4_hard = &preset.samples[2];
    assert_eq!((c4_hard.lo_velocity, c4_hard.hi_velocity), (64, 127));
    assert_eq!(c4_hard.volume_db, 0.0);
    assert_eq!(
        c4_hard.sample_loop,
        Loop {
            enabled: true,
            start: 1000,
            end: 48000,
            crossfade: 256,
        }
    );

    assert_eq!(
        preset.effects,
        EffectSettings {
            filter_type: Some(FilterType::Lowpass),
            filter_frequency: 12000.0,
            filter_resonance: 1.2,
            reverb_wet: 0.3,
            reverb_size: 0.7,
            chorus_mix: 0.25,
            chorus_rate: 0.2,
            chorus_depth: 0.2,
        }
    );
}

#[test]
fn test_envelope_inheritance() {
    let preset = parse(PIANO_PRESET);
    let envelopes = sample_envelopes(PIANO_PRESET);
    assert_eq!(envelopes.len(), preset.samples.len());

    // Group overrides release, everything else comes from the collection.
    assert_eq!(
        envelopes[0],
        Envelope {
            attack: 0.005,
            decay: 0.5,
            sustain: 0.8,
            release: 0.4,
        }
    );
    // Sample overrides attack on top of its group.
    assert_eq!(
        envelopes[1],
        Envelope {
            attack: 0.05,
            decay: 0.5,
            sustain: 0.8,
            release: 0.4,
        }
    );
    // Group without envelope attributes takes the collection's envelope.
    assert_eq!(envelopes[2], preset.groups[0].envelope);
}

#[test]
fn test_global_defaults() {
    let xml = r#"<DecentSampler>
            <groups>
                <group><sample path="a.wav"/></group>
            </groups>
        </DecentSampler>"#;
    let preset = parse(xml);

    assert_eq!(preset.groups, vec![GroupSettings::default()]);
    assert_eq!(
        sample_envelopes(xml),
        vec![Envelope {
            attack: 0.0,
            decay: 0.0,
            sustain: 1.0,
            release: 0.3,
        }]
    );
}

#[test]
fn test_empty_attributes_inherit() {
    let envelopes = sample_envelopes(
        r#"<DecentSampler>
            <groups attack="1s" sustain="0.5">
                <group attack="" sustain="">
                    <sample path="a.wav" attack=""/>
                </group>
            </groups>
        </DecentSampler>"#,
    );

    assert_eq!(envelopes[0].attack, 1.0);
    assert_eq!(envelopes[0].sustain, 0.5);
}

#[test]
fn test_additive_gain() {
    let preset = parse(
        r#"<DecentSampler>
            <groups volume="6dB">
                <group volume="2dB">
                    <sample path="a.wav" volume="-3dB"/>
                    <sample path="b.wav"/>
                </group>
                <group>
                    <sample path="c.wav" volume="-3dB"/>
                </group>
            </groups>
        </DecentSampler>"#,
    );

    let volumes: Vec<f64> = preset.samples.iter().map(|s| s.volume_db).collect();
    assert_eq!(volumes, vec![-1.0, 2.0, -3.0]);
    assert_eq!(preset.groups[0].volume_db, 6.0);
}

#[test]
fn test_note_defaulting() {
    let preset = parse(
        r#"<DecentSampler><groups><group>
            <sample path="g4.wav" rootNote="67"/>
            <sample path="named.wav" rootNote="F#3" loNote="C3" hiNote="Bb3"/>
            <sample path="none.wav"/>
        </group></groups></DecentSampler>"#,
    );

    let notes: Vec<(i32, i32, i32)> = preset
        .samples
        .iter()
        .map(|s| (s.root_note, s.lo_note, s.hi_note))
        .collect();
    assert_eq!(notes, vec![(67, 67, 67), (54, 48, 58), (60, 60, 60)]);
}

#[test]
fn test_lenient_attributes() {
    let preset = parse(
        r#"<DecentSampler><groups><group>
            <sample rootNote="" loVel="soft" hiVel="100.0" pan="left" tuning="sharp"
                    volume="quiet" loopEnabled="yes" loopStart="-" unknown="1"/>
        </group></groups></DecentSampler>"#,
    );

    let expected = SampleMapping {
        hi_velocity: 100,
        ..SampleMapping::new("", 60)
    };
    assert_eq!(preset.samples, vec![expected]);
}

#[test]
fn test_effect_last_write_wins() {
    let preset = parse(
        r#"<DecentSampler>
            <effects>
                <effect type="reverb" wetLevel="0.1"/>
                <effect type="flanger" mix="1.0"/>
            </effects>
            <ui><effect type="REVERB" wetLevel="0.9"/></ui>
        </DecentSampler>"#,
    );

    assert_eq!(preset.effects.reverb_wet, 0.9);
    assert_eq!(preset.effects.chorus_mix, 0.0);
    assert!(preset.samples.is_empty());
    assert!(preset.groups.is_empty());
}

#[test]
fn test_collections_in_document_order() {
    let xml = r#"<DecentSampler>
            <groups release="1">
                <group><sample path="first.wav"/></group>
            </groups>
            <instrument>
                <groups release="2">
                    <group><sample path="second.wav"/></group>
                    <sample path="ignored.wav"/>
                </groups>
            </instrument>
        </DecentSampler>"#;
    let preset = parse(xml);

    assert_eq!(preset.groups.len(), 2);
    assert_eq!(preset.groups[0].envelope.release, 1.0);
    assert_eq!(preset.groups[1].envelope.release, 2.0);
    assert!(preset.has_divergent_groups());
    assert_eq!(preset.envelope(), preset.groups[0]);

    let paths: Vec<&str> = preset.samples.iter().map(|s| s.path.as_str()).collect();
    assert_eq!(paths, vec!["first.wav", "second.wav"]);
    assert_eq!(sample_envelopes(xml)[1].release, 2.0);
}

#[test]
fn test_malformed_document() {
    let result = parse_preset("<DecentSampler><groups></DecentSampler>", "broken");
    assert!(matches!(result, Err(ParseError::MalformedDocument(_))));

    let result = parse_preset("", "empty");
    assert!(matches!(result, Err(ParseError::MalformedDocument(_))));
}

#[test]
fn test_round_trip() -> Result<(), Box<dyn Error>> {
    let preset = parse(
        r#"<DecentSampler>
            <groups attack="0.01" release="250ms" volume="-1.5dB">
                <group volume="1dB">
                    <sample path="a.wav" rootNote="C2" hiNote="D2" pan="0.25"/>
                    <sample path="b.wav" rootNote="E2" loopEnabled="TRUE" loopEnd="900"/>
                </group>
            </groups>
            <effects><effect type="highpass" frequency="80.5"/></effects>
        </DecentSampler>"#,
    );

    assert_eq!(round_trip(&preset)?, preset);
    Ok(())
}

#[test]
fn test_round_trip_with_envelope_overrides() -> Result<(), Box<dyn Error>> {
    let xml = r#"<DecentSampler>
            <groups release="1s">
                <group release="2s">
                    <sample path="a.wav" attack="20ms"/>
                </group>
                <group sustain="0.25"><sample path="b.wav"/></group>
            </groups>
        </DecentSampler>"#;
    let preset = parse(xml);

    assert_eq!(sample_envelopes(xml)[0].release, 2.0);
    assert_eq!(round_trip(&preset)?, preset);
    Ok(())
}

#[test]
fn test_non_finite_values_round_trip() -> Result<(), Box<dyn Error>> {
    let preset = parse(
        r#"<DecentSampler>
            <groups volume="infdB" release="nan">
                <group><sample path="a.wav" pan="nan" volume="-inf" loopEnd="inf"/></group>
            </groups>
            <effects><effect type="reverb" wetLevel="NaN" roomSize="infinity"/></effects>
        </DecentSampler>"#,
    );

    let sample = &preset.samples[0];
    assert_eq!(sample.pan, 0.0);
    assert_eq!(sample.volume_db, 0.0);
    assert_eq!(sample.sample_loop.end, 0);
    assert_eq!(preset.groups[0].volume_db, 0.0);
    assert_eq!(preset.groups[0].envelope.release, 0.0);
    assert_eq!(preset.effects.reverb_wet, 0.0);
    assert_eq!(preset.effects.reverb_size, 0.5);
    assert_eq!(round_trip(&preset)?, preset);
    Ok(())
}

#[test]
fn test_load_preset() -> Result<(), Box<dyn Error>> {
    let temp_dir = tempfile::tempdir()?;
    write_file(temp_dir.path(), "Grand Piano.dspreset", PIANO_PRESET)?;

    let preset = load_preset(&temp_dir.path().join("Grand Piano.dspreset"))?;
    assert_eq!(preset.name, "Grand Piano");
    assert_eq!(preset.samples.len(), 3);
    Ok(())
}

#[test]
fn test_load_missing_preset() {
    let path = Path::new("/nonexistent/missing.dspreset");
    match load_preset(path) {
        Err(e @ ConvertError::Io { .. }) => assert_eq!(e.path(), path),
        other => panic!("expected an I/O error, got {other:?}"),
    }
}
