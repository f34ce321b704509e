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

//! Fixtures shared by tests.

use std::error::Error;
use std::fs;
use std::path::Path;

/// A single-collection piano preset with two groups, exercising inheritance, gain
/// staging and effects.
pub const PIANO_PRESET: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<DecentSampler minVersion="1.0.0">
  <groups attack="5ms" decay="0.5" sustain="0.8" release="1.2s" volume="-2dB">
    <group name="soft" volume="2dB" release="400ms">
      <sample path="samples/C4_soft.wav" rootNote="60" loNote="58" hiNote="62" loVel="0" hiVel="63" volume="-3dB"/>
      <sample path="samples/E4_soft.wav" rootNote="E4" pan="-0.5" tuning="-12" attack="50ms"/>
    </group>
    <group name="hard">
      <sample path="samples/C4_hard.wav" rootNote="60" loVel="64" hiVel="127"
              loopEnabled="true" loopStart="1000" loopEnd="48000" loopCrossfade="256"/>
    </group>
  </groups>
  <effects>
    <effect type="lowpass" frequency="12000" resonance="1.2"/>
    <effect type="reverb" wetLevel="0.3" roomSize="0.7"/>
    <effect type="Chorus" mix="0.25"/>
  </effects>
</DecentSampler>
"#;

/// Writes a file below the given directory, creating any missing parents.
pub fn write_file(dir: &Path, relative: &str, contents: &str) -> Result<(), Box<dyn Error>> {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}
