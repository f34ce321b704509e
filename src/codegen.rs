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

//! Setup snippets for loading converted presets into a Vivid chain.

use std::path::Path;

use crate::preset::InstrumentPreset;

/// Generates C++ that loads the preset into a Vivid chain. Single-sample presets
/// become a configured `Sampler`; anything larger is listed as comments until a
/// multi-sampler exists on the engine side.
pub fn generate_setup_code(preset: &InstrumentPreset, base_path: &str) -> String {
    let mut lines = vec![
        format!("// Auto-generated from {}.dspreset", preset.name),
        format!("// {} samples", preset.samples.len()),
        String::new(),
    ];

    match preset.samples.as_slice() {
        [sample] => {
            let sample_path = if base_path.is_empty() {
                sample.path.clone()
            } else {
                Path::new(base_path).join(&sample.path).display().to_string()
            };
            lines.push(format!(
                "auto& sampler = chain.add<Sampler>(\"{}\");",
                preset.name
            ));
            lines.push(format!("sampler.loadSample(\"{}\");", sample_path));
            lines.push(format!("sampler.rootNote = {};", sample.root_note));

            if let Some(group) = preset.groups.first() {
                let envelope = group.envelope;
                lines.push(format!("sampler.attack = {:?}f;", envelope.attack));
                lines.push(format!("sampler.decay = {:?}f;", envelope.decay));
                lines.push(format!("sampler.sustain = {:?}f;", envelope.sustain));
                lines.push(format!("sampler.release = {:?}f;", envelope.release));
            }
        }
        samples => {
            lines.push(
                "// Multi-sample preset - requires MultiSampler (not yet implemented)".to_string(),
            );
            lines.push("// Sample mappings:".to_string());
            lines.extend(samples.iter().map(|sample| format!("//   {}", sample)));
        }
    }

    lines.join("\n")
}

/// Generates the setup code for several presets, each followed by a blank line.
pub fn generate_setup_file(presets: &[InstrumentPreset], base_path: &str) -> String {
    presets
        .iter()
        .map(|preset| generate_setup_code(preset, base_path) + "\n\n")
        .collect()
}
