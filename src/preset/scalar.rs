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

//! Lenient readers for preset attribute values. None of these fail: malformed
//! text resolves to a documented default instead.

/// The MIDI note used when a note attribute can't be understood (middle C).
pub const DEFAULT_NOTE: i32 = 60;

/// The octave assumed when a note name has no readable octave.
const DEFAULT_OCTAVE: i32 = 4;

/// Parses a note attribute into a MIDI note number.
/// Supports:
/// - Plain integers (e.g. "77")
/// - Note names (e.g. "C4", "F#3", "Bb5"), letter and flat marker case-insensitive
///
/// Anything else resolves to middle C.
pub fn parse_note(value: Option<&str>) -> i32 {
    let value = match value {
        Some(value) => value.trim(),
        None => return DEFAULT_NOTE,
    };

    if let Ok(note) = value.parse::<i32>() {
        return note;
    }

    let mut chars = value.chars();
    let semitone = match chars.next().map(|c| c.to_ascii_uppercase()) {
        Some('C') => 0,
        Some('D') => 2,
        Some('E') => 4,
        Some('F') => 5,
        Some('G') => 7,
        Some('A') => 9,
        Some('B') => 11,
        _ => return DEFAULT_NOTE,
    };

    let rest = chars.as_str();
    let (semitone, octave) = if let Some(octave) = rest.strip_prefix('#') {
        (semitone + 1, octave)
    } else if let Some(octave) = rest
        .strip_prefix('b')
        .or_else(|| rest.strip_prefix('B'))
    {
        (semitone - 1, octave)
    } else {
        (semitone, rest)
    };

    let octave = octave.trim().parse::<i32>().unwrap_or(DEFAULT_OCTAVE);
    octave
        .checked_add(1)
        .and_then(|octave| octave.checked_mul(12))
        .and_then(|note| note.checked_add(semitone))
        .unwrap_or(DEFAULT_NOTE)
}

/// Parses a decibel string (e.g. "-3dB", "0.0 db") into decibels. Missing or
/// unreadable values are 0 dB.
pub fn parse_db(value: Option<&str>) -> f64 {
    value
        .map(|value| value.trim().to_lowercase().replace("db", ""))
        .and_then(|value| parse_f64(&value))
        .unwrap_or(0.0)
}

/// Parses a time string into seconds.
/// Supports:
/// - Milliseconds (e.g. "100ms", "100 ms")
/// - Seconds with a unit (e.g. "1.5s")
/// - Bare numbers, taken as seconds (e.g. "0.5")
///
/// Missing or unreadable values are 0 seconds.
pub fn parse_time(value: Option<&str>) -> f64 {
    let value = match value {
        Some(value) => value.trim().to_lowercase(),
        None => return 0.0,
    };

    if value.contains("ms") {
        parse_f64(&value.replace("ms", "")).map_or(0.0, |ms| ms / 1000.0)
    } else if value.contains('s') {
        parse_f64(&value.replace('s', "")).unwrap_or(0.0)
    } else {
        parse_f64(&value).unwrap_or(0.0)
    }
}

/// Reads a float attribute, falling back to the given default.
pub fn float_or(value: Option<&str>, default: f64) -> f64 {
    value.and_then(parse_f64).unwrap_or(default)
}

/// Reads an integer attribute, falling back to the given default. Integral float
/// spellings such as "12.0" are accepted and truncated.
pub fn int_or(value: Option<&str>, default: i32) -> i32 {
    value
        .and_then(|value| {
            let value = value.trim();
            value
                .parse::<i32>()
                .ok()
                .or_else(|| parse_f64(value).map(|v| v as i32))
        })
        .unwrap_or(default)
}

/// Reads a boolean attribute. Only "true" (any case) is true.
pub fn bool_attr(value: Option<&str>) -> bool {
    value.is_some_and(|value| value.trim().eq_ignore_ascii_case("true"))
}

/// Parses a finite float. "nan" and "inf" count as unreadable, since JSON can't carry them.
fn parse_f64(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
