// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
use crate::extensions::hsl::FromHsl as _;
use crate::types::{Ordinal, Rgb};
use serde::{Deserialize, Serialize};

/// Approximates the golden angle, so consecutive ordinals land far apart on
/// the colour wheel.
const GOLDEN_ANGLE: f64 = 137.5;

/// Four colours derived from an entry's ordinal.
///
/// Serialises as `[primary, accent, background, text]` hex strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[Rgb; 4]", into = "[Rgb; 4]")]
pub struct Palette {
    pub primary: Rgb,
    pub accent: Rgb,
    pub background: Rgb,
    pub text: Rgb,
}

impl Palette {
    pub fn to_hex(&self) -> [String; 4] {
        <[Rgb; 4]>::from(*self).map(|c| c.to_hex())
    }
}

impl From<[Rgb; 4]> for Palette {
    fn from([primary, accent, background, text]: [Rgb; 4]) -> Self {
        Self {
            primary,
            accent,
            background,
            text,
        }
    }
}

impl From<Palette> for [Rgb; 4] {
    fn from(p: Palette) -> Self {
        [p.primary, p.accent, p.background, p.text]
    }
}

/// Derives the triadic palette for `ordinal`. Depends on nothing but the number.
pub fn palette(ordinal: Ordinal) -> Palette {
    let hue1 = (f64::from(ordinal) * GOLDEN_ANGLE) % 360.0;
    let hue2 = (hue1 + 120.0) % 360.0;
    let hue3 = (hue1 + 240.0) % 360.0;

    Palette {
        primary: Rgb::from_hsl(hue1, 60.0, 40.0),
        accent: Rgb::from_hsl(hue2, 70.0, 50.0),
        background: Rgb::from_hsl(hue3, 10.0, 95.0),
        text: Rgb::from_hsl(hue1, 30.0, 20.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_palette_known_values() {
        assert_eq!(
            palette(1).to_hex(),
            ["#29a34c", "#5a26d9", "#f4f2f1", "#24422d"]
        );
        assert_eq!(
            palette(2).to_hex(),
            ["#7029a3", "#d98e26", "#f1f4f2", "#362442"]
        );
        assert_eq!(
            palette(210).to_hex(),
            ["#85a329", "#26acd9", "#f4f1f3", "#3b4224"]
        );
    }

    #[test]
    fn test_palette_is_deterministic() {
        for ordinal in 1..=210 {
            assert_eq!(palette(ordinal), palette(ordinal));
        }
    }

    #[test]
    fn test_palette_hex_is_well_formed() {
        for ordinal in [1, 7, 99, 210, 5000, Ordinal::MAX] {
            for hex in palette(ordinal).to_hex() {
                assert_eq!(hex.len(), 7);
                assert!(hex.starts_with('#'));
                assert!(
                    hex[1..]
                        .chars()
                        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
                );
            }
        }
    }

    #[test]
    fn test_adjacent_ordinals_differ() {
        assert_ne!(palette(1), palette(2));

        // 137.5 * 144 is a multiple of 360, so collisions start only after 144.
        let distinct: HashSet<Palette> = (1..=144).map(palette).collect();
        assert_eq!(distinct.len(), 144);
    }

    #[test]
    fn test_palette_serialises_as_hex_array() {
        let json = serde_json::to_string(&palette(1)).unwrap();
        assert_eq!(json, r##"["#29a34c","#5a26d9","#f4f2f1","#24422d"]"##);

        let back: Palette = serde_json::from_str(&json).unwrap();
        assert_eq!(back, palette(1));
    }
}
