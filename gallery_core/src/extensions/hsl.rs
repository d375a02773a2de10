// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
use crate::types::Rgb;

pub trait FromHsl {
    /// `hue` in degrees, `saturation` and `lightness` as percentages (0-100).
    fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self;
}

impl FromHsl for Rgb {
    fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        let l = lightness / 100.0;
        let a = saturation * l.min(1.0 - l) / 100.0;

        let channel = |n: f64| -> u8 {
            let k = (n + hue / 30.0) % 12.0;
            let colour = l - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0);
            (255.0 * colour).round().clamp(0.0, 255.0) as u8
        };

        Self::new(channel(0.0), channel(8.0), channel(4.0))
    }
}
