use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Error};

/// Named perceptual colour maps usable for LaTeX cell backgrounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Colormap {
    #[default]
    Viridis,
    Plasma,
    Magma,
    Inferno,
}

// Evenly spaced anchor colours (t = 0, 0.25, 0.5, 0.75, 1).
const VIRIDIS: [[u8; 3]; 5] = [
    [0x44, 0x01, 0x54],
    [0x3B, 0x52, 0x8B],
    [0x21, 0x91, 0x8C],
    [0x5E, 0xC9, 0x62],
    [0xFD, 0xE7, 0x25],
];
const PLASMA: [[u8; 3]; 5] = [
    [0x0D, 0x08, 0x87],
    [0x7E, 0x03, 0xA8],
    [0xCC, 0x47, 0x78],
    [0xF8, 0x95, 0x40],
    [0xF0, 0xF9, 0x21],
];
const MAGMA: [[u8; 3]; 5] = [
    [0x00, 0x00, 0x04],
    [0x51, 0x12, 0x7C],
    [0xB7, 0x37, 0x79],
    [0xFC, 0x89, 0x61],
    [0xFC, 0xFD, 0xBF],
];
const INFERNO: [[u8; 3]; 5] = [
    [0x00, 0x00, 0x04],
    [0x56, 0x10, 0x6E],
    [0xBB, 0x37, 0x54],
    [0xF9, 0x8C, 0x0A],
    [0xFC, 0xFF, 0xA4],
];

impl Colormap {
    pub fn name(&self) -> &'static str {
        match self {
            Colormap::Viridis => "viridis",
            Colormap::Plasma => "plasma",
            Colormap::Magma => "magma",
            Colormap::Inferno => "inferno",
        }
    }

    fn anchors(&self) -> &'static [[u8; 3]; 5] {
        match self {
            Colormap::Viridis => &VIRIDIS,
            Colormap::Plasma => &PLASMA,
            Colormap::Magma => &MAGMA,
            Colormap::Inferno => &INFERNO,
        }
    }

    /// Sample the map at `t` (clamped to `[0, 1]`) as RGB in `[0, 1]`.
    pub fn sample(&self, t: f64) -> [f64; 3] {
        let anchors = self.anchors();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let scaled = t * (anchors.len() - 1) as f64;
        let lower = (scaled.floor() as usize).min(anchors.len() - 2);
        let frac = scaled - lower as f64;

        let mut rgb = [0.0; 3];
        for (channel, value) in rgb.iter_mut().enumerate() {
            let from = f64::from(anchors[lower][channel]) / 255.0;
            let to = f64::from(anchors[lower + 1][channel]) / 255.0;
            *value = from + (to - from) * frac;
        }
        rgb
    }

    /// Hex colour (`RRGGBB`, no `#`) for `t`, lightened so black text stays
    /// readable on top of it.
    pub fn light_hex(&self, t: f64) -> String {
        self.sample(t)
            .iter()
            .map(|c| 1.0 - (1.0 - c) * 0.3)
            .map(|c| format!("{:02X}", (c * 255.0).round() as u8))
            .collect()
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Colormap {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "viridis" => Ok(Colormap::Viridis),
            "plasma" => Ok(Colormap::Plasma),
            "magma" => Ok(Colormap::Magma),
            "inferno" => Ok(Colormap::Inferno),
            _ => Err(anyhow!("Invalid colormap: {s} (expected viridis, plasma, magma or inferno)")),
        }
    }
}

/// Global `(min, max)` of `values`; `(0, 0)` when empty.
pub fn min_max(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (min, max)
}

/// Map `value` from `[min, max]` onto `[0, 1]`; `0.5` for a degenerate range.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if max <= min {
        return 0.5;
    }
    (value - min) / (max - min)
}
