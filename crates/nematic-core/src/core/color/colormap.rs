use phf::{Map, phf_map};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// Control points sampled at nine evenly spaced positions of the matplotlib maps.
const VIRIDIS: [[u8; 3]; 9] = [
    [68, 1, 84],
    [71, 45, 123],
    [59, 82, 139],
    [44, 114, 142],
    [33, 145, 140],
    [40, 174, 128],
    [94, 201, 98],
    [173, 220, 48],
    [253, 231, 37],
];

const PLASMA: [[u8; 3]; 9] = [
    [13, 8, 135],
    [76, 2, 161],
    [126, 3, 168],
    [169, 35, 149],
    [204, 71, 120],
    [229, 107, 93],
    [248, 149, 64],
    [253, 197, 39],
    [240, 249, 33],
];

const INFERNO: [[u8; 3]; 9] = [
    [0, 0, 4],
    [31, 12, 72],
    [85, 15, 109],
    [136, 34, 106],
    [186, 54, 85],
    [227, 89, 51],
    [249, 140, 10],
    [249, 201, 50],
    [252, 255, 164],
];

const MAGMA: [[u8; 3]; 9] = [
    [0, 0, 4],
    [28, 16, 68],
    [79, 18, 123],
    [129, 37, 129],
    [181, 54, 122],
    [229, 80, 100],
    [251, 135, 97],
    [254, 194, 135],
    [252, 253, 191],
];

const CIVIDIS: [[u8; 3]; 9] = [
    [0, 34, 78],
    [18, 53, 112],
    [59, 73, 108],
    [87, 93, 109],
    [112, 113, 115],
    [138, 134, 120],
    [165, 156, 116],
    [195, 179, 105],
    [254, 232, 56],
];

static COLORMAPS_BY_NAME: Map<&'static str, Colormap> = phf_map! {
    "viridis" => Colormap::Viridis,
    "plasma" => Colormap::Plasma,
    "inferno" => Colormap::Inferno,
    "magma" => Colormap::Magma,
    "cividis" => Colormap::Cividis,
};

/// An RGBA color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_array(self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown colormap '{0}' (expected one of: viridis, plasma, inferno, magma, cividis)")]
pub struct ParseColormapError(pub String);

/// Perceptually uniform, monotonically ordered color scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Colormap {
    #[default]
    Viridis,
    Plasma,
    Inferno,
    Magma,
    Cividis,
}

impl Colormap {
    fn control_points(self) -> &'static [[u8; 3]] {
        match self {
            Self::Viridis => &VIRIDIS,
            Self::Plasma => &PLASMA,
            Self::Inferno => &INFERNO,
            Self::Magma => &MAGMA,
            Self::Cividis => &CIVIDIS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Viridis => "viridis",
            Self::Plasma => "plasma",
            Self::Inferno => "inferno",
            Self::Magma => "magma",
            Self::Cividis => "cividis",
        }
    }

    /// Samples the colormap at `value`, clamped to `[0, 1]`, by linear
    /// interpolation between control points. NaN maps to the low end.
    pub fn sample(self, value: f64, alpha: f64) -> Rgba {
        let points = self.control_points();
        let value = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };

        let scaled = value * (points.len() - 1) as f64;
        let lower = (scaled.floor() as usize).min(points.len() - 2);
        let t = scaled - lower as f64;

        let channel = |c: usize| {
            let low = f64::from(points[lower][c]);
            let high = f64::from(points[lower + 1][c]);
            (low + (high - low) * t) / 255.0
        };
        Rgba::new(channel(0), channel(1), channel(2), alpha.clamp(0.0, 1.0))
    }
}

impl FromStr for Colormap {
    type Err = ParseColormapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        COLORMAPS_BY_NAME
            .get(s.trim().to_lowercase().as_str())
            .copied()
            .ok_or_else(|| ParseColormapError(s.to_string()))
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
