use super::colormap::{Colormap, Rgba};
use crate::core::order::vectors::BondSegment;
use itertools::{Itertools, MinMaxResult};
use nalgebra::{Point3, Unit, Vector3};

/// Angle spreads at or below this value are treated as zero variance.
pub const UNIFORM_SPREAD_TOLERANCE: f64 = 1e-12;

/// Order reported for a frame that has no bonds to misalign.
pub const FULLY_ALIGNED_ORDER: f64 = 1.0;

/// How the misalignment angles of a frame were mapped onto `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameAlignment {
    /// Min-max scaling over the frame's angles.
    Scaled { min_angle: f64, max_angle: f64 },
    /// All angles equal; every bond gets normalized value 0 and the default color.
    Uniform { angle: f64 },
    /// The frame has no bonds and is reported as fully aligned.
    FullyAligned,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondMisalignment {
    pub start: Point3<f64>,
    pub vector: Vector3<f64>,
    /// Angle in radians between the sign-resolved bond and the director, in `[0, π/2]`.
    pub angle: f64,
    pub normalized: f64,
    pub color: Rgba,
}

/// Per-bond misalignment and colors of one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct MisalignmentMap {
    bonds: Vec<BondMisalignment>,
    alignment: FrameAlignment,
}

impl MisalignmentMap {
    pub fn bonds(&self) -> &[BondMisalignment] {
        &self.bonds
    }

    pub fn alignment(&self) -> FrameAlignment {
        self.alignment
    }

    pub fn len(&self) -> usize {
        self.bonds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bonds.is_empty()
    }

    pub fn colors(&self) -> impl Iterator<Item = Rgba> + '_ {
        self.bonds.iter().map(|bond| bond.color)
    }

    /// `Some(1.0)` for a frame without bonds, which is reported as fully aligned.
    pub fn reported_order(&self) -> Option<f64> {
        match self.alignment {
            FrameAlignment::FullyAligned => Some(FULLY_ALIGNED_ORDER),
            _ => None,
        }
    }
}

/// Angle between `vector` and the director axis, ignoring the director's sign.
///
/// The vector is flipped when it points against the director, so the result is
/// the smaller of the two supplementary angles. A zero-length vector has no
/// direction to misalign and yields `0`.
pub fn misalignment_angle(vector: &Vector3<f64>, director: &Unit<Vector3<f64>>) -> f64 {
    let norm = vector.norm();
    if norm == 0.0 {
        return 0.0;
    }
    let resolved = if vector.dot(director) < 0.0 {
        -vector
    } else {
        *vector
    };
    let cosine = resolved.dot(director) / (norm * director.norm());
    cosine.clamp(-1.0, 1.0).acos()
}

/// Maps bond misalignment with respect to a frame's director onto a colormap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MisalignmentColorizer {
    colormap: Colormap,
    alpha: f64,
}

impl Default for MisalignmentColorizer {
    fn default() -> Self {
        Self::new(Colormap::default(), 1.0)
    }
}

impl MisalignmentColorizer {
    pub fn new(colormap: Colormap, alpha: f64) -> Self {
        Self {
            colormap,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    pub fn colormap(&self) -> Colormap {
        self.colormap
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Color used for every bond of a frame whose misalignment has no spread.
    pub fn default_color(&self) -> Rgba {
        self.colormap.sample(0.0, self.alpha)
    }

    /// Computes the normalized misalignment and color of every bond.
    ///
    /// Angles are min-max scaled across the frame. A frame whose angles all
    /// coincide gets normalized value 0 and [`Self::default_color`] for every
    /// bond; an empty frame yields an empty map reported as fully aligned.
    pub fn colorize(
        &self,
        segments: &[BondSegment],
        director: &Unit<Vector3<f64>>,
    ) -> MisalignmentMap {
        let angles: Vec<f64> = segments
            .iter()
            .map(|segment| misalignment_angle(&segment.vector, director))
            .collect();

        let alignment = match angles.iter().copied().minmax_by(f64::total_cmp) {
            MinMaxResult::NoElements => FrameAlignment::FullyAligned,
            MinMaxResult::OneElement(angle) => FrameAlignment::Uniform { angle },
            MinMaxResult::MinMax(min_angle, max_angle) => {
                if max_angle - min_angle <= UNIFORM_SPREAD_TOLERANCE {
                    FrameAlignment::Uniform { angle: min_angle }
                } else {
                    FrameAlignment::Scaled {
                        min_angle,
                        max_angle,
                    }
                }
            }
        };

        let bonds = segments
            .iter()
            .zip(angles)
            .map(|(segment, angle)| {
                let normalized = match alignment {
                    FrameAlignment::Scaled {
                        min_angle,
                        max_angle,
                    } => (angle - min_angle) / (max_angle - min_angle),
                    FrameAlignment::Uniform { .. } | FrameAlignment::FullyAligned => 0.0,
                };
                BondMisalignment {
                    start: segment.start,
                    vector: segment.vector,
                    angle,
                    normalized,
                    color: self.colormap.sample(normalized, self.alpha),
                }
            })
            .collect();

        MisalignmentMap { bonds, alignment }
    }
}
