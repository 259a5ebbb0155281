use crate::core::color::colormap::Colormap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum RangeError {
    #[error("stride must be a positive integer (got {0})")]
    NonPositiveStride(usize),
    #[error("start ({start}) must not exceed stop ({stop})")]
    StartAfterStop { start: usize, stop: usize },
}

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid frame range: {0}")]
    InvalidRange(#[from] RangeError),
    #[error("Invalid value for '{parameter}': {reason}")]
    InvalidValue {
        parameter: &'static str,
        reason: String,
    },
}

/// A half-open, strided selection of zero-based frame indices.
///
/// Follows slice semantics: `stop` defaults to the end of the trajectory and is
/// clamped to it, and a `start` at or past the end selects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRange {
    pub start: usize,
    pub stop: Option<usize>,
    pub stride: usize,
}

impl Default for FrameRange {
    fn default() -> Self {
        Self {
            start: 0,
            stop: None,
            stride: 1,
        }
    }
}

impl FrameRange {
    /// Creates a validated range.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError`] if `stride` is zero or `start` exceeds `stop`.
    pub fn new(start: usize, stop: Option<usize>, stride: usize) -> Result<Self, RangeError> {
        let range = Self {
            start,
            stop,
            stride,
        };
        range.validate()?;
        Ok(range)
    }

    /// Checks the range independently of any trajectory length.
    pub fn validate(&self) -> Result<(), RangeError> {
        if self.stride == 0 {
            return Err(RangeError::NonPositiveStride(self.stride));
        }
        if let Some(stop) = self.stop {
            if self.start > stop {
                return Err(RangeError::StartAfterStop {
                    start: self.start,
                    stop,
                });
            }
        }
        Ok(())
    }

    /// The selected frame indices of a trajectory with `num_frames` frames,
    /// in traversal order.
    pub fn indices(&self, num_frames: usize) -> Result<Vec<usize>, RangeError> {
        self.validate()?;
        let stop = self.stop.map_or(num_frames, |stop| stop.min(num_frames));
        if self.start >= stop {
            return Ok(Vec::new());
        }
        Ok((self.start..stop).step_by(self.stride).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderSeriesConfig {
    pub frames: FrameRange,
}

#[derive(Default)]
pub struct OrderSeriesConfigBuilder {
    start: Option<usize>,
    stop: Option<usize>,
    stride: Option<usize>,
}

impl OrderSeriesConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(mut self, start: usize) -> Self {
        self.start = Some(start);
        self
    }
    pub fn stop(mut self, stop: Option<usize>) -> Self {
        self.stop = stop;
        self
    }
    pub fn stride(mut self, stride: usize) -> Self {
        self.stride = Some(stride);
        self
    }
    pub fn frame_range(mut self, range: FrameRange) -> Self {
        self.start = Some(range.start);
        self.stop = range.stop;
        self.stride = Some(range.stride);
        self
    }

    pub fn build(self) -> Result<OrderSeriesConfig, ConfigError> {
        let defaults = FrameRange::default();
        let frames = FrameRange::new(
            self.start.unwrap_or(defaults.start),
            self.stop,
            self.stride.unwrap_or(defaults.stride),
        )?;
        Ok(OrderSeriesConfig { frames })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColorizeConfig {
    pub frame_index: usize,
    pub colormap: Colormap,
    pub alpha: f64,
}

#[derive(Default)]
pub struct ColorizeConfigBuilder {
    frame_index: Option<usize>,
    colormap: Option<Colormap>,
    alpha: Option<f64>,
}

impl ColorizeConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame_index(mut self, index: usize) -> Self {
        self.frame_index = Some(index);
        self
    }
    pub fn colormap(mut self, colormap: Colormap) -> Self {
        self.colormap = Some(colormap);
        self
    }
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub fn build(self) -> Result<ColorizeConfig, ConfigError> {
        let alpha = self.alpha.unwrap_or(1.0);
        if !(0.0..=1.0).contains(&alpha) {
            return Err(ConfigError::InvalidValue {
                parameter: "alpha",
                reason: format!("must lie in [0, 1] (got {})", alpha),
            });
        }
        Ok(ColorizeConfig {
            frame_index: self
                .frame_index
                .ok_or(ConfigError::MissingParameter("frame_index"))?,
            colormap: self.colormap.unwrap_or_default(),
            alpha,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_range_selects_every_frame() {
        assert_eq!(
            FrameRange::default().indices(4).unwrap(),
            vec![0, 1, 2, 3]
        );
    }

    #[test]
    fn indices_follow_slice_semantics() {
        let range = FrameRange::new(2, Some(5), 1).unwrap();
        assert_eq!(range.indices(10).unwrap(), vec![2, 3, 4]);

        let strided = FrameRange::new(1, None, 3).unwrap();
        assert_eq!(strided.indices(10).unwrap(), vec![1, 4, 7]);
    }

    #[test]
    fn indices_clamp_stop_to_trajectory_length() {
        let range = FrameRange::new(3, Some(100), 2).unwrap();
        assert_eq!(range.indices(8).unwrap(), vec![3, 5, 7]);
    }

    #[test]
    fn indices_past_end_or_empty_span_select_nothing() {
        assert!(FrameRange::new(12, None, 1).unwrap().indices(10).unwrap().is_empty());
        assert!(FrameRange::new(4, Some(4), 1).unwrap().indices(10).unwrap().is_empty());
        assert!(FrameRange::default().indices(0).unwrap().is_empty());
    }

    #[test]
    fn new_rejects_zero_stride() {
        assert_eq!(
            FrameRange::new(0, None, 0),
            Err(RangeError::NonPositiveStride(0))
        );
    }

    #[test]
    fn new_rejects_start_after_stop() {
        assert_eq!(
            FrameRange::new(6, Some(5), 1),
            Err(RangeError::StartAfterStop { start: 6, stop: 5 })
        );
    }

    #[test]
    fn indices_revalidates_hand_built_range() {
        let range = FrameRange {
            start: 0,
            stop: None,
            stride: 0,
        };
        assert!(range.indices(5).is_err());
    }

    #[test]
    fn order_series_builder_applies_defaults() {
        let config = OrderSeriesConfigBuilder::new().build().unwrap();
        assert_eq!(config.frames, FrameRange::default());
    }

    #[test]
    fn order_series_builder_rejects_invalid_range() {
        let result = OrderSeriesConfigBuilder::new()
            .start(5)
            .stop(Some(2))
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidRange(RangeError::StartAfterStop { .. }))
        ));
    }

    #[test]
    fn order_series_builder_accepts_explicit_range() {
        let range = FrameRange::new(1, Some(9), 2).unwrap();
        let config = OrderSeriesConfigBuilder::new()
            .frame_range(range)
            .build()
            .unwrap();
        assert_eq!(config.frames, range);
    }

    #[test]
    fn colorize_builder_requires_frame_index() {
        assert_eq!(
            ColorizeConfigBuilder::new().build(),
            Err(ConfigError::MissingParameter("frame_index"))
        );
    }

    #[test]
    fn colorize_builder_rejects_alpha_outside_unit_interval() {
        let result = ColorizeConfigBuilder::new()
            .frame_index(0)
            .alpha(1.5)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                parameter: "alpha",
                ..
            })
        ));
        assert!(
            ColorizeConfigBuilder::new()
                .frame_index(0)
                .alpha(f64::NAN)
                .build()
                .is_err()
        );
    }

    #[test]
    fn colorize_builder_defaults_to_opaque_viridis() {
        let config = ColorizeConfigBuilder::new().frame_index(3).build().unwrap();
        assert_eq!(config.frame_index, 3);
        assert_eq!(config.colormap, Colormap::Viridis);
        assert_eq!(config.alpha, 1.0);
    }
}
