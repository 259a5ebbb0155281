use crate::core::io::traits::FrameSource;
use crate::core::models::series::{OrderResult, OrderTimeSeries};
use crate::engine::config::OrderSeriesConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::tasks::frame_order;
use tracing::{info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Computes the nematic order parameter and director of every selected frame.
///
/// The frame range is validated before any frame is read. Results are returned
/// in frame traversal order regardless of how the work was scheduled, and the
/// first failing frame aborts the whole series.
#[instrument(skip_all, name = "order_series_workflow")]
pub fn run<S>(
    source: &S,
    config: &OrderSeriesConfig,
    reporter: &ProgressReporter,
) -> Result<OrderTimeSeries, EngineError>
where
    S: FrameSource + Sync + ?Sized,
{
    reporter.report(Progress::PhaseStart {
        name: "Frame Selection",
    });
    let num_frames = source.num_frames();
    let frame_indices = config
        .frames
        .indices(num_frames)
        .map_err(|e| EngineError::invalid_range(&config.frames, e))?;
    info!(
        "Selected {} of {} frames (start={}, stop={:?}, stride={}).",
        frame_indices.len(),
        num_frames,
        config.frames.start,
        config.frames.stop,
        config.frames.stride
    );
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart {
        name: "Order Analysis",
    });
    reporter.report(Progress::FramesStart {
        total_frames: frame_indices.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = frame_indices.iter();

    #[cfg(feature = "parallel")]
    let iterator = frame_indices.par_iter();

    let results: Vec<OrderResult> = iterator
        .map(|&frame_index| {
            let frame = frame_order::fetch_frame(source, frame_index)?;
            let result = frame_order::run(&frame, frame_index)?;
            reporter.report(Progress::FrameDone { frame_index });
            Ok(result)
        })
        .collect::<Result<_, EngineError>>()?;

    reporter.report(Progress::FramesFinish);
    reporter.report(Progress::PhaseFinish);

    let series = OrderTimeSeries::from_results(results);
    info!(
        "Order analysis complete: {} frames, {} undefined.",
        series.len(),
        series.num_undefined()
    );
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::traits::SourceError;
    use crate::core::models::frame::{Bond, Frame};
    use crate::core::models::trajectory::Trajectory;
    use crate::engine::config::{FrameRange, OrderSeriesConfigBuilder};
    use nalgebra::{Point3, Vector3};
    use std::borrow::Cow;
    use std::io;
    use std::sync::Mutex;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    /// A frame whose bonds tilt away from z by an angle that grows with `seed`.
    fn tilted_frame(seed: usize) -> Frame {
        let tilt = 0.05 * seed as f64;
        let positions = vec![
            Point3::origin(),
            Point3::new(tilt.sin(), 0.0, tilt.cos()),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 1.0),
        ];
        Frame::new(positions, vec![Bond::new(0, 1), Bond::new(2, 3)])
    }

    fn trajectory(num_frames: usize) -> Trajectory {
        (0..num_frames).map(tilted_frame).collect()
    }

    fn config(start: usize, stop: Option<usize>, stride: usize) -> OrderSeriesConfig {
        OrderSeriesConfig {
            frames: FrameRange {
                start,
                stop,
                stride,
            },
        }
    }

    struct FailingSource {
        inner: Trajectory,
        failing_frame: usize,
    }

    impl FrameSource for FailingSource {
        fn num_frames(&self) -> usize {
            self.inner.num_frames()
        }

        fn frame(&self, index: usize) -> Result<Cow<'_, Frame>, SourceError> {
            if index == self.failing_frame {
                return Err(SourceError::Read {
                    index,
                    source: Box::new(io::Error::other("truncated record")),
                });
            }
            self.inner.frame(index)
        }
    }

    #[test]
    fn run_selects_frames_by_range_and_is_repeatable() {
        let trajectory = trajectory(10);
        let config = OrderSeriesConfigBuilder::new()
            .start(2)
            .stop(Some(5))
            .stride(1)
            .build()
            .unwrap();

        let first = run(&trajectory, &config, &ProgressReporter::new()).unwrap();
        let second = run(&trajectory, &config, &ProgressReporter::new()).unwrap();

        assert_eq!(first.frame_indices(), vec![2, 3, 4]);
        assert_eq!(first, second);
    }

    #[test]
    fn run_matches_per_frame_computation_in_frame_order() {
        let trajectory = trajectory(12);
        let series = run(&trajectory, &config(1, None, 3), &ProgressReporter::new()).unwrap();

        assert_eq!(series.frame_indices(), vec![1, 4, 7, 10]);
        for result in &series {
            let expected = frame_order::run(&tilted_frame(result.frame_index), result.frame_index)
                .unwrap();
            assert_eq!(*result, expected);
        }
    }

    #[test]
    fn run_records_sentinel_for_frame_without_bonds() {
        let mut trajectory = trajectory(2);
        trajectory.push(Frame::new(vec![Point3::origin()], vec![]));

        let series = run(&trajectory, &config(0, None, 1), &ProgressReporter::new()).unwrap();

        assert_eq!(series.len(), 3);
        assert!(series.get(0).unwrap().is_defined());
        assert!(!series.get(2).unwrap().is_defined());
        assert_eq!(series.get(2).unwrap().order(), None);
    }

    #[test]
    fn run_on_aligned_frame_reports_order_one() {
        let trajectory: Trajectory = vec![tilted_frame(0)].into_iter().collect();
        let series = run(&trajectory, &config(0, None, 1), &ProgressReporter::new()).unwrap();

        let measurement = series.get(0).unwrap().measurement.unwrap();
        assert!(f64_approx_equal(measurement.order, 1.0));
        assert!(measurement.is_parallel_to(&Vector3::z(), TOLERANCE));
    }

    #[test]
    fn run_rejects_invalid_range_before_reading() {
        let source = FailingSource {
            inner: trajectory(4),
            failing_frame: 0,
        };

        let zero_stride = run(&source, &config(0, None, 0), &ProgressReporter::new());
        assert!(matches!(
            zero_stride,
            Err(EngineError::InvalidRange { stride: 0, .. })
        ));

        let reversed = run(&source, &config(3, Some(1), 1), &ProgressReporter::new());
        assert!(matches!(
            reversed,
            Err(EngineError::InvalidRange {
                start: 3,
                stop: Some(1),
                ..
            })
        ));
    }

    #[test]
    fn run_clamps_stop_and_tolerates_start_past_end() {
        let trajectory = trajectory(4);

        let clamped = run(&trajectory, &config(1, Some(50), 1), &ProgressReporter::new()).unwrap();
        assert_eq!(clamped.frame_indices(), vec![1, 2, 3]);

        let empty = run(&trajectory, &config(9, None, 1), &ProgressReporter::new()).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn run_aborts_on_out_of_bounds_bond_with_frame_index() {
        let mut trajectory = trajectory(3);
        trajectory.push(Frame::new(vec![Point3::origin()], vec![Bond::new(0, 1)]));

        let error = run(&trajectory, &config(0, None, 1), &ProgressReporter::new()).unwrap_err();
        assert!(matches!(
            error,
            EngineError::OutOfBounds {
                frame_index: 3,
                bond_index: 0,
                particle_index: 1,
                num_particles: 1,
            }
        ));
    }

    #[test]
    fn run_maps_read_failure_to_source_unavailable() {
        let source = FailingSource {
            inner: trajectory(5),
            failing_frame: 2,
        };

        let error = run(&source, &config(0, None, 1), &ProgressReporter::new()).unwrap_err();
        assert!(matches!(
            error,
            EngineError::SourceUnavailable {
                frame_index: Some(2),
                ..
            }
        ));

        let skipped = run(&source, &config(0, None, 2), &ProgressReporter::new());
        assert!(skipped.is_err());
        let avoided = run(&source, &config(3, None, 1), &ProgressReporter::new()).unwrap();
        assert_eq!(avoided.frame_indices(), vec![3, 4]);
    }

    #[test]
    fn run_reports_one_progress_event_per_frame() {
        let trajectory = trajectory(6);
        let done = Mutex::new(Vec::new());
        let total = Mutex::new(None);
        let reporter = ProgressReporter::with_callback(Box::new(|event: Progress| match event {
            Progress::FramesStart { total_frames } => *total.lock().unwrap() = Some(total_frames),
            Progress::FrameDone { frame_index } => done.lock().unwrap().push(frame_index),
            _ => {}
        }));

        run(&trajectory, &config(0, Some(5), 2), &reporter).unwrap();
        drop(reporter);

        let mut done = done.into_inner().unwrap();
        done.sort_unstable();
        assert_eq!(done, vec![0, 2, 4]);
        assert_eq!(total.into_inner().unwrap(), Some(3));
    }
}
