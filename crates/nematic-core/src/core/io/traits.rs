use crate::core::models::frame::Frame;
use crate::core::models::trajectory::Trajectory;
use std::borrow::Cow;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Errors raised by a [`FrameSource`] while serving a frame.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Frame {index} does not exist (source has {num_frames} frames)")]
    FrameNotFound { index: usize, num_frames: usize },
    #[error("Failed to read frame {index}: {source}")]
    Read {
        index: usize,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

/// Read-only, random-access view over the frames of a trajectory.
///
/// Analysis code only depends on this capability, never on a particular file
/// format. Format adapters either load frames up front (see [`Trajectory`]) or
/// serve them lazily, in which case `frame` returns an owned value.
pub trait FrameSource {
    /// Total number of frames available.
    fn num_frames(&self) -> usize;

    /// Returns the frame at the zero-based `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the frame does not exist or cannot be read.
    fn frame(&self, index: usize) -> Result<Cow<'_, Frame>, SourceError>;
}

impl<S: FrameSource + ?Sized> FrameSource for &S {
    fn num_frames(&self) -> usize {
        (**self).num_frames()
    }

    fn frame(&self, index: usize) -> Result<Cow<'_, Frame>, SourceError> {
        (**self).frame(index)
    }
}

/// Defines the interface for reading and writing trajectory file formats.
///
/// Implementors handle format-specific parsing and serialization. File handles
/// opened by the path helpers live only for the duration of the call.
pub trait TrajectoryFile {
    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads every frame from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or I/O operations encounter issues.
    fn read_from(reader: &mut impl BufRead) -> Result<Trajectory, Self::Error>;

    /// Writes every frame of a trajectory to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(trajectory: &Trajectory, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Reads every frame from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Trajectory, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes every frame of a trajectory to a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(trajectory: &Trajectory, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(trajectory, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
