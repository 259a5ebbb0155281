pub mod colorize;
pub mod order;

use crate::error::{CliError, Result};
use nematic::core::io::bgf::BgfTrajectoryFile;
use nematic::core::io::traits::TrajectoryFile;
use nematic::core::models::trajectory::Trajectory;
use std::path::Path;
use tracing::info;

pub(crate) fn load_trajectory(path: &Path) -> Result<Trajectory> {
    info!("Loading trajectory from {:?}", path);
    let trajectory =
        BgfTrajectoryFile::read_from_path(path).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
    info!("Loaded {} frames.", trajectory.len());
    Ok(trajectory)
}
