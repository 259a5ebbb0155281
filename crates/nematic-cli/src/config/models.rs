use nematic::engine::config as core_config;
use std::path::PathBuf;

pub struct OrderAppConfig {
    pub input_path: PathBuf,
    /// `None` writes the series to stdout.
    pub output_path: Option<PathBuf>,
    pub core_config: core_config::OrderSeriesConfig,
}

pub struct ColorizeAppConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub core_config: core_config::ColorizeConfig,
}
