use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::{ColorizeAppConfig, OrderAppConfig};
use crate::cli::{ColorizeArgs, OrderArgs};
use crate::error::{CliError, Result};
use nematic::core::color::colormap::Colormap;
use nematic::engine::config as core_config;
use std::path::Path;
use std::str::FromStr;

pub fn build_order_config(args: &OrderArgs) -> Result<OrderAppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = load_file_config(args.config.as_deref())?;
    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let frames_file = file_config.frames.take().unwrap_or_default();
    let core_config = core_config::OrderSeriesConfigBuilder::new()
        .start(args.start.or(frames_file.start).unwrap_or(defaults.start))
        .stop(args.stop.or(frames_file.stop).or(defaults.stop))
        .stride(args.stride.or(frames_file.stride).unwrap_or(defaults.stride))
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(OrderAppConfig {
        input_path: args.input.clone(),
        output_path: args.output.clone(),
        core_config,
    })
}

pub fn build_colorize_config(args: &ColorizeArgs) -> Result<ColorizeAppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = load_file_config(args.config.as_deref())?;
    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let colorize_file = file_config.colorize.take().unwrap_or_default();
    let colormap = match args.colormap {
        Some(colormap) => colormap,
        None => colorize_file
            .colormap
            .as_deref()
            .unwrap_or(&defaults.colormap)
            .parse::<Colormap>()
            .map_err(|e| CliError::Config(e.to_string()))?,
    };
    let alpha = args
        .alpha
        .or(colorize_file.alpha)
        .unwrap_or(defaults.alpha);

    let core_config = core_config::ColorizeConfigBuilder::new()
        .frame_index(args.frame)
        .colormap(colormap)
        .alpha(alpha)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(ColorizeAppConfig {
        input_path: args.input.clone(),
        output_path: args.output.clone(),
        core_config,
    })
}

fn load_file_config(path: Option<&Path>) -> Result<FileConfig> {
    match path {
        Some(path) => FileConfig::from_file(path),
        None => Ok(FileConfig::default()),
    }
}

fn parse_set_value<T: FromStr>(key: &str, value_str: &str, kind: &str) -> Result<T> {
    value_str.trim().parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value_str))
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };
        let key = key.trim();

        match key {
            "frames.start" => {
                config.frames.get_or_insert_with(Default::default).start =
                    Some(parse_set_value(key, value_str, "integer")?);
            }
            "frames.stop" => {
                config.frames.get_or_insert_with(Default::default).stop =
                    Some(parse_set_value(key, value_str, "integer")?);
            }
            "frames.stride" => {
                config.frames.get_or_insert_with(Default::default).stride =
                    Some(parse_set_value(key, value_str, "integer")?);
            }
            "colorize.colormap" => {
                let colormap = value_str
                    .parse::<Colormap>()
                    .map_err(|e| CliError::Config(e.to_string()))?;
                config.colorize.get_or_insert_with(Default::default).colormap =
                    Some(colormap.name().to_string());
            }
            "colorize.alpha" => {
                config.colorize.get_or_insert_with(Default::default).alpha =
                    Some(parse_set_value(key, value_str, "float")?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
