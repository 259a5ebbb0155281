use clap::{Args, Parser, Subcommand};
use nematic::core::color::colormap::Colormap;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Nematic Order Developers",
    version,
    about = "nematic - Orientational order analysis of bonded particle trajectories: per-frame nematic order parameter, director, and bond misalignment coloring.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the nematic order parameter and director of every selected frame.
    Order(OrderArgs),
    /// Color the bonds of one frame by their misalignment with the frame's director.
    Colorize(ColorizeArgs),
}

/// Arguments for the `order` subcommand.
#[derive(Args, Debug)]
pub struct OrderArgs {
    /// Path to the input trajectory (multi-frame BGF).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the output CSV file. Writes to stdout when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// First frame to analyze (zero-based).
    #[arg(long, value_name = "INT")]
    pub start: Option<usize>,

    /// Frame at which to stop (exclusive). Defaults to the end of the trajectory.
    #[arg(long, value_name = "INT")]
    pub stop: Option<usize>,

    /// Analyze every N-th frame.
    #[arg(long, value_name = "INT")]
    pub stride: Option<usize>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S frames.stride=10
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `colorize` subcommand.
#[derive(Args, Debug)]
pub struct ColorizeArgs {
    /// Path to the input trajectory (multi-frame BGF).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Zero-based index of the frame to color.
    #[arg(short, long, required = true, value_name = "INT")]
    pub frame: usize,

    /// Path for the output CSV file with one row per bond.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Colormap name: viridis, plasma, inferno, magma, or cividis.
    #[arg(long, value_name = "NAME")]
    pub colormap: Option<Colormap>,

    /// Opacity of every bond color, in [0, 1].
    #[arg(long, value_name = "FLOAT")]
    pub alpha: Option<f64>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S colorize.colormap=magma
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_command_parses_range_and_set_values() {
        let cli = Cli::parse_from([
            "nematic", "-vv", "order", "-i", "traj.bgf", "--start", "2", "--stride", "5", "-S",
            "frames.stop=40",
        ]);
        assert_eq!(cli.verbose, 2);
        let Commands::Order(args) = cli.command else {
            panic!("Expected 'order' subcommand");
        };
        assert_eq!(args.input, PathBuf::from("traj.bgf"));
        assert_eq!(args.output, None);
        assert_eq!(args.start, Some(2));
        assert_eq!(args.stop, None);
        assert_eq!(args.stride, Some(5));
        assert_eq!(args.set_values, vec!["frames.stop=40".to_string()]);
    }

    #[test]
    fn colorize_command_parses_colormap_by_name() {
        let cli = Cli::parse_from([
            "nematic", "colorize", "-i", "traj.bgf", "-f", "3", "-o", "bonds.csv", "--colormap",
            "Plasma", "--alpha", "0.5",
        ]);
        let Commands::Colorize(args) = cli.command else {
            panic!("Expected 'colorize' subcommand");
        };
        assert_eq!(args.frame, 3);
        assert_eq!(args.colormap, Some(Colormap::Plasma));
        assert_eq!(args.alpha, Some(0.5));
    }

    #[test]
    fn colorize_command_rejects_unknown_colormap() {
        let result = Cli::try_parse_from([
            "nematic", "colorize", "-i", "t.bgf", "-f", "0", "-o", "o.csv", "--colormap", "jet",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["nematic", "-q", "-v", "order", "-i", "t.bgf"]);
        assert!(result.is_err());
    }
}
