//! CLI argument definitions for `EduPath`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use edupath::config::ConfigOverrides;
use logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to
/// lowercase strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `dataset`, `max_depth`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Search the course catalog.
    ///
    /// Look up a course by id, or scan titles/categories for a keyword.
    Search {
        /// Course id to look up (binary search over the sorted catalog)
        #[arg(long, value_name = "ID")]
        id: Option<u32>,

        /// Keyword to match against course titles (case-insensitive)
        #[arg(long, value_name = "KEYWORD")]
        title: Option<String>,

        /// Keyword to match against course categories (case-insensitive)
        #[arg(long, value_name = "KEYWORD")]
        category: Option<String>,

        /// Emit results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Build the prerequisite learning path for a course.
    ///
    /// Shows the leveled study plan, total hours, and flags circular
    /// prerequisite data.
    Roadmap {
        /// Target course id
        #[arg(value_name = "COURSE_ID")]
        course_id: u32,

        /// Traversal depth cap (defaults to config `max_depth`)
        #[arg(long, value_name = "N")]
        max_depth: Option<usize>,

        /// Emit the learning path as JSON
        #[arg(long)]
        json: bool,

        /// Also write a roadmap report in the given format (markdown, html)
        #[arg(long, value_name = "FORMAT")]
        report: Option<String>,

        /// Report output path (defaults to config `reports_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Analyze the gap between completed courses and a target course.
    Gap {
        /// Target course id
        #[arg(value_name = "COURSE_ID")]
        course_id: u32,

        /// Completed course ids (comma-separated)
        #[arg(long, value_name = "IDS", value_delimiter = ',', num_args = 0..)]
        completed: Vec<u32>,

        /// Number of "study next" suggestions (defaults to config `next_steps`)
        #[arg(long, value_name = "K")]
        next: Option<usize>,

        /// Emit the gap report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Recommend courses by attribute filters or career goal.
    Recommend {
        /// Keep courses whose category contains this keyword
        #[arg(long, value_name = "KEYWORD")]
        category: Option<String>,

        /// Keep courses whose difficulty matches this label
        #[arg(long, value_name = "LABEL")]
        difficulty: Option<String>,

        /// Keep courses at or under this many estimated hours
        #[arg(long, value_name = "HOURS")]
        max_hours: Option<f32>,

        /// Keep courses rated at or above this
        #[arg(long, value_name = "RATING")]
        min_rating: Option<f32>,

        /// Maximum number of results
        #[arg(long, value_name = "N", default_value_t = 5)]
        top: usize,

        /// Build a per-category roadmap for a career goal instead
        #[arg(long, value_name = "GOAL", conflicts_with_all = ["category", "difficulty", "max_hours", "min_rating"])]
        career: Option<String>,

        /// Emit results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show catalog statistics.
    Stats {
        /// Emit statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "edupath",
    about = "EduPath command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config dataset path
    #[arg(long = "config-dataset", value_name = "FILE")]
    pub config_dataset: Option<PathBuf>,

    /// Override config dataset path (short form)
    #[arg(long = "dataset", value_name = "FILE")]
    pub dataset: Option<PathBuf>,

    /// Override config reports output directory
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that can be
    /// applied to the loaded configuration. The short-form `--dataset` takes
    /// precedence over `--config-dataset` when both are provided.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            dataset: self
                .dataset
                .as_ref()
                .or(self.config_dataset.as_ref())
                .map(|p| p.to_string_lossy().to_string()),
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli() -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            config_dataset: None,
            dataset: None,
            reports_dir: None,
            command: Command::Config { subcommand: None },
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = bare_cli().to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.dataset.is_none());
        assert!(overrides.reports_dir.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let cli = Cli {
            config_level: Some(LogLevelArg::Debug),
            config_log_file: Some(PathBuf::from("/tmp/edupath.log")),
            config_verbose: Some(true),
            dataset: Some(PathBuf::from("/data/courses.csv")),
            reports_dir: Some(PathBuf::from("/reports")),
            ..bare_cli()
        };

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/edupath.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.dataset, Some("/data/courses.csv".to_string()));
        assert_eq!(overrides.reports_dir, Some("/reports".to_string()));
    }

    #[test]
    fn test_dataset_short_form_precedence() {
        let cli = Cli {
            config_dataset: Some(PathBuf::from("/long/courses.csv")),
            dataset: Some(PathBuf::from("/short/courses.csv")),
            ..bare_cli()
        };
        assert_eq!(
            cli.to_config_overrides().dataset,
            Some("/short/courses.csv".to_string())
        );

        let cli = Cli {
            config_dataset: Some(PathBuf::from("/long/courses.csv")),
            ..bare_cli()
        };
        assert_eq!(
            cli.to_config_overrides().dataset,
            Some("/long/courses.csv".to_string())
        );
    }
}
