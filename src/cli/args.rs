use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::PathBuf;

/// Command line arguments for trenako-seeding
#[derive(Parser, Debug)]
#[command(
    name = "trenako-seeding",
    version = env!("CARGO_PKG_VERSION"),
    about = "Seed dataset tool for trenako",
    long_about = "Loads the trenako seed dataset (brands, catalog items, railways and scales), parses every resource and checks the references between them. Without a dataset directory the command does nothing."
)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Dataset root directory
    #[arg(short, long, value_name = "DIR")]
    pub dataset: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

impl Args {
    /// Parse an argument vector. Help and version requests come back as
    /// `clap::Error`s of kind `DisplayHelp`/`DisplayVersion`.
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args)
    }
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
    /// Table output
    Table,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Table => write!(f, "table"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_no_arguments() {
        let args = Args::try_parse_args(["trenako-seeding"]).unwrap();
        assert!(!args.verbose);
        assert!(args.dataset.is_none());
        assert_eq!(args.output, OutputFormat::Text);
    }

    #[test]
    fn test_verbose_flags() {
        for flag in ["-v", "--verbose"] {
            let args = Args::try_parse_args(["trenako-seeding", flag]).unwrap();
            assert!(args.verbose, "{} should set verbose", flag);
        }
    }

    #[test]
    fn test_help_and_version_requests() {
        for flag in ["-h", "--help"] {
            let err = Args::try_parse_args(["trenako-seeding", flag]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DisplayHelp);
            assert_eq!(err.exit_code(), 0);
        }
        for flag in ["-V", "--version"] {
            let err = Args::try_parse_args(["trenako-seeding", flag]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DisplayVersion);
            assert_eq!(err.exit_code(), 0);
        }
    }

    #[test]
    fn test_unknown_flag() {
        let err = Args::try_parse_args(["trenako-seeding", "--bogus"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        let err = Args::try_parse_args(["trenako-seeding", "-v", "-q"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_dataset_and_output() {
        let args =
            Args::try_parse_args(["trenako-seeding", "-d", "data", "--output", "json"]).unwrap();
        assert_eq!(args.dataset, Some(PathBuf::from("data")));
        assert_eq!(args.output, OutputFormat::Json);
    }
}
