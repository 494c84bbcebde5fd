use crate::cli::args::{Args, OutputFormat};
use std::path::PathBuf;

/// Options for one invocation, frozen once the command line is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOptions {
    /// Verbose logging
    pub verbose: bool,
    /// No logging at all
    pub quiet: bool,
    /// Explicit configuration file
    pub config: Option<PathBuf>,
    /// Dataset directory to load
    pub dataset: Option<PathBuf>,
    /// Report format
    pub output: OutputFormat,
}

impl CommandOptions {
    /// `true` when the run routine has something to do.
    pub fn has_work(&self) -> bool {
        self.dataset.is_some()
    }
}

impl From<Args> for CommandOptions {
    fn from(args: Args) -> Self {
        Self {
            verbose: args.verbose,
            quiet: args.quiet,
            config: args.config,
            dataset: args.dataset,
            output: args.output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_do_nothing() {
        let options = CommandOptions::default();
        assert!(!options.verbose);
        assert!(!options.has_work());
        assert_eq!(options.output, OutputFormat::Text);
    }
}
