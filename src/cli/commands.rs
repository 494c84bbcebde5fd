use crate::cli::args::Args;
use crate::cli::output::{ConsoleWriter, OutputWriter};
use crate::core::seeding::Seeder;
use crate::domain::config::SeedingConfig;
use crate::domain::error::{SeedingError, SeedingResult};
use crate::domain::options::CommandOptions;
use crate::infrastructure::config::ConfigManager;
use crate::infrastructure::logging;
use std::ffi::OsString;

/// Exit code for a run whose report lists issues
pub const EXIT_ISSUES: i32 = 1;

/// Parse the argument vector into the options for this run.
pub fn parse_command_line<I, T>(args: I) -> SeedingResult<CommandOptions>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = Args::try_parse_args(args)?;
    Ok(CommandOptions::from(args))
}

/// Execute the command and return the process exit code.
pub fn execute_command(options: &CommandOptions) -> SeedingResult<i32> {
    if !options.has_work() {
        // An explicit config file must still exist and be valid
        if let Some(path) = &options.config {
            ConfigManager::with_paths(None, None).load_config_from_path(path)?;
        }
        return Ok(0);
    }

    let config = load_config(options)?;
    if let Some(level) = logging::resolve_level(options, &config.logging) {
        logging::init_logging(&level)?;
    }

    let writer = ConsoleWriter::new(options.output);
    let seeder = Seeder::new(config);
    match seeder.run(options)? {
        Some(report) => {
            writer.write_report(&report)?;
            Ok(if report.is_clean() { 0 } else { EXIT_ISSUES })
        }
        None => Ok(0),
    }
}

/// Run the whole entry point: parse, execute and report errors.
pub fn run<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let options = match parse_command_line(args) {
        Ok(options) => options,
        Err(SeedingError::Usage(e)) => {
            // Help and version go to stdout, usage errors to stderr
            let _ = e.print();
            return e.exit_code();
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return e.exit_code();
        }
    };

    match execute_command(&options) {
        Ok(code) => code,
        Err(e) => {
            let writer = ConsoleWriter::new(options.output);
            if writer.write_error(&e.to_string()).is_err() {
                eprintln!("Error: {}", e);
            }
            e.exit_code()
        }
    }
}

fn load_config(options: &CommandOptions) -> SeedingResult<SeedingConfig> {
    let config_manager = ConfigManager::new();
    match &options.config {
        Some(path) => config_manager.load_config_from_path(path),
        None => config_manager.load_config(),
    }
}
