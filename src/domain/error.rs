use std::path::PathBuf;
use thiserror::Error;

/// trenako-seeding unified error type
#[derive(Error, Debug)]
pub enum SeedingError {
    #[error("{0}")]
    Usage(#[from] clap::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Unable to determine the resource type (path: {})", .0.display())]
    UnknownResourceType(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dataset traversal error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Output error: {0}")]
    Output(String),
}

impl SeedingError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            SeedingError::Usage(e) => e.exit_code(),
            _ => 1,
        }
    }
}

pub type SeedingResult<T> = Result<T, SeedingError>;
