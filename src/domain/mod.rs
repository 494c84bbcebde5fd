// Domain module - Configuration, errors and dataset models
pub mod config;
pub mod error;
pub mod options;
pub mod resources;
