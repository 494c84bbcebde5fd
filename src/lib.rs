//! trenako-seeding Library
//!
//! Command line entry point that loads the trenako seed dataset, parses
//! each resource into its typed model and checks the references between
//! them.

pub mod cli;
pub mod core;
pub mod domain;
pub mod infrastructure;

pub use crate::core::seeding::{Seeder, SeedingReport};
pub use crate::domain::config::SeedingConfig;
pub use crate::domain::error::{SeedingError, SeedingResult};
pub use crate::domain::options::CommandOptions;
