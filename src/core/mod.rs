// Core module - Dataset loading, parsing and the seeding run
pub mod dataset;
pub mod parser;
pub mod seeding;

pub use dataset::{Dataset, Resource, ResourceType};
pub use parser::{ParseError, ParsedResource, Parser};
pub use seeding::{ResourceIssue, Seeder, SeedingReport};
