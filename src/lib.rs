pub mod config;
pub mod error;
pub mod report;
pub mod seed_data;
pub mod seed_table;

// Re-exports
pub use config::Config;
pub use error::Error;
pub use report::{InsertOutcome, RunSummary};
pub use seed_data::{default_seed_path, load, UserRecord};
pub use seed_table::SeedTable;
