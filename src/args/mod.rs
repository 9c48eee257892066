//! Command-line argument parsing and handling.

pub mod definition;
pub mod query;
pub mod report;
pub mod rfq;
pub mod tools;
pub mod utils;

// Re-export commonly used items
pub use definition::{Args, process_args};
pub use utils::determine_log_level;

/// Error type shared by the CLI handlers.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
