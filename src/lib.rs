// src/lib.rs
pub mod aggregate;
pub mod cache;
pub mod checker;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod platforms;
pub mod progress;
pub mod session;
pub mod types;
pub mod utils;

pub use cli::Args;
pub use engine::{BatchReport, BatchRunner, RunOptions};
pub use types::{Config, Failure, FailureKind, NameScanError, QueryResult};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
