//! Logging setup shared by rebound binaries.
mod logger;
pub use logger::*;
