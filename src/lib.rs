//! prcheck library.
//!
//! Pattern-based review checks over the files changed in a pull request.

pub mod changes;
pub mod cli;
pub mod config;
pub mod error;
pub mod policies;
pub mod report;
pub mod review;
pub mod scan;

pub use error::Error;
