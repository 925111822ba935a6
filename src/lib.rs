pub mod analytics;
pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod logging;
pub mod mock_tests;
pub mod progress;
pub mod schedule;
pub mod state;
pub mod storage;
pub mod syllabus;
pub mod tracker;

pub use error::TrackerError;

#[cfg(test)]
#[path = "../tests/unit/mod.rs"]
mod unit_tests;
