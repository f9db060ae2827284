//! dirprune - retention-based pruning of date-named directories

pub mod cmd;
pub mod config;
pub mod logging;
pub mod util;

pub use config::Config;
