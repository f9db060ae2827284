//! Workflow integration tests
//!
//! Each test drives the `dirprune` binary through `--config` and checks the
//! resulting directory tree.

pub mod config_errors;
pub mod demo_mode;
