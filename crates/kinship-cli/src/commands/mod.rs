//! CLI command implementations

pub mod chart;
pub mod completions;
pub mod config;
pub mod info;
pub mod io;
pub mod relation;
