//! Command implementations for the deploy CLI

pub mod completions;
pub mod deploy;
