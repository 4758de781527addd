//! Common utility modules shared across the deploy pipeline.

pub mod fs;
