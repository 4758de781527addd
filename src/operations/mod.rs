//! Operations module
//!
//! This module provides the high-level deploy operation, which coordinates:
//! - Version resolution (from version module)
//! - Destination layout (from layout module)
//! - Module file generation (from manifest module)
//! - Asset copying (from assets module)
//! - UI: Progress reporting (from ui module)

pub mod deploy;

pub use deploy::{DeployOperation, DeployOptions};
