//! Configuration file handling
//!
//! This module contains the data structures for the deploy configuration
//! (`deploy.yaml`), which lists everything the deployment copies. Without a
//! configuration file the built-in appleseedMaya layout is used.

pub mod deploy;

// Re-export commonly used types
pub use deploy::DeployConfig;
