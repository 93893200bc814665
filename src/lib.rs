//! Check `@Binds` declarations described by a manifest.
//!
//! The library loads a TOML declaration manifest and optional workspace
//! configuration, builds the type universe, and runs the `binds_method`
//! validator over every `@Binds` method it finds. The `bindcheck` binary is a
//! thin wrapper over [`cli::run_check`].

pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod manifest;
pub mod report;

pub use check::{CheckReport, Finding, MethodReport, check_manifest};
pub use config::{HierarchyConfig, SharedConfig};
pub use error::{BindcheckError, Result};
pub use manifest::Manifest;
