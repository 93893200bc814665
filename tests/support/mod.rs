//! Shared test support for the behaviour suites.
//!
//! `steps` parses quoted step parameters; `workspace` lays out manifests and
//! configuration in a temporary directory for end-to-end checks.
pub mod steps;
pub mod workspace;
