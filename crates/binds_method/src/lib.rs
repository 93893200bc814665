//! Validation rules for `@Binds` binding alias methods.
//!
//! A binding alias tells the injector to satisfy requests for its return type
//! with its single parameter. [`BindsMethodValidator`] evaluates the seven
//! structural rules such a method must obey and reports every violation in
//! one pass. Type-system questions are answered by the capabilities bundled in
//! [`Capabilities`], so the validator itself stays a flat table of
//! predicates over an already-resolved declaration.

mod config;
mod diagnostics;
mod error;
mod rules;
mod validator;

pub use config::Config;
pub use error::ValidationError;
pub use rules::BindsRule;
pub use validator::{BindsMethodValidator, Capabilities};

/// Name under which the validator logs and reads configuration.
pub const LINT_NAME: &str = "binds_method";

#[cfg(test)]
#[path = "tests/support.rs"]
mod support;

#[cfg(test)]
#[path = "tests/behaviour.rs"]
mod behaviour;
