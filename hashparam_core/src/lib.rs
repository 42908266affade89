//! `hashparam_core` recognizes `#{name}` parameter references inside
//! arbitrary text and hands each one to a [`ParamHandler`] to resolve.
//!
//! ## Syntax
//!
//! - `#{name}` references the parameter `name`.
//! - `##` is a literal `#`.
//! - A `#` followed by anything else is invalid, and nothing after it is
//!   processed.
//! - A `#{` that is never closed is an incomplete reference.
//!
//! Invalid and incomplete input is not an error of the scanner itself. It is
//! reported to [`ParamHandler::handle_after_resolution`] as the state the scan
//! ended in, and the handler decides what to make of it.
//!
//! ## Modules
//!
//! - [`config`] — Loading parameter values from `hashparam.toml`.
//!
//! ## Key Types
//!
//! - [`ReaderState`] — The scanner states and their transition table.
//! - [`ParamHandler`] — The callbacks driven by [`process`].
//! - [`ParamSubstitution`] — Writes text with references replaced by values.
//! - [`ParamReferenceCollector`] — Lists the names a text references.
//! - [`Params`] — Parameter values keyed by name.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hashparam_core::HashParamConfig;
//! use hashparam_core::substitute;
//! use std::path::Path;
//!
//! let config = HashParamConfig::load(Path::new(".")).unwrap().unwrap_or_default();
//! let text = substitute("#{env}-server", &config.params).unwrap();
//! println!("{text}");
//! ```

pub use config::*;
pub use error::*;
pub use handler::*;
pub use references::*;
pub use scanner::*;
pub use state::*;
pub use substitution::*;

pub mod config;
#[allow(unused_assignments)]
mod error;
mod handler;
mod references;
mod scanner;
mod state;
mod substitution;

#[cfg(test)]
mod __fixtures;
