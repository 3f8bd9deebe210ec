//! Application ports (traits) for external dependencies.
//!
//! Ports define what the application needs from the outside world.
//! Adapters in `promptsite-adapters` implement them.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: called by services, implemented by infrastructure
//!   - `TemplateStore`: per-category template lookup
//!   - `TemplateRenderer`: slot substitution into page markup
//!   - `Clock`: generation timestamps
//!   - `Filesystem`: exported document writes
//!
//! - **Driving (Input) Ports**: the services themselves, called by the CLI

pub mod output;

pub use output::{Clock, Filesystem, TemplateRenderer, TemplateStore};

#[cfg(test)]
pub use output::{MockClock, MockFilesystem, MockTemplateRenderer, MockTemplateStore};
