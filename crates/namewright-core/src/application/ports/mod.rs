//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `namewright-adapters` and the
//! CLI implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Listing, renaming, reading and writing project files
//!   - `ProgressReporter`: User-visible progress of a run

pub mod output;

pub use output::{Filesystem, NoProgress, ProgressReporter};

#[cfg(test)]
pub use output::MockFilesystem;
