//! Infrastructure adapters for Namewright.
//!
//! This crate implements the ports defined in `namewright-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
