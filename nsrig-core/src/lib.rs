//! nsrig Core - Foundation types and utilities
//!
//! This crate provides the abstractions shared by the nsrig harness crates:
//! the error taxonomy, the strongly-typed process id, and helpers for
//! manipulating the inherited file-descriptor table.

#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod fd;
pub mod types;

pub use error::{Error, Result};
pub use types::ProcessId;
