//! Privilege reduction for harness payloads
//!
//! Drops capabilities from the bounding set before handing control to a
//! payload command. Bounding-set removal is inherited and irreversible
//! without new privilege, so nothing the payload execs can get the dropped
//! capabilities back.

#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

pub mod caps;

pub use caps::{Capability, drop_bounding_set, exec_with_reduced_caps};
