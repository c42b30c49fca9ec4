//! Snapshot data model.
//!
//! This module defines the shape of a topology snapshot and the identity rules
//! the diff engine relies on. A [`Snapshot`] is plain data: it is built once by
//! the loader (or by hand in tests), read by the engine, and never mutated
//! during a diff.

mod identity;
mod metadata;
mod snapshot;
mod validation;

pub use identity::*;
pub use metadata::*;
pub use snapshot::*;
pub use validation::*;
