//! Store layer: note collection contract and in-memory implementation.
//!
//! # Responsibility
//! - Define the use-case oriented access contract for notes.
//! - Keep container and uid-drawing details behind the repository boundary.
//!
//! # Invariants
//! - Live uids are pairwise distinct.
//! - Enumeration follows insertion order; deletion preserves the relative
//!   order of the remaining notes.

pub mod note_store;
