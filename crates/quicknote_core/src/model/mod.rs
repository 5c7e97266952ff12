//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//!
//! # Invariants
//! - Every note is identified by a `NoteId` unique among live notes.

pub mod note;
