//! Note record and identifier type.
//!
//! # Responsibility
//! - Define the immutable note record managed by the store.
//! - Provide the three-line rendering printed by the interactive shell.
//!
//! # Invariants
//! - `uid` is assigned once at creation and never changes afterwards.
//! - Body and tag are free text; both may be empty.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Unique identifier for one live note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = u32;

/// A short text note with a category tag and a unique id.
///
/// The only way to obtain a `Note` is through the store's add operation,
/// which allocates the uid. Editing is not part of the store contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique among live notes for the store's lifetime.
    pub uid: NoteId,
    /// Free-form note text.
    pub body: String,
    /// Non-unique grouping label.
    pub tag: String,
}

impl Note {
    /// Creates a note with a caller-provided uid.
    ///
    /// Uid uniqueness is the store's invariant, not the record's; callers
    /// other than the store should not construct notes directly.
    pub fn new(uid: NoteId, body: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            uid,
            body: body.into(),
            tag: tag.into(),
        }
    }
}

impl Display for Note {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "UID: {}", self.uid)?;
        writeln!(f, "Note: {}", self.body)?;
        writeln!(f, "Tag: {}", self.tag)
    }
}
