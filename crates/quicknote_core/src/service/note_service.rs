//! Note use-case service.
//!
//! # Responsibility
//! - Provide add/find/delete/list APIs for shell callers.
//! - Emit stable, metadata-only diagnostic events from core.
//!
//! # Invariants
//! - Note bodies and tags never appear in log output; only uids and counts.
//! - `add_note` returns the record read back from the repository.

use crate::model::note::{Note, NoteId};
use crate::store::note_store::{DeleteOutcome, NoteRepository, StoreError};
use log::{debug, error};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for note use-cases.
#[derive(Debug)]
pub enum NoteServiceError {
    /// Store-layer failure.
    Store(StoreError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent note state: {details}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::InconsistentState(_) => None,
        }
    }
}

impl From<StoreError> for NoteServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Note service facade over repository implementations.
pub struct NoteService<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds one note and returns the stored record.
    pub fn add_note(&mut self, body: &str, tag: &str) -> Result<Note, NoteServiceError> {
        let uid = match self.repo.add_note(body, tag) {
            Ok(uid) => uid,
            Err(err) => {
                error!("event=uid_exhausted module=core status=error detail={err}");
                return Err(err.into());
            }
        };

        debug!(
            "event=note_added module=core status=ok uid={uid} live={}",
            self.repo.len()
        );
        self.repo
            .get_note(uid)
            .ok_or(NoteServiceError::InconsistentState(
                "added note not found in read-back",
            ))
    }

    /// Gets one note by uid.
    pub fn find_by_id(&self, uid: NoteId) -> Option<Note> {
        self.repo.get_note(uid)
    }

    /// Lists notes carrying the exact tag, in insertion order.
    pub fn find_by_tag(&self, tag: &str) -> Vec<Note> {
        self.repo.find_by_tag(tag)
    }

    /// Deletes one note by uid.
    pub fn delete_by_id(&mut self, uid: NoteId) -> DeleteOutcome {
        let outcome = self.repo.delete_by_id(uid);
        log_delete_outcome("delete_by_id", outcome);
        outcome
    }

    /// Deletes the first note carrying the tag, if any.
    ///
    /// Single-match semantics: other notes sharing the tag stay live.
    pub fn delete_by_tag(&mut self, tag: &str) -> DeleteOutcome {
        let outcome = self.repo.delete_by_tag(tag);
        log_delete_outcome("delete_by_tag", outcome);
        outcome
    }

    /// Lists all notes in insertion order.
    pub fn list_notes(&self) -> Vec<Note> {
        self.repo.list_notes()
    }

    /// Number of live notes.
    pub fn len(&self) -> usize {
        self.repo.len()
    }

    /// Whether the store holds no notes.
    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }
}

fn log_delete_outcome(operation: &str, outcome: DeleteOutcome) {
    match outcome {
        DeleteOutcome::Deleted { uid, .. } => {
            debug!("event=note_deleted module=core status=ok op={operation} uid={uid}");
        }
        DeleteOutcome::NotFound => {
            debug!("event=note_delete_miss module=core status=ok op={operation}");
        }
    }
}
