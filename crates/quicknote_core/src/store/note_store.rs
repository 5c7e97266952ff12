//! Note repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the ordered note collection.
//! - Own uid allocation and its retry policy.
//!
//! # Invariants
//! - All live uids are pairwise distinct.
//! - Notes enumerate in insertion order; removal keeps the remainder's
//!   relative order.
//! - A uid is assigned only at creation time; once its note is deleted the
//!   value may be drawn again for a later note.

use crate::model::note::{Note, NoteId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lowest uid candidate drawn by the default allocator.
pub const UID_MIN: NoteId = 1;
/// Highest uid candidate drawn by the default allocator.
pub const UID_MAX: NoteId = 99_999;

/// Upper bound on draws before uid allocation reports exhaustion.
const MAX_UID_ATTEMPTS: u32 = 10_000;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for note collection operations.
///
/// Lookups and deletes report "not found" as a value, never through this
/// type; the only store failure is uid-space saturation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Uid allocation gave up after its bounded number of draws.
    UidExhausted { attempts: u32 },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UidExhausted { attempts } => write!(
                f,
                "uid allocation failed after {attempts} draws; the id space is saturated"
            ),
        }
    }
}

impl Error for StoreError {}

/// Result of a delete operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Exactly one note was removed.
    Deleted {
        uid: NoteId,
        /// Whether the removed note was the first in insertion order.
        /// Informational only; the store treats both cases the same.
        was_first: bool,
    },
    /// No note matched; the store is unchanged.
    NotFound,
}

impl DeleteOutcome {
    /// Returns whether a note was actually removed.
    pub fn is_deleted(&self) -> bool {
        matches!(self, Self::Deleted { .. })
    }
}

/// Repository interface for note CRUD operations.
pub trait NoteRepository {
    /// Appends a new note and returns its freshly allocated uid.
    ///
    /// Body and tag may both be empty.
    fn add_note(&mut self, body: &str, tag: &str) -> StoreResult<NoteId>;

    /// Gets one note by uid.
    fn get_note(&self, uid: NoteId) -> Option<Note>;

    /// Lists every note whose tag matches exactly, in insertion order.
    ///
    /// Matching is case-sensitive; an empty result means no note carries
    /// the tag.
    fn find_by_tag(&self, tag: &str) -> Vec<Note>;

    /// Removes the note with the given uid, if present.
    fn delete_by_id(&mut self, uid: NoteId) -> DeleteOutcome;

    /// Removes the first note (insertion order) carrying the given tag.
    ///
    /// Removes at most one note per call even when several notes share the
    /// tag; callers wanting bulk removal must loop.
    fn delete_by_tag(&mut self, tag: &str) -> DeleteOutcome;

    /// Lists all notes in insertion order.
    fn list_notes(&self) -> Vec<Note>;

    /// Number of live notes.
    fn len(&self) -> usize;

    /// Whether the store holds no notes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory, insertion-ordered note repository.
///
/// Uid allocation is rejection sampling over `uid_min..=uid_max`: draw
/// uniformly, redraw while the candidate is live. This stays cheap only
/// while the number of live notes is far below the size of the id space;
/// as the space saturates, allocation degrades and finally reports
/// [`StoreError::UidExhausted`] instead of looping forever.
pub struct MemoryNoteRepository {
    notes: Vec<Note>,
    rng: StdRng,
    uid_min: NoteId,
    uid_max: NoteId,
}

impl MemoryNoteRepository {
    /// Creates an empty store drawing uids from `1..=99_999`.
    pub fn new() -> Self {
        Self::with_uid_range(UID_MIN, UID_MAX)
    }

    /// Creates an empty store drawing uids from a caller-chosen range.
    ///
    /// # Invariants
    /// - `uid_min` must be at least 1 and not above `uid_max`.
    pub fn with_uid_range(uid_min: NoteId, uid_max: NoteId) -> Self {
        debug_assert!(uid_min >= 1 && uid_min <= uid_max);
        Self {
            notes: Vec::new(),
            rng: StdRng::from_entropy(),
            uid_min,
            uid_max,
        }
    }

    /// Replaces the allocator rng with a seeded one for deterministic runs.
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    fn uid_taken(&self, uid: NoteId) -> bool {
        self.notes.iter().any(|note| note.uid == uid)
    }

    /// Draws a uid not currently live.
    ///
    /// Deleted uids are eligible again; only live notes block a candidate.
    fn allocate_uid(&mut self) -> StoreResult<NoteId> {
        for _ in 0..MAX_UID_ATTEMPTS {
            let candidate = self.rng.gen_range(self.uid_min..=self.uid_max);
            if !self.uid_taken(candidate) {
                return Ok(candidate);
            }
        }
        Err(StoreError::UidExhausted {
            attempts: MAX_UID_ATTEMPTS,
        })
    }
}

impl Default for MemoryNoteRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteRepository for MemoryNoteRepository {
    fn add_note(&mut self, body: &str, tag: &str) -> StoreResult<NoteId> {
        let uid = self.allocate_uid()?;
        self.notes.push(Note::new(uid, body, tag));
        Ok(uid)
    }

    fn get_note(&self, uid: NoteId) -> Option<Note> {
        self.notes.iter().find(|note| note.uid == uid).cloned()
    }

    fn find_by_tag(&self, tag: &str) -> Vec<Note> {
        self.notes
            .iter()
            .filter(|note| note.tag == tag)
            .cloned()
            .collect()
    }

    fn delete_by_id(&mut self, uid: NoteId) -> DeleteOutcome {
        match self.notes.iter().position(|note| note.uid == uid) {
            Some(index) => {
                self.notes.remove(index);
                DeleteOutcome::Deleted {
                    uid,
                    was_first: index == 0,
                }
            }
            None => DeleteOutcome::NotFound,
        }
    }

    fn delete_by_tag(&mut self, tag: &str) -> DeleteOutcome {
        match self.notes.iter().position(|note| note.tag == tag) {
            Some(index) => {
                let removed = self.notes.remove(index);
                DeleteOutcome::Deleted {
                    uid: removed.uid,
                    was_first: index == 0,
                }
            }
            None => DeleteOutcome::NotFound,
        }
    }

    fn list_notes(&self) -> Vec<Note> {
        self.notes.clone()
    }

    fn len(&self) -> usize {
        self.notes.len()
    }
}
