use quicknote_core::{
    DeleteOutcome, MemoryNoteRepository, NoteRepository, StoreError, UID_MAX, UID_MIN,
};
use std::collections::HashSet;

/// Picks a uid that no live note carries.
fn unused_uid(repo: &MemoryNoteRepository) -> u32 {
    (UID_MIN..=UID_MAX)
        .find(|candidate| repo.get_note(*candidate).is_none())
        .expect("default id space cannot be saturated in tests")
}

#[test]
fn add_assigns_distinct_uids_within_range() {
    let mut repo = MemoryNoteRepository::new().with_rng_seed(7);
    let mut seen = HashSet::new();
    for index in 0..500 {
        let uid = repo.add_note(&format!("note {index}"), "bulk").unwrap();
        assert!((UID_MIN..=UID_MAX).contains(&uid));
        assert!(seen.insert(uid), "uid {uid} assigned twice");
    }
    assert_eq!(repo.len(), 500);
}

#[test]
fn add_then_get_returns_same_body_and_tag() {
    let mut repo = MemoryNoteRepository::new().with_rng_seed(2);
    let uid = repo.add_note("Buy milk", "errand").unwrap();

    let note = repo.get_note(uid).unwrap();
    assert_eq!(note.uid, uid);
    assert_eq!(note.body, "Buy milk");
    assert_eq!(note.tag, "errand");
}

#[test]
fn get_unknown_uid_returns_none() {
    let mut repo = MemoryNoteRepository::new().with_rng_seed(3);
    repo.add_note("only note", "tag").unwrap();

    assert!(repo.get_note(unused_uid(&repo)).is_none());
}

#[test]
fn empty_body_and_tag_are_accepted() {
    let mut repo = MemoryNoteRepository::new().with_rng_seed(4);
    let uid = repo.add_note("", "").unwrap();

    let note = repo.get_note(uid).unwrap();
    assert_eq!(note.body, "");
    assert_eq!(note.tag, "");
}

#[test]
fn delete_by_id_removes_exactly_one_note() {
    let mut repo = MemoryNoteRepository::new().with_rng_seed(5);
    let kept = repo.add_note("kept", "a").unwrap();
    let removed = repo.add_note("removed", "b").unwrap();

    let outcome = repo.delete_by_id(removed);
    assert!(matches!(outcome, DeleteOutcome::Deleted { uid, .. } if uid == removed));
    assert_eq!(repo.len(), 1);
    assert!(repo.get_note(removed).is_none());
    assert!(repo.get_note(kept).is_some());
}

#[test]
fn delete_by_id_unknown_uid_leaves_store_unchanged() {
    let mut repo = MemoryNoteRepository::new().with_rng_seed(6);
    repo.add_note("first", "a").unwrap();
    repo.add_note("second", "b").unwrap();

    let outcome = repo.delete_by_id(unused_uid(&repo));
    assert_eq!(outcome, DeleteOutcome::NotFound);
    assert_eq!(repo.len(), 2);
}

#[test]
fn delete_by_id_reports_whether_head_was_removed() {
    let mut repo = MemoryNoteRepository::new().with_rng_seed(8);
    let first = repo.add_note("first", "a").unwrap();
    let second = repo.add_note("second", "b").unwrap();

    assert_eq!(
        repo.delete_by_id(second),
        DeleteOutcome::Deleted {
            uid: second,
            was_first: false
        }
    );
    assert_eq!(
        repo.delete_by_id(first),
        DeleteOutcome::Deleted {
            uid: first,
            was_first: true
        }
    );
}

#[test]
fn delete_by_tag_removes_only_first_match() {
    let mut repo = MemoryNoteRepository::new().with_rng_seed(9);
    let first = repo.add_note("first errand", "errand").unwrap();
    let second = repo.add_note("second errand", "errand").unwrap();
    let third = repo.add_note("third errand", "errand").unwrap();

    let outcome = repo.delete_by_tag("errand");
    assert_eq!(
        outcome,
        DeleteOutcome::Deleted {
            uid: first,
            was_first: true
        }
    );
    assert_eq!(repo.len(), 2);
    assert!(repo.get_note(second).is_some());
    assert!(repo.get_note(third).is_some());
}

#[test]
fn delete_by_tag_unknown_tag_reports_not_found() {
    let mut repo = MemoryNoteRepository::new().with_rng_seed(10);
    repo.add_note("note", "present").unwrap();

    assert_eq!(repo.delete_by_tag("absent"), DeleteOutcome::NotFound);
    assert_eq!(repo.len(), 1);
}

#[test]
fn find_by_tag_preserves_insertion_order() {
    let mut repo = MemoryNoteRepository::new().with_rng_seed(11);
    let first = repo.add_note("one", "shared").unwrap();
    repo.add_note("other", "different").unwrap();
    let second = repo.add_note("two", "shared").unwrap();
    let third = repo.add_note("three", "shared").unwrap();

    let found = repo.find_by_tag("shared");
    let uids: Vec<u32> = found.iter().map(|note| note.uid).collect();
    assert_eq!(uids, vec![first, second, third]);
}

#[test]
fn find_by_tag_is_exact_and_case_sensitive() {
    let mut repo = MemoryNoteRepository::new().with_rng_seed(12);
    repo.add_note("upper", "Work").unwrap();
    repo.add_note("lower", "work").unwrap();

    let found = repo.find_by_tag("work");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].body, "lower");
    assert!(repo.find_by_tag("wor").is_empty());
}

#[test]
fn list_notes_reflects_insertion_order_and_size() {
    let mut repo = MemoryNoteRepository::new().with_rng_seed(13);
    assert!(repo.list_notes().is_empty());
    assert!(repo.is_empty());

    let first = repo.add_note("first", "a").unwrap();
    assert_eq!(repo.list_notes().len(), 1);

    let second = repo.add_note("second", "b").unwrap();
    let listed: Vec<u32> = repo.list_notes().iter().map(|note| note.uid).collect();
    assert_eq!(listed, vec![first, second]);
}

#[test]
fn deletion_keeps_remaining_notes_in_relative_order() {
    let mut repo = MemoryNoteRepository::new().with_rng_seed(14);
    let first = repo.add_note("first", "a").unwrap();
    let second = repo.add_note("second", "b").unwrap();
    let third = repo.add_note("third", "c").unwrap();

    repo.delete_by_id(second);
    let listed: Vec<u32> = repo.list_notes().iter().map(|note| note.uid).collect();
    assert_eq!(listed, vec![first, third]);
}

// The end-to-end scenario: two errands and one work note, deleted by tag
// and by id.
#[test]
fn errand_and_work_notes_follow_the_store_contract() {
    let mut repo = MemoryNoteRepository::new().with_rng_seed(15);
    let milk = repo.add_note("Buy milk", "errand").unwrap();
    let bob = repo.add_note("Call Bob", "errand").unwrap();
    let report = repo.add_note("Finish report", "work").unwrap();

    let errands: Vec<u32> = repo
        .find_by_tag("errand")
        .iter()
        .map(|note| note.uid)
        .collect();
    assert_eq!(errands, vec![milk, bob]);

    assert!(repo.delete_by_tag("errand").is_deleted());
    let remaining: Vec<u32> = repo
        .find_by_tag("errand")
        .iter()
        .map(|note| note.uid)
        .collect();
    assert_eq!(remaining, vec![bob]);

    assert!(repo.delete_by_id(report).is_deleted());
    assert!(repo.get_note(report).is_none());

    let size_before = repo.len();
    assert_eq!(repo.delete_by_id(unused_uid(&repo)), DeleteOutcome::NotFound);
    assert_eq!(repo.len(), size_before);
}

#[test]
fn uid_allocation_reports_exhaustion_when_space_is_saturated() {
    let mut repo = MemoryNoteRepository::with_uid_range(1, 3).with_rng_seed(16);
    for index in 0..3 {
        repo.add_note(&format!("note {index}"), "fill").unwrap();
    }

    let err = repo.add_note("overflow", "fill").unwrap_err();
    assert!(matches!(err, StoreError::UidExhausted { .. }));
    assert_eq!(repo.len(), 3, "failed add must not grow the store");
}
