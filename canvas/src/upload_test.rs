use super::*;

// =============================================================
// Begin / finish
// =============================================================

#[test]
fn new_set_is_empty() {
    let set = PendingSet::new();
    assert!(set.is_empty());
}

#[test]
fn begun_create_is_in_flight() {
    let mut set = PendingSet::new();
    let temp = Uuid::new_v4();
    set.begin(temp);
    assert!(set.is_in_flight(&temp));
}

#[test]
fn finish_resolves_an_in_flight_create_once() {
    let mut set = PendingSet::new();
    let temp = Uuid::new_v4();
    set.begin(temp);
    assert_eq!(set.finish(&temp), Finish::Resolve);
    assert_eq!(set.finish(&temp), Finish::Unknown);
    assert!(set.is_empty());
}

#[test]
fn finish_of_untracked_id_is_unknown() {
    let mut set = PendingSet::new();
    assert_eq!(set.finish(&Uuid::new_v4()), Finish::Unknown);
}

// =============================================================
// Cancellation
// =============================================================

#[test]
fn cancelled_create_discards_on_finish() {
    let mut set = PendingSet::new();
    let temp = Uuid::new_v4();
    set.begin(temp);
    assert!(set.cancel(&temp));
    assert!(!set.is_in_flight(&temp));
    assert_eq!(set.finish(&temp), Finish::Discard);
    assert!(set.is_empty());
}

#[test]
fn cancel_of_untracked_id_is_false() {
    let mut set = PendingSet::new();
    assert!(!set.cancel(&Uuid::new_v4()));
    assert!(set.is_empty());
}

#[test]
fn concurrent_creates_are_independent() {
    let mut set = PendingSet::new();
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    set.begin(a);
    set.begin(b);
    set.cancel(&a);
    assert_eq!(set.finish(&b), Finish::Resolve);
    assert_eq!(set.finish(&a), Finish::Discard);
}

// =============================================================
// Failure
// =============================================================

#[test]
fn failed_create_is_forgotten() {
    let mut set = PendingSet::new();
    let temp = Uuid::new_v4();
    set.begin(temp);
    set.fail(&temp);
    assert!(set.is_empty());
    assert_eq!(set.finish(&temp), Finish::Unknown);
}

#[test]
fn cancelled_create_that_fails_needs_no_cleanup() {
    let mut set = PendingSet::new();
    let temp = Uuid::new_v4();
    set.begin(temp);
    set.cancel(&temp);
    set.fail(&temp);
    assert!(set.is_empty());
}
