use std::cell::RefCell;
use std::rc::Rc;

use bt_core::{Blackboard, GlobalHandle, Key, NodeId, Store};

const HEALTH: Key<i32> = Key::new(1);
const TARGET: Key<&'static str> = Key::new(2);

#[test]
fn child_scope_reads_through_parent_chain() {
    let mut bb = Blackboard::new();
    let mid = bb.create_child(Blackboard::ROOT);
    let leaf = bb.create_child(mid);

    bb.set(Blackboard::ROOT, HEALTH, 80);
    bb.set(mid, TARGET, "door");

    assert_eq!(bb.get(leaf, HEALTH), Some(&80));
    assert_eq!(bb.get(leaf, TARGET), Some(&"door"));
    assert_eq!(bb.get(mid, HEALTH), Some(&80));
}

#[test]
fn local_write_shadows_parent_without_mutating_it() {
    let mut bb = Blackboard::new();
    let child = bb.create_child(Blackboard::ROOT);

    bb.set(Blackboard::ROOT, HEALTH, 80);
    bb.set(child, HEALTH, 10);

    assert_eq!(bb.get(child, HEALTH), Some(&10));
    assert_eq!(bb.get(Blackboard::ROOT, HEALTH), Some(&80));
}

#[test]
fn sibling_scopes_do_not_see_each_other() {
    let mut bb = Blackboard::new();
    let left = bb.create_child(Blackboard::ROOT);
    let right = bb.create_child(Blackboard::ROOT);

    bb.set(left, HEALTH, 1);

    assert_eq!(bb.get(right, HEALTH), None);
    assert_eq!(bb.get(Blackboard::ROOT, HEALTH), None);
}

#[test]
fn remove_is_local_only() {
    let mut bb = Blackboard::new();
    let child = bb.create_child(Blackboard::ROOT);

    bb.set(Blackboard::ROOT, HEALTH, 80);

    assert_eq!(bb.remove(child, HEALTH), None);
    assert_eq!(bb.get(child, HEALTH), Some(&80));
    assert_eq!(bb.remove(Blackboard::ROOT, HEALTH), Some(80));
    assert_eq!(bb.get(child, HEALTH), None);
}

#[test]
fn get_mut_writes_into_the_owning_scope() {
    let mut bb = Blackboard::new();
    let child = bb.create_child(Blackboard::ROOT);

    bb.set(Blackboard::ROOT, HEALTH, 1);
    if let Some(value) = bb.get_mut(child, HEALTH) {
        *value += 1;
    }

    assert_eq!(bb.get(Blackboard::ROOT, HEALTH), Some(&2));
}

#[test]
fn open_set_tracks_per_node_activations() {
    let mut bb = Blackboard::new();
    let a = NodeId::new(3);
    let b = NodeId::new(7);

    assert!(!bb.is_open(a));
    bb.mark_open(a);
    bb.mark_open(b);
    assert!(bb.is_open(a));
    assert_eq!(bb.open_count(), 2);

    assert!(bb.clear_open(a));
    assert!(!bb.clear_open(a));
    assert_eq!(bb.open_count(), 1);
}

#[test]
fn global_store_is_shared_between_blackboards() {
    let a = Blackboard::new();
    let b = Blackboard::new();

    a.set_global(HEALTH, 5);

    assert_eq!(b.get_global(HEALTH), Some(5));
}

#[test]
fn explicit_global_handle_isolates_trees() {
    let handle: GlobalHandle = Rc::new(RefCell::new(Store::new()));
    let isolated = Blackboard::with_global(Rc::clone(&handle));
    let shared = Blackboard::new();

    isolated.set_global(HEALTH, 5);

    assert_eq!(shared.get_global(HEALTH), None);
    assert_eq!(isolated.get_global(HEALTH), Some(5));
}

#[test]
#[should_panic(expected = "store type mismatch")]
fn key_type_mismatch_panics() {
    let mut store = Store::new();
    store.set(Key::<i32>::new(9), 1);
    let _ = store.get(Key::<f32>::new(9));
}
