//! Weighted random selection: distribution, determinism, and memoization.

use bt_runtime::{BbScope, BehaviorTree, Node, Status, TickContext};

#[derive(Default)]
struct Counts {
    a: u32,
    b: u32,
}

fn counting_tree(seed: u64) -> BehaviorTree<Counts> {
    let root = Node::random(vec![
        Node::weighted(
            1,
            Node::action(|_: &TickContext, entity: &mut Counts, _: BbScope<'_>| {
                entity.a += 1;
                Status::Success
            }),
        ),
        Node::weighted(
            3,
            Node::action(|_: &TickContext, entity: &mut Counts, _: BbScope<'_>| {
                entity.b += 1;
                Status::Success
            }),
        ),
    ]);
    BehaviorTree::new(root, Counts::default()).with_seed(seed)
}

#[test]
fn draw_frequencies_follow_the_weights() {
    const TICKS: u32 = 100_000;
    let mut tree = counting_tree(0x5EED_CAFE);
    for _ in 0..TICKS {
        tree.tick(0.016);
    }

    let counts = tree.entity();
    assert_eq!(counts.a + counts.b, TICKS);
    // Weight 3 of 4: expected share 0.75, generous tolerance for the RNG.
    let share = counts.b as f64 / TICKS as f64;
    assert!((0.73..0.77).contains(&share), "weighted share off: {share}");
}

#[test]
fn same_seed_reproduces_the_same_pick_sequence() {
    let mut left = counting_tree(1234);
    let mut right = counting_tree(1234);
    for _ in 0..1000 {
        left.tick(0.016);
        right.tick(0.016);
    }
    assert_eq!(left.entity().a, right.entity().a);
    assert_eq!(left.entity().b, right.entity().b);
}

fn pick_sequence(seed: u64, ticks: usize) -> Vec<u8> {
    let root = Node::random(vec![
        Node::action(|_: &TickContext, picks: &mut Vec<u8>, _: BbScope<'_>| {
            picks.push(0);
            Status::Success
        }),
        Node::action(|_: &TickContext, picks: &mut Vec<u8>, _: BbScope<'_>| {
            picks.push(1);
            Status::Success
        }),
    ]);
    let mut tree = BehaviorTree::new(root, Vec::new()).with_seed(seed);
    for _ in 0..ticks {
        tree.tick(0.016);
    }
    tree.entity().clone()
}

#[test]
fn different_seeds_diverge() {
    assert_ne!(pick_sequence(1, 256), pick_sequence(2, 256));
}

#[derive(Default)]
struct Memo {
    polls: u32,
}

#[test]
fn running_pick_is_memoized_until_terminal() {
    let root = Node::random(vec![Node::action(
        |_: &TickContext, entity: &mut Memo, _: BbScope<'_>| {
            entity.polls += 1;
            if entity.polls % 3 == 0 {
                Status::Success
            } else {
                Status::Running
            }
        },
    )]);
    let mut tree = BehaviorTree::new(root, Memo::default()).with_seed(7);

    // One activation spans three ticks; the pick is held while running.
    assert_eq!(tree.tick(0.1), Status::Running);
    assert_eq!(tree.tick(0.1), Status::Running);
    assert_eq!(tree.tick(0.1), Status::Success);
    assert_eq!(tree.entity().polls, 3);
    assert_eq!(tree.blackboard().open_count(), 0);
}
