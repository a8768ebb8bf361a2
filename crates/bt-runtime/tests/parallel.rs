//! Parallel family: totality, cached terminal slots, stranded-child cleanup.

use bt_runtime::{Action, BbScope, BehaviorTree, Node, Status, TickContext};

#[derive(Default)]
struct Probe {
    invoked: Vec<&'static str>,
    closed: Vec<&'static str>,
}

struct Script {
    name: &'static str,
    statuses: Vec<Status>,
    cursor: usize,
}

impl Action<Probe> for Script {
    fn tick(&mut self, _ctx: &TickContext, entity: &mut Probe, _bb: BbScope<'_>) -> Status {
        entity.invoked.push(self.name);
        let index = self.cursor.min(self.statuses.len() - 1);
        self.cursor += 1;
        self.statuses[index]
    }

    fn close(&mut self, _ctx: &TickContext, entity: &mut Probe, _bb: BbScope<'_>) {
        entity.closed.push(self.name);
    }
}

fn leaf(name: &'static str, statuses: Vec<Status>) -> Node<Probe> {
    Node::action(Script {
        name,
        statuses,
        cursor: 0,
    })
}

#[test]
fn parallel_visits_every_child_and_any_failure_wins() {
    let root = Node::parallel(vec![
        leaf("f", vec![Status::Failure]),
        leaf("r", vec![Status::Running]),
        leaf("s", vec![Status::Success]),
    ]);
    let mut tree = BehaviorTree::new(root, Probe::default());

    // No short-circuit: the failing first child does not spare the rest.
    assert_eq!(tree.tick(0.1), Status::Failure);
    assert_eq!(tree.entity().invoked, ["f", "r", "s"]);

    // The stranded running child was force-closed after the aggregate.
    assert_eq!(tree.entity().closed, ["f", "s", "r"]);
    assert_eq!(tree.blackboard().open_count(), 0);
}

#[test]
fn parallel_does_not_reinvoke_terminal_children() {
    let root = Node::parallel(vec![
        leaf("a", vec![Status::Success]),
        leaf("b", vec![Status::Running, Status::Running, Status::Success]),
    ]);
    let mut tree = BehaviorTree::new(root, Probe::default());

    assert_eq!(tree.tick(0.1), Status::Running);
    assert_eq!(tree.tick(0.1), Status::Running);
    assert_eq!(tree.tick(0.1), Status::Success);
    // `a` finished on the first tick and is never polled again.
    assert_eq!(tree.entity().invoked, ["a", "b", "b", "b"]);
    assert_eq!(tree.blackboard().open_count(), 0);

    // Re-open starts a fresh activation with every slot live again.
    assert_eq!(tree.tick(0.1), Status::Success);
    assert_eq!(tree.entity().invoked, ["a", "b", "b", "b", "a", "b"]);
}

#[test]
fn parallel_runs_while_any_child_runs() {
    let root = Node::parallel(vec![
        leaf("a", vec![Status::Success]),
        leaf("b", vec![Status::Running, Status::Success]),
    ]);
    let mut tree = BehaviorTree::new(root, Probe::default());

    assert_eq!(tree.tick(0.1), Status::Running);
    assert_eq!(tree.tick(0.1), Status::Success);
}

#[test]
fn parallel_any_succeeds_on_first_success() {
    let root = Node::parallel_any(vec![
        leaf("f", vec![Status::Failure]),
        leaf("s", vec![Status::Success]),
    ]);
    let mut tree = BehaviorTree::new(root, Probe::default());

    assert_eq!(tree.tick(0.1), Status::Success);
    assert_eq!(tree.entity().invoked, ["f", "s"]);
}

#[test]
fn parallel_any_fails_only_when_all_fail() {
    let root = Node::parallel_any(vec![
        leaf("a", vec![Status::Failure]),
        leaf("b", vec![Status::Failure]),
    ]);
    let mut tree = BehaviorTree::new(root, Probe::default());

    assert_eq!(tree.tick(0.1), Status::Failure);
}

#[test]
fn parallel_any_keeps_waiting_on_a_running_child() {
    let root = Node::parallel_any(vec![
        leaf("f", vec![Status::Failure]),
        leaf("r", vec![Status::Running, Status::Success]),
    ]);
    let mut tree = BehaviorTree::new(root, Probe::default());

    assert_eq!(tree.tick(0.1), Status::Running);
    // The failed slot stays cached; only the running one is polled again.
    assert_eq!(tree.tick(0.1), Status::Success);
    assert_eq!(tree.entity().invoked, ["f", "r", "r"]);
    assert_eq!(tree.blackboard().open_count(), 0);
}
