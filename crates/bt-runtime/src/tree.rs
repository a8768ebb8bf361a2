use bt_core::{Blackboard, Status, TickContext};

use crate::node::Node;

/// Drives one node tree for one agent.
///
/// Owns the tree structure, the scoped blackboard, and the controlled
/// entity. Created once per agent, never shared across agents; the tree
/// structure is static for its whole life.
pub struct BehaviorTree<E> {
    root: Node<E>,
    blackboard: Blackboard,
    entity: E,
    tick: u64,
    seed: u64,
    last: Status,
}

impl<E: 'static> BehaviorTree<E> {
    pub fn new(root: Node<E>, entity: E) -> Self {
        Self::with_blackboard(root, entity, Blackboard::new())
    }

    /// Build with an explicit blackboard, e.g. to share a non-default
    /// global store or to pre-seed root-scope values (trace log, config).
    pub fn with_blackboard(mut root: Node<E>, entity: E, mut blackboard: Blackboard) -> Self {
        let mut next_id = 0;
        root.initialize(&mut blackboard, Blackboard::ROOT, &mut next_id);
        Self {
            root,
            blackboard,
            entity,
            tick: 0,
            seed: 0,
            last: Status::Running,
        }
    }

    /// Seed for the deterministic per-tick RNG used by weighted selection.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// One evaluation pass over the whole tree. The returned root status
    /// may be ignored; it is also retained for [`BehaviorTree::last_status`].
    pub fn tick(&mut self, dt_seconds: f32) -> Status {
        let ctx = TickContext {
            tick: self.tick,
            dt_seconds,
            seed: self.seed,
        };
        self.last = self.root.execute(&ctx, &mut self.entity, &mut self.blackboard);
        self.tick += 1;
        self.last
    }

    /// Deterministically closes every still-open branch, e.g. before
    /// dropping a tree whose last tick returned `Running`. After this,
    /// `blackboard().open_count()` is zero.
    pub fn halt(&mut self) {
        let ctx = TickContext {
            tick: self.tick,
            dt_seconds: 0.0,
            seed: self.seed,
        };
        self.root
            .force_close(&ctx, &mut self.entity, &mut self.blackboard);
    }

    pub fn last_status(&self) -> Status {
        self.last
    }

    pub fn entity(&self) -> &E {
        &self.entity
    }

    pub fn entity_mut(&mut self) -> &mut E {
        &mut self.entity
    }

    pub fn blackboard(&self) -> &Blackboard {
        &self.blackboard
    }

    pub fn blackboard_mut(&mut self) -> &mut Blackboard {
        &mut self.blackboard
    }
}
