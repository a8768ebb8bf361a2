use bt_core::{BbScope, BbView, Blackboard, NodeId, ScopeId, Status, TickContext};
use bt_tools::{emit, TraceEvent};

use crate::composite::Composite;
use crate::decorator::Decorator;
use crate::leaf::{Action, Predicate};

/// One node of a built tree.
///
/// Nodes form a strict tree: every child is uniquely owned by its parent,
/// no sharing, no cycles. Structure is fixed at construction; identity and
/// blackboard scope are bound once when the owning [`crate::BehaviorTree`]
/// initializes the tree.
pub struct Node<E> {
    pub(crate) id: NodeId,
    pub(crate) scope: ScopeId,
    pub(crate) kind: Kind<E>,
}

impl<E> std::fmt::Debug for Node<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match &self.kind {
            Kind::Action(_) => "Action",
            Kind::Condition(_) => "Condition",
            Kind::Decorator(..) => "Decorator",
            Kind::Composite(..) => "Composite",
        };
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("scope", &self.scope)
            .field("kind", &kind)
            .finish()
    }
}

pub(crate) enum Kind<E> {
    Action(Box<dyn Action<E>>),
    Condition(Box<dyn Predicate<E>>),
    Decorator(Decorator<E>, Box<Node<E>>),
    Composite(Composite, Vec<Node<E>>),
}

impl<E: 'static> Node<E> {
    fn with_kind(kind: Kind<E>) -> Self {
        Self {
            id: NodeId::new(0),
            scope: Blackboard::ROOT,
            kind,
        }
    }

    pub fn action(action: impl Action<E>) -> Self {
        Self::with_kind(Kind::Action(Box::new(action)))
    }

    pub fn condition(predicate: impl Predicate<E>) -> Self {
        Self::with_kind(Kind::Condition(Box::new(predicate)))
    }

    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn sequence(children: Vec<Node<E>>) -> Self {
        assert!(!children.is_empty(), "Sequence must have at least one child");
        Self::with_kind(Kind::Composite(Composite::Sequence, children))
    }

    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn selector(children: Vec<Node<E>>) -> Self {
        assert!(!children.is_empty(), "Selector must have at least one child");
        Self::with_kind(Kind::Composite(Composite::Selector, children))
    }

    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn parallel(children: Vec<Node<E>>) -> Self {
        assert!(!children.is_empty(), "Parallel must have at least one child");
        Self::with_kind(Kind::Composite(Composite::Parallel, children))
    }

    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn parallel_any(children: Vec<Node<E>>) -> Self {
        assert!(
            !children.is_empty(),
            "ParallelAny must have at least one child"
        );
        Self::with_kind(Kind::Composite(Composite::ParallelAny, children))
    }

    /// Weighted random pick. Child weights come from [`Node::weighted`]
    /// wrappers (default 1); the cumulative table is fixed at
    /// initialization.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn random(children: Vec<Node<E>>) -> Self {
        assert!(!children.is_empty(), "Random must have at least one child");
        Self::with_kind(Kind::Composite(
            Composite::Random {
                cumulative: Vec::new(),
            },
            children,
        ))
    }

    pub fn inverter(child: Node<E>) -> Self {
        Self::with_kind(Kind::Decorator(Decorator::Inverter, Box::new(child)))
    }

    /// Condition gate: re-evaluates `predicate` every tick and only
    /// delegates to `child` while it holds; when it stops holding, the
    /// child subtree is force-closed and the gate fails.
    pub fn gate(predicate: impl Predicate<E>, child: Node<E>) -> Self {
        Self::with_kind(Kind::Decorator(
            Decorator::Gate(Box::new(predicate)),
            Box::new(child),
        ))
    }

    pub fn limit_time(max_seconds: f32, child: Node<E>) -> Self {
        Self::with_kind(Kind::Decorator(
            Decorator::LimitTime {
                max_seconds,
                elapsed: 0.0,
            },
            Box::new(child),
        ))
    }

    pub fn limit_ticks(max: u32, child: Node<E>) -> Self {
        Self::with_kind(Kind::Decorator(
            Decorator::LimitTicks { max, completed: 0 },
            Box::new(child),
        ))
    }

    /// # Panics
    ///
    /// Panics if `max` is zero.
    pub fn repeat(max: u32, child: Node<E>) -> Self {
        assert!(max >= 1, "Repeat count must be at least 1");
        Self::with_kind(Kind::Decorator(
            Decorator::Repeat { max, completed: 0 },
            Box::new(child),
        ))
    }

    /// # Panics
    ///
    /// Panics if `max` is zero.
    pub fn until_failure(max: u32, child: Node<E>) -> Self {
        assert!(max >= 1, "UntilFailure retry budget must be at least 1");
        Self::with_kind(Kind::Decorator(
            Decorator::UntilFailure { max, successes: 0 },
            Box::new(child),
        ))
    }

    /// # Panics
    ///
    /// Panics if `max` is zero.
    pub fn until_success(max: u32, child: Node<E>) -> Self {
        assert!(max >= 1, "UntilSuccess retry budget must be at least 1");
        Self::with_kind(Kind::Decorator(
            Decorator::UntilSuccess { max, failures: 0 },
            Box::new(child),
        ))
    }

    /// Transparent wrapper carrying a selection weight for a
    /// [`Node::random`] parent.
    ///
    /// # Panics
    ///
    /// Panics if `weight` is zero.
    pub fn weighted(weight: u32, child: Node<E>) -> Self {
        assert!(weight >= 1, "Weight must be at least 1");
        Self::with_kind(Kind::Decorator(Decorator::Weight(weight), Box::new(child)))
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Binds identity and scope, once, in preorder. Composites mint a
    /// private child scope; every other node inherits its parent's.
    pub(crate) fn initialize(
        &mut self,
        bb: &mut Blackboard,
        parent_scope: ScopeId,
        next_id: &mut u32,
    ) {
        self.id = NodeId::new(*next_id);
        *next_id += 1;

        self.scope = match &self.kind {
            Kind::Composite(..) => bb.create_child(parent_scope),
            _ => parent_scope,
        };

        let scope = self.scope;
        match &mut self.kind {
            Kind::Decorator(_, child) => child.initialize(bb, scope, next_id),
            Kind::Composite(composite, children) => {
                for child in children.iter_mut() {
                    child.initialize(bb, scope, next_id);
                }
                composite.bind(children);
            }
            Kind::Action(_) | Kind::Condition(_) => {}
        }
    }

    /// Lifecycle entry point: the only way a parent runs a child.
    ///
    /// Re-entrancy is explicit here: an already-open node skips `open` and
    /// keeps the state established on first entry; any terminal status
    /// closes the node so the next activation starts fresh.
    pub fn execute(&mut self, ctx: &TickContext, entity: &mut E, bb: &mut Blackboard) -> Status {
        if !bb.is_open(self.id) {
            bb.mark_open(self.id);
            self.open(ctx, entity, bb);
            emit(
                bb,
                TraceEvent::new(ctx.tick, "bt.node.open").with_a(self.id.stable_id()),
            );
        }

        let status = self.tick(ctx, entity, bb);

        if !status.is_running() {
            bb.clear_open(self.id);
            self.close(ctx, entity, bb);
            emit(
                bb,
                TraceEvent::new(ctx.tick, "bt.node.close")
                    .with_a(self.id.stable_id())
                    .with_b(status.code()),
            );
        }
        status
    }

    /// Abandonment cleanup: closes every open node in this subtree,
    /// children first, so nothing is left open once a parent stops
    /// selecting this branch.
    pub(crate) fn force_close(&mut self, ctx: &TickContext, entity: &mut E, bb: &mut Blackboard) {
        match &mut self.kind {
            Kind::Decorator(_, child) => child.force_close(ctx, entity, bb),
            Kind::Composite(_, children) => {
                for child in children.iter_mut() {
                    child.force_close(ctx, entity, bb);
                }
            }
            Kind::Action(_) | Kind::Condition(_) => {}
        }

        if bb.clear_open(self.id) {
            self.close(ctx, entity, bb);
            emit(
                bb,
                TraceEvent::new(ctx.tick, "bt.node.abort").with_a(self.id.stable_id()),
            );
        }
    }

    pub(crate) fn weight(&self) -> u32 {
        match &self.kind {
            Kind::Decorator(Decorator::Weight(weight), _) => *weight,
            _ => 1,
        }
    }

    fn open(&mut self, ctx: &TickContext, entity: &mut E, bb: &mut Blackboard) {
        let scope = self.scope;
        match &mut self.kind {
            Kind::Action(action) => action.open(ctx, entity, BbScope::new(bb, scope)),
            Kind::Condition(_) => {}
            Kind::Decorator(decorator, _) => decorator.open(),
            Kind::Composite(composite, children) => composite.open(bb, scope, children.len()),
        }
    }

    fn tick(&mut self, ctx: &TickContext, entity: &mut E, bb: &mut Blackboard) -> Status {
        let scope = self.scope;
        let id = self.id;
        match &mut self.kind {
            Kind::Action(action) => action.tick(ctx, entity, BbScope::new(bb, scope)),
            Kind::Condition(predicate) => {
                if predicate.is_eligible(ctx, entity, BbView::new(bb, scope)) {
                    Status::Success
                } else {
                    Status::Failure
                }
            }
            Kind::Decorator(decorator, child) => decorator.tick(ctx, entity, bb, scope, child),
            Kind::Composite(composite, children) => {
                composite.tick(ctx, entity, bb, scope, id, children)
            }
        }
    }

    fn close(&mut self, ctx: &TickContext, entity: &mut E, bb: &mut Blackboard) {
        let scope = self.scope;
        match &mut self.kind {
            Kind::Action(action) => action.close(ctx, entity, BbScope::new(bb, scope)),
            // Composite and decorator activation memory is reset by `open`
            // on the next entry; nothing to tear down here.
            Kind::Condition(_) | Kind::Decorator(..) | Kind::Composite(..) => {}
        }
    }
}
