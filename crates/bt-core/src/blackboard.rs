use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use crate::{Key, Store};

/// Identity of a node within one tree, assigned in preorder when the tree
/// is initialized. Unique per tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(u32);

impl NodeId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Stable numeric id for seeding and trace payloads.
    pub fn stable_id(self) -> u64 {
        self.0 as u64
    }
}

/// Index of a scope in the blackboard arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScopeId(u32);

impl ScopeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Shared handle to a global store.
pub type GlobalHandle = Rc<RefCell<Store>>;

thread_local! {
    static GLOBAL: GlobalHandle = Rc::new(RefCell::new(Store::new()));
}

/// The process-wide global store. Created once, lives for the process, and
/// is shared by every tree built with [`Blackboard::new`]. A single logical
/// driver thread is assumed; there is no locking.
pub fn global_store() -> GlobalHandle {
    GLOBAL.with(Rc::clone)
}

struct Scope {
    values: Store,
    parent: Option<ScopeId>,
}

/// Hierarchical key/value storage for one tree.
///
/// A scope arena with parent-chain lookup: writes always land in the local
/// scope, reads fall back through the parent chain to the root. Each
/// composite node owns a private child scope, which is what keeps one
/// composite's bookkeeping keys from colliding with a sibling's.
///
/// The blackboard also tracks the open-set: which nodes currently have an
/// unfinished (`Running`) activation pending resumption. Node ids are
/// unique per tree, so a single tree-wide set is equivalent to per-scope
/// maps while making total cleanup checkable via [`Blackboard::open_count`].
pub struct Blackboard {
    scopes: Vec<Scope>,
    open: BTreeSet<NodeId>,
    global: GlobalHandle,
}

impl Blackboard {
    /// The tree-root scope. Always present; the terminal authority for
    /// `get_root`/`set_root`.
    pub const ROOT: ScopeId = ScopeId(0);

    pub fn new() -> Self {
        Self::with_global(global_store())
    }

    /// Build with an explicit global store handle, e.g. to isolate tests or
    /// share a store across a chosen subset of trees.
    pub fn with_global(global: GlobalHandle) -> Self {
        Self {
            scopes: vec![Scope {
                values: Store::new(),
                parent: None,
            }],
            open: BTreeSet::new(),
            global,
        }
    }

    /// Mints a new scope beneath `parent`. The child sees the parent's
    /// values through chained lookup; the parent never sees the child's.
    pub fn create_child(&mut self, parent: ScopeId) -> ScopeId {
        let id = ScopeId(self.scopes.len() as u32);
        self.scopes.push(Scope {
            values: Store::new(),
            parent: Some(parent),
        });
        id
    }

    /// Local write. Never writes through to a parent scope.
    pub fn set<T: 'static>(&mut self, scope: ScopeId, key: Key<T>, value: T) {
        self.scopes[scope.index()].values.set(key, value);
    }

    /// Local read first, then the parent chain up to the root.
    pub fn get<T: 'static>(&self, scope: ScopeId, key: Key<T>) -> Option<&T> {
        let owner = self.resolve(scope, key)?;
        self.scopes[owner.index()].values.get(key)
    }

    pub fn get_mut<T: 'static>(&mut self, scope: ScopeId, key: Key<T>) -> Option<&mut T> {
        let owner = self.resolve(scope, key)?;
        self.scopes[owner.index()].values.get_mut(key)
    }

    /// Removes a value from the local scope only.
    pub fn remove<T: 'static>(&mut self, scope: ScopeId, key: Key<T>) -> Option<T> {
        self.scopes[scope.index()].values.remove(key)
    }

    pub fn set_root<T: 'static>(&mut self, key: Key<T>, value: T) {
        self.set(Self::ROOT, key, value);
    }

    pub fn get_root<T: 'static>(&self, key: Key<T>) -> Option<&T> {
        self.scopes[Self::ROOT.index()].values.get(key)
    }

    pub fn set_global<T: 'static>(&self, key: Key<T>, value: T) {
        self.global.borrow_mut().set(key, value);
    }

    pub fn get_global<T: 'static + Clone>(&self, key: Key<T>) -> Option<T> {
        self.global.borrow().get(key).cloned()
    }

    pub fn global(&self) -> GlobalHandle {
        Rc::clone(&self.global)
    }

    pub fn is_open(&self, id: NodeId) -> bool {
        self.open.contains(&id)
    }

    pub fn mark_open(&mut self, id: NodeId) {
        self.open.insert(id);
    }

    /// Returns whether the node was open.
    pub fn clear_open(&mut self, id: NodeId) -> bool {
        self.open.remove(&id)
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    fn resolve<T: 'static>(&self, scope: ScopeId, key: Key<T>) -> Option<ScopeId> {
        let mut cursor = Some(scope);
        while let Some(current) = cursor {
            let entry = &self.scopes[current.index()];
            if entry.values.contains(key) {
                return Some(current);
            }
            cursor = entry.parent;
        }
        None
    }
}

impl Default for Blackboard {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared blackboard view pinned to one node's scope.
pub struct BbView<'a> {
    bb: &'a Blackboard,
    scope: ScopeId,
}

impl<'a> BbView<'a> {
    pub fn new(bb: &'a Blackboard, scope: ScopeId) -> Self {
        Self { bb, scope }
    }

    pub fn get<T: 'static>(&self, key: Key<T>) -> Option<&T> {
        self.bb.get(self.scope, key)
    }

    pub fn get_root<T: 'static>(&self, key: Key<T>) -> Option<&T> {
        self.bb.get_root(key)
    }

    pub fn get_global<T: 'static + Clone>(&self, key: Key<T>) -> Option<T> {
        self.bb.get_global(key)
    }
}

/// Mutable blackboard view pinned to one node's scope.
pub struct BbScope<'a> {
    bb: &'a mut Blackboard,
    scope: ScopeId,
}

impl<'a> BbScope<'a> {
    pub fn new(bb: &'a mut Blackboard, scope: ScopeId) -> Self {
        Self { bb, scope }
    }

    pub fn get<T: 'static>(&self, key: Key<T>) -> Option<&T> {
        self.bb.get(self.scope, key)
    }

    pub fn get_mut<T: 'static>(&mut self, key: Key<T>) -> Option<&mut T> {
        self.bb.get_mut(self.scope, key)
    }

    pub fn set<T: 'static>(&mut self, key: Key<T>, value: T) {
        self.bb.set(self.scope, key, value);
    }

    pub fn get_root<T: 'static>(&self, key: Key<T>) -> Option<&T> {
        self.bb.get_root(key)
    }

    pub fn set_root<T: 'static>(&mut self, key: Key<T>, value: T) {
        self.bb.set_root(key, value);
    }

    pub fn get_global<T: 'static + Clone>(&self, key: Key<T>) -> Option<T> {
        self.bb.get_global(key)
    }

    pub fn set_global<T: 'static>(&self, key: Key<T>, value: T) {
        self.bb.set_global(key, value);
    }
}
