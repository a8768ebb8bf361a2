//! Behavior-tree engine built on `bt-core`.
//!
//! A static tree of decision nodes is evaluated once per external tick.
//! Long-running branches report [`Status::Running`] and resume exactly
//! where they suspended on the next tick; per-activation memory lives in
//! the scoped blackboard, not in node fields, and abandonment cleanup is
//! total: once a parent stops selecting a child, no descendant of that
//! child is left open.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

mod composite;
mod decorator;
pub mod leaf;
mod node;
pub mod registry;
pub mod tree;

pub use leaf::{Action, Predicate};
pub use node::Node;
pub use registry::{BuildError, NodeConfig, Props, Registry};
pub use tree::BehaviorTree;

pub use bt_core::{BbScope, BbView, Blackboard, Key, NodeId, ScopeId, Status, TickContext};
