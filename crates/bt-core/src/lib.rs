//! Deterministic kernel primitives for the behavior-tree engine.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod blackboard;
pub mod key;
pub mod rng;
pub mod status;
pub mod store;
pub mod tick;

pub use blackboard::{global_store, BbScope, BbView, Blackboard, GlobalHandle, NodeId, ScopeId};
pub use key::Key;
pub use rng::SplitMix64;
pub use status::Status;
pub use store::Store;
pub use tick::TickContext;
