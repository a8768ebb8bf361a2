//! Tooling primitives for the behavior-tree engine: blackboard-routed trace
//! events and inert editor metadata.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod meta;
pub mod trace;

pub use meta::{DescriptorRegistry, NodeDescriptor, ParamDescriptor, ParamKind};
pub use trace::{
    emit, NullTraceSink, TraceEvent, TraceLog, TraceSink, VecTraceSink, TRACE_LOG, TRACE_SINK,
};
