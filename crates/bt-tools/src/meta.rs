//! Inert editor metadata for node kinds.
//!
//! Display names, groups, and parameter schemas for a visual authoring
//! layer. The runtime never consults this registry; the engine compiles and
//! runs correctly with zero metadata present.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Int,
    Float,
    Bool,
    String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParamDescriptor {
    pub name: &'static str,
    pub kind: ParamKind,
    pub desc: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodeDescriptor {
    pub name: &'static str,
    pub group: &'static str,
    pub desc: &'static str,
    pub params: Vec<ParamDescriptor>,
}

impl NodeDescriptor {
    pub fn new(name: &'static str, group: &'static str, desc: &'static str) -> Self {
        Self {
            name,
            group,
            desc,
            params: Vec::new(),
        }
    }

    pub fn with_param(mut self, name: &'static str, kind: ParamKind, desc: &'static str) -> Self {
        self.params.push(ParamDescriptor { name, kind, desc });
        self
    }
}

/// Static lookup from node kind name to its editor descriptor.
#[derive(Debug, Default)]
pub struct DescriptorRegistry {
    entries: BTreeMap<&'static str, NodeDescriptor>,
}

impl DescriptorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the builtin node set.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();

        registry.register(
            "Sequence",
            NodeDescriptor::new(
                "Sequence",
                "composites",
                "Runs children left to right; fails on the first failure, succeeds when all do",
            ),
        );
        registry.register(
            "Selector",
            NodeDescriptor::new(
                "Selector",
                "composites",
                "Runs children left to right; succeeds on the first success, fails when all fail",
            ),
        );
        registry.register(
            "Parallel",
            NodeDescriptor::new(
                "Parallel",
                "composites",
                "Visits every child each tick; any failure fails the whole node",
            ),
        );
        registry.register(
            "ParallelAny",
            NodeDescriptor::new(
                "ParallelAny",
                "composites",
                "Visits every child each tick; any success succeeds the whole node",
            ),
        );
        registry.register(
            "Random",
            NodeDescriptor::new(
                "Random",
                "composites",
                "Picks one child by weight per activation and returns its status",
            ),
        );
        registry.register(
            "Inverter",
            NodeDescriptor::new("Inverter", "decorators", "Swaps success and failure"),
        );
        registry.register(
            "LimitTime",
            NodeDescriptor::new("LimitTime", "decorators", "Fails once the time budget runs out")
                .with_param("max_seconds", ParamKind::Float, "time budget in seconds"),
        );
        registry.register(
            "LimitTicks",
            NodeDescriptor::new(
                "LimitTicks",
                "decorators",
                "Fails once the child has completed the configured number of runs",
            )
            .with_param("max", ParamKind::Int, "completed child runs allowed"),
        );
        registry.register(
            "Repeat",
            NodeDescriptor::new("Repeat", "decorators", "Re-runs the child a fixed number of times")
                .with_param("max", ParamKind::Int, "repeat count, at least 1"),
        );
        registry.register(
            "UntilFailure",
            NodeDescriptor::new(
                "UntilFailure",
                "decorators",
                "Re-runs the child until it fails, bounded by a retry budget",
            )
            .with_param("max", ParamKind::Int, "retry budget, at least 1"),
        );
        registry.register(
            "UntilSuccess",
            NodeDescriptor::new(
                "UntilSuccess",
                "decorators",
                "Re-runs the child until it succeeds, bounded by a retry budget",
            )
            .with_param("max", ParamKind::Int, "retry budget, at least 1"),
        );
        registry.register(
            "Weight",
            NodeDescriptor::new(
                "Weight",
                "decorators",
                "Transparent wrapper carrying a weight for a Random parent",
            )
            .with_param("weight", ParamKind::Int, "selection weight, at least 1"),
        );

        registry
    }

    pub fn register(&mut self, kind: &'static str, descriptor: NodeDescriptor) {
        self.entries.insert(kind, descriptor);
    }

    pub fn lookup(&self, kind: &str) -> Option<&NodeDescriptor> {
        self.entries.get(kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }
}
