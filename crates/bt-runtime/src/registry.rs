//! Declarative tree construction.
//!
//! The engine core consumes only the resolved name-to-constructor lookup;
//! where configs come from (files, editors, the wire) is the caller's
//! concern. All structural misuse is rejected here, at build time, and
//! never surfaces as a runtime [`crate::Status`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::node::Node;

/// Serialized node record: `{ kind, properties, children }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeConfig {
    pub kind: String,
    #[serde(default)]
    pub properties: BTreeMap<String, Value>,
    #[serde(default)]
    pub children: Vec<NodeConfig>,
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("unknown node kind `{0}`")]
    UnknownKind(String),

    #[error("node kind `{kind}` expects {expected} children, got {got}")]
    BadArity {
        kind: String,
        expected: &'static str,
        got: usize,
    },

    #[error("bad property `{name}` for node kind `{kind}`: {reason}")]
    BadProperty {
        kind: String,
        name: &'static str,
        reason: String,
    },

    #[error("composite `{0}` has no children")]
    EmptyComposite(String),
}

/// Typed view over one node's property map.
pub struct Props<'a> {
    kind: &'a str,
    map: &'a BTreeMap<String, Value>,
}

impl<'a> Props<'a> {
    fn new(kind: &'a str, map: &'a BTreeMap<String, Value>) -> Self {
        Self { kind, map }
    }

    pub fn f32(&self, name: &'static str, default: f32) -> Result<f32, BuildError> {
        match self.map.get(name) {
            None => Ok(default),
            Some(value) => value.as_f64().map(|x| x as f32).ok_or_else(|| {
                BuildError::BadProperty {
                    kind: self.kind.to_string(),
                    name,
                    reason: format!("expected a number, got {value}"),
                }
            }),
        }
    }

    pub fn u32(&self, name: &'static str, default: u32) -> Result<u32, BuildError> {
        match self.map.get(name) {
            None => Ok(default),
            Some(value) => value
                .as_u64()
                .and_then(|x| u32::try_from(x).ok())
                .ok_or_else(|| BuildError::BadProperty {
                    kind: self.kind.to_string(),
                    name,
                    reason: format!("expected a non-negative integer, got {value}"),
                }),
        }
    }

    /// Like [`Props::u32`], additionally rejecting zero.
    pub fn u32_at_least_one(&self, name: &'static str, default: u32) -> Result<u32, BuildError> {
        let value = self.u32(name, default)?;
        if value == 0 {
            return Err(BuildError::BadProperty {
                kind: self.kind.to_string(),
                name,
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(value)
    }
}

type Builder<E> = Box<dyn Fn(Props<'_>, Vec<Node<E>>) -> Result<Node<E>, BuildError>>;

/// Maps node kind names to constructors.
///
/// [`Registry::with_builtins`] covers the standard composite/decorator set;
/// integrators register their own leaf kinds on top.
pub struct Registry<E> {
    builders: BTreeMap<String, Builder<E>>,
}

impl<E: 'static> Registry<E> {
    pub fn new() -> Self {
        Self {
            builders: BTreeMap::new(),
        }
    }

    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register_builtins();
        registry
    }

    pub fn register(
        &mut self,
        kind: impl Into<String>,
        builder: impl Fn(Props<'_>, Vec<Node<E>>) -> Result<Node<E>, BuildError> + 'static,
    ) {
        self.builders.insert(kind.into(), Box::new(builder));
    }

    /// Builds a live tree from a config record, depth-first.
    pub fn build(&self, config: &NodeConfig) -> Result<Node<E>, BuildError> {
        let builder = self
            .builders
            .get(&config.kind)
            .ok_or_else(|| BuildError::UnknownKind(config.kind.clone()))?;
        let children = config
            .children
            .iter()
            .map(|child| self.build(child))
            .collect::<Result<Vec<_>, _>>()?;
        builder(Props::new(&config.kind, &config.properties), children)
    }

    fn register_builtins(&mut self) {
        self.register("Sequence", |_, children| {
            Ok(Node::sequence(at_least_one("Sequence", children)?))
        });
        self.register("Selector", |_, children| {
            Ok(Node::selector(at_least_one("Selector", children)?))
        });
        self.register("Parallel", |_, children| {
            Ok(Node::parallel(at_least_one("Parallel", children)?))
        });
        self.register("ParallelAny", |_, children| {
            Ok(Node::parallel_any(at_least_one("ParallelAny", children)?))
        });
        self.register("Random", |_, children| {
            Ok(Node::random(at_least_one("Random", children)?))
        });

        self.register("Inverter", |_, children| {
            Ok(Node::inverter(exactly_one("Inverter", children)?))
        });
        self.register("LimitTime", |props, children| {
            let max_seconds = props.f32("max_seconds", 1.0)?;
            Ok(Node::limit_time(
                max_seconds,
                exactly_one("LimitTime", children)?,
            ))
        });
        self.register("LimitTicks", |props, children| {
            let max = props.u32("max", 1)?;
            Ok(Node::limit_ticks(max, exactly_one("LimitTicks", children)?))
        });
        self.register("Repeat", |props, children| {
            let max = props.u32_at_least_one("max", 1)?;
            Ok(Node::repeat(max, exactly_one("Repeat", children)?))
        });
        self.register("UntilFailure", |props, children| {
            let max = props.u32_at_least_one("max", 1)?;
            Ok(Node::until_failure(
                max,
                exactly_one("UntilFailure", children)?,
            ))
        });
        self.register("UntilSuccess", |props, children| {
            let max = props.u32_at_least_one("max", 1)?;
            Ok(Node::until_success(
                max,
                exactly_one("UntilSuccess", children)?,
            ))
        });
        self.register("Weight", |props, children| {
            let weight = props.u32_at_least_one("weight", 1)?;
            Ok(Node::weighted(weight, exactly_one("Weight", children)?))
        });
    }
}

impl<E: 'static> Default for Registry<E> {
    fn default() -> Self {
        Self::new()
    }
}

fn exactly_one<E>(kind: &str, mut children: Vec<Node<E>>) -> Result<Node<E>, BuildError> {
    if children.len() != 1 {
        return Err(BuildError::BadArity {
            kind: kind.to_string(),
            expected: "exactly 1",
            got: children.len(),
        });
    }
    Ok(children.remove(0))
}

fn at_least_one<E>(kind: &str, children: Vec<Node<E>>) -> Result<Vec<Node<E>>, BuildError> {
    if children.is_empty() {
        return Err(BuildError::EmptyComposite(kind.to_string()));
    }
    Ok(children)
}
