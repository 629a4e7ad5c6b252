//! The immutable flow graph: an arena of nodes addressed by identifier, plus the
//! tooltip dictionary.
//!
//! Options refer to other nodes by identifier only. Nothing here checks that those
//! identifiers resolve; the engine treats an unresolvable identifier as an
//! "unknown step" instead.

use crate::definition::{FlowDefinition, IntoFlow};
use crate::error::LoadError;
use ahash::AHashMap;

mod node;
mod tooltip;

pub use node::*;
pub use tooltip::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowGraph {
    title: Option<String>,
    description: Option<String>,
    start_id: String,
    nodes: Vec<Node>,
    // Key: node id, Value: slot in `nodes`
    index: AHashMap<String, usize>,
    tooltips: TooltipIndex,
}

impl FlowGraph {
    /// Builds the graph from an already deserialized definition.
    ///
    /// Nodes keep their definition order. A node whose identifier was already
    /// seen replaces the earlier node in its slot.
    pub fn new(flow: FlowDefinition) -> Self {
        let mut nodes: Vec<Node> = Vec::with_capacity(flow.nodes.len());
        let mut index = AHashMap::with_capacity(flow.nodes.len());

        for def in flow.nodes {
            let node = Node::from(def);
            match index.get(&node.id) {
                Some(&slot) => {
                    tracing::warn!(node_id = %node.id, "Duplicate node id, later definition wins");
                    nodes[slot] = node;
                }
                None => {
                    index.insert(node.id.clone(), nodes.len());
                    nodes.push(node);
                }
            }
        }

        let tooltips = TooltipIndex::new(flow.tooltips.unwrap_or_default());

        tracing::debug!(
            nodes = nodes.len(),
            tooltips = tooltips.len(),
            start_id = %flow.start_id,
            "Built flow graph"
        );

        Self {
            title: flow.title,
            description: flow.description,
            start_id: flow.start_id,
            nodes,
            index,
            tooltips,
        }
    }

    /// Converts a custom source through [`IntoFlow`] and builds the graph.
    /// Conversion failures surface as [`LoadError::Conversion`].
    pub fn from_source<F: IntoFlow>(source: F) -> Result<Self, LoadError> {
        Ok(Self::new(FlowDefinition::from_source(source)?))
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&slot| &self.nodes[slot])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Iterates over the nodes in definition order.
    pub fn nodes(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn start_id(&self) -> &str {
        &self.start_id
    }

    pub fn start_node(&self) -> Option<&Node> {
        self.node(&self.start_id)
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn tooltips(&self) -> &TooltipIndex {
        &self.tooltips
    }
}

impl From<FlowDefinition> for FlowGraph {
    fn from(flow: FlowDefinition) -> Self {
        Self::new(flow)
    }
}
