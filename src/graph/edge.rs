//! Edge record for the property graph

use super::property::PropertyValue;
use super::types::{EdgeId, Label, VertexId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A directed edge in the property graph
///
/// Edges carry single-valued properties only; multi-valued, cardinality
/// constrained properties exist on vertices alone. The two endpoint ids are
/// immutable, and the store guarantees both referenced vertices were live
/// when the edge was created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    /// Unique identifier for this edge
    pub id: EdgeId,

    /// Relationship label (e.g., "knows")
    pub label: Label,

    /// Source vertex (edge goes FROM this vertex)
    pub out_vertex: VertexId,

    /// Target vertex (edge goes TO this vertex)
    pub in_vertex: VertexId,

    /// Single-valued properties
    pub properties: IndexMap<String, PropertyValue>,

    /// Set once the edge has been removed from the store
    pub(crate) removed: bool,
}

impl Edge {
    pub(crate) fn new(
        id: EdgeId,
        out_vertex: VertexId,
        in_vertex: VertexId,
        label: impl Into<Label>,
    ) -> Self {
        Edge {
            id,
            label: label.into(),
            out_vertex,
            in_vertex,
            properties: IndexMap::new(),
            removed: false,
        }
    }

    /// Whether the edge has been removed from the store
    pub fn is_removed(&self) -> bool {
        self.removed
    }

    /// Get a property value
    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// The endpoint opposite to `vertex`
    ///
    /// For a self-loop both endpoints equal `vertex` and the vertex itself is
    /// returned.
    pub fn other_end(&self, vertex: VertexId) -> VertexId {
        if self.in_vertex == vertex {
            self.out_vertex
        } else {
            self.in_vertex
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Edge {}

impl std::hash::Hash for Edge {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
