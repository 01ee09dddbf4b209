//! Vertex record for the property graph

use super::property::VertexProperty;
use super::types::{Direction, EdgeId, Label, VertexId};
use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

/// A vertex in the property graph
///
/// The label is immutable after creation. Properties are multi-valued: each
/// key maps to an ordered sequence of [`VertexProperty`] values whose length
/// is constrained by the key's declared cardinality. The per-label adjacency
/// maps store edge identifiers only; the store owns the edge records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    /// Unique identifier for this vertex
    pub id: VertexId,

    /// Immutable label (e.g., "person")
    pub label: Label,

    /// Properties: key -> ordered sequence of values
    pub properties: IndexMap<String, Vec<VertexProperty>>,

    /// Outgoing edges, grouped by edge label
    pub(crate) out_edges: FxHashMap<Label, FxHashSet<EdgeId>>,

    /// Incoming edges, grouped by edge label
    pub(crate) in_edges: FxHashMap<Label, FxHashSet<EdgeId>>,

    /// Set once the vertex has been removed from the store
    pub(crate) removed: bool,
}

impl Vertex {
    pub(crate) fn new(id: VertexId, label: impl Into<Label>) -> Self {
        Vertex {
            id,
            label: label.into(),
            properties: IndexMap::new(),
            out_edges: FxHashMap::default(),
            in_edges: FxHashMap::default(),
            removed: false,
        }
    }

    /// Whether the vertex has been removed from the store
    pub fn is_removed(&self) -> bool {
        self.removed
    }

    /// All property keys currently holding at least one value
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(|k| k.as_str())
    }

    /// Number of stored property values across all keys
    pub fn property_count(&self) -> usize {
        self.properties.values().map(|vs| vs.len()).sum()
    }

    /// Register an incident edge in the adjacency map for `direction`
    pub(crate) fn attach_edge(&mut self, direction: Direction, label: Label, edge: EdgeId) {
        let map = match direction {
            Direction::Out => &mut self.out_edges,
            Direction::In => &mut self.in_edges,
            Direction::Both => unreachable!("edges attach to one direction per endpoint"),
        };
        map.entry(label).or_default().insert(edge);
    }

    /// Unlink an incident edge; empty label buckets are dropped
    pub(crate) fn detach_edge(&mut self, direction: Direction, label: &Label, edge: EdgeId) {
        let map = match direction {
            Direction::Out => &mut self.out_edges,
            Direction::In => &mut self.in_edges,
            Direction::Both => unreachable!("edges detach from one direction per endpoint"),
        };
        if let Some(set) = map.get_mut(label) {
            set.remove(&edge);
            if set.is_empty() {
                map.remove(label);
            }
        }
    }

    /// Iterate identifiers of incident edges, optionally filtered by label
    ///
    /// `Both` yields outgoing edges before incoming ones.
    pub fn edge_ids<'a>(
        &'a self,
        direction: Direction,
        labels: &'a [Label],
    ) -> impl Iterator<Item = EdgeId> + 'a {
        let (out, inc) = match direction {
            Direction::Out => (Some(&self.out_edges), None),
            Direction::In => (None, Some(&self.in_edges)),
            Direction::Both => (Some(&self.out_edges), Some(&self.in_edges)),
        };
        out.into_iter()
            .chain(inc)
            .flat_map(move |map| {
                map.iter().filter_map(move |(label, set)| {
                    if labels.is_empty() || labels.contains(label) {
                        Some(set.iter().copied())
                    } else {
                        None
                    }
                })
            })
            .flatten()
    }

    /// Total number of incident edges for `direction`
    pub fn degree(&self, direction: Direction) -> usize {
        self.edge_ids(direction, &[]).count()
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}

impl std::hash::Hash for Vertex {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_vertex_is_empty() {
        let v = Vertex::new(VertexId::new(1), "person");
        assert_eq!(v.label, Label::new("person"));
        assert!(!v.is_removed());
        assert_eq!(v.property_count(), 0);
        assert_eq!(v.degree(Direction::Both), 0);
    }

    #[test]
    fn test_attach_detach_edge() {
        let mut v = Vertex::new(VertexId::new(1), "person");
        let knows = Label::new("knows");
        v.attach_edge(Direction::Out, knows.clone(), EdgeId::new(10));
        v.attach_edge(Direction::Out, knows.clone(), EdgeId::new(11));
        v.attach_edge(Direction::In, Label::new("created"), EdgeId::new(12));

        assert_eq!(v.degree(Direction::Out), 2);
        assert_eq!(v.degree(Direction::In), 1);
        assert_eq!(v.degree(Direction::Both), 3);

        v.detach_edge(Direction::Out, &knows, EdgeId::new(10));
        assert_eq!(v.degree(Direction::Out), 1);

        // Removing the last edge of a label drops the bucket
        v.detach_edge(Direction::Out, &knows, EdgeId::new(11));
        assert!(v.out_edges.is_empty());
    }

    #[test]
    fn test_edge_ids_label_filter() {
        let mut v = Vertex::new(VertexId::new(1), "person");
        v.attach_edge(Direction::Out, Label::new("knows"), EdgeId::new(10));
        v.attach_edge(Direction::Out, Label::new("created"), EdgeId::new(11));

        let knows_only: Vec<EdgeId> = v.edge_ids(Direction::Out, &[Label::new("knows")]).collect();
        assert_eq!(knows_only, vec![EdgeId::new(10)]);

        let all: Vec<EdgeId> = v.edge_ids(Direction::Out, &[]).collect();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_vertex_equality_by_id() {
        let a = Vertex::new(VertexId::new(7), "person");
        let b = Vertex::new(VertexId::new(7), "software");
        let c = Vertex::new(VertexId::new(8), "person");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
