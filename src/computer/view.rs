//! Superstep-scoped overlay used during graph-computer execution
//!
//! While a computation runs, vertex property reads and writes for the
//! declared compute keys resolve against this overlay instead of the element
//! store, and edge visibility is filtered against a snapshot taken at view
//! creation. The underlying store is only mutated when the finished view is
//! merged back.

use crate::graph::ids::{CounterIdManager, IdManager};
use crate::graph::store::{GraphError, GraphResult};
use crate::graph::{
    Cardinality, Edge, EdgeId, PropertyId, PropertyValue, Vertex, VertexId, VertexProperty,
};
use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

/// Overlay of in-flight vertex state for one graph computation
///
/// Overlay property identifiers are scoped to the view; merging the view
/// back into the store assigns fresh persistent identifiers.
#[derive(Debug)]
pub struct ComputerView {
    /// Keys a computation is allowed to write
    compute_keys: FxHashSet<String>,

    /// In-flight vertex state: vertex -> key -> values
    view: FxHashMap<VertexId, IndexMap<String, Vec<VertexProperty>>>,

    /// Edges visible to the computation; refreshed only at barriers
    legal_edges: FxHashSet<EdgeId>,

    /// View-scoped property identifier allocation
    property_ids: CounterIdManager,
}

impl ComputerView {
    pub(crate) fn new(
        compute_keys: FxHashSet<String>,
        legal_edges: FxHashSet<EdgeId>,
    ) -> Self {
        debug!(
            compute_keys = compute_keys.len(),
            legal_edges = legal_edges.len(),
            "computer view created"
        );
        ComputerView {
            compute_keys,
            view: FxHashMap::default(),
            legal_edges,
            property_ids: CounterIdManager::new(),
        }
    }

    /// Whether a key belongs to the computation's writable state
    pub fn is_compute_key(&self, key: &str) -> bool {
        self.compute_keys.contains(key)
    }

    /// Resolve a vertex property read
    ///
    /// Compute keys resolve from the overlay, every other key from the base
    /// record; a single key never merges both sources.
    pub fn get_property<'a>(&'a self, vertex: &'a Vertex, key: &str) -> &'a [VertexProperty] {
        if self.is_compute_key(key) {
            self.view
                .get(&vertex.id)
                .and_then(|slots| slots.get(key))
                .map(|vs| vs.as_slice())
                .unwrap_or(&[])
        } else {
            vertex
                .properties
                .get(key)
                .map(|vs| vs.as_slice())
                .unwrap_or(&[])
        }
    }

    /// Write a compute-key value into the vertex's overlay slot
    ///
    /// The slot is single-valued: a second write within the computation
    /// replaces the first. Writes to keys outside the declared compute set
    /// are a caller defect.
    pub fn add_property(
        &mut self,
        vertex: VertexId,
        key: &str,
        value: PropertyValue,
    ) -> GraphResult<PropertyId> {
        if !self.is_compute_key(key) {
            return Err(GraphError::InvalidArgument(format!(
                "'{}' is not a compute key",
                key
            )));
        }
        let id = PropertyId::new(self.property_ids.next());
        let property = VertexProperty::new(id, vertex, Cardinality::Single, key, value);
        let slot = self
            .view
            .entry(vertex)
            .or_default()
            .entry(key.to_string())
            .or_default();
        slot.clear();
        slot.push(property);
        Ok(id)
    }

    /// Whether an edge is visible to the computation
    ///
    /// Edges created mid-computation are invisible until the snapshot is
    /// refreshed at the next barrier.
    pub fn legal_edge(&self, edge: &Edge) -> bool {
        self.legal_edges.contains(&edge.id)
    }

    /// Replace the visible-edge snapshot; called at barrier boundaries only
    pub(crate) fn refresh_legal_edges(&mut self, edges: FxHashSet<EdgeId>) {
        debug!(legal_edges = edges.len(), "computer view edge snapshot refreshed");
        self.legal_edges = edges;
    }

    /// Overlay keys written for a vertex, in write order
    pub fn written_keys(&self, vertex: VertexId) -> Vec<&str> {
        self.view
            .get(&vertex)
            .map(|slots| slots.keys().map(|k| k.as_str()).collect())
            .unwrap_or_default()
    }

    /// Drain the overlay for merging back into the store
    pub(crate) fn into_state(
        self,
    ) -> FxHashMap<VertexId, IndexMap<String, Vec<VertexProperty>>> {
        self.view
    }
}
