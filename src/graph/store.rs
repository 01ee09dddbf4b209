//! In-memory graph storage
//!
//! The store is the owning authority for every vertex and edge record.
//! Adjacency lives on the vertices as id sets and is maintained in the same
//! mutation call that touches the element maps, so no public operation can
//! observe a partially-applied change. Removed elements stay behind as
//! tombstones: identifiers are never reused and double removal is reported
//! rather than silently ignored.

use super::edge::Edge;
use super::ids::{CounterIdManager, IdManager};
use super::property::{PropertyValue, VertexProperty};
use super::types::{Cardinality, Direction, EdgeId, Label, PropertyId, VertexId};
use super::vertex::Vertex;
use crate::computer::view::ComputerView;
use crate::index::component::ComponentIndex;
use crate::index::property_index::PropertyIndexManager;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;
use std::sync::RwLock;
use thiserror::Error;
use tracing::{debug, trace};

/// Errors that can occur during graph operations
#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("Vertex {0} not found")]
    VertexNotFound(VertexId),

    #[error("Edge {0} not found")]
    EdgeNotFound(EdgeId),

    #[error("Identifier {0} already exists")]
    DuplicateIdentifier(u64),

    #[error("Element {0} was already removed")]
    ElementAlreadyRemoved(u64),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Multiple properties exist for key '{0}'")]
    MultiplePropertiesExist(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// In-memory property-graph store
///
/// Uses hash maps for O(1) element lookup:
/// - vertices: id -> Vertex (with per-label adjacency id sets)
/// - edges: id -> Edge
///
/// Secondary property indices, the connected-component index and the
/// graph-computer overlay hang off the store and are kept consistent by the
/// mutation methods. Direct mode assumes a single logical writer; the
/// component index additionally sits behind its own lock so connectivity
/// queries can path-compress through `&self`.
#[derive(Debug)]
pub struct GraphStore {
    /// Vertex storage, tombstones included
    vertices: FxHashMap<u64, Vertex>,

    /// Edge storage, tombstones included
    edges: FxHashMap<u64, Edge>,

    /// Identifier allocation, one namespace each
    vertex_id_manager: Box<dyn IdManager>,
    edge_id_manager: Box<dyn IdManager>,
    property_id_manager: Box<dyn IdManager>,

    /// Secondary (key, value) -> element indices
    vertex_index: PropertyIndexManager,
    edge_index: PropertyIndexManager,

    /// Incremental union-find connectivity index; `None` while disabled
    components: RwLock<Option<ComponentIndex>>,

    /// Active graph-computer overlay; `Some` switches the store into
    /// computer mode
    computer_view: Option<ComputerView>,
}

impl GraphStore {
    /// Create a new empty graph store with counter-based identifiers
    pub fn new() -> Self {
        Self::with_id_managers(
            Box::new(CounterIdManager::new()),
            Box::new(CounterIdManager::new()),
            Box::new(CounterIdManager::new()),
        )
    }

    /// Create a store with caller-chosen identifier strategies
    pub fn with_id_managers(
        vertex_ids: Box<dyn IdManager>,
        edge_ids: Box<dyn IdManager>,
        property_ids: Box<dyn IdManager>,
    ) -> Self {
        GraphStore {
            vertices: FxHashMap::default(),
            edges: FxHashMap::default(),
            vertex_id_manager: vertex_ids,
            edge_id_manager: edge_ids,
            property_id_manager: property_ids,
            vertex_index: PropertyIndexManager::new(),
            edge_index: PropertyIndexManager::new(),
            components: RwLock::new(None),
            computer_view: None,
        }
    }

    // ============================================================
    // Element lifecycle
    // ============================================================

    /// Create a vertex, optionally with a caller-supplied identifier
    pub fn add_vertex(
        &mut self,
        label: impl Into<Label>,
        id: Option<u64>,
    ) -> GraphResult<VertexId> {
        let id = match id {
            Some(id) => {
                if self.vertices.contains_key(&id) {
                    return Err(GraphError::DuplicateIdentifier(id));
                }
                self.vertex_id_manager.reserve(id);
                id
            }
            None => self.vertex_id_manager.next(),
        };
        let vertex_id = VertexId::new(id);
        let label = label.into();
        trace!(vertex = %vertex_id, label = %label, "add vertex");
        self.vertices.insert(id, Vertex::new(vertex_id, label));

        if let Some(index) = self.components.write().unwrap().as_mut() {
            index.insert(vertex_id);
        }
        Ok(vertex_id)
    }

    /// Create a directed edge between two live vertices
    ///
    /// The edge is registered in both endpoints' adjacency maps and fed to
    /// the component index before the call returns.
    pub fn add_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
        label: impl Into<Label>,
        id: Option<u64>,
    ) -> GraphResult<EdgeId> {
        self.live_vertex(from)?;
        self.live_vertex(to)?;

        let id = match id {
            Some(id) => {
                if self.edges.contains_key(&id) {
                    return Err(GraphError::DuplicateIdentifier(id));
                }
                self.edge_id_manager.reserve(id);
                id
            }
            None => self.edge_id_manager.next(),
        };
        let edge_id = EdgeId::new(id);
        let label = label.into();
        trace!(edge = %edge_id, label = %label, %from, %to, "add edge");

        self.edges
            .insert(id, Edge::new(edge_id, from, to, label.clone()));
        if let Some(v) = self.vertices.get_mut(&from.as_u64()) {
            v.attach_edge(Direction::Out, label.clone(), edge_id);
        }
        if let Some(v) = self.vertices.get_mut(&to.as_u64()) {
            v.attach_edge(Direction::In, label, edge_id);
        }

        // Union is idempotent when already connected; the index never lags
        // behind true connectivity for additions
        if let Some(index) = self.components.write().unwrap().as_mut() {
            index.union(from, to);
        }
        Ok(edge_id)
    }

    /// Remove an edge: unlink from both endpoints, then tombstone
    pub fn remove_edge(&mut self, id: EdgeId) -> GraphResult<Edge> {
        let eid = id.as_u64();
        let snapshot = match self.edges.get_mut(&eid) {
            Some(edge) if edge.removed => {
                return Err(GraphError::ElementAlreadyRemoved(eid));
            }
            Some(edge) => {
                let snapshot = edge.clone();
                edge.removed = true;
                edge.properties.clear();
                snapshot
            }
            None => return Err(GraphError::EdgeNotFound(id)),
        };
        trace!(edge = %id, "remove edge");

        if let Some(v) = self.vertices.get_mut(&snapshot.out_vertex.as_u64()) {
            v.detach_edge(Direction::Out, &snapshot.label, id);
        }
        if let Some(v) = self.vertices.get_mut(&snapshot.in_vertex.as_u64()) {
            v.detach_edge(Direction::In, &snapshot.label, id);
        }
        for (key, value) in &snapshot.properties {
            self.edge_index.index_remove(key, value, eid);
        }

        let mut removed = snapshot;
        removed.removed = true;
        Ok(removed)
    }

    /// Remove a vertex and every incident edge
    ///
    /// Incident edges go first (both directions), then the vertex's
    /// secondary-index entries, then the vertex itself.
    pub fn remove_vertex(&mut self, id: VertexId) -> GraphResult<Vertex> {
        let vid = id.as_u64();
        let snapshot = match self.vertices.get(&vid) {
            Some(v) if v.removed => return Err(GraphError::ElementAlreadyRemoved(vid)),
            Some(v) => v.clone(),
            None => return Err(GraphError::VertexNotFound(id)),
        };
        trace!(vertex = %id, "remove vertex");

        let incident: Vec<EdgeId> = snapshot.edge_ids(Direction::Both, &[]).collect();
        for eid in incident {
            match self.remove_edge(eid) {
                Ok(_) => {}
                // A self-loop appears in both adjacency directions
                Err(GraphError::ElementAlreadyRemoved(_)) => {}
                Err(err) => return Err(err),
            }
        }

        for (key, values) in &snapshot.properties {
            for vp in values {
                self.vertex_index.index_remove(key, &vp.value, vid);
            }
        }

        if let Some(v) = self.vertices.get_mut(&vid) {
            v.removed = true;
            v.properties.clear();
            v.out_edges.clear();
            v.in_edges.clear();
        }

        let mut removed = snapshot;
        removed.removed = true;
        Ok(removed)
    }

    // ============================================================
    // Lookup
    // ============================================================

    /// Get a vertex by id; tombstones are invisible
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices
            .get(&id.as_u64())
            .filter(|v| !v.removed)
    }

    /// Get an edge by id; tombstones are invisible
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(&id.as_u64()).filter(|e| !e.removed)
    }

    /// Check if a vertex exists and is live
    pub fn has_vertex(&self, id: VertexId) -> bool {
        self.vertex(id).is_some()
    }

    /// Check if an edge exists and is live
    pub fn has_edge(&self, id: EdgeId) -> bool {
        self.edge(id).is_some()
    }

    /// Number of live vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.values().filter(|v| !v.removed).count()
    }

    /// Number of live edges
    pub fn edge_count(&self) -> usize {
        self.edges.values().filter(|e| !e.removed).count()
    }

    /// Iterate all live vertices
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values().filter(|v| !v.removed)
    }

    /// Iterate all live edges
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values().filter(|e| !e.removed)
    }

    /// Iterate identifiers of all live vertices
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices().map(|v| v.id)
    }

    fn live_vertex(&self, id: VertexId) -> GraphResult<&Vertex> {
        match self.vertices.get(&id.as_u64()) {
            Some(v) if !v.removed => Ok(v),
            Some(_) => Err(GraphError::ElementAlreadyRemoved(id.as_u64())),
            None => Err(GraphError::VertexNotFound(id)),
        }
    }

    fn live_edge(&self, id: EdgeId) -> GraphResult<&Edge> {
        match self.edges.get(&id.as_u64()) {
            Some(e) if !e.removed => Ok(e),
            Some(_) => Err(GraphError::ElementAlreadyRemoved(id.as_u64())),
            None => Err(GraphError::EdgeNotFound(id)),
        }
    }

    // ============================================================
    // Vertex properties
    // ============================================================

    /// Write a vertex property under the key's declared cardinality
    ///
    /// SINGLE replaces the existing value atomically, LIST appends, SET
    /// appends unless an equal value already exists (returning the existing
    /// property's id). The secondary index is updated in the same call. In
    /// computer mode the write is routed through the active view instead.
    pub fn set_vertex_property(
        &mut self,
        vertex: VertexId,
        cardinality: Cardinality,
        key: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> GraphResult<PropertyId> {
        let key = key.into();
        let value = value.into();
        if key.is_empty() {
            return Err(GraphError::InvalidArgument(
                "property key must not be empty".to_string(),
            ));
        }
        self.live_vertex(vertex)?;

        if let Some(view) = self.computer_view.as_mut() {
            return view.add_property(vertex, &key, value);
        }

        let id = PropertyId::new(self.property_id_manager.next());
        let vid = vertex.as_u64();
        let property = VertexProperty::new(id, vertex, cardinality, key.clone(), value.clone());
        let vx = match self.vertices.get_mut(&vid) {
            Some(vx) => vx,
            None => return Err(GraphError::VertexNotFound(vertex)),
        };

        match cardinality {
            Cardinality::Single => {
                if let Some(stale) = vx.properties.insert(key.clone(), vec![property]) {
                    for old in &stale {
                        self.vertex_index.index_remove(&key, &old.value, vid);
                    }
                }
                self.vertex_index.index_insert(&key, value, vid);
            }
            Cardinality::List => {
                vx.properties.entry(key.clone()).or_default().push(property);
                self.vertex_index.index_insert(&key, value, vid);
            }
            Cardinality::Set => {
                let slot = vx.properties.entry(key.clone()).or_default();
                if let Some(existing) = slot.iter().find(|p| p.value == value) {
                    return Ok(existing.id);
                }
                slot.push(property);
                self.vertex_index.index_insert(&key, value, vid);
            }
        }
        Ok(id)
    }

    /// Single-value property accessor
    ///
    /// More than one stored value for the key is reported as
    /// `MultiplePropertiesExist`, never silently resolved. In computer mode
    /// the read resolves through the active view.
    pub fn vertex_property(
        &self,
        vertex: VertexId,
        key: &str,
    ) -> GraphResult<Option<&VertexProperty>> {
        let vx = self.live_vertex(vertex)?;
        let values: &[VertexProperty] = match self.computer_view.as_ref() {
            Some(view) => view.get_property(vx, key),
            None => vx
                .properties
                .get(key)
                .map(|vs| vs.as_slice())
                .unwrap_or(&[]),
        };
        match values.len() {
            0 => Ok(None),
            1 => Ok(Some(&values[0])),
            _ => Err(GraphError::MultiplePropertiesExist(key.to_string())),
        }
    }

    /// Property sequence accessor
    ///
    /// Zero keys returns all properties in the owning map's iteration
    /// order; one key returns that key's sequence; several keys return the
    /// union across the matching keys in map order.
    pub fn vertex_properties(
        &self,
        vertex: VertexId,
        keys: &[&str],
    ) -> GraphResult<Vec<&VertexProperty>> {
        let vx = self.live_vertex(vertex)?;
        match self.computer_view.as_ref() {
            Some(view) => {
                let mut result = Vec::new();
                if keys.is_empty() {
                    for key in vx.properties.keys() {
                        result.extend(view.get_property(vx, key));
                    }
                    // Compute keys written this computation but absent from
                    // the base record
                    for key in view.written_keys(vertex) {
                        if !vx.properties.contains_key(key) {
                            result.extend(view.get_property(vx, key));
                        }
                    }
                } else {
                    for key in keys {
                        result.extend(view.get_property(vx, key));
                    }
                }
                Ok(result)
            }
            None => {
                if keys.is_empty() {
                    Ok(vx.properties.values().flatten().collect())
                } else {
                    Ok(vx
                        .properties
                        .iter()
                        .filter(|(k, _)| keys.contains(&k.as_str()))
                        .flat_map(|(_, vs)| vs)
                        .collect())
                }
            }
        }
    }

    /// Drop every value stored for a key; returns how many were removed
    pub fn remove_vertex_property(&mut self, vertex: VertexId, key: &str) -> GraphResult<usize> {
        if self.computer_view.is_some() {
            return Err(GraphError::InvalidArgument(
                "property removal is not supported in computer mode".to_string(),
            ));
        }
        self.live_vertex(vertex)?;
        let vid = vertex.as_u64();
        let removed = match self.vertices.get_mut(&vid) {
            Some(vx) => vx.properties.shift_remove(key).unwrap_or_default(),
            None => return Err(GraphError::VertexNotFound(vertex)),
        };
        for vp in &removed {
            self.vertex_index.index_remove(key, &vp.value, vid);
        }
        Ok(removed.len())
    }

    // ============================================================
    // Edge properties (single-valued)
    // ============================================================

    /// Set an edge property, replacing any existing value for the key
    pub fn set_edge_property(
        &mut self,
        edge: EdgeId,
        key: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> GraphResult<()> {
        let key = key.into();
        let value = value.into();
        if key.is_empty() {
            return Err(GraphError::InvalidArgument(
                "property key must not be empty".to_string(),
            ));
        }
        let eid = edge.as_u64();
        let record = match self.edges.get_mut(&eid) {
            Some(e) if e.removed => return Err(GraphError::ElementAlreadyRemoved(eid)),
            Some(e) => e,
            None => return Err(GraphError::EdgeNotFound(edge)),
        };
        if let Some(stale) = record.properties.insert(key.clone(), value.clone()) {
            self.edge_index.index_remove(&key, &stale, eid);
        }
        self.edge_index.index_insert(&key, value, eid);
        Ok(())
    }

    /// Get an edge property value
    pub fn edge_property(&self, edge: EdgeId, key: &str) -> GraphResult<Option<&PropertyValue>> {
        Ok(self.live_edge(edge)?.property(key))
    }

    /// Drop an edge property
    pub fn remove_edge_property(
        &mut self,
        edge: EdgeId,
        key: &str,
    ) -> GraphResult<Option<PropertyValue>> {
        let eid = edge.as_u64();
        let removed = match self.edges.get_mut(&eid) {
            Some(e) if e.removed => return Err(GraphError::ElementAlreadyRemoved(eid)),
            Some(e) => e.properties.shift_remove(key),
            None => return Err(GraphError::EdgeNotFound(edge)),
        };
        if let Some(value) = &removed {
            self.edge_index.index_remove(key, value, eid);
        }
        Ok(removed)
    }

    // ============================================================
    // Secondary property indices
    // ============================================================

    /// Index a vertex property key, backfilling existing values
    pub fn create_vertex_key_index(&self, key: &str) {
        self.vertex_index.create_index(key);
        for vx in self.vertices.values().filter(|v| !v.removed) {
            if let Some(values) = vx.properties.get(key) {
                for vp in values {
                    self.vertex_index
                        .index_insert(key, vp.value.clone(), vx.id.as_u64());
                }
            }
        }
    }

    /// Drop a vertex property key index
    pub fn drop_vertex_key_index(&self, key: &str) {
        self.vertex_index.drop_index(key);
    }

    /// Vertices whose `key` property holds `value` (indexed keys only)
    pub fn vertices_by_property(&self, key: &str, value: &PropertyValue) -> Vec<VertexId> {
        self.vertex_index
            .lookup(key, value)
            .into_iter()
            .map(VertexId::new)
            .collect()
    }

    /// Index an edge property key, backfilling existing values
    pub fn create_edge_key_index(&self, key: &str) {
        self.edge_index.create_index(key);
        for e in self.edges.values().filter(|e| !e.removed) {
            if let Some(value) = e.properties.get(key) {
                self.edge_index
                    .index_insert(key, value.clone(), e.id.as_u64());
            }
        }
    }

    /// Drop an edge property key index
    pub fn drop_edge_key_index(&self, key: &str) {
        self.edge_index.drop_index(key);
    }

    /// Edges whose `key` property holds `value` (indexed keys only)
    pub fn edges_by_property(&self, key: &str, value: &PropertyValue) -> Vec<EdgeId> {
        self.edge_index
            .lookup(key, value)
            .into_iter()
            .map(EdgeId::new)
            .collect()
    }

    // ============================================================
    // Traversal
    // ============================================================

    /// Incident edges of a vertex, lazily, optionally filtered by label
    ///
    /// In computer mode the sequence is additionally filtered through the
    /// view's legal-edge snapshot.
    pub fn edges_of<'a>(
        &'a self,
        vertex: VertexId,
        direction: Direction,
        labels: &'a [Label],
    ) -> GraphResult<impl Iterator<Item = &'a Edge> + 'a> {
        let vx = self.live_vertex(vertex)?;
        let view = self.computer_view.as_ref();
        Ok(vx
            .edge_ids(direction, labels)
            .filter_map(move |eid| self.edges.get(&eid.as_u64()))
            .filter(|e| !e.removed)
            .filter(move |e| view.map_or(true, |vw| vw.legal_edge(e))))
    }

    /// Adjacent vertices, lazily: the opposite endpoint of each incident edge
    pub fn vertices_of<'a>(
        &'a self,
        vertex: VertexId,
        direction: Direction,
        labels: &'a [Label],
    ) -> GraphResult<impl Iterator<Item = VertexId> + 'a> {
        Ok(self
            .edges_of(vertex, direction, labels)?
            .map(move |e| e.other_end(vertex)))
    }

    // ============================================================
    // Connectivity
    // ============================================================

    /// Enable the component index, rebuilding it from the live graph
    ///
    /// The rebuild happens before the index becomes visible, so it is never
    /// consulted in a stale state.
    pub fn enable_component_index(&self) {
        let mut index = ComponentIndex::new();
        index.rebuild(
            self.vertices.values().filter(|v| !v.removed).map(|v| v.id),
            self.edges
                .values()
                .filter(|e| !e.removed)
                .map(|e| (e.out_vertex, e.in_vertex)),
        );
        debug!("component index enabled");
        *self.components.write().unwrap() = Some(index);
    }

    /// Disable the component index, dropping its state entirely
    pub fn disable_component_index(&self) {
        debug!("component index disabled");
        *self.components.write().unwrap() = None;
    }

    /// Whether the component index is currently enabled
    pub fn is_component_index_enabled(&self) -> bool {
        self.components.read().unwrap().is_some()
    }

    /// Whether an undirected path connects two vertices
    ///
    /// With the component index enabled this is two compressing finds under
    /// a short-lived lock. Disabled, it falls back to breadth-first search
    /// over both edge directions. Both endpoints must exist. Note that with
    /// the index enabled, components are a monotonic over-approximation:
    /// removals do not shrink them until the index is re-enabled (full
    /// rebuild).
    pub fn can_reach(&self, from: VertexId, to: VertexId) -> GraphResult<bool> {
        self.live_vertex(from)?;
        self.live_vertex(to)?;
        if from == to {
            return Ok(true);
        }

        {
            let mut guard = self.components.write().unwrap();
            if let Some(index) = guard.as_mut() {
                return Ok(index.same_component(from, to));
            }
        }

        // BFS fallback, direction-agnostic, at most one visit per vertex
        let mut visited: FxHashSet<VertexId> = FxHashSet::default();
        let mut queue: VecDeque<VertexId> = VecDeque::new();
        visited.insert(from);
        queue.push_back(from);
        while let Some(current) = queue.pop_front() {
            if current == to {
                return Ok(true);
            }
            let Some(vx) = self.vertices.get(&current.as_u64()) else {
                continue;
            };
            for eid in vx.edge_ids(Direction::Both, &[]) {
                if let Some(edge) = self.edges.get(&eid.as_u64()) {
                    if edge.removed {
                        continue;
                    }
                    let other = edge.other_end(current);
                    if visited.insert(other) {
                        queue.push_back(other);
                    }
                }
            }
        }
        Ok(false)
    }

    // ============================================================
    // Computer mode
    // ============================================================

    /// Switch into computer mode with an overlay for the given compute keys
    ///
    /// The overlay snapshots the currently visible edges; property reads and
    /// writes for compute keys resolve against it until the view is merged
    /// or discarded.
    pub fn create_computer_view(
        &mut self,
        compute_keys: impl IntoIterator<Item = String>,
    ) -> GraphResult<()> {
        if self.computer_view.is_some() {
            return Err(GraphError::InvalidArgument(
                "a computer view is already active".to_string(),
            ));
        }
        let keys: FxHashSet<String> = compute_keys.into_iter().collect();
        let legal = self.live_edge_ids();
        self.computer_view = Some(ComputerView::new(keys, legal));
        Ok(())
    }

    /// Whether the store is currently in computer mode
    pub fn in_computer_mode(&self) -> bool {
        self.computer_view.is_some()
    }

    /// The active overlay, if any
    pub fn computer_view(&self) -> Option<&ComputerView> {
        self.computer_view.as_ref()
    }

    /// Refresh the overlay's visible-edge snapshot (barrier boundary only)
    pub fn refresh_view_edges(&mut self) -> GraphResult<()> {
        let legal = self.live_edge_ids();
        match self.computer_view.as_mut() {
            Some(view) => {
                view.refresh_legal_edges(legal);
                Ok(())
            }
            None => Err(GraphError::InvalidArgument(
                "no active computer view".to_string(),
            )),
        }
    }

    /// Discard the overlay without touching the store (cancellation path)
    pub fn drop_computer_view(&mut self) -> GraphResult<()> {
        if self.computer_view.take().is_none() {
            return Err(GraphError::InvalidArgument(
                "no active computer view".to_string(),
            ));
        }
        debug!("computer view discarded");
        Ok(())
    }

    /// Merge the overlay into the element store and leave computer mode
    ///
    /// Overlay values receive fresh persistent property identifiers.
    /// Vertices removed mid-computation are skipped.
    pub fn complete_computer_view(&mut self) -> GraphResult<()> {
        let view = match self.computer_view.take() {
            Some(view) => view,
            None => {
                return Err(GraphError::InvalidArgument(
                    "no active computer view".to_string(),
                ))
            }
        };
        for (vertex, slots) in view.into_state() {
            if !self.has_vertex(vertex) {
                continue;
            }
            for (key, values) in slots {
                for vp in values {
                    self.set_vertex_property(vertex, vp.cardinality, key.clone(), vp.value)?;
                }
            }
        }
        debug!("computer view merged into store");
        Ok(())
    }

    fn live_edge_ids(&self) -> FxHashSet<EdgeId> {
        self.edges
            .values()
            .filter(|e| !e.removed)
            .map(|e| e.id)
            .collect()
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}
