//! Incremental connected-component index (union-find)
//!
//! Tracks, per vertex, a parent pointer and rank. `find` follows parents with
//! path compression; `union` attaches the lower-rank root under the higher
//! one. Every edge insertion feeds the endpoint pair through `union`, so the
//! partition never lags behind the graph's true connectivity for additions.
//! Removals do not shrink components: the partition is a monotonic
//! over-approximation until the index is rebuilt.

use crate::graph::VertexId;
use rustc_hash::FxHashMap;
use tracing::debug;

/// Union-find over vertex identifiers
#[derive(Debug, Clone, Default)]
pub struct ComponentIndex {
    parent: FxHashMap<u64, u64>,
    rank: FxHashMap<u64, u64>,
}

impl ComponentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a vertex as its own singleton component
    pub fn insert(&mut self, v: VertexId) {
        self.parent.entry(v.as_u64()).or_insert_with(|| v.as_u64());
        self.rank.entry(v.as_u64()).or_insert(0);
    }

    /// Component representative for a vertex; `None` for unknown vertices
    ///
    /// Compresses the walked path so repeated queries stay near-constant.
    pub fn find(&mut self, v: VertexId) -> Option<u64> {
        let mut current = v.as_u64();
        if !self.parent.contains_key(&current) {
            return None;
        }
        // Walk to the root
        let mut root = current;
        while self.parent[&root] != root {
            root = self.parent[&root];
        }
        // Compress the path
        while current != root {
            let next = self.parent[&current];
            self.parent.insert(current, root);
            current = next;
        }
        Some(root)
    }

    /// Merge the components of two vertices; idempotent when already joined
    ///
    /// Unknown endpoints are registered first, so a union on a freshly added
    /// edge never misses a vertex.
    pub fn union(&mut self, a: VertexId, b: VertexId) {
        self.insert(a);
        self.insert(b);
        let root_a = self.find(a).unwrap_or_else(|| a.as_u64());
        let root_b = self.find(b).unwrap_or_else(|| b.as_u64());
        if root_a == root_b {
            return;
        }

        let rank_a = self.rank[&root_a];
        let rank_b = self.rank[&root_b];
        if rank_a < rank_b {
            self.parent.insert(root_a, root_b);
        } else if rank_a > rank_b {
            self.parent.insert(root_b, root_a);
        } else {
            self.parent.insert(root_b, root_a);
            self.rank.insert(root_a, rank_a + 1);
        }
    }

    /// Whether two vertices share a representative
    pub fn same_component(&mut self, a: VertexId, b: VertexId) -> bool {
        match (self.find(a), self.find(b)) {
            (Some(ra), Some(rb)) => ra == rb,
            _ => false,
        }
    }

    /// Number of vertices known to the index
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of distinct components
    pub fn component_count(&mut self) -> usize {
        let ids: Vec<u64> = self.parent.keys().copied().collect();
        let mut roots = rustc_hash::FxHashSet::default();
        for id in ids {
            if let Some(root) = self.find(VertexId::new(id)) {
                roots.insert(root);
            }
        }
        roots.len()
    }

    /// Rebuild the partition from scratch
    ///
    /// Called when the index is toggled from disabled to enabled: every
    /// vertex becomes a singleton, then every edge's endpoint pair is
    /// unioned. Only after this completes may the index be trusted.
    pub fn rebuild(
        &mut self,
        vertices: impl Iterator<Item = VertexId>,
        edges: impl Iterator<Item = (VertexId, VertexId)>,
    ) {
        self.parent.clear();
        self.rank.clear();
        for v in vertices {
            self.insert(v);
        }
        let mut edge_count = 0usize;
        for (u, v) in edges {
            self.union(u, v);
            edge_count += 1;
        }
        debug!(
            vertices = self.parent.len(),
            edges = edge_count,
            "component index rebuilt"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(id: u64) -> VertexId {
        VertexId::new(id)
    }

    #[test]
    fn test_singletons() {
        let mut index = ComponentIndex::new();
        index.insert(v(1));
        index.insert(v(2));
        assert_eq!(index.find(v(1)), Some(1));
        assert_eq!(index.find(v(2)), Some(2));
        assert!(!index.same_component(v(1), v(2)));
        assert_eq!(index.find(v(99)), None);
    }

    #[test]
    fn test_union_merges() {
        let mut index = ComponentIndex::new();
        index.union(v(1), v(2));
        index.union(v(2), v(3));
        assert!(index.same_component(v(1), v(3)));
        assert_eq!(index.component_count(), 1);
    }

    #[test]
    fn test_union_idempotent() {
        let mut index = ComponentIndex::new();
        index.union(v(1), v(2));
        let first = index.find(v(1));
        index.union(v(1), v(2));
        index.union(v(2), v(1));
        assert_eq!(index.find(v(1)), first);
        assert_eq!(index.find(v(2)), first);
        assert_eq!(index.component_count(), 1);
    }

    #[test]
    fn test_path_compression_points_at_root() {
        let mut index = ComponentIndex::new();
        // Chain 1-2-3-4
        index.union(v(1), v(2));
        index.union(v(2), v(3));
        index.union(v(3), v(4));
        let root = index.find(v(4)).unwrap();
        // After compression every member points directly at the root
        for id in 1..=4 {
            assert_eq!(index.parent[&id], root);
        }
    }

    #[test]
    fn test_rebuild() {
        let mut index = ComponentIndex::new();
        index.union(v(1), v(2));

        // Rebuild from a different topology: {1,2,3} connected, 4 isolated
        index.rebuild(
            (1..=4).map(v),
            vec![(v(1), v(2)), (v(2), v(3))].into_iter(),
        );
        assert!(index.same_component(v(1), v(3)));
        assert!(!index.same_component(v(1), v(4)));
        assert_eq!(index.component_count(), 2);
    }
}
