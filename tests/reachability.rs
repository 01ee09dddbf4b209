use arbor::graph::{GraphError, GraphStore, VertexId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn path_graph(store: &mut GraphStore, n: usize) -> Vec<VertexId> {
    let ids: Vec<VertexId> = (0..n)
        .map(|_| store.add_vertex("node", None).unwrap())
        .collect();
    for pair in ids.windows(2) {
        store.add_edge(pair[0], pair[1], "link", None).unwrap();
    }
    ids
}

#[test]
fn test_path_reachability_bfs() {
    let mut store = GraphStore::new();

    // 1 -> 2 -> 3 -> 4
    let ids = path_graph(&mut store, 4);

    // Reachability ignores edge direction
    assert!(store.can_reach(ids[0], ids[3]).unwrap());
    assert!(store.can_reach(ids[3], ids[0]).unwrap());

    let lonely = store.add_vertex("node", None).unwrap();
    assert!(!store.can_reach(ids[0], lonely).unwrap());
    assert!(store.can_reach(lonely, lonely).unwrap());
}

#[test]
fn test_path_reachability_with_component_index() {
    let mut store = GraphStore::new();
    let ids = path_graph(&mut store, 4);
    store.enable_component_index();
    assert!(store.is_component_index_enabled());

    assert!(store.can_reach(ids[0], ids[3]).unwrap());
    assert!(store.can_reach(ids[2], ids[1]).unwrap());

    // Edges added after enabling keep the index current
    let fresh = store.add_vertex("node", None).unwrap();
    assert!(!store.can_reach(ids[0], fresh).unwrap());
    store.add_edge(ids[3], fresh, "link", None).unwrap();
    assert!(store.can_reach(ids[0], fresh).unwrap());
}

#[test]
fn test_triangles_and_bridge() {
    let mut store = GraphStore::new();

    // Two disjoint triangles
    let a: Vec<VertexId> = (0..3)
        .map(|_| store.add_vertex("node", None).unwrap())
        .collect();
    let b: Vec<VertexId> = (0..3)
        .map(|_| store.add_vertex("node", None).unwrap())
        .collect();
    for tri in [&a, &b] {
        store.add_edge(tri[0], tri[1], "link", None).unwrap();
        store.add_edge(tri[1], tri[2], "link", None).unwrap();
        store.add_edge(tri[2], tri[0], "link", None).unwrap();
    }

    store.enable_component_index();
    assert!(!store.can_reach(a[0], b[0]).unwrap());

    // Bridge merges the components
    store.add_edge(a[2], b[1], "bridge", None).unwrap();
    for &x in &a {
        for &y in &b {
            assert!(store.can_reach(x, y).unwrap());
            assert!(store.can_reach(y, x).unwrap());
        }
    }

    // Unrelated insertions leave the merged component intact
    let c1 = store.add_vertex("node", None).unwrap();
    let c2 = store.add_vertex("node", None).unwrap();
    store.add_edge(c1, c2, "link", None).unwrap();
    assert!(store.can_reach(a[0], b[2]).unwrap());
    assert!(!store.can_reach(a[0], c1).unwrap());
}

#[test]
fn test_missing_endpoint_is_an_error() {
    let mut store = GraphStore::new();
    let v = store.add_vertex("node", None).unwrap();
    let ghost = VertexId::new(9999);

    assert!(matches!(
        store.can_reach(v, ghost),
        Err(GraphError::VertexNotFound(id)) if id == ghost
    ));
    assert!(matches!(
        store.can_reach(ghost, v),
        Err(GraphError::VertexNotFound(_))
    ));

    store.remove_vertex(v).unwrap();
    assert!(matches!(
        store.can_reach(v, v),
        Err(GraphError::ElementAlreadyRemoved(_))
    ));
}

#[test]
fn test_index_disable_falls_back_to_bfs() {
    let mut store = GraphStore::new();
    let ids = path_graph(&mut store, 3);

    store.enable_component_index();
    assert!(store.can_reach(ids[0], ids[2]).unwrap());

    store.disable_component_index();
    assert!(!store.is_component_index_enabled());
    assert!(store.can_reach(ids[0], ids[2]).unwrap());
}

#[test]
fn test_index_matches_bfs_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..10 {
        let mut indexed = GraphStore::new();
        let mut plain = GraphStore::new();
        indexed.enable_component_index();

        let n = 30;
        let ids_a: Vec<VertexId> = (0..n)
            .map(|_| indexed.add_vertex("node", None).unwrap())
            .collect();
        let ids_b: Vec<VertexId> = (0..n)
            .map(|_| plain.add_vertex("node", None).unwrap())
            .collect();

        // Sparse random wiring keeps several components around
        for _ in 0..20 {
            let i = rng.gen_range(0..n);
            let j = rng.gen_range(0..n);
            indexed.add_edge(ids_a[i], ids_a[j], "link", None).unwrap();
            plain.add_edge(ids_b[i], ids_b[j], "link", None).unwrap();
        }

        for i in 0..n {
            for j in 0..n {
                assert_eq!(
                    indexed.can_reach(ids_a[i], ids_a[j]).unwrap(),
                    plain.can_reach(ids_b[i], ids_b[j]).unwrap(),
                    "index and traversal disagree on {} -> {}",
                    i,
                    j
                );
            }
        }
    }
}

#[test]
fn test_removal_keeps_index_an_over_approximation() {
    let mut store = GraphStore::new();
    let ids = path_graph(&mut store, 3);
    store.enable_component_index();

    // Cutting the middle vertex disconnects the endpoints; the index may
    // still report them connected until rebuilt, but BFS must not
    store.remove_vertex(ids[1]).unwrap();

    store.disable_component_index();
    assert!(!store.can_reach(ids[0], ids[2]).unwrap());

    // Re-enabling rebuilds from live elements
    store.enable_component_index();
    assert!(!store.can_reach(ids[0], ids[2]).unwrap());
}
