//! Single-process superstep driver for vertex programs
//!
//! Runs a [`VertexProgram`] over every vertex of a store, one superstep at a
//! time: compute over all vertices, advance the messenger barrier, refresh
//! the view's edge snapshot, repeat until the program signals termination,
//! then merge the overlay back into the store. Per-vertex execution order
//! within a superstep is unspecified; barrier semantics make the result
//! independent of it. Distribution across processes is an external runtime's
//! concern and goes through the same [`Messenger`] contract.

use super::messenger::LocalMessenger;
use crate::graph::store::{GraphResult, GraphStore};
use crate::graph::VertexId;
use rustc_hash::FxHashSet;
use tracing::debug;

/// One per-vertex computation executed under BSP semantics
pub trait VertexProgram<M> {
    /// Property keys the program writes through the computer view
    fn compute_keys(&self) -> FxHashSet<String>;

    /// Called once before superstep 0
    fn setup(&mut self, _store: &mut GraphStore, _messenger: &mut LocalMessenger<M>) {}

    /// Per-vertex work for one superstep
    ///
    /// The program may read the graph, write its own vertex's compute keys
    /// (routed through the active view) and send messages. It must not
    /// mutate another vertex's state directly.
    fn compute(
        &mut self,
        vertex: VertexId,
        store: &mut GraphStore,
        messenger: &mut LocalMessenger<M>,
        superstep: u64,
    ) -> GraphResult<()>;

    /// Whether the computation is finished after `superstep` supersteps
    fn terminate(&self, superstep: u64, messenger: &LocalMessenger<M>) -> bool;
}

/// Execute a vertex program to completion; returns the superstep count
pub fn execute_program<M, P: VertexProgram<M>>(
    store: &mut GraphStore,
    program: &mut P,
) -> GraphResult<u64> {
    store.create_computer_view(program.compute_keys())?;
    let mut messenger = LocalMessenger::new();
    program.setup(store, &mut messenger);

    let mut superstep = 0u64;
    loop {
        let vertices: Vec<VertexId> = store.vertex_ids().collect();
        for vertex in vertices {
            if let Err(err) = program.compute(vertex, store, &mut messenger, superstep) {
                // Cancellation is only safe at barrier boundaries; discard
                // the overlay rather than merge torn state.
                store.drop_computer_view()?;
                return Err(err);
            }
        }

        // Barrier: publish this superstep's messages and edge additions
        messenger.advance_superstep();
        store.refresh_view_edges()?;
        superstep += 1;

        if program.terminate(superstep, &messenger) {
            break;
        }
    }

    debug!(supersteps = superstep, "vertex program finished");
    store.complete_computer_view()?;
    Ok(superstep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::computer::messenger::{MessageType, Messenger};
    use crate::graph::{Cardinality, PropertyValue};

    /// Flood-fill of the minimum seen vertex id, a miniature connected
    /// components program
    struct MinIdProgram {
        rounds: u64,
        channel: MessageType,
    }

    impl MinIdProgram {
        fn new(rounds: u64) -> Self {
            MinIdProgram {
                rounds,
                channel: MessageType::new("min-id"),
            }
        }
    }

    impl VertexProgram<u64> for MinIdProgram {
        fn compute_keys(&self) -> FxHashSet<String> {
            let mut keys = FxHashSet::default();
            keys.insert("component".to_string());
            keys
        }

        fn compute(
            &mut self,
            vertex: VertexId,
            store: &mut GraphStore,
            messenger: &mut LocalMessenger<u64>,
            superstep: u64,
        ) -> GraphResult<()> {
            let current = if superstep == 0 {
                vertex.as_u64()
            } else {
                let inbox_min = messenger
                    .receive_messages(vertex, &self.channel)
                    .iter()
                    .copied()
                    .min();
                let stored = store
                    .vertex_property(vertex, "component")?
                    .and_then(|p| p.value.as_integer())
                    .unwrap_or(vertex.as_u64() as i64) as u64;
                inbox_min.map_or(stored, |m| m.min(stored))
            };

            store.set_vertex_property(
                vertex,
                Cardinality::Single,
                "component",
                PropertyValue::Integer(current as i64),
            )?;

            let neighbours: Vec<VertexId> = store
                .vertices_of(vertex, crate::graph::Direction::Both, &[])?
                .collect();
            for n in neighbours {
                messenger.send_message(n, &self.channel, current);
            }
            Ok(())
        }

        fn terminate(&self, superstep: u64, _messenger: &LocalMessenger<u64>) -> bool {
            superstep >= self.rounds
        }
    }

    #[test]
    fn test_min_id_flood_fill() {
        let mut store = GraphStore::new();
        // Path 1-2-3 plus isolated 4
        let v1 = store.add_vertex("n", None).unwrap();
        let v2 = store.add_vertex("n", None).unwrap();
        let v3 = store.add_vertex("n", None).unwrap();
        let v4 = store.add_vertex("n", None).unwrap();
        store.add_edge(v1, v2, "link", None).unwrap();
        store.add_edge(v2, v3, "link", None).unwrap();

        let mut program = MinIdProgram::new(3);
        let supersteps = execute_program(&mut store, &mut program).unwrap();
        assert_eq!(supersteps, 3);
        assert!(!store.in_computer_mode());

        // Merged results: connected vertices converge on the minimum id
        for v in [v1, v2, v3] {
            let component = store.vertex_property(v, "component").unwrap().unwrap();
            assert_eq!(component.value.as_integer(), Some(v1.as_u64() as i64));
        }
        let isolated = store.vertex_property(v4, "component").unwrap().unwrap();
        assert_eq!(isolated.value.as_integer(), Some(v4.as_u64() as i64));
    }
}
