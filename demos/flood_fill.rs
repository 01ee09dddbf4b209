//! Connected-components via a BSP vertex program
//!
//! Builds a small social graph, floods the minimum vertex id through each
//! component and prints the converged labels.

use arbor::computer::{
    execute_program, LocalMessenger, MessageType, Messenger, VertexProgram,
};
use arbor::graph::{Cardinality, Direction, GraphResult, GraphStore, VertexId};
use rustc_hash::FxHashSet;

struct ComponentProgram {
    rounds: u64,
    channel: MessageType,
}

impl VertexProgram<u64> for ComponentProgram {
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
            let inbox = messenger
                .receive_messages(vertex, &self.channel)
                .iter()
                .copied()
                .min();
            let stored = store
                .vertex_property(vertex, "component")?
                .and_then(|p| p.value.as_integer())
                .unwrap_or(vertex.as_u64() as i64) as u64;
            inbox.map_or(stored, |m| m.min(stored))
        };
        store.set_vertex_property(vertex, Cardinality::Single, "component", current as i64)?;

        let neighbours: Vec<VertexId> = store
            .vertices_of(vertex, Direction::Both, &[])?
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

fn main() -> GraphResult<()> {
    tracing_subscriber::fmt::init();

    let mut store = GraphStore::new();

    let names = ["marko", "vadas", "josh", "peter", "lop", "ripple"];
    let mut ids = Vec::new();
    for name in names {
        let v = store.add_vertex("person", None)?;
        store.set_vertex_property(v, Cardinality::Single, "name", name)?;
        ids.push(v);
    }

    // Two components: {marko, vadas, josh} and {peter, lop, ripple}
    store.add_edge(ids[0], ids[1], "knows", None)?;
    store.add_edge(ids[0], ids[2], "knows", None)?;
    store.add_edge(ids[3], ids[4], "created", None)?;
    store.add_edge(ids[4], ids[5], "depends_on", None)?;

    let mut program = ComponentProgram {
        rounds: 4,
        channel: MessageType::new("component"),
    };
    let supersteps = execute_program(&mut store, &mut program)?;
    println!("converged after {} supersteps", supersteps);

    for (&v, name) in ids.iter().zip(names) {
        let component = store
            .vertex_property(v, "component")?
            .and_then(|p| p.value.as_integer())
            .unwrap_or(-1);
        println!("{:>8} -> component {}", name, component);
    }

    store.enable_component_index();
    println!(
        "marko can reach vadas: {}",
        store.can_reach(ids[0], ids[1])?
    );
    println!(
        "marko can reach ripple: {}",
        store.can_reach(ids[0], ids[5])?
    );
    Ok(())
}
