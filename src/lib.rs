//! Arbor Graph
//!
//! An embeddable, in-memory property-graph engine with indexed adjacency
//! traversal, incremental connectivity indexing and a bulk-synchronous
//! (graph-computer) execution mode.
//!
//! # Architecture
//!
//! - `graph` — element store, identifier allocation, the multi-valued
//!   cardinality-constrained property model and the per-vertex, per-label
//!   adjacency index
//! - `index` — secondary (key, value) property indices and the union-find
//!   connected-component index backing `can_reach`
//! - `computer` — the BSP overlay: superstep-scoped view of vertex state,
//!   barrier-delimited message routing and a single-process driver
//!
//! The engine assumes a single logical writer in direct mode; graph-computer
//! mode isolates in-flight vertex state behind a view that is merged back
//! only when the computation completes.
//!
//! ## Example Usage
//!
//! ```rust
//! use arbor::graph::{Cardinality, GraphStore};
//!
//! let mut store = GraphStore::new();
//!
//! // Create vertices
//! let marko = store.add_vertex("person", None).unwrap();
//! let vadas = store.add_vertex("person", None).unwrap();
//!
//! // Set properties
//! store.set_vertex_property(marko, Cardinality::Single, "name", "marko").unwrap();
//! store.set_vertex_property(vadas, Cardinality::Single, "name", "vadas").unwrap();
//!
//! // Create an edge and query connectivity
//! store.add_edge(marko, vadas, "knows", None).unwrap();
//! store.enable_component_index();
//! assert!(store.can_reach(vadas, marko).unwrap());
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod computer;
pub mod graph;
pub mod index;

// Re-export main types for convenience
pub use graph::{
    Cardinality, CounterIdManager, Direction, Edge, EdgeId, GraphError, GraphResult, GraphStore,
    IdManager, Label, PropertyId, PropertyValue, Vertex, VertexId, VertexProperty,
};

pub use index::{ComponentIndex, PropertyIndex, PropertyIndexManager};

pub use computer::{
    execute_program, ComputerView, LocalMessenger, MessageType, Messenger, VertexProgram,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
