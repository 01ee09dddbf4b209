//! Core property-graph implementation
//!
//! Implements the element store (vertices, edges, identifier allocation),
//! the multi-valued cardinality-constrained property model, the per-vertex
//! per-label adjacency index and the reachability entry point.

pub mod edge;
pub mod ids;
pub mod property;
pub mod store;
pub mod types;
pub mod vertex;

// Re-export main types
pub use edge::Edge;
pub use ids::{CounterIdManager, IdManager};
pub use property::{PropertyValue, VertexProperty};
pub use store::{GraphError, GraphResult, GraphStore};
pub use types::{Cardinality, Direction, EdgeId, Label, PropertyId, VertexId};
pub use vertex::Vertex;
