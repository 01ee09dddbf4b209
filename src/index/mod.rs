//! Secondary indices: property lookups and connected components

pub mod component;
pub mod property_index;

pub use component::ComponentIndex;
pub use property_index::{PropertyIndex, PropertyIndexManager};
