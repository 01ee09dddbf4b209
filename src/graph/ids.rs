//! Identifier allocation for vertices, edges and vertex properties
//!
//! The store owns one manager per identifier namespace. The default strategy
//! is a monotonic counter; callers may supply their own identifiers, in which
//! case the counter is kept ahead of every reserved value so later automatic
//! allocations never collide. Identifiers are never reused for the lifetime
//! of the graph.

/// Allocation strategy for one identifier namespace
pub trait IdManager: std::fmt::Debug + Send {
    /// Allocate the next free identifier
    fn next(&mut self) -> u64;

    /// Record a caller-supplied identifier so `next` skips past it
    fn reserve(&mut self, id: u64);
}

/// Default strategy: monotonic counter starting at 1
#[derive(Debug, Clone)]
pub struct CounterIdManager {
    next_id: u64,
}

impl CounterIdManager {
    pub fn new() -> Self {
        CounterIdManager { next_id: 1 }
    }
}

impl Default for CounterIdManager {
    fn default() -> Self {
        Self::new()
    }
}

impl IdManager for CounterIdManager {
    fn next(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn reserve(&mut self, id: u64) {
        if id >= self.next_id {
            self.next_id = id + 1;
        }
    }
}
