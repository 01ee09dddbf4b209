//! Message routing between vertices during graph computation
//!
//! The messenger is the routing contract of BSP execution: messages sent
//! during superstep N become visible to `receive_messages` only once the
//! barrier advances to superstep N+1. A distributed runtime may implement
//! the same trait over wire transport; [`LocalMessenger`] is the
//! single-process, state-sharing realization.

use crate::graph::VertexId;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// Named message channel; messages of different types never intermix
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct MessageType(String);

impl MessageType {
    pub fn new(name: impl Into<String>) -> Self {
        MessageType(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MessageType {
    fn from(s: &str) -> Self {
        MessageType(s.to_string())
    }
}

impl From<String> for MessageType {
    fn from(s: String) -> Self {
        MessageType(s)
    }
}

/// Routing contract between vertices in computer mode
pub trait Messenger<M> {
    /// Queue a message for a vertex; deliverable only after the next barrier
    fn send_message(&mut self, vertex: VertexId, message_type: &MessageType, message: M);

    /// Messages delivered to a vertex for a type in the current superstep
    fn receive_messages(&self, vertex: VertexId, message_type: &MessageType) -> &[M];
}

/// In-memory, double-buffered messenger
///
/// Sends go to the outgoing buffer; [`LocalMessenger::advance_superstep`] is
/// the barrier that publishes them as the next superstep's inbox. Delivery
/// within one transition is exact: no duplication, no loss. Order within a
/// (vertex, type) channel follows send order but is not part of the
/// contract.
#[derive(Debug)]
pub struct LocalMessenger<M> {
    incoming: FxHashMap<MessageType, FxHashMap<VertexId, Vec<M>>>,
    outgoing: FxHashMap<MessageType, FxHashMap<VertexId, Vec<M>>>,
}

impl<M> LocalMessenger<M> {
    pub fn new() -> Self {
        LocalMessenger {
            incoming: FxHashMap::default(),
            outgoing: FxHashMap::default(),
        }
    }

    /// Barrier: expose superstep N's sends as superstep N+1's inbox
    ///
    /// The previous inbox is dropped; anything a vertex did not consume in
    /// its superstep is gone.
    pub fn advance_superstep(&mut self) {
        trace!(pending_types = self.outgoing.len(), "messenger barrier advance");
        self.incoming = std::mem::take(&mut self.outgoing);
    }

    /// Whether any message is queued for the next superstep
    pub fn has_pending_messages(&self) -> bool {
        self.outgoing
            .values()
            .any(|per_vertex| per_vertex.values().any(|msgs| !msgs.is_empty()))
    }

    /// Total messages deliverable in the current superstep
    pub fn delivered_count(&self) -> usize {
        self.incoming
            .values()
            .flat_map(|per_vertex| per_vertex.values())
            .map(|msgs| msgs.len())
            .sum()
    }
}

impl<M> Default for LocalMessenger<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Messenger<M> for LocalMessenger<M> {
    fn send_message(&mut self, vertex: VertexId, message_type: &MessageType, message: M) {
        self.outgoing
            .entry(message_type.clone())
            .or_default()
            .entry(vertex)
            .or_default()
            .push(message);
    }

    fn receive_messages(&self, vertex: VertexId, message_type: &MessageType) -> &[M] {
        self.incoming
            .get(message_type)
            .and_then(|per_vertex| per_vertex.get(&vertex))
            .map(|msgs| msgs.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(id: u64) -> VertexId {
        VertexId::new(id)
    }

    #[test]
    fn test_messages_invisible_before_barrier() {
        let mut messenger: LocalMessenger<i64> = LocalMessenger::new();
        let counter = MessageType::new("counter");

        messenger.send_message(v(1), &counter, 7);
        assert!(messenger.receive_messages(v(1), &counter).is_empty());
        assert!(messenger.has_pending_messages());

        messenger.advance_superstep();
        assert_eq!(messenger.receive_messages(v(1), &counter), &[7]);
        assert!(!messenger.has_pending_messages());
    }

    #[test]
    fn test_message_types_do_not_intermix() {
        let mut messenger: LocalMessenger<i64> = LocalMessenger::new();
        let a = MessageType::new("a");
        let b = MessageType::new("b");

        messenger.send_message(v(1), &a, 1);
        messenger.send_message(v(1), &b, 2);
        messenger.advance_superstep();

        assert_eq!(messenger.receive_messages(v(1), &a), &[1]);
        assert_eq!(messenger.receive_messages(v(1), &b), &[2]);
    }

    #[test]
    fn test_unconsumed_messages_dropped_at_next_barrier() {
        let mut messenger: LocalMessenger<i64> = LocalMessenger::new();
        let t = MessageType::new("t");

        messenger.send_message(v(1), &t, 1);
        messenger.advance_superstep();
        assert_eq!(messenger.delivered_count(), 1);

        // Nothing sent this superstep; the old inbox does not survive
        messenger.advance_superstep();
        assert!(messenger.receive_messages(v(1), &t).is_empty());
        assert_eq!(messenger.delivered_count(), 0);
    }

    #[test]
    fn test_exact_delivery_per_vertex() {
        let mut messenger: LocalMessenger<i64> = LocalMessenger::new();
        let t = MessageType::new("t");

        messenger.send_message(v(1), &t, 10);
        messenger.send_message(v(1), &t, 11);
        messenger.send_message(v(2), &t, 20);
        messenger.advance_superstep();

        assert_eq!(messenger.receive_messages(v(1), &t), &[10, 11]);
        assert_eq!(messenger.receive_messages(v(2), &t), &[20]);
        assert!(messenger.receive_messages(v(3), &t).is_empty());
    }
}
