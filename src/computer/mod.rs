//! Graph-computer (BSP) mode: overlay view, message routing, superstep driver

pub mod messenger;
pub mod program;
pub mod view;

pub use messenger::{LocalMessenger, MessageType, Messenger};
pub use program::{execute_program, VertexProgram};
pub use view::ComputerView;
