//! Concrete collaborators for the engine ports.

pub mod ack_store;
pub mod attendance;
pub mod clock;
pub mod config_store;
pub mod debug;
pub mod memory;
