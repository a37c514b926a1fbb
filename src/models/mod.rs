pub mod ack;
pub mod credentials;
pub mod marcaje;
pub mod schedule;
pub mod snapshot;
pub mod status;
