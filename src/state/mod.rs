//! State Management
//!
//! Global application state, the polling cycles that feed it, and the
//! request sequencing that keeps overlapping cycles in order.

pub mod global;
pub mod polling;
pub mod sequence;

pub use global::{provide_global_state, ConnectionStatus, GlobalState, SensorReading, SensorStats};
pub use polling::start_polling;
pub use sequence::RequestSequencer;
