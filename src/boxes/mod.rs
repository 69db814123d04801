//! Box registry: the ten boxes and their one-way state transitions.

pub mod instance;
pub mod registry;

pub use instance::GameBox;
pub use registry::{validate_values, BoxRegistry, ValueBoardEntry, BOX_COUNT};
