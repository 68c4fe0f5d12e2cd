// Adapters layer: concrete implementations of the domain ports.

pub mod ids;
pub mod storage;

pub use ids::{SequentialIdGenerator, UuidGenerator};
pub use storage::LocalStorage;
