//! Event bus adapters owned by the infrastructure layer.

pub mod broadcast;

pub use broadcast::BroadcastEventBus;
