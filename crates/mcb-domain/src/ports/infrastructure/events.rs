//!
//! **Documentation**: [docs/modules/domain.md](../../../../../docs/modules/domain.md)
//!
//! Event bus provider port: typed pub/sub for [`crate::events::DomainEvent`],
//! plus a low-level raw topic API for transports that don't want to carry
//! the full enum (e.g. a bridge to an external message bus).

use std::pin::Pin;

use async_trait::async_trait;
use futures::Stream;

use crate::error::Result;
use crate::events::DomainEvent;

/// Boxed async stream of domain events.
pub type DomainEventStream = Pin<Box<dyn Stream<Item = DomainEvent> + Send + Sync + 'static>>;

/// Event bus provider interface for typed event pub/sub.
#[async_trait]
pub trait EventBusProvider: Send + Sync {
    /// Publish a typed domain event to every subscriber.
    async fn publish_event(&self, event: DomainEvent) -> Result<()>;
    /// Subscribe to the stream of typed domain events.
    async fn subscribe_events(&self) -> Result<DomainEventStream>;
    /// Whether at least one subscriber is currently attached.
    fn has_subscribers(&self) -> bool;

    /// Publish a raw payload to a named topic, bypassing the typed enum.
    async fn publish(&self, topic: &str, payload: &[u8]) -> Result<()>;
    /// Subscribe to a named topic, returning a subscription identifier.
    async fn subscribe(&self, topic: &str) -> Result<String>;
}
