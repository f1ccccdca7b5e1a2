//!
//! Module that publishes messages to the default exchange of a RabbitMQ server.
//!

mod channel_callback;
mod connection_callback;
mod dto;
mod publisher;

pub use dto::{OutgoingMessage, PublisherConfig};
pub use publisher::Publisher;
