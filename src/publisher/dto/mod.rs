mod confirm;
mod message;
mod publisher_config;

pub use confirm::{Confirm, ConfirmVariant};
pub use message::OutgoingMessage;
pub use publisher_config::PublisherConfig;
