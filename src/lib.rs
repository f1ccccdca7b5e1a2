mod error;
mod publisher;
mod retry;

pub use error::PublishError;
pub use publisher::{OutgoingMessage, Publisher, PublisherConfig};
