use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("connection error: {0}")]
    Connection(#[source] amqprs::error::Error),

    #[error("channel setup error: {0}")]
    Channel(#[source] amqprs::error::Error),

    #[error("publish error: {0}")]
    Publish(#[source] amqprs::error::Error),

    #[error("message rejected by broker (delivery tag {delivery_tag})")]
    Rejected { delivery_tag: u64 },

    #[error("connection lost while waiting for publisher confirm")]
    ConnectionLost,

    #[error("no publisher confirm within {timeout:?}")]
    ConfirmTimeout { timeout: Duration },

    #[error("validation error: routing key is empty")]
    EmptyRoutingKey,
}
