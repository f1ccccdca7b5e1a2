use amqprs::BasicProperties;

///
/// Message published to the broker. Constructed right before the publish
/// call and consumed by it.
///
pub struct OutgoingMessage {
    pub routing_key: String,
    pub payload: Vec<u8>,
    pub content_type: String,
    pub persistent: bool,
}

impl OutgoingMessage {
    ///
    /// Plain-text, non-persistent message routed by the default exchange
    /// to the queue named by the routing key.
    ///
    pub fn text(routing_key: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            routing_key: routing_key.into(),
            payload: body.into().into_bytes(),
            content_type: "text/plain".to_string(),
            persistent: false,
        }
    }

    pub(crate) fn properties(&self) -> BasicProperties {
        BasicProperties::default()
            .with_content_type(&self.content_type)
            .with_persistence(self.persistent)
            .finish()
    }
}
