use amqprs::{connection::Connection, Close};
use async_trait::async_trait;

pub struct PublisherConnectionCallback;

#[async_trait]
impl amqprs::callbacks::ConnectionCallback for PublisherConnectionCallback {
    #[tracing::instrument(
        name = "Publisher Connection Callback",
        target = "hello_publisher::connection_callback",
        skip_all
    )]
    async fn close(
        &mut self,
        _connection: &Connection,
        close: Close,
    ) -> Result<(), amqprs::error::Error> {
        tracing::warn!(
            code = close.reply_code(),
            text = close.reply_text(),
            "received close",
        );

        Ok(())
    }

    #[tracing::instrument(
        name = "Publisher Connection Callback",
        target = "hello_publisher::connection_callback",
        skip_all
    )]
    async fn blocked(&mut self, _connection: &Connection, reason: String) {
        tracing::warn!(reason, "received blocked");
    }

    #[tracing::instrument(
        name = "Publisher Connection Callback",
        target = "hello_publisher::connection_callback",
        skip_all
    )]
    async fn unblocked(&mut self, _connection: &Connection) {
        tracing::info!("received unblocked");
    }
}
