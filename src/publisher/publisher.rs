use super::{
    channel_callback::PublisherChannelCallback,
    connection_callback::PublisherConnectionCallback,
    dto::{Confirm, ConfirmVariant, OutgoingMessage, PublisherConfig},
};
use crate::{error::PublishError, retry::retry};
use amqprs::{
    channel::{BasicPublishArguments, Channel, ConfirmSelectArguments},
    connection::{Connection, OpenConnectionArguments},
};
use tokio::{sync::mpsc, time::timeout};

///
/// Publisher for the broker's default exchange.
///
/// Owns a single connection and channel for its whole lifetime:
/// [Self::connect], one or more [Self::publish] calls, [Self::close].
/// Every publish waits for the broker's publisher confirm before returning.
///
pub struct Publisher {
    config: PublisherConfig,
    connection: Connection,
    channel: Channel,
    confirm_rx: mpsc::UnboundedReceiver<Confirm>,
    next_delivery_tag: u64,
}

impl Publisher {
    #[tracing::instrument(name = "Publisher", target = "hello_publisher::publisher", skip_all)]
    pub async fn connect(config: PublisherConfig) -> Result<Self, PublishError> {
        let args = OpenConnectionArguments::new(
            &config.host,
            config.port,
            &config.username,
            &config.password,
        )
        .virtual_host(&config.vhost)
        .finish();

        tracing::info!(
            host = config.host,
            port = config.port,
            vhost = config.vhost,
            "opening connection"
        );
        let connection = retry(
            config.connect_attempts,
            config.retry_interval,
            |attempt| tracing::info!(attempt, "connection attempt"),
            |attempt, err| tracing::warn!(attempt, %err, "connection attempt failed"),
            || async { Connection::open(&args).await },
        )
        .await
        .map_err(PublishError::Connection)?;

        tracing::info!("registering connection callback");
        connection
            .register_callback(PublisherConnectionCallback)
            .await
            .map_err(PublishError::Connection)?;

        tracing::info!("opening channel");
        let channel = connection
            .open_channel(None)
            .await
            .map_err(PublishError::Channel)?;

        tracing::info!("registering channel callback");
        let (confirm_tx, confirm_rx) = mpsc::unbounded_channel();
        channel
            .register_callback(PublisherChannelCallback::new(confirm_tx))
            .await
            .map_err(PublishError::Channel)?;

        tracing::info!("enabling publisher confirms");
        channel
            .confirm_select(ConfirmSelectArguments::new(false))
            .await
            .map_err(PublishError::Channel)?;

        tracing::info!("connection ready");

        Ok(Self {
            config,
            connection,
            channel,
            confirm_rx,
            next_delivery_tag: 1,
        })
    }

    ///
    /// Publish a single message to the default exchange and wait for the
    /// broker to confirm it.
    ///
    #[tracing::instrument(name = "Publisher", target = "hello_publisher::publisher", skip_all)]
    pub async fn publish(&mut self, message: OutgoingMessage) -> Result<(), PublishError> {
        if message.routing_key.is_empty() {
            return Err(PublishError::EmptyRoutingKey);
        }

        // confirm mode numbers messages from 1 per channel
        let delivery_tag = self.next_delivery_tag;
        self.next_delivery_tag += 1;

        // blank exchange name selects the default exchange, which routes
        // directly to the queue named by the routing key
        let args = BasicPublishArguments::new("", &message.routing_key);

        tracing::info!(
            routing_key = message.routing_key,
            len = message.payload.len(),
            "publishing message"
        );
        self.channel
            .basic_publish(message.properties(), message.payload, args)
            .await
            .map_err(PublishError::Publish)?;

        tracing::info!(delivery_tag, "waiting for publisher confirm");
        self.wait_for_confirm(delivery_tag).await?;

        tracing::info!(delivery_tag, "message confirmed");

        Ok(())
    }

    async fn wait_for_confirm(&mut self, delivery_tag: u64) -> Result<(), PublishError> {
        let confirm_timeout = self.config.confirm_timeout;

        timeout(confirm_timeout, async {
            loop {
                let Some(confirm) = self.confirm_rx.recv().await else {
                    // callback dropped together with the amqp channel
                    return Err(PublishError::ConnectionLost);
                };

                if !confirm.settles(delivery_tag) {
                    continue;
                }

                return match confirm.variant {
                    ConfirmVariant::Ack => Ok(()),
                    ConfirmVariant::Nack => Err(PublishError::Rejected { delivery_tag }),
                };
            }
        })
        .await
        .map_err(|_| PublishError::ConfirmTimeout {
            timeout: confirm_timeout,
        })?
    }

    ///
    /// Close channel and connection. Teardown failures are logged, not returned.
    ///
    #[tracing::instrument(name = "Publisher", target = "hello_publisher::publisher", skip_all)]
    pub async fn close(self) {
        tracing::info!("closing channel");
        if let Err(err) = self.channel.close().await {
            tracing::warn!(%err, "closing channel failed");
        }

        tracing::info!("closing connection");
        if let Err(err) = self.connection.close().await {
            tracing::warn!(%err, "closing connection failed");
        }

        tracing::info!("publisher closed");
    }
}
