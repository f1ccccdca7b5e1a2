use super::dto::{Confirm, ConfirmVariant};
use amqprs::{channel::Channel, Ack, BasicProperties, Cancel, CloseChannel, Nack, Return};
use async_trait::async_trait;
use tokio::sync::mpsc;

pub struct PublisherChannelCallback {
    confirm_tx: mpsc::UnboundedSender<Confirm>,
}

impl PublisherChannelCallback {
    pub fn new(confirm_tx: mpsc::UnboundedSender<Confirm>) -> Self {
        Self { confirm_tx }
    }
}

#[async_trait]
impl amqprs::callbacks::ChannelCallback for PublisherChannelCallback {
    #[tracing::instrument(
        name = "Publisher Channel Callback",
        target = "hello_publisher::channel_callback",
        skip_all
    )]
    async fn close(
        &mut self,
        _channel: &Channel,
        close: CloseChannel,
    ) -> Result<(), amqprs::error::Error> {
        tracing::error!(
            code = close.reply_code(),
            text = close.reply_text(),
            "received close",
        );
        Ok(())
    }

    async fn cancel(
        &mut self,
        _channel: &Channel,
        _cancel: Cancel,
    ) -> Result<(), amqprs::error::Error> {
        Ok(())
    }

    #[tracing::instrument(
        name = "Publisher Channel Callback",
        target = "hello_publisher::channel_callback",
        skip_all
    )]
    async fn flow(
        &mut self,
        _channel: &Channel,
        active: bool,
    ) -> Result<bool, amqprs::error::Error> {
        tracing::trace!(flow = active, "received flow");

        Ok(active)
    }

    #[tracing::instrument(
        name = "Publisher Channel Callback",
        target = "hello_publisher::channel_callback",
        skip_all
    )]
    async fn publish_ack(&mut self, _channel: &Channel, ack: Ack) {
        tracing::trace!(
            delivery_tag = ack.delivery_tag(),
            multiple = ack.mutiple(),
            "received ack"
        );

        let confirm = Confirm {
            delivery_tag: ack.delivery_tag(),
            multiple: ack.mutiple(),
            variant: ConfirmVariant::Ack,
        };
        if self.confirm_tx.send(confirm).is_err() {
            tracing::error!("confirm channel closed");
        }
    }

    #[tracing::instrument(
        name = "Publisher Channel Callback",
        target = "hello_publisher::channel_callback",
        skip_all
    )]
    async fn publish_nack(&mut self, _channel: &Channel, nack: Nack) {
        tracing::trace!(
            delivery_tag = nack.delivery_tag(),
            multiple = nack.multiple(),
            "received nack"
        );

        let confirm = Confirm {
            delivery_tag: nack.delivery_tag(),
            multiple: nack.multiple(),
            variant: ConfirmVariant::Nack,
        };
        if self.confirm_tx.send(confirm).is_err() {
            tracing::error!("confirm channel closed");
        }
    }

    #[tracing::instrument(
        name = "Publisher Channel Callback",
        target = "hello_publisher::channel_callback",
        skip_all
    )]
    async fn publish_return(
        &mut self,
        _channel: &Channel,
        ret: Return,
        _basic_properties: BasicProperties,
        _content: Vec<u8>,
    ) {
        tracing::warn!(
            code = ret.reply_code(),
            text = ret.reply_text(),
            "received return",
        );
    }
}
