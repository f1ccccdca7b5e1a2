use std::time::Duration;

///
/// Broker connection settings for [Publisher](crate::Publisher).
///
#[derive(Clone)]
pub struct PublisherConfig {
    pub host: String,
    pub port: u16,
    pub vhost: String,
    pub username: String,
    pub password: String,

    /// How many times opening the connection is attempted before giving up.
    pub connect_attempts: u32,
    /// Pause between connection attempts.
    pub retry_interval: Duration,
    /// How long to wait for the broker to confirm a published message.
    pub confirm_timeout: Duration,
}
