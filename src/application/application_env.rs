use hello_publisher::PublisherConfig;
use std::time::Duration;

pub struct ApplicationEnv {
    pub host: String,
    pub port: u16,
    pub vhost: String,
    pub username: String,
    pub password: String,

    pub routing_key: String,
    pub message_body: String,

    pub connect_attempts: u32,
    pub retry_interval: Duration,
    pub confirm_timeout: Duration,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let host = Self::env_var_or("HELLO_PUBLISHER_HOST", "localhost");
        let port = Self::env_var_or("HELLO_PUBLISHER_PORT", "5672").parse()?;
        let vhost = Self::env_var_or("HELLO_PUBLISHER_VHOST", "/");
        let username = Self::env_var_or("HELLO_PUBLISHER_USERNAME", "guest");
        let password = Self::env_var_or("HELLO_PUBLISHER_PASSWORD", "guest");
        let routing_key = Self::env_var_or("HELLO_PUBLISHER_ROUTING_KEY", "testQ");
        let message_body = Self::env_var_or("HELLO_PUBLISHER_MESSAGE_BODY", "Hello World!");
        let connect_attempts = Self::env_var_or("HELLO_PUBLISHER_CONNECT_ATTEMPTS", "3").parse()?;
        let retry_interval = Self::env_var_or("HELLO_PUBLISHER_RETRY_INTERVAL", "5").parse()?;
        let retry_interval = Duration::from_secs(retry_interval);
        let confirm_timeout = Self::env_var_or("HELLO_PUBLISHER_CONFIRM_TIMEOUT", "30").parse()?;
        let confirm_timeout = Duration::from_secs(confirm_timeout);

        Ok(Self {
            host,
            port,
            vhost,
            username,
            password,
            routing_key,
            message_body,
            connect_attempts,
            retry_interval,
            confirm_timeout,
        })
    }

    pub fn publisher_config(&self) -> PublisherConfig {
        PublisherConfig {
            host: self.host.clone(),
            port: self.port,
            vhost: self.vhost.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            connect_attempts: self.connect_attempts,
            retry_interval: self.retry_interval,
            confirm_timeout: self.confirm_timeout,
        }
    }

    fn env_var_or(name: &'static str, default: &str) -> String {
        std::env::var(name).unwrap_or_else(|_| default.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // single test so the process environment is not touched concurrently
    #[test]
    fn parse_uses_script_defaults_and_env_overrides() {
        std::env::remove_var("HELLO_PUBLISHER_PORT");

        let env = ApplicationEnv::parse().unwrap();
        assert_eq!(env.host, "localhost");
        assert_eq!(env.port, 5672);
        assert_eq!(env.vhost, "/");
        assert_eq!(env.username, "guest");
        assert_eq!(env.password, "guest");
        assert_eq!(env.routing_key, "testQ");
        assert_eq!(env.message_body, "Hello World!");

        std::env::set_var("HELLO_PUBLISHER_PORT", "5673");
        let env = ApplicationEnv::parse().unwrap();
        assert_eq!(env.port, 5673);
        std::env::remove_var("HELLO_PUBLISHER_PORT");

        std::env::set_var("HELLO_PUBLISHER_PORT", "not a port");
        assert!(ApplicationEnv::parse().is_err());
        std::env::remove_var("HELLO_PUBLISHER_PORT");
    }
}
