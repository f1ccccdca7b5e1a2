mod application;

use application::ApplicationEnv;
use hello_publisher::{OutgoingMessage, Publisher};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    #[cfg(debug_assertions)]
    {
        // Ignore error because .env file is not required
        // as long as env variables are set
        let _ = dotenvy::dotenv();
    }

    let env = ApplicationEnv::parse()?;

    application::setup_tracing()?;

    let config = env.publisher_config();
    let message = OutgoingMessage::text(env.routing_key, env.message_body);

    let mut publisher = Publisher::connect(config).await?;
    publisher.publish(message).await?;
    publisher.close().await;

    Ok(())
}
