//! Bridge lifecycle against a live Asterisk server
//!
//! ```text
//! ARI_BASE_URL=http://localhost:8088/ari ARI_USERNAME=asterisk ARI_PASSWORD=secret \
//!     cargo run --example bridge_lifecycle -- <channel-id>
//! ```
//!
//! Set `LOG_FORMAT=json` for structured output.

use rvoip_ari_client::logging::{LoggingConfig, parse_log_level, setup_logging};
use rvoip_ari_client::{AddChannelRequest, AriClient, AriConfig, CallContext, CreateBridgeRequest};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let level = parse_log_level(&std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()))?;
    let mut logging = LoggingConfig::new(level, "bridge-lifecycle");
    if std::env::var("LOG_FORMAT").is_ok_and(|f| f == "json") {
        logging = logging.with_json();
    }
    setup_logging(&logging)?;

    let client = AriClient::new(AriConfig::from_env()?)?;
    let channel = std::env::args().nth(1);

    let bridge = client
        .new_bridge_with(CreateBridgeRequest::new().with_name("demo"))
        .await?;
    info!("Bridge {} ready ({})", bridge.id, bridge.bridge_type);

    if let Some(channel) = &channel {
        client.add_channel(&bridge.id, &AddChannelRequest::new(channel)).await?;
        client.play_music_on_hold(&bridge.id, "").await?;
    }

    // Deeper layers only see the context
    let ctx = CallContext::new().with_bridge(bridge);
    finish_call(&client, &ctx).await?;

    Ok(())
}

async fn finish_call(client: &AriClient, ctx: &CallContext) -> anyhow::Result<()> {
    let Some(bridge) = ctx.bridge() else {
        anyhow::bail!("no bridge attached to the call");
    };

    let current = client.get_bridge(&bridge.id).await?;
    info!("Bridge {} has {} channel(s)", current.id, current.channels.len());

    if !current.channels.is_empty() {
        client.bridge_stop_moh(&current.id).await?;
    }
    client.bridge_delete(&current.id).await?;
    Ok(())
}
