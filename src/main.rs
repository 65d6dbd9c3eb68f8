mod params;

use anyhow::Context as _;
use reactgate::adapters::{HttpEventSender, SerenityDiscordService, ShardRouter};
use reactgate::bridge::CollectBridge;
use reactgate::collector::ReactionEvent;
use std::sync::{Arc, OnceLock};
use std::time::Duration;
use tracing::{debug, error, info};

use serenity::async_trait;
use serenity::model::channel::{Message, Reaction};
use serenity::model::gateway::Ready;
use serenity::model::id::UserId;
use serenity::prelude::*;

struct Handler {
    bridge: CollectBridge<SerenityDiscordService, HttpEventSender>,
    router: Arc<ShardRouter>,
    // Initialized in ready event
    current_user_id: OnceLock<UserId>,
}

impl Handler {
    fn new(params: &params::Params, router: Arc<ShardRouter>) -> anyhow::Result<Handler> {
        let discord_service = Arc::new(SerenityDiscordService);

        let event_sender = match &params.http_endpoint {
            Some(endpoint) => {
                let endpoint = url::Url::parse(endpoint).context("Parsing HTTP_ENDPOINT URL")?;
                Some(Arc::new(HttpEventSender::new(
                    endpoint,
                    params.insecure_mode,
                    Duration::from_secs(params.http_timeout),
                )?))
            }
            None => None,
        };

        let bridge = CollectBridge::new(
            discord_service,
            event_sender,
            params.collect_command.clone(),
            params.collect_options(),
        );

        Ok(Handler {
            bridge,
            router,
            current_user_id: OnceLock::new(),
        })
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        let _ = self.current_user_id.set(ready.user.id);

        info!(
            display_name = %ready.user.display_name(),
            user_id = %ready.user.id,
            shard_id = ctx.shard_id.0,
            "Bot is connected"
        );
    }

    async fn message(&self, ctx: Context, message: Message) {
        if !self.bridge.is_collect_command(&message) {
            return;
        }

        // Not ready yet
        let Some(&self_id) = self.current_user_id.get() else {
            return;
        };

        if let Err(err) = self
            .bridge
            .run_collection(&ctx.http, self.router.as_ref(), &message, self_id)
            .await
        {
            error!(?err, message_id = %message.id, "Failed to run reaction collection");
        }
    }

    async fn reaction_add(&self, ctx: Context, reaction: Reaction) {
        let Some(event) = ReactionEvent::from_reaction(&reaction) else {
            debug!(message_id = %reaction.message_id, "Reaction without user, ignoring");
            return;
        };

        self.router.dispatch(ctx.shard_id.0, &event);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    let _ = dotenvy::dotenv();

    // Default: reactgate=info, serenity=warn (suppress serenity's normal operation logs)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reactgate=info,serenity=warn".into()),
        )
        .init();

    info!(
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        description = env!("CARGO_PKG_DESCRIPTION"),
        "Starting application"
    );

    let params = params::Params::new()?;
    info!(?params, "Application parameters loaded");

    let intents = build_gateway_intents();
    info!(?intents, "Gateway intents configured");

    let router = Arc::new(ShardRouter::new(params.shard_count));

    let mut client = Client::builder(&params.discord_token, intents)
        .event_handler(Handler::new(&params, router)?)
        .await
        .context("Creating Discord Client")?;

    client
        .start_shards(params.shard_count)
        .await
        .context("Running Discord Client")
}

/// Intents for collect commands and the reactions added to them
fn build_gateway_intents() -> GatewayIntents {
    GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::DIRECT_MESSAGE_REACTIONS
}
