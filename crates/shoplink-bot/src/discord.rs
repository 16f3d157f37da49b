//! Discord gateway adapter: event handling and the [`Conversation`] impl.

use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use futures::{Stream, StreamExt};
use serenity::all::{
    Client, Context, CreateEmbed, CreateEmbedFooter, CreateMessage, EditMessage, EventHandler,
    GatewayIntents, Message, MessageCollector, Ready, Timestamp,
};

use crate::command::{parse_command, Command};
use crate::orchestrator::{Conversation, Orchestrator, StatusUpdate};
use crate::render::Card;

type ReplyStream = Pin<Box<dyn Stream<Item = Message> + Send>>;

/// One command's view of Discord: the triggering message, the status reply
/// once posted, and the requester's buffered replies while a selection is open.
pub struct DiscordConversation<'a> {
    ctx: &'a Context,
    msg: &'a Message,
    status: Option<Message>,
    replies: Option<ReplyStream>,
}

impl<'a> DiscordConversation<'a> {
    #[must_use]
    pub fn new(ctx: &'a Context, msg: &'a Message) -> Self {
        Self {
            ctx,
            msg,
            status: None,
            replies: None,
        }
    }
}

/// Messages from the command's author in the command's channel, ending after `wait`.
fn reply_stream(ctx: &Context, msg: &Message, wait: Duration) -> ReplyStream {
    Box::pin(
        MessageCollector::new(&ctx.shard)
            .author_id(msg.author.id)
            .channel_id(msg.channel_id)
            .timeout(wait)
            .stream(),
    )
}

#[async_trait::async_trait]
impl<'a> Conversation for DiscordConversation<'a> {
    fn requester_id(&self) -> String {
        self.msg.author.id.to_string()
    }

    fn channel_id(&self) -> String {
        self.msg.channel_id.to_string()
    }

    async fn reply(&mut self, text: &str) -> anyhow::Result<()> {
        self.msg.reply(self.ctx, text).await?;
        Ok(())
    }

    async fn say(&mut self, text: &str) -> anyhow::Result<()> {
        self.msg.channel_id.say(&self.ctx.http, text).await?;
        Ok(())
    }

    async fn send_card(&mut self, card: Card) -> anyhow::Result<()> {
        self.msg
            .channel_id
            .send_message(self.ctx, CreateMessage::new().embed(to_embed(card)))
            .await?;
        Ok(())
    }

    async fn post_status(&mut self, text: &str) -> anyhow::Result<()> {
        let status = self.msg.reply(self.ctx, text).await?;
        self.status = Some(status);
        Ok(())
    }

    async fn update_status(&mut self, update: StatusUpdate) -> anyhow::Result<()> {
        let Some(status) = self.status.as_mut() else {
            // No status message to edit; post the update as a fresh message.
            return match update {
                StatusUpdate::Text(text) => self.say(&text).await,
                StatusUpdate::Card(card) => self.send_card(card).await,
            };
        };

        let builder = match update {
            StatusUpdate::Text(text) => EditMessage::new().content(text),
            StatusUpdate::Card(card) => EditMessage::new().content("").embed(to_embed(card)),
        };
        status.edit(self.ctx, builder).await?;
        Ok(())
    }

    async fn begin_selection(&mut self, wait: Duration) -> anyhow::Result<()> {
        self.replies = Some(reply_stream(self.ctx, self.msg, wait));
        Ok(())
    }

    async fn next_reply(&mut self, wait: Duration) -> anyhow::Result<Option<String>> {
        let (ctx, msg) = (self.ctx, self.msg);
        let stream = self
            .replies
            .get_or_insert_with(|| reply_stream(ctx, msg, wait));
        match tokio::time::timeout(wait, stream.next()).await {
            Ok(reply) => Ok(reply.map(|m| m.content)),
            Err(_elapsed) => Ok(None),
        }
    }
}

fn to_embed(card: Card) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(card.title)
        .description(card.description)
        .colour(card.colour)
        .timestamp(Timestamp::now());

    if let Some(url) = card.url {
        embed = embed.url(url);
    }
    if let Some(thumbnail) = card.thumbnail_url {
        embed = embed.thumbnail(thumbnail);
    }
    if let Some(footer) = card.footer {
        embed = embed.footer(CreateEmbedFooter::new(footer));
    }

    embed.fields(
        card.fields
            .into_iter()
            .map(|field| (field.name, field.value, field.inline)),
    )
}

/// Gateway event handler. Each incoming message runs in its own task.
pub struct Handler {
    orchestrator: Arc<Orchestrator>,
    prefix: String,
}

impl Handler {
    #[must_use]
    pub fn new(orchestrator: Arc<Orchestrator>, prefix: String) -> Self {
        Self {
            orchestrator,
            prefix,
        }
    }
}

#[serenity::async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        tracing::info!(user = %ready.user.name, guilds = ready.guilds.len(), "client logged in");
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }
        let Some(Command::Lookup { link }) = parse_command(&msg.content, &self.prefix) else {
            return;
        };

        let mut conv = DiscordConversation::new(&ctx, &msg);
        if let Err(err) = self.orchestrator.handle_lookup(&mut conv, link).await {
            tracing::error!(
                channel = %msg.channel_id,
                error = %err,
                "failed to answer lookup command"
            );
        }
    }
}

/// Connects to the Discord gateway and serves commands until the connection ends.
///
/// # Errors
///
/// Returns an error if the client cannot be built or the gateway connection
/// fails (for example, an invalid token).
pub async fn run(token: &str, prefix: String, orchestrator: Orchestrator) -> anyhow::Result<()> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler::new(Arc::new(orchestrator), prefix);
    let mut client = Client::builder(token, intents)
        .event_handler(handler)
        .await?;

    let shard_manager = Arc::clone(&client.shard_manager);
    tokio::spawn(async move {
        shutdown_signal().await;
        shard_manager.shutdown_all().await;
    });

    client.start().await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, disconnecting from gateway");
}
