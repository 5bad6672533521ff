use serenity::all::{Context, EventHandler, Message, RatelimitInfo, Reaction, Ready};
use serenity::async_trait;
use std::sync::Arc;

use crate::command::Dispatcher;

pub mod message;
pub mod ratelimit;
pub mod reaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub dispatcher: Arc<Dispatcher>,
}

impl Handler {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a message is sent in a channel the bot can see
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.dispatcher, ctx, message).await;
    }

    /// Called when a reaction is added to a message
    async fn reaction_add(&self, ctx: Context, add_reaction: Reaction) {
        reaction::handle_reaction_add(&self.dispatcher, ctx, add_reaction).await;
    }

    /// Called when an HTTP request hits a Discord rate limit
    async fn ratelimit(&self, data: RatelimitInfo) {
        ratelimit::handle_ratelimit(data);
    }
}
