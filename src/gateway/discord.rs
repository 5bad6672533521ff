use async_trait::async_trait;
use serenity::{
    all::{
        ChannelId, CreateEmbed, CreateMessage, GuildId, MessageId, ReactionType, UserId,
    },
    http::Http,
};
use std::sync::Arc;

use crate::{
    error::AppError,
    gateway::{ChatGateway, Destination, MemberRoles, OutgoingMessage, SentMessage},
    model::embed::Embed,
};

/// [`ChatGateway`] backed by Serenity's REST client.
pub struct SerenityGateway {
    http: Arc<Http>,
}

impl SerenityGateway {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ChatGateway for SerenityGateway {
    async fn send(
        &self,
        destination: Destination,
        message: OutgoingMessage,
    ) -> Result<SentMessage, AppError> {
        let channel_id = match destination {
            Destination::Channel(channel_id) => ChannelId::new(channel_id),
            Destination::DirectMessage(user_id) => {
                UserId::new(user_id).create_dm_channel(&self.http).await?.id
            }
        };

        let builder = match message {
            OutgoingMessage::Text(content) => CreateMessage::new().content(content),
            OutgoingMessage::Embed(embed) => CreateMessage::new().embed(create_embed(embed)),
        };

        let sent = channel_id.send_message(&self.http, builder).await?;

        Ok(SentMessage {
            channel_id: sent.channel_id.get(),
            message_id: sent.id.get(),
        })
    }

    async fn react(&self, channel_id: u64, message_id: u64, emoji: &str) -> Result<(), AppError> {
        self.http
            .create_reaction(
                ChannelId::new(channel_id),
                MessageId::new(message_id),
                &ReactionType::Unicode(emoji.to_string()),
            )
            .await?;

        Ok(())
    }

    async fn delete_message(&self, channel_id: u64, message_id: u64) -> Result<(), AppError> {
        self.http
            .delete_message(ChannelId::new(channel_id), MessageId::new(message_id), None)
            .await?;

        Ok(())
    }

    /// Fetches the member and the guild's roles.
    ///
    /// The member is an administrator when they own the guild, or when `@everyone` or any
    /// role they hold carries the `ADMINISTRATOR` permission.
    async fn member_roles(&self, guild_id: u64, user_id: u64) -> Result<MemberRoles, AppError> {
        let guild_id = GuildId::new(guild_id);
        let user_id = UserId::new(user_id);

        let member = self.http.get_member(guild_id, user_id).await?;
        let guild = self.http.get_guild(guild_id).await?;

        let is_administrator = guild.owner_id == user_id
            || guild.roles.values().any(|role| {
                (role.id.get() == guild_id.get() || member.roles.contains(&role.id))
                    && role.permissions.administrator()
            });

        Ok(MemberRoles {
            role_ids: member.roles.iter().map(|role| role.get()).collect(),
            is_administrator,
        })
    }
}

fn create_embed(embed: Embed) -> CreateEmbed {
    let mut builder = CreateEmbed::new();

    if let Some(title) = embed.title {
        builder = builder.title(title);
    }
    if let Some(description) = embed.description {
        builder = builder.description(description);
    }
    if let Some(color) = embed.color {
        builder = builder.color(color);
    }
    for field in embed.fields {
        builder = builder.field(field.name, field.value, field.inline);
    }

    builder
}
