//! Recording [`ChatGateway`] for tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;

use crate::{
    error::AppError,
    gateway::{ChatGateway, Destination, MemberRoles, OutgoingMessage, SentMessage},
    model::embed::Embed,
};

/// Direct-message channels are faked as `user_id + DM_CHANNEL_OFFSET`.
pub const DM_CHANNEL_OFFSET: u64 = 1_000_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentRecord {
    pub destination: Destination,
    pub message: OutgoingMessage,
    pub sent: SentMessage,
}

#[derive(Default)]
pub struct FakeGateway {
    next_message_id: AtomicU64,
    sent: Mutex<Vec<SentRecord>>,
    reactions: Mutex<Vec<(u64, u64, String)>>,
    deleted: Mutex<Vec<(u64, u64)>>,
    members: Mutex<HashMap<(u64, u64), MemberRoles>>,
    fail_member_lookup: AtomicBool,
    fail_send: AtomicBool,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self {
            next_message_id: AtomicU64::new(500),
            ..Default::default()
        }
    }

    pub fn with_member(self, guild_id: u64, user_id: u64, roles: MemberRoles) -> Self {
        self.members
            .lock()
            .unwrap()
            .insert((guild_id, user_id), roles);
        self
    }

    pub fn fail_member_lookup(&self) {
        self.fail_member_lookup.store(true, Ordering::SeqCst);
    }

    pub fn fail_send(&self) {
        self.fail_send.store(true, Ordering::SeqCst);
    }

    pub fn sent(&self) -> Vec<SentRecord> {
        self.sent.lock().unwrap().clone()
    }

    /// Text bodies of every sent plain-text message, in order.
    pub fn texts(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|record| match record.message {
                OutgoingMessage::Text(text) => Some(text),
                OutgoingMessage::Embed(_) => None,
            })
            .collect()
    }

    /// Every sent embed with the message it was sent as, in order.
    pub fn embeds(&self) -> Vec<(SentMessage, Embed)> {
        self.sent()
            .into_iter()
            .filter_map(|record| match record.message {
                OutgoingMessage::Embed(embed) => Some((record.sent, embed)),
                OutgoingMessage::Text(_) => None,
            })
            .collect()
    }

    /// Emoji added to the given message, in order.
    pub fn reactions_on(&self, message_id: u64) -> Vec<String> {
        self.reactions
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, message, _)| *message == message_id)
            .map(|(_, _, emoji)| emoji.clone())
            .collect()
    }

    pub fn deleted(&self) -> Vec<(u64, u64)> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatGateway for FakeGateway {
    async fn send(
        &self,
        destination: Destination,
        message: OutgoingMessage,
    ) -> Result<SentMessage, AppError> {
        if self.fail_send.load(Ordering::SeqCst) {
            return Err(AppError::InternalError("send failed".to_string()));
        }

        let channel_id = match destination {
            Destination::Channel(channel_id) => channel_id,
            Destination::DirectMessage(user_id) => user_id + DM_CHANNEL_OFFSET,
        };
        let sent = SentMessage {
            channel_id,
            message_id: self.next_message_id.fetch_add(1, Ordering::SeqCst),
        };

        self.sent.lock().unwrap().push(SentRecord {
            destination,
            message,
            sent,
        });

        Ok(sent)
    }

    async fn react(&self, channel_id: u64, message_id: u64, emoji: &str) -> Result<(), AppError> {
        self.reactions
            .lock()
            .unwrap()
            .push((channel_id, message_id, emoji.to_string()));
        Ok(())
    }

    async fn delete_message(&self, channel_id: u64, message_id: u64) -> Result<(), AppError> {
        self.deleted.lock().unwrap().push((channel_id, message_id));
        Ok(())
    }

    async fn member_roles(&self, guild_id: u64, user_id: u64) -> Result<MemberRoles, AppError> {
        if self.fail_member_lookup.load(Ordering::SeqCst) {
            return Err(AppError::InternalError("member lookup failed".to_string()));
        }

        self.members
            .lock()
            .unwrap()
            .get(&(guild_id, user_id))
            .cloned()
            .ok_or_else(|| AppError::InternalError(format!("unknown member {}", user_id)))
    }
}
