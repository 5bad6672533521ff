//! Paginated, reaction-driven help.
//!
//! The paginator renders [`HelpView`]s as embeds and reacts to them with navigation glyphs.
//! When one of those glyphs is pressed, [`HelpPaginator::on_reaction`] recovers the shown
//! view from the embed, deletes the message and renders the next view in the same channel.
//!
//! Two reactions racing on the same message each delete and re-render independently. The
//! last render wins and a duplicate or missing page is possible; there is no per-message
//! sequencing.

pub mod view;

#[cfg(test)]
mod test;

use crate::{
    error::AppError,
    gateway::{ChatGateway, Destination, OutgoingMessage, SentMessage},
    model::{embed::Embed, help::HelpEntry, message::ReactionEvent},
};

use view::{
    Glyph, HelpView, ShownHelp, BACK_EMOJI, COMMAND_FIELD, NEXT_EMOJI, NUMBER_EMOJI, PAGE_FIELD,
    PREVIOUS_EMOJI,
};

pub const PAGE_SIZE: usize = 10;
pub const HELP_COLOR: u32 = 6684774;

pub struct HelpPaginator {
    title: String,
    bot_name: String,
    entries: Vec<HelpEntry>,
}

impl HelpPaginator {
    pub fn new(title: impl Into<String>, bot_name: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            bot_name: bot_name.into(),
            entries: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn entries(&self) -> &[HelpEntry] {
        &self.entries
    }

    /// Replaces the entry with the same command name in place, or appends.
    pub fn add_help(&mut self, entry: HelpEntry) {
        match self
            .entries
            .iter_mut()
            .find(|existing| existing.command_name == entry.command_name)
        {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn page_count(&self) -> usize {
        self.entries.len().div_ceil(PAGE_SIZE)
    }

    /// Entries listed on a 1-based page. Empty for pages out of range.
    pub fn page(&self, page: usize) -> &[HelpEntry] {
        if page == 0 {
            return &[];
        }

        let Some(start) = (page - 1).checked_mul(PAGE_SIZE) else {
            return &[];
        };
        if start >= self.entries.len() {
            return &[];
        }
        let end = (start + PAGE_SIZE).min(self.entries.len());

        &self.entries[start..end]
    }

    /// Builds the embed and the reactions to attach for `view`.
    ///
    /// Returns `None` for a page or item that does not exist. An empty paginator still
    /// renders an empty first page.
    pub fn render(&self, view: HelpView) -> Option<(Embed, Vec<&'static str>)> {
        let embed = Embed::new(self.title.clone())
            .color(HELP_COLOR)
            .description(format!("Help Associated with {} commands", self.bot_name));

        match view {
            HelpView::Listing { page } => {
                if page == 0 || (page > self.page_count() && page != 1) {
                    return None;
                }

                let listed = self.page(page);
                let mut embed = embed;
                for (index, entry) in listed.iter().enumerate() {
                    embed = embed.field(
                        format!("{}. {}", index + 1, entry.command_name),
                        entry.short_description.clone(),
                    );
                }
                let embed = embed.field(PAGE_FIELD, page.to_string());

                let mut reactions = Vec::new();
                if page > 1 {
                    reactions.push(PREVIOUS_EMOJI);
                }
                reactions.extend(NUMBER_EMOJI.iter().take(listed.len()));
                if page < self.page_count() {
                    reactions.push(NEXT_EMOJI);
                }

                Some((embed, reactions))
            }
            HelpView::Detail { page, item } => {
                let entry = self.page(page).get(item)?;

                let examples = entry
                    .examples
                    .iter()
                    .enumerate()
                    .map(|(index, example)| {
                        format!("{}. `@{} {}`\n", index + 1, self.bot_name, example)
                    })
                    .collect::<String>();

                let embed = embed
                    .field(
                        COMMAND_FIELD,
                        format!("@{} {}", self.bot_name, entry.command_name),
                    )
                    .field("Description", entry.short_description.clone())
                    .field("Template", entry.usage_template.clone())
                    .field("Examples", examples)
                    .field(PAGE_FIELD, page.to_string());

                Some((embed, vec![BACK_EMOJI]))
            }
        }
    }

    /// Sends `view` to `destination` and attaches its navigation reactions in order.
    ///
    /// # Returns
    /// - `Ok(Some(SentMessage))`: the rendered help message
    /// - `Ok(None)`: the view does not exist; nothing was sent
    /// - `Err(AppError)`: sending or reacting failed. A failure while reacting leaves the
    ///   sent page without its remaining reactions.
    pub async fn display(
        &self,
        gateway: &dyn ChatGateway,
        destination: Destination,
        view: HelpView,
    ) -> Result<Option<SentMessage>, AppError> {
        let Some((embed, reactions)) = self.render(view) else {
            tracing::warn!("Requested help view {:?} does not exist", view);
            return Ok(None);
        };

        let sent = gateway
            .send(destination, OutgoingMessage::Embed(embed))
            .await?;

        for emoji in reactions {
            gateway
                .react(sent.channel_id, sent.message_id, emoji)
                .await?;
        }

        Ok(Some(sent))
    }

    /// The view reached by pressing `glyph` on a message showing `shown`, if the move is
    /// valid.
    pub fn transition(&self, shown: ShownHelp, glyph: Glyph) -> Option<HelpView> {
        let last = self.page_count();
        let page = match shown {
            ShownHelp::Listing { page } | ShownHelp::Detail { page } => page,
        };
        if page > last.max(1) {
            return None;
        }

        match (shown, glyph) {
            (ShownHelp::Listing { page }, Glyph::Number(item)) => {
                (item < self.page(page).len()).then_some(HelpView::Detail { page, item })
            }
            (ShownHelp::Listing { page }, Glyph::Previous) => (page > 1 && page <= last)
                .then(|| HelpView::Listing { page: page - 1 }),
            (ShownHelp::Listing { page }, Glyph::Next) => {
                (page < last).then(|| HelpView::Listing { page: page + 1 })
            }
            (ShownHelp::Detail { page }, Glyph::Back) => {
                (page <= last).then_some(HelpView::Listing { page })
            }
            _ => None,
        }
    }

    /// Handles a reaction on any message.
    ///
    /// Reactions by bots, on messages without an embed carrying this paginator's title, with
    /// an unrelated emoji, or describing an invalid move are ignored. Otherwise the reacted
    /// message is deleted and the next view is rendered in the same channel.
    pub async fn on_reaction(
        &self,
        gateway: &dyn ChatGateway,
        event: &ReactionEvent,
    ) -> Result<(), AppError> {
        if event.user_is_bot {
            return Ok(());
        }

        let Some(embed) = event.message.embed.as_ref() else {
            return Ok(());
        };
        if !embed.has_title(&self.title) {
            return Ok(());
        }

        let Some(glyph) = Glyph::parse(&event.emoji) else {
            return Ok(());
        };
        let Some(shown) = ShownHelp::from_embed(embed) else {
            return Ok(());
        };
        let Some(next) = self.transition(shown, glyph) else {
            tracing::debug!("Ignoring help reaction {:?} on {:?}", glyph, shown);
            return Ok(());
        };

        gateway
            .delete_message(event.message.channel_id, event.message.message_id)
            .await?;

        self.display(gateway, Destination::Channel(event.message.channel_id), next)
            .await?;

        Ok(())
    }
}
