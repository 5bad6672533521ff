//! Help view states and the reaction glyphs that move between them.
//!
//! A rendered help message carries its own state: the `PAGE` field holds the 1-based page
//! and the presence of the `Command:` field marks a detail view. Nothing is kept server-side.

use crate::model::embed::Embed;

/// Keycap one through nine, then the keycap ten glyph.
pub const NUMBER_EMOJI: [&str; 10] = [
    "1\u{fe0f}\u{20e3}",
    "2\u{fe0f}\u{20e3}",
    "3\u{fe0f}\u{20e3}",
    "4\u{fe0f}\u{20e3}",
    "5\u{fe0f}\u{20e3}",
    "6\u{fe0f}\u{20e3}",
    "7\u{fe0f}\u{20e3}",
    "8\u{fe0f}\u{20e3}",
    "9\u{fe0f}\u{20e3}",
    "\u{1f51f}",
];
pub const PREVIOUS_EMOJI: &str = "\u{25c0}\u{fe0f}";
pub const NEXT_EMOJI: &str = "\u{25b6}\u{fe0f}";
pub const BACK_EMOJI: &str = "\u{2b05}\u{fe0f}";

pub const PAGE_FIELD: &str = "PAGE";
pub const COMMAND_FIELD: &str = "Command:";

/// A help view to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpView {
    /// One page of the command listing, 1-based.
    Listing { page: usize },
    /// Full view of the `item`th (0-based) entry on `page`.
    Detail { page: usize, item: usize },
}

/// The view a reacted-upon help message was showing, recovered from its embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShownHelp {
    Listing { page: usize },
    Detail { page: usize },
}

impl ShownHelp {
    /// Reads the state back out of a rendered embed. `None` when the `PAGE` field is missing
    /// or is not a positive integer.
    pub fn from_embed(embed: &Embed) -> Option<Self> {
        let page = embed
            .field_value(PAGE_FIELD)?
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|page| *page >= 1)?;

        if embed.field_value(COMMAND_FIELD).is_some() {
            Some(Self::Detail { page })
        } else {
            Some(Self::Listing { page })
        }
    }
}

/// A navigation reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// 0-based item on the current page.
    Number(usize),
    Previous,
    Next,
    Back,
}

impl Glyph {
    /// Resolves an emoji, ignoring U+FE0F variation selectors.
    pub fn parse(emoji: &str) -> Option<Self> {
        let emoji = strip_variation(emoji);

        if let Some(index) = NUMBER_EMOJI
            .iter()
            .position(|number| strip_variation(number) == emoji)
        {
            return Some(Self::Number(index));
        }

        if emoji == strip_variation(PREVIOUS_EMOJI) {
            Some(Self::Previous)
        } else if emoji == strip_variation(NEXT_EMOJI) {
            Some(Self::Next)
        } else if emoji == strip_variation(BACK_EMOJI) {
            Some(Self::Back)
        } else {
            None
        }
    }
}

fn strip_variation(emoji: &str) -> String {
    emoji.chars().filter(|c| *c != '\u{fe0f}').collect()
}
