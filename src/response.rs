//! Canned chat responses.
//!
//! Every user-facing outcome is reported with one of a small set of pre-written strings,
//! chosen at random per reply so the bot does not sound repetitive.

use rand::seq::IndexedRandom;

const SUCCESS: &[&str] = &[
    "Your wish is my command!",
    "All done boss! :thumbsup:",
    "It is done! :ok_hand:",
];
const FAIL: &[&str] = &[
    "Um...sorry couldn't do that",
    "Computer says no",
    "Oops! problem... :frowning:",
    "Eeek! problems :frowning:",
];
const NO_PARAMS: &[&str] = &[
    "Um...I think you are forgetting something",
    "I need more details to work on",
    "Yeah...go on!",
];
const TOO_MANY_PARAMS: &[&str] = &[
    "Aaah...thats too many details!",
    "No need to hurry. Give me the details one by one",
];
const NOT_A_COMMAND: &[&str] =
    &["Um...were you trying to give me a command? If so you may be using the wrong one"];
const INSUFFICIENT_PERMS: &[&str] = &["You don't have the permissions to make me do that"];
const NOT_A_GUILD: &[&str] = &["This command can only be used inside a server"];
const GUILD_NOT_SETUP: &[&str] = &[
    "Your guild is not set up yet",
    "I don't know about this guild yet. Set it up first",
];
const GUILD_ALREADY_SET: &[&str] = &["Your guild is already set"];
const HELP_SENT: &[&str] = &["I have DM'd the help documents to you"];

/// Category of canned response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    Success,
    Fail,
    NoParams,
    TooManyParams,
    NotACommand,
    InsufficientPerms,
    NotAGuild,
    GuildNotSetup,
    GuildAlreadySet,
    HelpSent,
}

impl ResponseKind {
    /// Every string this kind may produce.
    pub fn choices(&self) -> &'static [&'static str] {
        match self {
            Self::Success => SUCCESS,
            Self::Fail => FAIL,
            Self::NoParams => NO_PARAMS,
            Self::TooManyParams => TOO_MANY_PARAMS,
            Self::NotACommand => NOT_A_COMMAND,
            Self::InsufficientPerms => INSUFFICIENT_PERMS,
            Self::NotAGuild => NOT_A_GUILD,
            Self::GuildNotSetup => GUILD_NOT_SETUP,
            Self::GuildAlreadySet => GUILD_ALREADY_SET,
            Self::HelpSent => HELP_SENT,
        }
    }

    /// Picks one response uniformly at random.
    pub fn pick(&self) -> &'static str {
        let choices = self.choices();
        choices.choose(&mut rand::rng()).copied().unwrap_or_default()
    }

    /// Whether `text` is one of this kind's responses.
    pub fn matches(&self, text: &str) -> bool {
        self.choices().contains(&text)
    }
}
