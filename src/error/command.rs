use thiserror::Error;

use crate::response::ResponseKind;

/// User-facing command failures.
///
/// Each variant maps onto one canned response; the `Display` text is for logs only.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// A command that needs a guild was invoked outside of one.
    #[error("Command requires a guild context")]
    NotAGuildContext,

    /// `myguild set` was issued for a guild that already has a configuration.
    #[error("Guild is already configured")]
    GuildAlreadyConfigured,

    /// A guild operation was issued for a guild without a configuration.
    #[error("Guild is not configured")]
    GuildNotConfigured,

    /// The access chain denied the request.
    #[error("Insufficient permission")]
    InsufficientPermission,

    /// The invocation token or sub-argument keyword is not registered.
    #[error("Unknown command")]
    UnknownCommand,

    /// More arguments were supplied than the command accepts.
    #[error("Too many arguments")]
    TooManyArguments,

    /// A required argument was not supplied.
    #[error("Missing arguments")]
    MissingArguments,
}

impl CommandError {
    /// The canned response for this failure.
    pub fn response_kind(&self) -> ResponseKind {
        match self {
            Self::NotAGuildContext => ResponseKind::NotAGuild,
            Self::GuildAlreadyConfigured => ResponseKind::GuildAlreadySet,
            Self::GuildNotConfigured => ResponseKind::GuildNotSetup,
            Self::InsufficientPermission => ResponseKind::InsufficientPerms,
            Self::UnknownCommand => ResponseKind::NotACommand,
            Self::TooManyArguments => ResponseKind::TooManyParams,
            Self::MissingArguments => ResponseKind::NoParams,
        }
    }
}
