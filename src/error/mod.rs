//! Error types and user-facing failure mapping.
//!
//! `AppError` is the top-level error type. Command handlers return it from `exec`, and the
//! dispatcher converts every error into exactly one canned chat response via
//! [`AppError::response_kind`]. No error detail ever reaches the chat surface; anything that
//! is not a [`CommandError`] is logged in full and reported with the generic failure text.

pub mod command;
pub mod config;

use thiserror::Error;

use crate::{
    error::{command::CommandError, config::ConfigError},
    response::ResponseKind,
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// A user-facing command failure with a dedicated canned response.
    #[error(transparent)]
    CommandErr(#[from] CommandError),

    /// Database operation error from SeaORM.
    ///
    /// This is the storage failure case: logged with full detail at the boundary and
    /// reported to the user as a generic failure.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Socket or listener error from the HTTP server.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Internal error with custom message.
    ///
    /// # Fields
    /// - Detailed error message for server-side logging
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Maps the error onto the canned response sent back to the originating channel.
    ///
    /// Command errors map onto their dedicated response. Every other variant is logged
    /// with full detail here and collapses to [`ResponseKind::Fail`].
    pub fn response_kind(&self) -> ResponseKind {
        match self {
            Self::CommandErr(err) => err.response_kind(),
            err => {
                tracing::error!("Command failed: {}", err);
                ResponseKind::Fail
            }
        }
    }
}
