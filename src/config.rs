use crate::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_HELP_TITLE: &str = ":grey_question: BGSBot Help";
const DEFAULT_BOT_NAME: &str = "BGSBot";

pub struct Config {
    pub discord_bot_token: String,
    pub database_url: String,

    pub port: u16,

    /// Embed title the help paginator renders and matches reactions against.
    pub help_title: String,
    /// Display name used in help text, e.g. `@BGSBot help`.
    pub bot_name: String,

    pub disable_route_logs: bool,
    pub disable_noop_access: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "PORT".to_string(),
                    value,
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            database_url: required("DATABASE_URL")?,
            port,
            help_title: lookup("HELP_TITLE").unwrap_or_else(|| DEFAULT_HELP_TITLE.to_string()),
            bot_name: lookup("BOT_NAME").unwrap_or_else(|| DEFAULT_BOT_NAME.to_string()),
            disable_route_logs: parse_flag(lookup("DISABLE_ROUTE_LOGS")),
            disable_noop_access: parse_flag(lookup("DISABLE_NOOP_ACCESS")),
        })
    }
}

fn parse_flag(value: Option<String>) -> bool {
    matches!(
        value.as_deref().map(str::trim),
        Some("1") | Some("true") | Some("TRUE") | Some("yes")
    )
}
