/// A message split into its invocation token and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    /// First token, lowercased.
    pub command: String,
    /// Everything after the token, single-space joined. Empty when there are no arguments.
    pub arguments: String,
    pub argv: Vec<String>,
}

impl CommandInvocation {
    /// Strips the first `<@bot_id>` or `<@!bot_id>` mention, then splits on whitespace.
    pub fn parse(content: &str, bot_id: u64) -> Self {
        let stripped = strip_mention(content, bot_id);
        let mut tokens = stripped.split_whitespace();

        let command = tokens.next().unwrap_or_default().to_lowercase();
        let argv: Vec<String> = tokens.map(str::to_string).collect();

        Self {
            command,
            arguments: argv.join(" "),
            argv,
        }
    }
}

fn strip_mention(content: &str, bot_id: u64) -> String {
    let plain = format!("<@{}>", bot_id);
    let nick = format!("<@!{}>", bot_id);

    let first = [plain, nick]
        .into_iter()
        .filter_map(|mention| content.find(&mention).map(|at| (at, mention.len())))
        .min_by_key(|(at, _)| *at);

    match first {
        Some((at, len)) => format!("{}{}", &content[..at], &content[at + len..]),
        None => content.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOT: u64 = 1234;

    #[test]
    fn strips_leading_mention() {
        let invocation = CommandInvocation::parse("<@1234> MyGuild set", BOT);

        assert_eq!(invocation.command, "myguild");
        assert_eq!(invocation.arguments, "set");
        assert_eq!(invocation.argv, vec!["set"]);
    }

    #[test]
    fn strips_nickname_mention() {
        let invocation = CommandInvocation::parse("<@!1234>   help", BOT);

        assert_eq!(invocation.command, "help");
        assert!(invocation.argv.is_empty());
        assert_eq!(invocation.arguments, "");
    }

    #[test]
    fn keeps_mentions_of_other_users() {
        let invocation = CommandInvocation::parse("<@1234> kick <@999>", BOT);

        assert_eq!(invocation.command, "kick");
        assert_eq!(invocation.argv, vec!["<@999>"]);
    }

    #[test]
    fn only_first_mention_is_removed() {
        let invocation = CommandInvocation::parse("<@1234> echo <@1234>", BOT);

        assert_eq!(invocation.argv, vec!["<@1234>"]);
    }

    #[test]
    fn collapses_repeated_whitespace() {
        let invocation = CommandInvocation::parse("help  a \t b", BOT);

        assert_eq!(invocation.argv, vec!["a", "b"]);
        assert_eq!(invocation.arguments, "a b");
    }

    #[test]
    fn empty_content_yields_empty_token() {
        let invocation = CommandInvocation::parse("<@1234>", BOT);

        assert_eq!(invocation.command, "");
        assert!(invocation.argv.is_empty());
    }
}
