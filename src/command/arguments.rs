use std::collections::HashMap;

use crate::error::command::CommandError;

/// Case-insensitive map from sub-argument keyword to a command-specific action.
///
/// Unrecognized keywords never fall through to a default action.
#[derive(Debug, Clone)]
pub struct ArgumentMap<A> {
    actions: HashMap<String, A>,
}

impl<A: Copy> ArgumentMap<A> {
    pub fn new() -> Self {
        Self {
            actions: HashMap::new(),
        }
    }

    /// Maps every keyword in `keywords` to `action`.
    pub fn with(mut self, keywords: &[&str], action: A) -> Self {
        for keyword in keywords {
            self.actions.insert(keyword.to_lowercase(), action);
        }
        self
    }

    /// Resolves the first argument.
    ///
    /// # Returns
    /// - `Ok(A)`: the action bound to the keyword
    /// - `Err(CommandError::MissingArguments)`: `argv` is empty
    /// - `Err(CommandError::UnknownCommand)`: the keyword is not registered
    pub fn resolve(&self, argv: &[String]) -> Result<A, CommandError> {
        let keyword = argv.first().ok_or(CommandError::MissingArguments)?;

        self.actions
            .get(&keyword.to_lowercase())
            .copied()
            .ok_or(CommandError::UnknownCommand)
    }
}

impl<A: Copy> Default for ArgumentMap<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Action {
        Add,
        Drop,
    }

    fn map() -> ArgumentMap<Action> {
        ArgumentMap::new()
            .with(&["add", "a"], Action::Add)
            .with(&["drop"], Action::Drop)
    }

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn resolves_keyword_and_alias_case_insensitively() {
        assert_eq!(map().resolve(&argv(&["ADD"])), Ok(Action::Add));
        assert_eq!(map().resolve(&argv(&["a", "extra"])), Ok(Action::Add));
        assert_eq!(map().resolve(&argv(&["Drop"])), Ok(Action::Drop));
    }

    #[test]
    fn unknown_keyword_is_not_a_command() {
        assert_eq!(
            map().resolve(&argv(&["launch"])),
            Err(CommandError::UnknownCommand)
        );
    }

    #[test]
    fn missing_keyword_is_reported() {
        assert_eq!(map().resolve(&[]), Err(CommandError::MissingArguments));
    }
}
