/// Help text for one registered command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    /// Display name; also the key help entries are deduplicated by.
    pub command_name: String,
    pub short_description: String,
    pub usage_template: String,
    /// Example invocations without the bot mention, e.g. `myguild set`.
    pub examples: Vec<String>,
}

impl HelpEntry {
    pub fn new(
        command_name: impl Into<String>,
        short_description: impl Into<String>,
        usage_template: impl Into<String>,
        examples: Vec<String>,
    ) -> Self {
        Self {
            command_name: command_name.into(),
            short_description: short_description.into(),
            usage_template: usage_template.into(),
            examples,
        }
    }
}
