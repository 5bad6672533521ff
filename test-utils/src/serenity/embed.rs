//! Test factory for creating Serenity Embed objects.

use serenity::all::Embed;

/// Creates a test Serenity Embed with a title, colour and fields.
///
/// # Arguments
/// - `title` - Embed title
/// - `color` - Embed colour as a 24-bit RGB integer
/// - `fields` - `(name, value)` pairs; every field is rendered non-inline
///
/// # Panics
/// - If the JSON cannot be deserialized into an Embed (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::create_test_embed;
///
/// let embed = create_test_embed("Help", 6684774, &[("PAGE", "1")]);
/// assert_eq!(embed.fields.len(), 1);
/// ```
pub fn create_test_embed(title: &str, color: u32, fields: &[(&str, &str)]) -> Embed {
    let fields: Vec<serde_json::Value> = fields
        .iter()
        .map(|(name, value)| {
            serde_json::json!({
                "name": name,
                "value": value,
                "inline": false,
            })
        })
        .collect();

    serde_json::from_value(serde_json::json!({
        "type": "rich",
        "title": title,
        "description": "test embed",
        "color": color,
        "fields": fields,
    }))
    .expect("Failed to create test embed - invalid JSON structure")
}
