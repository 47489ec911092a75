// Inline query result referencing a GIF by URL
// Author: kelexine (https://github.com/kelexine)

use super::defaults::{strip_nulls, DefaultValue, Defaults, ParseMode};
use super::entity::MessageEntity;
use super::inline_result::{validate_result_id, InlineQueryResultType};
use super::input_content::InputMessageContent;
use super::keyboard::InlineKeyboardMarkup;
use crate::error::{InlineError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A GIF result the server downloads from `gif_url`. Shares the `gif` tag
/// with [`InlineQueryResultCachedGif`](super::InlineQueryResultCachedGif).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGif")]
pub struct InlineQueryResultGif {
    #[serde(rename = "type")]
    result_type: InlineQueryResultType,
    id: String,
    gif_url: String,
    thumbnail_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    gif_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gif_height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gif_duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    caption: Option<String>,
    #[serde(skip_serializing_if = "DefaultValue::is_default")]
    parse_mode: DefaultValue<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    caption_entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    input_message_content: Option<InputMessageContent>,
}

impl InlineQueryResultGif {
    pub fn new(
        id: impl Into<String>,
        gif_url: impl Into<String>,
        thumbnail_url: impl Into<String>,
    ) -> Result<Self> {
        let id = id.into();
        validate_result_id(&id)?;

        Ok(Self {
            result_type: InlineQueryResultType::Gif,
            id,
            gif_url: gif_url.into(),
            thumbnail_url: thumbnail_url.into(),
            gif_width: None,
            gif_height: None,
            gif_duration: None,
            title: None,
            caption: None,
            parse_mode: DefaultValue::UseDefault,
            caption_entities: None,
            reply_markup: None,
            input_message_content: None,
        })
    }

    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.gif_width = Some(width);
        self.gif_height = Some(height);
        self
    }

    pub fn with_duration(mut self, seconds: u32) -> Self {
        self.gif_duration = Some(seconds);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_parse_mode(mut self, parse_mode: ParseMode) -> Self {
        self.parse_mode = DefaultValue::Value(parse_mode);
        self
    }

    /// Opt out of the library default parse mode.
    pub fn without_parse_mode(mut self) -> Self {
        self.parse_mode = DefaultValue::Unset;
        self
    }

    pub fn with_caption_entities(
        mut self,
        entities: impl IntoIterator<Item = MessageEntity>,
    ) -> Self {
        self.caption_entities = Some(entities.into_iter().collect());
        self
    }

    pub fn with_reply_markup(mut self, reply_markup: InlineKeyboardMarkup) -> Self {
        self.reply_markup = Some(reply_markup);
        self
    }

    pub fn with_input_message_content(mut self, content: InputMessageContent) -> Self {
        self.input_message_content = Some(content);
        self
    }

    pub fn result_type(&self) -> InlineQueryResultType {
        self.result_type
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn gif_url(&self) -> &str {
        &self.gif_url
    }

    pub fn thumbnail_url(&self) -> &str {
        &self.thumbnail_url
    }

    pub fn gif_width(&self) -> Option<u32> {
        self.gif_width
    }

    pub fn gif_height(&self) -> Option<u32> {
        self.gif_height
    }

    pub fn gif_duration(&self) -> Option<u32> {
        self.gif_duration
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// Parse mode as supplied, before defaults are applied.
    pub fn parse_mode(&self) -> &DefaultValue<ParseMode> {
        &self.parse_mode
    }

    pub fn caption_entities(&self) -> Option<&[MessageEntity]> {
        self.caption_entities.as_deref()
    }

    pub fn reply_markup(&self) -> Option<&InlineKeyboardMarkup> {
        self.reply_markup.as_ref()
    }

    pub fn input_message_content(&self) -> Option<&InputMessageContent> {
        self.input_message_content.as_ref()
    }

    /// Copy with late-bound defaults applied, including those of nested
    /// message content.
    pub fn resolved(&self, defaults: &Defaults) -> Self {
        Self {
            parse_mode: self.parse_mode.resolve(defaults.parse_mode.as_ref()),
            input_message_content: self
                .input_message_content
                .as_ref()
                .map(|content| content.resolved(defaults)),
            ..self.clone()
        }
    }

    /// Serialize to a JSON object with library defaults applied. Explicit
    /// opt-outs become absent keys.
    pub fn to_wire(&self, defaults: &Defaults) -> Result<Value> {
        let mut wire = serde_json::to_value(self.resolved(defaults))?;
        strip_nulls(&mut wire);
        Ok(wire)
    }
}

#[derive(Deserialize)]
struct RawGif {
    id: Option<String>,
    gif_url: Option<String>,
    thumbnail_url: Option<String>,
    gif_width: Option<u32>,
    gif_height: Option<u32>,
    gif_duration: Option<u32>,
    title: Option<String>,
    caption: Option<String>,
    #[serde(default)]
    parse_mode: DefaultValue<ParseMode>,
    caption_entities: Option<Vec<MessageEntity>>,
    reply_markup: Option<InlineKeyboardMarkup>,
    input_message_content: Option<InputMessageContent>,
}

impl TryFrom<RawGif> for InlineQueryResultGif {
    type Error = InlineError;

    fn try_from(raw: RawGif) -> Result<Self> {
        let id = raw.id.ok_or(InlineError::MissingRequiredField { field: "id" })?;
        let gif_url = raw
            .gif_url
            .ok_or(InlineError::MissingRequiredField { field: "gif_url" })?;
        let thumbnail_url = raw
            .thumbnail_url
            .ok_or(InlineError::MissingRequiredField { field: "thumbnail_url" })?;

        let mut gif = Self::new(id, gif_url, thumbnail_url)?;
        gif.gif_width = raw.gif_width;
        gif.gif_height = raw.gif_height;
        gif.gif_duration = raw.gif_duration;
        gif.title = raw.title;
        gif.caption = raw.caption;
        gif.parse_mode = raw.parse_mode;
        gif.caption_entities = raw.caption_entities;
        gif.reply_markup = raw.reply_markup;
        gif.input_message_content = raw.input_message_content;
        Ok(gif)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_gif_wire_shape() {
        let gif = InlineQueryResultGif::new("g1", "https://e.x/cat.gif", "https://e.x/cat.jpg")
            .unwrap()
            .with_dimensions(320, 240);
        assert_eq!(
            gif.to_wire(&Defaults::default()).unwrap(),
            json!({
                "type": "gif",
                "id": "g1",
                "gif_url": "https://e.x/cat.gif",
                "thumbnail_url": "https://e.x/cat.jpg",
                "gif_width": 320,
                "gif_height": 240
            })
        );
    }

    #[test]
    fn test_gif_opt_out_survives_round_trip() {
        let gif = InlineQueryResultGif::new("g1", "https://e.x/cat.gif", "https://e.x/cat.jpg")
            .unwrap()
            .with_title("Cat")
            .without_parse_mode();

        let back: InlineQueryResultGif =
            serde_json::from_value(serde_json::to_value(&gif).unwrap()).unwrap();
        assert_eq!(back.title(), Some("Cat"));
        assert_eq!(back.parse_mode(), &DefaultValue::Unset);

        let wire = back.to_wire(&Defaults::with_parse_mode(ParseMode::Html)).unwrap();
        assert!(wire.get("parse_mode").is_none());
    }

    #[test]
    fn test_gif_resolved_applies_default() {
        let gif = InlineQueryResultGif::new("g1", "https://e.x/cat.gif", "https://e.x/cat.jpg")
            .unwrap()
            .with_duration(3);
        let resolved = gif.resolved(&Defaults::with_parse_mode(ParseMode::Markdown));
        assert!(gif.parse_mode().is_default());
        assert_eq!(resolved.parse_mode().value(), Some(&ParseMode::Markdown));
        assert_eq!(resolved.gif_duration(), Some(3));
    }

    #[test]
    fn test_gif_requires_thumbnail() {
        let err = serde_json::from_value::<InlineQueryResultGif>(json!({
            "id": "g1", "gif_url": "https://e.x/cat.gif"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("thumbnail_url"));
    }
}
