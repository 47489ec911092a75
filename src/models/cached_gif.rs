//! Inline query result referencing a GIF already stored on the server.
//!
//! By default the GIF is sent with an optional caption. When
//! `input_message_content` is set, that content is sent instead of the
//! animation.

// Author: kelexine (https://github.com/kelexine)

use super::defaults::{strip_nulls, DefaultValue, Defaults, ParseMode};
use super::entity::MessageEntity;
use super::inline_result::{validate_result_id, InlineQueryResultType};
use super::input_content::InputMessageContent;
use super::keyboard::InlineKeyboardMarkup;
use crate::error::{InlineError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// Keys recognised when building from a loose key/value bag.
const KNOWN_FIELDS: &[&str] = &[
    "type",
    "id",
    "gif_file_id",
    "title",
    "caption",
    "parse_mode",
    "caption_entities",
    "reply_markup",
    "input_message_content",
];

/// A cached GIF inline query result.
///
/// The field set is closed. The `type` tag is fixed to `gif` and cannot be
/// set by callers; unknown keys on any input path are dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CachedGifBuilder")]
pub struct InlineQueryResultCachedGif {
    #[serde(rename = "type")]
    result_type: InlineQueryResultType,

    /// Unique identifier for this result, 1-64 bytes.
    id: String,

    /// File identifier of the GIF on the server.
    gif_file_id: String,

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

impl InlineQueryResultCachedGif {
    /// Create a result with the two required fields. Fails if `id` is not
    /// 1-64 bytes long.
    pub fn new(id: impl Into<String>, gif_file_id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        validate_result_id(&id)?;

        Ok(Self {
            result_type: InlineQueryResultType::Gif,
            id,
            gif_file_id: gif_file_id.into(),
            title: None,
            caption: None,
            parse_mode: DefaultValue::UseDefault,
            caption_entities: None,
            reply_markup: None,
            input_message_content: None,
        })
    }

    pub fn builder() -> CachedGifBuilder {
        CachedGifBuilder::default()
    }

    /// Build from a loose key/value bag. Unknown keys are ignored, as is any
    /// `type` key.
    pub fn from_kwargs(kwargs: Map<String, Value>) -> Result<Self> {
        CachedGifBuilder::from_kwargs(kwargs)?.build()
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

    /// Always [`InlineQueryResultType::Gif`].
    pub fn result_type(&self) -> InlineQueryResultType {
        self.result_type
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn gif_file_id(&self) -> &str {
        &self.gif_file_id
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
        if self.parse_mode.is_default() {
            debug!(id = %self.id, parse_mode = ?defaults.parse_mode, "Applying default parse mode");
        }

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

/// Field-by-field constructor for [`InlineQueryResultCachedGif`].
///
/// Also the deserialization shape: unknown keys are ignored and the required
/// fields are checked in [`CachedGifBuilder::build`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CachedGifBuilder {
    id: Option<String>,
    gif_file_id: Option<String>,
    title: Option<String>,
    caption: Option<String>,
    #[serde(default)]
    parse_mode: DefaultValue<ParseMode>,
    caption_entities: Option<Vec<MessageEntity>>,
    reply_markup: Option<InlineKeyboardMarkup>,
    input_message_content: Option<InputMessageContent>,
}

impl CachedGifBuilder {
    /// Start from a loose key/value bag. Unknown keys are logged and dropped;
    /// missing required fields are only reported by [`CachedGifBuilder::build`].
    pub fn from_kwargs(kwargs: Map<String, Value>) -> Result<Self> {
        for key in kwargs.keys().filter(|k| !KNOWN_FIELDS.contains(&k.as_str())) {
            debug!(field = %key, "Ignoring unknown cached GIF field");
        }

        Ok(serde_json::from_value(Value::Object(kwargs))?)
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn gif_file_id(mut self, gif_file_id: impl Into<String>) -> Self {
        self.gif_file_id = Some(gif_file_id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn parse_mode(mut self, parse_mode: impl Into<DefaultValue<ParseMode>>) -> Self {
        self.parse_mode = parse_mode.into();
        self
    }

    pub fn caption_entities(mut self, entities: impl IntoIterator<Item = MessageEntity>) -> Self {
        self.caption_entities = Some(entities.into_iter().collect());
        self
    }

    pub fn reply_markup(mut self, reply_markup: InlineKeyboardMarkup) -> Self {
        self.reply_markup = Some(reply_markup);
        self
    }

    pub fn input_message_content(mut self, content: InputMessageContent) -> Self {
        self.input_message_content = Some(content);
        self
    }

    pub fn build(self) -> Result<InlineQueryResultCachedGif> {
        let id = self.id.ok_or(InlineError::MissingRequiredField { field: "id" })?;
        let gif_file_id = self
            .gif_file_id
            .ok_or(InlineError::MissingRequiredField { field: "gif_file_id" })?;

        let mut result = InlineQueryResultCachedGif::new(id, gif_file_id)?;
        result.title = self.title;
        result.caption = self.caption;
        result.parse_mode = self.parse_mode;
        result.caption_entities = self.caption_entities;
        result.reply_markup = self.reply_markup;
        result.input_message_content = self.input_message_content;
        Ok(result)
    }
}

impl TryFrom<CachedGifBuilder> for InlineQueryResultCachedGif {
    type Error = InlineError;

    fn try_from(builder: CachedGifBuilder) -> Result<Self> {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::entity::MessageEntityType;
    use serde_json::json;

    #[test]
    fn test_new_sets_fixed_tag() {
        let gif = InlineQueryResultCachedGif::new("abc123", "FILE_XYZ").unwrap();
        assert_eq!(gif.result_type(), InlineQueryResultType::Gif);
        assert_eq!(gif.id(), "abc123");
        assert_eq!(gif.gif_file_id(), "FILE_XYZ");
        assert!(gif.parse_mode().is_default());
    }

    #[test]
    fn test_builder_reports_missing_fields_in_order() {
        let err = CachedGifBuilder::default().build().unwrap_err();
        assert!(matches!(err, InlineError::MissingRequiredField { field: "id" }));

        let err = InlineQueryResultCachedGif::builder().id("1").build().unwrap_err();
        assert!(matches!(err, InlineError::MissingRequiredField { field: "gif_file_id" }));
    }

    #[test]
    fn test_builder_accepts_explicit_none_parse_mode() {
        let gif = InlineQueryResultCachedGif::builder()
            .id("1")
            .gif_file_id("F")
            .parse_mode(None::<ParseMode>)
            .build()
            .unwrap();
        assert_eq!(gif.parse_mode(), &DefaultValue::Unset);
    }

    #[test]
    fn test_resolved_leaves_original_untouched() {
        let gif = InlineQueryResultCachedGif::new("1", "F").unwrap().with_caption("*hi*");
        let resolved = gif.resolved(&Defaults::with_parse_mode(ParseMode::MarkdownV2));
        assert!(gif.parse_mode().is_default());
        assert_eq!(resolved.parse_mode().value(), Some(&ParseMode::MarkdownV2));
    }

    #[test]
    fn test_plain_serde_keeps_opt_out() {
        let gif = InlineQueryResultCachedGif::new("1", "F").unwrap().without_parse_mode();
        let value = serde_json::to_value(&gif).unwrap();
        assert_eq!(value["parse_mode"], Value::Null);

        let back: InlineQueryResultCachedGif = serde_json::from_value(value).unwrap();
        assert_eq!(back.parse_mode(), &DefaultValue::Unset);
    }

    #[test]
    fn test_kwargs_type_key_is_ignored() {
        let kwargs = match json!({"type": "photo", "id": "1", "gif_file_id": "F"}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };
        let gif = InlineQueryResultCachedGif::from_kwargs(kwargs).unwrap();
        assert_eq!(gif.result_type(), InlineQueryResultType::Gif);
    }

    #[test]
    fn test_entities_accessor() {
        let gif = InlineQueryResultCachedGif::new("1", "F")
            .unwrap()
            .with_caption_entities(vec![MessageEntity::new(MessageEntityType::Italic, 0, 2)]);
        assert_eq!(gif.caption_entities().map(|e| e.len()), Some(1));
    }
}
