//! The inline query result family.
//!
//! Every result carries a discriminant tag and an id. The variants this crate
//! ships live in [`InlineQueryResult`]; serialization dispatches on the
//! variant rather than inspecting fields at runtime.

// Author: kelexine (https://github.com/kelexine)

use super::cached_gif::InlineQueryResultCachedGif;
use super::defaults::Defaults;
use super::gif::InlineQueryResultGif;
use crate::error::{InlineError, Result};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Maximum length of a result id, in bytes.
pub const MAX_RESULT_ID_BYTES: usize = 64;

/// Maximum caption length, in characters after entity parsing. Not checked
/// locally since parsing happens server side.
pub const CAPTION_LENGTH: usize = 1024;

/// Discriminant tag of an inline query result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InlineQueryResultType {
    Article,
    Photo,
    Gif,
    Mpeg4Gif,
    Video,
    Audio,
    Voice,
    Document,
    Location,
    Venue,
    Contact,
    Game,
    Sticker,
}

impl InlineQueryResultType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InlineQueryResultType::Article => "article",
            InlineQueryResultType::Photo => "photo",
            InlineQueryResultType::Gif => "gif",
            InlineQueryResultType::Mpeg4Gif => "mpeg4_gif",
            InlineQueryResultType::Video => "video",
            InlineQueryResultType::Audio => "audio",
            InlineQueryResultType::Voice => "voice",
            InlineQueryResultType::Document => "document",
            InlineQueryResultType::Location => "location",
            InlineQueryResultType::Venue => "venue",
            InlineQueryResultType::Contact => "contact",
            InlineQueryResultType::Game => "game",
            InlineQueryResultType::Sticker => "sticker",
        }
    }
}

impl fmt::Display for InlineQueryResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check the 1-64 byte bound on a result id.
pub fn validate_result_id(id: &str) -> Result<()> {
    let len = id.len();
    if len == 0 || len > MAX_RESULT_ID_BYTES {
        return Err(InlineError::InvalidResultId { len });
    }
    Ok(())
}

/// Any inline query result this crate can build.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InlineQueryResult {
    /// GIF already stored on the server, referenced by file id.
    CachedGif(InlineQueryResultCachedGif),
    /// GIF referenced by an external URL.
    Gif(InlineQueryResultGif),
}

impl InlineQueryResult {
    pub fn id(&self) -> &str {
        match self {
            InlineQueryResult::CachedGif(r) => r.id(),
            InlineQueryResult::Gif(r) => r.id(),
        }
    }

    pub fn result_type(&self) -> InlineQueryResultType {
        match self {
            InlineQueryResult::CachedGif(r) => r.result_type(),
            InlineQueryResult::Gif(r) => r.result_type(),
        }
    }

    /// Serialize to a JSON object with library defaults applied.
    pub fn to_wire(&self, defaults: &Defaults) -> Result<Value> {
        match self {
            InlineQueryResult::CachedGif(r) => r.to_wire(defaults),
            InlineQueryResult::Gif(r) => r.to_wire(defaults),
        }
    }

    /// Build a result from a JSON object, picking the variant from its tag
    /// and, for `gif`, from which file reference is present.
    pub fn from_json(map: Map<String, Value>) -> Result<Self> {
        let tag = map
            .get("type")
            .ok_or(InlineError::MissingRequiredField { field: "type" })?;
        let tag: InlineQueryResultType = serde_json::from_value(tag.clone())?;

        match tag {
            InlineQueryResultType::Gif if map.contains_key("gif_file_id") => {
                InlineQueryResultCachedGif::from_kwargs(map).map(InlineQueryResult::CachedGif)
            }
            InlineQueryResultType::Gif if map.contains_key("gif_url") => {
                Ok(InlineQueryResult::Gif(serde_json::from_value(Value::Object(map))?))
            }
            InlineQueryResultType::Gif => {
                Err(InlineError::MissingRequiredField { field: "gif_file_id" })
            }
            other => Err(InlineError::InvalidField {
                field: "type",
                reason: format!("unsupported result type: {}", other),
            }),
        }
    }
}

impl From<InlineQueryResultCachedGif> for InlineQueryResult {
    fn from(value: InlineQueryResultCachedGif) -> Self {
        InlineQueryResult::CachedGif(value)
    }
}

impl From<InlineQueryResultGif> for InlineQueryResult {
    fn from(value: InlineQueryResultGif) -> Self {
        InlineQueryResult::Gif(value)
    }
}

impl<'de> Deserialize<'de> for InlineQueryResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        InlineQueryResult::from_json(map).map_err(D::Error::custom)
    }
}
