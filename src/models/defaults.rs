//! Caption markup dialects and late-bound library defaults.
//!
//! A result's `parse_mode` is not resolved when the result is built. It stays
//! a [`DefaultValue::UseDefault`] until serialization, where it is resolved
//! against whatever [`Defaults`] the caller passes in at that moment.

// Author: kelexine (https://github.com/kelexine)

use crate::error::InlineError;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Markup dialect used to parse a caption or message text.
///
/// Written with the exact wire casing, read case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ParseMode {
    /// Legacy Markdown.
    Markdown,
    /// MarkdownV2 with escaping rules.
    MarkdownV2,
    /// HTML subset.
    #[serde(rename = "HTML")]
    Html,
}

impl ParseMode {
    /// Wire string for this dialect.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseMode::Markdown => "Markdown",
            ParseMode::MarkdownV2 => "MarkdownV2",
            ParseMode::Html => "HTML",
        }
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParseMode {
    type Err = InlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "markdown" => Ok(ParseMode::Markdown),
            "markdownv2" => Ok(ParseMode::MarkdownV2),
            "html" => Ok(ParseMode::Html),
            _ => Err(InlineError::InvalidParseMode(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for ParseMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

/// An optional value that distinguishes "use the library default" from an
/// explicit absence.
///
/// - Missing key on input deserializes to `UseDefault`.
/// - Explicit `null` deserializes to `Unset`.
/// - `UseDefault` is omitted from output, `Unset` is written as `null`, so a
///   plain serde round trip keeps all three states. [`strip_nulls`] turns a
///   resolved payload into wire form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DefaultValue<T> {
    #[default]
    UseDefault,
    Unset,
    Value(T),
}

impl<T> DefaultValue<T> {
    /// Also the `skip_serializing_if` predicate: only `UseDefault` is left out.
    pub fn is_default(&self) -> bool {
        matches!(self, DefaultValue::UseDefault)
    }

    /// The explicit value, if any. `UseDefault` yields `None`.
    pub fn value(&self) -> Option<&T> {
        match self {
            DefaultValue::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<T: Clone> DefaultValue<T> {
    /// Replace `UseDefault` with the given default. Explicit states are kept.
    pub fn resolve(&self, default: Option<&T>) -> DefaultValue<T> {
        match self {
            DefaultValue::UseDefault => match default {
                Some(v) => DefaultValue::Value(v.clone()),
                None => DefaultValue::Unset,
            },
            other => other.clone(),
        }
    }
}

impl<T> From<Option<T>> for DefaultValue<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => DefaultValue::Value(v),
            None => DefaultValue::Unset,
        }
    }
}

impl From<ParseMode> for DefaultValue<ParseMode> {
    fn from(value: ParseMode) -> Self {
        DefaultValue::Value(value)
    }
}

impl<T: Serialize> Serialize for DefaultValue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DefaultValue::Value(v) => v.serialize(serializer),
            _ => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for DefaultValue<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(DefaultValue::from)
    }
}

/// Drop `null` members from every object in `value`.
///
/// After default resolution the only nulls left are explicit opt-outs, which
/// the Bot API expects as absent keys.
pub fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(strip_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(strip_nulls),
        _ => {}
    }
}

/// Library-wide values substituted for [`DefaultValue::UseDefault`] at
/// serialization time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Defaults {
    pub parse_mode: Option<ParseMode>,
}

impl Defaults {
    pub fn with_parse_mode(parse_mode: ParseMode) -> Self {
        Self {
            parse_mode: Some(parse_mode),
        }
    }
}
