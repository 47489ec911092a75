//! Message content sent in place of a result's own media.
//!
//! The Bot API does not tag these variants; each is recognised by its fields,
//! so the enum is untagged. Variant order matters for deserialization: a venue
//! is a superset of a location and has to be tried first.

// Author: kelexine (https://github.com/kelexine)

use super::defaults::{DefaultValue, Defaults, ParseMode};
use super::entity::MessageEntity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputMessageContent {
    Text(InputTextMessageContent),
    Contact(InputContactMessageContent),
    Venue(InputVenueMessageContent),
    Location(InputLocationMessageContent),
}

impl InputMessageContent {
    pub fn text(message_text: impl Into<String>) -> Self {
        InputMessageContent::Text(InputTextMessageContent::new(message_text))
    }

    pub fn location(latitude: f64, longitude: f64) -> Self {
        InputMessageContent::Location(InputLocationMessageContent { latitude, longitude })
    }

    /// Copy with late-bound defaults applied. Only text content has any.
    pub fn resolved(&self, defaults: &Defaults) -> Self {
        match self {
            InputMessageContent::Text(text) => InputMessageContent::Text(InputTextMessageContent {
                parse_mode: text.parse_mode.resolve(defaults.parse_mode.as_ref()),
                ..text.clone()
            }),
            other => other.clone(),
        }
    }
}

/// Text message content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputTextMessageContent {
    pub message_text: String,

    #[serde(default, skip_serializing_if = "DefaultValue::is_default")]
    pub parse_mode: DefaultValue<ParseMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<MessageEntity>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_web_page_preview: Option<bool>,
}

impl InputTextMessageContent {
    pub fn new(message_text: impl Into<String>) -> Self {
        Self {
            message_text: message_text.into(),
            parse_mode: DefaultValue::UseDefault,
            entities: None,
            disable_web_page_preview: None,
        }
    }
}

/// Location message content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputLocationMessageContent {
    pub latitude: f64,
    pub longitude: f64,
}

/// Venue message content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputVenueMessageContent {
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub address: String,
}

/// Contact message content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputContactMessageContent {
    pub phone_number: String,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_content_omits_unresolved_parse_mode() {
        let content = InputMessageContent::text("hello");
        assert_eq!(serde_json::to_value(&content).unwrap(), json!({"message_text": "hello"}));
    }

    #[test]
    fn test_text_content_resolves_default() {
        let content = InputMessageContent::text("<b>hi</b>");
        let resolved = content.resolved(&Defaults::with_parse_mode(ParseMode::Html));
        assert_eq!(
            serde_json::to_value(&resolved).unwrap(),
            json!({"message_text": "<b>hi</b>", "parse_mode": "HTML"})
        );
    }

    #[test]
    fn test_text_content_accepts_lowercase_parse_mode() {
        let content: InputMessageContent =
            serde_json::from_value(json!({"message_text": "<b>hi</b>", "parse_mode": "html"}))
                .unwrap();
        match content {
            InputMessageContent::Text(text) => {
                assert_eq!(text.parse_mode, DefaultValue::Value(ParseMode::Html));
            }
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_untagged_deserialization_picks_venue_over_location() {
        let venue: InputMessageContent = serde_json::from_value(json!({
            "latitude": 52.37,
            "longitude": 4.89,
            "title": "Dam",
            "address": "Dam Square"
        }))
        .unwrap();
        assert!(matches!(venue, InputMessageContent::Venue(_)));

        let location: InputMessageContent =
            serde_json::from_value(json!({"latitude": 52.37, "longitude": 4.89})).unwrap();
        assert_eq!(location, InputMessageContent::location(52.37, 4.89));
    }

    #[test]
    fn test_contact_content() {
        let contact: InputMessageContent =
            serde_json::from_value(json!({"phone_number": "+100", "first_name": "Bo"})).unwrap();
        match contact {
            InputMessageContent::Contact(c) => {
                assert_eq!(c.first_name, "Bo");
                assert!(c.last_name.is_none());
            }
            other => panic!("expected contact, got {:?}", other),
        }
    }
}
