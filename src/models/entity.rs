// Caption entity types
// Author: kelexine (https://github.com/kelexine)

use serde::{Deserialize, Serialize};

/// One markup span in a caption or message text.
///
/// Offsets and lengths are measured in UTF-16 code units, as the Bot API does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageEntity {
    #[serde(rename = "type")]
    pub kind: MessageEntityType,

    pub offset: u32,

    pub length: u32,

    /// Target of a `text_link` entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Mentioned user of a `text_mention` entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    /// Language of a `pre` block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_emoji_id: Option<String>,
}

impl MessageEntity {
    pub fn new(kind: MessageEntityType, offset: u32, length: u32) -> Self {
        Self {
            kind,
            offset,
            length,
            url: None,
            user: None,
            language: None,
            custom_emoji_id: None,
        }
    }

    pub fn text_link(offset: u32, length: u32, url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::new(MessageEntityType::TextLink, offset, length)
        }
    }

    pub fn text_mention(offset: u32, length: u32, user: User) -> Self {
        Self {
            user: Some(user),
            ..Self::new(MessageEntityType::TextMention, offset, length)
        }
    }

    pub fn pre(offset: u32, length: u32, language: Option<String>) -> Self {
        Self {
            language,
            ..Self::new(MessageEntityType::Pre, offset, length)
        }
    }
}

/// Kind of a [`MessageEntity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageEntityType {
    Mention,
    Hashtag,
    Cashtag,
    BotCommand,
    Url,
    Email,
    PhoneNumber,
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Spoiler,
    Code,
    Pre,
    TextLink,
    TextMention,
    CustomEmoji,
}

/// Minimal user record carried by `text_mention` entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub is_bot: bool,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}
