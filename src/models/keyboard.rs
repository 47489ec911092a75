// Inline keyboard markup
// Author: kelexine (https://github.com/kelexine)

use serde::{Deserialize, Serialize};

/// Rows of buttons shown under the sent message.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

impl InlineKeyboardMarkup {
    pub fn new(rows: Vec<Vec<InlineKeyboardButton>>) -> Self {
        Self {
            inline_keyboard: rows,
        }
    }

    /// Keyboard with a single row.
    pub fn from_row(row: Vec<InlineKeyboardButton>) -> Self {
        Self::new(vec![row])
    }

    /// Keyboard with a single button.
    pub fn from_button(button: InlineKeyboardButton) -> Self {
        Self::from_row(vec![button])
    }

    /// Append a row, builder style.
    pub fn row(mut self, row: Vec<InlineKeyboardButton>) -> Self {
        self.inline_keyboard.push(row);
        self
    }
}

/// One inline keyboard button. Exactly one of the optional actions should be set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineKeyboardButton {
    pub text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_data: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_inline_query: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_inline_query_current_chat: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay: Option<bool>,
}

impl InlineKeyboardButton {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: None,
            callback_data: None,
            switch_inline_query: None,
            switch_inline_query_current_chat: None,
            pay: None,
        }
    }

    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::plain(text)
        }
    }

    pub fn callback(text: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            callback_data: Some(data.into()),
            ..Self::plain(text)
        }
    }

    pub fn switch_inline_query(text: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            switch_inline_query: Some(query.into()),
            ..Self::plain(text)
        }
    }

    pub fn switch_inline_query_current_chat(
        text: impl Into<String>,
        query: impl Into<String>,
    ) -> Self {
        Self {
            switch_inline_query_current_chat: Some(query.into()),
            ..Self::plain(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_callback_button_wire_shape() {
        let button = InlineKeyboardButton::callback("Like", "like:1");
        let markup = InlineKeyboardMarkup::from_button(button);
        assert_eq!(
            serde_json::to_value(&markup).unwrap(),
            json!({"inline_keyboard": [[{"text": "Like", "callback_data": "like:1"}]]})
        );
    }

    #[test]
    fn test_rows_keep_order() {
        let markup = InlineKeyboardMarkup::from_row(vec![
            InlineKeyboardButton::url("Site", "https://example.com"),
            InlineKeyboardButton::switch_inline_query("Share", "cats"),
        ])
        .row(vec![InlineKeyboardButton::switch_inline_query_current_chat("More", "")]);

        assert_eq!(markup.inline_keyboard.len(), 2);
        assert_eq!(markup.inline_keyboard[0][1].text, "Share");
        let more = &markup.inline_keyboard[1][0];
        assert_eq!(more.switch_inline_query_current_chat.as_deref(), Some(""));
    }
}
