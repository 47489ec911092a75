//! Data models for Bot API inline query results.
//!
//! This module contains the wire types used when answering inline queries:
//! - The result family and its discriminant tags (`inline_result`)
//! - Server-cached and URL-referenced GIF results (`cached_gif`, `gif`)
//! - Nested payloads: caption entities, keyboards, message content
//! - Late-bound defaults such as the parse mode (`defaults`)

// Author: kelexine (https://github.com/kelexine)

pub mod cached_gif;
pub mod defaults;
pub mod entity;
pub mod gif;
pub mod inline_result;
pub mod input_content;
pub mod keyboard;

pub use cached_gif::{CachedGifBuilder, InlineQueryResultCachedGif};
pub use defaults::{DefaultValue, Defaults, ParseMode};
pub use entity::{MessageEntity, MessageEntityType, User};
pub use gif::InlineQueryResultGif;
pub use inline_result::{
    InlineQueryResult, InlineQueryResultType, CAPTION_LENGTH, MAX_RESULT_ID_BYTES,
};
pub use input_content::*;
pub use keyboard::{InlineKeyboardButton, InlineKeyboardMarkup};
