// tgcached - Typed inline query results for the Telegram Bot API
// Author: kelexine (https://github.com/kelexine)

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

pub use error::{InlineError, Result};
pub use models::{Defaults, InlineQueryResult, InlineQueryResultCachedGif, ParseMode};
