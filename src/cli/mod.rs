// CLI module for tgcached
// Author: kelexine (https://github.com/kelexine)

use crate::error::{InlineError, Result};
use crate::models::{CachedGifBuilder, InlineQueryResultCachedGif, ParseMode};
use clap::Parser;
use serde_json::{Map, Value};
use std::path::PathBuf;

/// tgcached - render a cached GIF inline query result as Bot API JSON
#[derive(Parser, Debug)]
#[command(name = "tgcached", version, about, long_about = None)]
pub struct Args {
    /// Unique identifier for the result, 1-64 bytes
    #[arg(long)]
    pub id: Option<String>,

    /// File identifier of a GIF already stored on the server
    #[arg(long)]
    pub file_id: Option<String>,

    /// Title for the result
    #[arg(long)]
    pub title: Option<String>,

    /// Caption sent with the GIF
    #[arg(long)]
    pub caption: Option<String>,

    /// Caption parse mode (Markdown, MarkdownV2, HTML); overrides the configured default
    #[arg(long, value_parser = parse_mode_arg, conflicts_with = "no_parse_mode")]
    pub parse_mode: Option<ParseMode>,

    /// Send the caption without any parse mode, ignoring the configured default
    #[arg(long)]
    pub no_parse_mode: bool,

    /// JSON object with result fields; flags take precedence over its values
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Config file to use instead of ~/.tgcached/config.toml
    #[arg(long, env = "TGCACHED_CONFIG")]
    pub config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

fn parse_mode_arg(s: &str) -> std::result::Result<ParseMode, String> {
    s.parse().map_err(|e: InlineError| e.to_string())
}

impl Args {
    /// Assemble the result described by the input file and flags.
    pub fn build_result(&self) -> Result<InlineQueryResultCachedGif> {
        let mut builder = match &self.input {
            Some(path) => {
                let raw = std::fs::read_to_string(path)?;
                match serde_json::from_str::<Value>(&raw)? {
                    Value::Object(map) => CachedGifBuilder::from_kwargs(map)?,
                    _ => {
                        return Err(InlineError::InvalidField {
                            field: "input",
                            reason: "expected a JSON object".to_string(),
                        })
                    }
                }
            }
            None => CachedGifBuilder::from_kwargs(Map::new())?,
        };

        if let Some(id) = &self.id {
            builder = builder.id(id);
        }
        if let Some(file_id) = &self.file_id {
            builder = builder.gif_file_id(file_id);
        }
        if let Some(title) = &self.title {
            builder = builder.title(title);
        }
        if let Some(caption) = &self.caption {
            builder = builder.caption(caption);
        }
        if let Some(parse_mode) = self.parse_mode {
            builder = builder.parse_mode(parse_mode);
        } else if self.no_parse_mode {
            builder = builder.parse_mode(None::<ParseMode>);
        }

        builder.build()
    }
}
