//! Message sending helpers.
//!
//! Telegram caps messages at 4096 characters; longer notifications are split
//! at line boundaries. Tries MarkdownV2 first; falls back to plain text when
//! Telegram rejects the parse mode.

use std::time::Duration;

use teloxide::prelude::*;
use teloxide::types::{ParseMode, Recipient};
use tracing::warn;

use crate::error::TelegramError;

/// Maximum bytes per message (the API limit is 4096 characters; 4090 leaves
/// safety margin, and counting bytes only over-counts).
const CHUNK_MAX: usize = 4090;

/// Pause between consecutive chunks of one oversized notification.
const CHUNK_DELAY: Duration = Duration::from_millis(100);

/// Largest index `<= max` that sits on a UTF-8 character boundary.
///
/// Severity prefixes contain emoji, so a byte-offset split can land inside a
/// code point.
fn floor_char_boundary(s: &str, mut index: usize) -> usize {
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Split `text` into chunks of at most [`CHUNK_MAX`] bytes.
///
/// Splits prefer the last newline in the window, then the last space, and
/// only cut mid-word when a single token exceeds the limit.
pub fn split_chunks(text: &str) -> Vec<String> {
    if text.len() <= CHUNK_MAX {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut remaining = text;
    while remaining.len() > CHUNK_MAX {
        let cut = floor_char_boundary(remaining, CHUNK_MAX);
        let window = &remaining[..cut];
        let split_at = match window.rfind('\n').or_else(|| window.rfind(' ')) {
            // A separator at index 0 would make no progress; force the cut.
            Some(0) | None => cut,
            Some(i) => i,
        };

        let chunk = remaining[..split_at].trim_end();
        if !chunk.is_empty() {
            chunks.push(chunk.to_string());
        }
        remaining = remaining[split_at..].trim_start();
    }

    if !remaining.is_empty() {
        chunks.push(remaining.to_string());
    }
    chunks
}

/// Escape the characters MarkdownV2 treats as markup.
pub fn escape_markdown_v2(text: &str) -> String {
    const SPECIAL: &[char] = &[
        '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
    ];

    let mut escaped = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        if SPECIAL.contains(&ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Deliver `text` to a single recipient, chunking as needed.
///
/// Each chunk is sent as MarkdownV2; when Telegram rejects the parse mode
/// (e.g. markup the escaper did not anticipate) the chunk is retried once as
/// plain text. The first error that prevents delivery is returned.
pub async fn send_text(bot: &Bot, recipient: Recipient, text: &str) -> Result<(), TelegramError> {
    let chunks = split_chunks(text);
    let total = chunks.len();

    for (i, chunk) in chunks.iter().enumerate() {
        let escaped = escape_markdown_v2(chunk);
        let markdown = bot
            .send_message(recipient.clone(), escaped)
            .parse_mode(ParseMode::MarkdownV2)
            .await;

        if let Err(e) = markdown {
            warn!(error = %e, chunk = i + 1, total, "MarkdownV2 send rejected, retrying as plain text");
            bot.send_message(recipient.clone(), chunk.clone()).await?;
        }

        if i + 1 < total {
            tokio::time::sleep(CHUNK_DELAY).await;
        }
    }

    Ok(())
}
