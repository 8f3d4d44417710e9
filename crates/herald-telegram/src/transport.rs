//! Delivery seam between the notifier and the Bot API.

use async_trait::async_trait;
use teloxide::Bot;

use crate::dest::Destination;
use crate::error::TelegramError;
use crate::send;

/// Delivers one formatted notification to one destination.
///
/// Implementations must be `Send + Sync` so the notifier can fan out to all
/// destinations concurrently. `deliver` takes `&self` for the same reason.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn deliver(&self, destination: &Destination, text: &str) -> Result<(), TelegramError>;
}

/// Production transport backed by a teloxide [`Bot`].
pub struct BotTransport {
    bot: Bot,
}

impl BotTransport {
    pub fn new(bot_token: &str) -> Self {
        Self {
            bot: Bot::new(bot_token),
        }
    }
}

#[async_trait]
impl Transport for BotTransport {
    async fn deliver(&self, destination: &Destination, text: &str) -> Result<(), TelegramError> {
        send::send_text(&self.bot, destination.recipient(), text).await
    }
}
