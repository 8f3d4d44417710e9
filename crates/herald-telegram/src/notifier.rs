//! Notifier fan-out: one notification to every configured destination.

use futures_util::future::join_all;
use tracing::{debug, info, warn};

use herald_core::config::NotifierConfig;
use herald_core::types::{Level, Notification};

use crate::dest::{self, Destination};
use crate::error::TelegramError;
use crate::transport::{BotTransport, Transport};

/// Sends severity-tagged notifications to a fixed set of Telegram
/// destinations.
///
/// The destination list is parsed once at construction and immutable
/// afterwards. `notify` takes `&self`, so concurrent invocations need no
/// coordination.
pub struct TelegramNotifier<T: Transport = BotTransport> {
    transport: T,
    destinations: Vec<Destination>,
}

impl TelegramNotifier<BotTransport> {
    /// Build a notifier from an explicit configuration.
    ///
    /// Fails fast on a malformed or empty destination list.
    pub fn new(config: &NotifierConfig) -> Result<Self, TelegramError> {
        let destinations = dest::parse_destinations(&config.destinations)?;
        info!(destinations = destinations.len(), "Telegram notifier configured");
        Ok(Self {
            transport: BotTransport::new(&config.bot_token),
            destinations,
        })
    }

    /// Build a notifier from `HERALD_*` environment variables.
    pub fn from_env() -> Result<Self, TelegramError> {
        let config = NotifierConfig::from_env()?;
        Self::new(&config)
    }
}

impl<T: Transport> TelegramNotifier<T> {
    /// Build a notifier over a custom transport.
    pub fn with_transport(transport: T, destinations: Vec<Destination>) -> Self {
        Self {
            transport,
            destinations,
        }
    }

    /// The configured destinations, in configuration order.
    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    /// Send `message` at `level` to every configured destination.
    ///
    /// Destinations are attempted concurrently. A failure for one destination
    /// is logged and does not abort delivery to the others; there is no
    /// per-destination result for the caller.
    pub async fn notify(&self, message: &str, level: Level) {
        let text = Notification::new(level, message).format();

        debug!(
            level = %level,
            destinations = self.destinations.len(),
            "sending notification"
        );

        let sends = self.destinations.iter().map(|destination| {
            let text = &text;
            async move {
                match self.transport.deliver(destination, text).await {
                    Ok(()) => {
                        debug!(destination = %destination, "notification delivered");
                        true
                    }
                    Err(e) => {
                        warn!(
                            destination = %destination,
                            error = %e,
                            "failed to deliver notification"
                        );
                        false
                    }
                }
            }
        });

        let delivered = join_all(sends).await.into_iter().filter(|ok| *ok).count();

        info!(
            level = %level,
            delivered,
            total = self.destinations.len(),
            "notification fan-out complete"
        );
    }
}
