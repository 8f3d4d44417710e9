/// Errors produced by the Telegram notifier.
#[derive(Debug, thiserror::Error)]
pub enum TelegramError {
    #[error("teloxide error: {0}")]
    Teloxide(#[from] teloxide::RequestError),

    #[error("configuration error: {0}")]
    Config(#[from] herald_core::error::HeraldError),

    #[error("invalid destination entry: {0:?}")]
    InvalidDestination(String),

    #[error("destination list is empty")]
    NoDestinations,
}
