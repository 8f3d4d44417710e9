pub mod dest;
pub mod error;
pub mod notifier;
pub mod send;
pub mod transport;

pub use dest::Destination;
pub use error::TelegramError;
pub use notifier::TelegramNotifier;
pub use transport::{BotTransport, Transport};
