//! Destination parsing for the notifier.
//!
//! A destination is either a numeric chat ID (negative for channels and
//! supergroups) or a public `@username`. The configured list is parsed once
//! at notifier construction; a malformed entry is a fatal configuration
//! error, not a per-send failure.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use teloxide::types::{ChatId, Recipient};

use crate::error::TelegramError;

/// A single pre-authorized delivery target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    /// Numeric chat ID. Negative values address channels and supergroups.
    Chat(i64),

    /// Public username of a user or channel, stored without the leading `@`.
    Username(String),
}

impl Destination {
    /// Convert to the teloxide `Recipient` used in Bot API calls.
    pub fn recipient(&self) -> Recipient {
        match self {
            Destination::Chat(id) => Recipient::Id(ChatId(*id)),
            Destination::Username(name) => Recipient::ChannelUsername(format!("@{name}")),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Chat(id) => write!(f, "{id}"),
            Destination::Username(name) => write!(f, "@{name}"),
        }
    }
}

impl FromStr for Destination {
    type Err = TelegramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let entry = s.trim();
        if let Some(name) = entry.strip_prefix('@') {
            if name.is_empty() {
                return Err(TelegramError::InvalidDestination(s.to_string()));
            }
            return Ok(Destination::Username(name.to_string()));
        }
        entry
            .parse::<i64>()
            .map(Destination::Chat)
            .map_err(|_| TelegramError::InvalidDestination(s.to_string()))
    }
}

/// Parse a comma-separated destination list.
///
/// Whitespace around entries is ignored and blank entries (e.g. from a
/// trailing comma) are skipped. An effectively empty list is an error.
pub fn parse_destinations(raw: &str) -> Result<Vec<Destination>, TelegramError> {
    let mut destinations = Vec::new();
    for entry in raw.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        destinations.push(entry.parse()?);
    }
    if destinations.is_empty() {
        return Err(TelegramError::NoDestinations);
    }
    Ok(destinations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_chat_id() {
        assert_eq!(
            "123456789".parse::<Destination>().unwrap(),
            Destination::Chat(123456789)
        );
    }

    #[test]
    fn parses_negative_channel_id() {
        assert_eq!(
            "-1001234567890".parse::<Destination>().unwrap(),
            Destination::Chat(-1001234567890)
        );
    }

    #[test]
    fn parses_username_with_at_prefix() {
        assert_eq!(
            "@alerts".parse::<Destination>().unwrap(),
            Destination::Username("alerts".to_string())
        );
    }

    #[test]
    fn rejects_bare_at_sign() {
        assert!(matches!(
            "@".parse::<Destination>(),
            Err(TelegramError::InvalidDestination(_))
        ));
    }

    #[test]
    fn rejects_non_numeric_entry_without_at() {
        assert!(matches!(
            "alerts".parse::<Destination>(),
            Err(TelegramError::InvalidDestination(_))
        ));
    }

    #[test]
    fn list_splits_on_commas_and_trims() {
        let destinations = parse_destinations(" 111 , -100222 , @ops ").unwrap();
        assert_eq!(
            destinations,
            vec![
                Destination::Chat(111),
                Destination::Chat(-100222),
                Destination::Username("ops".to_string()),
            ]
        );
    }

    #[test]
    fn blank_entries_are_skipped() {
        let destinations = parse_destinations("111,,222,").unwrap();
        assert_eq!(
            destinations,
            vec![Destination::Chat(111), Destination::Chat(222)]
        );
    }

    #[test]
    fn effectively_empty_list_is_an_error() {
        assert!(matches!(
            parse_destinations(" , , "),
            Err(TelegramError::NoDestinations)
        ));
    }

    #[test]
    fn one_bad_entry_fails_the_whole_list() {
        assert!(matches!(
            parse_destinations("111,not-a-chat,222"),
            Err(TelegramError::InvalidDestination(_))
        ));
    }

    #[test]
    fn recipient_keeps_at_prefix_for_usernames() {
        let dest = Destination::Username("alerts".to_string());
        assert_eq!(
            dest.recipient(),
            Recipient::ChannelUsername("@alerts".to_string())
        );
        assert_eq!(
            Destination::Chat(-42).recipient(),
            Recipient::Id(ChatId(-42))
        );
    }

    #[test]
    fn display_round_trips() {
        for raw in ["123", "-100456", "@ops"] {
            let dest: Destination = raw.parse().unwrap();
            assert_eq!(dest.to_string(), raw);
        }
    }
}
