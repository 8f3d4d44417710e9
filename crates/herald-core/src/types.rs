use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::HeraldError;

/// Severity attached to a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    /// Routine status updates.
    #[default]
    Info,

    /// Something needs attention but the caller can keep going.
    Warning,

    /// A failure the operator should act on.
    Error,
}

impl Level {
    /// Display prefix prepended to every outgoing message body.
    pub fn prefix(&self) -> &'static str {
        match self {
            Level::Info => "ℹ️ [INFO]",
            Level::Warning => "⚠️ [WARNING]",
            Level::Error => "❌ [ERROR]",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Level {
    type Err = HeraldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(Level::Info),
            "warning" | "warn" => Ok(Level::Warning),
            "error" => Ok(Level::Error),
            other => Err(HeraldError::InvalidLevel(other.to_string())),
        }
    }
}

/// A single notification: a severity and a free-text body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: Level,
    pub message: String,
}

impl Notification {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    /// Render the outgoing text: severity prefix, blank line, body.
    pub fn format(&self) -> String {
        format!("{}\n\n{}", self.level.prefix(), self.message)
    }
}
