pub mod config;
pub mod error;
pub mod types;

pub use config::NotifierConfig;
pub use error::{HeraldError, Result};
pub use types::{Level, Notification};
