//! Errors raised while loading site content.

use thiserror::Error;

/// Why a `site.toml` was rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("menu #{index} has an empty trigger label")]
    EmptyTrigger { index: usize },

    #[error("menu '{trigger}' lists item id '{id}' more than once")]
    DuplicateItemId { trigger: String, id: String },

    #[error("hover.close_delay_ms must be greater than zero")]
    ZeroCloseDelay,

    #[error("hover.close_delay_ms is {value}; the browser timer accepts at most {max}")]
    CloseDelayTooLong { value: u64, max: u64 },
}
