//! Настройки разрешения цветов и сетевой загрузки.

use std::time::Duration;

/// Настройки строкового разрешения.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Префикс design-токена (по умолчанию — `$`).
    pub token_prefix: char,
    /// Принимать ли hex без `#` (`ff8800`). По умолчанию — `true`.
    pub allow_bare_hex: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            token_prefix: '$',
            allow_bare_hex: true,
        }
    }
}

/// Настройки загрузки цветов по URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout: Duration,
    /// Разрешать ли `file://` и пути без схемы.
    pub allow_file_urls: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "Swatch/0.1 (reqwest)".to_string(),
            timeout: Duration::from_secs(30),
            allow_file_urls: true,
        }
    }
}
