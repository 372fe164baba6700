//! Ошибки разрешения цветов.

use thiserror::Error;

/// Ошибка разрешения строкового токена или URL в цвет.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("`{0}` is not a recognised color string")]
    InvalidColorString(String),
    #[error("invalid hex color `{0}`")]
    InvalidHexString(String),
    #[error("design token `{0}` is not defined")]
    UnresolvedToken(String),
    #[error("unknown color name `{0}`")]
    UnknownColorName(String),
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Ошибка загрузки ресурса, описывающего цвет.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("request to `{url}` failed: {message}")]
    Http { url: String, message: String },
    #[error("`{url}` answered with status {status}")]
    Status { url: String, status: u16 },
    #[error("cannot read `{url}`: {message}")]
    Io { url: String, message: String },
    #[error("request to `{0}` timed out")]
    Timeout(String),
    #[error("`{0}` is not allowed by the fetch configuration")]
    Forbidden(String),
    #[error("`{0}` uses an unsupported URL scheme")]
    UnsupportedScheme(String),
    #[error("`{0}` returned an empty payload")]
    EmptyPayload(String),
    #[error("fetch task was aborted")]
    Aborted,
}

impl FetchError {
    pub(crate) fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return Self::Timeout(url.to_string());
        }
        if let Some(status) = err.status() {
            return Self::Status {
                url: url.to_string(),
                status: status.as_u16(),
            };
        }
        Self::Http {
            url: url.to_string(),
            message: err.to_string(),
        }
    }
}

/// Ошибка загрузки реестра design-токенов из JSON.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryLoadError {
    #[error("token registry JSON is malformed: {0}")]
    Json(String),
    #[error("token `{name}` has an invalid value: {source}")]
    InvalidEntry { name: String, source: ColorError },
}
