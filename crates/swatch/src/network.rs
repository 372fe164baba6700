use std::collections::HashMap;
use std::future::Future;

use tokio::sync::Mutex;

use crate::config::FetchConfig;
use crate::error::FetchError;

/// Внешний сетевой слой: загружает тело ресурса по URL.
pub trait Fetch: Send + Sync + 'static {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// `reqwest` для `http(s)://`, `tokio::fs` для `file://` и путей без схемы.
#[derive(Debug, Clone)]
pub struct NetworkFetcher {
    client: reqwest::Client,
    config: FetchConfig,
}

impl NetworkFetcher {
    pub fn new() -> Self {
        Self::with_config(FetchConfig::default())
    }

    pub fn with_config(config: FetchConfig) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "failed to build HTTP client, using reqwest defaults");
                reqwest::Client::new()
            });

        Self { client, config }
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    async fn fetch_http_https(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))
    }

    async fn fetch_file(&self, url: &str) -> Result<String, FetchError> {
        if !self.config.allow_file_urls {
            return Err(FetchError::Forbidden(url.to_string()));
        }
        let path = match url.get(..7) {
            Some(scheme) if scheme.eq_ignore_ascii_case("file://") => &url[7..],
            _ => url,
        };
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| FetchError::Io {
                url: url.to_string(),
                message: e.to_string(),
            })
    }
}

impl Fetch for NetworkFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        // Путь без схемы читается как файл.
        let Some((scheme, _)) = url.split_once("://") else {
            return self.fetch_file(url).await;
        };
        match scheme.to_ascii_lowercase().as_str() {
            "http" | "https" => self.fetch_http_https(url).await,
            "file" => self.fetch_file(url).await,
            _ => Err(FetchError::UnsupportedScheme(url.to_string())),
        }
    }
}

impl Default for NetworkFetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Кэш тел ответов по URL поверх любого [`Fetch`]. Ошибки не кэшируются.
#[derive(Debug, Default)]
pub struct CachingFetcher<F> {
    inner: F,
    cache: Mutex<HashMap<String, String>>,
}

impl<F: Fetch> CachingFetcher<F> {
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &F {
        &self.inner
    }

    pub async fn clear_cache_for_url(&self, url: &str) {
        self.cache.lock().await.remove(url);
    }

    pub async fn clear(&self) {
        self.cache.lock().await.clear();
    }

    pub async fn cached_len(&self) -> usize {
        self.cache.lock().await.len()
    }
}

impl<F: Fetch> Fetch for CachingFetcher<F> {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        if let Some(cached) = self.cache.lock().await.get(url) {
            tracing::trace!(url, "color payload served from cache");
            return Ok(cached.clone());
        }

        let content = self.inner.fetch(url).await?;
        self.cache
            .lock()
            .await
            .insert(url.to_string(), content.clone());
        Ok(content)
    }
}
