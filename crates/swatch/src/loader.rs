//! Асинхронное разрешение цветов по URL.
//!
//! Загрузка идёт в задачах tokio, а колбэки хранятся в [`ColorLoader`] и
//! вызываются только из [`ColorLoader::dispatch_ready`] /
//! [`ColorLoader::dispatch_next`] — то есть на том потоке, который владеет
//! загрузчиком (обычно UI-поток). Поэтому колбэкам не нужен `Send`.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

use crate::color::Color;
use crate::error::{ColorError, FetchError};
use crate::network::{Fetch, NetworkFetcher};
use crate::payload;
use crate::resolver::ColorResolver;

/// Колбэк завершения: ровно один вызов с цветом или ошибкой.
pub type ColorCallback = Box<dyn FnOnce(Result<Color, ColorError>)>;

static NEXT_LOADER_ID: AtomicU64 = AtomicU64::new(0);

/// Дескриптор запущенной загрузки, нужен для отмены.
/// Действителен только для загрузчика, который его выдал.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchHandle {
    loader: u64,
    id: u64,
    url: String,
}

impl FetchHandle {
    /// Номер запроса, уникальный в пределах своего загрузчика.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

struct Pending {
    callback: ColorCallback,
    abort: AbortHandle,
}

#[derive(Debug)]
struct Completion {
    id: u64,
    result: Result<Color, ColorError>,
}

/// Гарантирует, что по каждому запросу придёт ровно одно завершение:
/// если задачу уничтожили раньше (отмена, паника, остановка runtime),
/// в канал уходит `FetchError::Aborted`.
struct CompletionGuard {
    id: u64,
    tx: Option<mpsc::UnboundedSender<Completion>>,
}

impl CompletionGuard {
    fn finish(mut self, result: Result<Color, ColorError>) {
        if let Some(tx) = self.tx.take() {
            // Получатель живёт столько же, сколько загрузчик.
            let _ = tx.send(Completion {
                id: self.id,
                result,
            });
        }
    }
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        if let Some(tx) = self.tx.take() {
            tracing::debug!(id = self.id, "color fetch task dropped before completion");
            let _ = tx.send(Completion {
                id: self.id,
                result: Err(FetchError::Aborted.into()),
            });
        }
    }
}

/// Загружает ресурс и превращает тело в цвет.
pub async fn resolve_url<F: Fetch>(
    fetcher: &F,
    resolver: &ColorResolver,
    url: &str,
) -> Result<Color, ColorError> {
    tracing::debug!(url, "fetching color");
    let body = fetcher.fetch(url).await.inspect_err(|err| {
        tracing::warn!(url, error = %err, "color fetch failed");
    })?;
    let color = payload::interpret(url, &body, resolver)?;
    tracing::debug!(url, %color, "color fetched");
    Ok(color)
}

pub struct ColorLoader<F: Fetch = NetworkFetcher> {
    loader_id: u64,
    resolver: Arc<ColorResolver>,
    fetcher: Arc<F>,
    runtime: Handle,
    next_id: u64,
    pending: HashMap<u64, Pending>,
    completion_tx: mpsc::UnboundedSender<Completion>,
    completion_rx: mpsc::UnboundedReceiver<Completion>,
}

impl<F: Fetch> ColorLoader<F> {
    pub fn new(resolver: ColorResolver, fetcher: F, runtime: Handle) -> Self {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        Self {
            loader_id: NEXT_LOADER_ID.fetch_add(1, Ordering::Relaxed),
            resolver: Arc::new(resolver),
            fetcher: Arc::new(fetcher),
            runtime,
            next_id: 0,
            pending: HashMap::new(),
            completion_tx,
            completion_rx,
        }
    }

    pub fn resolver(&self) -> &ColorResolver {
        &self.resolver
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Запускает загрузку и сразу возвращает управление.
    ///
    /// `callback` будет вызван ровно один раз из `dispatch_*` на потоке
    /// владельца, если загрузку не отменили через [`cancel`](Self::cancel).
    pub fn resolve_from_url(
        &mut self,
        url: impl Into<String>,
        callback: impl FnOnce(Result<Color, ColorError>) + 'static,
    ) -> FetchHandle {
        let url = url.into();
        let id = self.next_id;
        self.next_id += 1;

        let resolver = self.resolver.clone();
        let fetcher = self.fetcher.clone();
        let task_url = url.clone();
        let guard = CompletionGuard {
            id,
            tx: Some(self.completion_tx.clone()),
        };

        let task = self.runtime.spawn(async move {
            let result = resolve_url(fetcher.as_ref(), &resolver, &task_url).await;
            guard.finish(result);
        });

        self.pending.insert(
            id,
            Pending {
                callback: Box::new(callback),
                abort: task.abort_handle(),
            },
        );

        FetchHandle {
            loader: self.loader_id,
            id,
            url,
        }
    }

    /// Отменяет загрузку. Колбэк после этого не вызывается.
    /// Возвращает `false`, если колбэк уже был вызван или отменён ранее,
    /// а также для дескриптора чужого загрузчика.
    pub fn cancel(&mut self, handle: &FetchHandle) -> bool {
        if handle.loader != self.loader_id {
            return false;
        }
        let Some(pending) = self.pending.remove(&handle.id) else {
            return false;
        };
        pending.abort.abort();
        tracing::warn!(url = %handle.url, "color fetch cancelled");
        true
    }

    /// Число загрузок, чьи колбэки ещё не вызваны.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Вызывает колбэки всех уже завершённых загрузок, не блокируясь.
    pub fn dispatch_ready(&mut self) -> usize {
        let mut dispatched = 0;
        while let Ok(completion) = self.completion_rx.try_recv() {
            if self.complete(completion) {
                dispatched += 1;
            }
        }
        dispatched
    }

    /// Ждёт следующую завершённую загрузку и вызывает её колбэк.
    /// Возвращает `false`, если ждать нечего.
    pub async fn dispatch_next(&mut self) -> bool {
        while !self.pending.is_empty() {
            let Some(completion) = self.completion_rx.recv().await else {
                return false;
            };
            if self.complete(completion) {
                return true;
            }
        }
        false
    }

    /// Ждёт и вызывает колбэки всех незавершённых загрузок.
    pub async fn dispatch_all(&mut self) -> usize {
        let mut dispatched = 0;
        while self.dispatch_next().await {
            dispatched += 1;
        }
        dispatched
    }

    /// Разрешает URL без колбэка.
    pub async fn resolve_url(&self, url: &str) -> Result<Color, ColorError> {
        resolve_url(self.fetcher.as_ref(), &self.resolver, url).await
    }

    /// Загружает несколько URL параллельно, сохраняя порядок результатов.
    pub async fn resolve_urls(&self, urls: &[String]) -> Vec<Result<Color, ColorError>> {
        let futures = urls
            .iter()
            .map(|url| resolve_url(self.fetcher.as_ref(), &self.resolver, url));
        futures_util::future::join_all(futures).await
    }

    fn complete(&mut self, completion: Completion) -> bool {
        match self.pending.remove(&completion.id) {
            Some(pending) => {
                (pending.callback)(completion.result);
                true
            }
            None => false,
        }
    }
}

impl<F: Fetch> Drop for ColorLoader<F> {
    fn drop(&mut self) {
        for (_, pending) in self.pending.drain() {
            pending.abort.abort();
        }
    }
}

impl<F: Fetch> fmt::Debug for ColorLoader<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorLoader")
            .field("resolver", &self.resolver)
            .field("pending", &self.pending.len())
            .finish_non_exhaustive()
    }
}
