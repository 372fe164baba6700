//! Разрешение цветов, пришедших как данные: hex, `rgb()`/`rgba()`,
//! design-токены, имена цветов и URL ресурсов, описывающих цвет.
//!
//! - [`ColorResolver`] — синхронный разбор строкового токена;
//! - [`ColorLoader`] — асинхронная загрузка по URL с колбэком на потоке владельца;
//! - [`TokenRegistry`], [`NamedColors`], [`Fetch`] — внешние зависимости,
//!   передаются явно.

pub mod color;
pub mod config;
pub mod error;
pub mod loader;
pub mod named;
pub mod network;
pub mod parse;
pub mod payload;
pub mod registry;
pub mod resolver;

pub use color::{Color, ColorSource};
pub use config::{FetchConfig, ResolverConfig};
pub use error::{ColorError, FetchError, RegistryLoadError};
pub use loader::{ColorLoader, FetchHandle, resolve_url};
pub use named::{NamedColors, SystemColors};
pub use network::{CachingFetcher, Fetch, NetworkFetcher};
pub use registry::{EmptyRegistry, StaticTokenRegistry, TokenRegistry};
pub use resolver::ColorResolver;
