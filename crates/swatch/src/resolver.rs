//! Синхронное разрешение строковых токенов в цвет.

use std::fmt;
use std::sync::Arc;

use rayon::prelude::*;

use crate::color::Color;
use crate::config::ResolverConfig;
use crate::error::ColorError;
use crate::named::{NamedColors, SystemColors};
use crate::parse::{self, MatchContext, PRECEDENCE};
use crate::registry::{EmptyRegistry, TokenRegistry};

/// Преобразует строковые токены в цвета.
///
/// Не хранит изменяемого состояния: реестр токенов и система имён
/// передаются снаружи и только читаются. Клонирование дешёвое.
#[derive(Clone)]
pub struct ColorResolver {
    registry: Arc<dyn TokenRegistry>,
    names: Arc<dyn NamedColors>,
    config: ResolverConfig,
}

impl ColorResolver {
    /// Резолвер без design-токенов, с системной палитрой имён.
    pub fn new() -> Self {
        Self {
            registry: Arc::new(EmptyRegistry),
            names: Arc::new(SystemColors),
            config: ResolverConfig::default(),
        }
    }

    pub fn with_registry(mut self, registry: Arc<dyn TokenRegistry>) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_named_colors(mut self, names: Arc<dyn NamedColors>) -> Self {
        self.names = names;
        self
    }

    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Разрешает токен: hex, затем `rgb()`/`rgba()`, затем design-токен,
    /// затем имя цвета. Первый подходящий по форме матчер определяет итог.
    pub fn resolve(&self, token: &str) -> Result<Color, ColorError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ColorError::InvalidColorString(String::new()));
        }

        let ctx = MatchContext {
            config: &self.config,
            registry: self.registry.as_ref(),
            names: self.names.as_ref(),
        };

        parse::first_match(&PRECEDENCE, token, &ctx)
            .unwrap_or_else(|| Err(ColorError::InvalidColorString(token.to_string())))
    }

    /// Только hex-форма; всё остальное — `InvalidHexString`.
    pub fn resolve_hex(&self, hex: &str) -> Result<Color, ColorError> {
        parse::hex::parse_hex(hex)
    }

    /// Как [`resolve`](Self::resolve), но при ошибке возвращает `fallback`.
    pub fn resolve_or(&self, token: &str, fallback: Color) -> Color {
        self.resolve(token).unwrap_or_else(|err| {
            tracing::debug!(token, %err, "color token falls back to default");
            fallback
        })
    }

    /// Параллельно разрешает набор токенов, сохраняя порядок.
    pub fn resolve_all(&self, tokens: &[&str]) -> Vec<Result<Color, ColorError>> {
        tokens.par_iter().map(|token| self.resolve(token)).collect()
    }
}

impl Default for ColorResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ColorResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorResolver")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
