//! Реестр design-токенов.

use std::collections::HashMap;

use crate::color::Color;
use crate::error::RegistryLoadError;
use crate::resolver::ColorResolver;

/// Внешний реестр design-токенов. Должен быть безопасен для
/// одновременного чтения из нескольких разрешений.
pub trait TokenRegistry: Send + Sync {
    /// Цвет токена по имени. Префикс (`$`) в `name` не передаётся:
    /// токен `$brand.primary` ищется как `brand.primary`.
    fn lookup(&self, name: &str) -> Option<Color>;
}

/// Реестр, в котором нет ни одного токена.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyRegistry;

impl TokenRegistry for EmptyRegistry {
    fn lookup(&self, _name: &str) -> Option<Color> {
        None
    }
}

impl TokenRegistry for HashMap<String, Color> {
    fn lookup(&self, name: &str) -> Option<Color> {
        self.get(name).copied()
    }
}

/// Неизменяемый после сборки реестр в памяти.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticTokenRegistry {
    tokens: HashMap<String, Color>,
}

impl StaticTokenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, color: Color) -> Option<Color> {
        self.tokens.insert(name.into(), color)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Загружает плоский JSON-объект `{ "brand.primary": "#ff5500", ... }`.
    ///
    /// Значения разбираются как hex, `rgb()`/`rgba()` или имя цвета. Ссылки
    /// на другие токены не поддерживаются.
    pub fn from_json(json: &str) -> Result<Self, RegistryLoadError> {
        let raw: HashMap<String, String> =
            serde_json::from_str(json).map_err(|e| RegistryLoadError::Json(e.to_string()))?;

        let resolver = ColorResolver::new();
        let mut registry = Self::new();
        for (name, value) in raw {
            let color = resolver
                .resolve(&value)
                .map_err(|source| RegistryLoadError::InvalidEntry {
                    name: name.clone(),
                    source,
                })?;
            registry.insert(name, color);
        }

        tracing::debug!(tokens = registry.len(), "token registry loaded from JSON");
        Ok(registry)
    }
}

impl TokenRegistry for StaticTokenRegistry {
    fn lookup(&self, name: &str) -> Option<Color> {
        self.tokens.get(name).copied()
    }
}

impl<S: Into<String>> FromIterator<(S, Color)> for StaticTokenRegistry {
    fn from_iter<I: IntoIterator<Item = (S, Color)>>(iter: I) -> Self {
        Self {
            tokens: iter
                .into_iter()
                .map(|(name, color)| (name.into(), color))
                .collect(),
        }
    }
}
