//! Классификация строковых токенов цвета.
//!
//! Токен проверяется упорядоченным списком матчеров, первый совпавший
//! определяет результат:
//! - [`hex`] — `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` (с `#` или без);
//! - [`functional`] — `rgb(r, g, b)` и `rgba(r, g, b, a)` через `cssparser`;
//! - [`token`] — design-токены (`$brand.primary`), разрешаемые реестром;
//! - [`name`] — именованные цвета платформы.
//!
//! Каждый матчер возвращает [`Match`], поэтому порядок задаётся данными
//! ([`PRECEDENCE`]), а не вложенными ветвлениями.

pub mod functional;
pub mod hex;
pub mod name;
pub mod token;

use crate::color::Color;
use crate::config::ResolverConfig;
use crate::error::ColorError;
use crate::named::NamedColors;
use crate::registry::TokenRegistry;

/// Результат одного матчера.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Match {
    /// Токен имеет форму, за которую отвечает матчер; внутри — итог разбора.
    Matched(Result<Color, ColorError>),
    /// Форма не подходит, решение за следующим матчером.
    NotMatched,
}

impl Match {
    pub fn is_matched(&self) -> bool {
        matches!(self, Match::Matched(_))
    }
}

/// Вид матчера.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Matcher {
    Hex,
    Functional,
    DesignToken,
    Named,
}

/// Порядок проверки по умолчанию.
pub const PRECEDENCE: [Matcher; 4] = [
    Matcher::Hex,
    Matcher::Functional,
    Matcher::DesignToken,
    Matcher::Named,
];

/// Внешние зависимости, нужные матчерам.
#[derive(Clone, Copy)]
pub struct MatchContext<'a> {
    pub config: &'a ResolverConfig,
    pub registry: &'a dyn TokenRegistry,
    pub names: &'a dyn NamedColors,
}

impl Matcher {
    pub fn try_match(self, token: &str, ctx: &MatchContext<'_>) -> Match {
        match self {
            Matcher::Hex => hex::match_hex(token, ctx.config.allow_bare_hex),
            Matcher::Functional => functional::match_functional(token),
            Matcher::DesignToken => {
                token::match_token(token, ctx.config.token_prefix, ctx.registry)
            }
            Matcher::Named => name::match_name(token, ctx.names),
        }
    }
}

/// Прогоняет токен через матчеры по порядку; `None`, если ни один не подошёл.
pub fn first_match(
    matchers: &[Matcher],
    token: &str,
    ctx: &MatchContext<'_>,
) -> Option<Result<Color, ColorError>> {
    matchers.iter().find_map(|matcher| {
        match matcher.try_match(token, ctx) {
            Match::Matched(result) => {
                tracing::trace!(?matcher, token, "color token matched");
                Some(result)
            }
            Match::NotMatched => None,
        }
    })
}

/// Идентификатор в смысле имён цветов: ASCII буквы, цифры, `-` и `_`.
pub(crate) fn is_identifier(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
