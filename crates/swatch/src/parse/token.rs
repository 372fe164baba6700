use super::Match;
use crate::error::ColorError;
use crate::registry::TokenRegistry;

/// Design-токен: `prefix` и непустое имя из ASCII букв, цифр, `.`, `-`, `_`.
/// Реестр получает только имя: для `$brand.primary` — `brand.primary`.
/// Ошибка `UnresolvedToken` содержит токен целиком, с префиксом.
pub fn match_token(token: &str, prefix: char, registry: &dyn TokenRegistry) -> Match {
    let Some(name) = token_name(token, prefix) else {
        return Match::NotMatched;
    };

    match registry.lookup(name) {
        Some(color) => Match::Matched(Ok(color)),
        None => {
            tracing::debug!(token, "design token is not defined in the registry");
            Match::Matched(Err(ColorError::UnresolvedToken(token.to_string())))
        }
    }
}

/// Имя токена без префикса, если строка имеет форму design-токена.
pub fn token_name(token: &str, prefix: char) -> Option<&str> {
    let name = token.strip_prefix(prefix)?;
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'));
    valid.then_some(name)
}
