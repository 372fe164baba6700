use super::{Match, is_identifier};
use crate::error::ColorError;
use crate::named::NamedColors;

/// Последний матчер: забирает любой токен. Промах по имени-идентификатору
/// даёт `UnknownColorName`, строка другой формы — `InvalidColorString`.
pub fn match_name(token: &str, names: &dyn NamedColors) -> Match {
    if let Some(color) = names.named_color(token) {
        return Match::Matched(Ok(color));
    }

    let err = if is_identifier(token) {
        tracing::debug!(token, "unknown color name");
        ColorError::UnknownColorName(token.to_string())
    } else {
        ColorError::InvalidColorString(token.to_string())
    };
    Match::Matched(Err(err))
}
