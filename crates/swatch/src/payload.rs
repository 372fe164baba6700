//! Интерпретация загруженного по URL тела как описания цвета.
//!
//! Поддерживаемые формы:
//! - произвольный текст — разбирается как строковый токен (`#ff5500`, `red`);
//! - JSON-строка — тоже токен;
//! - JSON-объект `{ "r": .., "g": .., "b": .., "a": .. }` (`a` необязательна);
//! - JSON-массив `[r, g, b]` или `[r, g, b, a]`;
//! - JSON-объект с ключом `color` или `value`, содержащим любую из форм выше.

use serde::Deserialize;
use serde_json::Value;

use crate::color::{Color, alpha_to_byte, clamp_to_byte};
use crate::error::{ColorError, FetchError};
use crate::resolver::ColorResolver;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Payload {
    Token(String),
    Channels(Channels),
    Array(Vec<f32>),
    Wrapped(Wrapped),
}

#[derive(Debug, Deserialize)]
struct Channels {
    r: f32,
    g: f32,
    b: f32,
    #[serde(default)]
    a: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct Wrapped {
    #[serde(alias = "value")]
    color: Box<Payload>,
}

/// Превращает тело ответа `body`, полученное по `url`, в цвет.
pub fn interpret(url: &str, body: &str, resolver: &ColorResolver) -> Result<Color, ColorError> {
    let body = body.trim();
    if body.is_empty() {
        return Err(FetchError::EmptyPayload(url.to_string()).into());
    }

    // Числа, `true`/`false` и `null` тоже валидный JSON, но `112233` — это hex.
    let value = match serde_json::from_str::<Value>(body) {
        Ok(value @ (Value::Object(_) | Value::Array(_) | Value::String(_))) => value,
        _ => {
            tracing::trace!(url, "payload is not a JSON document, resolving as a color token");
            return resolver.resolve(body);
        }
    };

    let payload: Payload = serde_json::from_value(value)
        .map_err(|_| ColorError::InvalidColorString(body.to_string()))?;
    from_payload(payload, body, resolver)
}

fn from_payload(payload: Payload, body: &str, resolver: &ColorResolver) -> Result<Color, ColorError> {
    match payload {
        Payload::Token(token) => resolver.resolve(&token),
        Payload::Channels(Channels { r, g, b, a }) => Ok(Color::new(
            clamp_to_byte(r),
            clamp_to_byte(g),
            clamp_to_byte(b),
            a.map_or(255, alpha_to_byte),
        )),
        Payload::Array(values) => match values.as_slice() {
            [r, g, b] => Ok(Color::rgb(clamp_to_byte(*r), clamp_to_byte(*g), clamp_to_byte(*b))),
            [r, g, b, a] => Ok(Color::new(
                clamp_to_byte(*r),
                clamp_to_byte(*g),
                clamp_to_byte(*b),
                alpha_to_byte(*a),
            )),
            _ => Err(ColorError::InvalidColorString(body.to_string())),
        },
        Payload::Wrapped(Wrapped { color }) => from_payload(*color, body, resolver),
    }
}
