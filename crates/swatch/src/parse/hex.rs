use super::Match;
use crate::color::Color;
use crate::error::ColorError;

/// Парсит hex-цвет. `#` необязателен; допустимы 3, 4, 6 и 8 цифр.
/// Короткие формы дублируют каждую цифру (`F` -> `FF`).
pub fn parse_hex(input: &str) -> Result<Color, ColorError> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let invalid = || ColorError::InvalidHexString(input.to_string());

    if !is_hex_digits(digits) {
        return Err(invalid());
    }

    let pair = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
    let nibble = |i: usize| {
        u8::from_str_radix(&digits[i..i + 1], 16)
            .map(|n| n * 17)
            .map_err(|_| invalid())
    };

    match digits.len() {
        6 => Ok(Color::rgb(pair(0)?, pair(2)?, pair(4)?)),
        3 => Ok(Color::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
        8 => Ok(Color::new(pair(0)?, pair(2)?, pair(4)?, pair(6)?)),
        4 => Ok(Color::new(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
        _ => Err(invalid()),
    }
}

/// Всё, что начинается с `#`, относится к hex и при ошибке даёт
/// `InvalidHexString`. Без `#` форма принимается только если это ровно
/// 3/4/6/8 hex-цифр.
pub fn match_hex(token: &str, allow_bare: bool) -> Match {
    if token.starts_with('#') {
        return Match::Matched(parse_hex(token));
    }
    if allow_bare && is_hex_digits(token) {
        return Match::Matched(parse_hex(token));
    }
    Match::NotMatched
}

fn is_hex_digits(digits: &str) -> bool {
    matches!(digits.len(), 3 | 4 | 6 | 8) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}
