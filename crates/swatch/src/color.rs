use std::fmt;

use crate::error::ColorError;

/// Цвет в формате RGBA, 8 бит на канал. `a == 255` — полностью непрозрачный.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Серый оттенок по доле белого, как `colorWithWhite:` в UI-тулкитах.
    pub fn white(level: f32) -> Self {
        let v = unit_to_byte(level);
        Self::rgb(v, v, v)
    }

    /// Собирает цвет из каналов в диапазоне `[0, 1]`. Значения вне диапазона обрезаются.
    pub fn from_rgba_f32(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::new(
            unit_to_byte(r),
            unit_to_byte(g),
            unit_to_byte(b),
            unit_to_byte(a),
        )
    }

    /// Парсит hex-строку (`#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`, `#` необязателен).
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        crate::parse::hex::parse_hex(hex)
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub const fn is_opaque(&self) -> bool {
        self.a == 255
    }

    pub fn alpha_f32(&self) -> f32 {
        f32::from(self.a) / 255.0
    }

    pub fn to_rgba_f32(&self) -> [f32; 4] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
            self.alpha_f32(),
        ]
    }

    /// `#rrggbb` для непрозрачных цветов, иначе `#rrggbbaa`.
    pub fn to_hex(&self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };
    pub const BLACK: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };
    pub const RED: Color = Color {
        r: 255,
        g: 0,
        b: 0,
        a: 255,
    };
    pub const GREEN: Color = Color {
        r: 0,
        g: 255,
        b: 0,
        a: 255,
    };
    pub const BLUE: Color = Color {
        r: 0,
        g: 0,
        b: 255,
        a: 255,
    };
    pub const YELLOW: Color = Color {
        r: 255,
        g: 255,
        b: 0,
        a: 255,
    };
    pub const GRAY: Color = Color {
        r: 128,
        g: 128,
        b: 128,
        a: 255,
    };
    pub const TRANSPARENT: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Color> for [u8; 4] {
    fn from(color: Color) -> Self {
        [color.r, color.g, color.b, color.a]
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

/// Источник цвета: строковый токен или адрес ресурса, который его описывает.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorSource {
    Token(String),
    Url(String),
}

impl ColorSource {
    /// `http://`, `https://` и `file://` считаются URL, всё остальное — токеном.
    pub fn classify(input: &str) -> Self {
        let trimmed = input.trim();
        let lower = trimmed.to_ascii_lowercase();
        if ["http://", "https://", "file://"]
            .iter()
            .any(|scheme| lower.starts_with(scheme))
        {
            Self::Url(trimmed.to_string())
        } else {
            Self::Token(trimmed.to_string())
        }
    }
}

pub(crate) fn unit_to_byte(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

pub(crate) fn clamp_to_byte(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 255.0).round() as u8
}

/// Альфа `<= 1` трактуется как доля, больше 1 — как байт.
pub(crate) fn alpha_to_byte(value: f32) -> u8 {
    if value <= 1.0 {
        unit_to_byte(value)
    } else {
        clamp_to_byte(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex_omits_opaque_alpha() {
        assert_eq!(Color::rgb(255, 136, 0).to_hex(), "#ff8800");
        assert_eq!(Color::new(0x80, 0xff, 0, 0x80).to_hex(), "#80ff0080");
    }

    #[test]
    fn test_from_rgba_f32_clamps() {
        assert_eq!(
            Color::from_rgba_f32(1.5, -0.2, 0.5, 1.0),
            Color::rgb(255, 0, 128)
        );
    }

    #[test]
    fn test_eight_bit_round_trip_through_floats() {
        for v in 0..=255u8 {
            let [r, g, b, a] = Color::new(v, v, v, v).to_rgba_f32();
            assert_eq!(Color::from_rgba_f32(r, g, b, a), Color::new(v, v, v, v));
        }
    }

    #[test]
    fn test_classify_source() {
        assert_eq!(
            ColorSource::classify(" https://cdn.example.com/c.json "),
            ColorSource::Url("https://cdn.example.com/c.json".to_string())
        );
        assert_eq!(
            ColorSource::classify("#fff"),
            ColorSource::Token("#fff".to_string())
        );
    }
}
