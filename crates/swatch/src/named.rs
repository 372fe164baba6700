//! Именованные цвета платформы.

use crate::color::Color;

/// Внешняя система именованных цветов.
pub trait NamedColors: Send + Sync {
    fn named_color(&self, name: &str) -> Option<Color>;
}

/// Палитра системных цветов UI-тулкита плюс базовые веб-цвета.
///
/// Имена сравниваются без учёта регистра, суффикс `Color` необязателен:
/// `red`, `Red` и `redColor` дают один и тот же цвет.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemColors;

impl NamedColors for SystemColors {
    fn named_color(&self, name: &str) -> Option<Color> {
        let lower = name.trim().to_ascii_lowercase();
        let base = match lower.strip_suffix("color") {
            Some(base) if !base.is_empty() => base,
            _ => lower.as_str(),
        };
        system_color(base)
    }
}

fn system_color(name: &str) -> Option<Color> {
    match name {
        "white" => Some(Color::WHITE),
        "black" => Some(Color::BLACK),
        "red" => Some(Color::RED),
        "green" => Some(Color::GREEN),
        "blue" => Some(Color::BLUE),
        "yellow" => Some(Color::YELLOW),
        "gray" | "grey" => Some(Color::GRAY),
        "clear" | "transparent" => Some(Color::TRANSPARENT),
        "darkgray" | "darkgrey" => Some(Color::white(1.0 / 3.0)),
        "lightgray" | "lightgrey" => Some(Color::white(2.0 / 3.0)),
        "cyan" => Some(Color::rgb(0, 255, 255)),
        "magenta" => Some(Color::rgb(255, 0, 255)),
        "orange" => Some(Color::rgb(255, 128, 0)),
        "purple" => Some(Color::rgb(128, 0, 128)),
        "brown" => Some(Color::rgb(153, 102, 51)),
        // Дополнительные веб-цвета
        "silver" => Some(Color::rgb(192, 192, 192)),
        "maroon" => Some(Color::rgb(128, 0, 0)),
        "fuchsia" => Some(Color::rgb(255, 0, 255)),
        "lime" => Some(Color::rgb(0, 255, 0)),
        "olive" => Some(Color::rgb(128, 128, 0)),
        "navy" => Some(Color::rgb(0, 0, 128)),
        "teal" => Some(Color::rgb(0, 128, 128)),
        "aqua" => Some(Color::rgb(0, 255, 255)),
        _ => None,
    }
}
