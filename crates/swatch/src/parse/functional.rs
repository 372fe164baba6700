//! `rgb()` / `rgba()` с разбором компонентов через `cssparser`.
//!
//! Компоненты RGB: число обрезается до `[0, 255]`, процент переводится в
//! `[0, 255]`. Альфа: число `<= 1` — доля, число больше 1 — байт,
//! процент — доля. Значения вне диапазона обрезаются, а не отклоняются.

use cssparser::{Parser, ParserInput, Token};

use super::Match;
use crate::color::{Color, alpha_to_byte, clamp_to_byte, unit_to_byte};
use crate::error::ColorError;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Component {
    Number(f32),
    Percentage(f32),
}

impl Component {
    fn channel(self) -> u8 {
        match self {
            Component::Number(value) => clamp_to_byte(value),
            Component::Percentage(unit) => unit_to_byte(unit),
        }
    }

    fn alpha(self) -> u8 {
        match self {
            Component::Number(value) => alpha_to_byte(value),
            Component::Percentage(unit) => unit_to_byte(unit),
        }
    }
}

/// Форма `rgb(...)` / `rgba(...)` без учёта регистра имени функции.
pub fn match_functional(token: &str) -> Match {
    match functional_body(token) {
        Some(body) => Match::Matched(
            parse_components(body).ok_or_else(|| ColorError::InvalidColorString(token.to_string())),
        ),
        None => Match::NotMatched,
    }
}

fn functional_body(token: &str) -> Option<&str> {
    let open = token.find('(')?;
    let name = &token[..open];
    if !(name.eq_ignore_ascii_case("rgb") || name.eq_ignore_ascii_case("rgba")) {
        return None;
    }
    token[open + 1..].strip_suffix(')')
}

fn parse_components(content: &str) -> Option<Color> {
    let mut input = ParserInput::new(content);
    let mut parser = Parser::new(&mut input);

    let components = parser
        .parse_comma_separated(|p| parse_component(p))
        .ok()?;

    match components.as_slice() {
        [r, g, b] => Some(Color::rgb(r.channel(), g.channel(), b.channel())),
        [r, g, b, a] => Some(Color::new(
            r.channel(),
            g.channel(),
            b.channel(),
            a.alpha(),
        )),
        _ => None,
    }
}

fn parse_component<'i>(
    parser: &mut Parser<'i, '_>,
) -> Result<Component, cssparser::ParseError<'i, ()>> {
    match parser.next()?.clone() {
        Token::Number { value, .. } => Ok(Component::Number(value)),
        Token::Percentage { unit_value, .. } => Ok(Component::Percentage(unit_value)),
        _ => Err(parser.new_custom_error(())),
    }
}
