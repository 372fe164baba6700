/// Unit tests for string color resolution
/// Tests cover: hex, rgb()/rgba(), design tokens, named colors, precedence, errors
use std::sync::{Arc, Mutex};

use swatch::{
    Color, ColorError, ColorResolver, NamedColors, RegistryLoadError, ResolverConfig,
    StaticTokenRegistry, TokenRegistry,
};

fn resolver_with_tokens() -> ColorResolver {
    let registry: StaticTokenRegistry = [
        ("brand.primary", Color::rgb(0xff, 0x55, 0x00)),
        ("text.muted", Color::new(0, 0, 0, 0x99)),
    ]
    .into_iter()
    .collect();
    ColorResolver::new().with_registry(Arc::new(registry))
}

#[test]
fn test_six_digit_hex_is_opaque_with_exact_bytes() {
    let resolver = ColorResolver::new();
    for (hex, expected) in [
        ("#000000", Color::rgb(0, 0, 0)),
        ("#3498DB", Color::rgb(0x34, 0x98, 0xdb)),
        ("#ffffff", Color::rgb(255, 255, 255)),
        ("#0a141e", Color::rgb(0x0a, 0x14, 0x1e)),
    ] {
        let color = resolver.resolve_hex(hex).unwrap();
        assert_eq!(color, expected, "{hex}");
        assert_eq!(color.a, 255, "{hex} must be opaque");
    }
}

#[test]
fn test_three_digit_hex_expands_nibbles() {
    let resolver = ColorResolver::new();
    assert_eq!(resolver.resolve_hex("#F00").unwrap(), Color::rgb(0xff, 0, 0));
    assert_eq!(resolver.resolve_hex("#abc").unwrap(), Color::rgb(0xaa, 0xbb, 0xcc));
    assert_eq!(resolver.resolve("#F00").unwrap(), Color::RED);
}

#[test]
fn test_eight_digit_hex_alpha() {
    let resolver = ColorResolver::new();
    assert_eq!(
        resolver.resolve_hex("#80FF0080").unwrap(),
        Color::new(0x80, 0xff, 0x00, 0x80)
    );
}

#[test]
fn test_resolve_hex_rejects_non_hex() {
    let resolver = ColorResolver::new();
    assert_eq!(
        resolver.resolve_hex("12G456"),
        Err(ColorError::InvalidHexString("12G456".to_string()))
    );
    assert!(matches!(
        resolver.resolve_hex("rgb(1, 2, 3)"),
        Err(ColorError::InvalidHexString(_))
    ));
    assert!(matches!(
        resolver.resolve("#12G456"),
        Err(ColorError::InvalidHexString(_))
    ));
}

#[test]
fn test_rgba_half_alpha() {
    let resolver = ColorResolver::new();
    let color = resolver.resolve("rgba(255,0,0,0.5)").unwrap();
    assert_eq!((color.r, color.g, color.b), (255, 0, 0));
    assert!((color.alpha_f32() - 0.5).abs() < 0.01);
}

#[test]
fn test_rgb_defaults_to_opaque_and_clamps() {
    let resolver = ColorResolver::new();
    assert_eq!(resolver.resolve("rgb(46, 204, 113)").unwrap(), Color::rgb(46, 204, 113));
    assert_eq!(resolver.resolve("rgb(512, 0, -3)").unwrap(), Color::rgb(255, 0, 0));
}

#[test]
fn test_not_a_color_is_invalid_color_string() {
    let resolver = ColorResolver::new();
    assert_eq!(
        resolver.resolve("not-a-color-!!"),
        Err(ColorError::InvalidColorString("not-a-color-!!".to_string()))
    );
    assert!(matches!(
        resolver.resolve("   "),
        Err(ColorError::InvalidColorString(_))
    ));
}

#[test]
fn test_unknown_name_is_unknown_color_name() {
    let resolver = ColorResolver::new();
    assert_eq!(
        resolver.resolve("blurple"),
        Err(ColorError::UnknownColorName("blurple".to_string()))
    );
    assert_eq!(
        resolver.resolve("12G456"),
        Err(ColorError::UnknownColorName("12G456".to_string()))
    );
}

#[test]
fn test_named_colors() {
    let resolver = ColorResolver::new();
    assert_eq!(resolver.resolve("red").unwrap(), Color::RED);
    assert_eq!(resolver.resolve("  Navy ").unwrap(), Color::rgb(0, 0, 128));
    assert_eq!(resolver.resolve("clearColor").unwrap(), Color::TRANSPARENT);
}

#[test]
fn test_design_tokens_go_through_registry() {
    let resolver = resolver_with_tokens();
    assert_eq!(
        resolver.resolve("$brand.primary").unwrap(),
        Color::rgb(0xff, 0x55, 0x00)
    );
    assert_eq!(
        resolver.resolve("$brand.accent"),
        Err(ColorError::UnresolvedToken("$brand.accent".to_string()))
    );
}

#[test]
fn test_registry_receives_name_without_prefix() {
    #[derive(Default)]
    struct RecordingRegistry {
        seen: Mutex<Vec<String>>,
    }
    impl TokenRegistry for RecordingRegistry {
        fn lookup(&self, name: &str) -> Option<Color> {
            self.seen.lock().unwrap().push(name.to_string());
            (name == "brand.primary").then_some(Color::GREEN)
        }
    }

    let registry = Arc::new(RecordingRegistry::default());
    let resolver = ColorResolver::new().with_registry(registry.clone());
    assert_eq!(resolver.resolve("$brand.primary").unwrap(), Color::GREEN);
    assert_eq!(
        resolver.resolve("$brand.accent"),
        Err(ColorError::UnresolvedToken("$brand.accent".to_string()))
    );
    assert_eq!(
        *registry.seen.lock().unwrap(),
        vec!["brand.primary".to_string(), "brand.accent".to_string()]
    );
}

#[test]
fn test_token_prefix_is_configurable() {
    let resolver = resolver_with_tokens().with_config(ResolverConfig {
        token_prefix: '@',
        ..ResolverConfig::default()
    });
    assert_eq!(resolver.config().token_prefix, '@');
    assert!(resolver.config().allow_bare_hex);
    assert_eq!(resolver.resolve("@text.muted").unwrap(), Color::new(0, 0, 0, 0x99));
    assert!(matches!(
        resolver.resolve("$text.muted"),
        Err(ColorError::InvalidColorString(_))
    ));
}

#[test]
fn test_bare_hex_can_be_disabled() {
    let strict = ColorResolver::new().with_config(ResolverConfig {
        allow_bare_hex: false,
        ..ResolverConfig::default()
    });
    assert_eq!(ColorResolver::new().resolve("ff0000").unwrap(), Color::RED);
    assert_eq!(
        strict.resolve("ff0000"),
        Err(ColorError::UnknownColorName("ff0000".to_string()))
    );
    assert_eq!(strict.resolve("#ff0000").unwrap(), Color::RED);
}

#[test]
fn test_hex_takes_precedence_over_names() {
    struct EverythingIsBlue;
    impl NamedColors for EverythingIsBlue {
        fn named_color(&self, _name: &str) -> Option<Color> {
            Some(Color::BLUE)
        }
    }

    let resolver = ColorResolver::new().with_named_colors(Arc::new(EverythingIsBlue));
    assert_eq!(resolver.resolve("bad").unwrap(), Color::rgb(0xbb, 0xaa, 0xdd));
    assert_eq!(resolver.resolve("rgb(1, 2, 3)").unwrap(), Color::rgb(1, 2, 3));
    assert_eq!(resolver.resolve("anything").unwrap(), Color::BLUE);
}

#[test]
fn test_resolution_is_idempotent() {
    let resolver = resolver_with_tokens();
    for token in ["#80FF0080", "rgba(10, 20, 30, 0.25)", "$brand.primary", "orange"] {
        let first = resolver.resolve(token).unwrap();
        let second = resolver.resolve(token).unwrap();
        assert_eq!(<[u8; 4]>::from(first), <[u8; 4]>::from(second), "{token}");
    }
}

#[test]
fn test_resolve_all_preserves_order() {
    let resolver = resolver_with_tokens();
    let results = resolver.resolve_all(&["#fff", "nope-!!", "$brand.primary", "black"]);
    assert_eq!(results.len(), 4);
    assert_eq!(results[0], Ok(Color::WHITE));
    assert!(results[1].is_err());
    assert_eq!(results[2], Ok(Color::rgb(0xff, 0x55, 0x00)));
    assert_eq!(results[3], Ok(Color::BLACK));
}

#[test]
fn test_resolve_or_falls_back() {
    let resolver = ColorResolver::new();
    assert_eq!(resolver.resolve_or("#00f", Color::BLACK), Color::BLUE);
    assert_eq!(resolver.resolve_or("$missing", Color::BLACK), Color::BLACK);
    assert_eq!(
        resolver.resolve_or("$missing", Color::BLACK.with_alpha(0)),
        Color::new(0, 0, 0, 0)
    );
}

#[test]
fn test_registry_from_json() {
    let registry = StaticTokenRegistry::from_json(
        r##"{ "brand.primary": "#ff5500", "overlay": "rgba(0, 0, 0, 0.5)", "ink": "black" }"##,
    )
    .unwrap();
    assert_eq!(registry.len(), 3);

    let resolver = ColorResolver::new().with_registry(Arc::new(registry));
    assert_eq!(resolver.resolve("$overlay").unwrap(), Color::new(0, 0, 0, 128));
    assert_eq!(resolver.resolve("$ink").unwrap(), Color::BLACK);
}

#[test]
fn test_registry_from_json_errors() {
    assert!(matches!(
        StaticTokenRegistry::from_json("[1, 2, 3]"),
        Err(RegistryLoadError::Json(_))
    ));
    assert!(matches!(
        StaticTokenRegistry::from_json(r#"{ "loop": "$loop" }"#),
        Err(RegistryLoadError::InvalidEntry { name, .. }) if name == "loop"
    ));
}
