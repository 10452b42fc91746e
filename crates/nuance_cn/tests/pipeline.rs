use std::sync::Arc;

use nuance_cn::prelude::*;
use nuance_theme::{presets, resolve_color, resolve_relative_length, Color, TokenStore};
use pretty_assertions::assert_eq;

fn theme() -> Arc<TokenStore> {
    Arc::new(presets::light_tokens())
}

fn color(tokens: &TokenStore, token: &str) -> Color {
    resolve_color(token, tokens).unwrap()
}

#[test]
fn every_variant_state_resolves_to_its_own_triple() {
    let tokens = theme();
    for variant in ButtonVariant::ALL {
        let table = variant.style();
        for (state, expected, disabled) in [
            (InteractionState::PRESSED, &table.pressed, false),
            (InteractionState::IDLE, &table.not_pressed, false),
            (InteractionState::IDLE, &table.disabled, true),
        ] {
            let props = ButtonProps::new(variant).disabled(disabled);
            let styles = button_style(&props, state, &tokens).unwrap();

            assert_eq!(
                styles.container.background_color,
                Some(color(&tokens, expected.background_color)),
                "{variant} {state:?}"
            );
            assert_eq!(
                styles.container.border_color,
                Some(color(&tokens, expected.border_color)),
                "{variant} {state:?}"
            );
            assert_eq!(styles.container.border_width, Some(expected.border_width));
            assert_eq!(styles.label.color, Some(color(&tokens, expected.color)));
        }
    }
}

#[test]
fn identical_inputs_reuse_the_previous_result() {
    let tokens = theme();
    let props = ButtonProps::outline().size(ButtonSize::Sm);
    let mut styler = ButtonStyler::new();

    let first = styler.compute(&props, InteractionState::IDLE, &tokens).unwrap();
    let second = styler.compute(&props, InteractionState::IDLE, &tokens).unwrap();
    assert!(Arc::ptr_eq(&first.container, &second.container));
    assert!(Arc::ptr_eq(&first.label, &second.label));

    let fresh = button_style(&props, InteractionState::IDLE, &tokens).unwrap();
    assert_eq!(*first.container, *fresh.container);
    assert_eq!(*first.label, *fresh.label);
}

#[test]
fn changing_state_produces_a_new_result() {
    let tokens = theme();
    let props = ButtonProps::primary();
    let mut styler = ButtonStyler::new();

    let idle = styler.compute(&props, InteractionState::IDLE, &tokens).unwrap();
    let pressed = styler.compute(&props, InteractionState::PRESSED, &tokens).unwrap();
    assert!(!Arc::ptr_eq(&idle.container, &pressed.container));
    assert_ne!(idle.container.background_color, pressed.container.background_color);
}

#[test]
fn explicit_background_wins_in_every_state() {
    let tokens = theme();
    let green = color(&tokens, "green.500");
    let props = ButtonProps::primary().style(Style::new().background_color(green));

    for state in [InteractionState::IDLE, InteractionState::PRESSED] {
        let styles = button_style(&props, state, &tokens).unwrap();
        assert_eq!(styles.container.background_color, Some(green));
    }
    let disabled = button_style(&props.clone().disabled(true), InteractionState::IDLE, &tokens)
        .unwrap();
    assert_eq!(disabled.container.background_color, Some(green));
}

#[test]
fn disabled_overrides_pressed() {
    let tokens = theme();
    for variant in ButtonVariant::ALL {
        let disabled = &variant.style().disabled;
        let styles = button_style(
            &ButtonProps::new(variant).disabled(true),
            InteractionState::PRESSED,
            &tokens,
        )
        .unwrap();
        assert_eq!(
            styles.container.background_color,
            Some(color(&tokens, disabled.background_color))
        );
        assert_eq!(
            styles.container.border_color,
            Some(color(&tokens, disabled.border_color))
        );
        assert_eq!(styles.label.color, Some(color(&tokens, disabled.color)));
    }
}

#[test]
fn explicit_layer_does_not_erase_unset_properties() {
    let tokens = theme();
    let props = ButtonProps::secondary().style(Style::new().border_radius(12.0));
    let styles = button_style(&props, InteractionState::IDLE, &tokens).unwrap();

    assert_eq!(styles.container.border_radius, Some(12.0));
    assert_eq!(styles.container.padding_top, Some(8.0));
    assert_eq!(styles.container.min_width, Some(128.0));
    assert_eq!(
        styles.container.background_color,
        Some(color(&tokens, "secondary.500"))
    );
}

#[test]
fn capitalize_beats_explicit_transform() {
    let props = TextProps::body()
        .capitalize()
        .text_transform(TextTransform::Uppercase);
    let style = text_style(&props, &theme()).unwrap();
    assert_eq!(style.text_transform, Some(TextTransform::Capitalize));
}

#[test]
fn relative_line_height() {
    assert_eq!(resolve_relative_length(1.5, Some(16.0)), Some(24.0));
    assert_eq!(resolve_relative_length(1.5, None), None);

    let style = text_style(&TextProps::body().line_height("base"), &theme()).unwrap();
    assert_eq!(style.line_height, Some(24.0));
}

#[test]
fn unknown_variant_is_a_configuration_error() {
    let err = "Danger".parse::<ButtonVariant>().unwrap_err();
    assert!(matches!(
        &err,
        StyleError::UnknownVariant { kind: "button", name } if name == "Danger"
    ));
    assert_eq!(err.to_string(), "unknown button variant `Danger`");

    assert!("Headline".parse::<TextVariant>().is_err());
    assert!("xl".parse::<ButtonSize>().is_err());
}

#[test]
fn styled_text_keeps_text_semantics() {
    let tokens = theme();
    let props = StyledProps::new(TextProps::h2().bold().color("primary"))
        .layout(LayoutProps::new().mx(6.0).bg("gray.50"));
    let style = text()
        .resolve(&props, InteractionState::IDLE, &tokens)
        .unwrap();

    assert_eq!(style.font_size, Some(36.0));
    assert_eq!(style.font_weight.as_deref(), Some("bold"));
    assert_eq!(style.color, Some(color(&tokens, "blue.500")));
    assert_eq!(style.margin_left, Some(6.0));
    assert_eq!(style.background_color, Some(color(&tokens, "gray.50")));
}

#[test]
fn resolved_style_serializes_without_token_names() {
    let styles = button_style(&ButtonProps::link(), InteractionState::PRESSED, &theme()).unwrap();
    let json = serde_json::to_value(&*styles.label).unwrap();

    assert_eq!(json["color"], "#1d4ed8");
    assert_eq!(json["fontFamily"], "Inter_700Bold");
    assert_eq!(json["textAlign"], "center");
}
