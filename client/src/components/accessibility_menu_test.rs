use super::*;

#[test]
fn every_font_size_has_a_distinct_label() {
    let labels: Vec<_> = FontSize::ALL.into_iter().map(font_size_label).collect();
    assert_eq!(labels, vec![MessageKey::FontSmall, MessageKey::FontMedium, MessageKey::FontLarge]);
}

#[test]
fn every_color_mode_has_a_distinct_label() {
    let labels: Vec<_> = ColorMode::ALL.into_iter().map(color_mode_label).collect();
    assert_eq!(
        labels,
        vec![MessageKey::ColorNormal, MessageKey::ColorHighContrast, MessageKey::ColorBlindFriendly]
    );
}

#[test]
fn labels_translate_in_both_locales() {
    assert_eq!(translate(Locale::En, color_mode_label(ColorMode::HighContrast)), "High contrast");
    assert_eq!(translate(Locale::Zh, font_size_label(FontSize::Large)), "大");
}
