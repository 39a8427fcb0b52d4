//! Font-size and color-mode controls bound to the preference store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every change goes through `PreferenceStore`, which persists it and updates
//! the `<html>` attributes the stylesheet keys off.

#[cfg(test)]
#[path = "accessibility_menu_test.rs"]
mod accessibility_menu_test;

use leptos::prelude::*;

use crate::i18n::{Locale, MessageKey, translate};
use crate::state::preferences::{ColorMode, FontSize};
use crate::util::browser::BrowserPreferenceStore;

/// Label key for a font-size option.
pub fn font_size_label(size: FontSize) -> MessageKey {
    match size {
        FontSize::Small => MessageKey::FontSmall,
        FontSize::Medium => MessageKey::FontMedium,
        FontSize::Large => MessageKey::FontLarge,
    }
}

/// Label key for a color-mode option.
pub fn color_mode_label(mode: ColorMode) -> MessageKey {
    match mode {
        ColorMode::Normal => MessageKey::ColorNormal,
        ColorMode::HighContrast => MessageKey::ColorHighContrast,
        ColorMode::ColorBlindFriendly => MessageKey::ColorBlindFriendly,
    }
}

/// Collapsible accessibility settings panel in the page header.
#[component]
pub fn AccessibilityMenu() -> impl IntoView {
    let prefs = expect_context::<RwSignal<BrowserPreferenceStore>>();
    let locale = expect_context::<RwSignal<Locale>>();
    let t = move |key| translate(locale.get(), key);

    let font_options = FontSize::ALL
        .into_iter()
        .map(|size| {
            view! {
                <label class="a11y-menu__option">
                    <input
                        type="radio"
                        name="font-size"
                        value=size.as_str()
                        prop:checked=move || prefs.with(|p| p.font_size() == size)
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            prefs.update(|p| p.set_font_size(&value));
                        }
                    />
                    {move || t(font_size_label(size))}
                </label>
            }
        })
        .collect_view();

    let color_options = ColorMode::ALL
        .into_iter()
        .map(|mode| {
            view! {
                <label class="a11y-menu__option">
                    <input
                        type="radio"
                        name="color-mode"
                        value=mode.as_str()
                        prop:checked=move || prefs.with(|p| p.color_mode() == mode)
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            prefs.update(|p| p.set_color_mode(&value));
                        }
                    />
                    {move || t(color_mode_label(mode))}
                </label>
            }
        })
        .collect_view();

    view! {
        <details class="a11y-menu">
            <summary class="a11y-menu__toggle">{move || t(MessageKey::Accessibility)}</summary>
            <div class="a11y-menu__panel">
                <fieldset class="a11y-menu__group">
                    <legend>{move || t(MessageKey::FontSize)}</legend>
                    {font_options}
                </fieldset>
                <fieldset class="a11y-menu__group">
                    <legend>{move || t(MessageKey::ColorMode)}</legend>
                    {color_options}
                </fieldset>
            </div>
        </details>
    }
}
