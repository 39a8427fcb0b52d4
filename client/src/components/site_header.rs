//! Top bar with the site title, language switch, and accessibility menu.

use leptos::prelude::*;

use crate::components::accessibility_menu::AccessibilityMenu;
use crate::components::language_toggle::LanguageToggle;
use crate::i18n::{Locale, MessageKey, translate};
use crate::util::dates::{DEFAULT_DATE, newsletter_path};

#[component]
pub fn SiteHeader() -> impl IntoView {
    let locale = expect_context::<RwSignal<Locale>>();

    view! {
        <header class="header">
            <a href=newsletter_path(DEFAULT_DATE) class="header__brand">
                "TLDR"
                <span class="header__brand-sub">{move || translate(locale.get(), MessageKey::LatestNews)}</span>
            </a>
            <span class="header__spacer"></span>
            <LanguageToggle/>
            <AccessibilityMenu/>
        </header>
    }
}
