//! Header button switching the interface language.

use leptos::prelude::*;

use crate::i18n::{Locale, MessageKey, translate};
use crate::state::preferences::AttributeSink;
use crate::util::browser::DocumentRoot;

/// Toggle between the two locales and keep `<html lang>` in sync.
#[component]
pub fn LanguageToggle() -> impl IntoView {
    let locale = expect_context::<RwSignal<Locale>>();

    Effect::new(move || {
        DocumentRoot.set_attribute("lang", locale.get().code());
    });

    view! {
        <button
            class="btn header__language"
            type="button"
            on:click=move |_| locale.update(|l| *l = l.toggle())
        >
            {move || translate(locale.get(), MessageKey::SwitchLanguage)}
        </button>
    }
}
