//! Catch-all page for unknown routes and malformed issue dates.

use leptos::prelude::*;

use crate::i18n::{Locale, MessageKey, translate};
use crate::util::dates::{DEFAULT_DATE, newsletter_path};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let locale = expect_context::<RwSignal<Locale>>();
    let t = move |key| translate(locale.get(), key);

    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="result-page result-page--not-found">
            <h1 class="result-page__title">{move || t(MessageKey::NotFoundTitle)}</h1>
            <p class="result-page__body">{move || t(MessageKey::NotFoundBody)}</p>
            <a href=newsletter_path(DEFAULT_DATE) class="btn result-page__home">{move || t(MessageKey::BackHome)}</a>
        </div>
    }
}
