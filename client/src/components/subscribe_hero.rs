//! Landing banner with the daily-email subscription form.
//!
//! ERROR HANDLING
//! ==============
//! Input problems and backend failures are shown inline under the form; the
//! submit button stays disabled while a request is in flight.

#[cfg(test)]
#[path = "subscribe_hero_test.rs"]
mod subscribe_hero_test;

use leptos::prelude::*;

use crate::i18n::{Locale, MessageKey, translate};

/// Trim and sanity-check an email address before posting it.
///
/// Requires exactly one `@`, a non-empty local part, and a domain containing
/// an interior dot. Full address validation is left to the backend.
pub fn validate_email_input(raw: &str) -> Result<String, MessageKey> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(MessageKey::EmailRequired);
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(MessageKey::EmailInvalid);
    };
    let domain_ok = domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.');
    if local.is_empty() || !domain_ok || email.chars().any(char::is_whitespace) {
        return Err(MessageKey::EmailInvalid);
    }
    Ok(email.to_owned())
}

/// Hero banner: tagline plus subscribe form.
#[component]
pub fn SubscribeHero() -> impl IntoView {
    let locale = expect_context::<RwSignal<Locale>>();
    let t = move |key| translate(locale.get(), key);

    let email = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let info = RwSignal::new(None::<MessageKey>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = match validate_email_input(&email.get()) {
            Ok(value) => value,
            Err(key) => {
                info.set(Some(key));
                return;
            }
        };
        busy.set(true);
        info.set(Some(MessageKey::Subscribing));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::subscribe(&email_value).await {
                Ok(()) => {
                    email.set(String::new());
                    info.set(Some(MessageKey::SubscribeSent));
                }
                Err(e) => {
                    log::warn!("subscribe failed: {e}");
                    info.set(Some(MessageKey::SubscribeFailed));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = email_value;
    };

    view! {
        <section class="hero">
            <h1 class="hero__title">
                <span class="hero__number">{move || t(MessageKey::Number)}</span>
                " "
                {move || t(MessageKey::WelcomePrefix)}
                " "
                <span class="hero__accent">{move || t(MessageKey::WelcomeSuffix)}</span>
            </h1>
            <p class="hero__description">
                <span class="hero__free">{move || t(MessageKey::Free)}</span>
                " "
                {move || t(MessageKey::DescriptionPrefix)}
                " "
                {move || t(MessageKey::DescriptionSuffix)}
            </p>
            <form class="subscribe-form" on:submit=on_submit>
                <input
                    class="subscribe-form__input"
                    type="email"
                    placeholder=move || t(MessageKey::EmailPlaceholder)
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <button class="btn subscribe-form__button" type="submit" disabled=move || busy.get()>
                    {move || t(MessageKey::Subscribe)}
                </button>
            </form>
            <Show when=move || info.get().is_some()>
                <p class="subscribe-form__message" role="status">
                    {move || info.get().map(t).unwrap_or_default()}
                </p>
            </Show>
            <p class="hero__community">{move || t(MessageKey::JoinCommunity)}</p>
        </section>
    }
}
