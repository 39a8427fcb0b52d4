//! Result pages the backend redirects to after confirm/unsubscribe links.

#[cfg(test)]
#[path = "subscription_test.rs"]
mod subscription_test;

use leptos::prelude::*;

use crate::i18n::{Locale, MessageKey, translate};
use crate::util::dates::{DEFAULT_DATE, newsletter_path};

/// Which subscription flow ended on this page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubscriptionOutcome {
    Success,
    Error,
    Unsubscribed,
}

impl SubscriptionOutcome {
    /// Route segment (`/success`, `/error`, `/unsubscribed`).
    pub fn path(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Unsubscribed => "unsubscribed",
        }
    }

    pub fn title(self) -> MessageKey {
        match self {
            Self::Success => MessageKey::SuccessTitle,
            Self::Error => MessageKey::ErrorTitle,
            Self::Unsubscribed => MessageKey::UnsubscribedTitle,
        }
    }

    pub fn body(self) -> MessageKey {
        match self {
            Self::Success => MessageKey::SuccessBody,
            Self::Error => MessageKey::ErrorBody,
            Self::Unsubscribed => MessageKey::UnsubscribedBody,
        }
    }

    fn modifier_class(self) -> &'static str {
        match self {
            Self::Success => "result-page result-page--success",
            Self::Error => "result-page result-page--error",
            Self::Unsubscribed => "result-page result-page--unsubscribed",
        }
    }
}

#[component]
pub fn SubscriptionResultPage(outcome: SubscriptionOutcome) -> impl IntoView {
    let locale = expect_context::<RwSignal<Locale>>();
    let t = move |key| translate(locale.get(), key);

    view! {
        <div class=outcome.modifier_class()>
            <h1 class="result-page__title">{move || t(outcome.title())}</h1>
            <p class="result-page__body">{move || t(outcome.body())}</p>
            <a href=newsletter_path(DEFAULT_DATE) class="btn result-page__home">{move || t(MessageKey::BackHome)}</a>
        </div>
    }
}

#[component]
pub fn SuccessPage() -> impl IntoView {
    view! { <SubscriptionResultPage outcome=SubscriptionOutcome::Success/> }
}

#[component]
pub fn ErrorPage() -> impl IntoView {
    view! { <SubscriptionResultPage outcome=SubscriptionOutcome::Error/> }
}

#[component]
pub fn UnsubscribedPage() -> impl IntoView {
    view! { <SubscriptionResultPage outcome=SubscriptionOutcome::Unsubscribed/> }
}
