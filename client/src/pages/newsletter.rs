//! `/newsletter/:date` — one daily issue with navigation and subscribe form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route parameter drives loading: every change of `date` starts a new
//! request through `NewsletterState::begin_request`, and only the newest
//! response is applied. Malformed dates never reach the backend.

#[cfg(test)]
#[path = "newsletter_test.rs"]
mod newsletter_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::date_nav::DateNav;
use crate::components::section_list::SectionList;
use crate::components::subscribe_hero::SubscribeHero;
use crate::i18n::{Locale, MessageKey, translate};
use crate::pages::not_found::NotFoundPage;
use crate::state::newsletter::NewsletterState;
use crate::util::dates::{IssueDate, date_label};

/// Body-state of the issue area, derived from `NewsletterState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum IssueView {
    Loading,
    Failed,
    Empty,
    Ready,
}

pub(crate) fn issue_view(state: &NewsletterState) -> IssueView {
    if state.error.is_some() {
        IssueView::Failed
    } else if state.loading && state.sections.is_empty() {
        IssueView::Loading
    } else if state.sections.is_empty() {
        IssueView::Empty
    } else {
        IssueView::Ready
    }
}

#[component]
pub fn NewsletterPage() -> impl IntoView {
    let params = use_params_map();
    let newsletter = expect_context::<RwSignal<NewsletterState>>();
    let locale = expect_context::<RwSignal<Locale>>();
    let t = move |key| translate(locale.get(), key);

    let date = Memo::new(move |_| params.read().get("date").unwrap_or_default());
    let valid = Memo::new(move |_| date.get().parse::<IssueDate>().is_ok());

    Effect::new(move || {
        let requested = date.get();
        if !valid.get() {
            return;
        }
        let seq = newsletter.try_update(|s| s.begin_request(&requested)).unwrap_or_default();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_newsletter(&requested).await {
                Ok(response) => {
                    let applied = newsletter.try_update(|s| s.apply_response(seq, response)).unwrap_or(false);
                    if !applied {
                        log::debug!("dropped stale newsletter response for {requested}");
                    }
                }
                Err(e) => {
                    log::warn!("newsletter load failed for {requested}: {e}");
                    newsletter.update(|s| {
                        s.apply_error(seq, &e);
                    });
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = seq;
    });

    let fallback_notice = move || {
        newsletter.with(|s| s.served_other_date().map(|served| date_label(served, locale.get())))
    };

    let issue = move || match newsletter.with(issue_view) {
        IssueView::Loading => view! { <p class="newsletter__status">{t(MessageKey::Loading)}</p> }.into_any(),
        IssueView::Failed => {
            view! { <p class="newsletter__status newsletter__status--error">{t(MessageKey::LoadFailed)}</p> }
                .into_any()
        }
        IssueView::Empty => view! { <p class="newsletter__status">{t(MessageKey::NoArticles)}</p> }.into_any(),
        IssueView::Ready => view! { <SectionList sections=newsletter.with(|s| s.sections.clone())/> }.into_any(),
    };

    view! {
        <Show when=move || valid.get() fallback=|| view! { <NotFoundPage/> }>
            <div class="newsletter">
                <SubscribeHero/>
                <DateNav/>
                {move || {
                    fallback_notice()
                        .map(|served| {
                            view! {
                                <p class="newsletter__notice" role="status">
                                    {t(MessageKey::ServedOtherDate)}
                                    " "
                                    <strong>{served}</strong>
                                </p>
                            }
                        })
                }}
                <main class="newsletter__issue" aria-busy=move || newsletter.with(|s| s.loading.to_string())>
                    {issue}
                </main>
            </div>
        </Show>
    }
}
