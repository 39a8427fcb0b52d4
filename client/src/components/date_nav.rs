//! Links to the recent issues returned alongside the current one.

use leptos::prelude::*;

use crate::i18n::{Locale, MessageKey, translate};
use crate::state::newsletter::NewsletterState;
use crate::util::dates::{date_label, newsletter_path};

/// Horizontal list of past-issue links; the served issue is marked current.
#[component]
pub fn DateNav() -> impl IntoView {
    let newsletter = expect_context::<RwSignal<NewsletterState>>();
    let locale = expect_context::<RwSignal<Locale>>();

    let links = move || {
        let state = newsletter.get();
        let current = state.current_date.or(state.requested_date).unwrap_or_default();
        let loc = locale.get();
        state
            .dates
            .into_iter()
            .map(|date| {
                let is_current = date == current;
                let label = date_label(&date, loc);
                view! {
                    <li>
                        <a
                            href=newsletter_path(&date)
                            class=if is_current { "date-nav__link date-nav__link--current" } else { "date-nav__link" }
                            aria-current=if is_current { Some("page") } else { None }
                        >
                            {label}
                        </a>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="date-nav" aria-label=move || translate(locale.get(), MessageKey::PastIssues)>
            <ul class="date-nav__list">{links}</ul>
        </nav>
    }
}
