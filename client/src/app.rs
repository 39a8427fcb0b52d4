//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::site_header::SiteHeader;
use crate::i18n::Locale;
use crate::pages::{
    home::HomePage,
    newsletter::NewsletterPage,
    not_found::NotFoundPage,
    subscription::{ErrorPage, SubscriptionOutcome, SuccessPage, UnsubscribedPage},
};
use crate::state::newsletter::NewsletterState;
use crate::util::browser::load_preferences;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang=Locale::default().code() data-font-size="medium" data-color-mode="normal">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Loads display preferences once, provides shared state contexts, and sets
/// up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let preferences = RwSignal::new(load_preferences());
    let locale = RwSignal::new(Locale::default());
    let newsletter = RwSignal::new(NewsletterState::default());

    provide_context(preferences);
    provide_context(locale);
    provide_context(newsletter);

    view! {
        <Stylesheet id="leptos" href="/pkg/tldr-reader.css"/>
        <Title text="TLDR 科技日报"/>

        <Router>
            <SiteHeader/>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=(StaticSegment("newsletter"), ParamSegment("date")) view=NewsletterPage/>
                <Route path=StaticSegment(SubscriptionOutcome::Success.path()) view=SuccessPage/>
                <Route path=StaticSegment(SubscriptionOutcome::Error.path()) view=ErrorPage/>
                <Route path=StaticSegment(SubscriptionOutcome::Unsubscribed.path()) view=UnsubscribedPage/>
            </Routes>
        </Router>
    }
}
