//! `/` — forwards to the default issue.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::util::dates::{DEFAULT_DATE, newsletter_path};

#[component]
pub fn HomePage() -> impl IntoView {
    view! { <Redirect path=newsletter_path(DEFAULT_DATE)/> }
}
