//! Rendered newsletter sections and their article cards.

use leptos::prelude::*;

use crate::i18n::{Locale, MessageKey, pick_localized, section_label, translate};
use crate::net::types::{Article, Section};
use crate::util::markdown::{is_safe_url, render_markdown_html, safe_href};

/// All sections of the loaded issue.
#[component]
pub fn SectionList(sections: Vec<Section>) -> impl IntoView {
    sections
        .into_iter()
        .map(|section| view! { <SectionBlock section=section/> })
        .collect_view()
}

#[component]
fn SectionBlock(section: Section) -> impl IntoView {
    let locale = expect_context::<RwSignal<Locale>>();
    let heading = section.section.clone();
    let articles = section
        .articles
        .into_iter()
        .map(|article| view! { <ArticleCard article=article/> })
        .collect_view();

    view! {
        <section class="newsletter-section">
            <h2 class="newsletter-section__title">{move || section_label(locale.get(), &heading)}</h2>
            <div class="newsletter-section__articles">{articles}</div>
        </section>
    }
}

/// One article: headline link, optional image, localized summary.
#[component]
pub fn ArticleCard(article: Article) -> impl IntoView {
    let locale = expect_context::<RwSignal<Locale>>();
    let Article { title, title_en, content, content_en, url, image_url } = article;

    let href = safe_href(&url);
    let image_url = image_url.filter(|src| is_safe_url(src));
    let image_alt = title_en.clone();
    let headline = move || pick_localized(locale.get(), &title, &title_en).to_owned();
    let body = move || render_markdown_html(pick_localized(locale.get(), &content, &content_en));

    view! {
        <article class="article-card">
            {image_url.map(|src| {
                view! { <img class="article-card__image" src=src alt=image_alt loading="lazy"/> }
            })}
            <h3 class="article-card__title">
                <a href=href.clone() target="_blank" rel="noopener noreferrer">{headline}</a>
            </h3>
            <div class="article-card__body" inner_html=body></div>
            <a class="article-card__more" href=href target="_blank" rel="noopener noreferrer">
                {move || translate(locale.get(), MessageKey::ReadMore)}
            </a>
        </article>
    }
}
