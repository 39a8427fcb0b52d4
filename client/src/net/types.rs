//! Wire DTOs for the newsletter backend API.
//!
//! DESIGN
//! ======
//! Field names follow the backend JSON (`currentDate` is camelCase, article
//! fields are snake_case). Optional or missing collections default to empty
//! so a partially populated issue still renders.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// One linked story inside a newsletter section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Translated (Chinese) headline.
    #[serde(default)]
    pub title: String,
    /// Original English headline.
    #[serde(default)]
    pub title_en: String,
    /// Translated summary, Markdown.
    #[serde(default)]
    pub content: String,
    /// Original English summary, Markdown.
    #[serde(default)]
    pub content_en: String,
    /// Link to the full story.
    #[serde(default)]
    pub url: String,
    /// Lead image, when the backend extracted one.
    #[serde(default)]
    pub image_url: Option<String>,
}

/// A titled group of articles (e.g. "Quick Links").
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub section: String,
    #[serde(default)]
    pub articles: Vec<Article>,
}

/// Response body of `GET /api/newsletter/{date}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterResponse {
    #[serde(default)]
    pub articles: Vec<Section>,
    /// Date actually served; differs from the request when the backend fell
    /// back to the most recent available issue.
    #[serde(rename = "currentDate")]
    pub current_date: String,
    /// Recent dates with issues, newest first.
    #[serde(default)]
    pub dates: Vec<String>,
}

/// Request body of `POST /api/subscribe`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribeRequest {
    pub email: String,
}
