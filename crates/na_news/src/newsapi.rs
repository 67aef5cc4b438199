use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::fmt;

use na_core::{Article, Result};

use crate::NewsSource;

/// Fixed topic query sent with every request (logical OR over the topics).
const TOPIC_QUERY: &str = "technology OR health OR science OR business";

const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";

#[derive(Deserialize)]
struct EverythingResponse {
    #[serde(default)]
    articles: Vec<ProviderArticle>,
}

/// Raw provider record. Every field may be null or absent.
#[derive(Deserialize)]
struct ProviderArticle {
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    content: Option<String>,
}

impl From<ProviderArticle> for Article {
    fn from(raw: ProviderArticle) -> Self {
        Article {
            title: raw.title.unwrap_or_default(),
            description: raw.description.unwrap_or_default(),
            url: raw.url.unwrap_or_default(),
            content: raw.content.unwrap_or_default(),
        }
    }
}

fn to_articles(response: EverythingResponse, count: usize) -> Vec<Article> {
    response
        .articles
        .into_iter()
        .take(count)
        .map(Article::from)
        .collect()
}

/// NewsAPI (newsapi.org) client for the `/everything` search endpoint.
pub struct NewsApiSource {
    client: Client,
    api_key: String,
    base_url: String,
}

impl NewsApiSource {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }
}

impl fmt::Debug for NewsApiSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiSource")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl NewsSource for NewsApiSource {
    fn name(&self) -> &str {
        "NewsAPI"
    }

    async fn fetch_random(&self, count: usize) -> Result<Vec<Article>> {
        let response = self
            .client
            .get(format!("{}/everything", self.base_url))
            .query(&[
                ("apiKey", self.api_key.as_str()),
                ("sortBy", "publishedAt"),
                ("pageSize", &count.to_string()),
                ("language", "en"),
                ("q", TOPIC_QUERY),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<EverythingResponse>()
            .await?;

        Ok(to_articles(response, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_empty_strings() {
        let response: EverythingResponse = serde_json::from_str(
            r#"{
                "status": "ok",
                "articles": [
                    {"title": "Quantum leap", "url": "https://example.com/q"},
                    {"title": null, "description": null, "url": null, "content": null}
                ]
            }"#,
        )
        .unwrap();

        let articles = to_articles(response, 5);
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title, "Quantum leap");
        assert_eq!(articles[0].description, "");
        assert_eq!(articles[1].title, "");
        assert_eq!(articles[1].url, "");
    }

    #[test]
    fn result_is_truncated_to_count() {
        let response: EverythingResponse = serde_json::from_str(
            r#"{"articles": [{"title": "a"}, {"title": "b"}, {"title": "c"}]}"#,
        )
        .unwrap();

        let articles = to_articles(response, 2);
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[1].title, "b");
    }

    #[test]
    fn zero_count_yields_empty() {
        let response: EverythingResponse =
            serde_json::from_str(r#"{"articles": [{"title": "a"}]}"#).unwrap();
        assert!(to_articles(response, 0).is_empty());
    }

    #[test]
    fn missing_articles_key_yields_empty() {
        let response: EverythingResponse = serde_json::from_str(r#"{"status": "ok"}"#).unwrap();
        assert!(to_articles(response, 3).is_empty());
    }
}
