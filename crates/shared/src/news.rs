use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::error::FetchError;
use crate::models::Country;

const HEADLINES_URL: &str = "https://newsapi.org/v2/top-headlines";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// Titles mentioning any of these are likely to affect a delivery route
const RELEVANT_KEYWORDS: &[&str] = &[
    "traffic",
    "road",
    "accident",
    "protest",
    "event",
    "closure",
    "strike",
    "demonstration",
];

pub const NO_NEWS_MESSAGE: &str = "No significant news affecting deliveries at this time";

#[derive(Debug, Deserialize)]
struct HeadlinesResponse {
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Debug, Clone, Deserialize)]
struct Article {
    #[serde(default)]
    title: String,
}

pub struct NewsClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl NewsClient {
    pub fn new(api_key: String) -> Result<Self> {
        Self::build(api_key, HEADLINES_URL.to_string())
    }

    #[cfg(test)]
    pub(crate) fn with_base_url(api_key: String, base_url: String) -> Result<Self> {
        Self::build(api_key, base_url)
    }

    fn build(api_key: String, base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            base_url,
        })
    }

    /// Fetch up to 3 delivery-relevant headlines for a city. Falls back to
    /// country-wide general headlines when the city query comes back empty.
    pub async fn fetch(&self, country: Country, city: &str) -> Result<Vec<String>, FetchError> {
        let url = format!(
            "{}?country={}&q={}&apiKey={}",
            self.base_url,
            country.code(),
            urlencoding::encode(city),
            self.api_key
        );
        let mut articles = self.request_articles(&url).await?;

        if articles.is_empty() {
            let fallback_url = format!(
                "{}?country={}&category=general&apiKey={}",
                self.base_url,
                country.code(),
                self.api_key
            );
            match self.request_articles(&fallback_url).await {
                Ok(fallback) => articles = fallback,
                Err(err @ FetchError::Network(_)) => return Err(err),
                // A failed fallback leaves the empty primary result in place
                Err(_) => {}
            }
        }

        Ok(select_headlines(&articles))
    }

    async fn request_articles(&self, url: &str) -> Result<Vec<Article>, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::network)?;

        match response.status().as_u16() {
            200 => {
                let body: HeadlinesResponse = response.json().await.map_err(FetchError::parse)?;
                Ok(body.articles)
            }
            401 => Err(FetchError::Auth),
            status => Err(FetchError::Provider(status)),
        }
    }
}

/// Pick the headlines to show: relevant titles first, otherwise the leading
/// titles as fetched, otherwise the all-clear message.
fn select_headlines(articles: &[Article]) -> Vec<String> {
    let candidates: Vec<&Article> = articles.iter().take(10).collect();

    let relevant: Vec<&Article> = candidates
        .iter()
        .filter(|article| {
            let title = article.title.to_lowercase();
            RELEVANT_KEYWORDS
                .iter()
                .any(|keyword| title.contains(keyword))
        })
        .copied()
        .collect();

    let display = if relevant.is_empty() {
        &candidates
    } else {
        &relevant
    };

    let headlines: Vec<String> = display
        .iter()
        .take(3)
        .map(|article| article.title.clone())
        .collect();

    if headlines.is_empty() {
        vec![NO_NEWS_MESSAGE.to_string()]
    } else {
        headlines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn article(title: &str) -> Article {
        Article {
            title: title.to_string(),
        }
    }

    fn client_for(server: &MockServer) -> NewsClient {
        NewsClient::with_base_url(
            "test-key".to_string(),
            format!("{}/top-headlines", server.uri()),
        )
        .unwrap()
    }

    fn articles_body(titles: &[&str]) -> serde_json::Value {
        json!({
            "articles": titles.iter().map(|t| json!({"title": t})).collect::<Vec<_>>()
        })
    }

    // ==================== Selection Tests ====================

    #[test]
    fn test_select_prefers_relevant_titles() {
        let articles = vec![
            article("Local team wins championship"),
            article("Traffic jam on the ring road"),
            article("New bakery opens downtown"),
            article("Bus strike announced for Monday"),
        ];
        let headlines = select_headlines(&articles);
        assert_eq!(
            headlines,
            vec![
                "Traffic jam on the ring road".to_string(),
                "Bus strike announced for Monday".to_string(),
            ]
        );
    }

    #[test]
    fn test_select_is_case_insensitive() {
        let articles = vec![article("PROTEST blocks city center")];
        assert_eq!(
            select_headlines(&articles),
            vec!["PROTEST blocks city center".to_string()]
        );
    }

    #[test]
    fn test_select_falls_back_to_unfiltered_titles() {
        let articles = vec![
            article("Local team wins championship"),
            article("New bakery opens downtown"),
            article("Mayor inaugurates park"),
            article("Museum extends opening hours"),
        ];
        let headlines = select_headlines(&articles);
        assert_eq!(headlines.len(), 3);
        assert_eq!(headlines[0], "Local team wins championship");
    }

    #[test]
    fn test_select_caps_relevant_at_three() {
        let articles = vec![
            article("Traffic on A1"),
            article("Traffic on A2"),
            article("Traffic on A3"),
            article("Traffic on A4"),
        ];
        assert_eq!(select_headlines(&articles).len(), 3);
    }

    #[test]
    fn test_select_only_considers_first_ten() {
        let mut articles: Vec<Article> = (0..10)
            .map(|i| article(&format!("Headline {}", i)))
            .collect();
        articles.push(article("Traffic chaos after accident"));

        // The relevant title sits past the cap, so unfiltered leaders win
        let headlines = select_headlines(&articles);
        assert_eq!(headlines[0], "Headline 0");
        assert!(!headlines.contains(&"Traffic chaos after accident".to_string()));
    }

    #[test]
    fn test_select_empty_returns_sentinel() {
        assert_eq!(select_headlines(&[]), vec![NO_NEWS_MESSAGE.to_string()]);
    }

    // ==================== Fetch Tests ====================

    #[tokio::test]
    async fn test_fetch_uses_fallback_when_city_query_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/top-headlines"))
            .and(query_param("q", "Barcelona"))
            .respond_with(ResponseTemplate::new(200).set_body_json(articles_body(&[])))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/top-headlines"))
            .and(query_param("category", "general"))
            .respond_with(ResponseTemplate::new(200).set_body_json(articles_body(&[
                "Road closure in city center",
                "Weather warning issued",
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let headlines = client_for(&server)
            .fetch(Country::Spain, "Barcelona")
            .await
            .unwrap();
        assert_eq!(headlines[0], "Road closure in city center");
    }

    #[tokio::test]
    async fn test_fetch_skips_fallback_when_primary_has_articles() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/top-headlines"))
            .and(query_param("q", "Madrid"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(articles_body(&["Metro strike tomorrow"])),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/top-headlines"))
            .and(query_param("category", "general"))
            .respond_with(ResponseTemplate::new(200).set_body_json(articles_body(&["Unused"])))
            .expect(0)
            .mount(&server)
            .await;

        let headlines = client_for(&server)
            .fetch(Country::Spain, "Madrid")
            .await
            .unwrap();
        assert_eq!(headlines, vec!["Metro strike tomorrow".to_string()]);
    }

    #[tokio::test]
    async fn test_fetch_401_is_auth_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/top-headlines"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let result = client_for(&server).fetch(Country::Spain, "Barcelona").await;
        assert_eq!(result, Err(FetchError::Auth));
    }

    #[tokio::test]
    async fn test_fetch_primary_error_skips_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/top-headlines"))
            .and(query_param("q", "Barcelona"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/top-headlines"))
            .and(query_param("category", "general"))
            .respond_with(ResponseTemplate::new(200).set_body_json(articles_body(&["Unused"])))
            .expect(0)
            .mount(&server)
            .await;

        let result = client_for(&server).fetch(Country::Spain, "Barcelona").await;
        assert_eq!(result, Err(FetchError::Provider(500)));
    }

    #[tokio::test]
    async fn test_fetch_failed_fallback_yields_sentinel() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/top-headlines"))
            .and(query_param("q", "Barcelona"))
            .respond_with(ResponseTemplate::new(200).set_body_json(articles_body(&[])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/top-headlines"))
            .and(query_param("category", "general"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let headlines = client_for(&server)
            .fetch(Country::Spain, "Barcelona")
            .await
            .unwrap();
        assert_eq!(headlines, vec![NO_NEWS_MESSAGE.to_string()]);
    }
}
