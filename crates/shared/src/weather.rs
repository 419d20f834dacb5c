use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::error::FetchError;

const WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const RETRY_DELAY: Duration = Duration::from_secs(1);
const ATTEMPTS: u32 = 2;

/// Current conditions for a city, in metric units.
///
/// Temperature is carried as a number next to the description so downstream
/// checks never have to parse it back out of display text.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub temperature: f64,
    pub description: String,
}

impl WeatherReport {
    pub fn summary(&self) -> String {
        format!("{}°C, {}", self.temperature, self.description)
    }
}

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    #[serde(default)]
    weather: Vec<WeatherCondition>,
    main: WeatherMain,
}

#[derive(Debug, Deserialize)]
struct WeatherCondition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct WeatherMain {
    temp: f64,
}

pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl WeatherClient {
    pub fn new(api_key: String) -> Result<Self> {
        Self::build(api_key, WEATHER_URL.to_string())
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

    /// Fetch current weather for a city. A transient provider error gets one
    /// retry after a short delay; auth and unknown-city responses do not.
    pub async fn fetch(&self, city: &str) -> Result<WeatherReport, FetchError> {
        let url = format!(
            "{}?q={}&appid={}&units=metric",
            self.base_url,
            urlencoding::encode(city),
            self.api_key
        );

        let mut last_status = 0u16;
        for attempt in 0..ATTEMPTS {
            let response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(FetchError::network)?;

            match response.status().as_u16() {
                200 => {
                    let body: WeatherResponse =
                        response.json().await.map_err(FetchError::parse)?;
                    return parse_report(body);
                }
                401 => return Err(FetchError::Auth),
                404 => return Err(FetchError::NotFound(city.to_string())),
                status => last_status = status,
            }

            if attempt + 1 < ATTEMPTS {
                tokio::time::sleep(RETRY_DELAY).await;
            }
        }

        Err(FetchError::Provider(last_status))
    }
}

fn parse_report(body: WeatherResponse) -> Result<WeatherReport, FetchError> {
    let condition = body
        .weather
        .first()
        .ok_or_else(|| FetchError::Parse("missing weather conditions".to_string()))?;

    Ok(WeatherReport {
        temperature: body.main.temp,
        description: capitalize(&condition.description),
    })
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
