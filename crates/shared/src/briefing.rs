use chrono::{DateTime, Local, Timelike};

use crate::error::FetchError;
use crate::load::{CityPatterns, LoadEstimate};
use crate::models::Country;
use crate::news::NewsClient;
use crate::safety::{self, SafetyTip};
use crate::weather::{WeatherClient, WeatherReport};

/// One briefing for one zone entry. Built fresh per request and discarded
/// after rendering; each section carries its own outcome.
pub struct Briefing {
    pub zone: String,
    pub generated_at: DateTime<Local>,
    pub weather: Result<WeatherReport, FetchError>,
    pub news: Result<Vec<String>, FetchError>,
    pub load: LoadEstimate,
    pub safety: Option<SafetyTip>,
}

/// Generate a briefing for a location. The three sources are fetched one
/// after another; a failure in any of them fills its own slot only.
pub async fn generate(
    weather_client: &WeatherClient,
    news_client: &NewsClient,
    patterns: &CityPatterns,
    location: &str,
    country: Country,
    now: DateTime<Local>,
) -> Briefing {
    let weather = weather_client.fetch(location).await;
    let news = news_client.fetch(country, location).await;
    let load = patterns.estimate(location, now.hour());
    let safety = safety::advise(weather.as_ref().ok());

    Briefing {
        zone: title_case(location),
        generated_at: now,
        weather,
        news,
        load,
        safety,
    }
}

impl Briefing {
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("Zone: {}\n", self.zone));
        out.push_str(&format!(
            "⏰ {} local time\n",
            self.generated_at.format("%H:%M")
        ));
        out.push('\n');

        out.push_str("🌤️ Weather\n");
        match &self.weather {
            Ok(report) => out.push_str(&format!("  {}\n", report.summary())),
            Err(err) => out.push_str(&format!("  ✗ {}\n", err)),
        }
        out.push('\n');

        out.push_str("📦 Delivery Load\n");
        out.push_str(&format!(
            "  {}: {}\n",
            self.load.level.label(),
            self.load.detail
        ));
        out.push('\n');

        out.push_str("📰 Local News\n");
        match &self.news {
            Ok(headlines) => {
                for (i, headline) in headlines.iter().enumerate() {
                    out.push_str(&format!("  {}. {}\n", i + 1, headline));
                }
            }
            Err(err) => out.push_str(&format!("  ✗ {}\n", err)),
        }

        if let Some(tip) = self.safety {
            out.push('\n');
            out.push_str("🛡️ Safety Tips\n");
            let marker = if tip.is_warning() { "⚠" } else { "✓" };
            out.push_str(&format!("  {} {}\n", marker, tip.message()));
        }

        out
    }
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
