use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub openweather_api_key: String,
    pub news_api_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Try to load .env from multiple locations
        Self::try_load_dotenv();

        let openweather_api_key = env::var("OPENWEATHER_API_KEY")
            .context(
                "OPENWEATHER_API_KEY not found.\n\n\
                To fix this, create ~/.config/zone-briefing/.env with:\n  \
                OPENWEATHER_API_KEY=your_key_here\n  \
                NEWS_API_KEY=your_key_here\n\n\
                Get your OpenWeatherMap API key from: https://home.openweathermap.org/api_keys"
            )?;

        let news_api_key = env::var("NEWS_API_KEY")
            .context(
                "NEWS_API_KEY not found.\n\n\
                To fix this, create ~/.config/zone-briefing/.env with:\n  \
                OPENWEATHER_API_KEY=your_key_here\n  \
                NEWS_API_KEY=your_key_here\n\n\
                Get your NewsAPI key from: https://newsapi.org/account"
            )?;

        Ok(Self {
            openweather_api_key: openweather_api_key.trim().to_string(),
            news_api_key: news_api_key.trim().to_string(),
        })
    }

    fn try_load_dotenv() {
        // Try locations in order of preference:

        // 1. Current directory (for development)
        if dotenvy::dotenv().is_ok() {
            return;
        }

        // 2. ~/.config/zone-briefing/.env (standard config location)
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("zone-briefing").join(".env");
            if config_path.exists() {
                if dotenvy::from_path(&config_path).is_ok() {
                    return;
                }
            }
        }

        // 3. ~/.env (home directory)
        if let Some(home_dir) = dirs::home_dir() {
            let home_path = home_dir.join(".env");
            if home_path.exists() {
                if dotenvy::from_path(&home_path).is_ok() {
                    return;
                }
            }
        }

        // If none found, that's okay - environment variables might be set system-wide
    }
}
