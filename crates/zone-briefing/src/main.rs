use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use shared::{briefing, CityPatterns, Config, Country, NewsClient, WeatherClient};
use std::io::{self as stdio, Write};

fn prompt_country_selection() -> Result<Country> {
    println!("Which country?");
    for (i, country) in Country::ALL.iter().enumerate() {
        println!("  {}) {}", i + 1, country.display_name());
    }
    print!("\nEnter your choice (1-{}): ", Country::ALL.len());
    stdio::stdout().flush()?;

    let mut input = String::new();
    stdio::stdin().read_line(&mut input)?;

    let selection: usize = input
        .trim()
        .parse()
        .context("Invalid selection. Please enter a number.")?;

    if selection < 1 || selection > Country::ALL.len() {
        anyhow::bail!(
            "Selection out of range. Please choose 1-{}",
            Country::ALL.len()
        );
    }

    Ok(Country::ALL[selection - 1])
}

#[derive(Parser)]
#[command(name = "zone-briefing")]
#[command(about = "Weather, local news, and delivery load for a courier entering a zone")]
struct Args {
    /// City or postal code to brief on
    #[arg(short, long, default_value = "Barcelona")]
    location: String,

    /// Country code for news headlines (es, us, gb, fr, de, it)
    #[arg(short, long)]
    country: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_env()?;

    // Determine which country to pull headlines for
    let country = if let Some(code) = args.country {
        Country::from_code(&code).ok_or_else(|| {
            anyhow::anyhow!(
                "Invalid country: {}. Use 'es', 'us', 'gb', 'fr', 'de', or 'it'",
                code
            )
        })?
    } else {
        prompt_country_selection()?
    };

    println!("\n✓ Zone: {} ({})", args.location, country.display_name());

    let weather_client = WeatherClient::new(config.openweather_api_key)?;
    let news_client = NewsClient::new(config.news_api_key)?;
    let patterns = CityPatterns::builtin();

    println!("\n🚚 Generating delivery briefing...");
    let briefing = briefing::generate(
        &weather_client,
        &news_client,
        &patterns,
        &args.location,
        country,
        Local::now(),
    )
    .await;

    println!("\n{}", briefing.render());

    Ok(())
}
