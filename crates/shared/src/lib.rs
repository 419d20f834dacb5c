// Public modules
pub mod briefing;
pub mod config;
pub mod error;
pub mod load;
pub mod models;
pub mod news;
pub mod safety;
pub mod weather;

// Re-export commonly used types
pub use briefing::Briefing;
pub use config::Config;
pub use error::FetchError;
pub use load::{CityPatterns, LoadEstimate, LoadLevel};
pub use models::Country;
pub use news::NewsClient;
pub use safety::SafetyTip;
pub use weather::{WeatherClient, WeatherReport};
