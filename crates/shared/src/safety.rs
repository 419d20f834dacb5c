use crate::weather::WeatherReport;

/// Contextual safety advice for a courier, derived from current weather.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SafetyTip {
    SlipperyRoads,
    SnowConditions,
    LowVisibility,
    StormShelter,
    HighTemperature,
    LowTemperature,
    NoConcern,
}

impl SafetyTip {
    pub fn message(&self) -> &'static str {
        match self {
            SafetyTip::SlipperyRoads => {
                "Roads may be slippery. Maintain safe distance and reduce speed."
            }
            SafetyTip::SnowConditions => {
                "Snow conditions reported. Use winter equipment and drive cautiously."
            }
            SafetyTip::LowVisibility => "Reduced visibility. Use fog lights and reduce speed.",
            SafetyTip::StormShelter => "Stormy conditions. Seek shelter if lightning intensifies.",
            SafetyTip::HighTemperature => {
                "High temperature. Stay hydrated and avoid prolonged sun exposure."
            }
            SafetyTip::LowTemperature => {
                "Cold temperature. Wear appropriate clothing and watch for ice."
            }
            SafetyTip::NoConcern => {
                "No specific weather-related safety concerns. Proceed normally."
            }
        }
    }

    pub fn is_warning(&self) -> bool {
        !matches!(self, SafetyTip::NoConcern)
    }
}

/// Derive a safety tip from the weather, if any was fetched. Condition
/// keywords outrank the temperature thresholds.
pub fn advise(report: Option<&WeatherReport>) -> Option<SafetyTip> {
    let report = report?;
    let description = report.description.to_lowercase();

    let tip = if description.contains("rain") || description.contains("shower") {
        SafetyTip::SlipperyRoads
    } else if description.contains("snow") {
        SafetyTip::SnowConditions
    } else if description.contains("fog") {
        SafetyTip::LowVisibility
    } else if description.contains("storm") || description.contains("thunder") {
        SafetyTip::StormShelter
    } else if report.temperature > 30.0 {
        SafetyTip::HighTemperature
    } else if report.temperature < 5.0 {
        SafetyTip::LowTemperature
    } else {
        SafetyTip::NoConcern
    };

    Some(tip)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(temperature: f64, description: &str) -> WeatherReport {
        WeatherReport {
            temperature,
            description: description.to_string(),
        }
    }

    #[test]
    fn test_no_weather_means_no_tip() {
        assert_eq!(advise(None), None);
    }

    #[test]
    fn test_condition_keywords() {
        assert_eq!(
            advise(Some(&report(18.0, "Light rain"))),
            Some(SafetyTip::SlipperyRoads)
        );
        assert_eq!(
            advise(Some(&report(20.0, "Heavy showers"))),
            Some(SafetyTip::SlipperyRoads)
        );
        assert_eq!(
            advise(Some(&report(-2.0, "Snow"))),
            Some(SafetyTip::SnowConditions)
        );
        assert_eq!(
            advise(Some(&report(8.0, "Fog"))),
            Some(SafetyTip::LowVisibility)
        );
        assert_eq!(
            advise(Some(&report(15.0, "Thunderstorm"))),
            Some(SafetyTip::StormShelter)
        );
    }

    #[test]
    fn test_keyword_outranks_temperature() {
        // 18° sits inside the comfortable band; the rain keyword still wins
        assert_eq!(
            advise(Some(&report(18.0, "Light rain"))),
            Some(SafetyTip::SlipperyRoads)
        );
        // 35° would be a heat tip, but snow is checked first
        assert_eq!(
            advise(Some(&report(35.0, "Snow"))),
            Some(SafetyTip::SnowConditions)
        );
    }

    #[test]
    fn test_temperature_thresholds() {
        assert_eq!(
            advise(Some(&report(35.0, "Sunny"))),
            Some(SafetyTip::HighTemperature)
        );
        assert_eq!(
            advise(Some(&report(3.0, "Clear"))),
            Some(SafetyTip::LowTemperature)
        );
        assert_eq!(
            advise(Some(&report(22.0, "Clear"))),
            Some(SafetyTip::NoConcern)
        );
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        assert_eq!(
            advise(Some(&report(30.0, "Sunny"))),
            Some(SafetyTip::NoConcern)
        );
        assert_eq!(
            advise(Some(&report(5.0, "Clear"))),
            Some(SafetyTip::NoConcern)
        );
    }
}
