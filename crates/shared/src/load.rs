use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadLevel {
    Low,
    Medium,
    High,
}

impl LoadLevel {
    pub fn label(&self) -> &'static str {
        match self {
            LoadLevel::Low => "Low",
            LoadLevel::Medium => "Medium",
            LoadLevel::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeakWindow {
    pub start: u32,
    pub end: u32,
}

impl PeakWindow {
    const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    fn contains(&self, hour: u32) -> bool {
        self.start <= hour && hour <= self.end
    }
}

/// Peak delivery windows for one city. Bounds are inclusive hours in [0,23].
#[derive(Debug, Clone, Copy)]
pub struct CityPattern {
    pub morning_peak: PeakWindow,
    pub lunch_peak: PeakWindow,
    pub evening_peak: PeakWindow,
}

/// Immutable per-city peak-hour table, built once at startup. Cities are
/// keyed by lowercased name; unknown cities get the default pattern.
#[derive(Debug, Clone)]
pub struct CityPatterns {
    patterns: HashMap<String, CityPattern>,
    default: CityPattern,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadEstimate {
    pub level: LoadLevel,
    pub detail: String,
}

impl CityPatterns {
    pub fn builtin() -> Self {
        let mut patterns = HashMap::new();
        patterns.insert(
            "barcelona".to_string(),
            CityPattern {
                morning_peak: PeakWindow::new(9, 11),
                lunch_peak: PeakWindow::new(12, 15),
                evening_peak: PeakWindow::new(18, 21),
            },
        );
        patterns.insert(
            "madrid".to_string(),
            CityPattern {
                morning_peak: PeakWindow::new(8, 11),
                lunch_peak: PeakWindow::new(13, 16),
                evening_peak: PeakWindow::new(19, 22),
            },
        );

        Self {
            patterns,
            default: CityPattern {
                morning_peak: PeakWindow::new(8, 11),
                lunch_peak: PeakWindow::new(12, 15),
                evening_peak: PeakWindow::new(18, 21),
            },
        }
    }

    pub fn for_city(&self, city: &str) -> &CityPattern {
        self.patterns
            .get(&city.to_lowercase())
            .unwrap_or(&self.default)
    }

    /// Estimate delivery load for a location at a given hour of day.
    /// Lunch takes priority over evening over morning, even when windows
    /// overlap.
    pub fn estimate(&self, location: &str, hour: u32) -> LoadEstimate {
        let pattern = self.for_city(location);

        if pattern.lunch_peak.contains(hour) {
            LoadEstimate {
                level: LoadLevel::High,
                detail: format!(
                    "{} deliveries scheduled between {} - {} PM",
                    10 + hour - pattern.lunch_peak.start,
                    pattern.lunch_peak.start,
                    pattern.lunch_peak.end
                ),
            }
        } else if pattern.evening_peak.contains(hour) {
            LoadEstimate {
                level: LoadLevel::Medium,
                detail: format!(
                    "5-10 deliveries scheduled between {} - {} PM",
                    twelve_hour(pattern.evening_peak.start),
                    twelve_hour(pattern.evening_peak.end)
                ),
            }
        } else if pattern.morning_peak.contains(hour) {
            LoadEstimate {
                level: LoadLevel::Medium,
                detail: format!(
                    "5-8 deliveries scheduled between {} - {} AM",
                    pattern.morning_peak.start, pattern.morning_peak.end
                ),
            }
        } else {
            LoadEstimate {
                level: LoadLevel::Low,
                detail: "Less than 5 deliveries expected in the next hour".to_string(),
            }
        }
    }
}

fn twelve_hour(hour: u32) -> u32 {
    if hour > 12 {
        hour - 12
    } else {
        hour
    }
}
