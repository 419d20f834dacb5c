/// Countries the news provider supports for top headlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Country {
    Spain,
    UnitedStates,
    UnitedKingdom,
    France,
    Germany,
    Italy,
}

impl Country {
    pub const ALL: [Country; 6] = [
        Country::Spain,
        Country::UnitedStates,
        Country::UnitedKingdom,
        Country::France,
        Country::Germany,
        Country::Italy,
    ];

    /// Two-letter code used in news provider queries.
    pub fn code(&self) -> &'static str {
        match self {
            Country::Spain => "es",
            Country::UnitedStates => "us",
            Country::UnitedKingdom => "gb",
            Country::France => "fr",
            Country::Germany => "de",
            Country::Italy => "it",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Country::Spain => "Spain",
            Country::UnitedStates => "United States",
            Country::UnitedKingdom => "United Kingdom",
            Country::France => "France",
            Country::Germany => "Germany",
            Country::Italy => "Italy",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "es" => Some(Country::Spain),
            "us" => Some(Country::UnitedStates),
            "gb" => Some(Country::UnitedKingdom),
            "fr" => Some(Country::France),
            "de" => Some(Country::Germany),
            "it" => Some(Country::Italy),
            _ => None,
        }
    }
}
