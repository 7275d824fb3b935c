//! Condition classifier - WeatherAPI.com condition codes to icon categories
//!
//! The table below mirrors the vendor's condition taxonomy, grouped by the
//! icon each code is drawn with. Groupings are intentionally kept as-is,
//! including the second fog block (1132/1144) and the rain showers that live
//! in the mixed snow group.

/// Display category for a condition code
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconCategory {
    Clear,
    PartlyCloudy,
    Cloudy,
    Fog,
    Drizzle,
    Thunder,
    /// Blowing snow and blizzard
    Wind,
    /// Patchy precipitation possible
    Rain,
    HeavyRain,
    /// Snow, sleet, ice pellets and mixed showers
    Snow,
    Unknown,
}

impl IconCategory {
    pub const ALL: [IconCategory; 11] = [
        IconCategory::Clear,
        IconCategory::PartlyCloudy,
        IconCategory::Cloudy,
        IconCategory::Fog,
        IconCategory::Drizzle,
        IconCategory::Thunder,
        IconCategory::Wind,
        IconCategory::Rain,
        IconCategory::HeavyRain,
        IconCategory::Snow,
        IconCategory::Unknown,
    ];

    pub fn label(self) -> &'static str {
        match self {
            IconCategory::Clear => "Clear",
            IconCategory::PartlyCloudy => "Partly cloudy",
            IconCategory::Cloudy => "Cloudy",
            IconCategory::Fog => "Fog",
            IconCategory::Drizzle => "Drizzle",
            IconCategory::Thunder => "Thunder",
            IconCategory::Wind => "Wind",
            IconCategory::Rain => "Rain",
            IconCategory::HeavyRain => "Heavy rain",
            IconCategory::Snow => "Snow",
            IconCategory::Unknown => "Unknown",
        }
    }

    /// Single-glyph fallback for compact layouts
    pub fn emoji(self) -> &'static str {
        match self {
            IconCategory::Clear => "\u{2600}\u{fe0f}",
            IconCategory::PartlyCloudy => "\u{26c5}",
            IconCategory::Cloudy => "\u{2601}\u{fe0f}",
            IconCategory::Fog => "\u{1f32b}\u{fe0f}",
            IconCategory::Drizzle => "\u{1f326}\u{fe0f}",
            IconCategory::Thunder => "\u{26a1}",
            IconCategory::Wind => "\u{1f32c}\u{fe0f}",
            IconCategory::Rain => "\u{1f326}\u{fe0f}",
            IconCategory::HeavyRain => "\u{1f327}\u{fe0f}",
            IconCategory::Snow => "\u{2744}\u{fe0f}",
            IconCategory::Unknown => "\u{2753}",
        }
    }
}

use IconCategory::*;

/// (code, category, vendor label), sorted by code. Each code appears once.
pub const CONDITION_TABLE: &[(i64, IconCategory, &str)] = &[
    (1000, Clear, "Clear"),
    (1003, PartlyCloudy, "Partly cloudy"),
    (1006, Cloudy, "Cloudy"),
    (1009, Cloudy, "Overcast"),
    (1030, Fog, "Mist"),
    (1063, Rain, "Patchy rain possible"),
    (1066, Rain, "Patchy snow possible"),
    (1069, Rain, "Patchy sleet possible"),
    (1072, Rain, "Patchy freezing drizzle possible"),
    (1087, Thunder, "Thundery outbreaks possible"),
    (1114, Wind, "Blowing snow"),
    (1117, Wind, "Blizzard"),
    (1132, Fog, "Fog"),
    (1135, Fog, "Fog"),
    (1144, Fog, "Freezing fog"),
    (1147, Fog, "Freezing fog"),
    (1150, Drizzle, "Patchy light drizzle"),
    (1153, Drizzle, "Light drizzle"),
    (1168, Drizzle, "Freezing drizzle"),
    (1171, Drizzle, "Heavy freezing drizzle"),
    (1180, HeavyRain, "Patchy light rain"),
    (1183, HeavyRain, "Light rain"),
    (1186, HeavyRain, "Moderate rain at times"),
    (1189, HeavyRain, "Moderate rain"),
    (1192, HeavyRain, "Heavy rain at times"),
    (1195, HeavyRain, "Heavy rain"),
    (1198, HeavyRain, "Torrential rain shower"),
    (1201, Snow, "Patchy light snow"),
    (1204, Snow, "Light snow"),
    (1207, Snow, "Patchy moderate snow"),
    (1210, Snow, "Moderate snow"),
    (1213, Snow, "Patchy heavy snow"),
    (1216, Snow, "Heavy snow"),
    (1219, Snow, "Ice pellets"),
    (1222, Snow, "Light sleet"),
    (1225, Snow, "Moderate or heavy sleet"),
    (1237, Snow, "Light showers of ice pellets"),
    (1240, Snow, "Light rain shower"),
    (1243, Snow, "Moderate or heavy rain shower"),
    (1246, Snow, "Ice pellets shower"),
    (1249, Snow, "Moderate or heavy showers of ice pellets"),
    (1252, Snow, "Light showers of ice pellets"),
    (1255, Snow, "Light sleet showers"),
    (1258, Snow, "Moderate or heavy sleet showers"),
    (1261, Snow, "Light snow showers"),
    (1264, Snow, "Moderate or heavy snow showers"),
];

fn lookup(code: i64) -> Option<&'static (i64, IconCategory, &'static str)> {
    CONDITION_TABLE
        .binary_search_by_key(&code, |&(c, _, _)| c)
        .ok()
        .map(|idx| &CONDITION_TABLE[idx])
}

/// Classify a condition code. Total: codes outside the table are `Unknown`.
pub fn classify(code: i64) -> IconCategory {
    lookup(code).map_or(IconCategory::Unknown, |&(_, category, _)| category)
}

/// Vendor label for a known code
pub fn condition_label(code: i64) -> Option<&'static str> {
    lookup(code).map(|&(_, _, label)| label)
}
