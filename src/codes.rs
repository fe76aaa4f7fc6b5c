use std::collections::HashMap;

/// Icon shown for weather codes without a mapping
pub const FALLBACK_ICON: &str = "icons8-cloud-50.svg";

/// Description shown for weather codes without a mapping
pub const FALLBACK_DESCRIPTION: &str = "Unknown";

/// Static lookup from WMO weather condition code to display icon and
/// description. Built once, never mutated.
pub struct CodeLookup {
    icons: HashMap<u32, &'static str>,
    descriptions: HashMap<u32, &'static str>,
}

impl CodeLookup {
    pub fn new() -> CodeLookup {
        let icons = HashMap::from([
            (0, "icons8-summer-50.svg"),
            (1, "icons8-partly-cloudy-day-50.svg"),
            (2, "icons8-cloud-50.svg"),
            (3, "icons8-clouds-50.svg"),
            (45, "icons8-wind-50.svg"),
            (48, "icons8-wind-50.svg"),
            (51, "icons8-light-rain-50.svg"),
            (53, "icons8-light-rain-50.svg"),
            (55, "icons8-rain-cloud-50.svg"),
            (61, "icons8-rain-50.svg"),
            (63, "icons8-heavy-rain-50.svg"),
            (65, "icons8-heavy-rain-50-2.svg"),
            (66, "icons8-umbrella-50.svg"),
            (67, "icons8-umbrella-50.svg"),
            (71, "icons8-light-snow-50.svg"),
            (73, "icons8-snow-50.svg"),
            (75, "icons8-heavy-rain-50.svg"),
            (77, "icons8-sleet-50.svg"),
            (80, "icons8-rain-50.svg"),
            (81, "icons8-heavy-rain-50.svg"),
            (82, "icons8-heavy-rain-50-2.svg"),
            (85, "icons8-snow-50.svg"),
            (86, "icons8-snow-50.svg"),
            (95, "icons8-storm-50.svg"),
            (96, "icons8-stormy-weather-50.svg"),
            (99, "icons8-stormy-weather-50.svg"),
        ]);

        let descriptions = HashMap::from([
            (0, "Clear sky"),
            (1, "Mostly clear"),
            (2, "Partly cloudy"),
            (3, "Overcast"),
            (45, "Fog"),
            (48, "Fog"),
            (51, "Light drizzle"),
            (53, "Moderate drizzle"),
            (55, "Heavy drizzle"),
            (61, "Light rain"),
            (63, "Moderate rain"),
            (65, "Heavy rain"),
            (66, "Freezing rain"),
            (67, "Freezing rain"),
            (71, "Light snow"),
            (73, "Moderate snow"),
            (75, "Heavy snow"),
            (77, "Snow grains"),
            (80, "Light showers"),
            (81, "Moderate showers"),
            (82, "Heavy showers"),
            (85, "Snow showers"),
            (86, "Snow showers"),
            (95, "Thunderstorm"),
            (96, "Thunderstorm with hail"),
            (99, "Thunderstorm with heavy hail"),
        ]);

        CodeLookup { icons, descriptions }
    }

    /// Returns the icon filename for a weather code, with fallback
    ///
    /// # Arguments
    ///
    /// * 'code' - the weather condition code
    pub fn icon(&self, code: u32) -> &'static str {
        self.icons.get(&code).copied().unwrap_or(FALLBACK_ICON)
    }

    /// Returns the human description for a weather code, with fallback
    ///
    /// # Arguments
    ///
    /// * 'code' - the weather condition code
    pub fn description(&self, code: u32) -> &'static str {
        self.descriptions.get(&code).copied().unwrap_or(FALLBACK_DESCRIPTION)
    }
}
