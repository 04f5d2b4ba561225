//! Derived labels shown next to the raw readings

/// Map a WMO weather interpretation code to a short label
pub fn weather_description(code: Option<i32>) -> &'static str {
    match code {
        Some(0) => "Clear Sky",
        Some(1..=3) => "Partly Cloudy",
        Some(45..=48) => "Foggy",
        Some(51..=67) => "Rainy",
        Some(71..=77) => "Snowy",
        Some(80..=82) => "Showers",
        Some(c) if c >= 95 => "Thunderstorm",
        _ => "Unknown",
    }
}

/// Pick the dominant pollutant from current concentrations.
/// Defaults to PM2.5 when nothing exceeds its threshold.
pub fn main_pollutant(pm2_5: Option<f64>, pm10: Option<f64>, ozone: Option<f64>) -> &'static str {
    let exceeds = |value: Option<f64>, limit: f64| value.is_some_and(|v| v > limit);

    if exceeds(pm2_5, 50.0) {
        "PM2.5"
    } else if exceeds(pm10, 100.0) {
        "PM10"
    } else if exceeds(ozone, 100.0) {
        "Ozone"
    } else {
        "PM2.5"
    }
}

/// Health advice for a US AQI value; a missing reading counts as zero
pub fn air_quality_insight(aqi: Option<f64>) -> &'static str {
    let aqi = aqi.unwrap_or(0.0);

    if aqi < 50.0 {
        "Air quality is excellent. Great time for outdoor activities! 🏃‍♂️"
    } else if aqi < 100.0 {
        "Air quality is moderate. Sensitive individuals should consider reducing heavy exertion."
    } else if aqi < 150.0 {
        "Unhealthy for Sensitive Groups. It's a good idea to wear a mask if you have asthma."
    } else {
        "Health Alert: High pollution levels detected. Avoid outdoor activities and use air purifiers indoors 😷."
    }
}

/// Uppercase the first character ("hospital" -> "Hospital")
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
