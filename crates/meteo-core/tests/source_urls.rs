#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use meteo_core::{metric_name, Location, Source};

const SOFIA: Location<'static> = Location {
    latitude: "42.6975",
    longitude: "23.3241",
    timezone: "Europe/Sofia",
};

#[test]
fn weather_url_places_every_value() {
    let url = Source::Weather.request_url(&SOFIA, "temperature_2m,relative_humidity_2m");
    assert_eq!(
        url,
        "https://api.open-meteo.com/v1/forecast?latitude=42.6975&longitude=23.3241\
         &current=temperature_2m,relative_humidity_2m&timezone=Europe/Sofia"
    );
}

#[test]
fn air_quality_url_shares_query_shape() {
    let url = Source::AirQuality.request_url(&SOFIA, "pm10,pm2_5");
    let (base, query) = url.split_once('?').expect("query");
    assert_eq!(base, "https://air-quality-api.open-meteo.com/v1/air-quality");

    let pairs: Vec<(&str, &str)> = query
        .split('&')
        .map(|kv| kv.split_once('=').expect("key=value"))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("latitude", "42.6975"),
            ("longitude", "23.3241"),
            ("current", "pm10,pm2_5"),
            ("timezone", "Europe/Sofia"),
        ]
    );
}

#[test]
fn values_are_not_validated() {
    let loc = Location { latitude: "north", longitude: "", timezone: "Mars/Olympus" };
    let url = Source::Weather.request_url(&loc, "bogus_field");
    assert!(url.contains("latitude=north&longitude=&current=bogus_field&timezone=Mars/Olympus"));
}

#[test]
fn prefixes_keep_sources_apart() {
    assert_eq!(metric_name(Source::Weather.prefix(), "pm2.5"), "t_pm2_5");
    assert_eq!(metric_name(Source::AirQuality.prefix(), "pm2.5"), "a_pm2_5");
}

#[test]
fn help_names_field_and_source() {
    assert_eq!(Source::Weather.help("temperature_2m"), "Current temperature_2m from Open-Meteo");
    assert_eq!(
        Source::AirQuality.help("us_aqi"),
        "Current us_aqi from Open-Meteo Air Quality API"
    );
}
