//! Upstream Open-Meteo data sources.

use std::fmt;

/// Location parameters shared by every request.
///
/// Values are passed to the upstream API verbatim; nothing here checks that
/// the coordinates are in range or that the timezone exists.
#[derive(Debug, Clone, Copy)]
pub struct Location<'a> {
    pub latitude: &'a str,
    pub longitude: &'a str,
    pub timezone: &'a str,
}

/// One polled API. Each source owns a metric prefix so the two registries can
/// never produce the same metric name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    Weather,
    AirQuality,
}

impl Source {
    pub const ALL: [Source; 2] = [Source::Weather, Source::AirQuality];

    pub fn prefix(self) -> &'static str {
        match self {
            Source::Weather => "T",
            Source::AirQuality => "A",
        }
    }

    pub fn base_url(self) -> &'static str {
        match self {
            Source::Weather => "https://api.open-meteo.com/v1/forecast",
            Source::AirQuality => "https://air-quality-api.open-meteo.com/v1/air-quality",
        }
    }

    /// Help text attached to a gauge the first time `field` is seen.
    pub fn help(self, field: &str) -> String {
        match self {
            Source::Weather => format!("Current {field} from Open-Meteo"),
            Source::AirQuality => format!("Current {field} from Open-Meteo Air Quality API"),
        }
    }

    /// `<base>?latitude=..&longitude=..&current=<fields>&timezone=..`
    pub fn request_url(self, loc: &Location<'_>, fields: &str) -> String {
        format!(
            "{}?latitude={}&longitude={}&current={}&timezone={}",
            self.base_url(),
            loc.latitude,
            loc.longitude,
            fields,
            loc.timezone
        )
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Source::Weather => "weather",
            Source::AirQuality => "air quality",
        })
    }
}
