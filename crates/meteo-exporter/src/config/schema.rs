use std::net::SocketAddr;

use serde::{de::Error as _, Deserialize, Deserializer};

use meteo_core::error::{MeteoError, Result};
use meteo_core::{Location, Source};

/// Every value the exporter reads at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Setting {
    Latitude,
    Longitude,
    Timezone,
    WeatherFields,
    AirQualityFields,
    Listen,
}

impl Setting {
    pub const ALL: [Setting; 6] = [
        Setting::Latitude,
        Setting::Longitude,
        Setting::Timezone,
        Setting::WeatherFields,
        Setting::AirQualityFields,
        Setting::Listen,
    ];

    /// Flag / YAML key.
    pub fn key(self) -> &'static str {
        match self {
            Setting::Latitude => "latitude",
            Setting::Longitude => "longitude",
            Setting::Timezone => "timezone",
            Setting::WeatherFields => "weather_fields",
            Setting::AirQualityFields => "air_quality_fields",
            Setting::Listen => "listen",
        }
    }

    pub fn env_var(self) -> &'static str {
        match self {
            Setting::Latitude => "LATITUDE",
            Setting::Longitude => "LONGITUDE",
            Setting::Timezone => "TIMEZONE",
            Setting::WeatherFields => "WEATHER_FIELDS",
            Setting::AirQualityFields => "AIR_QUALITY_FIELDS",
            Setting::Listen => "LISTEN",
        }
    }

    pub fn default_value(self) -> &'static str {
        match self {
            Setting::Latitude => "42.6975",
            Setting::Longitude => "23.3241",
            Setting::Timezone => "Europe/Sofia",
            Setting::WeatherFields => "temperature_2m,apparent_temperature,relative_humidity_2m",
            Setting::AirQualityFields => "european_aqi,us_aqi,pm10,pm2_5",
            Setting::Listen => "0.0.0.0:8080",
        }
    }
}

/// Resolved configuration. Immutable after startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExporterConfig {
    pub latitude: String,
    pub longitude: String,
    pub timezone: String,
    pub weather_fields: String,
    pub air_quality_fields: String,
    pub listen: String,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            latitude: Setting::Latitude.default_value().into(),
            longitude: Setting::Longitude.default_value().into(),
            timezone: Setting::Timezone.default_value().into(),
            weather_fields: Setting::WeatherFields.default_value().into(),
            air_quality_fields: Setting::AirQualityFields.default_value().into(),
            listen: Setting::Listen.default_value().into(),
        }
    }
}

impl ExporterConfig {
    pub(crate) fn slot_mut(&mut self, setting: Setting) -> &mut String {
        match setting {
            Setting::Latitude => &mut self.latitude,
            Setting::Longitude => &mut self.longitude,
            Setting::Timezone => &mut self.timezone,
            Setting::WeatherFields => &mut self.weather_fields,
            Setting::AirQualityFields => &mut self.air_quality_fields,
            Setting::Listen => &mut self.listen,
        }
    }

    pub fn location(&self) -> Location<'_> {
        Location {
            latitude: &self.latitude,
            longitude: &self.longitude,
            timezone: &self.timezone,
        }
    }

    /// Comma-separated field list requested from `source`.
    pub fn fields(&self, source: Source) -> &str {
        match source {
            Source::Weather => &self.weather_fields,
            Source::AirQuality => &self.air_quality_fields,
        }
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen
            .parse()
            .map_err(|e| MeteoError::Config(format!("listen must be a valid SocketAddr ({}): {e}", self.listen)))
    }
}

/// On-disk YAML form. Every key is optional; unknown keys are rejected.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSettings {
    #[serde(default, deserialize_with = "scalar")]
    pub latitude: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub longitude: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub timezone: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub weather_fields: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub air_quality_fields: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub listen: Option<String>,
}

impl FileSettings {
    pub fn get(&self, setting: Setting) -> Option<&str> {
        match setting {
            Setting::Latitude => self.latitude.as_deref(),
            Setting::Longitude => self.longitude.as_deref(),
            Setting::Timezone => self.timezone.as_deref(),
            Setting::WeatherFields => self.weather_fields.as_deref(),
            Setting::AirQualityFields => self.air_quality_fields.as_deref(),
            Setting::Listen => self.listen.as_deref(),
        }
    }
}

/// Accept unquoted numbers (`latitude: 42.6975`) as well as strings.
fn scalar<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<Option<String>, D::Error> {
    match Option::<serde_yaml::Value>::deserialize(d)? {
        None | Some(serde_yaml::Value::Null) => Ok(None),
        Some(serde_yaml::Value::String(s)) => Ok(Some(s)),
        Some(serde_yaml::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!("expected a scalar, got {other:?}"))),
    }
}
