//! Pluggable configuration sources.
//!
//! A source answers "do you have a value for this setting?". Resolution
//! consults sources in order and falls back to the built-in default, so
//! flag-driven and environment-driven deployments share one code path.

use std::collections::HashMap;
use std::path::PathBuf;

use clap::Parser;

use super::schema::{FileSettings, Setting};

pub trait ConfigSource {
    /// Short label used when logging where a value came from.
    fn name(&self) -> &'static str;
    fn lookup(&self, setting: Setting) -> Option<String>;
}

/// Command-line flags.
#[derive(Debug, Default, Parser)]
#[command(name = "meteo-exporter", about = "Republishes Open-Meteo current conditions as Prometheus gauges")]
pub struct FlagArgs {
    /// Latitude of location
    #[arg(long)]
    pub latitude: Option<String>,

    /// Longitude of location
    #[arg(long)]
    pub longitude: Option<String>,

    /// Timezone of location
    #[arg(long)]
    pub timezone: Option<String>,

    /// Comma-separated list of weather fields
    #[arg(long = "weather_fields")]
    pub weather_fields: Option<String>,

    /// Comma-separated list of air quality fields
    #[arg(long = "air_quality_fields")]
    pub air_quality_fields: Option<String>,

    /// Address of the /metrics listener
    #[arg(long)]
    pub listen: Option<String>,

    /// Optional YAML file with the same keys
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

impl FlagArgs {
    /// Parse after [`normalize_args`], so `-latitude 10` and `--latitude 10`
    /// are equivalent.
    pub fn parse_normalized<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::parse_from(normalize_args(args))
    }

    pub fn try_parse_normalized<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::try_parse_from(normalize_args(args))
    }
}

/// Rewrite single-dash long flags (`-latitude`, `-weather_fields=x`) to
/// their `--` form. Only known flag names are touched; the program name and
/// everything after a bare `--` pass through unchanged.
pub fn normalize_args<I, T>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let mut out = Vec::new();
    let mut passthrough = false;
    for (i, arg) in args.into_iter().map(Into::into).enumerate() {
        if i == 0 || passthrough {
            out.push(arg);
            continue;
        }
        if arg == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }
        let rewritten = arg
            .strip_prefix('-')
            .filter(|rest| !rest.starts_with('-'))
            .filter(|rest| is_long_flag(rest.split_once('=').map_or(*rest, |(name, _)| name)))
            .map(|rest| format!("--{rest}"));
        out.push(rewritten.unwrap_or(arg));
    }
    out
}

fn is_long_flag(name: &str) -> bool {
    name == "config" || Setting::ALL.iter().any(|s| s.key() == name)
}

impl ConfigSource for FlagArgs {
    fn name(&self) -> &'static str {
        "flag"
    }

    fn lookup(&self, setting: Setting) -> Option<String> {
        let v = match setting {
            Setting::Latitude => &self.latitude,
            Setting::Longitude => &self.longitude,
            Setting::Timezone => &self.timezone,
            Setting::WeatherFields => &self.weather_fields,
            Setting::AirQualityFields => &self.air_quality_fields,
            Setting::Listen => &self.listen,
        };
        v.clone()
    }
}

/// Environment variables (`LATITUDE`, `WEATHER_FIELDS`, ...).
pub struct EnvSource {
    vars: Box<dyn Fn(&str) -> Option<String> + Send + Sync>,
}

impl EnvSource {
    /// Reads the process environment.
    pub fn process() -> Self {
        Self {
            vars: Box::new(|k| std::env::var(k).ok()),
        }
    }

    /// Fixed variable set; keeps tests off the process environment.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map: HashMap<String, String> = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            vars: Box::new(move |k| map.get(k).cloned()),
        }
    }

    pub fn var(&self, key: &str) -> Option<String> {
        (self.vars)(key)
    }
}

impl ConfigSource for EnvSource {
    fn name(&self) -> &'static str {
        "env"
    }

    fn lookup(&self, setting: Setting) -> Option<String> {
        self.var(setting.env_var())
    }
}

/// Parsed YAML config file.
#[derive(Debug, Default)]
pub struct FileSource {
    settings: FileSettings,
}

impl FileSource {
    pub fn new(settings: FileSettings) -> Self {
        Self { settings }
    }
}

impl ConfigSource for FileSource {
    fn name(&self) -> &'static str {
        "file"
    }

    fn lookup(&self, setting: Setting) -> Option<String> {
        self.settings.get(setting).map(str::to_owned)
    }
}
