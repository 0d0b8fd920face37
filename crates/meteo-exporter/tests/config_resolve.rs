#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use meteo_core::Source;
use meteo_exporter::config::{self, normalize_args, EnvSource, ExporterConfig, FileSource, FlagArgs};

fn flags(args: &[&str]) -> FlagArgs {
    let mut argv = vec!["meteo-exporter"];
    argv.extend_from_slice(args);
    FlagArgs::try_parse_normalized(argv).expect("flags parse")
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = config::resolve(&[&FlagArgs::default(), &EnvSource::from_pairs(Vec::<(String, String)>::new())]);
    assert_eq!(cfg, ExporterConfig::default());
    assert_eq!(cfg.latitude, "42.6975");
    assert_eq!(cfg.longitude, "23.3241");
    assert_eq!(cfg.timezone, "Europe/Sofia");
    assert_eq!(cfg.weather_fields, "temperature_2m,apparent_temperature,relative_humidity_2m");
    assert_eq!(cfg.air_quality_fields, "european_aqi,us_aqi,pm10,pm2_5");
    assert_eq!(cfg.listen_addr().unwrap().port(), 8080);
}

#[test]
fn flags_variant() {
    let f = flags(&["--latitude", "48.2", "--weather_fields", "temperature_2m", "--timezone", "Europe/Vienna"]);
    let cfg = config::resolve(&[&f]);
    assert_eq!(cfg.latitude, "48.2");
    assert_eq!(cfg.longitude, "23.3241");
    assert_eq!(cfg.timezone, "Europe/Vienna");
    assert_eq!(cfg.fields(Source::Weather), "temperature_2m");
    assert_eq!(cfg.fields(Source::AirQuality), "european_aqi,us_aqi,pm10,pm2_5");
}

#[test]
fn single_dash_flags_are_accepted() {
    let f = flags(&["-latitude", "10", "-weather_fields=x", "-air_quality_fields", "pm10", "--timezone=UTC"]);
    let cfg = config::resolve(&[&f]);
    assert_eq!(cfg.latitude, "10");
    assert_eq!(cfg.weather_fields, "x");
    assert_eq!(cfg.air_quality_fields, "pm10");
    assert_eq!(cfg.timezone, "UTC");
}

#[test]
fn normalize_leaves_other_args_alone() {
    let out = normalize_args(["-latitude", "-c", "cfg.yaml", "-bogus", "-longitude=-3.5", "--", "-timezone"]);
    assert_eq!(
        out,
        vec!["-latitude", "-c", "cfg.yaml", "-bogus", "--longitude=-3.5", "--", "-timezone"]
    );
}

#[test]
fn unknown_single_dash_flag_still_fails() {
    assert!(FlagArgs::try_parse_normalized(["meteo-exporter", "-bogus", "1"]).is_err());
}

#[test]
fn env_variant() {
    let env = EnvSource::from_pairs([("LONGITUDE", "16.37"), ("AIR_QUALITY_FIELDS", "pm10")]);
    let cfg = config::resolve(&[&env]);
    assert_eq!(cfg.latitude, "42.6975");
    assert_eq!(cfg.longitude, "16.37");
    assert_eq!(cfg.air_quality_fields, "pm10");
}

#[test]
fn empty_override_falls_through() {
    let f = flags(&["--latitude", ""]);
    let env = EnvSource::from_pairs([("LATITUDE", ""), ("TIMEZONE", "UTC")]);
    let cfg = config::resolve(&[&f, &env]);
    assert_eq!(cfg.latitude, "42.6975");
    assert_eq!(cfg.timezone, "UTC");
}

#[test]
fn flags_beat_env_beat_file() {
    let f = flags(&["--latitude", "1"]);
    let env = EnvSource::from_pairs([("LATITUDE", "2"), ("LONGITUDE", "2")]);
    let file = config::load_from_str("latitude: 3\nlongitude: 3\ntimezone: Asia/Tokyo\n").unwrap();
    let cfg = config::resolve(&[&f, &env, &file]);
    assert_eq!(cfg.latitude, "1");
    assert_eq!(cfg.longitude, "2");
    assert_eq!(cfg.timezone, "Asia/Tokyo");
}

#[test]
fn values_pass_through_unvalidated() {
    let env = EnvSource::from_pairs([("LATITUDE", "999"), ("TIMEZONE", "Not/AZone"), ("WEATHER_FIELDS", "nope")]);
    let cfg = config::resolve(&[&env]);
    assert_eq!(cfg.latitude, "999");
    assert_eq!(cfg.timezone, "Not/AZone");
    assert_eq!(cfg.weather_fields, "nope");
}

#[test]
fn yaml_rejects_unknown_keys() {
    let bad = r#"
latitude: "42.0"
wether_fields: "temperature_2m" # typo should fail
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code(), "CONFIG");
}

#[test]
fn yaml_accepts_numbers_and_strings() {
    let file: FileSource = config::load_from_str("latitude: 42.6975\nlongitude: \"23.3241\"\nlisten: 127.0.0.1:9100\n").unwrap();
    let cfg = config::resolve(&[&file]);
    assert_eq!(cfg.latitude, "42.6975");
    assert_eq!(cfg.longitude, "23.3241");
    assert_eq!(cfg.listen_addr().unwrap().port(), 9100);
}

#[test]
fn yaml_rejects_nested_values() {
    let err = config::load_from_str("latitude: [1, 2]\n").expect_err("must fail");
    assert_eq!(err.code(), "CONFIG");
}

#[test]
fn load_reads_file_named_by_env() {
    let path = std::env::temp_dir().join(format!("meteo-exporter-cfg-{}.yaml", std::process::id()));
    std::fs::write(&path, "timezone: America/Chicago\nweather_fields: temperature_2m\n").unwrap();

    let env = EnvSource::from_pairs([
        ("EXPORTER_CONFIG", path.to_string_lossy().into_owned()),
        ("WEATHER_FIELDS", "relative_humidity_2m".to_string()),
    ]);
    let cfg = config::load(&FlagArgs::default(), &env).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(cfg.timezone, "America/Chicago");
    assert_eq!(cfg.weather_fields, "relative_humidity_2m");
}

#[test]
fn load_fails_on_missing_file() {
    let f = flags(&["--config", "/nonexistent/meteo-exporter.yaml"]);
    let err = config::load(&f, &EnvSource::from_pairs(Vec::<(String, String)>::new())).expect_err("must fail");
    assert_eq!(err.code(), "CONFIG");
}

#[test]
fn load_fails_on_bad_listen() {
    let env = EnvSource::from_pairs([("LISTEN", "not-an-addr")]);
    let err = config::load(&FlagArgs::default(), &env).expect_err("must fail");
    assert_eq!(err.code(), "CONFIG");
}
