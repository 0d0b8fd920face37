//! Exporter config resolution (flags > env > YAML file > defaults).

pub mod schema;
pub mod sources;

use std::fs;
use std::path::Path;

use meteo_core::error::{MeteoError, Result};

pub use schema::{ExporterConfig, FileSettings, Setting};
pub use sources::{normalize_args, ConfigSource, EnvSource, FileSource, FlagArgs};

/// Names the YAML file when `--config` is not given.
pub const CONFIG_FILE_ENV: &str = "EXPORTER_CONFIG";

pub fn load_from_file(path: &Path) -> Result<FileSource> {
    let s = fs::read_to_string(path)
        .map_err(|e| MeteoError::Config(format!("read config {} failed: {e}", path.display())))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<FileSource> {
    let settings: FileSettings =
        serde_yaml::from_str(s).map_err(|e| MeteoError::Config(format!("invalid yaml: {e}")))?;
    Ok(FileSource::new(settings))
}

/// First present, non-empty value per setting wins; otherwise the default.
pub fn resolve(sources: &[&dyn ConfigSource]) -> ExporterConfig {
    let mut cfg = ExporterConfig::default();
    for setting in Setting::ALL {
        let hit = sources.iter().find_map(|src| {
            src.lookup(setting)
                .filter(|v| !v.is_empty())
                .map(|v| (src.name(), v))
        });
        match hit {
            Some((origin, value)) => {
                tracing::debug!(setting = setting.key(), origin, "setting overridden");
                *cfg.slot_mut(setting) = value;
            }
            None => tracing::debug!(setting = setting.key(), "setting defaulted"),
        }
    }
    cfg
}

/// Startup composition: flags, then environment, then the optional YAML
/// file named by `--config` or `EXPORTER_CONFIG`.
pub fn load(flags: &FlagArgs, env: &EnvSource) -> Result<ExporterConfig> {
    let file_path = flags
        .config
        .clone()
        .or_else(|| env.var(CONFIG_FILE_ENV).filter(|p| !p.is_empty()).map(Into::into));

    let file = match file_path {
        Some(path) => load_from_file(&path)?,
        None => FileSource::default(),
    };

    let cfg = resolve(&[flags, env, &file]);
    cfg.listen_addr()?;
    Ok(cfg)
}
