use derive_more::{Deref, From};
use directories::ProjectDirs;
use palette::Srgb;
use serde::Deserialize;
use serde_with::DeserializeFromStr;
use silk::color::Rgb;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, DeserializeFromStr, Deref, From)]
pub struct HexColor(pub Rgb);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid colour '{0}', expected #RRGGBB")]
pub struct ParseColorError(String);

impl FromStr for HexColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<Srgb<u8>>()
            .map(HexColor)
            .map_err(|_| ParseColorError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub count: usize,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: silk::particles::PARTICLE_COUNT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub delay_ms: u64,
}

impl AuthConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            delay_ms: silk::auth::AUTH_DELAY.as_millis() as u64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub user_name: String,
    pub accent: HexColor,
    pub particles: ParticleConfig,
    pub auth: AuthConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_name: "John".to_string(),
            accent: HexColor(silk::color::PINK_ACCENT),
            particles: ParticleConfig::default(),
            auth: AuthConfig::default(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("com", "spiderapp", "spider").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from(path.to_path_buf()).required(false))
        .add_source(
            config::Environment::with_prefix("SPIDER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default(path: &Path) -> Config {
    match load_config(path) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Using default configuration: {}", e);
            Config::default()
        }
    }
}

pub fn write_default_config(path: &Path) -> std::io::Result<PathBuf> {
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(path, DEFAULT_CONFIG)?;
    }
    Ok(path.to_path_buf())
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[cfg(test)]
mod tests {
    use super::*;
    use silk::color::hex;

    fn temp_config(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("spider-test-{}", std::process::id()));
        fs_err::create_dir_all(&dir).unwrap();
        let path = dir.join(format!("{name}.toml"));
        fs_err::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_hex_color_deserialization() {
        let cases = vec![
            ("\"#FF4081\"", hex(0xFF4081)),
            ("\"#ff4081\"", hex(0xFF4081)),
            ("\"1A237E\"", hex(0x1A237E)),
            ("\" #AD1457 \"", hex(0xAD1457)),
        ];

        for (json, expected) in cases {
            let deserialized: HexColor = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, HexColor(expected));
        }

        assert!(serde_json::from_str::<HexColor>("\"pink\"").is_err());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let cfg: Config = serde_json::from_str(r#"{ "user_name": "Ada" }"#).unwrap();
        assert_eq!(cfg.user_name, "Ada");
        assert_eq!(cfg.particles, ParticleConfig::default());
        assert_eq!(cfg.auth.delay(), silk::auth::AUTH_DELAY);
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = std::env::temp_dir().join("spider-no-such-dir/config.toml");
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.particles.count, silk::particles::PARTICLE_COUNT);
    }

    #[test]
    fn test_load_toml_file() {
        let path = temp_config(
            "custom",
            concat!(
                "user_name = \"Grace\"\n",
                "accent = \"#00FF00\"\n",
                "[particles]\ncount = 12\n",
                "[auth]\ndelay_ms = 250\n",
            ),
        );
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.user_name, "Grace");
        assert_eq!(cfg.accent, HexColor(hex(0x00FF00)));
        assert_eq!(cfg.particles.count, 12);
        assert_eq!(cfg.auth.delay(), Duration::from_millis(250));
    }

    #[test]
    fn test_missing_accent_is_pink() {
        let path = temp_config("no-accent", "user_name = \"Ada\"\n");
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.user_name, "Ada");
        assert_eq!(cfg.accent, HexColor(silk::color::PINK_ACCENT));
    }

    #[test]
    fn test_default_file_matches_defaults() {
        let path = temp_config("default", DEFAULT_CONFIG);
        assert_eq!(load_config(&path).unwrap(), Config::default());
    }
}
