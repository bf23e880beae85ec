use clockface::StyleConstants;
use directories::ProjectDirs;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use std::path::{Path, PathBuf};
use strum::{Display as StrumDisplay, EnumString};
use thiserror::Error;

/// Screen corner the clock is pinned to.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Corner {
    #[strum(serialize = "TopLeft", serialize = "top-left", serialize = "tl", serialize = "nw")]
    TopLeft,
    #[default]
    #[strum(serialize = "TopRight", serialize = "top-right", serialize = "tr", serialize = "ne")]
    TopRight,
    #[strum(
        serialize = "BottomLeft",
        serialize = "bottom-left",
        serialize = "bl",
        serialize = "sw"
    )]
    BottomLeft,
    #[strum(
        serialize = "BottomRight",
        serialize = "bottom-right",
        serialize = "br",
        serialize = "se"
    )]
    BottomRight,
}

pub const DEFAULT_HOVER_OPACITY: f64 = 0.2;
pub const DEFAULT_MARGIN: i32 = 24;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Window opacity while the pointer is over the clock.
    pub hover_opacity: f64,
    pub corner: Corner,
    pub margin: i32,
    /// Digital time under the dial.
    pub show_readout: bool,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            hover_opacity: DEFAULT_HOVER_OPACITY,
            corner: Corner::default(),
            margin: DEFAULT_MARGIN,
            show_readout: true,
        }
    }
}

impl ClockConfig {
    pub fn hover_opacity(&self) -> f64 {
        if self.hover_opacity.is_finite() {
            self.hover_opacity.clamp(0.0, 1.0)
        } else {
            DEFAULT_HOVER_OPACITY
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub clock: ClockConfig,
    #[serde(default)]
    pub style: StyleConstants,
}

impl Config {
    /// The configured style, or the stock one if the file asks for
    /// something the layout cannot draw.
    pub fn effective_style(&self) -> StyleConstants {
        match self.style.validate() {
            Ok(()) => self.style,
            Err(e) => {
                log::error!("Ignoring [style] overrides: {}", e);
                StyleConstants::default()
            }
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

pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "troia", "analog")
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = project_dirs().ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&get_config_path()?)
}

pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix("ANALOG")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(s.try_deserialize()?)
}

/// Loads the user config, writing the commented template on first run.
pub fn load_or_setup() -> Config {
    if let Ok(path) = get_config_path()
        && !path.exists()
    {
        match write_default_config() {
            Ok(path) => log::info!("Wrote default config to {}", path.display()),
            Err(e) => log::warn!("Could not write default config: {}", e),
        }
    }

    load_config().unwrap_or_else(|e| {
        log::error!("Failed to load config, using defaults: {}", e);
        Config::default()
    })
}

pub fn write_default_config() -> std::io::Result<PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

use crate::events::AppEvent;
use async_channel::Sender;

fn touches_config(event: &Event, config_path: &Path) -> bool {
    matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    ) && event.paths.iter().any(|p| p == config_path)
}

pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    let config_path = match get_config_path() {
        Ok(p) => p,
        Err(e) => {
            log::error!("Config watcher error: {}", e);
            return;
        }
    };
    let Some(config_dir) = config_path.parent().map(Path::to_path_buf) else {
        return;
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", e);
            return;
        }
    };

    // Editors replace the file instead of writing in place, so watch the
    // directory rather than the file.
    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                if touches_config(&event, &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{AccessKind, CreateKind};

    #[test]
    fn test_corner_deserialization() {
        let cases = vec![
            ("\"topright\"", Corner::TopRight),
            ("\"TopRight\"", Corner::TopRight),
            ("\"top-right\"", Corner::TopRight),
            ("\"NE\"", Corner::TopRight),
            ("\"bl\"", Corner::BottomLeft),
            ("\"BOTTOM-RIGHT\"", Corner::BottomRight),
            ("\"nw\"", Corner::TopLeft),
        ];

        for (json, expected) in cases {
            let deserialized: Corner = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }

        assert!(serde_json::from_str::<Corner>("\"center\"").is_err());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let cfg: Config = serde_json::from_str(
            r#"{ "clock": { "corner": "bl" }, "style": { "small_clock_scale": 2.0 } }"#,
        )
        .unwrap();
        assert_eq!(cfg.clock.corner, Corner::BottomLeft);
        assert_eq!(cfg.clock.margin, DEFAULT_MARGIN);
        assert_eq!(cfg.clock.hover_opacity, DEFAULT_HOVER_OPACITY);
        assert!(cfg.clock.show_readout);
        assert_eq!(cfg.style.small_clock_scale, 2.0);
        assert_eq!(
            cfg.style.hide_numbers_threshold,
            StyleConstants::default().hide_numbers_threshold
        );
    }

    #[test]
    fn test_invalid_style_falls_back() {
        let mut cfg = Config::default();
        cfg.style.pin.min = -1.0;
        assert_eq!(cfg.effective_style(), StyleConstants::default());

        cfg.style = StyleConstants {
            small_clock_scale: 2.0,
            ..Default::default()
        };
        assert_eq!(cfg.effective_style().small_clock_scale, 2.0);
    }

    #[test]
    fn test_hover_opacity_is_clamped() {
        let mut clock = ClockConfig {
            hover_opacity: 1.7,
            ..Default::default()
        };
        assert_eq!(clock.hover_opacity(), 1.0);
        clock.hover_opacity = f64::NAN;
        assert_eq!(clock.hover_opacity(), DEFAULT_HOVER_OPACITY);
    }

    #[test]
    fn test_default_template_parses() {
        let path = std::env::temp_dir().join(format!(
            "analog-config-test-{}.toml",
            std::process::id()
        ));
        fs_err::write(&path, DEFAULT_CONFIG).unwrap();
        let cfg = load_config_from(&path).unwrap();
        fs_err::remove_file(&path).unwrap();

        assert_eq!(cfg.clock, ClockConfig::default());
        assert_eq!(cfg.style, StyleConstants::default());
    }

    #[test]
    fn test_only_config_file_events_count() {
        let path = PathBuf::from("/tmp/analog/config.toml");
        let hit = Event::new(EventKind::Create(CreateKind::File)).add_path(path.clone());
        let other = Event::new(EventKind::Create(CreateKind::File))
            .add_path(PathBuf::from("/tmp/analog/other.toml"));
        let access = Event::new(EventKind::Access(AccessKind::Any)).add_path(path.clone());

        assert!(touches_config(&hit, &path));
        assert!(!touches_config(&other, &path));
        assert!(!touches_config(&access, &path));
    }
}
