use crate::config::project_dirs;
use clockface::Radius;
use derive_more::{Deref, Display, Into};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_SIZE: f64 = 300.0;
pub const MIN_SIZE: f64 = 100.0;
pub const MAX_SIZE: f64 = 500.0;
pub const SIZE_STEP: f64 = 10.0;

/// Clock diameter in pixels, always on the `SIZE_STEP` grid within
/// `MIN_SIZE..=MAX_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Display, Deref, Into)]
#[serde(from = "f64", into = "f64")]
pub struct SizePreference(f64);

impl SizePreference {
    pub fn new(diameter: f64) -> Self {
        if !diameter.is_finite() {
            return Self::default();
        }
        let snapped = (diameter / SIZE_STEP).round() * SIZE_STEP;
        Self(snapped.clamp(MIN_SIZE, MAX_SIZE))
    }

    pub fn get(self) -> f64 {
        self.0
    }

    pub fn pixels(self) -> i32 {
        self.0 as i32
    }

    pub fn radius(self) -> Radius {
        Radius::new(self.0 / 2.0)
    }
}

impl Default for SizePreference {
    fn default() -> Self {
        Self(DEFAULT_SIZE)
    }
}

impl From<f64> for SizePreference {
    fn from(diameter: f64) -> Self {
        Self::new(diameter)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeChange {
    Grow,
    Shrink,
    Set(f64),
}

impl SizeChange {
    pub fn apply(self, current: SizePreference) -> SizePreference {
        match self {
            Self::Grow => SizePreference::new(current.get() + SIZE_STEP),
            Self::Shrink => SizePreference::new(current.get() - SIZE_STEP),
            Self::Set(diameter) => SizePreference::new(diameter),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub size: SizePreference,
}

#[derive(Error, Debug)]
pub enum PrefsError {
    #[error("Failed to determine data directory")]
    DataDirNotFound,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed preferences: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn get_prefs_path() -> Result<PathBuf, PrefsError> {
    let proj_dirs = project_dirs().ok_or(PrefsError::DataDirNotFound)?;
    Ok(proj_dirs.data_dir().join("preferences.json"))
}

pub fn load_from(path: &Path) -> Result<Preferences, PrefsError> {
    if !path.exists() {
        return Ok(Preferences::default());
    }
    let contents = fs_err::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

pub fn save_to(path: &Path, prefs: &Preferences) -> Result<(), PrefsError> {
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    fs_err::write(path, serde_json::to_string_pretty(prefs)?)?;
    Ok(())
}

pub fn load() -> Preferences {
    get_prefs_path()
        .and_then(|path| load_from(&path))
        .unwrap_or_else(|e| {
            log::warn!("Failed to load preferences, using defaults: {}", e);
            Preferences::default()
        })
}

pub fn save(prefs: &Preferences) -> Result<(), PrefsError> {
    save_to(&get_prefs_path()?, prefs)
}
