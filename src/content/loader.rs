//! Loader for RON content files at startup.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use super::data::LocomotionTuningDef;
use crate::locomotion::LocomotionTuning;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Load a single RON struct from disk.
fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    ron_options()
        .from_str(&contents)
        .map_err(|e| ContentLoadError {
            file: file_name,
            message: format!("Parse error: {}", e),
        })
}

/// Load locomotion tuning from assets/data/locomotion.ron. Missing or
/// malformed data falls back to the built-in defaults.
pub(crate) fn setup_tuning(mut tuning: ResMut<LocomotionTuning>) {
    let path = Path::new("assets/data/locomotion.ron");

    match load_single_file::<LocomotionTuningDef>(path) {
        Ok(def) => {
            *tuning = def.into();
            info!(
                "Loaded locomotion tuning: speed_scale={}, jump={}, gravity={}",
                tuning.move_speed_scale, tuning.jump_velocity, tuning.gravity
            );
        }
        Err(e) => {
            warn!("{}, using default tuning", e);
        }
    }
}
