//! Content domain: RON-backed tuning loaded at startup.

mod data;
mod loader;


use bevy::prelude::*;

use crate::content::loader::setup_tuning;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, setup_tuning);
    }
}
