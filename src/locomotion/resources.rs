//! Locomotion domain: tuning and input resources.

use bevy::prelude::*;

/// Locomotion tuning, immutable after content load.
#[derive(Resource, Debug, Clone)]
pub struct LocomotionTuning {
    /// Playback/blend scale fed to the animation tree. Deliberately a
    /// configured constant rather than derived from input magnitude, so
    /// playback speed stays decoupled from control input.
    pub move_speed_scale: f32,
    /// Upward speed applied on a grounded jump (m/s)
    pub jump_velocity: f32,
    /// Downward acceleration magnitude (m/s²)
    pub gravity: f32,
}

impl Default for LocomotionTuning {
    fn default() -> Self {
        Self {
            move_speed_scale: 1.5,
            jump_velocity: 4.5,
            gravity: 9.8,
        }
    }
}

/// Frame-sampled input, shared with the fixed-step integrator.
///
/// Axes are dead-zone filtered and normalized to [-1, 1] per axis.
/// `jump_pressed` is a latch: set on the press edge during `Update`, cleared
/// by the integrator when consumed, so a press landing between two fixed
/// steps is neither lost nor applied twice.
#[derive(Resource, Debug, Default)]
pub struct LocomotionInput {
    pub move_axis: Vec2,
    pub look_axis: Vec2,
    pub pointer: Vec2,
    pub jump_pressed: bool,
}
