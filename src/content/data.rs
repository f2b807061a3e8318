//! Content domain: deserializable definitions for data-driven tuning.

use serde::{Deserialize, Serialize};

use crate::locomotion::LocomotionTuning;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocomotionTuningDef {
    pub move_speed_scale: f32,
    pub jump_velocity: f32,
    pub gravity: f32,
}

impl From<LocomotionTuningDef> for LocomotionTuning {
    fn from(def: LocomotionTuningDef) -> Self {
        Self {
            move_speed_scale: def.move_speed_scale,
            jump_velocity: def.jump_velocity,
            gravity: def.gravity,
        }
    }
}
