//! Locomotion domain: aim resolution and fixed-step motion integration.
//!
//! Two cadences: the aim resolver runs once per rendered frame (`Update`),
//! the motion integrator once per physics step (`FixedUpdate`). The `Facing`
//! component and the jump latch in `LocomotionInput` are the only state
//! shared across the two; Bevy runs the schedules non-overlapping, which is
//! the sequencing guarantee that stands in for a lock.

mod bootstrap;
mod components;
#[cfg(feature = "dev-tools")]
mod dev;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{
    AimState, Facing, GameLayer, Ground, MotionState, Player, RigAccumulator, RigVisual,
};
pub use resources::{LocomotionInput, LocomotionTuning};

use bevy::prelude::*;

use crate::locomotion::bootstrap::spawn_player;
use crate::locomotion::systems::{detect_ground, integrate_step, read_input, resolve_aim};

/// Fixed-step phases. Ground probing must see the transform left by the
/// previous physics resolution before the integrator consumes it.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocomotionSet {
    Probe,
    Integrate,
}

pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocomotionTuning>()
            .init_resource::<LocomotionInput>()
            .configure_sets(
                FixedUpdate,
                (LocomotionSet::Probe, LocomotionSet::Integrate).chain(),
            )
            .add_systems(Startup, spawn_player)
            .add_systems(Update, (read_input, resolve_aim).chain())
            .add_systems(FixedUpdate, detect_ground.in_set(LocomotionSet::Probe))
            .add_systems(FixedUpdate, integrate_step.in_set(LocomotionSet::Integrate));

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, dev::spawn_test_arena);
    }
}
