//! Locomotion domain: player bootstrap.
//!
//! The character bundle is assembled in exactly one place. A character
//! missing a locomotion component never matches the integrator's query, so
//! a malformed spawn is a bug here, not a per-step condition.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::animation::{LocomotionBlend, RootMotionSource};
use crate::camera::CameraPivot;
use crate::locomotion::{
    AimState, Facing, GameLayer, MotionState, Player, RigAccumulator, RigVisual,
};

const CAPSULE_RADIUS: f32 = 0.4;
const CAPSULE_LENGTH: f32 = 1.0;

pub(crate) fn spawn_player(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    info!("Spawning player character");

    commands
        .spawn((
            // Identity & locomotion state
            (
                Player,
                Facing::default(),
                AimState::default(),
                MotionState::default(),
                RigAccumulator::default(),
                CameraPivot,
            ),
            // Animation collaborator surface
            (LocomotionBlend::default(), RootMotionSource::default()),
            Transform::from_xyz(0.0, 1.0, 0.0),
            Visibility::default(),
            // Physics: avian resolves our velocity against collisions; we
            // integrate gravity ourselves
            (
                RigidBody::Dynamic,
                Collider::capsule(CAPSULE_RADIUS, CAPSULE_LENGTH),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(0.0),
                Friction::new(0.0),
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
            ),
        ))
        .with_children(|parent| {
            parent.spawn((
                RigVisual,
                Mesh3d(meshes.add(Capsule3d::new(CAPSULE_RADIUS, CAPSULE_LENGTH))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::srgb(0.9, 0.9, 0.9),
                    ..default()
                })),
                Transform::default(),
            ));
        });
}
