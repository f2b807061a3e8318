//! Camera domain: a follow camera that copies its pivot's position.
//!
//! Deliberately trivial: translation tracks the pivot with a fixed boom
//! offset, orientation stays put. No smoothing, no collision.

use bevy::prelude::*;

/// Marker for the entity the camera follows.
#[derive(Component, Debug)]
pub struct CameraPivot;

#[derive(Component, Debug)]
pub struct FollowCamera {
    pub offset: Vec3,
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera)
            .add_systems(Update, follow_pivot);
    }
}

fn spawn_camera(mut commands: Commands) {
    let offset = Vec3::new(0.0, 9.0, 7.0);
    commands.spawn((
        Camera3d::default(),
        FollowCamera { offset },
        Transform::from_translation(offset).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn follow_pivot(
    pivots: Query<&GlobalTransform, With<CameraPivot>>,
    mut cameras: Query<(&FollowCamera, &mut Transform)>,
) {
    let Ok(pivot) = pivots.single() else {
        return;
    };

    for (follow, mut transform) in &mut cameras {
        transform.translation = pivot.translation() + follow.offset;
    }
}
