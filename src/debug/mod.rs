//! Debug overlay for fast iteration (dev-tools feature).
//!
//! Draws the aim ray so facing resolution is visible while tuning.

use bevy::prelude::*;

use crate::locomotion::{Facing, Player};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, draw_aim_ray);
    }
}

fn draw_aim_ray(
    mut gizmos: Gizmos,
    players: Query<(&GlobalTransform, &Facing), With<Player>>,
) {
    for (transform, facing) in &players {
        // Zero facing means "no change this frame": fall back to the
        // persisted orientation so the ray never vanishes.
        let direction = if facing.0 != Vec3::ZERO {
            facing.0
        } else {
            *transform.forward()
        };

        let start = transform.translation() + Vec3::Y * 0.1;
        gizmos.line(start, start + direction * 10.0, Color::srgb(1.0, 0.2, 0.2));
    }
}
