//! Locomotion domain: ground detection for the fixed-step integrator.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::{GameLayer, MotionState, Player};

/// Extra probe length below the capsule so small separations still count as
/// ground contact.
const GROUND_PROBE_MARGIN: f32 = 0.1;

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &Collider, &mut MotionState), With<Player>>,
) {
    // Only walkable surfaces count; other actors and sensors do not
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, collider, mut state) in &mut query {
        let was_grounded = state.grounded;

        let half_height = match collider.shape_scaled().as_capsule() {
            Some(c) => c.half_height() + c.radius,
            None => 0.9,
        };

        let hit = spatial_query.cast_ray(
            transform.translation,
            Dir3::NEG_Y,
            half_height + GROUND_PROBE_MARGIN,
            true,
            &ground_filter,
        );

        state.grounded = hit.is_some();

        if state.grounded && !was_grounded {
            debug!("Landed at y={}", transform.translation.y);
        } else if !state.grounded && was_grounded {
            debug!("Left ground at y={}", transform.translation.y);
        }
    }
}
