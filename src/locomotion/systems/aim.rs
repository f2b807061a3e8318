//! Locomotion domain: per-frame aim resolution.

use bevy::prelude::*;

use crate::locomotion::{AimState, Facing, LocomotionInput, Player};

/// Pointer movement below this (in viewport pixels) counts as "did not move".
const POINTER_EPSILON: f32 = 1e-4;

/// Resolve the facing direction from the available input signals.
///
/// Priority: directional look input (explicit intent) over pointer movement
/// (edge-triggered on actual movement) over the zero sentinel ("no change",
/// the previous facing persists). Total over all inputs.
pub(crate) fn resolve_facing(look: Vec2, pointer: Vec2, projected: Vec2, last_pointer: Vec2) -> Vec3 {
    if look != Vec2::ZERO {
        return look_facing(look);
    }

    if !pointer.abs_diff_eq(last_pointer, POINTER_EPSILON) {
        // Turn to put the screen projection between the character and the
        // cursor, matching the "aim toward cursor" sign convention.
        let screen_dir = (projected - pointer).normalize_or_zero();
        return Vec3::new(screen_dir.x, 0.0, screen_dir.y);
    }

    Vec3::ZERO
}

/// Map the 2D look input onto the horizontal plane.
pub(crate) fn look_facing(look: Vec2) -> Vec3 {
    -Vec3::new(look.x, 0.0, look.y).normalize_or_zero()
}

/// Write policy for the facing mailbox. `Update` can run several times
/// between fixed steps, so the zero sentinel must not overwrite a resolved
/// direction that no integrator step has consumed yet: a flick resolved in
/// one frame has to survive idle frames until the next physics step.
pub(crate) fn latch_facing(current: Vec3, resolved: Vec3) -> Vec3 {
    if resolved == Vec3::ZERO {
        current
    } else {
        resolved
    }
}

/// Thin adapter: projects the character into the viewport and latches any
/// non-zero resolution into the `Facing` mailbox.
pub(crate) fn resolve_aim(
    input: Res<LocomotionInput>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    mut players: Query<(&GlobalTransform, &mut AimState, &mut Facing), With<Player>>,
) {
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };

    for (player_transform, mut aim, mut facing) in &mut players {
        let projected = camera
            .world_to_viewport(camera_transform, player_transform.translation())
            .ok();

        let resolved = match projected {
            Some(projected) => {
                resolve_facing(input.look_axis, input.pointer, projected, aim.last_pointer)
            }
            // Character off-screen: the pointer carries no usable direction
            None => look_facing(input.look_axis),
        };

        facing.0 = latch_facing(facing.0, resolved);
        aim.last_pointer = input.pointer;
    }
}
