//! Locomotion domain: the per-physics-step motion integrator.
//!
//! One state transition per fixed step: apply facing, feed the blend tree,
//! extract root-motion displacement, compose gravity and jump into a
//! velocity, and hand it to the physics layer for collision-resolved
//! displacement. The root-motion accumulator is consumed-then-reset every
//! step so displacement is never applied twice.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::animation::{LocomotionBlend, RootMotionSource};
use crate::locomotion::{
    Facing, LocomotionInput, LocomotionTuning, MotionState, Player, RigAccumulator, RigVisual,
};

/// Rotate the move input by the character's world basis and project the
/// result onto the 2D blend plane.
pub(crate) fn blend_position(basis: Quat, move_axis: Vec2) -> Vec2 {
    let world_move = basis * Vec3::new(move_axis.x, 0.0, -move_axis.y);
    Vec2::new(world_move.x, world_move.z)
}

/// Vertical velocity for one step: explicit Euler free fall while airborne,
/// jump impulse on the latched press while grounded. The jump overrides
/// gravity for the step it fires on.
pub(crate) fn vertical_velocity(
    vy: f32,
    grounded: bool,
    jump_pressed: bool,
    tuning: &LocomotionTuning,
    dt: f32,
) -> f32 {
    let mut vy = vy;
    if !grounded {
        vy -= tuning.gravity * dt;
    }
    if jump_pressed && grounded {
        vy = tuning.jump_velocity;
    }
    vy
}

pub(crate) fn integrate_step(
    time: Res<Time<Fixed>>,
    tuning: Res<LocomotionTuning>,
    mut input: ResMut<LocomotionInput>,
    mut query: Query<
        (
            &mut Transform,
            &mut LinearVelocity,
            &Facing,
            &MotionState,
            &mut RigAccumulator,
            &mut RootMotionSource,
            &mut LocomotionBlend,
        ),
        With<Player>,
    >,
    mut rigs: Query<&mut Transform, (With<RigVisual>, Without<Player>)>,
) {
    let dt = time.delta_secs();
    // Consume the latch: the edge fires on exactly one fixed step
    let jump_pressed = std::mem::take(&mut input.jump_pressed);

    for (mut transform, mut velocity, facing, state, mut rig, mut source, mut blend) in &mut query
    {
        // 1. Orientation. Zero facing is the "no turn this tick" sentinel
        //    from the aim resolver; the current orientation is kept.
        if facing.0 != Vec3::ZERO {
            transform.look_to(facing.0, Vec3::Y);
        }
        let basis = transform.rotation;

        // 2. Blend parameters for the animation tree. Playback scale is the
        //    configured constant, not the input magnitude.
        blend.position = blend_position(basis, input.move_axis);
        blend.scale = tuning.move_speed_scale;

        // 3. Root motion: compose the sample, strip its scale artifact, and
        //    take the freshly accumulated translation (zero after the prior
        //    step's reset, so this is exactly this step's displacement).
        rig.accumulate(&source.take());
        let delta = rig.consume_translation();

        // 4. Velocity: horizontal from root motion, vertical carried over.
        let mut v = velocity.0;
        if dt > 0.0 {
            v = basis * delta / dt + Vec3::Y * v.y;
        }
        v.y = vertical_velocity(v.y, state.grounded, jump_pressed, &tuning, dt);

        // 5. The physics layer consumes the velocity and performs the
        //    collision-resolved displacement after this system.
        velocity.0 = v;

        // 6. Rotation survives the reset: carry the rig lean to the model.
        let rig_rotation = rig.rotation();
        for mut rig_transform in &mut rigs {
            rig_transform.rotation = rig_rotation;
        }
    }
}
