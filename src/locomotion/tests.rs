//! Locomotion domain: tests for aim resolution, the root-motion accumulator,
//! and the velocity composition helpers.

use bevy::prelude::*;

use super::components::RigAccumulator;
use super::resources::LocomotionTuning;
use super::systems::aim::{latch_facing, resolve_facing};
use super::systems::integrate::{blend_position, vertical_velocity};

const EPS: f32 = 1e-5;

// -----------------------------------------------------------------------------
// Aim resolution
// -----------------------------------------------------------------------------

#[test]
fn test_look_input_takes_priority_over_pointer() {
    // Pointer moved, but the stick is deflected: stick wins
    let facing = resolve_facing(
        Vec2::new(1.0, 0.0),
        Vec2::new(100.0, 100.0),
        Vec2::new(640.0, 360.0),
        Vec2::new(50.0, 50.0),
    );

    assert!(facing.abs_diff_eq(Vec3::new(-1.0, 0.0, 0.0), EPS));
}

#[test]
fn test_look_facing_is_normalized_and_horizontal() {
    let facing = resolve_facing(Vec2::new(1.0, 1.0), Vec2::ZERO, Vec2::ZERO, Vec2::ZERO);

    assert!((facing.length() - 1.0).abs() < EPS);
    assert_eq!(facing.y, 0.0);
}

#[test]
fn test_pointer_movement_turns_toward_cursor_side() {
    // Cursor moved to the left of the character's screen projection
    let projected = Vec2::new(640.0, 360.0);
    let pointer = Vec2::new(540.0, 360.0);

    let facing = resolve_facing(Vec2::ZERO, pointer, projected, Vec2::new(0.0, 0.0));

    // projected - pointer points +x in screen space
    assert!(facing.abs_diff_eq(Vec3::new(1.0, 0.0, 0.0), EPS));
}

#[test]
fn test_unchanged_pointer_returns_zero_sentinel() {
    let pointer = Vec2::new(300.0, 200.0);

    let first = resolve_facing(Vec2::ZERO, pointer, Vec2::new(640.0, 360.0), Vec2::ZERO);
    let second = resolve_facing(Vec2::ZERO, pointer, Vec2::new(640.0, 360.0), pointer);

    assert_ne!(first, Vec3::ZERO);
    assert_eq!(second, Vec3::ZERO);
}

#[test]
fn test_resolved_facing_survives_idle_frames_until_consumed() {
    // Fixed steps do not run every render frame: a direction resolved in
    // frame N must not be lost when frame N+1 resolves the zero sentinel
    // before any integrator step has applied it.
    let projected = Vec2::new(640.0, 360.0);
    let pointer = Vec2::new(540.0, 360.0);

    let mut facing = Vec3::ZERO;

    // Frame N: pointer moved, a direction is resolved
    let resolved = resolve_facing(Vec2::ZERO, pointer, projected, Vec2::ZERO);
    facing = latch_facing(facing, resolved);
    assert_ne!(facing, Vec3::ZERO);
    let frame_n_facing = facing;

    // Frame N+1: pointer idle, resolver yields the zero sentinel
    let resolved = resolve_facing(Vec2::ZERO, pointer, projected, pointer);
    assert_eq!(resolved, Vec3::ZERO);
    facing = latch_facing(facing, resolved);

    assert_eq!(facing, frame_n_facing);
}

#[test]
fn test_latched_facing_is_replaced_by_a_new_resolution() {
    let held = Vec3::new(1.0, 0.0, 0.0);
    let fresh = Vec3::new(0.0, 0.0, -1.0);

    assert_eq!(latch_facing(held, fresh), fresh);
}

#[test]
fn test_no_input_on_first_frame_keeps_default_orientation() {
    let facing = resolve_facing(Vec2::ZERO, Vec2::ZERO, Vec2::new(640.0, 360.0), Vec2::ZERO);
    assert_eq!(facing, Vec3::ZERO);
}

// -----------------------------------------------------------------------------
// Root-motion accumulator
// -----------------------------------------------------------------------------

fn assert_orthonormal(basis: Mat3) {
    assert!((basis.x_axis.length() - 1.0).abs() < EPS);
    assert!((basis.y_axis.length() - 1.0).abs() < EPS);
    assert!((basis.z_axis.length() - 1.0).abs() < EPS);
    assert!(basis.x_axis.dot(basis.y_axis).abs() < EPS);
    assert!(basis.x_axis.dot(basis.z_axis).abs() < EPS);
    assert!(basis.y_axis.dot(basis.z_axis).abs() < EPS);
}

#[test]
fn test_pure_translation_sample_accumulates_translation() {
    let mut rig = RigAccumulator::default();

    rig.accumulate(&Transform::from_translation(Vec3::new(0.1, 0.0, 0.0)));

    assert!(rig.translation().abs_diff_eq(Vec3::new(0.1, 0.0, 0.0), EPS));
    assert_orthonormal(rig.basis());
}

#[test]
fn test_consume_translation_resets_to_zero() {
    let mut rig = RigAccumulator::default();
    rig.accumulate(&Transform::from_translation(Vec3::new(0.3, 0.0, -0.2)));

    let delta = rig.consume_translation();

    assert!(delta.abs_diff_eq(Vec3::new(0.3, 0.0, -0.2), EPS));
    assert_eq!(rig.translation(), Vec3::ZERO);

    // Consuming again yields zero: nothing left to apply
    assert_eq!(rig.consume_translation(), Vec3::ZERO);
}

#[test]
fn test_scale_artifact_is_stripped_every_step() {
    let mut rig = RigAccumulator::default();

    // Samples arrive with the sampler's spurious 2.0 scale on the rotation
    // block; the basis must come out orthonormal every single step.
    for _ in 0..10 {
        rig.accumulate(&Transform {
            translation: Vec3::new(0.05, 0.0, 0.0),
            rotation: Quat::from_rotation_y(0.1),
            scale: Vec3::splat(2.0),
        });
        assert_orthonormal(rig.basis());
        rig.consume_translation();
    }
}

#[test]
fn test_scale_does_not_distort_translation_delta() {
    let mut rig = RigAccumulator::default();

    rig.accumulate(&Transform {
        translation: Vec3::new(0.1, 0.0, 0.0),
        rotation: Quat::IDENTITY,
        scale: Vec3::splat(2.0),
    });

    // Identity accumulator basis: the applied delta is the raw sample
    // translation, unaffected by the injected scale.
    assert!(rig.consume_translation().abs_diff_eq(Vec3::new(0.1, 0.0, 0.0), EPS));
}

#[test]
fn test_rotation_survives_translation_reset() {
    let mut rig = RigAccumulator::default();
    let turn = Quat::from_rotation_y(0.5);

    rig.accumulate(&Transform {
        translation: Vec3::new(0.1, 0.0, 0.0),
        rotation: turn,
        scale: Vec3::ONE,
    });
    rig.consume_translation();

    assert!(rig.rotation().angle_between(turn) < 1e-3);
}

#[test]
fn test_translation_composes_through_accumulated_rotation() {
    let mut rig = RigAccumulator::default();

    // Quarter turn left, then step "forward" in sample-local space
    rig.accumulate(&Transform::from_rotation(Quat::from_rotation_y(
        std::f32::consts::FRAC_PI_2,
    )));
    rig.accumulate(&Transform::from_translation(Vec3::new(0.0, 0.0, -0.1)));

    // -Z rotated a quarter turn left lands on -X
    assert!(rig.translation().abs_diff_eq(Vec3::new(-0.1, 0.0, 0.0), 1e-4));
}

#[test]
fn test_degenerate_sample_resets_basis_to_identity() {
    let mut rig = RigAccumulator::default();

    rig.accumulate(&Transform {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::new(0.0, 1.0, 1.0),
    });

    assert_orthonormal(rig.basis());
    assert_eq!(rig.basis(), Mat3::IDENTITY);
}

// -----------------------------------------------------------------------------
// Blend-space mapping
// -----------------------------------------------------------------------------

#[test]
fn test_blend_position_identity_basis() {
    let blend = blend_position(Quat::IDENTITY, Vec2::new(1.0, 0.0));
    assert!(blend.abs_diff_eq(Vec2::new(1.0, 0.0), EPS));
}

#[test]
fn test_blend_position_forward_maps_to_negative_z_plane() {
    let blend = blend_position(Quat::IDENTITY, Vec2::new(0.0, 1.0));
    assert!(blend.abs_diff_eq(Vec2::new(0.0, -1.0), EPS));
}

#[test]
fn test_blend_position_rotated_basis() {
    // Character turned a quarter left: rightward input becomes world -Z,
    // so the blend plane sees (0, -1)
    let basis = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
    let blend = blend_position(basis, Vec2::new(1.0, 0.0));

    assert!(blend.abs_diff_eq(Vec2::new(0.0, -1.0), 1e-4));
}

// -----------------------------------------------------------------------------
// Gravity and jump
// -----------------------------------------------------------------------------

#[test]
fn test_gravity_monotonic_over_steps() {
    let tuning = LocomotionTuning::default();
    let dt = 1.0 / 60.0;
    let mut vy = 0.0;

    for n in 1..=10 {
        vy = vertical_velocity(vy, false, false, &tuning, dt);
        assert!((vy - (-tuning.gravity * dt * n as f32)).abs() < EPS);
    }
}

#[test]
fn test_five_steps_of_free_fall_scenario() {
    let tuning = LocomotionTuning {
        gravity: 9.8,
        ..default()
    };
    let dt = 0.02;
    let mut vy = 0.0;

    for _ in 0..5 {
        vy = vertical_velocity(vy, false, false, &tuning, dt);
    }

    assert!((vy - (-0.98)).abs() < 1e-4);
}

#[test]
fn test_grounded_blocks_gravity() {
    let tuning = LocomotionTuning::default();
    let vy = vertical_velocity(0.0, true, false, &tuning, 0.02);
    assert_eq!(vy, 0.0);
}

#[test]
fn test_jump_requires_ground_contact() {
    let tuning = LocomotionTuning::default();

    let airborne = vertical_velocity(-1.0, false, true, &tuning, 0.02);
    assert!(airborne < 0.0);

    let grounded = vertical_velocity(-1.0, true, true, &tuning, 0.02);
    assert_eq!(grounded, tuning.jump_velocity);
}

#[test]
fn test_jump_fires_once_per_latched_press() {
    let tuning = LocomotionTuning::default();
    let dt = 0.02;

    // Press latched for exactly one step; the latch is consumed, so the
    // following grounded steps see jump_pressed = false and must not
    // re-apply the impulse.
    let mut vy = vertical_velocity(0.0, true, true, &tuning, dt);
    assert_eq!(vy, tuning.jump_velocity);

    vy = vertical_velocity(vy, true, false, &tuning, dt);
    assert_eq!(vy, tuning.jump_velocity);

    vy = vertical_velocity(vy, false, false, &tuning, dt);
    assert!(vy < tuning.jump_velocity);
}
