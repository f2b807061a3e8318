//! Animation domain: synthetic root-motion sampler (dev-tools only).
//!
//! Stands in for a real animation rig so the prototype is playable headless.
//! Produces a crude straight-line stride from the previous step's blend
//! position. Real sampler output carries a non-unit scale on its rotation
//! block, so the stub injects the same artifact and keeps the
//! orthonormalization path exercised at runtime.

use bevy::prelude::*;

use crate::animation::{LocomotionBlend, RootMotionSource};

/// Stride length at full blend deflection and unit playback scale (m/s).
const STRIDE_SPEED: f32 = 2.0;

/// Scale factor observed on real sampler output.
const SAMPLER_SCALE_ARTIFACT: f32 = 2.0;

pub(crate) fn sample_root_motion(
    time: Res<Time<Fixed>>,
    mut query: Query<(&LocomotionBlend, &mut RootMotionSource)>,
) {
    let dt = time.delta_secs();

    for (blend, mut source) in &mut query {
        let step = Vec3::new(blend.position.x, 0.0, blend.position.y)
            * STRIDE_SPEED
            * blend.scale
            * dt;

        source.push(Transform {
            translation: step,
            rotation: Quat::IDENTITY,
            scale: Vec3::splat(SAMPLER_SCALE_ARTIFACT),
        });
    }
}
