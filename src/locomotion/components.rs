//! Locomotion domain: components, physics layers, and the root-motion accumulator.

use avian3d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Walkable surfaces (floor slabs, platforms)
    Ground,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for the visual rig child that receives the accumulator's rotation
#[derive(Component, Debug)]
pub struct RigVisual;

/// Per-step motion flags, refreshed by ground detection before integration.
#[derive(Component, Debug, Default)]
pub struct MotionState {
    pub grounded: bool,
}

/// Facing direction resolved by the aim resolver and consumed by the
/// integrator. Holds the most recent non-zero resolution: the resolver's
/// zero "no change" sentinel never overwrites it, so a direction resolved
/// between fixed steps persists until a physics step applies it.
/// `Vec3::ZERO` only before the first input signal.
///
/// `Update` and `FixedUpdate` never overlap on Bevy's main schedule, which is
/// what makes this single-slot handoff safe without a lock.
#[derive(Component, Debug, Default)]
pub struct Facing(pub Vec3);

/// Pointer bookkeeping for the aim resolver. Aim recompute from the pointer
/// is edge-triggered: it only fires when the pointer actually moved.
#[derive(Component, Debug, Default)]
pub struct AimState {
    pub last_pointer: Vec2,
}

/// Accumulated, not-yet-consumed root motion since the last reset.
///
/// Root-motion samples arrive with a spurious non-unit scale on their
/// rotation block, so the basis is re-orthonormalized on every composition.
/// The scale is untrusted on every sample, not just the first one.
#[derive(Component, Debug, Clone)]
pub struct RigAccumulator {
    basis: Mat3,
    origin: Vec3,
}

impl Default for RigAccumulator {
    fn default() -> Self {
        Self {
            basis: Mat3::IDENTITY,
            origin: Vec3::ZERO,
        }
    }
}

impl RigAccumulator {
    /// Compose a root-motion sample into the accumulator and strip the
    /// sampler's scale artifact from the basis.
    pub fn accumulate(&mut self, sample: &Transform) {
        let sample_basis = Mat3::from_quat(sample.rotation) * Mat3::from_diagonal(sample.scale);
        // Translation composes through the basis held *before* this sample.
        self.origin += self.basis * sample.translation;
        self.basis = orthonormalized(self.basis * sample_basis);
    }

    /// Take the accumulated translation and reset it to zero. The reset is
    /// mandatory: leaving the translation in place would re-apply it on the
    /// next step (double integration). Rotation is retained so rig lean
    /// carries across steps.
    pub fn consume_translation(&mut self) -> Vec3 {
        std::mem::take(&mut self.origin)
    }

    pub fn translation(&self) -> Vec3 {
        self.origin
    }

    pub fn basis(&self) -> Mat3 {
        self.basis
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_mat3(&self.basis)
    }
}

/// Gram-Schmidt on the basis columns. A degenerate column (sample collapsed
/// an axis to zero length) resets the basis to identity rather than
/// propagating NaNs into the character transform.
fn orthonormalized(m: Mat3) -> Mat3 {
    let x = m.x_axis.normalize_or_zero();
    let y = (m.y_axis - x * m.y_axis.dot(x)).normalize_or_zero();
    let z = (m.z_axis - x * m.z_axis.dot(x) - y * m.z_axis.dot(y)).normalize_or_zero();

    if x == Vec3::ZERO || y == Vec3::ZERO || z == Vec3::ZERO {
        return Mat3::IDENTITY;
    }

    Mat3::from_cols(x, y, z)
}
