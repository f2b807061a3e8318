//! Animation domain: the collaborator surface the integrator talks to.

use bevy::prelude::*;

/// Blend parameters for the locomotion blend tree. Write-only outputs,
/// recomputed every fixed step by the integrator.
#[derive(Component, Debug, Default)]
pub struct LocomotionBlend {
    /// Character-local 2D blend position
    pub position: Vec2,
    /// Playback speed multiplier
    pub scale: f32,
}

/// Root-motion transform accumulated by the animation system since it was
/// last queried. `take` hands the sample to exactly one integrator step.
///
/// The sample's rotation block can carry a non-unit scale; consumers must
/// treat the scale as untrusted on every sample.
#[derive(Component, Debug, Clone)]
pub struct RootMotionSource {
    sample: Transform,
}

impl Default for RootMotionSource {
    fn default() -> Self {
        Self {
            sample: Transform::IDENTITY,
        }
    }
}

impl RootMotionSource {
    /// Compose a new delta into the pending sample. Translation and rotation
    /// compose explicitly; the scale block is carried from the latest delta
    /// only, so back-to-back pushes never compound the sampler's non-unit
    /// scale into the translation.
    pub fn push(&mut self, delta: Transform) {
        self.sample = Transform {
            translation: self.sample.translation + self.sample.rotation * delta.translation,
            rotation: self.sample.rotation * delta.rotation,
            scale: delta.scale,
        };
    }

    /// Take the pending sample and reset to identity ("accumulated since
    /// last queried" semantics).
    pub fn take(&mut self) -> Transform {
        std::mem::replace(&mut self.sample, Transform::IDENTITY)
    }

    pub fn pending(&self) -> &Transform {
        &self.sample
    }
}
