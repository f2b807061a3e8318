//! Animation domain: blend parameters out, root-motion samples in.
//!
//! The blend-tree sampler itself is an external collaborator; this module
//! only defines the two surfaces the integrator exchanges with it, plus a
//! dev-only synthetic sampler.

mod components;
#[cfg(feature = "dev-tools")]
mod sampler;


pub use components::{LocomotionBlend, RootMotionSource};

use bevy::prelude::*;

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        #[cfg(feature = "dev-tools")]
        app.add_systems(
            FixedUpdate,
            sampler::sample_root_motion.before(crate::locomotion::LocomotionSet::Integrate),
        );
    }
}
