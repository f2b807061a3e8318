//! Locomotion domain: system modules for aim and fixed-step integration.

pub(crate) mod aim;
pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod integrate;

pub(crate) use aim::resolve_aim;
pub(crate) use collisions::detect_ground;
pub(crate) use input::read_input;
pub(crate) use integrate::integrate_step;
