//! Shared types, configuration, and scene interfaces for the Brume
//! volumetric lighting baker.

pub mod config;
pub mod error;
pub mod light;
pub mod occluder;
pub mod occlusion;
pub mod progress;
pub mod types;
