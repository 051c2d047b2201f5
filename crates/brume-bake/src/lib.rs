//! Bake pipeline: lattice traversal, light sampling, density compositing.

pub mod density;
pub mod ibl;
pub mod orchestrator;
pub mod probes;
pub mod raytrace;
pub mod sampler;
