//! Post-filter pipeline for baked volumes: color adjustments and a
//! separable 3D Gaussian blur.

pub mod adjust;
pub mod blur;
pub mod pipeline;

pub use pipeline::apply_filters;
