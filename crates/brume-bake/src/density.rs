//! Density compositor: maps a sampled color + probe position to a voxel
//! opacity. Pure functions, no clamping of the final value.

use brume_core::config::{ColorSpace, DensityMode, DensityParams};
use glam::Vec3;

/// Luminance weights for gamma-space colors.
pub const LUMA_WEIGHTS_GAMMA: Vec3 = Vec3::new(0.22, 0.707, 0.071);

/// Luminance weights for linear-space colors.
pub const LUMA_WEIGHTS_LINEAR: Vec3 = Vec3::new(0.0397, 0.4580, 0.0061);

/// Weighted luminance of a color in the given working color space,
/// optionally inverted as `1 - luma`.
pub fn luminance(color: Vec3, space: ColorSpace, invert: bool) -> f32 {
    let weights = match space {
        ColorSpace::Gamma => LUMA_WEIGHTS_GAMMA,
        ColorSpace::Linear => LUMA_WEIGHTS_LINEAR,
    };
    let luma = color.dot(weights);
    if invert {
        1.0 - luma
    } else {
        luma
    }
}

/// Interpolation factor for the height band: 0 at `y <= height`, 1 at
/// `y >= height + falloff`, linear in between. A non-positive falloff is
/// a hard step at `height` (the division would otherwise produce NaN).
fn height_factor(y: f32, params: &DensityParams) -> f32 {
    if params.falloff <= 0.0 {
        return if y >= params.height { 1.0 } else { 0.0 };
    }
    ((y - params.height) / params.falloff).clamp(0.0, 1.0)
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Compute a voxel's density from the probe position and sampled color.
pub fn compute_density(params: &DensityParams, position: Vec3, color: Vec3) -> f32 {
    match params.mode {
        DensityMode::Constant => params.constant,
        DensityMode::Luminance => luminance(color, params.color_space, params.invert_luminance),
        DensityMode::Height => {
            let t = height_factor(position.y, params);
            lerp(params.density_bottom, params.density_top, t)
        }
        DensityMode::HeightLuminance => {
            let luma = luminance(color, params.color_space, params.invert_luminance);
            let t = height_factor(position.y, params);
            lerp(luma * params.density_bottom, luma * params.density_top, t)
        }
    }
}
