//! Per-voxel color adjustments.
//!
//! Stage order is fixed: brightness, contrast, saturation/vibrance, hue
//! shift, gamma, color-filter blend, color multiply. Each stage assumes
//! the previous stage's output range, so the order must not change.

use brume_core::config::FilterParams;
use brume_core::types::Volume;
use glam::{Vec3, Vec4};

/// Rec. 709 luma weights, used as the desaturation pivot.
const LUMA: Vec3 = Vec3::new(0.2126, 0.7152, 0.0722);

fn rgb_to_hsv(rgb: Vec3) -> Vec3 {
    let max = rgb.max_element();
    let min = rgb.min_element();
    let delta = max - min;

    let hue = if delta < 1e-8 {
        0.0
    } else if max == rgb.x {
        60.0 * (((rgb.y - rgb.z) / delta).rem_euclid(6.0))
    } else if max == rgb.y {
        60.0 * ((rgb.z - rgb.x) / delta + 2.0)
    } else {
        60.0 * ((rgb.x - rgb.y) / delta + 4.0)
    };
    let saturation = if max < 1e-8 { 0.0 } else { delta / max };
    Vec3::new(hue, saturation, max)
}

fn hsv_to_rgb(hsv: Vec3) -> Vec3 {
    let (h, s, v) = (hsv.x.rem_euclid(360.0), hsv.y, hsv.z);
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
    let m = v - c;
    let (r, g, b) = match (h / 60.0) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    Vec3::new(r + m, g + m, b + m)
}

/// Apply the full adjustment chain to one color. Alpha is untouched by
/// the adjustments stage.
pub fn adjust_color(rgb: Vec3, params: &FilterParams) -> Vec3 {
    let mut color = rgb * params.brightness;

    // Contrast pivots around mid-gray
    color = (color - 0.5) * params.contrast + 0.5;

    // Saturation plus vibrance: vibrance scales with the color's own
    // channel spread, so already-saturated colors move more
    let luma = color.dot(LUMA);
    let spread = color.max_element() - color.min_element();
    let saturation = params.saturation + params.vibrance * spread;
    color = Vec3::splat(luma) + (color - Vec3::splat(luma)) * saturation;

    if params.hue_shift != 0.0 {
        let mut hsv = rgb_to_hsv(color.max(Vec3::ZERO));
        hsv.x += params.hue_shift;
        color = hsv_to_rgb(hsv);
    }

    if params.gamma > 0.0 && params.gamma != 1.0 {
        let inv = 1.0 / params.gamma;
        color = color.max(Vec3::ZERO).powf(inv);
    }

    color = color + (params.color_filter - color) * params.color_filter_strength;
    color * params.color_multiply
}

/// Adjustments stage over a whole volume. Per-voxel work is independent;
/// this is the host analogue of a parallel kernel dispatch.
pub fn apply_adjustments(source: &Volume, params: &FilterParams) -> Volume {
    let mut out = source.clone();
    for texel in out.samples_mut() {
        let adjusted = adjust_color(texel.truncate(), params);
        *texel = Vec4::new(adjusted.x, adjusted.y, adjusted.z, texel.w);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use brume_core::types::Volume;
    use glam::IVec3;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_identity_params_leave_color_unchanged() {
        let params = FilterParams::default();
        let color = Vec3::new(0.2, 0.5, 0.8);
        assert!(close(adjust_color(color, &params), color));
    }

    #[test]
    fn test_brightness_multiplies() {
        let params = FilterParams {
            brightness: 2.0,
            contrast: 1.0,
            ..FilterParams::default()
        };
        assert!(close(
            adjust_color(Vec3::splat(0.25), &params),
            Vec3::splat(0.5)
        ));
    }

    #[test]
    fn test_contrast_pivots_on_mid_gray() {
        let params = FilterParams {
            contrast: 3.0,
            ..FilterParams::default()
        };
        // Mid-gray is the fixed point
        assert!(close(
            adjust_color(Vec3::splat(0.5), &params),
            Vec3::splat(0.5)
        ));
        assert!(close(
            adjust_color(Vec3::splat(0.6), &params),
            Vec3::splat(0.8)
        ));
    }

    #[test]
    fn test_brightness_applies_before_contrast() {
        let params = FilterParams {
            brightness: 2.0,
            contrast: 2.0,
            ..FilterParams::default()
        };
        // 0.25 * 2 = 0.5, then contrast keeps the mid-gray fixed point.
        // The reversed order would give (0.25-0.5)*2+0.5 = 0, then 0.
        assert!(close(
            adjust_color(Vec3::splat(0.25), &params),
            Vec3::splat(0.5)
        ));
    }

    #[test]
    fn test_zero_saturation_grays_out() {
        let params = FilterParams {
            saturation: 0.0,
            ..FilterParams::default()
        };
        let out = adjust_color(Vec3::new(0.9, 0.1, 0.3), &params);
        assert!((out.x - out.y).abs() < 1e-5 && (out.y - out.z).abs() < 1e-5);
    }

    #[test]
    fn test_vibrance_leaves_gray_untouched() {
        let params = FilterParams {
            vibrance: 5.0,
            ..FilterParams::default()
        };
        // Zero spread: vibrance has nothing to amplify
        assert!(close(
            adjust_color(Vec3::splat(0.4), &params),
            Vec3::splat(0.4)
        ));
    }

    #[test]
    fn test_hue_shift_rotates_red_to_green() {
        let params = FilterParams {
            hue_shift: 120.0,
            ..FilterParams::default()
        };
        let out = adjust_color(Vec3::new(1.0, 0.0, 0.0), &params);
        assert!(close(out, Vec3::new(0.0, 1.0, 0.0)));
    }

    #[test]
    fn test_hsv_roundtrip() {
        for rgb in [
            Vec3::new(0.3, 0.7, 0.2),
            Vec3::new(1.0, 0.0, 0.5),
            Vec3::new(0.1, 0.1, 0.1),
        ] {
            assert!(close(hsv_to_rgb(rgb_to_hsv(rgb)), rgb), "{rgb}");
        }
    }

    #[test]
    fn test_filter_blend_full_strength() {
        let params = FilterParams {
            color_filter: Vec3::new(0.2, 0.3, 0.4),
            color_filter_strength: 1.0,
            ..FilterParams::default()
        };
        assert!(close(
            adjust_color(Vec3::new(0.9, 0.9, 0.9), &params),
            Vec3::new(0.2, 0.3, 0.4)
        ));
    }

    #[test]
    fn test_multiply_is_last() {
        let params = FilterParams {
            color_filter: Vec3::ONE,
            color_filter_strength: 1.0,
            color_multiply: Vec3::new(0.5, 0.25, 0.0),
            ..FilterParams::default()
        };
        // Blend forces white, multiply then tints it
        assert!(close(
            adjust_color(Vec3::ZERO, &params),
            Vec3::new(0.5, 0.25, 0.0)
        ));
    }

    #[test]
    fn test_volume_pass_preserves_alpha() {
        let mut volume = Volume::new(Vec3::ZERO, Vec3::ONE, IVec3::splat(1)).unwrap();
        volume.set(IVec3::ZERO, Vec4::new(0.1, 0.2, 0.3, 0.77));
        let params = FilterParams {
            brightness: 2.0,
            ..FilterParams::default()
        };
        let out = apply_adjustments(&volume, &params);
        assert!((out.get(IVec3::ZERO).w - 0.77).abs() < 1e-6);
    }
}
