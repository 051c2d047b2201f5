//! Stage composition for the post-filter pipeline.

use brume_core::config::{FilterComposition, FilterParams};
use brume_core::types::Volume;

use crate::adjust::apply_adjustments;
use crate::blur::apply_blur;

/// Run the enabled filter stages over a finished volume.
///
/// With both stages enabled, `Parallel` reproduces the legacy behavior:
/// adjustments and blur each read the raw source, and the pipeline's
/// output is the last enabled stage's result (the blur). `Chained` feeds
/// the adjusted volume into the blur instead.
pub fn apply_filters(source: &Volume, params: &FilterParams) -> Volume {
    log::debug!(
        "filter pass: adjustments={}, blur={} (samples={})",
        params.adjustments,
        params.blur,
        params.blur_samples
    );
    match (params.adjustments, params.blur) {
        (false, false) => source.clone(),
        (true, false) => apply_adjustments(source, params),
        (false, true) => apply_blur(source, params.blur_samples),
        (true, true) => match params.composition {
            // The adjusted volume would be overwritten by the blur's
            // output anyway, so only the blur runs.
            FilterComposition::Parallel => apply_blur(source, params.blur_samples),
            FilterComposition::Chained => {
                let adjusted = apply_adjustments(source, params);
                apply_blur(&adjusted, params.blur_samples)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{IVec3, Vec3, Vec4};

    fn sample_volume() -> Volume {
        let mut v = Volume::new(Vec3::ZERO, Vec3::ONE, IVec3::splat(3)).unwrap();
        let s = v.sample_counts();
        for z in 0..s.z {
            for y in 0..s.y {
                for x in 0..s.x {
                    let t = (x + y * 2 + z * 3) as f32 * 0.01;
                    v.set(IVec3::new(x, y, z), Vec4::new(0.2 + t, 0.3, 0.4 - t, 0.5));
                }
            }
        }
        v
    }

    fn both_params(composition: FilterComposition) -> FilterParams {
        FilterParams {
            adjustments: true,
            blur: true,
            composition,
            brightness: 2.0,
            blur_samples: 1,
            ..FilterParams::default()
        }
    }

    #[test]
    fn test_disabled_stages_copy_source() {
        let v = sample_volume();
        let out = apply_filters(&v, &FilterParams::default());
        assert_eq!(out.samples(), v.samples());
    }

    #[test]
    fn test_single_stage_paths() {
        let v = sample_volume();

        let adjust_only = FilterParams {
            adjustments: true,
            brightness: 2.0,
            ..FilterParams::default()
        };
        let out = apply_filters(&v, &adjust_only);
        assert_eq!(out.samples(), apply_adjustments(&v, &adjust_only).samples());

        let blur_only = FilterParams {
            blur: true,
            blur_samples: 1,
            ..FilterParams::default()
        };
        let out = apply_filters(&v, &blur_only);
        assert_eq!(out.samples(), apply_blur(&v, 1).samples());
    }

    #[test]
    fn test_parallel_blur_reads_raw_source() {
        let v = sample_volume();
        let out = apply_filters(&v, &both_params(FilterComposition::Parallel));
        assert_eq!(out.samples(), apply_blur(&v, 1).samples());
    }

    #[test]
    fn test_chained_blur_reads_adjusted_volume() {
        let v = sample_volume();
        let params = both_params(FilterComposition::Chained);
        let out = apply_filters(&v, &params);
        let expected = apply_blur(&apply_adjustments(&v, &params), 1);
        assert_eq!(out.samples(), expected.samples());
    }

    #[test]
    fn test_compositions_differ_when_adjustments_matter() {
        let v = sample_volume();
        let parallel = apply_filters(&v, &both_params(FilterComposition::Parallel));
        let chained = apply_filters(&v, &both_params(FilterComposition::Chained));
        assert_ne!(parallel.samples(), chained.samples());
    }
}
