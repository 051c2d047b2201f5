//! The light-sampling seam: one trait, three interchangeable variants.

use brume_core::config::SamplingConfig;
use brume_core::occlusion::SceneOcclusion;
use glam::Vec3;

/// Samples aggregated incoming light at a world position given the local
/// cell extent. Selected once per bake, called once per probe.
///
/// Returned colors are unclamped; values above 1.0 represent HDR
/// intensity. A fully transparent sample is `Vec3::ZERO`.
pub trait VolumetricSampler {
    fn sample(&mut self, position: Vec3, extent: Vec3) -> Vec3;

    /// Called once after the last probe. Variants holding whole-bake
    /// scratch release it here.
    fn finish(&mut self) {}
}

/// The six axis directions used by the indoor test.
const AXIS_RAYS: [Vec3; 6] = [
    Vec3::X,
    Vec3::NEG_X,
    Vec3::Y,
    Vec3::NEG_Y,
    Vec3::Z,
    Vec3::NEG_Z,
];

/// Leak and indoor gating shared by every sampler variant, so the variants
/// stay drop-in interchangeable.
pub struct SampleGate<'a> {
    config: &'a SamplingConfig,
    scene: &'a dyn SceneOcclusion,
}

impl<'a> SampleGate<'a> {
    pub fn new(config: &'a SamplingConfig, scene: &'a dyn SceneOcclusion) -> Self {
        Self { config, scene }
    }

    /// True if the probe must produce a fully transparent sample: its cell
    /// overlaps solid geometry (leak prevention) or it fails the
    /// indoor-only enclosure test. Normal control flow, not an error.
    pub fn rejects(&self, position: Vec3, extent: Vec3) -> bool {
        if self.config.leak_prevention
            && self
                .scene
                .box_overlap(position, extent * self.config.leak_factor)
        {
            return true;
        }
        if self.config.indoor_only && !self.is_indoor(position) {
            return true;
        }
        false
    }

    /// A probe counts as indoor when rays along all six axes hit geometry.
    fn is_indoor(&self, position: Vec3) -> bool {
        AXIS_RAYS
            .iter()
            .all(|&dir| self.scene.ray_hit(position, dir, f32::INFINITY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brume_core::occluder::{Aabb, BoxScene};
    use brume_core::occlusion::NoOcclusion;

    fn enclosing_room() -> BoxScene {
        // Six wall slabs around the origin
        let mut scene = BoxScene::default();
        for (center, half) in [
            (Vec3::new(5.0, 0.0, 0.0), Vec3::new(0.5, 5.0, 5.0)),
            (Vec3::new(-5.0, 0.0, 0.0), Vec3::new(0.5, 5.0, 5.0)),
            (Vec3::new(0.0, 5.0, 0.0), Vec3::new(5.0, 0.5, 5.0)),
            (Vec3::new(0.0, -5.0, 0.0), Vec3::new(5.0, 0.5, 5.0)),
            (Vec3::new(0.0, 0.0, 5.0), Vec3::new(5.0, 5.0, 0.5)),
            (Vec3::new(0.0, 0.0, -5.0), Vec3::new(5.0, 5.0, 0.5)),
        ] {
            scene.push(Aabb::from_center(center, half));
        }
        scene
    }

    #[test]
    fn test_leak_prevention_rejects_overlapping_probe() {
        let scene = BoxScene::new(vec![Aabb::from_center(Vec3::ZERO, Vec3::splat(1.0))]);
        let config = SamplingConfig {
            leak_prevention: true,
            leak_factor: 1.0,
            ..SamplingConfig::default()
        };
        let gate = SampleGate::new(&config, &scene);
        assert!(gate.rejects(Vec3::new(1.2, 0.0, 0.0), Vec3::splat(0.5)));
        assert!(!gate.rejects(Vec3::new(3.0, 0.0, 0.0), Vec3::splat(0.5)));
    }

    #[test]
    fn test_leak_prevention_disabled_accepts_everything() {
        let scene = BoxScene::new(vec![Aabb::from_center(Vec3::ZERO, Vec3::splat(1.0))]);
        let config = SamplingConfig::default();
        let gate = SampleGate::new(&config, &scene);
        assert!(!gate.rejects(Vec3::ZERO, Vec3::splat(0.5)));
    }

    #[test]
    fn test_indoor_only_rejects_open_sky() {
        let config = SamplingConfig {
            indoor_only: true,
            ..SamplingConfig::default()
        };
        let open = NoOcclusion;
        let gate = SampleGate::new(&config, &open);
        assert!(gate.rejects(Vec3::ZERO, Vec3::splat(0.5)));

        let room = enclosing_room();
        let gate = SampleGate::new(&config, &room);
        assert!(!gate.rejects(Vec3::ZERO, Vec3::splat(0.5)));
    }
}
