//! Light-probe sampler: evaluates a precomputed spherical-harmonics probe
//! field instead of tracing the scene per probe.

use brume_core::config::SamplingConfig;
use brume_core::occlusion::SceneOcclusion;
use glam::Vec3;

use crate::sampler::{SampleGate, VolumetricSampler};

/// One precomputed probe: nine SH coefficients per color channel.
#[derive(Debug, Clone, Copy)]
pub struct ShProbe {
    pub position: Vec3,
    pub coefficients: [Vec3; 9],
    /// Blend radius for field interpolation.
    pub radius: f32,
}

impl ShProbe {
    /// Evaluate the second-order SH basis along `direction`.
    ///
    /// The fog bake calls this with the zero vector (the "flat" direction):
    /// the linear and cross terms vanish and the result reduces to the DC
    /// band plus the constant part of the zonal band.
    pub fn evaluate(&self, direction: Vec3) -> Vec3 {
        let (x, y, z) = (direction.x, direction.y, direction.z);
        let c = &self.coefficients;
        c[0] * 0.282095
            + c[1] * (0.488603 * y)
            + c[2] * (0.488603 * z)
            + c[3] * (0.488603 * x)
            + c[4] * (1.092548 * x * y)
            + c[5] * (1.092548 * y * z)
            + c[6] * (0.315392 * (3.0 * z * z - 1.0))
            + c[7] * (1.092548 * x * z)
            + c[8] * (0.546274 * (x * x - y * y))
    }
}

/// A bag of probes with radius-weighted blending.
#[derive(Debug, Clone, Default)]
pub struct ShProbeField {
    probes: Vec<ShProbe>,
}

impl ShProbeField {
    pub fn new(probes: Vec<ShProbe>) -> Self {
        Self { probes }
    }

    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }

    /// Blend all probes whose radius covers `position`, weighted by
    /// proximity, and evaluate the blend along `direction`. Zero outside
    /// every probe's radius.
    pub fn sample(&self, position: Vec3, direction: Vec3) -> Vec3 {
        let mut blended = Vec3::ZERO;
        let mut weight_sum = 0.0f32;
        for probe in &self.probes {
            let distance = (probe.position - position).length();
            if distance < probe.radius {
                let weight = 1.0 - distance / probe.radius;
                blended += probe.evaluate(direction) * weight;
                weight_sum += weight;
            }
        }
        if weight_sum > 0.0 {
            blended / weight_sum
        } else {
            Vec3::ZERO
        }
    }
}

/// Sampler variant backed by an `ShProbeField`, evaluated along the flat
/// (zero) direction. Shares the leak/indoor gate with the other variants.
pub struct ProbeFieldSampler<'a> {
    config: &'a SamplingConfig,
    scene: &'a dyn SceneOcclusion,
    field: &'a ShProbeField,
}

impl<'a> ProbeFieldSampler<'a> {
    pub fn new(
        config: &'a SamplingConfig,
        scene: &'a dyn SceneOcclusion,
        field: &'a ShProbeField,
    ) -> Self {
        Self {
            config,
            scene,
            field,
        }
    }
}

impl VolumetricSampler for ProbeFieldSampler<'_> {
    fn sample(&mut self, position: Vec3, extent: Vec3) -> Vec3 {
        let gate = SampleGate::new(self.config, self.scene);
        if gate.rejects(position, extent) {
            return Vec3::ZERO;
        }
        self.field.sample(position, Vec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brume_core::occluder::{Aabb, BoxScene};
    use brume_core::occlusion::NoOcclusion;

    fn dc_probe(position: Vec3, dc: Vec3, radius: f32) -> ShProbe {
        let mut coefficients = [Vec3::ZERO; 9];
        coefficients[0] = dc;
        ShProbe {
            position,
            coefficients,
            radius,
        }
    }

    #[test]
    fn test_flat_direction_kills_linear_bands() {
        let mut coefficients = [Vec3::ZERO; 9];
        coefficients[1] = Vec3::ONE;
        coefficients[3] = Vec3::ONE;
        coefficients[4] = Vec3::ONE;
        let probe = ShProbe {
            position: Vec3::ZERO,
            coefficients,
            radius: 1.0,
        };
        assert_eq!(probe.evaluate(Vec3::ZERO), Vec3::ZERO);
    }

    #[test]
    fn test_flat_direction_keeps_dc_band() {
        let probe = dc_probe(Vec3::ZERO, Vec3::splat(2.0), 1.0);
        let value = probe.evaluate(Vec3::ZERO);
        assert!((value - Vec3::splat(2.0 * 0.282095)).length() < 1e-6);
    }

    #[test]
    fn test_field_blends_by_proximity() {
        let field = ShProbeField::new(vec![
            dc_probe(Vec3::new(-1.0, 0.0, 0.0), Vec3::splat(1.0), 4.0),
            dc_probe(Vec3::new(1.0, 0.0, 0.0), Vec3::splat(3.0), 4.0),
        ]);
        // Midpoint: equal weights, exact average of evaluations
        let mid = field.sample(Vec3::ZERO, Vec3::ZERO);
        assert!((mid - Vec3::splat(2.0 * 0.282095)).length() < 1e-6);
    }

    #[test]
    fn test_field_zero_outside_all_radii() {
        let field = ShProbeField::new(vec![dc_probe(Vec3::ZERO, Vec3::ONE, 1.0)]);
        assert_eq!(field.sample(Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO), Vec3::ZERO);
    }

    #[test]
    fn test_sampler_respects_leak_gate() {
        let config = SamplingConfig {
            leak_prevention: true,
            leak_factor: 1.0,
            ..SamplingConfig::default()
        };
        let field = ShProbeField::new(vec![dc_probe(Vec3::ZERO, Vec3::ONE, 10.0)]);
        let scene = BoxScene::new(vec![Aabb::from_center(Vec3::ZERO, Vec3::splat(2.0))]);
        let mut gated = ProbeFieldSampler::new(&config, &scene, &field);
        assert_eq!(gated.sample(Vec3::ZERO, Vec3::ONE), Vec3::ZERO);

        let open = NoOcclusion;
        let plain = SamplingConfig::default();
        let mut sampler = ProbeFieldSampler::new(&plain, &open, &field);
        assert!(sampler.sample(Vec3::ZERO, Vec3::ONE).length() > 0.0);
    }
}
