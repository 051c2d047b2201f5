//! CPU analytic raytrace sampler: one shadow ray per light per probe.

use std::f32::consts::PI;

use brume_core::config::{AttenuationMode, SamplingConfig};
use brume_core::light::{LightDescriptor, LightKind};
use brume_core::occlusion::SceneOcclusion;
use glam::Vec3;

use crate::sampler::{SampleGate, VolumetricSampler};

/// Distances below this are treated as touching the light.
const MIN_LIGHT_DISTANCE: f32 = 1e-4;

/// Distance attenuation for local lights: `PI / d` or `PI / d^2`.
pub fn attenuation(mode: AttenuationMode, distance: f32) -> f32 {
    let d = distance.max(MIN_LIGHT_DISTANCE);
    match mode {
        AttenuationMode::Linear => PI / d,
        AttenuationMode::InverseSquare => PI / (d * d),
    }
}

/// Light sampler that shadow-tests every qualifying scene light against
/// opaque geometry.
pub struct CpuRaytraceSampler<'a> {
    config: &'a SamplingConfig,
    lights: &'a [LightDescriptor],
    scene: &'a dyn SceneOcclusion,
}

impl<'a> CpuRaytraceSampler<'a> {
    pub fn new(
        config: &'a SamplingConfig,
        lights: &'a [LightDescriptor],
        scene: &'a dyn SceneOcclusion,
    ) -> Self {
        Self {
            config,
            lights,
            scene,
        }
    }

    /// Contribution of one directional light. The shadow ray runs from the
    /// probe against the light's forward axis, unbounded.
    fn directional(&self, light: &LightDescriptor, position: Vec3) -> Vec3 {
        let occluded = self
            .scene
            .ray_hit(position, -light.forward, f32::INFINITY);
        let mut contribution =
            light.color * light.intensity * self.config.multiplier(light.kind);
        if occluded {
            // Fade, not extinction: soft shadow bleed
            contribution *= self.config.directional_occlusion_fade;
        }
        contribution
    }

    /// Contribution of a point, spot, or area light. The shadow ray runs
    /// from the light toward the probe, bounded by their distance.
    fn local(&self, light: &LightDescriptor, position: Vec3) -> Vec3 {
        let to_probe = position - light.position;
        let distance = to_probe.length();
        if self.config.range_limit && distance > light.range {
            return Vec3::ZERO;
        }
        let direction = if distance > MIN_LIGHT_DISTANCE {
            to_probe / distance
        } else {
            light.forward
        };

        let occluded = self.scene.ray_hit(light.position, direction, distance);
        let base = light.color
            * light.intensity
            * self.config.multiplier(light.kind)
            * attenuation(self.config.attenuation, distance);
        let faded = if occluded {
            base * self.config.local_occlusion_fade
        } else {
            base
        };

        // spot_angle is the full cone angle; the geometric angle is to one
        // edge, so it is doubled before the comparison
        let cone_angle = match light.kind {
            LightKind::Point => return faded,
            LightKind::Spot => light.spot_angle,
            LightKind::Area => 180.0,
            LightKind::Directional => return Vec3::ZERO, // routed to directional()
        };
        let edge_angle = direction.angle_between(light.forward).to_degrees();
        if edge_angle * 2.0 < cone_angle {
            return faded;
        }

        // Outside the cone: spot lights may bleed past the edge, area
        // lights never contribute behind their plane
        if light.kind == LightKind::Spot && self.config.spot_bleed && !occluded {
            base * self.config.spot_bleed_fade
        } else {
            Vec3::ZERO
        }
    }
}

impl VolumetricSampler for CpuRaytraceSampler<'_> {
    fn sample(&mut self, position: Vec3, extent: Vec3) -> Vec3 {
        let gate = SampleGate::new(self.config, self.scene);
        if gate.rejects(position, extent) {
            return Vec3::ZERO;
        }

        let mut accumulated = self.config.ambient_color * self.config.ambient_intensity;

        if self.config.skylight {
            // Skylight only reaches probes with an unobstructed view up
            let sky_blocked = self.scene.ray_hit(position, Vec3::Y, f32::INFINITY);
            if !sky_blocked {
                accumulated += self.config.skylight_color * self.config.skylight_intensity;
            }
        }

        for light in self.lights.iter().filter(|l| self.config.accepts(l)) {
            accumulated += match light.kind {
                LightKind::Directional => self.directional(light, position),
                _ => self.local(light, position),
            };
        }

        accumulated
    }
}
