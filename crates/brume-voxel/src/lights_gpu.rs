//! Homogeneous light buffers for the downstream GPU voxel tracer.
//!
//! One tightly packed buffer per light kind. The consuming kernel cannot
//! branch on buffer presence the way host code can, so each buffer ships
//! with an explicit presence flag instead of a null check.

use brume_core::config::SamplingConfig;
use brume_core::light::{LightKind, SceneSnapshot};

/// GPU directional light entry (32 bytes).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuDirectionalLight {
    pub direction: [f32; 3],
    pub intensity: f32,
    pub color: [f32; 3],
    pub _pad: f32,
}

/// GPU point light entry (32 bytes).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuPointLight {
    pub position: [f32; 3],
    pub range: f32,
    pub color: [f32; 3],
    pub intensity: f32,
}

/// GPU spot light entry (48 bytes).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuSpotLight {
    pub position: [f32; 3],
    pub range: f32,
    pub direction: [f32; 3],
    /// Full cone angle in degrees.
    pub angle: f32,
    pub color: [f32; 3],
    pub intensity: f32,
}

/// GPU area light entry (48 bytes).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuAreaLight {
    pub position: [f32; 3],
    pub range: f32,
    pub direction: [f32; 3],
    pub _pad: f32,
    pub color: [f32; 3],
    pub intensity: f32,
}

/// Serialized per-kind light buffers plus presence flags.
#[derive(Debug, Clone, Default)]
pub struct LightBuffers {
    pub directional: Vec<GpuDirectionalLight>,
    pub point: Vec<GpuPointLight>,
    pub spot: Vec<GpuSpotLight>,
    pub area: Vec<GpuAreaLight>,
    pub has_directional: bool,
    pub has_point: bool,
    pub has_spot: bool,
    pub has_area: bool,
}

impl LightBuffers {
    /// Serialize the snapshot's qualifying lights (same enabled/kind/mode
    /// gating as the sampling path) into homogeneous buffers.
    pub fn from_snapshot(snapshot: &SceneSnapshot, config: &SamplingConfig) -> Self {
        let mut buffers = LightBuffers::default();
        for light in snapshot.lights.iter().filter(|l| config.accepts(l)) {
            match light.kind {
                LightKind::Directional => buffers.directional.push(GpuDirectionalLight {
                    direction: light.forward.to_array(),
                    intensity: light.intensity,
                    color: light.color.to_array(),
                    _pad: 0.0,
                }),
                LightKind::Point => buffers.point.push(GpuPointLight {
                    position: light.position.to_array(),
                    range: light.range,
                    color: light.color.to_array(),
                    intensity: light.intensity,
                }),
                LightKind::Spot => buffers.spot.push(GpuSpotLight {
                    position: light.position.to_array(),
                    range: light.range,
                    direction: light.forward.to_array(),
                    angle: light.spot_angle,
                    color: light.color.to_array(),
                    intensity: light.intensity,
                }),
                LightKind::Area => buffers.area.push(GpuAreaLight {
                    position: light.position.to_array(),
                    range: light.range,
                    direction: light.forward.to_array(),
                    _pad: 0.0,
                    color: light.color.to_array(),
                    intensity: light.intensity,
                }),
            }
        }
        buffers.has_directional = !buffers.directional.is_empty();
        buffers.has_point = !buffers.point.is_empty();
        buffers.has_spot = !buffers.spot.is_empty();
        buffers.has_area = !buffers.area.is_empty();
        buffers
    }

    /// Raw bytes of the point buffer (the other kinds follow the same
    /// pattern through `bytemuck::cast_slice`).
    pub fn point_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brume_core::light::LightDescriptor;
    use glam::Vec3;

    #[test]
    fn test_struct_sizes_match_kernel_layout() {
        assert_eq!(std::mem::size_of::<GpuDirectionalLight>(), 32);
        assert_eq!(std::mem::size_of::<GpuPointLight>(), 32);
        assert_eq!(std::mem::size_of::<GpuSpotLight>(), 48);
        assert_eq!(std::mem::size_of::<GpuAreaLight>(), 48);
    }

    #[test]
    fn test_presence_flags_track_buffers() {
        let snapshot = SceneSnapshot::new(vec![
            LightDescriptor::directional(Vec3::NEG_Y, Vec3::ONE, 1.0),
            LightDescriptor::point(Vec3::ZERO, Vec3::ONE, 1.0, 5.0),
        ]);
        let buffers = LightBuffers::from_snapshot(&snapshot, &SamplingConfig::default());
        assert!(buffers.has_directional && buffers.has_point);
        assert!(!buffers.has_spot && !buffers.has_area);
        assert_eq!(buffers.directional.len(), 1);
        assert_eq!(buffers.point.len(), 1);
    }

    #[test]
    fn test_serialization_respects_config_gating() {
        let mut disabled = LightDescriptor::point(Vec3::ZERO, Vec3::ONE, 1.0, 5.0);
        disabled.enabled = false;
        let snapshot = SceneSnapshot::new(vec![disabled]);
        let buffers = LightBuffers::from_snapshot(&snapshot, &SamplingConfig::default());
        assert!(!buffers.has_point);
        assert!(buffers.point_bytes().is_empty());
    }

    #[test]
    fn test_descriptor_fields_carried_through() {
        let spot = LightDescriptor::spot(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::NEG_Y,
            Vec3::new(0.5, 0.6, 0.7),
            4.0,
            25.0,
            42.0,
        );
        let snapshot = SceneSnapshot::new(vec![spot]);
        let buffers = LightBuffers::from_snapshot(&snapshot, &SamplingConfig::default());
        let entry = buffers.spot[0];
        assert_eq!(entry.position, [1.0, 2.0, 3.0]);
        assert_eq!(entry.range, 25.0);
        assert_eq!(entry.angle, 42.0);
        assert_eq!(entry.intensity, 4.0);
    }
}
