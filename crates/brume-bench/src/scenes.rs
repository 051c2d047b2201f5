//! Synthetic bake scenes, loadable from RON or built in.

use brume_core::config::{DensityMode, DensityParams, FilterParams, SamplingConfig};
use brume_core::light::LightDescriptor;
use brume_core::occluder::{Aabb, BoxScene};
use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

/// One opaque box in the synthetic scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxDef {
    pub center: Vec3,
    pub half_extents: Vec3,
}

/// Complete description of a benchmark bake.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    pub name: String,
    pub volume_origin: Vec3,
    pub volume_size: Vec3,
    pub resolution: IVec3,
    pub boxes: Vec<BoxDef>,
    pub lights: Vec<LightDescriptor>,
    pub sampling: SamplingConfig,
    pub density: DensityParams,
    pub filters: FilterParams,
}

impl SceneConfig {
    /// Built-in scene: a courtyard of pillars under a sun with two accent
    /// lights, height-based fog, light blur.
    pub fn courtyard() -> Self {
        let mut boxes = vec![BoxDef {
            // Ground slab
            center: Vec3::new(0.0, -1.0, 0.0),
            half_extents: Vec3::new(30.0, 1.0, 30.0),
        }];
        for ix in -2..=2 {
            for iz in -2..=2 {
                if (ix + iz) % 2 == 0 {
                    boxes.push(BoxDef {
                        center: Vec3::new(ix as f32 * 8.0, 3.0, iz as f32 * 8.0),
                        half_extents: Vec3::new(0.8, 3.0, 0.8),
                    });
                }
            }
        }
        Self {
            name: "courtyard".into(),
            volume_origin: Vec3::new(0.0, 6.0, 0.0),
            volume_size: Vec3::new(48.0, 16.0, 48.0),
            resolution: IVec3::new(32, 16, 32),
            boxes,
            lights: vec![
                LightDescriptor::directional(
                    Vec3::new(-0.4, -1.0, -0.2).normalize(),
                    Vec3::new(1.0, 0.95, 0.85),
                    1.2,
                ),
                LightDescriptor::point(
                    Vec3::new(6.0, 2.0, -4.0),
                    Vec3::new(1.0, 0.5, 0.2),
                    3.0,
                    14.0,
                ),
                LightDescriptor::spot(
                    Vec3::new(-8.0, 7.0, 8.0),
                    Vec3::new(0.3, -1.0, -0.3).normalize(),
                    Vec3::new(0.3, 0.6, 1.0),
                    4.0,
                    20.0,
                    50.0,
                ),
            ],
            sampling: SamplingConfig {
                directional_occlusion_fade: 0.2,
                local_occlusion_fade: 0.1,
                skylight: true,
                skylight_intensity: 0.4,
                leak_prevention: true,
                leak_factor: 0.9,
                ..SamplingConfig::default()
            },
            density: DensityParams {
                mode: DensityMode::Height,
                height: 0.0,
                falloff: 12.0,
                density_bottom: 0.8,
                density_top: 0.05,
                ..DensityParams::default()
            },
            filters: FilterParams {
                adjustments: true,
                blur: true,
                brightness: 1.1,
                blur_samples: 2,
                ..FilterParams::default()
            },
        }
    }

    /// Load a scene description from a RON file.
    pub fn from_ron(path: &std::path::Path) -> Result<Self, String> {
        let text = std::fs::read_to_string(path).map_err(|e| format!("read {path:?}: {e}"))?;
        ron::from_str(&text).map_err(|e| format!("parse {path:?}: {e}"))
    }

    /// Occlusion backend for this scene's geometry.
    pub fn build_occlusion(&self) -> BoxScene {
        BoxScene::new(
            self.boxes
                .iter()
                .map(|b| Aabb::from_center(b.center, b.half_extents))
                .collect(),
        )
    }
}
