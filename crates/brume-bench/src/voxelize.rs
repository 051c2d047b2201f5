//! CPU slice rasterizer over the benchmark scene's boxes, driving the
//! voxelization capture path without a host renderer.

use brume_voxel::capture::{CaptureMode, SliceImage, SliceRenderer};
use brume_voxel::remap::{CaptureDirection, SliceCoord};
use glam::{IVec3, Vec3, Vec4};

use crate::scenes::SceneConfig;

/// Rasterizes a slice by point-sampling each voxel cell center against the
/// scene's boxes. Alpha is 1 where a box covers the center, 0 elsewhere.
pub struct BoxSliceRenderer {
    boxes: Vec<(Vec3, Vec3)>,
    grid_min: Vec3,
    cell: Vec3,
    resolution: IVec3,
}

impl BoxSliceRenderer {
    pub fn new(scene: &SceneConfig) -> Self {
        Self {
            boxes: scene
                .boxes
                .iter()
                .map(|b| (b.center, b.half_extents))
                .collect(),
            grid_min: scene.volume_origin - scene.volume_size * 0.5,
            cell: scene.volume_size / scene.resolution.as_vec3(),
            resolution: scene.resolution,
        }
    }

    fn cell_center(&self, voxel: IVec3) -> Vec3 {
        self.grid_min + (voxel.as_vec3() + 0.5) * self.cell
    }

    fn covered(&self, point: Vec3) -> bool {
        self.boxes.iter().any(|&(center, half)| {
            let d = (point - center).abs();
            d.x <= half.x && d.y <= half.y && d.z <= half.z
        })
    }
}

impl SliceRenderer for BoxSliceRenderer {
    fn render_slice(
        &mut self,
        direction: CaptureDirection,
        mode: CaptureMode,
        slice: i32,
        target: &mut SliceImage,
    ) {
        for v in 0..target.height() {
            for u in 0..target.width() {
                let voxel = direction.unproject(SliceCoord { slice, u, v }, self.resolution);
                if !self.covered(self.cell_center(voxel)) {
                    continue;
                }
                let texel = match mode {
                    // Flat mid-gray stand-in for surface albedo
                    CaptureMode::Albedo => Vec4::new(0.5, 0.5, 0.5, 1.0),
                    // The synthetic scene has no emissive surfaces
                    CaptureMode::Emissive => Vec4::new(0.0, 0.0, 0.0, 1.0),
                };
                target.set(u, v, texel);
            }
        }
    }
}
