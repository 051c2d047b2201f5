//! Per-voxel merge of the six directional captures.
//!
//! Strictly an alpha-weighted average, not a first-hit pick: every capture
//! that saw the voxel contributes in proportion to its coverage
//! confidence. A voxel no capture saw stays zero.

use brume_core::error::BakeError;
use glam::{IVec3, Vec4};

use crate::capture::{capture_all, CaptureMode, CaptureSet, SliceRenderer};
use crate::grid::VoxelGrid;

/// Merge six capture sets into one voxel grid.
pub fn merge_captures(sets: &[CaptureSet; 6], resolution: IVec3) -> Result<VoxelGrid, BakeError> {
    let mut grid = VoxelGrid::new(resolution)?;
    for z in 0..resolution.z {
        for y in 0..resolution.y {
            for x in 0..resolution.x {
                let voxel = IVec3::new(x, y, z);
                let mut weighted = Vec4::ZERO;
                let mut weight_sum = 0.0f32;
                for set in sets {
                    let c = set.direction.project(voxel, resolution);
                    let texel = set.slices[c.slice as usize].get(c.u, c.v);
                    weighted += texel * texel.w;
                    weight_sum += texel.w;
                }
                if weight_sum > 0.0 {
                    grid.set(voxel, weighted / weight_sum);
                }
            }
        }
    }
    Ok(grid)
}

/// The albedo/emissive pair consumed by the downstream voxel tracer.
#[derive(Debug, Clone)]
pub struct VoxelizationBuffers {
    pub albedo: VoxelGrid,
    pub emissive: VoxelGrid,
}

/// Full voxelization pass: capture and merge both surface quantities.
pub fn voxelize(
    renderer: &mut dyn SliceRenderer,
    resolution: IVec3,
) -> Result<VoxelizationBuffers, BakeError> {
    let albedo_sets = capture_all(renderer, CaptureMode::Albedo, resolution)?;
    let emissive_sets = capture_all(renderer, CaptureMode::Emissive, resolution)?;
    Ok(VoxelizationBuffers {
        albedo: merge_captures(&albedo_sets, resolution)?,
        emissive: merge_captures(&emissive_sets, resolution)?,
    })
}
