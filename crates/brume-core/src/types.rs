use glam::{IVec3, Vec3, Vec4};

use crate::error::BakeError;

/// One sample point in the bake lattice. Created once per voxel by the
/// orchestrator, read-only during sampling, discarded after the write.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Probe {
    /// Zero-based lattice coordinate, one per output voxel.
    pub lattice: IVec3,
    /// World-space position (cell center, symmetric about the volume origin).
    pub position: Vec3,
    /// World-space cell extent per axis. Non-uniform only when the
    /// resolution is non-uniform per axis.
    pub extent: Vec3,
}

/// Dense 3-axis grid of RGBA samples (color + density), the bake's output
/// artifact.
///
/// The lattice is edge-inclusive: a resolution of `r` cells per axis stores
/// `r + 1` samples per axis, so the outer sample shell sits exactly on the
/// volume bounds. Voxel order is `x + y*sx + z*sx*sy`.
#[derive(Debug, Clone)]
pub struct Volume {
    resolution: IVec3,
    origin: Vec3,
    size: Vec3,
    data: Vec<Vec4>,
}

impl Volume {
    /// Allocate a zeroed volume. Fails if any resolution axis is not a
    /// positive integer.
    pub fn new(origin: Vec3, size: Vec3, resolution: IVec3) -> Result<Self, BakeError> {
        if resolution.min_element() <= 0 {
            return Err(BakeError::bad_resolution(resolution));
        }
        let samples = resolution + IVec3::ONE;
        let len = (samples.x as usize) * (samples.y as usize) * (samples.z as usize);
        Ok(Self {
            resolution,
            origin,
            size,
            data: vec![Vec4::ZERO; len],
        })
    }

    /// Cell resolution per axis (not the sample count).
    pub fn resolution(&self) -> IVec3 {
        self.resolution
    }

    /// Samples per axis: `resolution + 1` (edge-inclusive).
    pub fn sample_counts(&self) -> IVec3 {
        self.resolution + IVec3::ONE
    }

    /// World-space center of the volume.
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// World-space size of the volume.
    pub fn size(&self) -> Vec3 {
        self.size
    }

    /// Total number of stored voxels.
    pub fn voxel_count(&self) -> usize {
        self.data.len()
    }

    /// Flat index of a lattice coordinate. The coordinate-to-index mapping
    /// is a bijection over `[0, sx) x [0, sy) x [0, sz)`.
    pub fn index(&self, lattice: IVec3) -> usize {
        let s = self.sample_counts();
        debug_assert!(
            lattice.min_element() >= 0 && lattice.x < s.x && lattice.y < s.y && lattice.z < s.z,
            "lattice coordinate {lattice} out of bounds {s}"
        );
        (lattice.x + lattice.y * s.x + lattice.z * s.x * s.y) as usize
    }

    pub fn get(&self, lattice: IVec3) -> Vec4 {
        self.data[self.index(lattice)]
    }

    pub fn set(&mut self, lattice: IVec3, value: Vec4) {
        let idx = self.index(lattice);
        self.data[idx] = value;
    }

    /// Raw sample storage, voxel-index order.
    pub fn samples(&self) -> &[Vec4] {
        &self.data
    }

    pub fn samples_mut(&mut self) -> &mut [Vec4] {
        &mut self.data
    }

    /// World position of a lattice sample: symmetric about the origin, with
    /// the first and last samples per axis on the volume bounds.
    pub fn sample_position(&self, lattice: IVec3) -> Vec3 {
        let r = self.resolution.as_vec3();
        let step = self.size / r;
        self.origin + (lattice.as_vec3() - r * 0.5) * step
    }

    /// World-space cell extent per axis.
    pub fn cell_extent(&self) -> Vec3 {
        self.size / self.resolution.as_vec3()
    }
}
