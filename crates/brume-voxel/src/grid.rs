use brume_core::error::BakeError;
use glam::{IVec3, Vec4};

/// Dense RGBA voxel grid produced by the voxelization path. Unlike the fog
/// `Volume`, this grid is cell-based: resolution `r` stores exactly `r`
/// texels per axis. Voxel order is `x + y*rx + z*rx*ry`.
#[derive(Debug, Clone, PartialEq)]
pub struct VoxelGrid {
    resolution: IVec3,
    data: Vec<Vec4>,
}

impl VoxelGrid {
    pub fn new(resolution: IVec3) -> Result<Self, BakeError> {
        if resolution.min_element() <= 0 {
            return Err(BakeError::bad_resolution(resolution));
        }
        let len = (resolution.x * resolution.y * resolution.z) as usize;
        Ok(Self {
            resolution,
            data: vec![Vec4::ZERO; len],
        })
    }

    pub fn resolution(&self) -> IVec3 {
        self.resolution
    }

    pub fn index(&self, voxel: IVec3) -> usize {
        let r = self.resolution;
        debug_assert!(
            voxel.min_element() >= 0 && voxel.x < r.x && voxel.y < r.y && voxel.z < r.z,
            "voxel {voxel} out of bounds {r}"
        );
        (voxel.x + voxel.y * r.x + voxel.z * r.x * r.y) as usize
    }

    pub fn get(&self, voxel: IVec3) -> Vec4 {
        self.data[self.index(voxel)]
    }

    pub fn set(&mut self, voxel: IVec3, value: Vec4) {
        let idx = self.index(voxel);
        self.data[idx] = value;
    }

    pub fn texels(&self) -> &[Vec4] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_size_is_resolution_product() {
        let g = VoxelGrid::new(IVec3::new(2, 3, 4)).unwrap();
        assert_eq!(g.texels().len(), 24);
    }

    #[test]
    fn test_grid_rejects_nonpositive_resolution() {
        assert!(VoxelGrid::new(IVec3::new(2, 0, 4)).is_err());
    }
}
