//! Declarative mapping between voxel coordinates and per-direction slice
//! coordinates.
//!
//! Each of the six capture directions is one table entry: which axis the
//! slices step along, which voxel axes land on the slice's (u, v), and
//! which coordinates mirror for negative-facing captures. Keeping this a
//! table keeps the symmetry auditable per direction.

use glam::IVec3;

/// World axis a capture steps along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn component(self, v: IVec3) -> i32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }
}

/// One of the six orthographic capture directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CaptureDirection {
    pub axis: Axis,
    /// True when the capture looks along the positive axis direction.
    pub positive: bool,
}

/// All six directions, in slice-array order.
pub const CAPTURE_DIRECTIONS: [CaptureDirection; 6] = [
    CaptureDirection { axis: Axis::X, positive: true },
    CaptureDirection { axis: Axis::X, positive: false },
    CaptureDirection { axis: Axis::Y, positive: true },
    CaptureDirection { axis: Axis::Y, positive: false },
    CaptureDirection { axis: Axis::Z, positive: true },
    CaptureDirection { axis: Axis::Z, positive: false },
];

/// A voxel coordinate expressed in one capture's local frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceCoord {
    pub slice: i32,
    pub u: i32,
    pub v: i32,
}

impl CaptureDirection {
    /// The two voxel axes spanning this direction's slice plane, in
    /// (u, v) order. The remaining axes keep their x < y < z ordering.
    pub fn plane_axes(self) -> (Axis, Axis) {
        match self.axis {
            Axis::X => (Axis::Y, Axis::Z),
            Axis::Y => (Axis::X, Axis::Z),
            Axis::Z => (Axis::X, Axis::Y),
        }
    }

    /// Slice-plane dimensions (u, v) for a given grid resolution.
    pub fn plane_size(self, resolution: IVec3) -> (i32, i32) {
        let (ua, va) = self.plane_axes();
        (ua.component(resolution), va.component(resolution))
    }

    /// Number of slices this capture produces.
    pub fn slice_count(self, resolution: IVec3) -> i32 {
        self.axis.component(resolution)
    }

    /// Project a voxel coordinate into this capture's slice coordinates.
    ///
    /// Negative-facing captures step from the far side and mirror the
    /// local u axis, so the same voxel is addressed consistently from both
    /// sides of every axis.
    pub fn project(self, voxel: IVec3, resolution: IVec3) -> SliceCoord {
        let (ua, va) = self.plane_axes();
        let along = self.axis.component(voxel);
        let u = ua.component(voxel);
        let v = va.component(voxel);
        if self.positive {
            SliceCoord { slice: along, u, v }
        } else {
            SliceCoord {
                slice: self.axis.component(resolution) - 1 - along,
                u: ua.component(resolution) - 1 - u,
                v,
            }
        }
    }

    /// Inverse of [`project`](Self::project): recover the voxel coordinate
    /// a slice texel belongs to. Used by rasterizers that draw slices
    /// directly from voxel-space scene data.
    pub fn unproject(self, coord: SliceCoord, resolution: IVec3) -> IVec3 {
        let (ua, va) = self.plane_axes();
        let (along, u) = if self.positive {
            (coord.slice, coord.u)
        } else {
            (
                self.axis.component(resolution) - 1 - coord.slice,
                ua.component(resolution) - 1 - coord.u,
            )
        };
        let mut voxel = IVec3::ZERO;
        set_component(&mut voxel, self.axis, along);
        set_component(&mut voxel, ua, u);
        set_component(&mut voxel, va, coord.v);
        voxel
    }
}

fn set_component(v: &mut IVec3, axis: Axis, value: i32) {
    match axis {
        Axis::X => v.x = value,
        Axis::Y => v.y = value,
        Axis::Z => v.z = value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const RES: IVec3 = IVec3::new(3, 4, 5);

    #[test]
    fn test_six_unique_directions() {
        let set: HashSet<_> = CAPTURE_DIRECTIONS.iter().collect();
        assert_eq!(set.len(), 6);
    }

    #[test]
    fn test_slice_counts_sum_to_capture_total() {
        let total: i32 = CAPTURE_DIRECTIONS
            .iter()
            .map(|d| d.slice_count(RES))
            .sum();
        assert_eq!(total, 2 * (RES.x + RES.y + RES.z));
    }

    #[test]
    fn test_projection_is_bijective_per_direction() {
        for dir in CAPTURE_DIRECTIONS {
            let mut seen = HashSet::new();
            for z in 0..RES.z {
                for y in 0..RES.y {
                    for x in 0..RES.x {
                        let c = dir.project(IVec3::new(x, y, z), RES);
                        let (uw, vw) = dir.plane_size(RES);
                        assert!(c.slice >= 0 && c.slice < dir.slice_count(RES));
                        assert!(c.u >= 0 && c.u < uw);
                        assert!(c.v >= 0 && c.v < vw);
                        assert!(seen.insert((c.slice, c.u, c.v)), "{dir:?} collision");
                    }
                }
            }
            assert_eq!(seen.len(), (RES.x * RES.y * RES.z) as usize);
        }
    }

    #[test]
    fn test_positive_x_projection() {
        let dir = CAPTURE_DIRECTIONS[0];
        let c = dir.project(IVec3::new(1, 2, 3), RES);
        assert_eq!((c.slice, c.u, c.v), (1, 2, 3));
    }

    #[test]
    fn test_negative_x_mirrors_slice_and_u() {
        let dir = CAPTURE_DIRECTIONS[1];
        let c = dir.project(IVec3::new(1, 2, 3), RES);
        // slice mirrored over x (3 wide), u mirrored over y (4 tall)
        assert_eq!((c.slice, c.u, c.v), (1, 1, 3));
    }

    #[test]
    fn test_project_unproject_roundtrip() {
        for dir in CAPTURE_DIRECTIONS {
            for z in 0..RES.z {
                for y in 0..RES.y {
                    for x in 0..RES.x {
                        let voxel = IVec3::new(x, y, z);
                        let back = dir.unproject(dir.project(voxel, RES), RES);
                        assert_eq!(back, voxel, "{dir:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_opposite_directions_agree_on_voxel() {
        // The same voxel projected from both sides of an axis must land on
        // mirrored slice indices
        for pair in CAPTURE_DIRECTIONS.chunks(2) {
            let (pos, neg) = (pair[0], pair[1]);
            let voxel = IVec3::new(2, 1, 4);
            let a = pos.project(voxel, RES);
            let b = neg.project(voxel, RES);
            assert_eq!(a.slice + b.slice, pos.slice_count(RES) - 1);
            assert_eq!(a.v, b.v);
        }
    }
}
