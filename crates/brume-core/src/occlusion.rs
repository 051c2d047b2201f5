use glam::Vec3;

/// Read-only occlusion queries against opaque scene geometry. Supplied by
/// the host scene or physics system; the baker only consumes it.
///
/// Implementations must be safe for concurrent read-only queries if the
/// caller parallelizes probe sampling.
pub trait SceneOcclusion {
    /// Does opaque geometry intersect the ray segment
    /// `origin + t * direction, t in [0, max_distance]`?
    /// `direction` must be unit length; `max_distance` may be infinite.
    fn ray_hit(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> bool;

    /// Does the axis-aligned box at `center` with the given half extents
    /// overlap opaque geometry?
    fn box_overlap(&self, center: Vec3, half_extents: Vec3) -> bool;
}

/// Occlusion backend that reports empty space everywhere. Useful for
/// open-air bakes and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOcclusion;

impl SceneOcclusion for NoOcclusion {
    fn ray_hit(&self, _origin: Vec3, _direction: Vec3, _max_distance: f32) -> bool {
        false
    }

    fn box_overlap(&self, _center: Vec3, _half_extents: Vec3) -> bool {
        false
    }
}
