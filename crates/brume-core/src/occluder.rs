//! CPU occlusion backend over a flat list of axis-aligned boxes.
//!
//! Enough to bake and test without a host engine. Queries are read-only,
//! so the backend is safe to share across threads.

use glam::Vec3;

use crate::occlusion::SceneOcclusion;

/// Axis-aligned box in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        debug_assert!(min.x <= max.x && min.y <= max.y && min.z <= max.z);
        Self { min, max }
    }

    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Slab-method ray test over `t in [0, max_distance]`.
    /// `direction` must be unit length; `max_distance` may be infinite.
    pub fn hit_by_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> bool {
        let mut t_enter = 0.0f32;
        let mut t_exit = max_distance;
        for axis in 0..3 {
            let o = origin[axis];
            let d = direction[axis];
            if d.abs() < 1e-8 {
                // Ray parallel to this slab: must start inside it
                if o < self.min[axis] || o > self.max[axis] {
                    return false;
                }
            } else {
                let inv = 1.0 / d;
                let mut t0 = (self.min[axis] - o) * inv;
                let mut t1 = (self.max[axis] - o) * inv;
                if t0 > t1 {
                    std::mem::swap(&mut t0, &mut t1);
                }
                t_enter = t_enter.max(t0);
                t_exit = t_exit.min(t1);
                if t_enter > t_exit {
                    return false;
                }
            }
        }
        true
    }

    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }
}

/// Occlusion world backed by a list of opaque boxes.
#[derive(Debug, Clone, Default)]
pub struct BoxScene {
    boxes: Vec<Aabb>,
}

impl BoxScene {
    pub fn new(boxes: Vec<Aabb>) -> Self {
        Self { boxes }
    }

    pub fn push(&mut self, aabb: Aabb) {
        self.boxes.push(aabb);
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

impl SceneOcclusion for BoxScene {
    fn ray_hit(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> bool {
        self.boxes
            .iter()
            .any(|b| b.hit_by_ray(origin, direction, max_distance))
    }

    fn box_overlap(&self, center: Vec3, half_extents: Vec3) -> bool {
        let query = Aabb::from_center(center, half_extents);
        self.boxes.iter().any(|b| b.overlaps(&query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box_at(center: Vec3) -> Aabb {
        Aabb::from_center(center, Vec3::splat(0.5))
    }

    #[test]
    fn test_ray_hits_box_ahead() {
        let b = unit_box_at(Vec3::new(5.0, 0.0, 0.0));
        assert!(b.hit_by_ray(Vec3::ZERO, Vec3::X, f32::INFINITY));
        assert!(b.hit_by_ray(Vec3::ZERO, Vec3::X, 10.0));
    }

    #[test]
    fn test_ray_respects_max_distance() {
        let b = unit_box_at(Vec3::new(5.0, 0.0, 0.0));
        assert!(!b.hit_by_ray(Vec3::ZERO, Vec3::X, 4.0));
    }

    #[test]
    fn test_ray_ignores_box_behind() {
        let b = unit_box_at(Vec3::new(-5.0, 0.0, 0.0));
        assert!(!b.hit_by_ray(Vec3::ZERO, Vec3::X, f32::INFINITY));
    }

    #[test]
    fn test_parallel_ray_misses_offset_slab() {
        let b = unit_box_at(Vec3::new(5.0, 3.0, 0.0));
        // Travels along X at y=0, box spans y in [2.5, 3.5]
        assert!(!b.hit_by_ray(Vec3::ZERO, Vec3::X, f32::INFINITY));
    }

    #[test]
    fn test_ray_starting_inside_hits() {
        let b = unit_box_at(Vec3::ZERO);
        assert!(b.hit_by_ray(Vec3::ZERO, Vec3::Y, f32::INFINITY));
    }

    #[test]
    fn test_box_overlap() {
        let scene = BoxScene::new(vec![unit_box_at(Vec3::ZERO)]);
        assert!(scene.box_overlap(Vec3::new(0.7, 0.0, 0.0), Vec3::splat(0.3)));
        assert!(!scene.box_overlap(Vec3::new(2.0, 0.0, 0.0), Vec3::splat(0.3)));
    }

    #[test]
    fn test_empty_scene_never_occludes() {
        let scene = BoxScene::default();
        assert!(!scene.ray_hit(Vec3::ZERO, Vec3::Y, f32::INFINITY));
        assert!(!scene.box_overlap(Vec3::ZERO, Vec3::ONE));
    }
}
