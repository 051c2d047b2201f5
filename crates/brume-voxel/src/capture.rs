//! Six-direction orthographic slice capture.
//!
//! The actual rasterization is a host contract (`SliceRenderer`): the
//! driver walks every direction one voxel slice at a time and collects
//! `2 * (rx + ry + rz)` RGBA slice images, with alpha carrying surface
//! coverage confidence.

use brume_core::error::BakeError;
use glam::{IVec3, Vec4};

use crate::remap::{CaptureDirection, CAPTURE_DIRECTIONS};

/// Which surface quantity the replacement shading writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureMode {
    Albedo,
    Emissive,
}

/// One rendered cross-section. `width`/`height` are the slice-plane (u, v)
/// dimensions for the capture direction.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceImage {
    width: i32,
    height: i32,
    texels: Vec<Vec4>,
}

impl SliceImage {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            texels: vec![Vec4::ZERO; (width * height) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn get(&self, u: i32, v: i32) -> Vec4 {
        debug_assert!(u >= 0 && u < self.width && v >= 0 && v < self.height);
        self.texels[(v * self.width + u) as usize]
    }

    pub fn set(&mut self, u: i32, v: i32, value: Vec4) {
        debug_assert!(u >= 0 && u < self.width && v >= 0 && v < self.height);
        self.texels[(v * self.width + u) as usize] = value;
    }
}

/// Host-side orthographic rasterizer contract: draw the scene's surface
/// appearance within one voxel slice, as seen from `direction`, into
/// `target`. Alpha is the coverage weight used by the merge.
pub trait SliceRenderer {
    fn render_slice(
        &mut self,
        direction: CaptureDirection,
        mode: CaptureMode,
        slice: i32,
        target: &mut SliceImage,
    );
}

/// All slices captured in one direction.
#[derive(Debug, Clone)]
pub struct CaptureSet {
    pub direction: CaptureDirection,
    pub slices: Vec<SliceImage>,
}

/// Capture the scene from all six directions.
pub fn capture_all(
    renderer: &mut dyn SliceRenderer,
    mode: CaptureMode,
    resolution: IVec3,
) -> Result<[CaptureSet; 6], BakeError> {
    if resolution.min_element() <= 0 {
        return Err(BakeError::bad_resolution(resolution));
    }
    log::debug!(
        "capturing {} slices at {resolution} ({mode:?})",
        2 * (resolution.x + resolution.y + resolution.z)
    );
    Ok(CAPTURE_DIRECTIONS.map(|direction| {
        let (width, height) = direction.plane_size(resolution);
        let slices = (0..direction.slice_count(resolution))
            .map(|slice| {
                let mut image = SliceImage::new(width, height);
                renderer.render_slice(direction, mode, slice, &mut image);
                image
            })
            .collect();
        CaptureSet { direction, slices }
    }))
}
