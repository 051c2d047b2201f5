//! Image-based-lighting sampler: renders the surroundings of each probe
//! into six small faces and box-filters them down to one color.
//!
//! The face render itself is a host contract (`FaceRenderer`); this module
//! owns the convolution and the scratch-image lifecycle. Scratch is
//! acquired before each probe and released after it (or kept for the whole
//! bake, per configuration) so memory stays bounded across large lattices.

use brume_core::config::{SamplingConfig, ScratchRelease};
use brume_core::error::BakeError;
use brume_core::occlusion::SceneOcclusion;
use glam::Vec3;

use crate::sampler::{SampleGate, VolumetricSampler};

/// One of the six capture orientations: four 90-degree yaw steps plus
/// straight up and straight down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CubeFace {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

pub const ALL_FACES: [CubeFace; 6] = [
    CubeFace::PosX,
    CubeFace::NegX,
    CubeFace::PosY,
    CubeFace::NegY,
    CubeFace::PosZ,
    CubeFace::NegZ,
];

/// Small square RGB render target reused across faces.
#[derive(Debug, Clone)]
pub struct FaceImage {
    size: u32,
    texels: Vec<Vec3>,
}

impl FaceImage {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            texels: vec![Vec3::ZERO; (size * size) as usize],
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn fill(&mut self, color: Vec3) {
        self.texels.fill(color);
    }

    pub fn set(&mut self, x: u32, y: u32, color: Vec3) {
        self.texels[(y * self.size + x) as usize] = color;
    }

    pub fn get(&self, x: u32, y: u32) -> Vec3 {
        self.texels[(y * self.size + x) as usize]
    }

    /// Collapse the image to one texel through an iterative 2x2 box-filter
    /// mip chain (edge-clamped for odd sizes). For a uniform image this is
    /// exactly the image color; otherwise it is the box-filtered mean.
    pub fn box_reduce(&self) -> Vec3 {
        let mut size = self.size as usize;
        let mut level = self.texels.clone();
        while size > 1 {
            let next = size.div_ceil(2);
            let mut reduced = vec![Vec3::ZERO; next * next];
            for y in 0..next {
                for x in 0..next {
                    let x0 = 2 * x;
                    let y0 = 2 * y;
                    let x1 = (x0 + 1).min(size - 1);
                    let y1 = (y0 + 1).min(size - 1);
                    reduced[y * next + x] = (level[y0 * size + x0]
                        + level[y0 * size + x1]
                        + level[y1 * size + x0]
                        + level[y1 * size + x1])
                        * 0.25;
                }
            }
            level = reduced;
            size = next;
        }
        level[0]
    }
}

/// Host-side face render contract: draw the scene as seen from `position`
/// looking along `face` into `target`. One call per face per probe.
pub trait FaceRenderer {
    fn render_face(&mut self, position: Vec3, face: CubeFace, target: &mut FaceImage);
}

/// IBL sampling variant. Resource-heavy: six face renders per probe.
pub struct IblSampler<'a> {
    config: &'a SamplingConfig,
    scene: &'a dyn SceneOcclusion,
    renderer: &'a mut dyn FaceRenderer,
    face_size: u32,
    scratch: Option<FaceImage>,
}

impl<'a> IblSampler<'a> {
    pub fn new(
        config: &'a SamplingConfig,
        scene: &'a dyn SceneOcclusion,
        renderer: &'a mut dyn FaceRenderer,
        face_size: u32,
    ) -> Result<Self, BakeError> {
        if face_size == 0 {
            return Err(BakeError::MissingBackendResource(
                "IBL face render target requires a non-zero size".into(),
            ));
        }
        Ok(Self {
            config,
            scene,
            renderer,
            face_size,
            scratch: None,
        })
    }

    /// Whether scratch is currently held (whole-bake release mode only).
    pub fn holds_scratch(&self) -> bool {
        self.scratch.is_some()
    }
}

impl VolumetricSampler for IblSampler<'_> {
    fn sample(&mut self, position: Vec3, extent: Vec3) -> Vec3 {
        // Gate before acquiring scratch so the short-circuit paths never
        // hold a render target
        let gate = SampleGate::new(self.config, self.scene);
        if gate.rejects(position, extent) {
            return Vec3::ZERO;
        }

        let mut target = self
            .scratch
            .take()
            .unwrap_or_else(|| FaceImage::new(self.face_size));

        let mut accumulated = Vec3::ZERO;
        for face in ALL_FACES {
            target.fill(Vec3::ZERO);
            self.renderer.render_face(position, face, &mut target);
            accumulated += target.box_reduce();
        }

        if self.config.scratch_release == ScratchRelease::PerBake {
            self.scratch = Some(target);
        }

        // Uniform box filter over the six faces
        accumulated / 6.0
    }

    fn finish(&mut self) {
        self.scratch = None;
    }
}
