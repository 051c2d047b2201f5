use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::light::{LightBakeMode, LightDescriptor, LightKind};

/// Working color space, selects the luminance weight set used by the
/// density compositor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorSpace {
    Gamma,
    Linear,
}

/// Distance attenuation applied to local (point/spot/area) lights.
///
/// Only the distance-only forms are implemented; a historical
/// `distance * range` variant exists in the lineage of this algorithm but
/// was never the documented behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttenuationMode {
    /// `PI / distance`
    Linear,
    /// `PI / distance^2`
    InverseSquare,
}

/// When IBL scratch resources are released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScratchRelease {
    /// Release after every probe. Bounds memory across large lattices.
    PerProbe,
    /// Keep scratch alive for the whole bake, release at the end.
    PerBake,
}

/// Light-sampling configuration, owned by the caller and immutable during
/// a bake.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingConfig {
    pub include_directional: bool,
    pub include_point: bool,
    pub include_spot: bool,
    pub include_area: bool,

    pub include_realtime: bool,
    pub include_mixed: bool,
    pub include_baked: bool,

    pub directional_multiplier: f32,
    pub point_multiplier: f32,
    pub spot_multiplier: f32,
    pub area_multiplier: f32,

    /// Fraction of a directional light retained when its shadow ray is
    /// blocked. 0 = hard shadow, 1 = occlusion ignored.
    pub directional_occlusion_fade: f32,
    /// Same, for point/spot/area lights.
    pub local_occlusion_fade: f32,

    /// Let unoccluded samples outside a spot cone receive a faded
    /// contribution instead of nothing.
    pub spot_bleed: bool,
    pub spot_bleed_fade: f32,

    pub ambient_color: Vec3,
    pub ambient_intensity: f32,

    pub skylight: bool,
    pub skylight_color: Vec3,
    pub skylight_intensity: f32,

    /// Suppress samples whose cell overlaps solid geometry.
    pub leak_prevention: bool,
    /// Scales the cell extent used for the leak overlap test.
    pub leak_factor: f32,

    /// Only accept probes enclosed by geometry on all six axes.
    pub indoor_only: bool,

    /// Zero local-light contributions beyond the light's range.
    pub range_limit: bool,

    pub attenuation: AttenuationMode,

    pub scratch_release: ScratchRelease,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            include_directional: true,
            include_point: true,
            include_spot: true,
            include_area: true,
            include_realtime: false,
            include_mixed: true,
            include_baked: true,
            directional_multiplier: 1.0,
            point_multiplier: 1.0,
            spot_multiplier: 1.0,
            area_multiplier: 1.0,
            directional_occlusion_fade: 0.0,
            local_occlusion_fade: 0.0,
            spot_bleed: false,
            spot_bleed_fade: 0.25,
            ambient_color: Vec3::ZERO,
            ambient_intensity: 0.0,
            skylight: false,
            skylight_color: Vec3::new(0.5, 0.6, 0.8),
            skylight_intensity: 1.0,
            leak_prevention: false,
            leak_factor: 1.0,
            indoor_only: false,
            range_limit: true,
            attenuation: AttenuationMode::Linear,
            scratch_release: ScratchRelease::PerProbe,
        }
    }
}

impl SamplingConfig {
    /// Whether a light participates in this bake at all.
    pub fn accepts(&self, light: &LightDescriptor) -> bool {
        if !light.enabled {
            return false;
        }
        let kind_ok = match light.kind {
            LightKind::Directional => self.include_directional,
            LightKind::Point => self.include_point,
            LightKind::Spot => self.include_spot,
            LightKind::Area => self.include_area,
        };
        let mode_ok = match light.bake_mode {
            LightBakeMode::Realtime => self.include_realtime,
            LightBakeMode::Mixed => self.include_mixed,
            LightBakeMode::Baked => self.include_baked,
        };
        kind_ok && mode_ok
    }

    pub fn multiplier(&self, kind: LightKind) -> f32 {
        match kind {
            LightKind::Directional => self.directional_multiplier,
            LightKind::Point => self.point_multiplier,
            LightKind::Spot => self.spot_multiplier,
            LightKind::Area => self.area_multiplier,
        }
    }
}

/// How the density compositor derives a voxel's opacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DensityMode {
    Constant,
    Luminance,
    Height,
    HeightLuminance,
}

/// Density compositing parameters, immutable per bake.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DensityParams {
    pub mode: DensityMode,
    pub constant: f32,
    /// World-space Y where the height band starts.
    pub height: f32,
    /// Thickness of the transition band.
    pub falloff: f32,
    pub density_bottom: f32,
    pub density_top: f32,
    pub invert_luminance: bool,
    pub color_space: ColorSpace,
}

impl Default for DensityParams {
    fn default() -> Self {
        Self {
            mode: DensityMode::Constant,
            constant: 1.0,
            height: 0.0,
            falloff: 10.0,
            density_bottom: 1.0,
            density_top: 0.0,
            invert_luminance: false,
            color_space: ColorSpace::Linear,
        }
    }
}

/// How the two post-filter stages combine when both are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterComposition {
    /// Both stages read the raw source; the output is the last enabled
    /// stage's result. This is the documented legacy behavior and the
    /// default.
    Parallel,
    /// The blur reads the adjusted volume.
    Chained,
}

/// Post-filter parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterParams {
    pub adjustments: bool,
    pub blur: bool,
    pub composition: FilterComposition,

    pub brightness: f32,
    pub contrast: f32,
    pub saturation: f32,
    pub vibrance: f32,
    /// Hue rotation in degrees.
    pub hue_shift: f32,
    pub gamma: f32,
    pub color_filter: Vec3,
    pub color_filter_strength: f32,
    pub color_multiply: Vec3,

    /// Gaussian blur radius in voxels per 1D pass.
    pub blur_samples: u32,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            adjustments: false,
            blur: false,
            composition: FilterComposition::Parallel,
            brightness: 1.0,
            contrast: 1.0,
            saturation: 1.0,
            vibrance: 0.0,
            hue_shift: 0.0,
            gamma: 1.0,
            color_filter: Vec3::ONE,
            color_filter_strength: 0.0,
            color_multiply: Vec3::ONE,
            blur_samples: 2,
        }
    }
}
