//! Grid bake orchestrator: walks the probe lattice, drives the sampler
//! and density compositor, and assembles the output volume.

use brume_core::config::{DensityParams, FilterParams};
use brume_core::error::BakeError;
use brume_core::progress::ProgressSink;
use brume_core::types::{Probe, Volume};
use glam::{IVec3, Vec3, Vec4};

use crate::density::compute_density;
use crate::sampler::VolumetricSampler;

/// Everything a bake needs besides the sampler and scene.
#[derive(Debug, Clone)]
pub struct BakeRequest {
    /// World-space center of the volume.
    pub origin: Vec3,
    /// World-space size of the volume.
    pub size: Vec3,
    /// Cell resolution per axis. The lattice is edge-inclusive, so the
    /// output stores `resolution + 1` samples per axis.
    pub resolution: IVec3,
    pub density: DensityParams,
}

/// The raw/filtered volume pair handed to the persistence collaborator.
#[derive(Debug, Clone)]
pub struct BakeArtifacts {
    pub raw: Volume,
    pub filtered: Volume,
}

/// Bake one volume: sequential, blocking, deterministic. The traversal is
/// a plain triple loop; per-probe sampling is stateless and could be
/// parallelized if the occlusion backend allows concurrent reads.
pub fn bake(
    request: &BakeRequest,
    sampler: &mut dyn VolumetricSampler,
    progress: &dyn ProgressSink,
) -> Result<Volume, BakeError> {
    // Fails before any voxel writes on a non-positive resolution
    let mut volume = Volume::new(request.origin, request.size, request.resolution)?;
    let samples = volume.sample_counts();
    let extent = volume.cell_extent();

    log::info!(
        "baking volume: {}x{}x{} samples ({} voxels)",
        samples.x,
        samples.y,
        samples.z,
        volume.voxel_count()
    );
    progress.report("setup", 0.0);

    for z in 0..samples.z {
        for y in 0..samples.y {
            for x in 0..samples.x {
                let lattice = IVec3::new(x, y, z);
                let probe = Probe {
                    lattice,
                    position: volume.sample_position(lattice),
                    extent,
                };
                let color = sampler.sample(probe.position, probe.extent);
                let alpha = compute_density(&request.density, probe.position, color);
                volume.set(lattice, Vec4::new(color.x, color.y, color.z, alpha));
            }
        }
        progress.report("sampling", (z + 1) as f32 / samples.z as f32);
    }

    sampler.finish();
    progress.report("done", 1.0);
    Ok(volume)
}

/// Bake and post-filter in one call, returning both artifacts: the raw
/// volume (saved alongside the filtered one so filters can be re-run
/// without re-sampling) and the filtered result.
pub fn bake_with_filters(
    request: &BakeRequest,
    sampler: &mut dyn VolumetricSampler,
    filter: &FilterParams,
    progress: &dyn ProgressSink,
) -> Result<BakeArtifacts, BakeError> {
    let raw = bake(request, sampler, progress)?;
    progress.report("filtering", 1.0);
    let filtered = brume_filter::apply_filters(&raw, filter);
    Ok(BakeArtifacts { raw, filtered })
}
