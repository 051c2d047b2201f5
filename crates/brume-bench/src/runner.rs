use std::time::Instant;

use brume_bake::orchestrator::{bake_with_filters, BakeRequest};
use brume_bake::raytrace::CpuRaytraceSampler;
use brume_core::light::SceneSnapshot;
use brume_core::progress::NullProgress;

use crate::report::{BenchmarkResult, TimingSeries};
use crate::scenes::SceneConfig;

/// Runs one scene `runs` times and aggregates wall-clock timings.
pub fn run_scene(config: &SceneConfig, runs: u32) -> BenchmarkResult {
    log::info!(
        "running scene '{}' ({} runs, {} resolution)...",
        config.name,
        runs,
        config.resolution
    );

    let occlusion = config.build_occlusion();
    let snapshot = SceneSnapshot::new(config.lights.clone());
    snapshot
        .ensure_bakeable()
        .expect("benchmark snapshot is always persisted");

    let request = BakeRequest {
        origin: config.volume_origin,
        size: config.volume_size,
        resolution: config.resolution,
        density: config.density,
    };

    let mut timings_ms = Vec::with_capacity(runs as usize);
    let mut voxel_count = 0usize;
    for _ in 0..runs {
        let mut sampler =
            CpuRaytraceSampler::new(&config.sampling, &snapshot.lights, &occlusion);
        let start = Instant::now();
        let artifacts = bake_with_filters(&request, &mut sampler, &config.filters, &NullProgress)
            .expect("benchmark scene config is valid");
        timings_ms.push(start.elapsed().as_secs_f64() * 1000.0);
        voxel_count = artifacts.raw.voxel_count();
    }

    BenchmarkResult {
        scene_name: config.name.clone(),
        voxel_count,
        run_count: runs,
        timings: TimingSeries::from_samples(&mut timings_ms),
    }
}
