use std::path::PathBuf;
use std::process;

mod report;
mod runner;
mod scenes;
mod voxelize;

use brume_core::light::SceneSnapshot;
use brume_voxel::lights_gpu::LightBuffers;
use scenes::SceneConfig;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    let mut scene_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;
    let mut runs = 3u32;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--scene" => {
                i += 1;
                scene_path = Some(PathBuf::from(&args[i]));
            }
            "--output" => {
                i += 1;
                output_path = Some(PathBuf::from(&args[i]));
            }
            "--runs" => {
                i += 1;
                runs = args[i].parse().expect("invalid --runs value");
            }
            "--help" | "-h" => {
                eprintln!("Usage: bake-runner [OPTIONS]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --scene <path.ron>   Scene description (default: built-in courtyard)");
                eprintln!("  --output <path>      Write a JSON timing report");
                eprintln!("  --runs <n>           Bake repetitions per scene (default: 3)");
                process::exit(0);
            }
            other => {
                eprintln!("unknown argument: {other}");
                process::exit(2);
            }
        }
        i += 1;
    }

    let scene = match scene_path {
        Some(path) => match SceneConfig::from_ron(&path) {
            Ok(scene) => scene,
            Err(message) => {
                log::error!("{message}");
                process::exit(1);
            }
        },
        None => SceneConfig::courtyard(),
    };

    let result = runner::run_scene(&scene, runs);
    log::info!(
        "scene '{}': {} voxels, mean {:.1} ms, p95 {:.1} ms",
        result.scene_name,
        result.voxel_count,
        result.timings.mean_ms,
        result.timings.p95_ms
    );

    // Exercise the voxelization path and the tracer's buffer contract
    let mut renderer = voxelize::BoxSliceRenderer::new(&scene);
    match brume_voxel::blend::voxelize(&mut renderer, scene.resolution) {
        Ok(buffers) => {
            let covered = buffers
                .albedo
                .texels()
                .iter()
                .filter(|t| t.w > 0.0)
                .count();
            log::info!(
                "voxelized '{}': {covered}/{} covered voxels",
                scene.name,
                buffers.albedo.texels().len()
            );
        }
        Err(error) => {
            log::error!("voxelization failed: {error}");
            process::exit(1);
        }
    }

    let snapshot = SceneSnapshot::new(scene.lights.clone());
    let light_buffers = LightBuffers::from_snapshot(&snapshot, &scene.sampling);
    log::info!(
        "tracer light buffers: {} directional, {} point, {} spot, {} area",
        light_buffers.directional.len(),
        light_buffers.point.len(),
        light_buffers.spot.len(),
        light_buffers.area.len()
    );

    if let Some(path) = output_path {
        if let Err(message) = report::write_report(&[result], &path) {
            log::error!("{message}");
            process::exit(1);
        }
        log::info!("report written to {}", path.display());
    }
}
