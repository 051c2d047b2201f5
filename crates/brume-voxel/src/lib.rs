//! Voxelization capture & blend: rasterizes a scene's surface appearance
//! into per-voxel albedo/emissive buffers from six orthogonal directions.

pub mod blend;
pub mod capture;
pub mod grid;
pub mod lights_gpu;
pub mod remap;
