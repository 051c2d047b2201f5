use thiserror::Error;

/// Errors that can abort a bake. All variants are fatal: they are raised
/// before any voxel writes, never partway through a traversal.
#[derive(Debug, Error)]
pub enum BakeError {
    #[error("invalid bake configuration: {0}")]
    InvalidConfiguration(String),

    #[error("scene state invalid: {0}")]
    SceneStateInvalid(String),

    #[error("sampling backend resource missing: {0}")]
    MissingBackendResource(String),
}

impl BakeError {
    /// Shorthand for the common resolution-validation failure.
    pub fn bad_resolution(resolution: glam::IVec3) -> Self {
        BakeError::InvalidConfiguration(format!(
            "resolution must be positive on every axis, got {resolution}"
        ))
    }
}
