use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::BakeError;

/// Scene light categories recognized by the baker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LightKind {
    Directional,
    Point,
    Spot,
    Area,
}

/// How the host scene intends a light to participate in baking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LightBakeMode {
    Realtime,
    Mixed,
    Baked,
}

/// Read-only snapshot of one scene light, captured once before a bake.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightDescriptor {
    pub kind: LightKind,
    pub position: Vec3,
    /// Forward axis (direction the light points), unit length.
    pub forward: Vec3,
    pub color: Vec3,
    pub intensity: f32,
    pub range: f32,
    /// Full cone angle in degrees. Meaningful for spot lights only.
    pub spot_angle: f32,
    pub bake_mode: LightBakeMode,
    pub enabled: bool,
}

impl LightDescriptor {
    pub fn directional(forward: Vec3, color: Vec3, intensity: f32) -> Self {
        Self {
            kind: LightKind::Directional,
            position: Vec3::ZERO,
            forward: forward.normalize(),
            color,
            intensity,
            range: f32::INFINITY,
            spot_angle: 0.0,
            bake_mode: LightBakeMode::Baked,
            enabled: true,
        }
    }

    pub fn point(position: Vec3, color: Vec3, intensity: f32, range: f32) -> Self {
        Self {
            kind: LightKind::Point,
            position,
            forward: Vec3::NEG_Y,
            color,
            intensity,
            range,
            spot_angle: 0.0,
            bake_mode: LightBakeMode::Baked,
            enabled: true,
        }
    }

    pub fn spot(
        position: Vec3,
        forward: Vec3,
        color: Vec3,
        intensity: f32,
        range: f32,
        spot_angle: f32,
    ) -> Self {
        Self {
            kind: LightKind::Spot,
            position,
            forward: forward.normalize(),
            color,
            intensity,
            range,
            spot_angle,
            bake_mode: LightBakeMode::Baked,
            enabled: true,
        }
    }

    pub fn area(position: Vec3, forward: Vec3, color: Vec3, intensity: f32, range: f32) -> Self {
        Self {
            kind: LightKind::Area,
            position,
            forward: forward.normalize(),
            color,
            intensity,
            range,
            spot_angle: 180.0,
            bake_mode: LightBakeMode::Baked,
            enabled: true,
        }
    }
}

/// Per-bake capture of scene state the core reads: the light list plus the
/// host's persistence flag. Refreshed whole, never incrementally.
#[derive(Debug, Clone, Default)]
pub struct SceneSnapshot {
    pub lights: Vec<LightDescriptor>,
    /// False when the host scene has never been saved. Baking against an
    /// unpersisted scene is rejected before any side effects occur.
    pub persisted: bool,
}

impl SceneSnapshot {
    pub fn new(lights: Vec<LightDescriptor>) -> Self {
        Self {
            lights,
            persisted: true,
        }
    }

    /// Validate the snapshot ahead of a bake.
    pub fn ensure_bakeable(&self) -> Result<(), BakeError> {
        if !self.persisted {
            return Err(BakeError::SceneStateInvalid(
                "scene has not been saved; bake requires a persisted scene".into(),
            ));
        }
        Ok(())
    }
}
