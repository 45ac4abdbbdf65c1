//! Camera presets: three canonical framings derived from room dimensions.
//!
//! The framings are fixed functions of the bounding box: a corner
//! perspective at eye height aimed diagonally across the room, a centered
//! frontal elevation from just outside the near wall, and a bird's-eye
//! view whose height scales with the room footprint. Determinism here is
//! what keeps the three captured views depicting the same layout.

use glam::{Mat4, Vec3};

use roomforge_core::Dimensions;

/// Near clipping plane used by the capture camera.
pub const CAMERA_NEAR: f32 = 0.1;
/// Far clipping plane used by the capture camera.
pub const CAMERA_FAR: f32 = 100.0;

/// Which of the three standard views a preset frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewKind {
    Perspective,
    Side,
    TopDown,
}

/// A deterministic camera placement: position, look-at target, and
/// vertical field of view in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CameraPreset {
    pub kind: ViewKind,
    pub position: Vec3,
    pub look_at: Vec3,
    pub fov: f32,
}

impl CameraPreset {
    /// Right-handed view matrix looking from `position` to `look_at`.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.look_at, Vec3::Y)
    }

    /// Perspective projection matrix for the given aspect ratio.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov.to_radians(), aspect, CAMERA_NEAR, CAMERA_FAR)
    }
}

/// The three standard views for a room, in a fixed order:
/// perspective, side, top-down.
pub fn camera_presets(dimensions: &Dimensions) -> [CameraPreset; 3] {
    let Dimensions {
        width,
        depth,
        height,
    } = *dimensions;

    [
        // Back corner at eye height, aimed diagonally across the room.
        CameraPreset {
            kind: ViewKind::Perspective,
            position: Vec3::new(width * 0.05, 1.6, depth * 0.95),
            look_at: Vec3::new(width * 0.6, 1.0, depth * 0.3),
            fov: 60.0,
        },
        // Centered frontal elevation, just outside the near wall plane.
        CameraPreset {
            kind: ViewKind::Side,
            position: Vec3::new(width * 0.5, 1.6, -0.3),
            look_at: Vec3::new(width * 0.5, 1.2, depth * 0.5),
            fov: 55.0,
        },
        // Bird's-eye above the center; height scales with the footprint so
        // the whole floor stays in frame.
        CameraPreset {
            kind: ViewKind::TopDown,
            position: Vec3::new(width * 0.5, height + width.max(depth) * 0.8, depth * 0.5),
            look_at: Vec3::new(width * 0.5, 0.0, depth * 0.5),
            fov: 50.0,
        },
    ]
}

/// A single preset by view kind.
pub fn preset_for(dimensions: &Dimensions, kind: ViewKind) -> CameraPreset {
    let presets = camera_presets(dimensions);
    presets
        .into_iter()
        .find(|p| p.kind == kind)
        .unwrap_or(presets[0])
}
