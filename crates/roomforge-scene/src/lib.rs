//! Scene construction for roomforge rooms.
//!
//! This crate turns a room description and a solved furniture layout into
//! a renderable scene description:
//! - Wall segmentation: solid wall boxes left after cutting out doors and
//!   windows (lintels above, sills below)
//! - Camera presets: the three canonical framings (corner perspective,
//!   frontal elevation, top-down)
//! - Style lighting rigs and palettes
//! - Scene assembly combining all of the above
//!
//! The output is mesh-agnostic hand-off data: an external rasterizer
//! extrudes the boxes and polygons into pixels. The same furniture
//! placements appear in every camera view, which downstream stylization
//! relies on.

mod camera;
mod lighting;
mod scene;
mod walls;

pub use camera::{camera_presets, preset_for, CameraPreset, ViewKind, CAMERA_FAR, CAMERA_NEAR};
pub use lighting::{lighting_rig, Light, LightKind};
pub use scene::{
    assemble, AssembleOptions, FurnitureBlock, GlassPane, RoomScene, StylePalette,
    GLASS_THICKNESS, GLASS_TINT,
};
pub use walls::{build_wall_segments, WallBox, WALL_THICKNESS};
