//! Scene assembly: the hand-off structure for the rendering backend.
//!
//! Assembly combines wall segmentation, the floor polygon, solved
//! furniture placements, glazing, lights, and the three camera presets
//! into one `RoomScene`. Assembly never moves a furniture item, so the
//! placements are identical in every camera view, which the downstream
//! stylization step requires.

use glam::{Vec2, Vec3};

use roomforge_core::{Color, FurnitureCategory, Room, RoomStyle};
use roomforge_layout::PlacedFurniture;

use crate::camera::{camera_presets, CameraPreset};
use crate::lighting::{lighting_rig, Light};
use crate::walls::{build_wall_segments, WallBox};

/// Thickness of window glass panes, in meters.
pub const GLASS_THICKNESS: f32 = 0.02;

/// Tint shared by all glass panes.
pub const GLASS_TINT: Color = Color::rgba(0.66, 0.85, 0.92, 0.3);

/// Wall, floor, and ceiling colors for one style.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StylePalette {
    pub wall: Color,
    pub floor: Color,
    pub ceiling: Color,
}

impl StylePalette {
    pub fn for_style(style: RoomStyle) -> Self {
        let (wall, floor) = match style {
            RoomStyle::Modern => (
                Color::from_rgb8(245, 240, 235),
                Color::from_rgb8(196, 168, 130),
            ),
            RoomStyle::Scandinavian => (
                Color::from_rgb8(250, 248, 245),
                Color::from_rgb8(212, 184, 150),
            ),
            RoomStyle::Industrial => (
                Color::from_rgb8(184, 169, 154),
                Color::from_rgb8(138, 122, 106),
            ),
            RoomStyle::Minimalist => (
                Color::from_rgb8(255, 255, 255),
                Color::from_rgb8(232, 224, 216),
            ),
            RoomStyle::Bohemian => (
                Color::from_rgb8(240, 232, 216),
                Color::from_rgb8(184, 154, 106),
            ),
            RoomStyle::Classic => (
                Color::from_rgb8(240, 235, 224),
                Color::from_rgb8(154, 122, 90),
            ),
            RoomStyle::Japanese => (
                Color::from_rgb8(245, 239, 232),
                Color::from_rgb8(200, 176, 144),
            ),
            RoomStyle::Mediterranean => (
                Color::from_rgb8(248, 239, 224),
                Color::from_rgb8(196, 148, 106),
            ),
        };
        Self {
            wall,
            floor,
            ceiling: Color::WHITE,
        }
    }
}

/// Placeholder height of a furniture box, by category.
fn category_height(category: FurnitureCategory) -> f32 {
    match category {
        FurnitureCategory::Seating => 0.85,
        FurnitureCategory::Table => 0.45,
        FurnitureCategory::DiningTable => 0.75,
        FurnitureCategory::Storage => 1.2,
        FurnitureCategory::Bed => 0.55,
        FurnitureCategory::Desk => 0.75,
        FurnitureCategory::Decor => 0.5,
        FurnitureCategory::Appliance => 0.9,
    }
}

/// Placeholder color of a furniture box, by category.
fn category_color(category: FurnitureCategory) -> Color {
    match category {
        FurnitureCategory::Seating => Color::from_rgb8(122, 154, 181),
        FurnitureCategory::Table | FurnitureCategory::DiningTable => {
            Color::from_rgb8(138, 122, 106)
        }
        FurnitureCategory::Storage => Color::from_rgb8(106, 138, 122),
        FurnitureCategory::Bed => Color::from_rgb8(154, 138, 122),
        FurnitureCategory::Desk => Color::from_rgb8(122, 138, 154),
        FurnitureCategory::Decor => Color::from_rgb8(106, 154, 106),
        FurnitureCategory::Appliance => Color::from_rgb8(154, 154, 154),
    }
}

/// A translucent pane filling a window opening.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlassPane {
    pub position: Vec3,
    pub width: f32,
    pub height: f32,
    pub rotation_y: f32,
}

/// A placed furniture item as a renderable placeholder box. `position` is
/// the box center (lifted to half the category height); `asset` carries
/// the opaque model reference for backends that substitute real meshes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FurnitureBlock {
    pub position: Vec3,
    pub rotation_y: f32,
    pub size: Vec3,
    pub color: Color,
    pub asset: String,
}

/// Options for scene assembly.
#[derive(Debug, Clone, Default)]
pub struct AssembleOptions {
    /// Emit a ceiling plane at the room height. Off by default: the
    /// capture cameras look into the room from above the walls.
    pub ceiling: bool,
}

/// The renderable scene description handed to the rasterizer.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomScene {
    pub room_id: roomforge_core::RoomId,
    pub walls: Vec<WallBox>,
    /// Floor polygon in plan coordinates.
    pub floor: Vec<Vec2>,
    /// Height of the ceiling plane over the floor polygon, when requested.
    pub ceiling: Option<f32>,
    pub glazing: Vec<GlassPane>,
    pub furniture: Vec<FurnitureBlock>,
    pub lights: Vec<Light>,
    pub cameras: [CameraPreset; 3],
    pub palette: StylePalette,
}

/// Assemble a renderable scene from a room, a solved layout, and a style.
pub fn assemble(
    room: &Room,
    furniture: &[PlacedFurniture],
    style: RoomStyle,
    options: &AssembleOptions,
) -> RoomScene {
    let glazing = room
        .windows
        .iter()
        .filter_map(|window| {
            let wall = room.walls.get(window.wall_index)?;
            let t = wall.parametric_position(window.position);
            let p = wall.point_at(t);
            Some(GlassPane {
                position: Vec3::new(p.x, window.sill_height + window.height / 2.0, p.y),
                width: window.width,
                height: window.height,
                rotation_y: wall.angle(),
            })
        })
        .collect();

    let furniture = furniture
        .iter()
        .map(|placed| {
            let footprint = placed.item.footprint;
            let height = category_height(placed.item.category);
            FurnitureBlock {
                position: placed.position + Vec3::new(0.0, height / 2.0, 0.0),
                rotation_y: placed.rotation,
                size: Vec3::new(footprint.x, height, footprint.y),
                color: category_color(placed.item.category),
                asset: placed.item.asset.clone(),
            }
        })
        .collect();

    RoomScene {
        room_id: room.id.clone(),
        walls: build_wall_segments(room),
        floor: room.floor_polygon(),
        ceiling: options.ceiling.then_some(room.dimensions.height),
        glazing,
        furniture,
        lights: lighting_rig(style, &room.dimensions),
        cameras: camera_presets(&room.dimensions),
        palette: StylePalette::for_style(style),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomforge_core::{
        furniture_for_room, CompassSide, Room, RoomEstimate, RoomKind, Window,
    };
    use roomforge_layout::place_furniture;

    fn reference_room() -> Room {
        let estimate = RoomEstimate::new(5.0, 4.0)
            .with_door(CompassSide::South)
            .with_window(CompassSide::North);
        Room::from_estimate("reference", &estimate)
    }

    fn reference_scene() -> RoomScene {
        let room = reference_room();
        let items = furniture_for_room(RoomKind::LivingRoom, RoomStyle::Modern);
        let placed = place_furniture(&room, &items);
        assemble(&room, &placed, RoomStyle::Modern, &AssembleOptions::default())
    }

    #[test]
    fn test_assembled_scene_shape() {
        let scene = reference_scene();

        assert!(!scene.walls.is_empty());
        assert_eq!(scene.floor.len(), 4);
        assert_eq!(scene.ceiling, None);
        assert_eq!(scene.glazing.len(), 1);
        assert!(!scene.furniture.is_empty());
        assert_eq!(scene.lights.len(), 4);
        assert_eq!(scene.cameras.len(), 3);
    }

    #[test]
    fn test_glass_pane_centered_in_window() {
        let scene = reference_scene();
        let pane = &scene.glazing[0];

        // Window centered on the north wall, sill 0.9, height 1.2.
        assert!((pane.position.x - 2.5).abs() < 0.001);
        assert!((pane.position.y - 1.5).abs() < 0.001);
        assert!((pane.position.z - 4.0).abs() < 0.001);
        assert!((pane.width - 1.2).abs() < 0.001);
    }

    #[test]
    fn test_invalid_window_index_emits_no_pane() {
        let mut room = reference_room();
        room.windows
            .push(Window::new(40, glam::Vec2::new(1.0, 0.0), 1.2, 1.2));

        let scene = assemble(&room, &[], RoomStyle::Modern, &AssembleOptions::default());
        assert_eq!(scene.glazing.len(), 1);
    }

    #[test]
    fn test_furniture_blocks_lifted_to_half_height() {
        let room = reference_room();
        let items = furniture_for_room(RoomKind::LivingRoom, RoomStyle::Modern);
        let placed = place_furniture(&room, &items);
        let scene = assemble(&room, &placed, RoomStyle::Modern, &AssembleOptions::default());

        for (block, p) in scene.furniture.iter().zip(&placed) {
            assert!((block.position.y - block.size.y / 2.0).abs() < 0.001);
            assert!((block.position.x - p.position.x).abs() < 0.001);
            assert!((block.position.z - p.position.z).abs() < 0.001);
            assert!((block.rotation_y - p.rotation).abs() < 0.001);
        }
    }

    #[test]
    fn test_ceiling_option() {
        let room = reference_room();
        let scene = assemble(
            &room,
            &[],
            RoomStyle::Modern,
            &AssembleOptions { ceiling: true },
        );
        assert_eq!(scene.ceiling, Some(2.6));
    }

    #[test]
    fn test_floor_fallback_reaches_scene() {
        let mut room = reference_room();
        room.floor.points.clear();

        let scene = assemble(&room, &[], RoomStyle::Modern, &AssembleOptions::default());
        assert_eq!(scene.floor.len(), 4);
        assert_eq!(scene.floor[2], Vec2::new(5.0, 4.0));
    }

    #[test]
    fn test_palettes_cover_all_styles() {
        for style in RoomStyle::ALL {
            let palette = StylePalette::for_style(style);
            assert!(palette.wall.r > 0.0);
            assert!(palette.floor.r > 0.0);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_scene_serializes() {
        let scene = reference_scene();
        let json = serde_json::to_string(&scene).unwrap();
        assert!(json.contains("\"cameras\""));
        assert!(json.contains("\"palette\""));
    }
}
