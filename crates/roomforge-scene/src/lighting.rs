//! Style lighting rigs.
//!
//! Each interior style calls for its own light temperature and intensity:
//! industrial rooms get a strong warm key light over a dim ambient,
//! minimalist rooms an even white wash. A rig is four lights (ambient,
//! shadow-casting main, fill, and a ceiling bounce) positioned relative
//! to the room's bounding box.

use glam::Vec3;

use roomforge_core::{Color, Dimensions, RoomStyle};

/// What kind of light source, with its placement where one applies.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LightKind {
    /// Uniform base illumination.
    Ambient,
    /// Sun-like light shining from `position` toward the scene.
    Directional { position: Vec3 },
    /// Local light with falloff out to `range`.
    Point { position: Vec3, range: f32 },
}

/// One light in a rig.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Light {
    pub kind: LightKind,
    pub color: Color,
    pub intensity: f32,
    pub cast_shadows: bool,
}

struct StyleLightConfig {
    ambient_color: Color,
    ambient_intensity: f32,
    main_color: Color,
    main_intensity: f32,
    fill_color: Color,
    fill_intensity: f32,
}

fn config_for(style: RoomStyle) -> StyleLightConfig {
    match style {
        RoomStyle::Modern => StyleLightConfig {
            ambient_color: Color::from_rgb8(255, 255, 255),
            ambient_intensity: 0.5,
            main_color: Color::from_rgb8(255, 245, 224),
            main_intensity: 1.2,
            fill_color: Color::from_rgb8(224, 232, 255),
            fill_intensity: 0.4,
        },
        RoomStyle::Scandinavian => StyleLightConfig {
            ambient_color: Color::from_rgb8(255, 248, 240),
            ambient_intensity: 0.6,
            main_color: Color::from_rgb8(255, 251, 224),
            main_intensity: 1.0,
            fill_color: Color::from_rgb8(255, 240, 224),
            fill_intensity: 0.5,
        },
        RoomStyle::Industrial => StyleLightConfig {
            ambient_color: Color::from_rgb8(224, 216, 208),
            ambient_intensity: 0.3,
            main_color: Color::from_rgb8(255, 204, 128),
            main_intensity: 1.4,
            fill_color: Color::from_rgb8(208, 200, 192),
            fill_intensity: 0.3,
        },
        RoomStyle::Minimalist => StyleLightConfig {
            ambient_color: Color::from_rgb8(255, 255, 255),
            ambient_intensity: 0.7,
            main_color: Color::from_rgb8(255, 255, 255),
            main_intensity: 0.8,
            fill_color: Color::from_rgb8(240, 240, 240),
            fill_intensity: 0.5,
        },
        RoomStyle::Bohemian => StyleLightConfig {
            ambient_color: Color::from_rgb8(255, 232, 208),
            ambient_intensity: 0.5,
            main_color: Color::from_rgb8(255, 208, 128),
            main_intensity: 1.1,
            fill_color: Color::from_rgb8(224, 208, 192),
            fill_intensity: 0.4,
        },
        RoomStyle::Classic => StyleLightConfig {
            ambient_color: Color::from_rgb8(255, 240, 224),
            ambient_intensity: 0.4,
            main_color: Color::from_rgb8(255, 221, 153),
            main_intensity: 1.3,
            fill_color: Color::from_rgb8(232, 216, 200),
            fill_intensity: 0.4,
        },
        RoomStyle::Japanese => StyleLightConfig {
            ambient_color: Color::from_rgb8(248, 240, 232),
            ambient_intensity: 0.6,
            main_color: Color::from_rgb8(255, 232, 192),
            main_intensity: 0.9,
            fill_color: Color::from_rgb8(232, 224, 216),
            fill_intensity: 0.5,
        },
        RoomStyle::Mediterranean => StyleLightConfig {
            ambient_color: Color::from_rgb8(255, 248, 224),
            ambient_intensity: 0.5,
            main_color: Color::from_rgb8(255, 224, 128),
            main_intensity: 1.4,
            fill_color: Color::from_rgb8(240, 224, 192),
            fill_intensity: 0.4,
        },
    }
}

/// The lighting rig for a style and room size: ambient, main directional
/// (simulating window light, shadow-casting), a softer fill from the
/// opposite side, and a ceiling bounce.
pub fn lighting_rig(style: RoomStyle, dimensions: &Dimensions) -> Vec<Light> {
    let cfg = config_for(style);
    let cx = dimensions.width / 2.0;
    let cz = dimensions.depth / 2.0;
    let w = dimensions.width;
    let d = dimensions.depth;
    let h = dimensions.height;

    vec![
        Light {
            kind: LightKind::Ambient,
            color: cfg.ambient_color,
            intensity: cfg.ambient_intensity,
            cast_shadows: false,
        },
        Light {
            kind: LightKind::Directional {
                position: Vec3::new(cx + w * 0.3, h * 1.5, cz - d * 0.3),
            },
            color: cfg.main_color,
            intensity: cfg.main_intensity,
            cast_shadows: true,
        },
        Light {
            kind: LightKind::Directional {
                position: Vec3::new(cx - w * 0.5, h, cz + d * 0.5),
            },
            color: cfg.fill_color,
            intensity: cfg.fill_intensity,
            cast_shadows: false,
        },
        Light {
            kind: LightKind::Point {
                position: Vec3::new(cx, h - 0.1, cz),
                range: w * 2.0,
            },
            color: Color::WHITE,
            intensity: 0.3,
            cast_shadows: false,
        },
    ]
}
