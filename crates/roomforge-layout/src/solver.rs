//! The placement solver: four fixed passes over shared occupancy state.
//!
//! Pass order is a semantic guarantee, not an implementation detail:
//! against-wall → near-window → center → corner. Each pass consults and
//! extends the same occupied-box list, so reordering passes (or the
//! fallback sequences inside them) changes which of several valid layouts
//! wins.

use glam::Vec3;
use tracing::debug;

use roomforge_core::{FurnitureItem, PlacementRule, Room};

use crate::walls::{analyze_walls, WallProfile};

/// Gap between furniture and the wall face, in meters.
const WALL_GAP: f32 = 0.05;
/// Minimum gap between adjacent items, in meters.
const ITEM_GAP: f32 = 0.15;

/// A solved furniture placement. Created once per solve, immutable after.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedFurniture {
    pub item: FurnitureItem,
    /// World position of the footprint center, y = 0 (floor level).
    pub position: Vec3,
    /// Rotation about the vertical axis in radians.
    pub rotation: f32,
}

/// Everything a solve produced: the layout plus the items that fit
/// nowhere. `placed.len() + dropped.len()` always equals the input length.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementReport {
    pub placed: Vec<PlacedFurniture>,
    pub dropped: Vec<FurnitureItem>,
}

impl PlacementReport {
    /// Whether every requested item found a spot.
    pub fn is_complete(&self) -> bool {
        self.dropped.is_empty()
    }
}

/// Axis-aligned footprint of a placed item, rotation ignored.
struct Occupied {
    x: f32,
    z: f32,
    w: f32,
    d: f32,
}

fn collides(occupied: &[Occupied], x: f32, z: f32, w: f32, d: f32) -> bool {
    occupied.iter().any(|occ| {
        let overlap_x = (x - occ.x).abs() < (w + occ.w) / 2.0 + ITEM_GAP;
        let overlap_z = (z - occ.z).abs() < (d + occ.d) / 2.0 + ITEM_GAP;
        overlap_x && overlap_z
    })
}

/// Place furniture in a room. Returns only the successful placements;
/// use [`solve`] to also see which items were dropped.
pub fn place_furniture(room: &Room, items: &[FurnitureItem]) -> Vec<PlacedFurniture> {
    solve(room, items).placed
}

/// Place furniture in a room, reporting both placements and drops.
///
/// Deterministic: no randomness, and identical inputs yield identical
/// reports. Never fails: an item that cannot be placed without collision
/// is dropped.
pub fn solve(room: &Room, items: &[FurnitureItem]) -> PlacementReport {
    let mut profiles = analyze_walls(room);

    // Longest walls first; stable, so ties keep wall order.
    let mut wall_order: Vec<usize> = (0..profiles.len()).collect();
    wall_order.sort_by(|&a, &b| {
        profiles[b]
            .length
            .partial_cmp(&profiles[a].length)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut report = PlacementReport::default();
    let mut occupied: Vec<Occupied> = Vec::new();

    let mut wall_items: Vec<&FurnitureItem> = items
        .iter()
        .filter(|i| i.placement == PlacementRule::AgainstWall)
        .collect();
    let window_items: Vec<&FurnitureItem> = items
        .iter()
        .filter(|i| i.placement == PlacementRule::NearWindow)
        .collect();
    let center_items: Vec<&FurnitureItem> = items
        .iter()
        .filter(|i| i.placement == PlacementRule::Center)
        .collect();
    let corner_items: Vec<&FurnitureItem> = items
        .iter()
        .filter(|i| i.placement == PlacementRule::Corner)
        .collect();

    // Largest items first, so big pieces claim long walls before small
    // ones fragment the free zones.
    wall_items.sort_by(|a, b| {
        let area_a = a.footprint.x * a.footprint.y;
        let area_b = b.footprint.x * b.footprint.y;
        area_b
            .partial_cmp(&area_a)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    for item in wall_items {
        place_against_wall(item, &mut profiles, &wall_order, &mut occupied, &mut report);
    }

    // Walls that actually hold a window, in wall order; all walls by
    // length otherwise.
    let window_walls: Vec<usize> = profiles
        .iter()
        .filter(|p| room.windows.iter().any(|w| w.wall_index == p.wall_index))
        .map(|p| p.wall_index)
        .collect();
    let window_candidates = if window_walls.is_empty() {
        &wall_order
    } else {
        &window_walls
    };

    for item in window_items {
        place_near_window(item, &profiles, window_candidates, &mut occupied, &mut report);
    }

    for item in center_items {
        place_center(item, room, &mut occupied, &mut report);
    }

    let mut corner_idx = 0;
    for item in corner_items {
        place_corner(item, room, &mut corner_idx, &mut occupied, &mut report);
    }

    report
}

fn place_against_wall(
    item: &FurnitureItem,
    profiles: &mut [WallProfile],
    wall_order: &[usize],
    occupied: &mut Vec<Occupied>,
    report: &mut PlacementReport,
) {
    let item_length = item.footprint.x;
    let item_depth = item.footprint.y;

    for &wi in wall_order {
        let profile = &profiles[wi];
        if profile.length <= 0.0 {
            continue;
        }
        let needed_t = item_length / profile.length;

        for zi in 0..profile.free_zones.len() {
            let zone = profiles[wi].free_zones[zi];
            if zone.width() < needed_t + 0.02 {
                continue;
            }

            // Center of the free zone, offset off the wall face.
            let t = (zone.start_t + zone.end_t) / 2.0;
            let pos = profiles[wi].point_at(t, item_depth / 2.0 + WALL_GAP);

            if collides(occupied, pos.x, pos.y, item_length, item_depth) {
                continue;
            }

            let normal = profiles[wi].normal;
            let rotation = normal.x.atan2(normal.y);
            report.placed.push(PlacedFurniture {
                item: item.clone(),
                position: Vec3::new(pos.x, 0.0, pos.y),
                rotation,
            });
            occupied.push(Occupied {
                x: pos.x,
                z: pos.y,
                w: item_length,
                d: item_depth,
            });

            // Shrink the zone past the placed item (approximate).
            let used_t = needed_t / 2.0 + 0.05;
            profiles[wi].free_zones[zi].start_t = t + used_t;
            return;
        }
    }

    debug!(item = %item.id, "no wall zone fits item, dropping");
    report.dropped.push(item.clone());
}

fn place_near_window(
    item: &FurnitureItem,
    profiles: &[WallProfile],
    candidates: &[usize],
    occupied: &mut Vec<Occupied>,
    report: &mut PlacementReport,
) {
    for &wi in candidates {
        let profile = &profiles[wi];
        // Wall midpoint, with extra clearance so the item sits near the
        // window without blocking it.
        let pos = profile.point_at(0.5, item.footprint.y / 2.0 + WALL_GAP + 0.3);

        if !collides(occupied, pos.x, pos.y, item.footprint.x, item.footprint.y) {
            let rotation = profile.normal.x.atan2(profile.normal.y);
            report.placed.push(PlacedFurniture {
                item: item.clone(),
                position: Vec3::new(pos.x, 0.0, pos.y),
                rotation,
            });
            occupied.push(Occupied {
                x: pos.x,
                z: pos.y,
                w: item.footprint.x,
                d: item.footprint.y,
            });
            return;
        }
    }

    debug!(item = %item.id, "no window wall accepts item, dropping");
    report.dropped.push(item.clone());
}

/// Fallback offsets tried after the exact center, in this fixed order.
const CENTER_OFFSETS: [(f32, f32); 7] = [
    (0.0, 0.0),
    (0.5, 0.0),
    (-0.5, 0.0),
    (0.0, 0.5),
    (0.0, -0.5),
    (0.8, 0.3),
    (-0.8, -0.3),
];

fn place_center(
    item: &FurnitureItem,
    room: &Room,
    occupied: &mut Vec<Occupied>,
    report: &mut PlacementReport,
) {
    let center = room.dimensions.center();

    for (ox, oz) in CENTER_OFFSETS {
        let x = center.x + ox;
        let z = center.y + oz;

        if !collides(occupied, x, z, item.footprint.x, item.footprint.y) {
            report.placed.push(PlacedFurniture {
                item: item.clone(),
                position: Vec3::new(x, 0.0, z),
                rotation: 0.0,
            });
            occupied.push(Occupied {
                x,
                z,
                w: item.footprint.x,
                d: item.footprint.y,
            });
            return;
        }
    }

    debug!(item = %item.id, "no center offset free, dropping");
    report.dropped.push(item.clone());
}

fn place_corner(
    item: &FurnitureItem,
    room: &Room,
    corner_idx: &mut usize,
    occupied: &mut Vec<Occupied>,
    report: &mut PlacementReport,
) {
    let inset = WALL_GAP + 0.3;
    let w = room.dimensions.width;
    let d = room.dimensions.depth;
    let corners = [
        (inset, inset),
        (w - inset, inset),
        (w - inset, d - inset),
        (inset, d - inset),
    ];

    // Start at the corner after the last one used, so successive items
    // spread across corners before retrying.
    for tries in 0..corners.len() {
        let ci = (*corner_idx + tries) % corners.len();
        let (x, z) = corners[ci];

        if !collides(occupied, x, z, item.footprint.x, item.footprint.y) {
            report.placed.push(PlacedFurniture {
                item: item.clone(),
                position: Vec3::new(x, 0.0, z),
                rotation: 0.0,
            });
            occupied.push(Occupied {
                x,
                z,
                w: item.footprint.x,
                d: item.footprint.y,
            });
            *corner_idx = ci + 1;
            return;
        }
    }

    debug!(item = %item.id, "all corners occupied, dropping");
    report.dropped.push(item.clone());
}
