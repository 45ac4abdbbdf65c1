//! Wall segmentation: solid boxes left after cutting out openings.
//!
//! Each wall is reduced to a list of axis-sized box descriptors. A door
//! cuts the wall from the floor up, leaving flanking segments and a lintel
//! above; a window additionally leaves a sill segment below. Cutouts are
//! processed independently in sort order; overlapping cutouts on one wall
//! are not merged, which can emit overlapping boxes for floor plans with
//! closely spaced openings (see DESIGN.md).

use glam::Vec3;
use smallvec::SmallVec;

use roomforge_core::Room;

/// Wall thickness for all emitted boxes, in meters.
pub const WALL_THICKNESS: f32 = 0.15;

/// Segments shorter than this are dropped, in meters.
const SEGMENT_EPSILON: f32 = 0.01;

/// A mesh-agnostic box descriptor: center position, size
/// (length, height, thickness), and rotation about the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallBox {
    pub position: Vec3,
    pub size: Vec3,
    pub rotation_y: f32,
}

/// A cutout interval along one wall, in meters: `[start, end]` along the
/// wall direction, `[bottom, top]` vertically.
#[derive(Debug, Clone, Copy)]
struct Cutout {
    start: f32,
    end: f32,
    bottom: f32,
    top: f32,
}

/// Build the solid wall segments for a room.
///
/// Openings referencing a wall index the room does not have are skipped.
pub fn build_wall_segments(room: &Room) -> Vec<WallBox> {
    let mut boxes = Vec::new();

    for (idx, wall) in room.walls.iter().enumerate() {
        let length = wall.length();
        let angle = wall.angle();
        let height = if wall.height > 0.0 {
            wall.height
        } else {
            room.dimensions.height
        };

        let mut cutouts: SmallVec<[Cutout; 4]> = SmallVec::new();
        for door in room.doors.iter().filter(|d| d.wall_index == idx) {
            let t = wall.parametric_position(door.position);
            let along = t * length;
            let half_w = door.width / 2.0;
            cutouts.push(Cutout {
                start: (along - half_w).max(0.0),
                end: (along + half_w).min(length),
                bottom: 0.0,
                top: door.height,
            });
        }
        for window in room.windows.iter().filter(|w| w.wall_index == idx) {
            let t = wall.parametric_position(window.position);
            let along = t * length;
            let half_w = window.width / 2.0;
            cutouts.push(Cutout {
                start: (along - half_w).max(0.0),
                end: (along + half_w).min(length),
                bottom: window.sill_height,
                top: window.sill_height + window.height,
            });
        }

        if cutouts.is_empty() {
            if length > SEGMENT_EPSILON {
                let mid = wall.midpoint();
                boxes.push(WallBox {
                    position: Vec3::new(mid.x, height / 2.0, mid.y),
                    size: Vec3::new(length, height, WALL_THICKNESS),
                    rotation_y: angle,
                });
            }
            continue;
        }

        cutouts.sort_by(|a, b| {
            a.start
                .partial_cmp(&b.start)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let segment_at = |center_along: f32, center_y: f32, len: f32, h: f32| {
            let t = center_along / length;
            let p = wall.point_at(t);
            WallBox {
                position: Vec3::new(p.x, center_y, p.y),
                size: Vec3::new(len, h, WALL_THICKNESS),
                rotation_y: angle,
            }
        };

        let mut cursor = 0.0;
        for cutout in &cutouts {
            // Full-height segment before the cutout.
            if cutout.start > cursor + SEGMENT_EPSILON {
                let len = cutout.start - cursor;
                boxes.push(segment_at(cursor + len / 2.0, height / 2.0, len, height));
            }

            let span = cutout.end - cutout.start;
            let center = (cutout.start + cutout.end) / 2.0;

            // Lintel above the cutout.
            if cutout.top < height - SEGMENT_EPSILON {
                let lintel_h = height - cutout.top;
                boxes.push(segment_at(center, cutout.top + lintel_h / 2.0, span, lintel_h));
            }

            // Sill below the cutout (windows only; doors start at the floor).
            if cutout.bottom > SEGMENT_EPSILON {
                boxes.push(segment_at(center, cutout.bottom / 2.0, span, cutout.bottom));
            }

            cursor = cutout.end;
        }

        // Trailing full-height segment.
        if cursor < length - SEGMENT_EPSILON {
            let len = length - cursor;
            boxes.push(segment_at(cursor + len / 2.0, height / 2.0, len, height));
        }
    }

    boxes
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use roomforge_core::{CompassSide, Room, RoomEstimate};

    /// Parametric span of a box along its wall.
    fn span_on_wall(b: &WallBox, wall_start: Vec2, wall_dir: Vec2, wall_length: f32) -> (f32, f32) {
        let center = Vec2::new(b.position.x, b.position.z);
        let t_center = (center - wall_start).dot(wall_dir) / (wall_length * wall_length);
        let half = b.size.x / 2.0 / wall_length;
        (t_center - half, t_center + half)
    }

    fn reference_room() -> Room {
        let estimate = RoomEstimate::new(5.0, 4.0)
            .with_door(CompassSide::South)
            .with_window(CompassSide::North);
        Room::from_estimate("reference", &estimate)
    }

    fn boxes_for_wall(room: &Room, wall_index: usize) -> Vec<WallBox> {
        // Walls are axis-aligned in the default room, so segment membership
        // can be recovered from the rotation and position.
        let wall = &room.walls[wall_index];
        build_wall_segments(room)
            .into_iter()
            .filter(|b| {
                let center = Vec2::new(b.position.x, b.position.z);
                let t = wall.parametric_position(center);
                (b.rotation_y - wall.angle()).abs() < 0.001
                    && (-0.01..=1.01).contains(&t)
                    && wall.point_at(t).distance(center) < 0.01
            })
            .collect()
    }

    #[test]
    fn test_plain_wall_is_one_full_segment() {
        let room = Room::from_estimate("plain", &RoomEstimate::new(5.0, 4.0));
        let boxes = build_wall_segments(&room);

        assert_eq!(boxes.len(), 4);
        let south = &boxes[0];
        assert!((south.size.x - 5.0).abs() < 0.001);
        assert!((south.size.y - 2.6).abs() < 0.001);
        assert!((south.size.z - WALL_THICKNESS).abs() < 0.001);
        assert!((south.position.x - 2.5).abs() < 0.001);
        assert!((south.position.y - 1.3).abs() < 0.001);
        assert!((south.position.z - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_door_wall_segments() {
        let room = reference_room();
        let south = boxes_for_wall(&room, 0);

        // Left flank, lintel over the door, right flank.
        assert_eq!(south.len(), 3);

        let full: Vec<_> = south.iter().filter(|b| b.size.y > 2.5).collect();
        assert_eq!(full.len(), 2);
        for seg in &full {
            assert!((seg.size.x - 2.05).abs() < 0.001);
        }

        let lintel: Vec<_> = south.iter().filter(|b| b.size.y < 2.5).collect();
        assert_eq!(lintel.len(), 1);
        assert!((lintel[0].size.x - 0.9).abs() < 0.001);
        assert!((lintel[0].size.y - 0.5).abs() < 0.001);
        assert!((lintel[0].position.y - 2.35).abs() < 0.001);
    }

    #[test]
    fn test_door_cutout_excluded_from_full_height_span() {
        let room = reference_room();
        let wall = &room.walls[0];
        let dir = wall.direction();
        let south = boxes_for_wall(&room, 0);

        // The door spans parametric [0.41, 0.59]; no full-height segment
        // may cross it.
        for b in south.iter().filter(|b| b.size.y > 2.5) {
            let (s, e) = span_on_wall(b, wall.start, dir, wall.length());
            assert!(e <= 0.41 + 0.001 || s >= 0.59 - 0.001);
        }
    }

    #[test]
    fn test_window_wall_segments() {
        let room = reference_room();
        let north = boxes_for_wall(&room, 2);

        // Left flank, lintel, sill, right flank.
        assert_eq!(north.len(), 4);

        let sill: Vec<_> = north
            .iter()
            .filter(|b| (b.position.y - 0.45).abs() < 0.001)
            .collect();
        assert_eq!(sill.len(), 1);
        assert!((sill[0].size.y - 0.9).abs() < 0.001);
        assert!((sill[0].size.x - 1.2).abs() < 0.001);

        let lintel: Vec<_> = north
            .iter()
            .filter(|b| (b.position.y - 2.35).abs() < 0.001)
            .collect();
        assert_eq!(lintel.len(), 1);
        assert!((lintel[0].size.y - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_full_height_door_leaves_no_lintel() {
        let mut room = reference_room();
        room.doors[0].height = room.walls[0].height;
        let south = boxes_for_wall(&room, 0);

        assert_eq!(south.len(), 2);
        assert!(south.iter().all(|b| b.size.y > 2.5));
    }

    #[test]
    fn test_degenerate_flank_is_dropped() {
        let mut room = Room::from_estimate(
            "edge",
            &RoomEstimate::new(5.0, 4.0).with_door(CompassSide::South),
        );
        // Slide the door flush against the left corner.
        room.doors[0].position = Vec2::new(room.doors[0].width / 2.0, 0.0);
        let south = boxes_for_wall(&room, 0);

        // No left flank: only the lintel and the right flank remain.
        assert_eq!(south.len(), 2);
    }

    #[test]
    fn test_invalid_wall_index_skipped() {
        let mut room = Room::from_estimate("bad", &RoomEstimate::new(5.0, 4.0));
        room.doors
            .push(roomforge_core::Door::new(11, Vec2::new(2.5, 0.0), 0.9));

        let boxes = build_wall_segments(&room);
        assert_eq!(boxes.len(), 4);
    }
}
