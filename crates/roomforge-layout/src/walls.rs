//! Per-wall analysis: inward normals and free zones.
//!
//! A `WallProfile` is the solver's working view of one wall: its direction
//! and length, the unit normal pointing into the room, and the parametric
//! sub-ranges not blocked by a door or window clearance buffer. Profiles
//! are recomputed on every solve and owned by the solver alone.

use glam::Vec2;
use smallvec::SmallVec;

use roomforge_core::Room;

/// Clearance kept free in front of doors, in meters.
pub(crate) const DOOR_CLEARANCE: f32 = 1.0;
/// Clearance kept free under windows, in meters.
pub(crate) const WINDOW_CLEARANCE: f32 = 0.3;

/// A parametric `[0,1]` sub-range of a wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zone {
    pub start_t: f32,
    pub end_t: f32,
}

impl Zone {
    pub fn width(&self) -> f32 {
        self.end_t - self.start_t
    }
}

/// Solver-side view of one wall.
#[derive(Debug, Clone)]
pub struct WallProfile {
    pub wall_index: usize,
    pub start: Vec2,
    pub end: Vec2,
    pub length: f32,
    pub angle: f32,
    /// Unit normal pointing toward the room interior.
    pub normal: Vec2,
    /// Parametric ranges available for furniture.
    pub free_zones: SmallVec<[Zone; 4]>,
}

impl WallProfile {
    /// The plan point at parametric position `t`, pushed `offset` meters
    /// into the room along the inward normal.
    pub fn point_at(&self, t: f32, offset: f32) -> Vec2 {
        self.start + (self.end - self.start) * t + self.normal * offset
    }
}

/// Analyze every wall of a room: inward normal plus free zones left after
/// door and window clearance buffers. Blocked intervals are merged before
/// inversion so overlapping buffers cannot split a free zone in two.
pub fn analyze_walls(room: &Room) -> Vec<WallProfile> {
    let center = room.dimensions.center();

    room.walls
        .iter()
        .enumerate()
        .map(|(idx, wall)| {
            let d = wall.direction();
            let length = wall.length();
            let angle = wall.angle();

            // Perpendicular, flipped toward the bounding-box center.
            let mut normal = if length > 0.0 {
                Vec2::new(-d.y / length, d.x / length)
            } else {
                Vec2::new(0.0, 1.0)
            };
            let to_center = center - wall.midpoint();
            if normal.dot(to_center) < 0.0 {
                normal = -normal;
            }

            let mut blocked: SmallVec<[Zone; 4]> = SmallVec::new();
            for door in room.doors.iter().filter(|d| d.wall_index == idx) {
                let t = wall.parametric_position(door.position);
                let half_w = (door.width + DOOR_CLEARANCE) / 2.0 / length.max(f32::EPSILON);
                blocked.push(Zone {
                    start_t: (t - half_w).max(0.0),
                    end_t: (t + half_w).min(1.0),
                });
            }
            for window in room.windows.iter().filter(|w| w.wall_index == idx) {
                let t = wall.parametric_position(window.position);
                let half_w = (window.width + WINDOW_CLEARANCE) / 2.0 / length.max(f32::EPSILON);
                blocked.push(Zone {
                    start_t: (t - half_w).max(0.0),
                    end_t: (t + half_w).min(1.0),
                });
            }

            blocked.sort_by(|a, b| {
                a.start_t
                    .partial_cmp(&b.start_t)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            let mut merged: SmallVec<[Zone; 4]> = SmallVec::new();
            for zone in blocked {
                match merged.last_mut() {
                    Some(last) if zone.start_t <= last.end_t => {
                        last.end_t = last.end_t.max(zone.end_t);
                    }
                    _ => merged.push(zone),
                }
            }

            let mut free_zones: SmallVec<[Zone; 4]> = SmallVec::new();
            let mut cursor = 0.0;
            for zone in &merged {
                if zone.start_t > cursor + 0.01 {
                    free_zones.push(Zone {
                        start_t: cursor,
                        end_t: zone.start_t,
                    });
                }
                cursor = zone.end_t;
            }
            if cursor < 0.99 {
                free_zones.push(Zone {
                    start_t: cursor,
                    end_t: 1.0,
                });
            }

            WallProfile {
                wall_index: idx,
                start: wall.start,
                end: wall.end,
                length,
                angle,
                normal,
                free_zones,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use roomforge_core::{CompassSide, Room, RoomEstimate, Window};

    fn plain_room(width: f32, depth: f32) -> Room {
        Room::from_estimate("test", &RoomEstimate::new(width, depth))
    }

    #[test]
    fn test_normals_point_inward() {
        let profiles = analyze_walls(&plain_room(5.0, 4.0));
        let center = Vec2::new(2.5, 2.0);

        for profile in &profiles {
            let midpoint = (profile.start + profile.end) * 0.5;
            assert!(
                profile.normal.dot(center - midpoint) > 0.0,
                "wall {} normal points outward",
                profile.wall_index
            );
            assert!((profile.normal.length() - 1.0).abs() < 0.001);
        }
    }

    #[test]
    fn test_unobstructed_wall_has_one_full_zone() {
        let profiles = analyze_walls(&plain_room(5.0, 4.0));
        for profile in &profiles {
            assert_eq!(profile.free_zones.len(), 1);
            assert!((profile.free_zones[0].start_t - 0.0).abs() < 0.001);
            assert!((profile.free_zones[0].end_t - 1.0).abs() < 0.001);
        }
    }

    #[test]
    fn test_door_splits_wall_into_two_zones() {
        let estimate = RoomEstimate::new(5.0, 4.0).with_door(CompassSide::South);
        let room = Room::from_estimate("test", &estimate);
        let profiles = analyze_walls(&room);

        // Door 0.9m + 1.0m clearance centered on a 5m wall blocks
        // [0.5 - 0.19, 0.5 + 0.19].
        let south = &profiles[0];
        assert_eq!(south.free_zones.len(), 2);
        assert!((south.free_zones[0].end_t - 0.31).abs() < 0.001);
        assert!((south.free_zones[1].start_t - 0.69).abs() < 0.001);
    }

    #[test]
    fn test_overlapping_buffers_merge() {
        let mut room = plain_room(5.0, 4.0);
        // Two windows close enough that their buffers overlap.
        room.windows.push(Window::new(2, Vec2::new(2.0, 4.0), 1.2, 1.2));
        room.windows.push(Window::new(2, Vec2::new(2.8, 4.0), 1.2, 1.2));

        let north = &analyze_walls(&room)[2];
        // Merged into one blocked interval, leaving two free zones.
        assert_eq!(north.free_zones.len(), 2);
    }

    #[test]
    fn test_invalid_wall_index_is_ignored() {
        let mut room = plain_room(5.0, 4.0);
        room.windows.push(Window::new(9, Vec2::new(2.0, 4.0), 1.2, 1.2));

        let profiles = analyze_walls(&room);
        for profile in &profiles {
            assert_eq!(profile.free_zones.len(), 1);
        }
    }

    #[test]
    fn test_point_at_offsets_inward() {
        let profiles = analyze_walls(&plain_room(5.0, 4.0));
        let south = &profiles[0];
        let p = south.point_at(0.5, 0.5);
        assert!((p.x - 2.5).abs() < 0.001);
        assert!((p.y - 0.5).abs() < 0.001);
    }
}
