//! Room geometry model.
//!
//! All plan coordinates are 2D meters with the origin at the room's
//! bottom-left corner: x runs along the south wall, z toward the north
//! wall. Heights extrude the plan along the world y axis.

use glam::Vec2;

use crate::errors::{OpeningKind, RoomError};
use crate::types::RoomId;

/// Default ceiling/wall height in meters.
pub const DEFAULT_WALL_HEIGHT: f32 = 2.6;
/// Default door size in meters.
pub const DEFAULT_DOOR_WIDTH: f32 = 0.9;
pub const DEFAULT_DOOR_HEIGHT: f32 = 2.1;
/// Default window size and sill height in meters.
pub const DEFAULT_WINDOW_WIDTH: f32 = 1.2;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 1.2;
pub const DEFAULT_SILL_HEIGHT: f32 = 0.9;

/// Tolerance for wall endpoints meeting, in meters.
const CLOSE_EPSILON: f32 = 0.01;

/// A straight wall segment in the plan, extruded to `height`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wall {
    pub start: Vec2,
    pub end: Vec2,
    pub height: f32,
}

impl Wall {
    /// Create a wall with the default height.
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self {
            start,
            end,
            height: DEFAULT_WALL_HEIGHT,
        }
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn direction(&self) -> Vec2 {
        self.end - self.start
    }

    pub fn length(&self) -> f32 {
        self.direction().length()
    }

    /// Angle of the wall direction in radians.
    pub fn angle(&self) -> f32 {
        let d = self.direction();
        d.y.atan2(d.x)
    }

    pub fn midpoint(&self) -> Vec2 {
        (self.start + self.end) * 0.5
    }

    /// Parametric position of a point along this wall: the projection of
    /// `point - start` onto the wall vector, normalized by length².
    /// Returns 0.5 for zero-length walls. The result is not clamped;
    /// consumers clamp the derived interval to the wall extent.
    pub fn parametric_position(&self, point: Vec2) -> f32 {
        let d = self.direction();
        let len_sq = d.length_squared();
        if len_sq > 0.0 {
            (point - self.start).dot(d) / len_sq
        } else {
            0.5
        }
    }

    /// The point at parametric position `t` along the wall.
    pub fn point_at(&self, t: f32) -> Vec2 {
        self.start + self.direction() * t
    }
}

/// A door opening in a wall. `position` is the absolute plan point of the
/// door's center on the wall.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Door {
    pub wall_index: usize,
    pub position: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Door {
    pub fn new(wall_index: usize, position: Vec2, width: f32) -> Self {
        Self {
            wall_index,
            position,
            width,
            height: DEFAULT_DOOR_HEIGHT,
        }
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }
}

/// A window opening in a wall. `sill_height` is the distance from the
/// floor to the window's bottom edge.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub wall_index: usize,
    pub position: Vec2,
    pub width: f32,
    pub height: f32,
    pub sill_height: f32,
}

impl Window {
    pub fn new(wall_index: usize, position: Vec2, width: f32, height: f32) -> Self {
        Self {
            wall_index,
            position,
            width,
            height,
            sill_height: DEFAULT_SILL_HEIGHT,
        }
    }

    pub fn with_sill_height(mut self, sill_height: f32) -> Self {
        self.sill_height = sill_height;
        self
    }
}

/// The floor polygon, given as the ordered list of wall-start vertices.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor {
    pub points: Vec<Vec2>,
}

impl Floor {
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    /// Signed shoelace area, absolute value.
    pub fn area(&self) -> f32 {
        if self.points.len() < 3 {
            return 0.0;
        }
        let mut sum = 0.0;
        for i in 0..self.points.len() {
            let a = self.points[i];
            let b = self.points[(i + 1) % self.points.len()];
            sum += a.x * b.y - b.x * a.y;
        }
        (sum * 0.5).abs()
    }
}

/// Bounding-box dimensions of the room in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub width: f32,
    pub depth: f32,
    pub height: f32,
}

impl Dimensions {
    pub fn new(width: f32, depth: f32, height: f32) -> Self {
        Self {
            width,
            depth,
            height,
        }
    }

    /// Center of the bounding box in the plan.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.depth / 2.0)
    }
}

/// The top-level description of one physical room.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    pub id: RoomId,
    pub walls: Vec<Wall>,
    pub floor: Floor,
    pub doors: Vec<Door>,
    pub windows: Vec<Window>,
    pub dimensions: Dimensions,
}

impl Room {
    /// The floor polygon, falling back to the axis-aligned rectangle from
    /// `dimensions` when fewer than 3 points are present.
    pub fn floor_polygon(&self) -> Vec<Vec2> {
        if self.floor.points.len() >= 3 {
            self.floor.points.clone()
        } else {
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(self.dimensions.width, 0.0),
                Vec2::new(self.dimensions.width, self.dimensions.depth),
                Vec2::new(0.0, self.dimensions.depth),
            ]
        }
    }

    /// Whether the walls chain into a closed loop (each wall's end meets
    /// the next wall's start, wrapping around, within 1 cm).
    pub fn is_closed(&self) -> bool {
        if self.walls.is_empty() {
            return false;
        }
        self.walls.iter().enumerate().all(|(i, wall)| {
            let next = &self.walls[(i + 1) % self.walls.len()];
            wall.end.distance(next.start) <= CLOSE_EPSILON
        })
    }

    /// Strict input-contract validation. The geometry builders and the
    /// placement solver do not require this: they skip openings with bad
    /// wall indices and fall back to a rectangle for degenerate floors.
    pub fn validate(&self) -> Result<(), RoomError> {
        if self.walls.is_empty() {
            return Err(RoomError::EmptyWalls);
        }
        if self.floor.points.len() < 3 {
            return Err(RoomError::DegenerateFloor {
                points: self.floor.points.len(),
            });
        }
        for door in &self.doors {
            if door.wall_index >= self.walls.len() {
                return Err(RoomError::WallIndexOutOfRange {
                    opening: OpeningKind::Door,
                    index: door.wall_index,
                    wall_count: self.walls.len(),
                });
            }
        }
        for window in &self.windows {
            if window.wall_index >= self.walls.len() {
                return Err(RoomError::WallIndexOutOfRange {
                    opening: OpeningKind::Window,
                    index: window.wall_index,
                    wall_count: self.walls.len(),
                });
            }
        }
        Ok(())
    }
}

/// Compass assignment for a wall of the default rectangular room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompassSide {
    South,
    East,
    North,
    West,
}

impl CompassSide {
    /// Wall index in the fixed south→east→north→west winding.
    pub fn wall_index(&self) -> usize {
        match self {
            CompassSide::South => 0,
            CompassSide::East => 1,
            CompassSide::North => 2,
            CompassSide::West => 3,
        }
    }

    pub const ALL: [CompassSide; 4] = [
        CompassSide::South,
        CompassSide::East,
        CompassSide::North,
        CompassSide::West,
    ];
}

/// Coarse room estimate: bounding dimensions plus door/window compass-wall
/// assignments, used when no explicit wall polygon is available.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomEstimate {
    pub width: f32,
    pub depth: f32,
    pub height: f32,
    pub doors: Vec<CompassSide>,
    pub windows: Vec<CompassSide>,
}

impl RoomEstimate {
    pub fn new(width: f32, depth: f32) -> Self {
        Self {
            width,
            depth,
            height: DEFAULT_WALL_HEIGHT,
            doors: Vec::new(),
            windows: Vec::new(),
        }
    }

    pub fn with_door(mut self, side: CompassSide) -> Self {
        self.doors.push(side);
        self
    }

    pub fn with_window(mut self, side: CompassSide) -> Self {
        self.windows.push(side);
        self
    }
}

impl Room {
    /// Build a default rectangular room from a coarse estimate.
    ///
    /// Walls wind south→east→north→west (indices 0–3). Openings assigned
    /// to the same compass side are spaced at `(i+1)/(N+1)` fractions
    /// along their wall, so they never sit flush against a corner.
    pub fn from_estimate(id: impl Into<RoomId>, estimate: &RoomEstimate) -> Self {
        let w = estimate.width;
        let d = estimate.depth;
        let h = estimate.height;

        let corners = [
            Vec2::new(0.0, 0.0),
            Vec2::new(w, 0.0),
            Vec2::new(w, d),
            Vec2::new(0.0, d),
        ];
        let walls: Vec<Wall> = (0..4)
            .map(|i| Wall::new(corners[i], corners[(i + 1) % 4]).with_height(h))
            .collect();
        let floor = Floor::new(corners.to_vec());

        let mut doors = Vec::new();
        let mut windows = Vec::new();
        for side in CompassSide::ALL {
            let wall = &walls[side.wall_index()];

            let on_side: Vec<_> = estimate.doors.iter().filter(|s| **s == side).collect();
            let n = on_side.len();
            for i in 0..n {
                let t = (i + 1) as f32 / (n + 1) as f32;
                doors.push(Door::new(
                    side.wall_index(),
                    wall.point_at(t),
                    DEFAULT_DOOR_WIDTH,
                ));
            }

            let on_side: Vec<_> = estimate.windows.iter().filter(|s| **s == side).collect();
            let n = on_side.len();
            for i in 0..n {
                let t = (i + 1) as f32 / (n + 1) as f32;
                windows.push(Window::new(
                    side.wall_index(),
                    wall.point_at(t),
                    DEFAULT_WINDOW_WIDTH,
                    DEFAULT_WINDOW_HEIGHT,
                ));
            }
        }

        Self {
            id: id.into(),
            walls,
            floor,
            doors,
            windows,
            dimensions: Dimensions::new(w, d, h),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_room_is_closed_rectangle() {
        let estimate = RoomEstimate::new(5.0, 4.0);
        let room = Room::from_estimate("test", &estimate);

        assert_eq!(room.walls.len(), 4);
        for i in 0..4 {
            let next = (i + 1) % 4;
            assert!(room.walls[i].end.distance(room.walls[next].start) < 0.001);
        }
        assert!(room.is_closed());
        assert!((room.floor.area() - 20.0).abs() < 0.001);
    }

    #[test]
    fn test_default_room_winding() {
        let room = Room::from_estimate("test", &RoomEstimate::new(5.0, 4.0));

        // South wall runs along z=0, north wall along z=depth.
        assert_eq!(room.walls[0].start, Vec2::new(0.0, 0.0));
        assert_eq!(room.walls[0].end, Vec2::new(5.0, 0.0));
        assert_eq!(room.walls[2].start, Vec2::new(5.0, 4.0));
        assert_eq!(room.walls[2].end, Vec2::new(0.0, 4.0));
    }

    #[test]
    fn test_estimate_opening_spacing() {
        let estimate = RoomEstimate::new(6.0, 4.0)
            .with_door(CompassSide::South)
            .with_door(CompassSide::South);
        let room = Room::from_estimate("test", &estimate);

        assert_eq!(room.doors.len(), 2);
        let wall = &room.walls[0];
        let t0 = wall.parametric_position(room.doors[0].position);
        let t1 = wall.parametric_position(room.doors[1].position);
        assert!((t0 - 1.0 / 3.0).abs() < 0.001);
        assert!((t1 - 2.0 / 3.0).abs() < 0.001);
    }

    #[test]
    fn test_single_opening_centered() {
        let estimate = RoomEstimate::new(5.0, 4.0).with_window(CompassSide::North);
        let room = Room::from_estimate("test", &estimate);

        assert_eq!(room.windows.len(), 1);
        let window = &room.windows[0];
        assert_eq!(window.wall_index, 2);
        let t = room.walls[2].parametric_position(window.position);
        assert!((t - 0.5).abs() < 0.001);
        assert!((window.sill_height - DEFAULT_SILL_HEIGHT).abs() < 0.001);
    }

    #[test]
    fn test_parametric_position() {
        let wall = Wall::new(Vec2::new(1.0, 1.0), Vec2::new(5.0, 1.0));
        assert!((wall.parametric_position(Vec2::new(3.0, 1.0)) - 0.5).abs() < 0.001);
        assert!((wall.parametric_position(Vec2::new(1.0, 1.0)) - 0.0).abs() < 0.001);
        assert!((wall.parametric_position(Vec2::new(5.0, 1.0)) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_parametric_position_zero_length_wall() {
        let wall = Wall::new(Vec2::new(2.0, 2.0), Vec2::new(2.0, 2.0));
        assert!((wall.parametric_position(Vec2::new(0.0, 0.0)) - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_floor_polygon_fallback() {
        let mut room = Room::from_estimate("test", &RoomEstimate::new(3.0, 2.0));
        room.floor.points.truncate(2);

        let polygon = room.floor_polygon();
        assert_eq!(polygon.len(), 4);
        assert_eq!(polygon[2], Vec2::new(3.0, 2.0));
    }

    #[test]
    fn test_validate_rejects_bad_wall_index() {
        let mut room = Room::from_estimate("test", &RoomEstimate::new(3.0, 2.0));
        room.doors
            .push(Door::new(7, Vec2::new(1.0, 0.0), DEFAULT_DOOR_WIDTH));

        assert!(matches!(
            room.validate(),
            Err(RoomError::WallIndexOutOfRange { index: 7, .. })
        ));
    }

    #[test]
    fn test_validate_ok_for_default_room() {
        let estimate = RoomEstimate::new(4.0, 3.0)
            .with_door(CompassSide::South)
            .with_window(CompassSide::North);
        let room = Room::from_estimate("test", &estimate);
        assert!(room.validate().is_ok());
    }

    #[test]
    fn test_wall_accessors() {
        let wall = Wall::new(Vec2::new(0.0, 0.0), Vec2::new(0.0, 4.0));
        assert!((wall.length() - 4.0).abs() < 0.001);
        assert!((wall.angle() - std::f32::consts::FRAC_PI_2).abs() < 0.001);
        assert_eq!(wall.midpoint(), Vec2::new(0.0, 2.0));
        assert!((wall.height - DEFAULT_WALL_HEIGHT).abs() < 0.001);
    }
}
