//! Furniture placement for roomforge rooms.
//!
//! Given a room's geometry and a furniture list, the solver computes a
//! non-overlapping layout: a position and rotation for every item it can
//! fit, honoring each item's placement rule (against-wall, near-window,
//! center, corner) and keeping clear of doors and windows.
//!
//! The solver is deterministic and best-effort: identical inputs produce
//! identical layouts, and items that fit nowhere are dropped rather than
//! reported as errors. `solve` exposes the dropped set so callers can
//! decide what a sparser-than-requested room means for them.
//!
//! # Example
//!
//! ```ignore
//! use roomforge_core::{furniture_for_room, Room, RoomEstimate, RoomKind, RoomStyle};
//! use roomforge_layout::solve;
//!
//! let room = Room::from_estimate("living", &RoomEstimate::new(5.0, 4.0));
//! let items = furniture_for_room(RoomKind::LivingRoom, RoomStyle::Modern);
//! let report = solve(&room, &items);
//! for placed in &report.placed {
//!     println!("{} at {:?}", placed.item.id, placed.position);
//! }
//! ```

mod solver;
mod walls;

pub use solver::{place_furniture, solve, PlacedFurniture, PlacementReport};
pub use walls::{analyze_walls, WallProfile, Zone};
