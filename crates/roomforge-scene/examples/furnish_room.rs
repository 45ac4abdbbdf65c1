//! Furnish a living room end to end and print the assembled scene.
//!
//! Run with: cargo run --example furnish_room

use roomforge_core::{furniture_for_room, CompassSide, Room, RoomEstimate, RoomKind, RoomStyle};
use roomforge_layout::solve;
use roomforge_scene::{assemble, AssembleOptions};

fn main() {
    // A 5m x 4m room: door on the south wall, window on the north wall.
    let estimate = RoomEstimate::new(5.0, 4.0)
        .with_door(CompassSide::South)
        .with_window(CompassSide::North);
    let room = Room::from_estimate("demo-living-room", &estimate);

    println!(
        "Room: {:.1}m x {:.1}m x {:.1}m, {} walls, {} doors, {} windows\n",
        room.dimensions.width,
        room.dimensions.depth,
        room.dimensions.height,
        room.walls.len(),
        room.doors.len(),
        room.windows.len()
    );

    let items = furniture_for_room(RoomKind::LivingRoom, RoomStyle::Modern);
    let report = solve(&room, &items);

    println!("Placed {} of {} items:", report.placed.len(), items.len());
    for placed in &report.placed {
        println!(
            "  {:<20} at ({:>5.2}, {:>5.2})  rotation {:>6.1} deg",
            placed.item.id,
            placed.position.x,
            placed.position.z,
            placed.rotation.to_degrees()
        );
    }
    for item in &report.dropped {
        println!("  {:<20} dropped (no free spot)", item.id);
    }

    let scene = assemble(&room, &report.placed, RoomStyle::Modern, &AssembleOptions::default());

    println!("\nScene:");
    println!("  {} wall boxes", scene.walls.len());
    println!("  {} floor vertices", scene.floor.len());
    println!("  {} glass panes", scene.glazing.len());
    println!("  {} furniture blocks", scene.furniture.len());
    println!("  {} lights", scene.lights.len());
    for camera in &scene.cameras {
        println!(
            "  camera {:?}: position ({:.2}, {:.2}, {:.2}), fov {}",
            camera.kind, camera.position.x, camera.position.y, camera.position.z, camera.fov
        );
    }
}
