//! Placement solver benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use roomforge_core::{furniture_for_room, CompassSide, Room, RoomEstimate, RoomKind, RoomStyle};
use roomforge_layout::solve;

fn solve_living_room(c: &mut Criterion) {
    let estimate = RoomEstimate::new(5.0, 4.0)
        .with_door(CompassSide::South)
        .with_window(CompassSide::North);
    let room = Room::from_estimate("bench", &estimate);
    let items = furniture_for_room(RoomKind::LivingRoom, RoomStyle::Modern);

    c.bench_function("solve_living_room", |b| {
        b.iter(|| solve(black_box(&room), black_box(&items)))
    });
}

fn solve_crowded_room(c: &mut Criterion) {
    let estimate = RoomEstimate::new(4.0, 3.0)
        .with_door(CompassSide::South)
        .with_window(CompassSide::North)
        .with_window(CompassSide::East);
    let room = Room::from_estimate("bench", &estimate);
    let mut items = furniture_for_room(RoomKind::LivingRoom, RoomStyle::Modern);
    items.extend(furniture_for_room(RoomKind::Office, RoomStyle::Modern));

    c.bench_function("solve_crowded_room", |b| {
        b.iter(|| solve(black_box(&room), black_box(&items)))
    });
}

criterion_group!(benches, solve_living_room, solve_crowded_room);
criterion_main!(benches);
