//! Shared test fixtures for the `bot` submodule test suites.
//! This module exists to avoid repeating arena setup across many tests.
//! It does not own production decision logic.

use std::collections::BTreeMap;

use super::*;
use crate::arena::{Arena, Links, SelfLink, TankState};
use crate::grid::OccupancyGrid;

pub(super) const ME: &str = "https://me.example";

pub(super) fn tank(x: i32, y: i32, direction: Direction) -> TankState {
    TankState { x, y, direction, was_hit: false, score: 0 }
}

pub(super) fn update_with(dims: [i32; 2], tanks: Vec<(&str, TankState)>) -> ArenaUpdate {
    let state: BTreeMap<String, TankState> =
        tanks.into_iter().map(|(id, tank)| (id.to_string(), tank)).collect();
    ArenaUpdate {
        links: Links { self_link: SelfLink { href: ME.to_string() } },
        arena: Arena { dims, state },
    }
}

pub(super) fn lone_update(dims: [i32; 2], me: TankState) -> ArenaUpdate {
    update_with(dims, vec![(ME, me)])
}

pub(super) fn project(update: &ArenaUpdate) -> (OccupancyGrid<'_>, TankState) {
    OccupancyGrid::project(&update.arena, update.self_href()).expect("fixture should project")
}

pub(super) fn decider() -> Decider {
    Decider::new(Tactics::default(), 42)
}
