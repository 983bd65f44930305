pub mod arena;
pub mod bot;
pub mod grid;
pub mod types;

pub use arena::{Arena, ArenaUpdate, Links, SelfLink, TankState};
pub use bot::Decider;
pub use grid::{Occupant, OccupancyGrid};
pub use types::*;
