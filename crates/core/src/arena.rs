//! Wire model of the per-turn arena snapshot.
//!
//! The game server POSTs one JSON document per turn:
//!
//! ```json
//! {
//!   "_links": { "self": { "href": "https://bot.example.com" } },
//!   "arena": {
//!     "dims": [12, 9],
//!     "state": {
//!       "https://bot.example.com": {
//!         "x": 3, "y": 4, "direction": "N", "wasHit": false, "score": 0
//!       }
//!     }
//!   }
//! }
//! ```
//!
//! Parsing is strict: unknown fields at any level are rejected, so contract
//! drift surfaces as a decode error instead of silently ignored data. The
//! roster is a `BTreeMap` so iteration order is deterministic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{Cell, Direction};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArenaUpdate {
    #[serde(rename = "_links")]
    pub links: Links,
    pub arena: Arena,
}

impl ArenaUpdate {
    /// Identifier of the combatant this decision is being requested for.
    pub fn self_href(&self) -> &str {
        &self.links.self_link.href
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Links {
    #[serde(rename = "self")]
    pub self_link: SelfLink,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelfLink {
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Arena {
    /// Width and height, in that order.
    pub dims: [i32; 2],
    pub state: BTreeMap<String, TankState>,
}

impl Arena {
    pub fn width(&self) -> i32 {
        self.dims[0]
    }

    pub fn height(&self) -> i32 {
        self.dims[1]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TankState {
    pub x: i32,
    pub y: i32,
    pub direction: Direction,
    #[serde(rename = "wasHit", default)]
    pub was_hit: bool,
    /// Sent by the game server; carried for completeness, unused by the
    /// decision logic.
    #[serde(default)]
    pub score: i64,
}

impl TankState {
    pub fn cell(&self) -> Cell {
        Cell { x: self.x, y: self.y }
    }
}
