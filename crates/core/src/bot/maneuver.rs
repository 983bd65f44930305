//! Movement selection: edge turn-away, alternating sweep, and evasion.
//! This module exists to keep all "which way do we move" rules in one place.
//! It reads the move window but never writes it; recording is the decider's
//! job so the window update happens exactly once per turn.

use crate::arena::TankState;
use crate::grid::OccupancyGrid;
use crate::types::{Action, Cell, DecisionReason, Direction, MoveHistory, Tactics};

/// Open-field move, picked in priority order: turn away from an edge we are
/// about to run into, alternate the turn direction after a forward move so
/// consecutive sweeps zig-zag instead of circling, otherwise advance.
pub(super) fn sweep_move(
    me: &TankState,
    width: i32,
    height: i32,
    tactics: &Tactics,
    history: &MoveHistory,
) -> (Action, DecisionReason) {
    if cells_to_edge_ahead(me, width, height) < tactics.edge_margin {
        return (tactics.rotate.action(), DecisionReason::EdgeAvoid);
    }
    if history.last() == Action::Forward {
        let turn = if history.prior() == Action::TurnLeft {
            Action::TurnRight
        } else {
            Action::TurnLeft
        };
        return (turn, DecisionReason::Sweep);
    }
    (Action::Forward, DecisionReason::Advance)
}

/// Move off the firing line of `threat`. The threat shares exactly one axis
/// with us: when our facing crosses that axis a forward step escapes,
/// otherwise we rotate until it does. Under `safe_evade` the forward step
/// additionally requires an in-bounds, unoccupied destination.
pub(super) fn evade_move(
    me: &TankState,
    threat: Cell,
    grid: &OccupancyGrid,
    tactics: &Tactics,
) -> Action {
    let forward_escapes = if threat.x == me.x {
        me.direction.is_horizontal()
    } else {
        me.direction.is_vertical()
    };
    if forward_escapes && forward_is_clear(me, grid, tactics) {
        Action::Forward
    } else {
        tactics.rotate.action()
    }
}

fn forward_is_clear(me: &TankState, grid: &OccupancyGrid, tactics: &Tactics) -> bool {
    if !tactics.safe_evade {
        return true;
    }
    let dest = me.cell().step(me.direction);
    grid.in_bounds(dest) && grid.occupant(dest).is_none()
}

fn cells_to_edge_ahead(me: &TankState, width: i32, height: i32) -> i32 {
    match me.direction {
        Direction::West => me.x,
        Direction::East => width - 1 - me.x,
        Direction::North => me.y,
        Direction::South => height - 1 - me.y,
    }
}
