//! Line-of-sight scans over the projected grid.
//! Threat: who could hit us this turn. Opportunity: whether we can hit
//! someone right now. Both probe with edge clamping, so a probe past the
//! boundary re-checks the boundary cell instead of erroring.

use crate::arena::TankState;
use crate::grid::OccupancyGrid;
use crate::types::{Cell, Direction};

/// How far a shot reaches, in cells.
pub(super) const FIRE_RANGE: i32 = 3;

const PROBE_ORDER: [Direction; 4] =
    [Direction::West, Direction::East, Direction::North, Direction::South];

/// Cell of the nearest combatant lined up on `me` and facing back at us.
///
/// The scan is distance-major so a shooter one cell away wins over one two
/// cells away; within one distance ring the west, east, north, south probe
/// order breaks ties. A combatant that is in line but facing elsewhere does
/// not stop the scan behind it.
pub(super) fn find_threat(me: &TankState, grid: &OccupancyGrid) -> Option<Cell> {
    let origin = me.cell();
    for distance in 1..=FIRE_RANGE {
        for probe_dir in PROBE_ORDER {
            let raw = origin.step_by(probe_dir, distance);
            let probe = grid.clamp(raw.x, raw.y);
            if let Some(occupant) = grid.occupant(probe)
                && occupant.facing == probe_dir.opposite()
            {
                return Some(probe);
            }
        }
    }
    None
}

/// Whether any combatant sits in the firing lane, up to [`FIRE_RANGE`] cells
/// straight ahead. The target's own facing is irrelevant.
pub(super) fn has_target(me: &TankState, grid: &OccupancyGrid) -> bool {
    let origin = me.cell();
    (1..=FIRE_RANGE).any(|distance| {
        let probe = origin.step_by(me.direction, distance);
        grid.get_clamped(probe.x, probe.y).is_some()
    })
}
