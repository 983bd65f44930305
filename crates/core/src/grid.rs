//! Dense occupancy projection of one arena snapshot.
//! This module exists to give the scan and movement code bounds-checked cell
//! lookups instead of raw roster coordinates. It does not own any decision
//! logic; a grid lives only for the duration of a single decision.

use crate::arena::{Arena, TankState};
use crate::types::{Cell, DecideError, Direction};

/// Upper bound on the projected cell count. Snapshots advertising a larger
/// arena are rejected as contract violations.
const MAX_CELLS: i64 = 1 << 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Occupant<'a> {
    pub id: &'a str,
    pub facing: Direction,
}

#[derive(Debug)]
pub struct OccupancyGrid<'a> {
    width: i32,
    height: i32,
    cells: Vec<Option<Occupant<'a>>>,
}

impl<'a> OccupancyGrid<'a> {
    /// Project the sparse roster onto a dense grid and pull out the acting
    /// combatant's own state. The acting combatant's cell is cleared so it
    /// cannot block its own line of sight or read as a threat to itself.
    ///
    /// Errors signal a violated arena contract: non-positive or oversized
    /// dims, a combatant outside the declared bounds, or `self_href` absent
    /// from the roster.
    pub fn project(arena: &'a Arena, self_href: &str) -> Result<(Self, TankState), DecideError> {
        let width = arena.width();
        let height = arena.height();
        // The i32 product can overflow for adversarial dims; size in i64.
        let area = width as i64 * height as i64;
        if width <= 0 || height <= 0 || area > MAX_CELLS {
            return Err(DecideError::BadDimensions { width, height });
        }

        let mut grid = Self { width, height, cells: vec![None; area as usize] };
        let mut me = None;

        for (id, tank) in &arena.state {
            let cell = tank.cell();
            if !grid.in_bounds(cell) {
                return Err(DecideError::OutOfBounds {
                    id: id.clone(),
                    x: tank.x,
                    y: tank.y,
                    width,
                    height,
                });
            }
            let idx = grid.index(cell);
            grid.cells[idx] = Some(Occupant { id: id.as_str(), facing: tank.direction });
            if id.as_str() == self_href {
                me = Some(*tank);
            }
        }

        let Some(me) = me else {
            return Err(DecideError::SelfMissing { href: self_href.to_string() });
        };

        let self_idx = grid.index(me.cell());
        grid.cells[self_idx] = None;

        Ok((grid, me))
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width && cell.y < self.height
    }

    pub fn occupant(&self, cell: Cell) -> Option<Occupant<'a>> {
        if !self.in_bounds(cell) {
            return None;
        }
        self.cells[self.index(cell)]
    }

    /// Clamped probe: coordinates beyond an edge read the boundary cell
    /// itself rather than wrapping or erroring.
    pub fn get_clamped(&self, x: i32, y: i32) -> Option<Occupant<'a>> {
        self.occupant(self.clamp(x, y))
    }

    pub fn clamp(&self, x: i32, y: i32) -> Cell {
        Cell { x: x.clamp(0, self.width - 1), y: y.clamp(0, self.height - 1) }
    }

    fn index(&self, cell: Cell) -> usize {
        (cell.y * self.width + cell.x) as usize
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn arena(dims: [i32; 2], tanks: &[(&str, i32, i32, Direction)]) -> Arena {
        let state: BTreeMap<String, TankState> = tanks
            .iter()
            .map(|&(id, x, y, direction)| {
                (id.to_string(), TankState { x, y, direction, was_hit: false, score: 0 })
            })
            .collect();
        Arena { dims, state }
    }

    #[test]
    fn projection_places_others_and_clears_own_cell() {
        let arena = arena(
            [6, 5],
            &[("me", 2, 2, Direction::North), ("foe", 4, 2, Direction::West)],
        );
        let (grid, me) = OccupancyGrid::project(&arena, "me").expect("projection should succeed");

        assert_eq!(me.cell(), Cell { x: 2, y: 2 });
        assert_eq!(grid.occupant(Cell { x: 2, y: 2 }), None, "own cell should read empty");

        let foe = grid.occupant(Cell { x: 4, y: 2 }).expect("foe should be placed");
        assert_eq!(foe.id, "foe");
        assert_eq!(foe.facing, Direction::West);
    }

    #[test]
    fn missing_self_is_reported() {
        let arena = arena([4, 4], &[("foe", 1, 1, Direction::South)]);
        let err = OccupancyGrid::project(&arena, "me").expect_err("projection should fail");
        assert_eq!(err, DecideError::SelfMissing { href: "me".to_string() });
    }

    #[test]
    fn out_of_bounds_combatant_is_reported_with_its_id() {
        let arena = arena(
            [4, 4],
            &[("me", 1, 1, Direction::North), ("stray", 9, 1, Direction::East)],
        );
        let err = OccupancyGrid::project(&arena, "me").expect_err("projection should fail");
        assert_eq!(
            err,
            DecideError::OutOfBounds { id: "stray".to_string(), x: 9, y: 1, width: 4, height: 4 }
        );
    }

    #[test]
    fn negative_coordinates_are_out_of_bounds() {
        let arena = arena([4, 4], &[("me", 0, -1, Direction::North)]);
        let err = OccupancyGrid::project(&arena, "me").expect_err("projection should fail");
        assert!(matches!(err, DecideError::OutOfBounds { .. }), "got {err:?}");
    }

    #[test]
    fn non_positive_dims_are_reported() {
        let arena = arena([0, 5], &[]);
        let err = OccupancyGrid::project(&arena, "me").expect_err("projection should fail");
        assert_eq!(err, DecideError::BadDimensions { width: 0, height: 5 });
    }

    #[test]
    fn oversized_dims_are_reported_without_allocating() {
        // Positive dims and an in-bounds self, but the advertised area is
        // far past anything playable.
        let arena = arena([65537, 65537], &[("me", 65536, 65536, Direction::North)]);
        let err = OccupancyGrid::project(&arena, "me").expect_err("projection should fail");
        assert_eq!(err, DecideError::BadDimensions { width: 65537, height: 65537 });
    }

    #[test]
    fn clamped_probes_read_the_boundary_cell() {
        let arena = arena(
            [5, 5],
            &[("me", 2, 2, Direction::North), ("corner", 0, 0, Direction::South)],
        );
        let (grid, _) = OccupancyGrid::project(&arena, "me").expect("projection should succeed");

        let probed = grid.get_clamped(-3, -1).expect("clamped probe should hit the corner");
        assert_eq!(probed.id, "corner");
        assert_eq!(grid.clamp(7, 2), Cell { x: 4, y: 2 });
    }

    #[test]
    fn unclamped_lookups_outside_the_grid_are_empty() {
        let arena = arena([3, 3], &[("me", 1, 1, Direction::East)]);
        let (grid, _) = OccupancyGrid::project(&arena, "me").expect("projection should succeed");

        assert_eq!(grid.occupant(Cell { x: -1, y: 0 }), None);
        assert_eq!(grid.occupant(Cell { x: 0, y: 3 }), None);
        assert!(!grid.in_bounds(Cell { x: 3, y: 0 }));
    }
}
