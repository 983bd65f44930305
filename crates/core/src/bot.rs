//! Per-turn decision engine.
//! `Decider` owns the only state that survives across turns (the two-move
//! window and the fallback RNG) and walks a fixed priority each turn:
//! evade an incoming shot, fire at a target, otherwise sweep the arena.

use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

use crate::arena::ArenaUpdate;
use crate::grid::OccupancyGrid;
use crate::types::*;

mod maneuver;
mod scan;

#[cfg(test)]
mod test_support;

/// Actions a recovering turn may pick from. Firing blind is excluded.
const RECOVERY_MOVES: [Action; 3] = [Action::TurnLeft, Action::TurnRight, Action::Forward];

pub struct Decider {
    tactics: Tactics,
    history: MoveHistory,
    rng: ChaCha8Rng,
}

impl Decider {
    pub fn new(tactics: Tactics, seed: u64) -> Self {
        Self { tactics, history: MoveHistory::default(), rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Decide one turn. Never fails: snapshots that violate the arena
    /// contract fall back to a random safe move so the turn is answered
    /// regardless.
    pub fn decide(&mut self, update: &ArenaUpdate) -> Decision {
        match self.try_decide(update) {
            Ok(decision) => decision,
            Err(_) => self.fallback_decision(),
        }
    }

    /// The primary decision path. Errors indicate a contract violation in
    /// the snapshot; callers wanting the never-forfeit behavior follow up
    /// with [`Self::fallback_decision`].
    pub fn try_decide(&mut self, update: &ArenaUpdate) -> Result<Decision, DecideError> {
        let (grid, me) = OccupancyGrid::project(&update.arena, update.self_href())?;

        let scan_threats = match self.tactics.scan_mode {
            ScanMode::Always => true,
            ScanMode::WhenHit => me.was_hit,
        };
        if scan_threats && let Some(threat) = scan::find_threat(&me, &grid) {
            let action = maneuver::evade_move(&me, threat, &grid, &self.tactics);
            self.history.record(action);
            return Ok(Decision { action, reason: DecisionReason::Evade { threat } });
        }

        if scan::has_target(&me, &grid) {
            // Firing is not a movement; the sweep window stays as it was.
            return Ok(Decision { action: Action::Fire, reason: DecisionReason::Fire });
        }

        let (action, reason) =
            maneuver::sweep_move(&me, grid.width(), grid.height(), &self.tactics, &self.history);
        self.history.record(action);
        Ok(Decision { action, reason })
    }

    /// Uniformly random pick from the safe moves, used when the primary path
    /// reports a broken snapshot. Leaves the sweep window untouched.
    pub fn fallback_decision(&mut self) -> Decision {
        let pick = self.rng.next_u64() as usize % RECOVERY_MOVES.len();
        Decision { action: RECOVERY_MOVES[pick], reason: DecisionReason::Fallback }
    }

    pub fn history(&self) -> MoveHistory {
        self.history
    }
}
