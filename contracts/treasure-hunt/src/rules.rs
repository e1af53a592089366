//! Round state machine: joining, move gating, treasure relocation, win
//! detection and reset.
//!
//! Nothing in here touches storage or the token. Operations either mutate a
//! local copy (`join`) or return a staged plan (`plan_move`) that the
//! contract commits once the ledger side has succeeded.

use soroban_sdk::{contracttype, Address};

use crate::grid;
use crate::random::RandomSource;
use crate::Error;

/// Per-player record. The default value is what an absent player reads as.
#[contracttype]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Player {
    pub position: u32,
    pub has_moved: bool,
    pub joined: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundState {
    pub round: u32,
    pub treasure: u32,
    pub pool: i128,
    pub players: u32,
    /// Last winner; carried over resets until the next win.
    pub winner: Option<Address>,
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Relocation {
    Unmoved,
    /// Moved to a neighbour of its previous cell.
    Nudged(u32),
    /// Moved anywhere on the grid.
    Scattered(u32),
}

/// Result of an accepted move, as reported to the caller.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MoveOutcome {
    pub position: u32,
    pub relocation: Relocation,
    pub won: bool,
    pub prize: i128,
}

/// What a cell does to the treasure when a player steps onto it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Trigger {
    Nudge,
    Scatter,
    Quiet,
}

/// Multiples of five take priority over primes, so 5 nudges.
pub fn trigger_for(cell: u32) -> Trigger {
    if grid::is_multiple_of_five(cell) {
        Trigger::Nudge
    } else if grid::is_prime(cell) {
        Trigger::Scatter
    } else {
        Trigger::Quiet
    }
}

/// Staged effects of one move. `prize` is set iff the move wins.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MovePlan {
    pub player: Player,
    pub round: RoundState,
    pub relocation: Relocation,
    pub prize: Option<i128>,
}

impl MovePlan {
    pub fn outcome(&self) -> MoveOutcome {
        MoveOutcome {
            position: self.player.position,
            relocation: self.relocation,
            won: self.prize.is_some(),
            prize: self.prize.unwrap_or(0),
        }
    }
}

impl RoundState {
    /// Opens a round with a fresh treasure cell. `previous_treasure`, when
    /// given, is never reused.
    pub fn open(
        round: u32,
        winner: Option<Address>,
        rng: &mut impl RandomSource,
        previous_treasure: Option<u32>,
    ) -> Self {
        Self {
            round,
            treasure: rng.random_cell(previous_treasure.as_slice()),
            pool: 0,
            players: 0,
            winner,
        }
    }

    /// Admits a player, returning the record to store. `existing` is the
    /// caller's current record (default if absent).
    pub fn join(
        &mut self,
        existing: &Player,
        deposit: i128,
        rng: &mut impl RandomSource,
    ) -> Result<Player, Error> {
        if deposit <= 0 {
            return Err(Error::InsufficientDeposit);
        }
        if existing.joined {
            return Err(Error::AlreadyJoined);
        }
        self.pool = self.pool.checked_add(deposit).ok_or(Error::PoolOverflow)?;
        self.players = self.players.saturating_add(1);

        Ok(Player {
            position: rng.random_cell(&[]),
            has_moved: false,
            joined: true,
        })
    }

    pub fn plan_move(
        &self,
        player: &Player,
        target: u32,
        rng: &mut impl RandomSource,
    ) -> Result<MovePlan, Error> {
        if !player.joined {
            return Err(Error::NotJoined);
        }
        if player.has_moved {
            return Err(Error::AlreadyMoved);
        }
        if !grid::is_adjacent(player.position, target) {
            return Err(Error::InvalidMove);
        }

        let mut next = self.clone();
        let moved = Player {
            position: target,
            has_moved: true,
            joined: true,
        };

        let relocation = match trigger_for(target) {
            Trigger::Nudge => {
                next.treasure = rng.random_adjacent_cell(self.treasure, Some(target));
                Relocation::Nudged(next.treasure)
            }
            Trigger::Scatter => {
                next.treasure = rng.random_cell(&[target, self.treasure]);
                Relocation::Scattered(next.treasure)
            }
            Trigger::Quiet => Relocation::Unmoved,
        };

        // Relocation never lands on `target`, so only quiet cells can win.
        let prize = (moved.position == next.treasure).then_some(next.pool);

        Ok(MovePlan {
            player: moved,
            round: next,
            relocation,
            prize,
        })
    }

    /// The round that follows a win by `winner`.
    pub fn next_round(&self, winner: Address, rng: &mut impl RandomSource) -> Self {
        Self::open(
            self.round.saturating_add(1),
            Some(winner),
            rng,
            Some(self.treasure),
        )
    }
}
