#![no_std]

//! Treasure Hunt
//!
//! Players stake a token deposit to join a round, then each gets exactly one
//! step on a 10x10 grid. Stepping onto a multiple of five nudges the hidden
//! treasure to a neighbouring cell; stepping onto a prime scatters it
//! anywhere. Whoever lands on the treasure takes the whole pool and the
//! round starts over.

use soroban_sdk::{contract, contracterror, contractevent, contractimpl, contracttype, Address, Env};

mod grid;
mod ledger;
mod random;
mod rules;
mod storage;



pub use rules::{MoveOutcome, Player, Relocation, RoundState};

use ledger::TokenLedger;
use random::PrngSource;

// ============================================================================
// Errors
// ============================================================================

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    InsufficientDeposit = 1,
    AlreadyJoined = 2,
    NotJoined = 3,
    AlreadyMoved = 4,
    InvalidMove = 5,
    TransferFailed = 6,
    DepositFailed = 7,
    PoolOverflow = 8,
    NotInitialized = 9,
}

// ============================================================================
// Storage
// ============================================================================

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Token,
    Round,
    /// Player record, scoped to a round number.
    Player(u32, Address),
}

const DAY_IN_LEDGERS: u32 = 17_280;
const INSTANCE_TTL_LEDGERS: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_LEDGERS - DAY_IN_LEDGERS;
const PLAYER_TTL_LEDGERS: u32 = 30 * DAY_IN_LEDGERS;
const PLAYER_TTL_THRESHOLD: u32 = PLAYER_TTL_LEDGERS - DAY_IN_LEDGERS;

// ============================================================================
// Events
// ============================================================================

#[contractevent]
pub struct RoundOpened {
    #[topic]
    pub round: u32,
}

#[contractevent]
pub struct PlayerJoined {
    #[topic]
    pub round: u32,
    #[topic]
    pub player: Address,
    pub position: u32,
    pub deposit: i128,
}

#[contractevent]
pub struct PlayerMoved {
    #[topic]
    pub round: u32,
    #[topic]
    pub player: Address,
    pub from: u32,
    pub to: u32,
}

#[contractevent]
pub struct TreasureRelocated {
    #[topic]
    pub round: u32,
    pub relocation: Relocation,
}

#[contractevent]
pub struct RoundWon {
    #[topic]
    pub round: u32,
    #[topic]
    pub winner: Address,
    pub prize: i128,
}

// ============================================================================
// Contract Implementation
// ============================================================================

#[contract]
pub struct TreasureHunt;

#[contractimpl]
impl TreasureHunt {
    /// `token` is the SEP-41 token deposits are paid in.
    pub fn __constructor(env: Env, token: Address) {
        storage::store_token(&env, &token);
        let state = RoundState::open(0, None, &mut PrngSource::new(&env), None);
        storage::store_round(&env, &state);
        RoundOpened { round: state.round }.publish(&env);
    }

    pub fn join_game(env: Env, player: Address, deposit: i128) -> Result<Player, Error> {
        player.require_auth();

        let mut state = storage::load_round(&env)?;
        let existing = storage::load_player(&env, state.round, &player);
        let record = state.join(&existing, deposit, &mut PrngSource::new(&env))?;

        TokenLedger::new(&env)?.deposit(&player, deposit)?;

        storage::store_player(&env, state.round, &player, &record);
        storage::store_round(&env, &state);

        PlayerJoined {
            round: state.round,
            player,
            position: record.position,
            deposit,
        }
        .publish(&env);
        Ok(record)
    }

    /// Steps `player` onto `target`. A winning step pays out the pool and
    /// opens the next round before returning; if the payout fails nothing
    /// of the step is kept.
    pub fn move_to(env: Env, player: Address, target: u32) -> Result<MoveOutcome, Error> {
        player.require_auth();

        let state = storage::load_round(&env)?;
        let record = storage::load_player(&env, state.round, &player);
        let mut rng = PrngSource::new(&env);
        let plan = state.plan_move(&record, target, &mut rng)?;

        match plan.prize {
            Some(prize) => {
                TokenLedger::new(&env)?.payout(&player, prize)?;
                // Bumping the round number retires every record of this one.
                let next = plan.round.next_round(player.clone(), &mut rng);
                storage::store_round(&env, &next);

                Self::publish_move(&env, &state, &player, &record, &plan.outcome());
                RoundWon {
                    round: state.round,
                    winner: player,
                    prize,
                }
                .publish(&env);
                RoundOpened { round: next.round }.publish(&env);
            }
            None => {
                storage::store_player(&env, state.round, &player, &plan.player);
                storage::store_round(&env, &plan.round);
                Self::publish_move(&env, &state, &player, &record, &plan.outcome());
            }
        }

        Ok(plan.outcome())
    }

    pub fn get_treasure_position(env: Env) -> Result<u32, Error> {
        Ok(storage::load_round(&env)?.treasure)
    }

    /// Current-round record of `player`; default if they have not joined.
    pub fn get_player(env: Env, player: Address) -> Result<Player, Error> {
        let state = storage::load_round(&env)?;
        Ok(storage::load_player(&env, state.round, &player))
    }

    pub fn get_winner(env: Env) -> Result<Option<Address>, Error> {
        Ok(storage::load_round(&env)?.winner)
    }

    pub fn get_pool(env: Env) -> Result<i128, Error> {
        Ok(storage::load_round(&env)?.pool)
    }

    /// Players who joined the current round.
    pub fn get_player_count(env: Env) -> Result<u32, Error> {
        Ok(storage::load_round(&env)?.players)
    }

    pub fn get_round(env: Env) -> Result<u32, Error> {
        Ok(storage::load_round(&env)?.round)
    }

    pub fn get_token(env: Env) -> Result<Address, Error> {
        storage::load_token(&env)
    }

    // --- Internals ---
    fn publish_move(
        env: &Env,
        state: &RoundState,
        player: &Address,
        before: &Player,
        outcome: &MoveOutcome,
    ) {
        PlayerMoved {
            round: state.round,
            player: player.clone(),
            from: before.position,
            to: outcome.position,
        }
        .publish(env);
        if outcome.relocation != Relocation::Unmoved {
            TreasureRelocated {
                round: state.round,
                relocation: outcome.relocation,
            }
            .publish(env);
        }
    }
}
