use soroban_sdk::{Address, Env};

use crate::rules::{Player, RoundState};
use crate::{
    DataKey, Error, INSTANCE_TTL_LEDGERS, INSTANCE_TTL_THRESHOLD, PLAYER_TTL_LEDGERS,
    PLAYER_TTL_THRESHOLD,
};

pub fn load_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(Error::NotInitialized)
}

pub fn store_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
    bump_instance(env);
}

pub fn load_round(env: &Env) -> Result<RoundState, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Round)
        .ok_or(Error::NotInitialized)
}

pub fn store_round(env: &Env, state: &RoundState) {
    env.storage().instance().set(&DataKey::Round, state);
    bump_instance(env);
}

/// Record of `player` in `round`; the default record if they never joined it.
pub fn load_player(env: &Env, round: u32, player: &Address) -> Player {
    env.storage()
        .persistent()
        .get(&DataKey::Player(round, player.clone()))
        .unwrap_or_default()
}

pub fn store_player(env: &Env, round: u32, player: &Address, record: &Player) {
    let key = DataKey::Player(round, player.clone());
    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, PLAYER_TTL_THRESHOLD, PLAYER_TTL_LEDGERS);
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_LEDGERS);
}
