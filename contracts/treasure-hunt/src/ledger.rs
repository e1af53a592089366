//! Prize pool custody over a SEP-41 token.
//!
//! Deposits move from the player into the contract's own balance; the
//! payout moves the whole pool back out to the winner.

use soroban_sdk::{token, Address, Env};

use crate::storage;
use crate::Error;

pub struct TokenLedger<'a> {
    client: token::Client<'a>,
    escrow: Address,
}

impl<'a> TokenLedger<'a> {
    pub fn new(env: &Env) -> Result<Self, Error> {
        let token = storage::load_token(env)?;
        Ok(Self {
            client: token::Client::new(env, &token),
            escrow: env.current_contract_address(),
        })
    }

    pub fn deposit(&self, from: &Address, amount: i128) -> Result<(), Error> {
        match self.client.try_transfer(from, &self.escrow, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(Error::DepositFailed),
        }
    }

    pub fn payout(&self, to: &Address, amount: i128) -> Result<(), Error> {
        if amount <= 0 {
            return Ok(());
        }
        match self.client.try_transfer(&self.escrow, to, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(Error::TransferFailed),
        }
    }
}
