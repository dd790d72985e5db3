use soroban_sdk::{contracttype, Address, Env, Symbol};

use crate::settlement::Settlement;
use crate::storage_types::Status;

#[contracttype]
#[derive(Clone)]
pub struct InitializedEvent {
    pub creator: Address,
    pub owner: Address,
    pub token: Address,
    pub token_supply: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct BuyEvent {
    pub contributor: Address,
    pub amount: i128,
    pub raised: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct FinalizedEvent {
    pub status: Status,
    pub raised: i128,
    pub contributor_count: u32,
}

#[contracttype]
#[derive(Clone)]
pub struct SendEvent {
    pub status: Status,
    pub processed: u32,
    pub cursor: u32,
    pub contributor_count: u32,
}

#[contracttype]
#[derive(Clone)]
pub struct WithdrawEvent {
    pub status: Status,
    pub settlement: Settlement,
}

#[contracttype]
#[derive(Clone)]
pub struct ClaimEvent {
    pub contributor: Address,
    pub asset: Address,
    pub amount: i128,
}

pub fn emit_initialized(env: &Env, event: InitializedEvent) {
    env.events().publish((Symbol::new(env, "initialized"),), event);
}

pub fn emit_buy(env: &Env, event: BuyEvent) {
    env.events().publish((Symbol::new(env, "buy"),), event);
}

pub fn emit_finalized(env: &Env, event: FinalizedEvent) {
    env.events().publish((Symbol::new(env, "finalized"),), event);
}

pub fn emit_cancelled(env: &Env, event: FinalizedEvent) {
    env.events().publish((Symbol::new(env, "cancelled"),), event);
}

pub fn emit_send(env: &Env, event: SendEvent) {
    env.events().publish((Symbol::new(env, "send"),), event);
}

pub fn emit_withdraw(env: &Env, event: WithdrawEvent) {
    env.events().publish((Symbol::new(env, "withdraw"),), event);
}

pub fn emit_claim(env: &Env, event: ClaimEvent) {
    env.events().publish((Symbol::new(env, "claim"),), event);
}
