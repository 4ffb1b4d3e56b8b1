use soroban_sdk::{contracttype, Address, Env};

use crate::access::AdminState;
use crate::math::Scale;
use crate::oracle::Rates;
use crate::{SaleConfig, SaleState};

const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const CONTRIBUTION_TTL_BUMP: u32 = 60 * DAY_IN_LEDGERS;
pub(crate) const CONTRIBUTION_TTL_THRESHOLD: u32 = CONTRIBUTION_TTL_BUMP - DAY_IN_LEDGERS;

#[contracttype]
pub(crate) enum DataKey {
    Admin,
    Config,
    Scale,
    Rates,
    State,
    Whitelist,
    Contribution(Address), // investor → cumulative payment-asset amount
}

pub fn read_admin(e: &Env) -> AdminState {
    e.storage()
        .instance()
        .get(&DataKey::Admin)
        .expect("not initialised")
}

pub fn write_admin(e: &Env, admin: &AdminState) {
    e.storage().instance().set(&DataKey::Admin, admin);
}

pub fn read_config(e: &Env) -> SaleConfig {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .expect("not initialised")
}

pub fn write_config(e: &Env, config: &SaleConfig) {
    e.storage().instance().set(&DataKey::Config, config);
}

pub fn read_scale(e: &Env) -> Scale {
    e.storage()
        .instance()
        .get(&DataKey::Scale)
        .expect("not initialised")
}

pub fn write_scale(e: &Env, scale: &Scale) {
    e.storage().instance().set(&DataKey::Scale, scale);
}

pub fn read_rates(e: &Env) -> Rates {
    e.storage()
        .instance()
        .get(&DataKey::Rates)
        .expect("not initialised")
}

pub fn write_rates(e: &Env, rates: &Rates) {
    e.storage().instance().set(&DataKey::Rates, rates);
}

pub fn read_state(e: &Env) -> SaleState {
    e.storage()
        .instance()
        .get(&DataKey::State)
        .expect("not initialised")
}

pub fn write_state(e: &Env, state: &SaleState) {
    e.storage().instance().set(&DataKey::State, state);
}

pub fn read_whitelist(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&DataKey::Whitelist)
        .expect("not initialised")
}

pub fn write_whitelist(e: &Env, whitelist: &Address) {
    e.storage().instance().set(&DataKey::Whitelist, whitelist);
}

pub fn read_contribution(e: &Env, investor: &Address) -> i128 {
    e.storage()
        .persistent()
        .get(&DataKey::Contribution(investor.clone()))
        .unwrap_or(0)
}

/// Entries must survive until a refund can be claimed after the window.
pub fn write_contribution(e: &Env, investor: &Address, amount: i128) {
    let key = DataKey::Contribution(investor.clone());
    e.storage().persistent().set(&key, &amount);
    e.storage().persistent().extend_ttl(
        &key,
        CONTRIBUTION_TTL_THRESHOLD,
        CONTRIBUTION_TTL_BUMP,
    );
}

/// Removed before the refund transfer so a second refund finds nothing.
pub fn clear_contribution(e: &Env, investor: &Address) {
    e.storage()
        .persistent()
        .remove(&DataKey::Contribution(investor.clone()));
}
