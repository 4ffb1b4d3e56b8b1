#![no_std]
//! Investor‑Whitelist: owner‑curated allow‑list consulted by the pre‑sale
//! before it accepts a contribution.
//!
//! * Only the owner set in the constructor may add or remove investors.
//! * Reads are open to anyone (the pre‑sale calls `is_whitelisted`).
//! * Adding twice or removing an unknown investor is a no‑op.
//!
//! Built against **soroban‑sdk 22.0.x**.

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, panic_with_error, symbol_short, Address,
    Env,
};

// ──────────────────────────────────────────────────────────────────────────
// Storage keys
// ──────────────────────────────────────────────────────────────────────────

#[contracttype]
enum DataKey {
    Owner,
    Investor(Address),
}

const DAY_IN_LEDGERS: u32 = 17_280;
const INVESTOR_TTL_BUMP: u32 = 60 * DAY_IN_LEDGERS;
const INVESTOR_TTL_THRESHOLD: u32 = INVESTOR_TTL_BUMP - DAY_IN_LEDGERS;

// ──────────────────────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────────────────────

#[contracterror]
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
#[repr(u32)]
pub enum Error {
    Unauthorized = 1,
}

fn get_owner(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&DataKey::Owner)
        .expect("not initialised")
}

fn require_owner(e: &Env, caller: &Address) {
    if *caller != get_owner(e) {
        panic_with_error!(e, Error::Unauthorized);
    }
    caller.require_auth();
}

#[contract]
pub struct InvestorWhitelist;

#[contractimpl]
impl InvestorWhitelist {
    pub fn __constructor(env: Env, owner: Address) {
        env.storage().instance().set(&DataKey::Owner, &owner);
    }

    pub fn add_investor(env: Env, caller: Address, investor: Address) {
        require_owner(&env, &caller);

        let key = DataKey::Investor(investor.clone());
        let is_new = !env.storage().persistent().has(&key);
        if is_new {
            env.storage().persistent().set(&key, &true);
        }
        // re-adding refreshes the entry's lifetime
        env.storage()
            .persistent()
            .extend_ttl(&key, INVESTOR_TTL_THRESHOLD, INVESTOR_TTL_BUMP);
        if is_new {
            env.events()
                .publish((symbol_short!("wl_add"), caller), investor);
        }
    }

    pub fn remove_investor(env: Env, caller: Address, investor: Address) {
        require_owner(&env, &caller);

        let key = DataKey::Investor(investor.clone());
        if !env.storage().persistent().has(&key) {
            return;
        }
        env.storage().persistent().remove(&key);
        env.events()
            .publish((symbol_short!("wl_remove"), caller), investor);
    }

    /// `true` while `investor` is on the list.
    pub fn is_whitelisted(env: Env, investor: Address) -> bool {
        env.storage()
            .persistent()
            .has(&DataKey::Investor(investor))
    }

    pub fn owner(env: Env) -> Address {
        get_owner(&env)
    }
}

mod test;
