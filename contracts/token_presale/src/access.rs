//! Owner authority and the halt switch.
//!
//! The halted flag itself is kept by `stellar-pausable`; this module wraps it
//! so callers see the pre-sale's own error codes.

use soroban_sdk::{contracttype, panic_with_error, Address, Env};
use stellar_pausable as pausable;

use crate::oracle::RateAsset;
use crate::Error;

/// Administrative identities. Loaded once per call and checked explicitly
/// against the caller argument.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminState {
    pub owner: Address,
    pub eth_price_provider: Option<Address>,
    pub btc_price_provider: Option<Address>,
}

impl AdminState {
    pub fn new(owner: Address) -> Self {
        AdminState {
            owner,
            eth_price_provider: None,
            btc_price_provider: None,
        }
    }

    pub fn require_owner(&self, e: &Env, caller: &Address) {
        if *caller != self.owner {
            panic_with_error!(e, Error::Unauthorized);
        }
        caller.require_auth();
    }

    pub fn provider(&self, asset: RateAsset) -> Option<&Address> {
        match asset {
            RateAsset::Eth => self.eth_price_provider.as_ref(),
            RateAsset::Btc => self.btc_price_provider.as_ref(),
        }
    }

    pub fn set_provider(&mut self, asset: RateAsset, provider: Address) {
        match asset {
            RateAsset::Eth => self.eth_price_provider = Some(provider),
            RateAsset::Btc => self.btc_price_provider = Some(provider),
        }
    }
}

pub fn halted(e: &Env) -> bool {
    pausable::paused(e)
}

pub fn require_not_halted(e: &Env) {
    if halted(e) {
        panic_with_error!(e, Error::Halted);
    }
}

pub fn halt(e: &Env, admin: &AdminState, caller: &Address) {
    admin.require_owner(e, caller);
    if halted(e) {
        panic_with_error!(e, Error::AlreadyHalted);
    }
    pausable::pause(e, caller);
}

pub fn unhalt(e: &Env, admin: &AdminState, caller: &Address) {
    admin.require_owner(e, caller);
    if !halted(e) {
        panic_with_error!(e, Error::NotHalted);
    }
    pausable::unpause(e, caller);
}
