//! USD exchange rates, each pushed by a single trusted reporter.

use soroban_sdk::{contracttype, panic_with_error, Address, Env};

use crate::access::AdminState;
use crate::{events, storage, Error};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RateAsset {
    /// The payment asset; drives token conversion.
    Eth,
    /// Informational only.
    Btc,
}

/// Latest reported rates, in US cents per whole unit.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rates {
    pub eth_usd_cents: u64,
    pub btc_usd_cents: u64,
}

impl Rates {
    pub fn get(&self, asset: RateAsset) -> u64 {
        match asset {
            RateAsset::Eth => self.eth_usd_cents,
            RateAsset::Btc => self.btc_usd_cents,
        }
    }

    fn set(&mut self, asset: RateAsset, cents: u64) {
        match asset {
            RateAsset::Eth => self.eth_usd_cents = cents,
            RateAsset::Btc => self.btc_usd_cents = cents,
        }
    }
}

/// Owner-only. Overwrites whatever reporter was assigned before.
pub fn set_provider(e: &Env, caller: &Address, asset: RateAsset, provider: Address) {
    let mut admin = storage::read_admin(e);
    admin.require_owner(e, caller);

    admin.set_provider(asset, provider.clone());
    storage::write_admin(e, &admin);
    events::provider_set(e, asset, &provider);
}

/// Only the asset's designated provider may report; the latest report wins.
pub fn report_rate(e: &Env, reporter: &Address, asset: RateAsset, cents: u64) {
    let admin: AdminState = storage::read_admin(e);
    if admin.provider(asset) != Some(reporter) {
        panic_with_error!(e, Error::Unauthorized);
    }
    reporter.require_auth();

    if cents == 0 {
        panic_with_error!(e, Error::InvalidRate);
    }

    let mut rates = storage::read_rates(e);
    rates.set(asset, cents);
    storage::write_rates(e, &rates);
    events::rate_reported(e, asset, cents);
}
