use soroban_sdk::{symbol_short, Address, Env};

use crate::oracle::RateAsset;

pub fn contribution(e: &Env, investor: &Address, value: i128, tokens: i128) {
    e.events()
        .publish((symbol_short!("contrib"), investor.clone()), (value, tokens));
}

pub fn withdrawn(e: &Env, beneficiary: &Address, value: i128, tokens: i128) {
    e.events()
        .publish((symbol_short!("withdraw"), beneficiary.clone()), (value, tokens));
}

pub fn refunded(e: &Env, investor: &Address, value: i128) {
    e.events()
        .publish((symbol_short!("refund"), investor.clone()), value);
}

pub fn rate_reported(e: &Env, asset: RateAsset, cents: u64) {
    e.events().publish((symbol_short!("rate"), asset), cents);
}

pub fn provider_set(e: &Env, asset: RateAsset, provider: &Address) {
    e.events()
        .publish((symbol_short!("provider"), asset), provider.clone());
}

pub fn whitelist_set(e: &Env, whitelist: &Address) {
    e.events()
        .publish((symbol_short!("wlist"),), whitelist.clone());
}
