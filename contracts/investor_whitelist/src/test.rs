#![cfg(test)]

extern crate std;

use soroban_sdk::{
    testutils::{storage::Persistent as _, Address as _, EnvTestConfig},
    Address, Env,
};

use crate::{DataKey, Error, InvestorWhitelist, InvestorWhitelistClient, INVESTOR_TTL_THRESHOLD};

fn setup() -> (Env, InvestorWhitelistClient<'static>, Address) {
    let mut env = Env::default();
    env.mock_all_auths();
    env.set_config(EnvTestConfig {
        capture_snapshot_at_drop: false,
    });

    let owner = Address::generate(&env);
    let contract_id = env.register(InvestorWhitelist, (&owner,));
    let client = InvestorWhitelistClient::new(&env, &contract_id);

    (env, client, owner)
}

#[test]
fn owner_adds_and_removes_investors() {
    let (env, wl, owner) = setup();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    assert_eq!(wl.owner(), owner);
    assert!(!wl.is_whitelisted(&alice));

    wl.add_investor(&owner, &alice);
    assert!(wl.is_whitelisted(&alice));
    assert!(!wl.is_whitelisted(&bob));

    // adding twice is harmless
    wl.add_investor(&owner, &alice);
    assert!(wl.is_whitelisted(&alice));

    wl.remove_investor(&owner, &alice);
    assert!(!wl.is_whitelisted(&alice));

    // removing an unknown investor is a no-op
    wl.remove_investor(&owner, &bob);
    assert!(!wl.is_whitelisted(&bob));
}

#[test]
fn non_owner_cannot_add() {
    let (env, wl, _owner) = setup();
    let eve = Address::generate(&env);

    assert_eq!(
        wl.try_add_investor(&eve, &eve),
        Err(Ok(Error::Unauthorized))
    );
    assert!(!wl.is_whitelisted(&eve));
}

#[test]
#[should_panic(expected = "Error(Contract, #1)")]
fn non_owner_cannot_remove() {
    let (env, wl, owner) = setup();
    let alice = Address::generate(&env);
    let eve = Address::generate(&env);

    wl.add_investor(&owner, &alice);
    wl.remove_investor(&eve, &alice);
}

#[test]
fn added_investor_entry_is_kept_alive() {
    let (env, wl, owner) = setup();
    let alice = Address::generate(&env);
    wl.add_investor(&owner, &alice);

    let ttl = env.as_contract(&wl.address, || {
        env.storage()
            .persistent()
            .get_ttl(&DataKey::Investor(alice.clone()))
    });
    assert!(ttl >= INVESTOR_TTL_THRESHOLD);
}
