#![no_std]
//! Token Pre‑Sale: capped, time‑boxed sale of a **pre‑funded SEP‑41 token**
//! to whitelisted investors.
//!
//! * Investors pay in a SEP‑41 payment asset; the allotment follows the
//!   reported USD rate of that asset, the token's USD price and a bonus that
//!   grows with the size of each single contribution.
//! * Contributions stop at the hard cap, in payment units or in tokens,
//!   whichever binds first. Nothing is ever partially filled.
//! * Settlement happens once: the owner withdraws everything to the
//!   beneficiary if the soft cap was met, otherwise investors pull refunds
//!   after the window closes.
//!
//! Built against **soroban‑sdk 22.0.x**.

use soroban_sdk::{
    contract, contractclient, contracterror, contractimpl, contracttype, log, panic_with_error,
    token, Address, Env,
};

mod access;
mod events;
mod math;
mod oracle;
mod storage;

pub use access::AdminState;
pub use math::Scale;
pub use oracle::{RateAsset, Rates};

// ──────────────────────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────────────────────

#[contracterror]
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
#[repr(u32)]
pub enum Error {
    Unauthorized = 1,
    Halted = 2,
    AlreadyHalted = 3,
    NotHalted = 4,
    NotOpen = 5,
    NotEnded = 6,
    NotWhitelisted = 7,
    HardCapExceeded = 8,
    SoftCapNotReached = 9,
    CapReached = 10,
    NothingToRefund = 11,
    AlreadySettled = 12,
    InvalidRate = 13,
    ZeroAddress = 14,
    InvalidAmount = 15,
    InvalidConfig = 16,
}

// ──────────────────────────────────────────────────────────────────────────
// Types
// ──────────────────────────────────────────────────────────────────────────

/// Fixed at construction. Amounts are in smallest units.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleConfig {
    pub hard_cap: i128,
    pub soft_cap: i128,
    pub token: Address,         // sale token, pre-funded into this contract
    pub payment_token: Address, // asset investors pay with
    pub beneficiary: Address,
    pub total_tokens: i128,
    pub token_price_usd_cents: u64,
    pub start_time: u64,
    pub end_time: u64,
}

impl SaleConfig {
    fn is_valid(&self) -> bool {
        self.hard_cap > 0
            && self.soft_cap > 0
            && self.soft_cap <= self.hard_cap
            && self.payment_token != self.token
            && self.total_tokens > 0
            && self.token_price_usd_cents > 0
            && self.start_time < self.end_time
    }

    /// Contributions are accepted in `[start_time, end_time)`.
    pub fn is_open(&self, now: u64) -> bool {
        now >= self.start_time && now < self.end_time
    }

    pub fn has_ended(&self, now: u64) -> bool {
        now >= self.end_time
    }
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SaleStatus {
    Active,
    Withdrawn,
    Refunding,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleState {
    pub collected: i128,
    pub tokens_sold: i128,
    pub investor_count: u32,
    pub refunded: i128,
    pub soft_cap_reached: bool, // never reset once set
    pub status: SaleStatus,
}

impl SaleState {
    fn new() -> Self {
        SaleState {
            collected: 0,
            tokens_sold: 0,
            investor_count: 0,
            refunded: 0,
            soft_cap_reached: false,
            status: SaleStatus::Active,
        }
    }
}

/// The only part of the whitelist contract the sale relies on.
#[contractclient(name = "WhitelistClient")]
pub trait WhitelistInterface {
    fn is_whitelisted(env: Env, investor: Address) -> bool;
}

// ──────────────────────────────────────────────────────────────────────────
// Contract implementation
// ──────────────────────────────────────────────────────────────────────────

#[contract]
pub struct TokenPreSale;

#[contractimpl]
impl TokenPreSale {
    // ---------------------------------------------------
    // Construction
    // ---------------------------------------------------

    /// Validate and store the sale parameters. Price providers start unset.
    pub fn __constructor(
        env: Env,
        owner: Address,
        config: SaleConfig,
        whitelist: Address,
        base_eth_usd_rate_cents: u64,
        base_btc_usd_rate_cents: u64,
    ) {
        if !config.is_valid() || base_eth_usd_rate_cents == 0 || base_btc_usd_rate_cents == 0 {
            panic_with_error!(env, Error::InvalidConfig);
        }

        let value_decimals = token::Client::new(&env, &config.payment_token).decimals();
        let token_decimals = token::Client::new(&env, &config.token).decimals();
        let scale = Scale::from_decimals(value_decimals, token_decimals)
            .unwrap_or_else(|| panic_with_error!(env, Error::InvalidConfig));

        storage::write_admin(&env, &AdminState::new(owner));
        storage::write_config(&env, &config);
        storage::write_scale(&env, &scale);
        storage::write_rates(
            &env,
            &Rates {
                eth_usd_cents: base_eth_usd_rate_cents,
                btc_usd_cents: base_btc_usd_rate_cents,
            },
        );
        storage::write_state(&env, &SaleState::new());
        storage::write_whitelist(&env, &whitelist);

        log!(
            &env,
            "pre-sale configured",
            config.start_time,
            config.end_time,
            config.hard_cap
        );
    }

    // ---------------------------------------------------
    // Purchase
    // ---------------------------------------------------

    /// Pay `amount` of the payment asset and receive the token allotment
    /// (bonus included) in the same call.
    pub fn contribute(env: Env, investor: Address, amount: i128) {
        investor.require_auth();
        access::require_not_halted(&env);

        let config = storage::read_config(&env);
        if !config.is_open(env.ledger().timestamp()) {
            panic_with_error!(env, Error::NotOpen);
        }

        let mut state = storage::read_state(&env);
        if state.status != SaleStatus::Active {
            panic_with_error!(env, Error::AlreadySettled);
        }

        let whitelist = WhitelistClient::new(&env, &storage::read_whitelist(&env));
        if !whitelist.is_whitelisted(&investor) {
            panic_with_error!(env, Error::NotWhitelisted);
        }

        if amount <= 0 {
            panic_with_error!(env, Error::InvalidAmount);
        }

        let tokens = quote(&env, &config, amount);
        if tokens == 0 {
            // too small to buy a single smallest unit
            panic_with_error!(env, Error::InvalidAmount);
        }

        let collected = state
            .collected
            .checked_add(amount)
            .unwrap_or_else(|| panic_with_error!(env, Error::InvalidAmount));
        let tokens_sold = state
            .tokens_sold
            .checked_add(tokens)
            .unwrap_or_else(|| panic_with_error!(env, Error::InvalidAmount));
        if collected > config.hard_cap || tokens_sold > config.total_tokens {
            panic_with_error!(env, Error::HardCapExceeded);
        }

        let this = env.current_contract_address();

        // payment → contract
        token::Client::new(&env, &config.payment_token).transfer(&investor, &this, &amount);

        // ledgers
        let previous = storage::read_contribution(&env, &investor);
        if previous == 0 {
            state.investor_count += 1;
        }
        storage::write_contribution(&env, &investor, previous + amount);

        state.collected = collected;
        state.tokens_sold = tokens_sold;
        if !state.soft_cap_reached && collected >= config.soft_cap {
            state.soft_cap_reached = true;
            log!(&env, "soft cap reached", collected);
        }
        storage::write_state(&env, &state);

        // tokens → investor
        token::Client::new(&env, &config.token).transfer(&this, &investor, &tokens);

        events::contribution(&env, &investor, amount, tokens);
    }

    // ---------------------------------------------------
    // Settlement
    // ---------------------------------------------------

    /// Send every collected payment unit and every unsold token to the
    /// beneficiary. Allowed once, as soon as the soft cap is reached.
    pub fn withdraw(env: Env, caller: Address) {
        storage::read_admin(&env).require_owner(&env, &caller);
        access::require_not_halted(&env);

        let mut state = storage::read_state(&env);
        if state.status != SaleStatus::Active {
            panic_with_error!(env, Error::AlreadySettled);
        }
        if !state.soft_cap_reached {
            panic_with_error!(env, Error::SoftCapNotReached);
        }

        state.status = SaleStatus::Withdrawn;
        storage::write_state(&env, &state);

        let config = storage::read_config(&env);
        let this = env.current_contract_address();

        let payment = token::Client::new(&env, &config.payment_token);
        let value = payment.balance(&this);
        if value > 0 {
            payment.transfer(&this, &config.beneficiary, &value);
        }

        let sale_token = token::Client::new(&env, &config.token);
        let unsold = sale_token.balance(&this);
        if unsold > 0 {
            sale_token.transfer(&this, &config.beneficiary, &unsold);
        }

        log!(&env, "withdrawn to beneficiary", value, unsold);
        events::withdrawn(&env, &config.beneficiary, value, unsold);
    }

    /// Return the investor's whole contribution after a failed sale.
    pub fn refund(env: Env, investor: Address) {
        investor.require_auth();

        let config = storage::read_config(&env);
        if !config.has_ended(env.ledger().timestamp()) {
            panic_with_error!(env, Error::NotEnded);
        }

        let mut state = storage::read_state(&env);
        if state.soft_cap_reached {
            panic_with_error!(env, Error::CapReached);
        }

        access::require_not_halted(&env);

        let amount = storage::read_contribution(&env, &investor);
        if amount <= 0 {
            panic_with_error!(env, Error::NothingToRefund);
        }

        // clear the entry first to block a double refund
        storage::clear_contribution(&env, &investor);
        state.refunded += amount;
        state.status = SaleStatus::Refunding;
        storage::write_state(&env, &state);

        token::Client::new(&env, &config.payment_token).transfer(
            &env.current_contract_address(),
            &investor,
            &amount,
        );

        events::refunded(&env, &investor, amount);
    }

    // ---------------------------------------------------
    // Administration
    // ---------------------------------------------------

    pub fn halt(env: Env, caller: Address) {
        access::halt(&env, &storage::read_admin(&env), &caller);
    }

    pub fn unhalt(env: Env, caller: Address) {
        access::unhalt(&env, &storage::read_admin(&env), &caller);
    }

    /// Point subsequent whitelist checks at another contract. `None` is
    /// rejected.
    pub fn set_new_whitelist(env: Env, caller: Address, whitelist: Option<Address>) {
        storage::read_admin(&env).require_owner(&env, &caller);

        let whitelist = whitelist.unwrap_or_else(|| panic_with_error!(env, Error::ZeroAddress));
        storage::write_whitelist(&env, &whitelist);
        events::whitelist_set(&env, &whitelist);
    }

    pub fn set_price_provider(env: Env, caller: Address, asset: RateAsset, provider: Address) {
        oracle::set_provider(&env, &caller, asset, provider);
    }

    pub fn set_eth_price_provider(env: Env, caller: Address, provider: Address) {
        oracle::set_provider(&env, &caller, RateAsset::Eth, provider);
    }

    pub fn set_btc_price_provider(env: Env, caller: Address, provider: Address) {
        oracle::set_provider(&env, &caller, RateAsset::Btc, provider);
    }

    // ---------------------------------------------------
    // Price feed
    // ---------------------------------------------------

    pub fn report_rate(env: Env, reporter: Address, asset: RateAsset, cents: u64) {
        oracle::report_rate(&env, &reporter, asset, cents);
    }

    pub fn receive_eth_price(env: Env, reporter: Address, cents: u64) {
        oracle::report_rate(&env, &reporter, RateAsset::Eth, cents);
    }

    pub fn receive_btc_price(env: Env, reporter: Address, cents: u64) {
        oracle::report_rate(&env, &reporter, RateAsset::Btc, cents);
    }

    // ---------------------------------------------------
    // Views
    // ---------------------------------------------------

    pub fn owner(env: Env) -> Address {
        storage::read_admin(&env).owner
    }

    pub fn config(env: Env) -> SaleConfig {
        storage::read_config(&env)
    }

    pub fn halted(env: Env) -> bool {
        access::halted(&env)
    }

    pub fn whitelist(env: Env) -> Address {
        storage::read_whitelist(&env)
    }

    pub fn eth_usd_rate(env: Env) -> u64 {
        storage::read_rates(&env).get(RateAsset::Eth)
    }

    pub fn btc_usd_rate(env: Env) -> u64 {
        storage::read_rates(&env).get(RateAsset::Btc)
    }

    pub fn eth_price_provider(env: Env) -> Option<Address> {
        storage::read_admin(&env).eth_price_provider
    }

    pub fn btc_price_provider(env: Env) -> Option<Address> {
        storage::read_admin(&env).btc_price_provider
    }

    pub fn collected(env: Env) -> i128 {
        storage::read_state(&env).collected
    }

    pub fn tokens_sold(env: Env) -> i128 {
        storage::read_state(&env).tokens_sold
    }

    pub fn investor_count(env: Env) -> u32 {
        storage::read_state(&env).investor_count
    }

    /// Total payment units handed back through `refund`.
    pub fn refunded(env: Env) -> i128 {
        storage::read_state(&env).refunded
    }

    pub fn soft_cap_reached(env: Env) -> bool {
        storage::read_state(&env).soft_cap_reached
    }

    pub fn status(env: Env) -> SaleStatus {
        storage::read_state(&env).status
    }

    /// Investor's recorded contribution; zero once refunded.
    pub fn contribution_of(env: Env, investor: Address) -> i128 {
        storage::read_contribution(&env, &investor)
    }

    /// Tokens `amount` would buy right now, bonus included.
    pub fn token_allotment(env: Env, amount: i128) -> i128 {
        if amount <= 0 {
            panic_with_error!(env, Error::InvalidAmount);
        }
        quote(&env, &storage::read_config(&env), amount)
    }
}

fn quote(e: &Env, config: &SaleConfig, amount: i128) -> i128 {
    let rates = storage::read_rates(e);
    math::token_allotment(
        amount,
        rates.eth_usd_cents,
        config.token_price_usd_cents,
        &storage::read_scale(e),
    )
    .unwrap_or_else(|| panic_with_error!(e, Error::InvalidAmount))
}
