//! Contribution → token conversion.
//!
//! Everything here is pure integer arithmetic on smallest units. Results are
//! truncated, never rounded, and `None` signals an overflow.

use soroban_sdk::contracttype;

/// Bonus tiers, highest first: `(threshold_num, threshold_den, percent)`.
/// A contribution qualifies when `value >= value_unit * num / den`.
const BONUS_TIERS: [(i128, i128, i128); 5] = [
    (20, 1, 70),
    (10, 1, 60),
    (1, 1, 50),
    (1, 100, 25),
    (1, 1_000, 5),
];

/// Smallest-unit multipliers of the payment asset and the sale token.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Scale {
    pub value_unit: i128,
    pub token_unit: i128,
}

impl Scale {
    pub fn from_decimals(value_decimals: u32, token_decimals: u32) -> Option<Self> {
        Some(Scale {
            value_unit: 10i128.checked_pow(value_decimals)?,
            token_unit: 10i128.checked_pow(token_decimals)?,
        })
    }
}

/// Bonus percentage for a single contribution of `value` smallest units.
pub fn bonus_percent(value: i128, value_unit: i128) -> i128 {
    for (num, den, percent) in BONUS_TIERS {
        // compare value * den against unit * num so 0.001 of a unit stays exact
        if value.saturating_mul(den) >= value_unit.saturating_mul(num) {
            return percent;
        }
    }
    0
}

/// Tokens bought by `value` at `rate_cents` per whole payment unit and
/// `price_cents` per whole token, before any bonus.
pub fn base_tokens(value: i128, rate_cents: u64, price_cents: u64, scale: &Scale) -> Option<i128> {
    let usd_cents = value.checked_mul(i128::from(rate_cents))?;
    let price = i128::from(price_cents);

    // units are powers of ten, so one always divides the other exactly
    if scale.token_unit >= scale.value_unit {
        let factor = scale.token_unit / scale.value_unit;
        usd_cents.checked_mul(factor)?.checked_div(price)
    } else {
        let factor = scale.value_unit / scale.token_unit;
        usd_cents.checked_div(price.checked_mul(factor)?)
    }
}

/// Base tokens plus the size-dependent bonus for this contribution.
pub fn token_allotment(
    value: i128,
    rate_cents: u64,
    price_cents: u64,
    scale: &Scale,
) -> Option<i128> {
    let base = base_tokens(value, rate_cents, price_cents, scale)?;
    let bonus = base.checked_mul(bonus_percent(value, scale.value_unit))? / 100;
    base.checked_add(bonus)
}
