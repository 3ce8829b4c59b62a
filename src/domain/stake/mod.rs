//! Stake domain — withdrawal constraints, amount validation, modal workflow,
//! and staking contract calls.

pub mod calls;
mod convert;
pub mod modal;
pub mod validation;
pub mod wire;

pub use calls::StakingCall;
pub use modal::{Choice, ClaimModal, ClaimOrWithdraw, FormButton, WithdrawForm, WithdrawModal};
pub use validation::{evaluate, validate, AmountCheck, Verdict};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Token metadata the validator needs for scaling and messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    pub symbol: String,
    pub decimals: u32,
}

impl TokenInfo {
    pub fn new(symbol: impl Into<String>, decimals: u32) -> Self {
        Self {
            symbol: symbol.into(),
            decimals,
        }
    }
}

/// Pool constraints for a withdrawal, all in base units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StakeConstraints {
    pub min_stake: Decimal,
    /// The delegator's current stake in the pool.
    pub delegator_staked: Decimal,
    pub max_withdraw_allowed: Decimal,
    pub max_ordered_withdraw_allowed: Decimal,
    /// Amount already ordered for delayed withdrawal.
    pub ordered_withdraw: Decimal,
}

/// Data for the stake progress chart shown in both modals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StakeProgress {
    pub self_staked: Option<Decimal>,
    pub total_staked: Option<Decimal>,
}
