//! Staking contract calls.
//!
//! Calls are built here and handed to the application's contract-call
//! interface for signing and submission. Amounts are base-unit integers
//! rendered as decimal strings.

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use super::validation::reduce_order_message;
use super::{StakeConstraints, TokenInfo};
use crate::error::WidgetError;
use crate::shared::{to_base_units, Address};

/// A call against the staking contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StakingCall {
    /// Immediate withdrawal from `pool`.
    Withdraw { pool: Address, amount: Decimal },
    /// Order a delayed withdrawal; a negative amount reduces the order.
    OrderWithdraw { pool: Address, amount: Decimal },
    /// Claim a matured ordered withdrawal.
    ClaimOrderedWithdraw { pool: Address },
}

impl StakingCall {
    /// Contract method name.
    pub fn method(&self) -> &'static str {
        match self {
            StakingCall::Withdraw { .. } => "withdraw",
            StakingCall::OrderWithdraw { .. } => "orderWithdraw",
            StakingCall::ClaimOrderedWithdraw { .. } => "claimOrderedWithdraw",
        }
    }

    /// Positional arguments as strings.
    pub fn args(&self) -> Vec<String> {
        match self {
            StakingCall::Withdraw { pool, amount } | StakingCall::OrderWithdraw { pool, amount } => {
                vec![pool.to_string(), amount.normalize().to_string()]
            }
            StakingCall::ClaimOrderedWithdraw { pool } => vec![pool.to_string()],
        }
    }

    pub fn pool(&self) -> &Address {
        match self {
            StakingCall::Withdraw { pool, .. }
            | StakingCall::OrderWithdraw { pool, .. }
            | StakingCall::ClaimOrderedWithdraw { pool } => pool,
        }
    }
}

/// Serializes as `{"method": "...", "args": [...]}`.
impl Serialize for StakingCall {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(Serialize)]
        struct Payload<'a> {
            method: &'a str,
            args: Vec<String>,
        }

        Payload {
            method: self.method(),
            args: self.args(),
        }
        .serialize(serializer)
    }
}

/// Reject pool addresses that are not 20 hex-encoded bytes.
pub(crate) fn checked_pool(pool: Address) -> Result<Address, WidgetError> {
    match pool.to_bytes() {
        Ok(_) => Ok(pool),
        Err(reason) => Err(WidgetError::Validation(format!(
            "Invalid pool address '{}': {}",
            pool, reason
        ))),
    }
}

/// Build a `withdraw` call from raw input.
pub fn withdraw(pool: Address, input: &str, token: &TokenInfo) -> Result<StakingCall, WidgetError> {
    let pool = checked_pool(pool)?;
    let amount = to_base_units(input, token.decimals)?;
    Ok(StakingCall::Withdraw { pool, amount })
}

/// Build an `orderWithdraw` call from raw input.
///
/// Blocks the submission when the amount would reduce the existing order by
/// more than was ordered.
pub fn order_withdraw(
    pool: Address,
    input: &str,
    constraints: &StakeConstraints,
    token: &TokenInfo,
) -> Result<StakingCall, WidgetError> {
    let pool = checked_pool(pool)?;
    let amount = to_base_units(input, token.decimals)?;
    if amount < -constraints.ordered_withdraw {
        let message = reduce_order_message(constraints, token);
        tracing::warn!(pool = %pool, %amount, "Order withdraw blocked: {}", message);
        return Err(WidgetError::Validation(message));
    }
    Ok(StakingCall::OrderWithdraw { pool, amount })
}

pub fn claim_ordered_withdraw(pool: Address) -> Result<StakingCall, WidgetError> {
    let pool = checked_pool(pool)?;
    Ok(StakingCall::ClaimOrderedWithdraw { pool })
}
