//! Wire types for the staking channel.

use crate::shared::serde_util::option_decimal_any;
use crate::shared::Address;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Channel event requesting the withdraw modal for a pool.
pub const RENDER_WITHDRAW_STAKE: &str = "render_withdraw_stake";

/// An outbound channel push: event name + payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelPush<T> {
    pub event: &'static str,
    pub payload: T,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderWithdrawStakeRequest {
    pub address: Address,
}

impl RenderWithdrawStakeRequest {
    pub fn push(address: Address) -> ChannelPush<Self> {
        ChannelPush {
            event: RENDER_WITHDRAW_STAKE,
            payload: Self { address },
        }
    }
}

/// `ok` reply to `render_withdraw_stake`.
///
/// Amounts are in base units. Every field is optional on the wire; which ones
/// are required depends on the modal being opened.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderWithdrawStakeResponse {
    #[serde(default)]
    pub claim_html: Option<String>,
    #[serde(default)]
    pub withdraw_html: Option<String>,
    #[serde(with = "option_decimal_any", default)]
    pub self_staked_amount: Option<Decimal>,
    #[serde(with = "option_decimal_any", default)]
    pub staked_amount: Option<Decimal>,
    #[serde(with = "option_decimal_any", default)]
    pub min_stake: Option<Decimal>,
    #[serde(with = "option_decimal_any", default)]
    pub delegator_staked: Option<Decimal>,
    #[serde(with = "option_decimal_any", default)]
    pub max_withdraw_allowed: Option<Decimal>,
    #[serde(with = "option_decimal_any", default)]
    pub max_ordered_withdraw_allowed: Option<Decimal>,
    #[serde(with = "option_decimal_any", default)]
    pub ordered_withdraw: Option<Decimal>,
}
