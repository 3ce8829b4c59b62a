//! Wire → domain conversions for the stake domain.

use super::wire::RenderWithdrawStakeResponse;
use super::{StakeConstraints, StakeProgress};
use crate::error::WidgetError;
use rust_decimal::Decimal;

fn required(value: Option<Decimal>, field: &str) -> Result<Decimal, WidgetError> {
    value.ok_or_else(|| WidgetError::Validation(format!("Missing field: {}", field)))
}

impl TryFrom<&RenderWithdrawStakeResponse> for StakeConstraints {
    type Error = WidgetError;

    fn try_from(resp: &RenderWithdrawStakeResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            min_stake: required(resp.min_stake, "min_stake")?,
            delegator_staked: required(resp.delegator_staked, "delegator_staked")?,
            max_withdraw_allowed: required(resp.max_withdraw_allowed, "max_withdraw_allowed")?,
            max_ordered_withdraw_allowed: required(
                resp.max_ordered_withdraw_allowed,
                "max_ordered_withdraw_allowed",
            )?,
            ordered_withdraw: required(resp.ordered_withdraw, "ordered_withdraw")?,
        })
    }
}

impl From<&RenderWithdrawStakeResponse> for StakeProgress {
    fn from(resp: &RenderWithdrawStakeResponse) -> Self {
        Self {
            self_staked: resp.self_staked_amount,
            total_staked: resp.staked_amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraints_require_every_field() {
        let mut resp = RenderWithdrawStakeResponse {
            min_stake: Some(Decimal::from(1)),
            delegator_staked: Some(Decimal::from(2)),
            max_withdraw_allowed: Some(Decimal::from(3)),
            max_ordered_withdraw_allowed: Some(Decimal::from(4)),
            ordered_withdraw: Some(Decimal::from(5)),
            ..Default::default()
        };
        let c = StakeConstraints::try_from(&resp).unwrap();
        assert_eq!(c.ordered_withdraw, Decimal::from(5));

        resp.max_withdraw_allowed = None;
        let err = StakeConstraints::try_from(&resp).unwrap_err();
        assert!(err.to_string().contains("max_withdraw_allowed"));
    }
}
