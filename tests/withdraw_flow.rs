//! Integration tests for the withdraw-stake modal workflow.

use rust_decimal::Decimal;

use explorer_widgets::domain::stake::wire::{RenderWithdrawStakeRequest, RenderWithdrawStakeResponse};
use explorer_widgets::prelude::*;

const POOL: &str = "0x00000000000000000000000000000000000000aa";

fn reply(claim: bool) -> RenderWithdrawStakeResponse {
    let e18 = |n: i64| Some(Decimal::from(n) * Decimal::from(1_000_000_000_000_000_000i64));
    let mut json = serde_json::json!({
        "withdraw_html": "<form id=\"withdraw\"></form>",
        "self_staked_amount": "300000000000000000000",
        "staked_amount": 1300,
        "min_stake": "100000000000000000000",
        "delegator_staked": "1000000000000000000000",
        "max_withdraw_allowed": "500000000000000000000",
        "max_ordered_withdraw_allowed": "800000000000000000000",
        "ordered_withdraw": "200000000000000000000"
    });
    if claim {
        json["claim_html"] = serde_json::json!("<div id=\"claim\"></div>");
    }
    let resp: RenderWithdrawStakeResponse = serde_json::from_value(json).unwrap();
    assert_eq!(resp.min_stake, e18(100));
    resp
}

fn token() -> TokenInfo {
    TokenInfo::new("POA", 18)
}

#[test]
fn request_targets_pool() {
    let push = RenderWithdrawStakeRequest::push(Address::from(POOL));
    assert_eq!(push.event, "render_withdraw_stake");
    assert_eq!(push.payload.address.as_str(), POOL);
}

#[test]
fn withdraw_form_end_to_end() {
    let modal = WithdrawModal::from_response(Address::from(POOL), reply(false), token()).unwrap();
    let WithdrawModal::Withdraw(mut form) = modal else {
        panic!("expected the withdraw form");
    };

    form.set_amount("950");
    assert_eq!(
        form.field_message(),
        Some("A minimum of 100 POA is required to remain in the pool, or withdraw the entire amount to leave this pool")
    );
    assert!(!form.is_enabled(FormButton::Withdraw));

    form.set_amount("1000");
    assert_eq!(form.field_message(), None);
    assert!(!form.is_enabled(FormButton::Withdraw));
    assert!(!form.is_enabled(FormButton::OrderWithdraw));

    form.set_amount("12,5");
    assert!(form.is_enabled(FormButton::Withdraw));
    let call = form.submit_withdraw().unwrap();
    assert_eq!(
        serde_json::to_value(&call).unwrap(),
        serde_json::json!({"method": "withdraw", "args": [POOL, "12500000000000000000"]})
    );
    assert!(form.is_locked());
}

#[test]
fn question_then_claim() {
    let modal = WithdrawModal::from_response(Address::from(POOL), reply(true), token()).unwrap();
    let WithdrawModal::Question(question) = modal else {
        panic!("expected the claim-or-withdraw question");
    };
    assert_eq!(question.body(), "Do you want withdraw or claim ordered withdraw?");

    let WithdrawModal::Claim(mut claim) = question.choose(Choice::Claim).unwrap() else {
        panic!("expected the claim modal");
    };
    assert_eq!(claim.progress().total_staked, Some(Decimal::from(1300)));
    let call = claim.submit().unwrap();
    assert_eq!(call, StakingCall::ClaimOrderedWithdraw { pool: Address::from(POOL) });
}

#[test]
fn order_reduction_is_capped_by_existing_order() {
    let constraints = StakeConstraints::try_from(&reply(false)).unwrap();
    let verdict = validate(AmountCheck::OrderWithdraw, "-200", &constraints, &token());
    assert!(verdict.is_valid());
    let verdict = validate(AmountCheck::OrderWithdraw, "-200.5", &constraints, &token());
    assert_eq!(verdict, Verdict::InvalidSilent);
}

#[test]
fn oversized_amount_only_fails_max_rules() {
    let WithdrawModal::Withdraw(mut form) =
        WithdrawModal::from_response(Address::from(POOL), reply(false), token()).unwrap()
    else {
        panic!("expected the withdraw form");
    };

    form.set_amount("100000000000");
    assert_eq!(form.field_message(), None);
    assert!(!form.is_enabled(FormButton::Withdraw));
    assert!(!form.is_enabled(FormButton::OrderWithdraw));
    assert!(matches!(form.submit_withdraw(), Err(WidgetError::Validation(_))));
    assert!(!form.is_locked());
}
