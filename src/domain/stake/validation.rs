//! Withdrawal amount validation.
//!
//! Every check is an ordered list of [`Rule`]s evaluated by one function. The
//! first failing rule decides the verdict; what differs between checks is the
//! rule list and whether a failure carries a message.
//!
//! | Check           | Rules, in order                                              | Failure  |
//! |-----------------|--------------------------------------------------------------|----------|
//! | `General`       | non-zero, keeps min stake                                    | message  |
//! | `Withdraw`      | positive, keeps min stake, within max withdraw               | silent   |
//! | `OrderWithdraw` | non-zero, keeps min stake, within max order, within order    | silent   |
//!
//! Input that does not parse as a decimal fails the first rule.

use rust_decimal::Decimal;

use super::{StakeConstraints, TokenInfo};
use crate::shared::fmt::decimal::token_amount;
use crate::shared::scaling::saturating_to_base_units;

/// Outcome of validating one amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    /// Invalid; show the message next to the field.
    Invalid(String),
    /// Invalid; only disable the associated button.
    InvalidSilent,
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Verdict::Invalid(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Which rule set to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmountCheck {
    /// Any withdrawal intent; negative amounts reduce an order.
    General,
    /// Immediate withdrawal.
    Withdraw,
    /// Ordered (delayed) withdrawal, or a reduction of one.
    OrderWithdraw,
}

enum Outcome {
    Message(fn(&StakeConstraints, &TokenInfo) -> String),
    Silent,
}

struct Rule {
    fails: fn(Decimal, &StakeConstraints) -> bool,
    outcome: Outcome,
}

const GENERAL_RULES: &[Rule] = &[
    Rule {
        fails: is_zero,
        outcome: Outcome::Message(invalid_amount_message),
    },
    Rule {
        fails: leaves_less_than_min_stake,
        outcome: Outcome::Message(min_stake_message),
    },
];

const WITHDRAW_RULES: &[Rule] = &[
    Rule {
        fails: is_not_positive,
        outcome: Outcome::Silent,
    },
    Rule {
        fails: leaves_less_than_min_stake,
        outcome: Outcome::Silent,
    },
    Rule {
        fails: exceeds_max_withdraw,
        outcome: Outcome::Silent,
    },
];

const ORDER_WITHDRAW_RULES: &[Rule] = &[
    Rule {
        fails: is_zero,
        outcome: Outcome::Silent,
    },
    Rule {
        fails: leaves_less_than_min_stake,
        outcome: Outcome::Silent,
    },
    Rule {
        fails: exceeds_max_ordered_withdraw,
        outcome: Outcome::Silent,
    },
    Rule {
        fails: reduces_more_than_ordered,
        outcome: Outcome::Silent,
    },
];

impl AmountCheck {
    fn rules(&self) -> &'static [Rule] {
        match self {
            AmountCheck::General => GENERAL_RULES,
            AmountCheck::Withdraw => WITHDRAW_RULES,
            AmountCheck::OrderWithdraw => ORDER_WITHDRAW_RULES,
        }
    }
}

// ─── Predicates ──────────────────────────────────────────────────────────────

fn is_zero(amount: Decimal, _: &StakeConstraints) -> bool {
    amount.is_zero()
}

fn is_not_positive(amount: Decimal, _: &StakeConstraints) -> bool {
    amount <= Decimal::ZERO
}

/// `amount < stake && stake - amount < min_stake`.
fn leaves_less_than_min_stake(amount: Decimal, c: &StakeConstraints) -> bool {
    amount < c.delegator_staked
        && c
            .delegator_staked
            .checked_sub(amount)
            .is_some_and(|remaining| remaining < c.min_stake)
}

fn exceeds_max_withdraw(amount: Decimal, c: &StakeConstraints) -> bool {
    amount > c.max_withdraw_allowed
}

fn exceeds_max_ordered_withdraw(amount: Decimal, c: &StakeConstraints) -> bool {
    amount > c.max_ordered_withdraw_allowed
}

/// A negative amount may cancel at most what was already ordered.
fn reduces_more_than_ordered(amount: Decimal, c: &StakeConstraints) -> bool {
    amount < -c.ordered_withdraw
}

// ─── Messages ────────────────────────────────────────────────────────────────

fn invalid_amount_message(_: &StakeConstraints, _: &TokenInfo) -> String {
    "Invalid amount".to_string()
}

fn min_stake_message(c: &StakeConstraints, token: &TokenInfo) -> String {
    format!(
        "A minimum of {} {} is required to remain in the pool, or withdraw the entire amount to leave this pool",
        token_amount(&c.min_stake, token.decimals),
        token.symbol
    )
}

/// Message shown when an order reduction exceeds the existing order.
pub(crate) fn reduce_order_message(c: &StakeConstraints, token: &TokenInfo) -> String {
    format!(
        "You cannot reduce withdrawal by more than {} {}",
        token_amount(&c.ordered_withdraw, token.decimals),
        token.symbol
    )
}

// ─── Evaluation ──────────────────────────────────────────────────────────────

fn verdict_for(outcome: &Outcome, constraints: &StakeConstraints, token: &TokenInfo) -> Verdict {
    match outcome {
        Outcome::Message(render) => Verdict::Invalid(render(constraints, token)),
        Outcome::Silent => Verdict::InvalidSilent,
    }
}

/// Evaluate an already-scaled amount. `None` means the input did not parse.
pub fn evaluate(
    check: AmountCheck,
    amount: Option<Decimal>,
    constraints: &StakeConstraints,
    token: &TokenInfo,
) -> Verdict {
    let rules = check.rules();
    let Some(amount) = amount else {
        return rules
            .first()
            .map(|rule| verdict_for(&rule.outcome, constraints, token))
            .unwrap_or(Verdict::InvalidSilent);
    };

    rules
        .iter()
        .find(|rule| (rule.fails)(amount, constraints))
        .map(|rule| verdict_for(&rule.outcome, constraints, token))
        .unwrap_or(Verdict::Valid)
}

/// Validate raw user input: normalize, scale by the token's decimals, truncate,
/// then evaluate `check`. Amounts beyond the representable range compare as
/// larger (or smaller) than every constraint.
pub fn validate(
    check: AmountCheck,
    input: &str,
    constraints: &StakeConstraints,
    token: &TokenInfo,
) -> Verdict {
    let amount = match saturating_to_base_units(input, token.decimals) {
        Ok(amount) => Some(amount),
        Err(e) => {
            tracing::debug!(?check, "Amount did not parse: {}", e);
            None
        }
    };
    evaluate(check, amount, constraints, token)
}
