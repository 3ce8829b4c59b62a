//! Withdraw-stake modal workflow — app-owned state, crate-provided transitions.
//!
//! ```text
//! render_withdraw_stake reply
//!   claim_html + withdraw_html  -> Question  --choose--> Claim | Withdraw
//!   claim_html only             -> Claim
//!   otherwise                   -> Withdraw
//! ```

use super::calls::{self, StakingCall};
use super::validation::{validate, AmountCheck, Verdict};
use super::wire::RenderWithdrawStakeResponse;
use super::{StakeConstraints, StakeProgress, TokenInfo};
use crate::error::WidgetError;
use crate::shared::Address;

pub const QUESTION_TITLE: &str = "Claim or order";
pub const QUESTION_BODY: &str = "Do you want withdraw or claim ordered withdraw?";
pub const CLAIM_LABEL: &str = "Claim";
pub const WITHDRAW_LABEL: &str = "Withdraw";

/// The modal to open for a `render_withdraw_stake` reply.
#[derive(Debug, Clone)]
pub enum WithdrawModal {
    Question(ClaimOrWithdraw),
    Claim(ClaimModal),
    Withdraw(WithdrawForm),
}

impl WithdrawModal {
    pub fn from_response(
        pool: Address,
        response: RenderWithdrawStakeResponse,
        token: TokenInfo,
    ) -> Result<Self, WidgetError> {
        let pool = calls::checked_pool(pool)?;
        match (&response.claim_html, &response.withdraw_html) {
            (Some(_), Some(_)) => Ok(WithdrawModal::Question(ClaimOrWithdraw {
                pool,
                response: Box::new(response),
                token,
            })),
            (Some(_), None) => Ok(WithdrawModal::Claim(ClaimModal::new(pool, &response))),
            _ => Ok(WithdrawModal::Withdraw(WithdrawForm::new(pool, &response, token)?)),
        }
    }
}

/// What the user picked in the question modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Claim,
    Withdraw,
}

/// Question modal: claim the ordered withdrawal, or open the withdraw form.
#[derive(Debug, Clone)]
pub struct ClaimOrWithdraw {
    pool: Address,
    response: Box<RenderWithdrawStakeResponse>,
    token: TokenInfo,
}

impl ClaimOrWithdraw {
    pub fn title(&self) -> &'static str {
        QUESTION_TITLE
    }

    pub fn body(&self) -> &'static str {
        QUESTION_BODY
    }

    /// Button labels, `(accept, decline)`.
    pub fn labels(&self) -> (&'static str, &'static str) {
        (CLAIM_LABEL, WITHDRAW_LABEL)
    }

    pub fn choose(self, choice: Choice) -> Result<WithdrawModal, WidgetError> {
        match choice {
            Choice::Claim => Ok(WithdrawModal::Claim(ClaimModal::new(self.pool, &self.response))),
            Choice::Withdraw => Ok(WithdrawModal::Withdraw(WithdrawForm::new(
                self.pool,
                &self.response,
                self.token,
            )?)),
        }
    }
}

// ─── Claim ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ClaimModal {
    pool: Address,
    html: Option<String>,
    progress: StakeProgress,
    locked: bool,
}

impl ClaimModal {
    fn new(pool: Address, response: &RenderWithdrawStakeResponse) -> Self {
        Self {
            pool,
            html: response.claim_html.clone(),
            progress: StakeProgress::from(response),
            locked: false,
        }
    }

    pub fn html(&self) -> Option<&str> {
        self.html.as_deref()
    }

    pub fn progress(&self) -> &StakeProgress {
        &self.progress
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Lock the modal and produce the claim call.
    pub fn submit(&mut self) -> Result<StakingCall, WidgetError> {
        if self.locked {
            return Err(already_submitted());
        }
        let call = calls::claim_ordered_withdraw(self.pool.clone())?;
        self.locked = true;
        Ok(call)
    }
}

// ─── Withdraw form ───────────────────────────────────────────────────────────

/// Action buttons on the withdraw form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormButton {
    Withdraw,
    OrderWithdraw,
}

impl FormButton {
    pub fn label(&self) -> &'static str {
        match self {
            FormButton::Withdraw => "Withdraw",
            FormButton::OrderWithdraw => "Order withdraw",
        }
    }

    fn check(&self) -> AmountCheck {
        match self {
            FormButton::Withdraw => AmountCheck::Withdraw,
            FormButton::OrderWithdraw => AmountCheck::OrderWithdraw,
        }
    }
}

#[derive(Debug, Clone, Default)]
struct Verdicts {
    general: Option<Verdict>,
    withdraw: Option<Verdict>,
    order_withdraw: Option<Verdict>,
}

/// Withdraw form: one amount field validated live against three rule sets.
///
/// The general check gates both buttons and owns the field message; each
/// button additionally needs its own check to pass.
#[derive(Debug, Clone)]
pub struct WithdrawForm {
    pool: Address,
    html: Option<String>,
    progress: StakeProgress,
    constraints: StakeConstraints,
    token: TokenInfo,
    input: String,
    verdicts: Verdicts,
    locked_by: Option<FormButton>,
}

impl WithdrawForm {
    pub fn new(
        pool: Address,
        response: &RenderWithdrawStakeResponse,
        token: TokenInfo,
    ) -> Result<Self, WidgetError> {
        Ok(Self {
            pool,
            html: response.withdraw_html.clone(),
            progress: StakeProgress::from(response),
            constraints: StakeConstraints::try_from(response)?,
            token,
            input: String::new(),
            verdicts: Verdicts::default(),
            locked_by: None,
        })
    }

    pub fn html(&self) -> Option<&str> {
        self.html.as_deref()
    }

    pub fn progress(&self) -> &StakeProgress {
        &self.progress
    }

    pub fn constraints(&self) -> &StakeConstraints {
        &self.constraints
    }

    pub fn amount_input(&self) -> &str {
        &self.input
    }

    /// The amount field changed; re-run every check.
    pub fn set_amount(&mut self, input: &str) {
        self.input = input.to_string();
        let run = |check| Some(validate(check, input, &self.constraints, &self.token));
        self.verdicts = Verdicts {
            general: run(AmountCheck::General),
            withdraw: run(AmountCheck::Withdraw),
            order_withdraw: run(AmountCheck::OrderWithdraw),
        };
    }

    /// Latest verdict for `check`, `None` before any input.
    pub fn verdict(&self, check: AmountCheck) -> Option<&Verdict> {
        match check {
            AmountCheck::General => self.verdicts.general.as_ref(),
            AmountCheck::Withdraw => self.verdicts.withdraw.as_ref(),
            AmountCheck::OrderWithdraw => self.verdicts.order_withdraw.as_ref(),
        }
    }

    /// Inline message under the amount field.
    pub fn field_message(&self) -> Option<&str> {
        self.verdicts.general.as_ref().and_then(Verdict::message)
    }

    pub fn is_enabled(&self, button: FormButton) -> bool {
        let passes = |check| self.verdict(check).is_some_and(Verdict::is_valid);
        self.locked_by.is_none() && passes(AmountCheck::General) && passes(button.check())
    }

    pub fn is_locked(&self) -> bool {
        self.locked_by.is_some()
    }

    /// Button that locked the form, if a submission is in flight.
    pub fn locked_by(&self) -> Option<FormButton> {
        self.locked_by
    }

    /// Release the lock after the contract call settled without closing the modal.
    pub fn unlock(&mut self) {
        self.locked_by = None;
    }

    /// Build the `withdraw` call for the current amount and lock the form.
    ///
    /// Fails with [`WidgetError::Validation`] unless the withdraw button is
    /// enabled for the current amount.
    pub fn submit_withdraw(&mut self) -> Result<StakingCall, WidgetError> {
        self.ensure_unlocked()?;
        self.ensure_enabled(FormButton::Withdraw)?;
        let call = calls::withdraw(self.pool.clone(), &self.input, &self.token)?;
        self.locked_by = Some(FormButton::Withdraw);
        Ok(call)
    }

    /// Build the `orderWithdraw` call for the current amount and lock the form.
    ///
    /// Rejected amounts leave the form unlocked. An over-reduction of the
    /// existing order reports how much may be cancelled.
    pub fn submit_order_withdraw(&mut self) -> Result<StakingCall, WidgetError> {
        self.ensure_unlocked()?;
        self.ensure_passes(AmountCheck::General)?;
        let call =
            calls::order_withdraw(self.pool.clone(), &self.input, &self.constraints, &self.token)?;
        self.ensure_enabled(FormButton::OrderWithdraw)?;
        self.locked_by = Some(FormButton::OrderWithdraw);
        Ok(call)
    }

    fn ensure_unlocked(&self) -> Result<(), WidgetError> {
        match self.locked_by {
            Some(_) => Err(already_submitted()),
            None => Ok(()),
        }
    }

    fn ensure_passes(&self, check: AmountCheck) -> Result<(), WidgetError> {
        match self.verdict(check) {
            Some(Verdict::Valid) => Ok(()),
            Some(Verdict::Invalid(message)) => Err(WidgetError::Validation(message.clone())),
            Some(Verdict::InvalidSilent) | None => Err(WidgetError::Validation(
                "Invalid amount".to_string(),
            )),
        }
    }

    fn ensure_enabled(&self, button: FormButton) -> Result<(), WidgetError> {
        if self.is_enabled(button) {
            return Ok(());
        }
        self.ensure_passes(AmountCheck::General)?;
        Err(WidgetError::Validation(format!(
            "{} is not available for this amount",
            button.label()
        )))
    }
}

fn already_submitted() -> WidgetError {
    WidgetError::Other("Submission already in progress".to_string())
}
