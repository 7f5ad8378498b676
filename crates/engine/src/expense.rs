//! The module contains the `Expense` model and per-expense share resolution.

use uuid::Uuid;

use crate::{EngineError, MoneyCents, ResultEngine};

/// A person bearing part of an expense's cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParticipantShare {
    pub person_id: Uuid,
    /// Fixed amount this person owes, or `None` for an equal split of
    /// whatever the fixed shares leave over.
    pub share: Option<MoneyCents>,
}

impl ParticipantShare {
    /// A participant owing a fixed amount.
    pub fn fixed(person_id: Uuid, share: MoneyCents) -> Self {
        Self {
            person_id,
            share: Some(share),
        }
    }

    /// A participant owing an equal split of the remainder.
    pub fn equal_split(person_id: Uuid) -> Self {
        Self {
            person_id,
            share: None,
        }
    }
}

/// A person who advanced money toward an expense.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PayerContribution {
    pub person_id: Uuid,
    pub amount_paid: MoneyCents,
}

impl PayerContribution {
    pub fn new(person_id: Uuid, amount_paid: MoneyCents) -> Self {
        Self {
            person_id,
            amount_paid,
        }
    }
}

/// A shared expense: money spent for a group of participants, advanced by one
/// or more payers.
///
/// Expenses are the unit of input to the balance computations. They carry no
/// lifecycle here — the collaborating layer owns creation, storage and
/// authorization and hands the engine a plain list.
#[derive(Clone, Debug)]
pub struct Expense {
    /// Stable identifier, kept for traceability only; the computations never
    /// look at it.
    pub id: Uuid,
    pub description: Option<String>,
    /// Optional organizational tag linking the expense to a planned gift.
    /// Gifts are tags only and never affect balances.
    pub gift_id: Option<Uuid>,
    pub total: MoneyCents,
    pub participants: Vec<ParticipantShare>,
    pub payers: Vec<PayerContribution>,
}

impl Expense {
    pub fn new(
        total: MoneyCents,
        participants: Vec<ParticipantShare>,
        payers: Vec<PayerContribution>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), total, participants, payers)
    }

    pub fn with_id(
        id: Uuid,
        total: MoneyCents,
        participants: Vec<ParticipantShare>,
        payers: Vec<PayerContribution>,
    ) -> Self {
        Self {
            id,
            description: None,
            gift_id: None,
            total,
            participants,
            payers,
        }
    }

    /// Returns `true` if the person appears in this expense as a payer or a
    /// participant.
    #[must_use]
    pub fn involves(&self, person_id: Uuid) -> bool {
        self.payers.iter().any(|p| p.person_id == person_id)
            || self.participants.iter().any(|p| p.person_id == person_id)
    }

    /// Resolves the final owed amount for every participant.
    ///
    /// Fixed shares are taken as-is; participants without one split the
    /// remainder (`total - fixed shares`) evenly, leftover cents spread in
    /// participant order. The remainder may be negative when fixed shares
    /// overcommit the total — the resulting negative splits are returned, not
    /// rejected. When every participant has a fixed share, a non-zero
    /// remainder is attributed to no one.
    ///
    /// Returns one `(person_id, owed)` pair per participant, in participant
    /// order. Empty for an expense with no participants.
    #[must_use]
    pub fn resolved_shares(&self) -> Vec<(Uuid, MoneyCents)> {
        if self.participants.is_empty() {
            return Vec::new();
        }

        let fixed_total: MoneyCents = self.participants.iter().filter_map(|p| p.share).sum();
        let n_implicit = self
            .participants
            .iter()
            .filter(|p| p.share.is_none())
            .count();

        let remainder = self.total - fixed_total;
        let mut splits = remainder.split_evenly(n_implicit).into_iter();

        self.participants
            .iter()
            .map(|p| {
                let owed = match p.share {
                    Some(fixed) => fixed,
                    None => splits.next().unwrap_or(MoneyCents::ZERO),
                };
                (p.person_id, owed)
            })
            .collect()
    }

    /// Caller-side validation, meant to run at expense-creation time.
    ///
    /// The balance computations deliberately accept whatever they are given
    /// (see [`net_balances`]); this is the hook for callers that want to
    /// reject malformed input before it becomes history.
    ///
    /// [`net_balances`]: crate::net_balances
    pub fn validate(&self) -> ResultEngine<()> {
        if !self.total.is_positive() {
            return Err(EngineError::InvalidAmount(format!(
                "expense total must be positive, got {}",
                self.total
            )));
        }
        if self.participants.is_empty() {
            return Err(EngineError::EmptyParticipants);
        }

        let mut paid = MoneyCents::ZERO;
        for payer in &self.payers {
            if payer.amount_paid.is_negative() {
                return Err(EngineError::InvalidAmount(format!(
                    "payment must not be negative, got {}",
                    payer.amount_paid
                )));
            }
            paid += payer.amount_paid;
        }
        if !paid.approx_eq(self.total) {
            return Err(EngineError::PayerMismatch(format!(
                "paid {paid} against a total of {}",
                self.total
            )));
        }

        let fixed_total: MoneyCents = self.participants.iter().filter_map(|p| p.share).sum();
        if fixed_total > self.total + MoneyCents::EPSILON {
            return Err(EngineError::ShareOvercommit(format!(
                "fixed shares sum to {fixed_total} against a total of {}",
                self.total
            )));
        }

        Ok(())
    }
}
