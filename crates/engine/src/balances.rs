//! Net-balance aggregation across the whole expense list.

use std::collections::HashMap;

use uuid::Uuid;

use crate::{Expense, MoneyCents};

/// Signed net position per person.
///
/// Positive = net creditor (is owed money), negative = net debtor (owes
/// money). The structure remembers the order people first appear in the
/// input, so enumeration — and therefore every derived output — is
/// reproducible run to run. That order carries no meaning beyond
/// reproducibility and callers must not attach any to it.
#[derive(Clone, Debug, Default)]
pub struct NetBalances {
    amounts: HashMap<Uuid, MoneyCents>,
    order: Vec<Uuid>,
}

impl NetBalances {
    /// Adds money the person advanced (raises their position).
    pub fn credit(&mut self, person_id: Uuid, amount: MoneyCents) {
        *self.entry(person_id) += amount;
    }

    /// Adds money the person owes (lowers their position).
    pub fn debit(&mut self, person_id: Uuid, amount: MoneyCents) {
        *self.entry(person_id) -= amount;
    }

    /// The person's net position, zero if they never appeared.
    #[must_use]
    pub fn get(&self, person_id: Uuid) -> MoneyCents {
        self.amounts
            .get(&person_id)
            .copied()
            .unwrap_or(MoneyCents::ZERO)
    }

    /// Iterates `(person_id, balance)` in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (Uuid, MoneyCents)> + '_ {
        self.order.iter().map(|id| (*id, self.get(*id)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn entry(&mut self, person_id: Uuid) -> &mut MoneyCents {
        if !self.amounts.contains_key(&person_id) {
            self.order.push(person_id);
        }
        self.amounts.entry(person_id).or_insert(MoneyCents::ZERO)
    }
}

/// Folds all expenses into one signed balance per person.
///
/// For each expense the resolved shares are subtracted and the payer
/// contributions added; aggregation is global, so a person appearing only as
/// a payer in one expense and only as a participant in another still nets
/// correctly across the list. Expenses without participants contribute
/// nothing. The fold never fails — malformed input (payers not covering the
/// total, overcommitted shares) simply shows up in the resulting balances.
#[must_use]
pub fn net_balances(expenses: &[Expense]) -> NetBalances {
    let mut balances = NetBalances::default();

    for expense in expenses {
        for (person_id, owed) in expense.resolved_shares() {
            balances.debit(person_id, owed);
        }
        for payer in &expense.payers {
            balances.credit(payer.person_id, payer.amount_paid);
        }
    }

    balances
}

/// Sum of all expense totals, provided for display convenience.
#[must_use]
pub fn total_of(expenses: &[Expense]) -> MoneyCents {
    expenses.iter().map(|expense| expense.total).sum()
}
