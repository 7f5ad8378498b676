//! Greedy settlement matching and the public balance queries.

use std::cmp::Reverse;

use uuid::Uuid;

use crate::{Expense, MoneyCents, NetBalances, net_balances};

/// A suggested payment: `from` pays `to` `amount` to help zero out both
/// their net positions.
///
/// Transfers have no identity or lifecycle — they are recomputed from
/// scratch on every call and never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettlementTransfer {
    pub from: Uuid,
    pub to: Uuid,
    pub amount: MoneyCents,
}

/// One side of the matching: a person with money still to receive or to pay.
#[derive(Debug)]
struct OpenPosition {
    person_id: Uuid,
    amount: MoneyCents,
}

/// Converts net balances into a small list of point-to-point transfers.
///
/// People within one cent of zero are already settled and dropped. The rest
/// are split into creditors and debtors, both sorted largest-first (stable,
/// so ties keep first-appearance order and repeated runs produce identical
/// output), then matched greedily with two cursors: each step settles
/// `min(creditor, debtor)` and advances whichever side was exhausted.
///
/// Largest-first keeps the transfer count small but is not guaranteed to be
/// the global minimum.
#[must_use]
pub fn settle(balances: &NetBalances) -> Vec<SettlementTransfer> {
    let mut creditors: Vec<OpenPosition> = Vec::new();
    let mut debtors: Vec<OpenPosition> = Vec::new();

    for (person_id, balance) in balances.iter() {
        if balance > MoneyCents::EPSILON {
            creditors.push(OpenPosition {
                person_id,
                amount: balance,
            });
        } else if balance < -MoneyCents::EPSILON {
            debtors.push(OpenPosition {
                person_id,
                amount: -balance,
            });
        }
    }

    creditors.sort_by_key(|position| Reverse(position.amount));
    debtors.sort_by_key(|position| Reverse(position.amount));

    let mut transfers = Vec::new();
    let mut creditor = 0;
    let mut debtor = 0;

    while creditor < creditors.len() && debtor < debtors.len() {
        let settled = creditors[creditor].amount.min(debtors[debtor].amount);

        transfers.push(SettlementTransfer {
            from: debtors[debtor].person_id,
            to: creditors[creditor].person_id,
            amount: settled,
        });

        creditors[creditor].amount -= settled;
        debtors[debtor].amount -= settled;

        // Both cursors advance in the same step when the amounts were equal.
        if creditors[creditor].amount < MoneyCents::EPSILON {
            creditor += 1;
        }
        if debtors[debtor].amount < MoneyCents::EPSILON {
            debtor += 1;
        }
    }

    transfers
}

/// Computes the settlement transfers for the whole expense set.
pub fn compute_balances(expenses: &[Expense]) -> Vec<SettlementTransfer> {
    settle(&net_balances(expenses))
}

/// One person's net position, derived from the transfer list: what they
/// receive minus what they pay. Sub-epsilon positions therefore read as
/// exactly zero.
#[must_use]
pub fn net_balance_for(person_id: Uuid, expenses: &[Expense]) -> MoneyCents {
    compute_balances(expenses)
        .iter()
        .fold(MoneyCents::ZERO, |acc, transfer| {
            if transfer.from == person_id {
                acc - transfer.amount
            } else if transfer.to == person_id {
                acc + transfer.amount
            } else {
                acc
            }
        })
}

/// The transfers one person should see.
///
/// The expense list is first narrowed to expenses the person takes part in,
/// the settlement runs on that subset, and only transfers naming the person
/// survive. Filtering inputs before computing keeps the person's visible
/// settlement graph limited to people they actually transacted with;
/// settling the full set and filtering afterwards would leak debt
/// relationships between third parties.
#[must_use]
pub fn balances_for_person(person_id: Uuid, expenses: &[Expense]) -> Vec<SettlementTransfer> {
    let involved: Vec<Expense> = expenses
        .iter()
        .filter(|expense| expense.involves(person_id))
        .cloned()
        .collect();

    compute_balances(&involved)
        .into_iter()
        .filter(|transfer| transfer.from == person_id || transfer.to == person_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person() -> Uuid {
        Uuid::new_v4()
    }

    fn balances(entries: &[(Uuid, i64)]) -> NetBalances {
        let mut balances = NetBalances::default();
        for (person_id, cents) in entries {
            balances.credit(*person_id, MoneyCents::new(*cents));
        }
        balances
    }

    #[test]
    fn one_creditor_two_debtors() {
        let (a, b, c) = (person(), person(), person());
        let transfers = settle(&balances(&[(a, 40_00), (b, -20_00), (c, -20_00)]));

        assert_eq!(
            transfers,
            vec![
                SettlementTransfer {
                    from: b,
                    to: a,
                    amount: MoneyCents::new(20_00)
                },
                SettlementTransfer {
                    from: c,
                    to: a,
                    amount: MoneyCents::new(20_00)
                },
            ]
        );
    }

    #[test]
    fn largest_positions_match_first() {
        let (a, b, c, d) = (person(), person(), person(), person());
        let transfers = settle(&balances(&[
            (a, 10_00),
            (b, 70_00),
            (c, -50_00),
            (d, -30_00),
        ]));

        // B (70) absorbs C (50) first, then D covers the rest.
        assert_eq!(
            transfers,
            vec![
                SettlementTransfer {
                    from: c,
                    to: b,
                    amount: MoneyCents::new(50_00)
                },
                SettlementTransfer {
                    from: d,
                    to: b,
                    amount: MoneyCents::new(20_00)
                },
                SettlementTransfer {
                    from: d,
                    to: a,
                    amount: MoneyCents::new(10_00)
                },
            ]
        );
    }

    #[test]
    fn sub_epsilon_positions_are_dropped() {
        let (a, b, c) = (person(), person(), person());
        let transfers = settle(&balances(&[(a, 1), (b, -1), (c, 0)]));
        assert!(transfers.is_empty());
    }

    #[test]
    fn ties_keep_first_appearance_order() {
        let (a, b, c, d) = (person(), person(), person(), person());
        let transfers = settle(&balances(&[
            (a, -15_00),
            (b, 15_00),
            (c, -15_00),
            (d, 15_00),
        ]));

        assert_eq!(
            transfers,
            vec![
                SettlementTransfer {
                    from: a,
                    to: b,
                    amount: MoneyCents::new(15_00)
                },
                SettlementTransfer {
                    from: c,
                    to: d,
                    amount: MoneyCents::new(15_00)
                },
            ]
        );
    }

    #[test]
    fn transfers_reproduce_each_side_exactly() {
        let people: Vec<Uuid> = (0..5).map(|_| person()).collect();
        let entries = [
            (people[0], 123_45),
            (people[1], -67_89),
            (people[2], -55_56),
            (people[3], 10_00),
            (people[4], -10_00),
        ];
        let book = balances(&entries);
        let transfers = settle(&book);

        for (person_id, cents) in entries {
            let paid: MoneyCents = transfers
                .iter()
                .filter(|t| t.from == person_id)
                .map(|t| t.amount)
                .sum();
            let received: MoneyCents = transfers
                .iter()
                .filter(|t| t.to == person_id)
                .map(|t| t.amount)
                .sum();
            let after = MoneyCents::new(cents) + paid - received;
            assert!(after.is_settled(), "{person_id} left with {after}");
        }
    }

    #[test]
    fn unbalanced_book_settles_what_it_can() {
        // No creditors at all: everyone owes, nothing can be matched.
        let (a, b) = (person(), person());
        let transfers = settle(&balances(&[(a, -10_00), (b, -5_00)]));
        assert!(transfers.is_empty());
    }
}
