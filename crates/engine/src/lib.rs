//! Settlement engine for shared household expenses.
//!
//! The engine is a pure calculator: the collaborating layer hands it a list
//! of [`Expense`] records (participants owing shares, payers who advanced
//! money) and gets back net positions and a small list of pairwise
//! [`SettlementTransfer`]s that zero them out. Nothing is stored, cached or
//! mutated between calls — every invocation recomputes from the input list,
//! so it is safe to call from any number of tasks at once.
//!
//! All money is integer euro cents ([`MoneyCents`]); one cent is the
//! settlement epsilon.

pub use balances::{NetBalances, net_balances, total_of};
pub use error::EngineError;
pub use expense::{Expense, ParticipantShare, PayerContribution};
pub use money::MoneyCents;
pub use settlement::{
    SettlementTransfer, balances_for_person, compute_balances, net_balance_for, settle,
};

mod balances;
mod error;
mod expense;
mod money;
mod settlement;

type ResultEngine<T> = Result<T, EngineError>;
