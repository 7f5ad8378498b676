//! Request/response types shared between the settlement server and its
//! clients.
//!
//! All monetary fields travel as integer minor units (euro cents) in
//! `*_minor` fields; the engine's money type never crosses the wire.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod expense {
    use super::*;

    /// One person's slice of an expense.
    ///
    /// A missing/`null` `share_minor` means "equal split of whatever the
    /// fixed shares leave over".
    #[derive(Clone, Copy, Debug, Serialize, Deserialize)]
    pub struct ExpenseParticipant {
        pub user_id: Uuid,
        #[serde(default)]
        pub share_minor: Option<i64>,
    }

    /// One person's actual payment toward an expense.
    #[derive(Clone, Copy, Debug, Serialize, Deserialize)]
    pub struct ExpensePayer {
        pub user_id: Uuid,
        pub amount_paid_minor: i64,
    }

    /// An expense record as the collaborating layer stores it: already
    /// authorized, with participant and payer sub-records resolved.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct ExpenseRecord {
        pub id: Uuid,
        #[serde(default)]
        pub description: Option<String>,
        /// Optional organizational gift tag; never affects balances.
        #[serde(default)]
        pub gift_id: Option<Uuid>,
        pub amount_minor: i64,
        pub participants: Vec<ExpenseParticipant>,
        pub payers: Vec<ExpensePayer>,
    }
}

pub mod settlement {
    use super::*;
    use crate::expense::ExpenseRecord;

    /// Request body carrying the expense set to settle or total.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct SettleRequest {
        pub expenses: Vec<ExpenseRecord>,
    }

    /// Request body for the per-user views: the expense set plus the user
    /// whose perspective is wanted.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct UserSettleRequest {
        pub user_id: Uuid,
        pub expenses: Vec<ExpenseRecord>,
    }

    /// A suggested payment from `from_user_id` to `to_user_id`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct TransferView {
        pub from_user_id: Uuid,
        pub to_user_id: Uuid,
        pub amount_minor: i64,
    }

    /// Response body for the transfer-list endpoints.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct TransfersResponse {
        pub transfers: Vec<TransferView>,
    }

    /// Response body for a single user's net position.
    #[derive(Clone, Copy, Debug, Serialize, Deserialize)]
    pub struct NetBalanceResponse {
        pub user_id: Uuid,
        pub balance_minor: i64,
    }

    /// Response body for the expense-total endpoint.
    #[derive(Clone, Copy, Debug, Serialize, Deserialize)]
    pub struct TotalResponse {
        pub total_minor: i64,
    }
}
