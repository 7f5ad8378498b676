//! Settlement API endpoints.
//!
//! Every endpoint is a stateless computation: the collaborating layer sends
//! the expense set (already authorized and privacy-filtered on its side) in
//! the request body and gets the derived view back. Nothing is stored
//! between requests.

use api_types::{
    expense::ExpenseRecord,
    settlement::{
        NetBalanceResponse, SettleRequest, TotalResponse, TransferView, TransfersResponse,
        UserSettleRequest,
    },
};
use axum::{Json, http::StatusCode};
use engine::{Expense, MoneyCents, ParticipantShare, PayerContribution, SettlementTransfer};

use crate::ServerError;

fn to_domain(record: ExpenseRecord) -> Expense {
    let mut expense = Expense::with_id(
        record.id,
        MoneyCents::new(record.amount_minor),
        record
            .participants
            .into_iter()
            .map(|p| ParticipantShare {
                person_id: p.user_id,
                share: p.share_minor.map(MoneyCents::new),
            })
            .collect(),
        record
            .payers
            .into_iter()
            .map(|p| PayerContribution::new(p.user_id, MoneyCents::new(p.amount_paid_minor)))
            .collect(),
    );
    expense.description = record.description;
    expense.gift_id = record.gift_id;
    expense
}

fn to_domain_list(records: Vec<ExpenseRecord>) -> Vec<Expense> {
    records.into_iter().map(to_domain).collect()
}

fn to_view(transfer: SettlementTransfer) -> TransferView {
    TransferView {
        from_user_id: transfer.from,
        to_user_id: transfer.to,
        amount_minor: transfer.amount.cents(),
    }
}

/// Handle requests for the full settlement of an expense set.
pub async fn settle_all(Json(payload): Json<SettleRequest>) -> Json<TransfersResponse> {
    let expenses = to_domain_list(payload.expenses);
    tracing::debug!("settling {} expenses", expenses.len());

    let transfers = engine::compute_balances(&expenses)
        .into_iter()
        .map(to_view)
        .collect();
    Json(TransfersResponse { transfers })
}

/// Handle requests for the transfers one user should see.
pub async fn settle_for_user(Json(payload): Json<UserSettleRequest>) -> Json<TransfersResponse> {
    let expenses = to_domain_list(payload.expenses);

    let transfers = engine::balances_for_person(payload.user_id, &expenses)
        .into_iter()
        .map(to_view)
        .collect();
    Json(TransfersResponse { transfers })
}

/// Handle requests for one user's net position.
pub async fn net_balance(Json(payload): Json<UserSettleRequest>) -> Json<NetBalanceResponse> {
    let expenses = to_domain_list(payload.expenses);

    Json(NetBalanceResponse {
        user_id: payload.user_id,
        balance_minor: engine::net_balance_for(payload.user_id, &expenses).cents(),
    })
}

/// Handle requests for the sum of expense totals.
pub async fn expenses_total(Json(payload): Json<SettleRequest>) -> Json<TotalResponse> {
    let expenses = to_domain_list(payload.expenses);

    Json(TotalResponse {
        total_minor: engine::total_of(&expenses).cents(),
    })
}

/// Handle creation-time validation of a single expense.
///
/// The settlement endpoints stay permissive so existing history always
/// settles; this is where clients reject malformed input before storing it.
pub async fn check_expense(
    Json(payload): Json<ExpenseRecord>,
) -> Result<StatusCode, ServerError> {
    to_domain(payload).validate()?;
    Ok(StatusCode::NO_CONTENT)
}
