//! Deposit HTTP handler.
//!
//! - POST /deposit - Add money to an account

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::{
    error::AppError,
    models::transaction::{DepositRequest, DepositResponse},
    routes::SharedStore,
};

/// Deposit into an account.
///
/// # Request Body
///
/// ```json
/// { "user_id": 1, "amount": 50 }
/// ```
///
/// # Response (200)
///
/// ```json
/// { "id": 1, "new_balance": 50.0 }
/// ```
///
/// # Errors
///
/// - **400**: `user_id` or `amount` missing, null or zero
/// - **404**: no account with `user_id`; nothing is written
///
/// # Atomicity
///
/// The balance update and the ledger insert share one store transaction.
pub async fn deposit(
    State(store): State<SharedStore>,
    payload: Result<Json<DepositRequest>, JsonRejection>,
) -> Result<Json<DepositResponse>, AppError> {
    let Json(request) = payload?;
    let (user_id, amount) = request.validate()?;

    let deposit = match store.deposit(user_id, amount).await {
        Ok(deposit) => deposit,
        Err(AppError::UserNotFound) => {
            tracing::info!(user_id, "deposit rejected: unknown account");
            return Err(AppError::UserNotFound);
        }
        Err(err) => return Err(err),
    };

    tracing::info!(
        user_id,
        %amount,
        new_balance = %deposit.new_balance,
        "deposit applied"
    );

    Ok(Json(deposit.into()))
}
