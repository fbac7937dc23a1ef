//! Deposit data models and API request/response types.
//!
//! This module defines:
//! - `TransactionRecord`: Database entity for one ledger row
//! - `DepositRequest`: Request body for deposits
//! - `Deposit` / `DepositResponse`: Outcome of a committed deposit

use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Kind of ledger entry. Deposits are the only movement the service records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
}

impl TransactionKind {
    /// Value stored in the `type` column.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
        }
    }
}

/// Represents a row of the `transactions` table.
///
/// Append-only: written once per committed deposit, never updated.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct TransactionRecord {
    pub id: i32,

    /// Account the amount was applied to
    pub user_id: i32,

    pub amount: Decimal,

    /// Selected as `type AS kind`
    pub kind: String,
}

/// Request body for a deposit.
///
/// ```json
/// { "user_id": 1, "amount": 50 }
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct DepositRequest {
    pub user_id: Option<i32>,
    pub amount: Option<Decimal>,
}

impl DepositRequest {
    /// Returns `(user_id, amount)` once both are present and non-zero.
    ///
    /// A zero amount or zero id counts as missing. Negative amounts pass.
    ///
    /// # Errors
    ///
    /// `InvalidRequest` if either field is absent, null or zero.
    pub fn validate(self) -> Result<(i32, Decimal), AppError> {
        match (self.user_id, self.amount) {
            (Some(user_id), Some(amount)) if user_id != 0 && !amount.is_zero() => {
                Ok((user_id, amount))
            }
            _ => Err(AppError::InvalidRequest(
                "user_id and amount are required".to_string(),
            )),
        }
    }
}

/// Outcome of a committed deposit.
#[derive(Debug, Clone, PartialEq)]
pub struct Deposit {
    pub user_id: i32,
    pub new_balance: Decimal,
}

/// Response body for a deposit.
///
/// ```json
/// { "id": 1, "new_balance": 50.0 }
/// ```
#[derive(Debug, Serialize)]
pub struct DepositResponse {
    /// Account id the deposit was applied to
    pub id: i32,
    pub new_balance: f64,
}

impl From<Deposit> for DepositResponse {
    fn from(deposit: Deposit) -> Self {
        Self {
            id: deposit.user_id,
            new_balance: deposit.new_balance.to_f64().unwrap_or_default(),
        }
    }
}
