//! Account data models and API request/response types.
//!
//! This module defines:
//! - `Account`: Database entity representing an account (a row in `users`)
//! - `CreateUserRequest`: Request body for creating accounts
//! - `AccountResponse`: Response body returned to clients

use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Represents an account record from the database.
///
/// # Database Table
///
/// Maps to the `users` table. The balance starts at 0 and is only changed by
/// deposits.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Account {
    /// Generated identifier
    pub id: i32,

    /// Account holder name, never empty
    pub name: String,

    /// Current balance, stored as `NUMERIC`
    pub balance: Decimal,
}

/// Request body for creating a new account.
///
/// ```json
/// { "name": "Alice" }
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
}

impl CreateUserRequest {
    /// Returns the name to insert.
    ///
    /// # Errors
    ///
    /// `InvalidRequest` if the name is absent, null or empty.
    pub fn validate(self) -> Result<String, AppError> {
        match self.name {
            Some(name) if !name.is_empty() => Ok(name),
            _ => Err(AppError::InvalidRequest("Name is required".to_string())),
        }
    }
}

/// Response body for account endpoints.
///
/// ```json
/// { "id": 1, "name": "Alice", "balance": 50.0 }
/// ```
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub id: i32,
    pub name: String,

    /// Emitted as a JSON float regardless of store precision
    pub balance: f64,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            name: account.name,
            balance: account.balance.to_f64().unwrap_or_default(),
        }
    }
}
