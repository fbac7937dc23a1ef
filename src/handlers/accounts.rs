//! Account HTTP handlers.
//!
//! This module implements the account-related API endpoints:
//! - POST /users - Create new account
//! - GET /users - List all accounts

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    error::AppError,
    models::account::{AccountResponse, CreateUserRequest},
    routes::SharedStore,
};

/// Create a new account.
///
/// # Endpoint
///
/// `POST /users`
///
/// # Request Body
///
/// ```json
/// { "name": "Alice" }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: `{"id": 1, "name": "Alice", "balance": 0.0}`
/// - **Error (400)**: name missing or empty, or body is not JSON
///
/// Validation happens before a store connection is opened.
pub async fn create_user(
    State(store): State<SharedStore>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AccountResponse>), AppError> {
    let Json(request) = payload?;
    let name = request.validate()?;

    let account = store.create_account(&name).await?;
    tracing::info!(user_id = account.id, "account created");

    Ok((StatusCode::CREATED, Json(account.into())))
}

/// List all accounts.
///
/// # Endpoint
///
/// `GET /users`
///
/// # Response
///
/// - **Success (200 OK)**: array of accounts (may be empty)
///
/// ```json
/// [
///   { "id": 1, "name": "Alice", "balance": 50.0 },
///   { "id": 2, "name": "Bob", "balance": 0.0 }
/// ]
/// ```
///
/// # Ordering
///
/// Unspecified; whatever order the store returns.
pub async fn list_users(
    State(store): State<SharedStore>,
) -> Result<Json<Vec<AccountResponse>>, AppError> {
    let accounts = store.list_accounts().await?;

    let responses: Vec<AccountResponse> = accounts.into_iter().map(Into::into).collect();

    Ok(Json(responses))
}
