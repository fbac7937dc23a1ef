//! Account service - persistence operations behind the HTTP handlers.
//!
//! Handlers depend on the [`AccountStore`] trait; [`PgAccountStore`] is the
//! PostgreSQL implementation used by the server.
//!
//! # Connection Lifecycle
//!
//! Every operation opens its own connection and releases it before
//! returning. On error paths the connection (and any open store transaction)
//! is dropped, which rolls back uncommitted work and closes the socket. Once
//! work is committed a failed close no longer changes the outcome.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::Connection;

use crate::{
    db::{self, ConnectionFactory},
    error::AppError,
    models::{
        account::Account,
        transaction::{Deposit, TransactionKind},
    },
};

/// Persistence operations for accounts and their deposit ledger.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Insert an account with a zero balance.
    async fn create_account(&self, name: &str) -> Result<Account, AppError>;

    /// Every account, in whatever order the store returns them.
    async fn list_accounts(&self) -> Result<Vec<Account>, AppError>;

    /// Add `amount` to the account's balance and record a ledger row.
    ///
    /// Both writes commit together or not at all.
    ///
    /// # Errors
    ///
    /// - `UserNotFound`: no account with this id; nothing is written
    /// - `Database`: store failure; nothing is written
    async fn deposit(&self, user_id: i32, amount: Decimal) -> Result<Deposit, AppError>;
}

/// [`AccountStore`] backed by PostgreSQL, one connection per call.
#[derive(Debug, Clone)]
pub struct PgAccountStore {
    connections: ConnectionFactory,
}

impl PgAccountStore {
    pub fn new(connections: ConnectionFactory) -> Self {
        Self { connections }
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn create_account(&self, name: &str) -> Result<Account, AppError> {
        let mut conn = self.connections.acquire().await?;

        let account = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO users (name)
            VALUES ($1)
            RETURNING id, name, balance
            "#,
        )
        .bind(name)
        .fetch_one(&mut conn)
        .await?;

        db::release(conn).await;

        tracing::debug!(user_id = account.id, "account inserted");
        Ok(account)
    }

    async fn list_accounts(&self) -> Result<Vec<Account>, AppError> {
        let mut conn = self.connections.acquire().await?;

        // No ORDER BY: callers get store order
        let accounts = sqlx::query_as::<_, Account>("SELECT id, name, balance FROM users")
            .fetch_all(&mut conn)
            .await?;

        db::release(conn).await;
        Ok(accounts)
    }

    async fn deposit(&self, user_id: i32, amount: Decimal) -> Result<Deposit, AppError> {
        let mut conn = self.connections.acquire().await?;
        let mut tx = conn.begin().await?;

        // The row lock taken by UPDATE serializes concurrent deposits to one account
        let new_balance: Option<Decimal> = sqlx::query_scalar(
            r#"
            UPDATE users
            SET balance = balance + $1
            WHERE id = $2
            RETURNING balance
            "#,
        )
        .bind(amount)
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(new_balance) = new_balance else {
            tx.rollback().await?;
            return Err(AppError::UserNotFound);
        };

        sqlx::query("INSERT INTO transactions (user_id, amount, type) VALUES ($1, $2, $3)")
            .bind(user_id)
            .bind(amount)
            .bind(TransactionKind::Deposit.as_str())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        db::release(conn).await;

        tracing::debug!(user_id, %amount, %new_balance, "deposit committed");
        Ok(Deposit {
            user_id,
            new_balance,
        })
    }
}
