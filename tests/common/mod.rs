//! Common test utilities: an in-memory account store and request helpers.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use bank_api::{
    error::AppError,
    models::{
        account::Account,
        transaction::{Deposit, TransactionKind, TransactionRecord},
    },
    routes::create_router,
    services::account_service::AccountStore,
};
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use serde_json::Value;
use tower::ServiceExt;

#[derive(Default)]
struct Tables {
    users: Vec<Account>,
    transactions: Vec<TransactionRecord>,
}

/// Account store that keeps both tables in memory.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accounts(&self) -> Vec<Account> {
        self.tables.lock().unwrap().users.clone()
    }

    pub fn transactions(&self) -> Vec<TransactionRecord> {
        self.tables.lock().unwrap().transactions.clone()
    }
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn create_account(&self, name: &str) -> Result<Account, AppError> {
        let mut tables = self.tables.lock().unwrap();
        let account = Account {
            id: tables.users.len() as i32 + 1,
            name: name.to_string(),
            balance: Decimal::ZERO,
        };
        tables.users.push(account.clone());
        Ok(account)
    }

    async fn list_accounts(&self) -> Result<Vec<Account>, AppError> {
        Ok(self.accounts())
    }

    async fn deposit(&self, user_id: i32, amount: Decimal) -> Result<Deposit, AppError> {
        let mut tables = self.tables.lock().unwrap();

        let account = tables
            .users
            .iter_mut()
            .find(|account| account.id == user_id)
            .ok_or(AppError::UserNotFound)?;
        account.balance += amount;
        let new_balance = account.balance;

        let id = tables.transactions.len() as i32 + 1;
        tables.transactions.push(TransactionRecord {
            id,
            user_id,
            amount,
            kind: TransactionKind::Deposit.as_str().to_string(),
        });

        Ok(Deposit {
            user_id,
            new_balance,
        })
    }
}

/// Store whose every call fails as if the database were unreachable.
pub struct UnreachableStore;

#[async_trait]
impl AccountStore for UnreachableStore {
    async fn create_account(&self, _name: &str) -> Result<Account, AppError> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn list_accounts(&self) -> Result<Vec<Account>, AppError> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn deposit(&self, _user_id: i32, _amount: Decimal) -> Result<Deposit, AppError> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }
}

pub fn app(store: &MemoryStore) -> Router {
    create_router(Arc::new(store.clone()))
}

/// Raw response pieces.
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).unwrap()
    }
}

pub async fn send(app: Router, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|value| value.to_str().unwrap().to_string());
    let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();

    TestResponse {
        status,
        content_type,
        body,
    }
}

pub async fn post_json(app: Router, uri: &str, body: &str) -> TestResponse {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn get(app: Router, uri: &str) -> TestResponse {
    send(app, Method::GET, uri, None).await
}
