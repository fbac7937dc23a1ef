//! Bank API - accounts and deposits over HTTP.
//!
//! A small REST service backed by PostgreSQL. It creates accounts, lists
//! them, and applies deposits that update the balance and append a ledger
//! row in one store transaction.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
