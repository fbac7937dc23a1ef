//! Data models representing database entities and API payloads.

/// Account (user) model
pub mod account;
/// Deposit ledger model
pub mod transaction;
