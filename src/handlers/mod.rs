//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Decodes and validates the JSON body
//! 2. Calls the account store
//! 3. Returns the HTTP response (JSON, status code)

/// Account creation and listing
pub mod accounts;
/// Liveness banner
pub mod health;
/// Deposits
pub mod transactions;
