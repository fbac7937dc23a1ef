//! Business logic services.
//!
//! Services own the store interaction for each operation, separated from the
//! HTTP handlers.

pub mod account_service;
