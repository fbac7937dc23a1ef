//! Index endpoint used as a liveness indicator.

/// Static banner returned by `GET /`.
pub const BANNER: &str = "Bank App API is running. Use /users and /deposit endpoints.";

/// Index handler.
///
/// Does not touch the store; a 200 only means the process is serving.
pub async fn index() -> &'static str {
    BANNER
}
