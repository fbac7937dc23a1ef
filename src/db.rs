//! Store connection factory and migration management.
//!
//! The service does not pool connections: every store operation opens its own
//! connection through [`ConnectionFactory`] and releases it when it goes out
//! of scope.

use std::future::Future;

use sqlx::{
    Connection,
    postgres::{PgConnectOptions, PgConnection},
};

/// Opens fresh PostgreSQL connections from fixed connection parameters.
///
/// Built once at startup from [`crate::config::Config::connect_options`] and
/// shared by every request.
#[derive(Debug, Clone)]
pub struct ConnectionFactory {
    options: PgConnectOptions,
}

impl ConnectionFactory {
    pub fn new(options: PgConnectOptions) -> Self {
        Self { options }
    }

    /// Open a new connection.
    ///
    /// The caller owns the connection for the rest of its scope. Dropping it
    /// closes the socket, so early returns release it as well; the happy path
    /// hands it to [`release`] to end the session cleanly.
    ///
    /// # Errors
    ///
    /// Returns an error if the server is unreachable or rejects the
    /// credentials.
    pub async fn acquire(&self) -> Result<PgConnection, sqlx::Error> {
        PgConnection::connect_with(&self.options).await
    }
}

/// End the session on a connection whose work is already finished.
///
/// By the time this runs the statements are committed, so a failed close
/// handshake is logged and otherwise ignored.
pub async fn release(conn: PgConnection) {
    close_quietly(conn.close()).await;
}

/// Await a close future, logging its failure. Returns whether it closed cleanly.
pub(crate) async fn close_quietly<F>(close: F) -> bool
where
    F: Future<Output = Result<(), sqlx::Error>>,
{
    match close.await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "closing store connection failed");
            false
        }
    }
}

/// Run database migrations from the `migrations/` directory.
///
/// Uses a dedicated connection that is closed once the migrations are applied.
/// Applied migrations are tracked in `_sqlx_migrations`, so each runs once.
///
/// # Errors
///
/// Returns an error if the connection cannot be opened or a migration fails.
pub async fn run_migrations(
    connections: &ConnectionFactory,
) -> Result<(), sqlx::migrate::MigrateError> {
    let mut conn = connections.acquire().await?;

    // The macro embeds ./migrations at compile time
    sqlx::migrate!("./migrations").run(&mut conn).await?;

    release(conn).await;
    Ok(())
}
