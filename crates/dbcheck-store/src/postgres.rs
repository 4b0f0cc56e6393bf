use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, Connection, PgPool};

use dbcheck_core::config::DbConfig;
use dbcheck_core::error::ProbeError;
use dbcheck_core::traits::ConnectivityProbe;

/// Upper bound on pooled connections.
const MAX_CONNECTIONS: u32 = 10;

/// How long a check may wait for a pooled connection. sqlx keeps re-dialing
/// a refused connection until this deadline.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(3);

/// Postgres-backed connectivity probe.
#[derive(Debug, Clone)]
pub struct PgProbe {
    pool: PgPool,
}

impl PgProbe {
    /// Wrap an existing connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build a pool from `config` without opening any connection. The first
    /// probe establishes it, so a database that is down at startup does not
    /// keep the process from starting.
    #[must_use]
    pub fn connect_lazy(config: &DbConfig) -> Self {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_lazy_with(connect_options(config));
        Self::new(pool)
    }

    /// The underlying pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// The pool hides the cause of a failed acquire behind `PoolTimedOut`.
    /// Dial once outside the pool to find out what actually went wrong.
    async fn diagnose_timeout(&self) -> ProbeError {
        let options = self.pool.connect_options();
        match tokio::time::timeout(ACQUIRE_TIMEOUT, options.connect()).await {
            Ok(Err(e)) => classify(e),
            Ok(Ok(conn)) => {
                let _ = conn.close().await;
                ProbeError::Timeout(
                    "pool timed out but a direct connection succeeded".to_string(),
                )
            }
            Err(_) => ProbeError::Timeout(sqlx::Error::PoolTimedOut.to_string()),
        }
    }
}

/// Translate a [`DbConfig`] into driver options. Unset fields keep the
/// driver defaults (`PG*` environment variables, then `localhost`).
fn connect_options(config: &DbConfig) -> PgConnectOptions {
    let mut options = PgConnectOptions::new().port(config.port);
    if let Some(host) = &config.host {
        options = options.host(host);
    }
    if let Some(user) = &config.user {
        options = options.username(user);
    }
    if let Some(password) = &config.password {
        options = options.password(password);
    }
    if let Some(database) = &config.database {
        options = options.database(database);
    }
    options
}

#[async_trait]
impl ConnectivityProbe for PgProbe {
    async fn probe(&self) -> Result<(), ProbeError> {
        let mut conn = match self.pool.acquire().await {
            Ok(conn) => conn,
            Err(sqlx::Error::PoolTimedOut) => return Err(self.diagnose_timeout().await),
            Err(e) => return Err(classify(e)),
        };
        sqlx::query("SELECT 1")
            .execute(&mut *conn)
            .await
            .map_err(classify)?;
        tracing::debug!("Database liveness query succeeded");
        Ok(())
    }
}

/// Map a driver error onto a [`ProbeError`] class.
fn classify(err: sqlx::Error) -> ProbeError {
    match &err {
        sqlx::Error::PoolTimedOut => ProbeError::Timeout(err.to_string()),
        sqlx::Error::Io(_) | sqlx::Error::Tls(_) | sqlx::Error::PoolClosed => {
            ProbeError::Unreachable(err.to_string())
        }
        // invalid_password, invalid_authorization_specification
        sqlx::Error::Database(db) if matches!(db.code().as_deref(), Some("28P01" | "28000")) => {
            ProbeError::Authentication(err.to_string())
        }
        _ => ProbeError::Query(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    #[test]
    fn pool_timeout_is_a_timeout() {
        assert!(matches!(
            classify(sqlx::Error::PoolTimedOut),
            ProbeError::Timeout(_)
        ));
    }

    #[test]
    fn io_failure_is_unreachable() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        assert!(matches!(
            classify(sqlx::Error::Io(io)),
            ProbeError::Unreachable(_)
        ));
        assert!(matches!(
            classify(sqlx::Error::PoolClosed),
            ProbeError::Unreachable(_)
        ));
    }

    #[test]
    fn other_errors_are_query_failures() {
        assert!(matches!(
            classify(sqlx::Error::RowNotFound),
            ProbeError::Query(_)
        ));
    }

    #[test]
    fn options_carry_configured_fields() {
        let config = DbConfig {
            host: Some("db.internal".to_string()),
            port: 6543,
            database: Some("app".to_string()),
            user: Some("app_user".to_string()),
            password: Some("secret".to_string()),
        };
        let options = connect_options(&config);

        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_database(), Some("app"));
        assert_eq!(options.get_username(), "app_user");
    }

    #[tokio::test]
    async fn refused_connection_fails_fast_as_unreachable() {
        // Nothing listens on port 1.
        let config = DbConfig {
            host: Some("127.0.0.1".to_string()),
            port: 1,
            database: Some("dbcheck".to_string()),
            user: Some("dbcheck".to_string()),
            password: Some("dbcheck".to_string()),
        };
        let probe = PgProbe::connect_lazy(&config);

        let started = Instant::now();
        let err = probe.probe().await.unwrap_err();
        let elapsed = started.elapsed();

        assert!(matches!(err, ProbeError::Unreachable(_)), "got {err:?}");
        assert!(
            elapsed < ACQUIRE_TIMEOUT + Duration::from_secs(2),
            "took {elapsed:?}"
        );

        let result = probe.check().await;
        assert!(!result.success);
        assert_eq!(result.message, "Failed to connect to the database");
    }
}
