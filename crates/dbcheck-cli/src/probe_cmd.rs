use dbcheck_core::config::DbConfig;
use dbcheck_core::traits::ConnectivityProbe;
use dbcheck_store::PgProbe;

/// Run one connectivity check against the database and print the result as
/// JSON. Returns whether the check succeeded.
pub async fn run() -> anyhow::Result<bool> {
    let config = DbConfig::from_env();
    tracing::debug!(?config, "Probing database");

    let probe = PgProbe::connect_lazy(&config);
    let result = probe.check().await;
    probe.pool().close().await;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(result.success)
}
