use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vwm_sync_core::config::SyncConfig;
use vwm_sync_supabase::SupabaseClient;
use vwm_sync_vincons::{VwmClient, DEFAULT_BASE_URL};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vwm_sync=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = SyncConfig::from_env().expect("Incomplete configuration");

    // --- Clients ---
    let store = SupabaseClient::new(&config.supabase_url, config.supabase_key.clone());

    let base_url = config
        .vwm_base_url
        .clone()
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let vwm = VwmClient::new(base_url, config.vincons_cookie.clone());

    tracing::info!(base_url = %vwm.base_url(), "Starting sync");

    match vwm_sync::run(&vwm, &store).await {
        Ok(report) => tracing::info!(
            fetched = report.fetched,
            inserted = report.inserted,
            duplicates = report.duplicates,
            missing_code = report.missing_code,
            unknown_machine = report.unknown_machine,
            missing_external_id = report.missing_external_id,
            "Sync complete"
        ),
        Err(e) => tracing::error!(error = %e, "Sync aborted"),
    }
}
