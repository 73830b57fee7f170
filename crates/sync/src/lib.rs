//! One-shot repair-order sync pipeline.
//!
//! Fetches the newest repair orders from the VWM portal and upserts them
//! into `repair_history`, matching each order to a machine by its asset
//! code. Single linear pass: one fetch, then one independent
//! resolve-map-upsert sequence per item. No transaction spans the batch;
//! a storage failure aborts the run with whatever was already written.

use chrono::Utc;

use vwm_sync_core::order::SearchResponse;
use vwm_sync_supabase::models::NewRepairHistory;
use vwm_sync_supabase::{MachineRepo, RepairHistoryRepo, StoreError, SupabaseClient};
use vwm_sync_vincons::VwmClient;

/// Errors that abort a sync run.
///
/// Fetch failures are handled inside [`run`] and never surface here;
/// only storage failures abort the batch.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Counters for one sync run.
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    /// Orders returned by the search endpoint.
    pub fetched: usize,
    /// Rows newly inserted into `repair_history`.
    pub inserted: usize,
    /// Orders whose external id was already present.
    pub duplicates: usize,
    /// Orders skipped for a missing or empty asset code.
    pub missing_code: usize,
    /// Orders whose asset code matched no machine.
    pub unknown_machine: usize,
    /// Orders without a usable remote id.
    pub missing_external_id: usize,
}

/// Run one fetch-transform-load pass.
///
/// A fetch failure (transport error or non-2xx status) is logged and
/// degrades to an empty run rather than aborting.
pub async fn run(vwm: &VwmClient, store: &SupabaseClient) -> Result<SyncReport, SyncError> {
    let response = match vwm.search_repair_orders().await {
        Ok(body) => Some(body),
        Err(e) => {
            tracing::error!(error = %e, "Error fetching repair orders");
            None
        }
    };

    process_orders(store, response).await
}

/// Upsert every order in a fetch result.
///
/// `response` is `None` when the fetch itself failed; both that and a
/// body without a `content` array produce an empty report. Per-item data
/// problems are counted and skipped; the batch continues.
pub async fn process_orders(
    store: &SupabaseClient,
    response: Option<SearchResponse>,
) -> Result<SyncReport, SyncError> {
    let mut report = SyncReport::default();

    let Some(orders) = response.and_then(|body| body.content) else {
        tracing::info!("No content found in response");
        return Ok(report);
    };

    report.fetched = orders.len();
    tracing::info!(count = orders.len(), "Found repair orders");

    let today = Utc::now().date_naive();

    for order in &orders {
        let Some(code) = order.asset_code() else {
            report.missing_code += 1;
            continue;
        };

        let Some(machine) = MachineRepo::find_by_code(store, code).await? else {
            tracing::warn!(code, "Machine not found, skipping");
            report.unknown_machine += 1;
            continue;
        };

        let Some(external_id) = order.external_id() else {
            tracing::warn!(code, "Order has no usable id, skipping");
            report.missing_external_id += 1;
            continue;
        };

        let record = NewRepairHistory::from_order(order, machine.id, external_id.clone(), today);

        if RepairHistoryRepo::upsert(store, &record).await? {
            tracing::info!(code, external_id = %external_id, "Inserted repair record");
            report.inserted += 1;
        } else {
            tracing::info!(external_id = %external_id, "Record already exists, skipping");
            report.duplicates += 1;
        }
    }

    Ok(report)
}
