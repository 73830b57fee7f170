//! Writes to the `repair_history` table.

use crate::client::{StoreError, SupabaseClient};
use crate::models::{NewRepairHistory, RepairHistory};

/// Deduplication column backing the upsert. Must carry a unique
/// constraint in the target schema.
const CONFLICT_TARGET: &str = "external_id";

/// `Prefer` header asking PostgREST to drop conflicting rows and echo
/// what was actually inserted.
const PREFER_UPSERT: &str = "resolution=ignore-duplicates,return=representation";

/// Write access to the `repair_history` table.
pub struct RepairHistoryRepo;

impl RepairHistoryRepo {
    /// Insert a repair record unless its external id is already present.
    ///
    /// A single atomic upsert keyed on the unique `external_id`
    /// constraint; no separate existence read. Returns `true` when the
    /// row was inserted, `false` when it already existed.
    pub async fn upsert(
        client: &SupabaseClient,
        record: &NewRepairHistory,
    ) -> Result<bool, StoreError> {
        let response = client
            .post("repair_history")
            .query(&[("on_conflict", CONFLICT_TARGET)])
            .header("Prefer", PREFER_UPSERT)
            .json(&[record])
            .send()
            .await?;

        let rows: Vec<RepairHistory> = SupabaseClient::parse_rows(response).await?;
        Ok(!rows.is_empty())
    }
}
