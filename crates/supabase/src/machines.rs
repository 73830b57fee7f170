//! Read-only lookup of machine records by business code.

use crate::client::{StoreError, SupabaseClient};
use crate::models::Machine;

/// Columns the code lookup selects.
const MACHINE_COLUMNS: &str = "id,code";

/// Read-only access to the `machines` table.
pub struct MachineRepo;

impl MachineRepo {
    /// Find a machine by its business code.
    ///
    /// Returns `None` when no row matches. Codes are compared exactly;
    /// at most one row is read.
    pub async fn find_by_code(
        client: &SupabaseClient,
        code: &str,
    ) -> Result<Option<Machine>, StoreError> {
        let code_filter = format!("eq.{code}");
        let response = client
            .get("machines")
            .query(&[
                ("select", MACHINE_COLUMNS),
                ("code", code_filter.as_str()),
                ("limit", "1"),
            ])
            .send()
            .await?;

        let rows: Vec<Machine> = SupabaseClient::parse_rows(response).await?;
        Ok(rows.into_iter().next())
    }
}
