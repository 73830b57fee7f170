//! Offline coverage of the pipeline's no-data and skip paths.
//!
//! Everything here runs before the first storage round-trip, so the
//! client below is never actually contacted.

use vwm_sync::process_orders;
use vwm_sync_core::order::SearchResponse;
use vwm_sync_supabase::SupabaseClient;

fn offline_store() -> SupabaseClient {
    SupabaseClient::new("http://localhost:54321", "test-key".into())
}

fn response(json: &str) -> SearchResponse {
    serde_json::from_str(json).unwrap()
}

#[tokio::test]
async fn test_failed_fetch_yields_empty_report() {
    let report = process_orders(&offline_store(), None).await.unwrap();

    assert_eq!(report.fetched, 0);
    assert_eq!(report.inserted, 0);
    assert_eq!(report.duplicates, 0);
}

#[tokio::test]
async fn test_missing_content_yields_zero_writes() {
    let report = process_orders(&offline_store(), Some(response("{}")))
        .await
        .unwrap();

    assert_eq!(report.fetched, 0);
    assert_eq!(report.inserted, 0);
}

#[tokio::test]
async fn test_empty_content_counts_nothing() {
    let report = process_orders(&offline_store(), Some(response(r#"{"content": []}"#)))
        .await
        .unwrap();

    assert_eq!(report.fetched, 0);
    assert_eq!(report.inserted, 0);
}

#[tokio::test]
async fn test_orders_without_asset_code_are_skipped_silently() {
    let body = response(
        r#"{"content": [
            {"id": 1, "description": "No asset at all"},
            {"id": 2, "asset": {}},
            {"id": 3, "asset": {"code": ""}}
        ]}"#,
    );

    let report = process_orders(&offline_store(), Some(body)).await.unwrap();

    assert_eq!(report.fetched, 3);
    assert_eq!(report.missing_code, 3);
    assert_eq!(report.inserted, 0);
}
