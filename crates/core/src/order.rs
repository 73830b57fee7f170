//! Typed model of the VWM repair-order search response.
//!
//! The remote contract is not formally documented, so every field is
//! optional and the defaulting rules live in accessor methods on
//! [`RemoteRepairOrder`] instead of ad hoc lookups at the call sites.

use chrono::NaiveDate;
use serde::Deserialize;

/// Description written when the remote order carries none.
pub const DEFAULT_DESCRIPTION: &str = "Repair Order";

/// Top-level body of the search endpoint.
///
/// `content` holds one page of orders; a response without it (or with an
/// explicit null) yields no work.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub content: Option<Vec<RemoteRepairOrder>>,
}

/// One repair order as returned by the VWM search endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteRepairOrder {
    /// Remote identifier. The portal has been observed to send numbers;
    /// strings are accepted too.
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    /// Machine reference this order was raised against.
    #[serde(default)]
    pub asset: Option<RemoteAsset>,
    #[serde(default)]
    pub description: Option<String>,
    /// ISO-8601 creation timestamp.
    #[serde(default)]
    pub created_date: Option<String>,
    #[serde(default)]
    pub total_cost: Option<f64>,
}

/// Nested asset reference carrying the machine business code.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteAsset {
    #[serde(default)]
    pub code: Option<String>,
}

impl RemoteRepairOrder {
    /// Business code of the machine this order belongs to.
    ///
    /// Empty codes count as absent.
    pub fn asset_code(&self) -> Option<&str> {
        self.asset
            .as_ref()
            .and_then(|asset| asset.code.as_deref())
            .filter(|code| !code.is_empty())
    }

    /// String form of the remote id, the deduplication key.
    ///
    /// Numbers and non-empty strings stringify; anything else (missing,
    /// null, structured) yields `None`.
    pub fn external_id(&self) -> Option<String> {
        match self.id.as_ref()? {
            serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Order description, defaulting to [`DEFAULT_DESCRIPTION`].
    pub fn description_or_default(&self) -> String {
        self.description
            .clone()
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string())
    }

    /// Total cost, defaulting to zero.
    pub fn cost_or_default(&self) -> f64 {
        self.total_cost.unwrap_or(0.0)
    }

    /// Calendar date of the order: the creation timestamp truncated to
    /// its date component, or `fallback` when absent or unparseable.
    pub fn date_or(&self, fallback: NaiveDate) -> NaiveDate {
        self.created_date
            .as_deref()
            .and_then(parse_order_date)
            .unwrap_or(fallback)
    }
}

/// Truncate an ISO-8601 timestamp to its date component.
///
/// Accepts both full timestamps (`2024-03-05T10:00:00Z`) and bare dates
/// (`2024-03-05`).
pub fn parse_order_date(timestamp: &str) -> Option<NaiveDate> {
    let date_part = timestamp.split_once('T').map_or(timestamp, |(date, _)| date);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_order(json: serde_json::Value) -> RemoteRepairOrder {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_full_order_deserializes() {
        let order = sample_order(serde_json::json!({
            "id": 48213,
            "asset": { "code": "EXC-012" },
            "description": "Hydraulic leak",
            "createdDate": "2024-03-05T10:00:00Z",
            "totalCost": 1500000.0,
        }));

        assert_eq!(order.asset_code(), Some("EXC-012"));
        assert_eq!(order.external_id().as_deref(), Some("48213"));
        assert_eq!(order.description_or_default(), "Hydraulic leak");
        assert_eq!(order.cost_or_default(), 1500000.0);
    }

    #[test]
    fn test_defaults_applied_to_bare_order() {
        let order = sample_order(serde_json::json!({ "id": 1 }));

        assert_eq!(order.asset_code(), None);
        assert_eq!(order.description_or_default(), "Repair Order");
        assert_eq!(order.cost_or_default(), 0.0);

        let fallback = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(order.date_or(fallback), fallback);
    }

    #[test]
    fn test_date_truncated_to_date_component() {
        let order = sample_order(serde_json::json!({
            "createdDate": "2024-03-05T10:00:00Z",
        }));

        let fallback = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(
            order.date_or(fallback),
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
        );
    }

    #[test]
    fn test_unparseable_date_falls_back() {
        let order = sample_order(serde_json::json!({ "createdDate": "last tuesday" }));

        let fallback = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(order.date_or(fallback), fallback);
    }

    #[test]
    fn test_parse_order_date() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(parse_order_date("2024-03-05T10:00:00Z"), Some(expected));
        assert_eq!(parse_order_date("2024-03-05"), Some(expected));
        assert_eq!(parse_order_date(""), None);
        assert_eq!(parse_order_date("not a date"), None);
    }

    #[test]
    fn test_external_id_accepts_numbers_and_strings() {
        assert_eq!(
            sample_order(serde_json::json!({ "id": 42 })).external_id(),
            Some("42".to_string())
        );
        assert_eq!(
            sample_order(serde_json::json!({ "id": "RO-42" })).external_id(),
            Some("RO-42".to_string())
        );
        assert_eq!(sample_order(serde_json::json!({ "id": null })).external_id(), None);
        assert_eq!(sample_order(serde_json::json!({ "id": "" })).external_id(), None);
        assert_eq!(sample_order(serde_json::json!({})).external_id(), None);
    }

    #[test]
    fn test_empty_asset_code_counts_as_absent() {
        let order = sample_order(serde_json::json!({ "asset": { "code": "" } }));
        assert_eq!(order.asset_code(), None);
    }

    #[test]
    fn test_response_without_content_is_empty() {
        let body: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(body.content.is_none());

        let body: SearchResponse = serde_json::from_str(r#"{"content": null}"#).unwrap();
        assert!(body.content.is_none());

        let body: SearchResponse = serde_json::from_str(r#"{"content": []}"#).unwrap();
        assert_eq!(body.content.unwrap().len(), 0);
    }
}
