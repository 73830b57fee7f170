//! Row models and insert payloads for the tables this tool touches.
//!
//! `machines` is read-only from here; `repair_history` is the write
//! target. Only the columns the queries actually select appear on the
//! read models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vwm_sync_core::order::RemoteRepairOrder;

/// Tag written to `repair_history.source`, identifying this ingester.
pub const SOURCE_TAG: &str = "vincons_bot";

/// The columns of `machines` the code lookup selects.
#[derive(Debug, Clone, Deserialize)]
pub struct Machine {
    pub id: Uuid,
    pub code: String,
}

/// A row from the `repair_history` table, as echoed back by an insert.
#[derive(Debug, Clone, Deserialize)]
pub struct RepairHistory {
    pub id: Uuid,
    pub machine_id: Uuid,
    pub description: String,
    pub date: NaiveDate,
    pub cost: f64,
    pub source: String,
    pub external_id: String,
}

/// Insert payload for `repair_history`.
#[derive(Debug, Clone, Serialize)]
pub struct NewRepairHistory {
    pub machine_id: Uuid,
    pub description: String,
    pub date: NaiveDate,
    pub cost: f64,
    pub source: &'static str,
    pub external_id: String,
}

impl NewRepairHistory {
    /// Build the row for a remote order resolved to a machine.
    ///
    /// Applies the defaulting rules: description falls back to
    /// "Repair Order", cost to zero, and the date to `today` when the
    /// creation timestamp is absent or unparseable.
    pub fn from_order(
        order: &RemoteRepairOrder,
        machine_id: Uuid,
        external_id: String,
        today: NaiveDate,
    ) -> Self {
        Self {
            machine_id,
            description: order.description_or_default(),
            date: order.date_or(today),
            cost: order.cost_or_default(),
            source: SOURCE_TAG,
            external_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_from(json: serde_json::Value) -> RemoteRepairOrder {
        serde_json::from_value(json).unwrap()
    }

    fn machine_id() -> Uuid {
        Uuid::parse_str("6f3f59dc-94a1-4f0e-8a2e-0f30b2a6f7b1").unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_from_order_maps_all_fields() {
        let order = order_from(serde_json::json!({
            "id": 48213,
            "asset": { "code": "EXC-012" },
            "description": "Hydraulic leak",
            "createdDate": "2024-03-05T10:00:00Z",
            "totalCost": 1500000.0,
        }));

        let record = NewRepairHistory::from_order(&order, machine_id(), "48213".into(), today());

        assert_eq!(record.machine_id, machine_id());
        assert_eq!(record.description, "Hydraulic leak");
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(record.cost, 1500000.0);
        assert_eq!(record.source, SOURCE_TAG);
        assert_eq!(record.external_id, "48213");
    }

    #[test]
    fn test_from_order_applies_defaults() {
        let order = order_from(serde_json::json!({ "id": 7 }));

        let record = NewRepairHistory::from_order(&order, machine_id(), "7".into(), today());

        assert_eq!(record.description, "Repair Order");
        assert_eq!(record.cost, 0.0);
        assert_eq!(record.date, today());
    }

    #[test]
    fn test_insert_payload_wire_shape() {
        let order = order_from(serde_json::json!({
            "id": 7,
            "createdDate": "2024-03-05T10:00:00Z",
        }));
        let record = NewRepairHistory::from_order(&order, machine_id(), "7".into(), today());

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date"], "2024-03-05");
        assert_eq!(json["cost"], 0.0);
        assert_eq!(json["source"], "vincons_bot");
        assert_eq!(json["external_id"], "7");
        assert_eq!(json["machine_id"], "6f3f59dc-94a1-4f0e-8a2e-0f30b2a6f7b1");
    }
}
