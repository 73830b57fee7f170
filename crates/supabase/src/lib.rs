//! Supabase (PostgREST) storage layer.
//!
//! [`SupabaseClient`] speaks the REST interface of a Supabase project;
//! the repository structs provide the two table operations the sync
//! pipeline needs:
//!
//! - [`MachineRepo`]: read-only lookup of `machines` by business code.
//! - [`RepairHistoryRepo`]: atomic upsert into `repair_history` keyed
//!   on `external_id`.

pub mod client;
pub mod machines;
pub mod models;
pub mod repair_history;

pub use client::{StoreError, SupabaseClient};
pub use machines::MachineRepo;
pub use repair_history::RepairHistoryRepo;
