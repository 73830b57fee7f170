//! HTTP client for the Vincons VWM maintenance-management portal.
//!
//! The portal has no public API surface; this crate drives the same
//! search endpoint the web UI calls, authenticated by an externally
//! captured session cookie.

pub mod client;

pub use client::{VwmApiError, VwmClient, DEFAULT_BASE_URL};
