//! Core data layer for an e-commerce orders dashboard.
//!
//! Loads the orders, order-items, and geolocation CSV files once per session,
//! derives date-filtered views on demand, and computes the display-ready
//! aggregates (summary metrics, daily order counts, category rankings,
//! city/state rankings). Rendering lives in the binaries; this crate knows
//! nothing about presentation.

pub mod category;
pub mod error;
pub mod filter;
pub mod geography;
pub mod loader;
pub mod metrics;
pub mod models;
pub mod ranking;
pub mod region_names;
pub mod timeseries;
