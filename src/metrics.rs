//! Scalar summary metrics for the dashboard header.

use serde::Serialize;

use crate::models::{Order, OrderItem};

/// Headline numbers over the filtered views.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    pub total_orders: usize,
    pub total_items: usize,
    pub total_revenue: f64,
}

impl Metrics {
    /// Row counts plus the price sum. Sum over an empty table is 0.0.
    pub fn compute(orders: &[Order], items: &[OrderItem]) -> Self {
        Metrics {
            total_orders: orders.len(),
            total_items: items.len(),
            total_revenue: items.iter().map(|i| i.price).sum(),
        }
    }
}
