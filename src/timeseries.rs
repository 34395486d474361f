//! Per-date order counts for the daily line chart.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::Order;

/// One point on the daily-orders chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyOrders {
    pub date: NaiveDate,
    pub orders: u64,
}

/// Count orders per purchase date, ascending by date. Sparse: dates with no
/// orders are not synthesized.
pub fn daily_orders(orders: &[Order]) -> Vec<DailyOrders> {
    let mut counts: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for order in orders {
        *counts.entry(order.purchase_date).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(date, orders)| DailyOrders { date, orders })
        .collect()
}
