use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::DataLoadError;

/// Raw order row from CSV ingestion
#[derive(Debug, Deserialize)]
pub struct OrderCsvRecord {
    pub order_id: String,
    pub order_purchase_timestamp: String,
    pub customer_city: String,
    pub customer_state: String,
}

/// Raw order-item row from CSV ingestion
#[derive(Debug, Deserialize)]
pub struct OrderItemCsvRecord {
    pub order_id: String,
    pub product_category_name_english: String,
    pub shipping_limit_date: String,
    pub price: String,
}

/// Raw geolocation row from CSV ingestion. Source files carry extra columns
/// (zip prefix, city) which are ignored here.
#[derive(Debug, Deserialize)]
pub struct GeoCsvRecord {
    pub geolocation_state: String,
    pub geolocation_lat: f64,
    pub geolocation_lng: f64,
}

/// One coordinate pair per region code, after deduplication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionGeo {
    pub state: String,
    pub lat: f64,
    pub lon: f64,
}

/// Enriched order row: purchase timestamp truncated to a calendar date,
/// region coordinates joined on, and the region's total order count over the
/// full (unfiltered) table for map sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub purchase_date: NaiveDate,
    pub customer_city: String,
    pub customer_state: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub state_count: u64,
}

/// Order line item. An order may have several; items are joined to orders by
/// id only for display, never for filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub order_id: String,
    pub category: String,
    pub shipping_limit_date: NaiveDate,
    pub price: f64,
}

/// Parse a timestamp field to a calendar date, discarding any time of day.
/// Accepts `YYYY-MM-DD HH:MM:SS` or a bare `YYYY-MM-DD`; dates are naive.
pub fn parse_date(value: &str) -> Result<NaiveDate, DataLoadError> {
    let value = value.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt.date());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| DataLoadError::InvalidTimestamp {
        value: value.to_string(),
    })
}

impl OrderCsvRecord {
    /// Convert to an enriched order. Coordinates come from the caller's geo
    /// lookup; `state_count` is filled in by a later pass over the full table.
    pub fn to_order(&self, coords: Option<(f64, f64)>) -> Result<Order, DataLoadError> {
        Ok(Order {
            order_id: self.order_id.clone(),
            purchase_date: parse_date(&self.order_purchase_timestamp)?,
            customer_city: self.customer_city.clone(),
            customer_state: self.customer_state.clone(),
            lat: coords.map(|(lat, _)| lat),
            lon: coords.map(|(_, lon)| lon),
            state_count: 0,
        })
    }
}

impl OrderItemCsvRecord {
    pub fn to_order_item(&self) -> Result<OrderItem, DataLoadError> {
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .map_err(|_| DataLoadError::InvalidNumber {
                value: self.price.clone(),
            })?;
        Ok(OrderItem {
            order_id: self.order_id.clone(),
            category: self.product_category_name_english.clone(),
            shipping_limit_date: parse_date(&self.shipping_limit_date)?,
            price,
        })
    }
}
