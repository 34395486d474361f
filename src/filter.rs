//! Inclusive date-range filtering.
//!
//! Orders are filtered on purchase date; items on shipping limit date. The
//! two predicates are independent on purpose: this mirrors the observed
//! dashboard behavior, so an item can appear in a chart while its parent
//! order falls outside the range (and vice versa). Flag to stakeholders
//! before unifying.

use chrono::NaiveDate;

use crate::models::{Order, OrderItem};

/// Closed date interval `[start, end]`. An inverted range (`start > end`)
/// contains no dates; it is a valid empty filter, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateRange { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Derive a filtered orders view by purchase date. Source is never mutated.
pub fn filter_orders(orders: &[Order], range: &DateRange) -> Vec<Order> {
    orders
        .iter()
        .filter(|o| range.contains(o.purchase_date))
        .cloned()
        .collect()
}

/// Derive a filtered items view by shipping limit date.
pub fn filter_items(items: &[OrderItem], range: &DateRange) -> Vec<OrderItem> {
    items
        .iter()
        .filter(|i| range.contains(i.shipping_limit_date))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn order(id: &str, date: NaiveDate) -> Order {
        Order {
            order_id: id.to_string(),
            purchase_date: date,
            customer_city: "sao paulo".to_string(),
            customer_state: "SP".to_string(),
            lat: None,
            lon: None,
            state_count: 1,
        }
    }

    fn item(order_id: &str, date: NaiveDate) -> OrderItem {
        OrderItem {
            order_id: order_id.to_string(),
            category: "toys".to_string(),
            shipping_limit_date: date,
            price: 10.0,
        }
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let orders = vec![
            order("o1", ymd(2016, 9, 20)),
            order("o2", ymd(2017, 1, 1)),
            order("o3", ymd(2018, 8, 29)),
        ];
        let range = DateRange::new(ymd(2016, 9, 15), ymd(2018, 8, 29));
        let filtered = filter_orders(&orders, &range);
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_filtered_never_exceeds_unfiltered() {
        let orders = vec![
            order("o1", ymd(2017, 3, 1)),
            order("o2", ymd(2017, 6, 1)),
            order("o3", ymd(2017, 9, 1)),
        ];
        let range = DateRange::new(ymd(2017, 4, 1), ymd(2017, 12, 31));
        let filtered = filter_orders(&orders, &range);
        assert!(filtered.len() <= orders.len());
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_inverted_range_yields_empty_views() {
        let orders = vec![order("o1", ymd(2017, 5, 1))];
        let items = vec![item("o1", ymd(2017, 5, 1))];
        let range = DateRange::new(ymd(2018, 1, 1), ymd(2017, 1, 1));
        assert!(filter_orders(&orders, &range).is_empty());
        assert!(filter_items(&items, &range).is_empty());
    }

    #[test]
    fn test_single_day_range() {
        let orders = vec![order("o1", ymd(2017, 5, 1)), order("o2", ymd(2017, 5, 2))];
        let range = DateRange::new(ymd(2017, 5, 1), ymd(2017, 5, 1));
        let filtered = filter_orders(&orders, &range);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].order_id, "o1");
    }

    #[test]
    fn test_orders_and_items_filter_on_different_columns() {
        // Item ships after its parent order's purchase window closes: the
        // order is kept, the item is not.
        let orders = vec![order("o1", ymd(2017, 5, 1))];
        let items = vec![item("o1", ymd(2017, 7, 1))];
        let range = DateRange::new(ymd(2017, 4, 1), ymd(2017, 6, 1));
        assert_eq!(filter_orders(&orders, &range).len(), 1);
        assert_eq!(filter_items(&items, &range).len(), 0);
    }
}
