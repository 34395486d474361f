//! Top-N city and region frequency rankings.

use crate::models::Order;
use crate::ranking::{count_by_key, KeyCount};

/// Most frequent customer cities, count descending, at most `n` entries.
pub fn top_cities(orders: &[Order], n: usize) -> Vec<KeyCount> {
    let mut ranked = count_by_key(orders.iter().map(|o| o.customer_city.as_str()));
    ranked.truncate(n);
    ranked
}

/// Most frequent customer states, count descending, at most `n` entries.
pub fn top_states(orders: &[Order], n: usize) -> Vec<KeyCount> {
    let mut ranked = count_by_key(orders.iter().map(|o| o.customer_state.as_str()));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn order(city: &str, state: &str) -> Order {
        Order {
            order_id: "o".to_string(),
            purchase_date: NaiveDate::from_ymd_opt(2017, 5, 1).unwrap(),
            customer_city: city.to_string(),
            customer_state: state.to_string(),
            lat: None,
            lon: None,
            state_count: 1,
        }
    }

    #[test]
    fn test_top_cities_ranked_and_truncated() {
        let orders = vec![
            order("sao paulo", "SP"),
            order("sao paulo", "SP"),
            order("campinas", "SP"),
            order("rio de janeiro", "RJ"),
            order("rio de janeiro", "RJ"),
            order("rio de janeiro", "RJ"),
            order("niteroi", "RJ"),
            order("salvador", "BA"),
            order("curitiba", "PR"),
            order("porto alegre", "RS"),
        ];
        let cities = top_cities(&orders, 5);
        assert_eq!(cities.len(), 5);
        assert_eq!(cities[0].key, "rio de janeiro");
        assert_eq!(cities[0].count, 3);
        assert_eq!(cities[1].key, "sao paulo");
    }

    #[test]
    fn test_top_states_tie_breaks_by_first_seen() {
        let orders = vec![
            order("a", "RJ"),
            order("b", "SP"),
            order("c", "RJ"),
            order("d", "SP"),
        ];
        let states = top_states(&orders, 5);
        assert_eq!(states.len(), 2);
        // Equal counts: RJ was seen first.
        assert_eq!(states[0].key, "RJ");
        assert_eq!(states[1].key, "SP");
    }

    #[test]
    fn test_fewer_groups_than_n() {
        let orders = vec![order("a", "SP")];
        assert_eq!(top_cities(&orders, 5).len(), 1);
    }
}
