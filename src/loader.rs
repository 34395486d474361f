//! CSV loading and enrichment.
//!
//! Reads the three source files once at startup: orders, order items, and the
//! geolocation reference. The geo reference is deduplicated to one coordinate
//! pair per region code (first occurrence wins), left-joined onto orders, and
//! each order is annotated with its region's total count over the unfiltered
//! table. Any missing file or missing column is fatal.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::info;

use crate::error::DataLoadError;
use crate::models::{
    GeoCsvRecord, Order, OrderCsvRecord, OrderItem, OrderItemCsvRecord, RegionGeo,
};

const ORDER_COLUMNS: &[&str] = &[
    "order_id",
    "order_purchase_timestamp",
    "customer_city",
    "customer_state",
];
const ITEM_COLUMNS: &[&str] = &[
    "order_id",
    "product_category_name_english",
    "shipping_limit_date",
    "price",
];
const GEO_COLUMNS: &[&str] = &["geolocation_state", "geolocation_lat", "geolocation_lng"];

/// All loaded tables for one dashboard session. Built once at startup and
/// passed by reference to the filter stage and aggregators; never mutated.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub orders: Vec<Order>,
    pub items: Vec<OrderItem>,
}

impl DashboardData {
    /// Load and enrich all three source files.
    pub fn load(
        orders_path: &Path,
        items_path: &Path,
        geo_path: &Path,
    ) -> Result<Self, DataLoadError> {
        let geo = load_geolocation(open(geo_path)?)?;
        info!("loaded {} region coordinate rows from {:?}", geo.len(), geo_path);

        let orders = load_orders(open(orders_path)?, &geo)?;
        info!("loaded {} orders from {:?}", orders.len(), orders_path);

        let items = load_order_items(open(items_path)?)?;
        info!("loaded {} order items from {:?}", items.len(), items_path);

        Ok(DashboardData { orders, items })
    }
}

fn open(path: &Path) -> Result<File, DataLoadError> {
    File::open(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Fail fast with a named column instead of a serde message deep in row N.
fn check_columns(
    headers: &csv::StringRecord,
    file: &str,
    required: &[&str],
) -> Result<(), DataLoadError> {
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(DataLoadError::MissingColumn {
                file: file.to_string(),
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

/// Load the geolocation reference: one `(state, lat, lon)` row per region
/// code, keeping the first occurrence when the source has duplicates.
pub fn load_geolocation<R: Read>(reader: R) -> Result<Vec<RegionGeo>, DataLoadError> {
    let mut csv = ReaderBuilder::new().has_headers(true).from_reader(reader);
    check_columns(csv.headers()?, "geolocation", GEO_COLUMNS)?;

    let mut regions: Vec<RegionGeo> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    for record in csv.deserialize() {
        let record: GeoCsvRecord = record?;
        if seen.insert(record.geolocation_state.clone()) {
            regions.push(RegionGeo {
                state: record.geolocation_state,
                lat: record.geolocation_lat,
                lon: record.geolocation_lng,
            });
        }
    }
    Ok(regions)
}

/// Load and enrich the orders table.
///
/// Left join: an order whose state has no geo row keeps `None` coordinates,
/// it is never dropped. `state_count` is recomputed over the whole table so
/// later filtering does not change map sizing.
pub fn load_orders<R: Read>(reader: R, geo: &[RegionGeo]) -> Result<Vec<Order>, DataLoadError> {
    let coords: HashMap<&str, (f64, f64)> = geo
        .iter()
        .map(|g| (g.state.as_str(), (g.lat, g.lon)))
        .collect();

    let mut csv = ReaderBuilder::new().has_headers(true).from_reader(reader);
    check_columns(csv.headers()?, "orders", ORDER_COLUMNS)?;

    let mut orders: Vec<Order> = Vec::new();
    for record in csv.deserialize() {
        let record: OrderCsvRecord = record?;
        let joined = coords.get(record.customer_state.as_str()).copied();
        orders.push(record.to_order(joined)?);
    }

    let mut state_counts: HashMap<&str, u64> = HashMap::new();
    for order in &orders {
        *state_counts.entry(order.customer_state.as_str()).or_insert(0) += 1;
    }
    let state_counts: HashMap<String, u64> = state_counts
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    for order in &mut orders {
        order.state_count = state_counts[&order.customer_state];
    }

    Ok(orders)
}

/// Load the order-items table.
pub fn load_order_items<R: Read>(reader: R) -> Result<Vec<OrderItem>, DataLoadError> {
    let mut csv = ReaderBuilder::new().has_headers(true).from_reader(reader);
    check_columns(csv.headers()?, "order_items", ITEM_COLUMNS)?;

    let mut items: Vec<OrderItem> = Vec::new();
    for record in csv.deserialize() {
        let record: OrderItemCsvRecord = record?;
        items.push(record.to_order_item()?);
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const GEO_CSV: &str = "\
geolocation_state,geolocation_lat,geolocation_lng
SP,-23.54,-46.64
RJ,-22.90,-43.18
SP,-23.99,-46.99
MG,-19.92,-43.94
";

    const ORDERS_CSV: &str = "\
order_id,order_purchase_timestamp,customer_city,customer_state
o1,2017-10-02 10:56:33,sao paulo,SP
o2,2017-10-03 11:00:00,campinas,SP
o3,2018-01-15 09:30:00,rio de janeiro,RJ
o4,2018-02-20 18:45:12,manaus,AM
";

    const ITEMS_CSV: &str = "\
order_id,product_category_name_english,shipping_limit_date,price
o1,toys,2017-10-06 11:07:15,58.90
o1,toys,2017-10-06 11:07:15,58.90
o3,health_beauty,2018-01-19 00:00:00,129.99
";

    #[test]
    fn test_geo_dedup_keeps_first_occurrence() {
        let geo = load_geolocation(GEO_CSV.as_bytes()).unwrap();
        assert_eq!(geo.len(), 3);
        let sp = geo.iter().find(|g| g.state == "SP").unwrap();
        assert_eq!(sp.lat, -23.54);
        assert_eq!(sp.lon, -46.64);
    }

    #[test]
    fn test_orders_left_join_and_state_count() {
        let geo = load_geolocation(GEO_CSV.as_bytes()).unwrap();
        let orders = load_orders(ORDERS_CSV.as_bytes(), &geo).unwrap();
        assert_eq!(orders.len(), 4);

        let o1 = &orders[0];
        assert_eq!(o1.purchase_date, NaiveDate::from_ymd_opt(2017, 10, 2).unwrap());
        assert_eq!(o1.lat, Some(-23.54));
        assert_eq!(o1.state_count, 2);

        // AM has no geo row: order survives with null coordinates.
        let o4 = &orders[3];
        assert_eq!(o4.lat, None);
        assert_eq!(o4.lon, None);
        assert_eq!(o4.state_count, 1);
    }

    #[test]
    fn test_load_order_items() {
        let items = load_order_items(ITEMS_CSV.as_bytes()).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[2].category, "health_beauty");
        assert_eq!(items[2].price, 129.99);
        assert_eq!(
            items[2].shipping_limit_date,
            NaiveDate::from_ymd_opt(2018, 1, 19).unwrap()
        );
    }

    #[test]
    fn test_missing_column_is_detected() {
        let bad = "order_id,customer_city,customer_state\no1,sao paulo,SP\n";
        let err = load_orders(bad.as_bytes(), &[]).unwrap_err();
        match err {
            DataLoadError::MissingColumn { file, column } => {
                assert_eq!(file, "orders");
                assert_eq!(column, "order_purchase_timestamp");
            }
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_load_from_paths() {
        let dir = tempfile::tempdir().unwrap();
        let orders_path = dir.path().join("orders.csv");
        let items_path = dir.path().join("items.csv");
        let geo_path = dir.path().join("geo.csv");
        std::fs::write(&orders_path, ORDERS_CSV).unwrap();
        std::fs::write(&items_path, ITEMS_CSV).unwrap();
        std::fs::write(&geo_path, GEO_CSV).unwrap();

        let data = DashboardData::load(&orders_path, &items_path, &geo_path).unwrap();
        assert_eq!(data.orders.len(), 4);
        assert_eq!(data.items.len(), 3);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.csv");
        let geo_path = dir.path().join("geo.csv");
        std::fs::write(&geo_path, GEO_CSV).unwrap();

        let err = DashboardData::load(&missing, &missing, &geo_path).unwrap_err();
        assert!(matches!(err, DataLoadError::Io { .. }));
    }
}
