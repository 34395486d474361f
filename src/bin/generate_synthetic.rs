//! Synthetic data generator for the dashboard dataset.
//!
//! Emits the three CSV files the loader expects (orders, order items,
//! geolocation) with population-weighted cities, weighted product categories,
//! and purchase dates spread over the 2016-09..2018-08 window. Deterministic
//! under a fixed seed.
//!
//! Usage:
//!   cargo run --release --bin generate_synthetic -- [OPTIONS]
//!
//! Options:
//!   --orders <N>    Number of orders to generate (default: 500)
//!   --seed <N>      Random seed for reproducibility (optional)
//!   --out-dir <DIR> Output directory (default: data/dashboard)

use anyhow::Result;
use chrono::{Duration, NaiveDate};
use clap::Parser;
use csv::WriterBuilder;
use rand::distributions::WeightedIndex;
use rand::prelude::*;
use rand::rngs::StdRng;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Synthetic dashboard data generator
#[derive(Parser, Debug)]
#[command(name = "generate_synthetic")]
#[command(about = "Generate synthetic order data for the dashboard")]
struct Args {
    /// Number of orders to generate
    #[arg(long, default_value = "500")]
    orders: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Output directory for the three CSV files
    #[arg(long, default_value = "data/dashboard")]
    out_dir: PathBuf,
}

/// Output row for orders_analyzed.csv
#[derive(Debug, Clone, PartialEq, Serialize)]
struct OrderRow {
    order_id: String,
    order_purchase_timestamp: String,
    customer_city: String,
    customer_state: String,
}

/// Output row for order_items_analyzed.csv
#[derive(Debug, Clone, PartialEq, Serialize)]
struct ItemRow {
    order_id: String,
    product_category_name_english: String,
    shipping_limit_date: String,
    price: f64,
}

/// Output row for geolocation_dataset.csv
#[derive(Debug, Clone, PartialEq, Serialize)]
struct GeoRow {
    geolocation_state: String,
    geolocation_lat: f64,
    geolocation_lng: f64,
}

/// (city, state, relative population weight)
const CITIES: &[(&str, &str, u32)] = &[
    ("sao paulo", "SP", 12300),
    ("campinas", "SP", 1200),
    ("guarulhos", "SP", 1390),
    ("rio de janeiro", "RJ", 6700),
    ("niteroi", "RJ", 510),
    ("belo horizonte", "MG", 2500),
    ("uberlandia", "MG", 700),
    ("porto alegre", "RS", 1480),
    ("curitiba", "PR", 1960),
    ("salvador", "BA", 2870),
    ("florianopolis", "SC", 510),
    ("brasilia", "DF", 3050),
    ("goiania", "GO", 1530),
    ("recife", "PE", 1650),
    ("fortaleza", "CE", 2690),
    ("manaus", "AM", 2220),
];

/// (category, relative sales weight)
const CATEGORIES: &[(&str, u32)] = &[
    ("bed_bath_table", 1100),
    ("health_beauty", 970),
    ("sports_leisure", 860),
    ("furniture_decor", 830),
    ("computers_accessories", 780),
    ("housewares", 690),
    ("watches_gifts", 600),
    ("telephony", 450),
    ("garden_tools", 430),
    ("auto", 420),
    ("toys", 410),
    ("cool_stuff", 380),
    ("perfumery", 340),
    ("baby", 300),
    ("electronics", 270),
    ("stationery", 250),
    ("fashion_bags_accessories", 200),
    ("pet_shop", 190),
    ("office_furniture", 170),
    ("security_and_services", 2),
];

/// Capital coordinates per state in the city pool.
const STATE_COORDS: &[(&str, f64, f64)] = &[
    ("SP", -23.55, -46.63),
    ("RJ", -22.91, -43.17),
    ("MG", -19.92, -43.94),
    ("RS", -30.03, -51.23),
    ("PR", -25.43, -49.27),
    ("BA", -12.97, -38.50),
    ("SC", -27.59, -48.55),
    ("DF", -15.78, -47.93),
    ("GO", -16.69, -49.26),
    ("PE", -8.05, -34.88),
    ("CE", -3.73, -38.53),
    ("AM", -3.10, -60.02),
];

/// Dataset window matching the real data: 2016-09-04 through 2018-08-29.
const WINDOW_START: (i32, u32, u32) = (2016, 9, 4);
const WINDOW_DAYS: i64 = 724;

fn random_timestamp(rng: &mut StdRng, base: NaiveDate, max_days: i64) -> (NaiveDate, String) {
    let date = base + Duration::days(rng.gen_range(0..=max_days));
    let time = format!(
        "{:02}:{:02}:{:02}",
        rng.gen_range(0..24),
        rng.gen_range(0..60),
        rng.gen_range(0..60)
    );
    (date, format!("{} {}", date.format("%Y-%m-%d"), time))
}

fn generate(seed: u64, order_count: usize) -> (Vec<OrderRow>, Vec<ItemRow>, Vec<GeoRow>) {
    let mut rng = StdRng::seed_from_u64(seed);

    let city_weights =
        WeightedIndex::new(CITIES.iter().map(|(_, _, w)| *w)).expect("non-empty city pool");
    let category_weights =
        WeightedIndex::new(CATEGORIES.iter().map(|(_, w)| *w)).expect("non-empty category pool");

    let window_start =
        NaiveDate::from_ymd_opt(WINDOW_START.0, WINDOW_START.1, WINDOW_START.2).unwrap();

    let mut orders = Vec::with_capacity(order_count);
    let mut items = Vec::new();
    for _ in 0..order_count {
        let (city, state, _) = CITIES[city_weights.sample(&mut rng)];
        let order_id = format!("{:016x}{:016x}", rng.gen::<u64>(), rng.gen::<u64>());
        let (purchase_date, purchase_ts) = random_timestamp(&mut rng, window_start, WINDOW_DAYS);

        orders.push(OrderRow {
            order_id: order_id.clone(),
            order_purchase_timestamp: purchase_ts,
            customer_city: city.to_string(),
            customer_state: state.to_string(),
        });

        for _ in 0..rng.gen_range(1..=3) {
            let (category, _) = CATEGORIES[category_weights.sample(&mut rng)];
            let ship_base = purchase_date + Duration::days(rng.gen_range(3..=14));
            let (_, ship_ts) = random_timestamp(&mut rng, ship_base, 0);
            let price = (rng.gen_range(10.0..350.0_f64) * 100.0).round() / 100.0;
            items.push(ItemRow {
                order_id: order_id.clone(),
                product_category_name_english: category.to_string(),
                shipping_limit_date: ship_ts,
                price,
            });
        }
    }

    // Several rows per state with jittered coordinates; the loader keeps the
    // first (canonical) one.
    let mut geo = Vec::new();
    for (state, lat, lon) in STATE_COORDS {
        geo.push(GeoRow {
            geolocation_state: state.to_string(),
            geolocation_lat: *lat,
            geolocation_lng: *lon,
        });
        for _ in 0..2 {
            geo.push(GeoRow {
                geolocation_state: state.to_string(),
                geolocation_lat: lat + rng.gen_range(-0.5..0.5),
                geolocation_lng: lon + rng.gen_range(-0.5..0.5),
            });
        }
    }

    (orders, items, geo)
}

fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(true).from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("generating {} orders with seed {}", args.orders, seed);

    let (orders, items, geo) = generate(seed, args.orders);

    std::fs::create_dir_all(&args.out_dir)?;
    write_csv(&args.out_dir.join("orders_analyzed.csv"), &orders)?;
    write_csv(&args.out_dir.join("order_items_analyzed.csv"), &items)?;
    write_csv(&args.out_dir.join("geolocation_dataset.csv"), &geo)?;

    info!(
        "wrote {} orders, {} items, {} geo rows to {:?}",
        orders.len(),
        items.len(),
        geo.len(),
        args.out_dir
    );
    Ok(())
}
