//! Terminal dashboard over the e-commerce order dataset.
//!
//! Loads the three CSV files once, optionally applies an inclusive date
//! filter, and renders summary metrics, a daily-orders chart, category
//! rankings, and city/state rankings as text bar charts.
//!
//! Run: ./target/release/dashboard --data-dir data/dashboard \
//!        --start-date 2016-09-15 --end-date 2018-08-29

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use ecom_dashboard::category::CategoryBreakdown;
use ecom_dashboard::filter::{filter_items, filter_orders, DateRange};
use ecom_dashboard::geography::{top_cities, top_states};
use ecom_dashboard::loader::DashboardData;
use ecom_dashboard::metrics::Metrics;
use ecom_dashboard::models::{Order, OrderItem};
use ecom_dashboard::ranking::KeyCount;
use ecom_dashboard::region_names::get_region_name;
use ecom_dashboard::timeseries::{daily_orders, DailyOrders};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// E-commerce data dashboard (terminal rendering)
#[derive(Parser, Debug)]
#[command(name = "dashboard")]
#[command(about = "Render order metrics, charts, and rankings from CSV data")]
struct Args {
    /// Directory containing orders_analyzed.csv, order_items_analyzed.csv,
    /// and geolocation_dataset.csv
    #[arg(long, default_value = "data/dashboard")]
    data_dir: PathBuf,

    /// Inclusive filter start date (YYYY-MM-DD); requires --end-date
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Inclusive filter end date (YYYY-MM-DD); requires --start-date
    #[arg(long)]
    end_date: Option<NaiveDate>,

    /// Number of entries in each ranking
    #[arg(long, default_value = "5")]
    top: usize,

    /// Emit the aggregates as JSON instead of text charts
    #[arg(long)]
    json: bool,
}

/// Everything the rendering layer consumes, in one serializable bundle.
#[derive(Debug, Serialize)]
struct DashboardReport {
    metrics: Metrics,
    daily_orders: Vec<DailyOrders>,
    top_categories: Vec<KeyCount>,
    bottom_categories: Vec<KeyCount>,
    top_cities: Vec<KeyCount>,
    top_states: Vec<KeyCount>,
}

fn print_section_header(title: &str) {
    println!("\n{}", "═".repeat(70));
    println!("  {}", title);
    println!("{}\n", "═".repeat(70));
}

fn print_bars(rows: &[KeyCount], label_width: usize) {
    let max = rows.iter().map(|r| r.count).max().unwrap_or(1).max(1);
    for row in rows {
        let bar_len = ((row.count as f64 / max as f64) * 40.0) as usize;
        let bar: String = "█".repeat(bar_len);
        println!("  {:label_width$} {:>8} {}", row.key, row.count, bar);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();

    let data = DashboardData::load(
        &args.data_dir.join("orders_analyzed.csv"),
        &args.data_dir.join("order_items_analyzed.csv"),
        &args.data_dir.join("geolocation_dataset.csv"),
    )?;

    // Filter only when both bounds are given; otherwise the full tables pass
    // through untouched (the dashboard's initial state).
    let (orders, items): (Vec<Order>, Vec<OrderItem>) = match (args.start_date, args.end_date) {
        (Some(start), Some(end)) => {
            info!("filter applied from {} to {}", start, end);
            let range = DateRange::new(start, end);
            (
                filter_orders(&data.orders, &range),
                filter_items(&data.items, &range),
            )
        }
        _ => (data.orders.clone(), data.items.clone()),
    };

    let breakdown = CategoryBreakdown::from_items(&items);
    let report = DashboardReport {
        metrics: Metrics::compute(&orders, &items),
        daily_orders: daily_orders(&orders),
        top_categories: breakdown.top(args.top).to_vec(),
        bottom_categories: breakdown.bottom(args.top).to_vec(),
        top_cities: top_cities(&orders, args.top),
        top_states: top_states(&orders, args.top),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    render(&report, &orders, args.top);
    Ok(())
}

fn render(report: &DashboardReport, orders: &[Order], top: usize) {
    print_section_header("ECOMMERCE DATA DASHBOARD");

    println!("  Total Orders:   {:>12}", report.metrics.total_orders);
    println!("  Total Items:    {:>12}", report.metrics.total_items);
    println!("  Total Revenue:  {:>12.2}", report.metrics.total_revenue);

    print_section_header("DAILY ORDERS OVER TIME");
    let max = report
        .daily_orders
        .iter()
        .map(|d| d.orders)
        .max()
        .unwrap_or(1)
        .max(1);
    for day in &report.daily_orders {
        let bar_len = ((day.orders as f64 / max as f64) * 40.0) as usize;
        let bar: String = "▓".repeat(bar_len);
        println!("  {}  {:>6} {}", day.date, day.orders, bar);
    }

    print_section_header(&format!("TOP {} SOLD PRODUCT CATEGORIES", top));
    print_bars(&report.top_categories, 30);

    print_section_header(&format!("BOTTOM {} SOLD PRODUCT CATEGORIES", top));
    print_bars(&report.bottom_categories, 30);

    print_section_header(&format!("TOP {} CITIES", top));
    print_bars(&report.top_cities, 30);

    print_section_header(&format!("TOP {} STATES", top));
    let named: Vec<KeyCount> = report
        .top_states
        .iter()
        .map(|row| KeyCount {
            key: get_region_name(&row.key),
            count: row.count,
        })
        .collect();
    print_bars(&named, 30);

    print_section_header("STATES DISTRIBUTION (MAP DATA)");
    println!(
        "  {:20} {:>10} {:>10} {:>10}",
        "State", "Lat", "Lon", "Orders"
    );
    println!("  {}", "─".repeat(54));
    let mut seen: Vec<&str> = Vec::new();
    for order in orders {
        if seen.contains(&order.customer_state.as_str()) {
            continue;
        }
        seen.push(&order.customer_state);
        match (order.lat, order.lon) {
            (Some(lat), Some(lon)) => println!(
                "  {:20} {:>10.2} {:>10.2} {:>10}",
                get_region_name(&order.customer_state),
                lat,
                lon,
                order.state_count
            ),
            _ => println!(
                "  {:20} {:>10} {:>10} {:>10}",
                get_region_name(&order.customer_state),
                "-",
                "-",
                order.state_count
            ),
        }
    }
}
