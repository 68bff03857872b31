//! Example walk through the read-only SwiftPay endpoints.
//!
//! Fetches stats, account details, the shop list, one shop, and the latest
//! orders, printing how long each exchange took.
//!
//! Run with:
//! ```bash
//! cargo run --example account
//! ```
//!
//! Environment variables (also read from a `.env` file):
//! - SWIFTPAY_API_KEY: Your merchant API key
//! - SWIFTPAY_SHOP_ID: Optional default shop id

use std::time::{Duration, Instant};

use swiftpay_rs::types::{OrderField, OrdersQuery};
use swiftpay_rs::SwiftPayClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();

    let api_key = std::env::var("SWIFTPAY_API_KEY")
        .map_err(|_| "SWIFTPAY_API_KEY is not set (put it in the environment or a .env file)")?;
    let shop_id = std::env::var("SWIFTPAY_SHOP_ID")
        .ok()
        .and_then(|raw| raw.parse::<u32>().ok());

    let client = SwiftPayClient::new(&api_key, shop_id)?;

    println!("💳 SwiftPay account overview");
    println!("   Gateway: {}", client.base_url());
    println!();

    let started = Instant::now();
    let stats = client.stats().await?;
    println!("📈 Stats ({:?})", started.elapsed());
    println!("   today: +{} / -{}", stats.data.today.add, stats.data.today.sub);
    println!("   month: +{} / -{}", stats.data.month.add, stats.data.month.sub);

    tokio::time::sleep(Duration::from_millis(500)).await;

    let started = Instant::now();
    let account = client.account().await?;
    println!("👤 Account ({:?})", started.elapsed());
    println!(
        "   {}: {} {:?}",
        account.data.name, account.data.balance, account.data.balance_currency
    );

    tokio::time::sleep(Duration::from_millis(500)).await;

    let started = Instant::now();
    let shops = client.shops().await?;
    println!("🏪 Shops ({:?})", started.elapsed());
    for shop in &shops.data {
        println!("   #{} {} ({})", shop.id, shop.name, shop.url);
    }

    tokio::time::sleep(Duration::from_millis(500)).await;

    if client.shop_id().is_some() {
        let started = Instant::now();
        let shop = client.shop(None).await?;
        println!("🔎 Shop #{} ({:?})", shop.data.id, started.elapsed());
        println!("   commission: {}%", shop.data.commission);
        for system in &shop.data.all_systems {
            println!("   system {}: {} ({}%)", system.id.id(), system.name, system.commission);
        }

        tokio::time::sleep(Duration::from_millis(500)).await;
    }

    let started = Instant::now();
    let query = OrdersQuery::sorted_by(OrderField::Id);
    let orders = client.orders(&query).await?;
    println!("🧾 Orders ({:?})", started.elapsed());
    for order in orders.data.iter().take(10) {
        println!(
            "   #{} {} {:?} [{}]",
            order.id, order.amount, order.cur_name, order.created_at
        );
    }

    println!("\n✨ Done!");
    Ok(())
}
