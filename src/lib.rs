//! # swiftpay-rs
//!
//! A complete Rust client for the SwiftPay payment-processing HTTP API.
//!
//! SwiftPay is a payment gateway for merchants: it hosts shops, collects
//! deposits (orders), pays out withdrawals through named payment systems,
//! and reports payment outcomes to the merchant's webhook. This crate maps
//! every API endpoint to a typed async method, injects the API key into each
//! request, normalizes gateway failures into one error type, and verifies
//! the signature of inbound payment notifications.
//!
//! ## Features
//!
//! - **Typed endpoints**: Account, stats, shop management, order and payout
//!   listings with filters, payment and payout creation
//! - **Credential injection**: The API key travels as the `token` query
//!   parameter on GET and as a `token` body field on POST, never supplied by
//!   the caller
//! - **Normalized errors**: Local validation failures, HTTP 404, structured
//!   gateway error bodies, and transport failures are distinct variants of
//!   one error enum, with the gateway's original fields preserved
//! - **Notification verification**: Pure SHA-256 signature check usable from
//!   any webhook handler, no client instance required
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use swiftpay_rs::SwiftPayClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SwiftPayClient::new("YOUR_API_KEY", 22)?;
//!
//! let account = client.account().await?;
//! println!("balance: {} {:?}", account.data.balance, account.data.balance_currency);
//!
//! let shops = client.shops().await?;
//! for shop in shops.data {
//!     println!("shop #{}: {}", shop.id, shop.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every method returns [`Result`]. Remote failures keep their structure so
//! callers can branch on them instead of parsing message strings:
//!
//! ```rust,no_run
//! use swiftpay_rs::{ApiErrorKind, SwiftPayClient, SwiftPayError};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SwiftPayClient::new("YOUR_API_KEY", None)?;
//!
//! match client.stats().await {
//!     Ok(stats) => println!("today: +{}", stats.data.today.add),
//!     Err(SwiftPayError::Api { kind: ApiErrorKind::InvalidToken, .. }) => {
//!         eprintln!("the gateway rejected the API key");
//!     }
//!     Err(err) => eprintln!("request failed: {err}"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Verifying Notifications
//!
//! SwiftPay signs each payment notification with
//! `SHA256(order_id + amount + api_key + shop_id)` in uppercase hex. Verify
//! before trusting the payload:
//!
//! ```rust
//! use swiftpay_rs::signature::expected_sign;
//!
//! let sign = expected_sign("123", 10.43, "APIdi7O4mSNzd5ZJiMLEWKw", 22);
//! assert_eq!(
//!     sign,
//!     "24EE0B30BE1F30863D224D08192199FF2CC8C5D1048B1D8AC3303DC42A4424D6"
//! );
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod client;
pub mod errors;
pub mod signature;
pub mod types;

// Re-export commonly used items
pub use client::{SwiftPayClient, SwiftPayClientBuilder};
pub use errors::{ApiErrorBody, ApiErrorKind, Result, SwiftPayError};
pub use types::{
    Account, ApiResponse, CreateOrderRequest, CreatedOrder, Currency, Filter, FilterOp,
    GatePayRequest, ListQuery, Notification, Order, OrderField, OrdersQuery, PayInRequest, Payout,
    PayoutField, PayoutsQuery, PaymentStatus, Shop, ShopSummary, SortDirection, Stats, StatusInfo,
    System, SystemId,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_surface_accessibility() {
        // Reach every module through the crate root once.
        let _ = SwiftPayClient::builder("key");
        let _ = ApiErrorKind::classify("anything");
        let _ = OrdersQuery::sorted_by(OrderField::Id);
        let _ = signature::expected_sign("1", 1.0, "key", 1);
    }
}
