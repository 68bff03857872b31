//! Offline verification of a payment-notification signature.
//!
//! Parses a notification payload the way a webhook handler would receive it
//! and checks its signature without any network access.
//!
//! Run with:
//! ```bash
//! cargo run --example verify_notification
//! ```

use swiftpay_rs::signature::{expected_sign, verify_notification};
use swiftpay_rs::types::Notification;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = "APIdi7O4mSNzd5ZJiMLEWKw";

    // A payload as SwiftPay would deliver it to the merchant webhook.
    let raw = r#"{
        "sign": "24EE0B30BE1F30863D224D08192199FF2CC8C5D1048B1D8AC3303DC42A4424D6",
        "id": 550123,
        "system_id": 40,
        "order_id": "123",
        "shop_id": 22,
        "amount": 10.43,
        "amount_in_cur": 10.43,
        "cur": 1,
        "gate_fee": 0.3,
        "status": {"code": 1, "value": "PAID"},
        "created_at": "2020-01-19 12:00:00",
        "paid_at": "2020-01-19 12:02:11",
        "email": "payer@example.com",
        "description": "Order #123",
        "data": {"plan": "pro"},
        "commission": 0.52,
        "card_mask": "427638******3007",
        "phone": null,
        "token": "h2f8sk3jf92kd03k",
        "hash": "abc123"
    }"#;

    let notification: Notification = serde_json::from_str(raw)?;

    println!("🔏 Notification for order {}", notification.order_id);
    println!("   sign in payload: {}", notification.sign);
    println!(
        "   recomputed:      {}",
        expected_sign(
            &notification.order_id,
            notification.amount,
            api_key,
            notification.shop_id
        )
    );

    if verify_notification(&notification, api_key) {
        println!("✅ Signature is valid, the payload can be trusted");
        println!(
            "   order {} paid {} (status {:?})",
            notification.order_id, notification.amount, notification.status.value
        );
    } else {
        println!("❌ Signature mismatch, discard the payload");
    }

    // Any mutated field breaks the signature.
    let mut forged = notification.clone();
    forged.amount += 1.0;
    if !verify_notification(&forged, api_key) {
        println!("🚫 A tampered amount is rejected");
    }

    Ok(())
}
