//! Signature verification for inbound payment notifications.
//!
//! SwiftPay signs every payment notification with
//! `SHA256(order_id + amount + api_key + shop_id)` rendered as uppercase
//! hex. Verifying this signature is the sole trust boundary for inbound
//! notifications: a payload whose `sign` does not match must be discarded.
//!
//! Everything here is pure. No client instance, session, or network access
//! is needed, so a webhook handler can verify payloads on its own.

use sha2::{Digest, Sha256};

use crate::types::Notification;

/// Computes the expected signature for a payment notification.
///
/// The inputs are concatenated in fixed order (`order_id`, `amount`,
/// `api_key`, `shop_id`), hashed with SHA-256 over the UTF-8 bytes, and
/// rendered as uppercase hex. The amount uses its shortest decimal form,
/// matching how the gateway renders numbers (`10.43` stays `10.43`, a
/// whole `250.0` becomes `250`).
///
/// # Examples
///
/// ```
/// use swiftpay_rs::signature::expected_sign;
///
/// let sign = expected_sign("123", 10.43, "APIdi7O4mSNzd5ZJiMLEWKw", 22);
/// assert_eq!(
///     sign,
///     "24EE0B30BE1F30863D224D08192199FF2CC8C5D1048B1D8AC3303DC42A4424D6"
/// );
/// ```
pub fn expected_sign(order_id: &str, amount: f64, api_key: &str, shop_id: u32) -> String {
    let preimage = format!("{order_id}{amount}{api_key}{shop_id}");
    hex::encode_upper(Sha256::digest(preimage.as_bytes()))
}

/// Verifies the signature of an inbound payment notification.
///
/// Recomputes the signature from the notification's own `order_id`,
/// `amount`, and `shop_id` together with the merchant API key, and compares
/// it against the `sign` field. Comparison is exact and case-sensitive.
///
/// # Examples
///
/// ```no_run
/// use swiftpay_rs::signature::verify_notification;
/// use swiftpay_rs::types::Notification;
///
/// fn handle_webhook(notification: &Notification) {
///     if !verify_notification(notification, "your-api-key") {
///         return; // forged or corrupted, do not trust it
///     }
///     // safe to act on the payload
/// }
/// ```
pub fn verify_notification(notification: &Notification, api_key: &str) -> bool {
    let expected = expected_sign(
        &notification.order_id,
        notification.amount,
        api_key,
        notification.shop_id,
    );
    notification.sign == expected
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const API_KEY: &str = "APIdi7O4mSNzd5ZJiMLEWKw";
    const SIGN: &str = "24EE0B30BE1F30863D224D08192199FF2CC8C5D1048B1D8AC3303DC42A4424D6";

    fn notification(sign: &str, order_id: &str, amount: f64, shop_id: u32) -> Notification {
        serde_json::from_value(json!({
            "sign": sign,
            "id": 550123,
            "system_id": 40,
            "order_id": order_id,
            "shop_id": shop_id,
            "amount": amount,
            "amount_in_cur": amount,
            "cur": 1,
            "gate_fee": 0.3,
            "status": {"code": 1, "value": "PAID"},
            "created_at": "2020-01-19 12:00:00",
            "paid_at": "2020-01-19 12:02:11",
            "email": "payer@example.com",
            "description": null,
            "data": null,
            "commission": 0.52,
            "card_mask": null,
            "phone": null,
            "token": "h2f8sk3jf92kd03k",
            "hash": "abc123"
        }))
        .unwrap()
    }

    #[test]
    fn test_expected_sign_known_vector() {
        assert_eq!(expected_sign("123", 10.43, API_KEY, 22), SIGN);
    }

    #[test]
    fn test_expected_sign_whole_amount_drops_fraction() {
        // 250.0 must enter the preimage as "250", not "250.0".
        assert_eq!(
            expected_sign("ORDER-77", 250.0, "secret", 7),
            "AC99EE82727EE43052F6539AD0572A57DD458E6946CEE7FDEA6B48ADCBF3EA19"
        );
    }

    #[test]
    fn test_verify_accepts_matching_sign() {
        assert!(verify_notification(&notification(SIGN, "123", 10.43, 22), API_KEY));
    }

    #[test]
    fn test_verify_rejects_any_field_mutation() {
        assert!(!verify_notification(&notification(SIGN, "124", 10.43, 22), API_KEY));
        assert!(!verify_notification(&notification(SIGN, "123", 10.44, 22), API_KEY));
        assert!(!verify_notification(&notification(SIGN, "123", 10.43, 23), API_KEY));
        assert!(!verify_notification(
            &notification(SIGN, "123", 10.43, 22),
            "APIdi7O4mSNzd5ZJiMLEWKx"
        ));
    }

    #[test]
    fn test_verify_is_case_sensitive() {
        let lowercase = SIGN.to_lowercase();
        assert!(!verify_notification(&notification(&lowercase, "123", 10.43, 22), API_KEY));
    }
}
