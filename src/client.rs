//! Client-side functionality for the SwiftPay API.
//!
//! This module provides [`SwiftPayClient`], which owns the merchant
//! credentials and the HTTP connection pool, executes one request per API
//! call, and exposes a typed method for every endpoint.

use std::time::Duration;

use reqwest::{header, Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};
use tracing::{debug, instrument};
use url::Url;

use crate::errors::{ApiErrorBody, Result, SwiftPayError};
use crate::signature;
use crate::types::{
    Account, ApiResponse, CreateOrderRequest, CreatedOrder, GatePayRequest, Notification, Order,
    OrdersQuery, PayInRequest, Payout, PayoutsQuery, Shop, ShopSummary, Stats, System, SystemId,
};

/// Default whole-exchange timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// User-agent attached to every outgoing request.
const USER_AGENT: &str = concat!("swiftpay-rs/", env!("CARGO_PKG_VERSION"));

/// Builder for configuring a [`SwiftPayClient`].
pub struct SwiftPayClientBuilder {
    api_key: String,
    shop_id: Option<u32>,
    base_url: String,
    timeout: Duration,
    http_client: Option<Client>,
}

impl SwiftPayClientBuilder {
    fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            shop_id: None,
            base_url: SwiftPayClient::API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            http_client: None,
        }
    }

    /// Sets the default shop id used when a method is called without one.
    pub fn with_shop_id(mut self, shop_id: u32) -> Self {
        self.shop_id = Some(shop_id);
        self
    }

    /// Overrides the gateway base URL (for tests or self-hosted gateways).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the whole-exchange timeout. The default is 10 seconds.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// The client is used as supplied, so the timeout configured here or by
    /// default does not apply to it.
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Builds the [`SwiftPayClient`].
    pub fn build(self) -> Result<SwiftPayClient> {
        let base_url = Url::parse(&self.base_url)?;
        let http_client = match self.http_client {
            Some(client) => client,
            None => Client::builder().timeout(self.timeout).build()?,
        };

        Ok(SwiftPayClient {
            api_key: self.api_key,
            shop_id: self.shop_id,
            http_client,
            base_url,
        })
    }
}

/// Client for the SwiftPay payment-processing API.
///
/// A client holds the API key, an optional default shop id, and a shared
/// connection pool. All three are fixed for the client's lifetime; methods
/// that accept a per-call shop id never change the stored default.
///
/// # Examples
///
/// ```
/// use swiftpay_rs::SwiftPayClient;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = SwiftPayClient::new("APIdi7O4mSNzd5ZJiMLEWKw", 22)?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SwiftPayClient {
    api_key: String,
    shop_id: Option<u32>,
    http_client: Client,
    base_url: Url,
}

impl SwiftPayClient {
    /// Production gateway base URL.
    pub const API_URL: &'static str = "https://api.swiftpay.store";

    /// Creates a client with default transport settings.
    ///
    /// # Arguments
    ///
    /// * `api_key` - The merchant API key.
    /// * `shop_id` - Default shop id for methods that accept one, or `None`.
    pub fn new(api_key: impl Into<String>, shop_id: impl Into<Option<u32>>) -> Result<Self> {
        let mut builder = Self::builder(api_key);
        if let Some(shop_id) = shop_id.into() {
            builder = builder.with_shop_id(shop_id);
        }
        builder.build()
    }

    /// Creates a builder for configuring a client.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use swiftpay_rs::SwiftPayClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = SwiftPayClient::builder("APIdi7O4mSNzd5ZJiMLEWKw")
    ///     .with_shop_id(22)
    ///     .with_timeout(Duration::from_secs(30))
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder(api_key: impl Into<String>) -> SwiftPayClientBuilder {
        SwiftPayClientBuilder::new(api_key)
    }

    /// Returns the default shop id, if one was configured.
    pub fn shop_id(&self) -> Option<u32> {
        self.shop_id
    }

    /// Returns the gateway base URL this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Executes one API exchange and decodes the response envelope.
    ///
    /// GET requests carry the API key as the `token` query parameter; POST
    /// requests carry it in the JSON body under the same name. Failures are
    /// translated in fixed order: 404 first, then structured gateway error
    /// bodies on any status, then plain HTTP status errors, then envelope
    /// decoding errors.
    #[instrument(
        name = "swiftpay_call",
        skip_all,
        fields(http.method = %method, http.path = %path)
    )]
    async fn call_api<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        payload: Option<Value>,
    ) -> Result<ApiResponse<T>> {
        let url = self.endpoint_url(path)?;
        let mut request = self
            .http_client
            .request(method.clone(), url)
            .header(header::USER_AGENT, USER_AGENT);

        if method == Method::GET {
            request = request.query(&[("token", self.api_key.as_str())]);
        } else {
            let mut body = payload.unwrap_or_else(|| Value::Object(Map::new()));
            insert_field(&mut body, "token", Value::String(self.api_key.clone()));
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), "response received");

        if status == StatusCode::NOT_FOUND {
            return Err(SwiftPayError::MethodNotFound);
        }

        // Capture the status error before the body is consumed; a structured
        // gateway error body takes precedence over it.
        let status_error = response.error_for_status_ref().err();
        let bytes = response.bytes().await?;

        if let Ok(body) = serde_json::from_slice::<ApiErrorBody>(&bytes) {
            if !body.error.is_empty() {
                return Err(body.into());
            }
        }

        if let Some(error) = status_error {
            return Err(error.into());
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    fn endpoint_url(&self, path: &str) -> Result<Url> {
        // `Url::join` drops the last segment of a prefixed base URL, so the
        // URL is assembled as a string instead.
        let joined = format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path);
        Ok(Url::parse(&joined)?)
    }

    /// Resolves a per-call shop id against the configured default.
    ///
    /// The stored default is read, never written; an explicit argument wins
    /// over it and both are validated the same way.
    fn resolve_shop_id(&self, shop_id: impl Into<Option<u32>>) -> Result<u32> {
        match shop_id.into().or(self.shop_id) {
            Some(id) if id > 0 => Ok(id),
            _ => Err(SwiftPayError::InvalidParams(
                "shopId should be a number greater than 0".to_string(),
            )),
        }
    }

    /// Returns account information.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use swiftpay_rs::SwiftPayClient;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = SwiftPayClient::new("your-api-key", None)?;
    /// let account = client.account().await?.data;
    /// println!("{}: {} {:?}", account.name, account.balance, account.balance_currency);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn account(&self) -> Result<ApiResponse<Account>> {
        self.call_api(Method::POST, "account", None).await
    }

    /// Returns account turnover statistics.
    pub async fn stats(&self) -> Result<ApiResponse<Stats>> {
        self.call_api(Method::GET, "stats", None).await
    }

    /// Returns the list of created shops.
    pub async fn shops(&self) -> Result<ApiResponse<Vec<ShopSummary>>> {
        self.call_api(Method::GET, "shops", None).await
    }

    /// Returns details of one shop.
    ///
    /// # Arguments
    ///
    /// * `shop_id` - Shop id, or `None` to use the configured default.
    pub async fn shop(&self, shop_id: impl Into<Option<u32>>) -> Result<ApiResponse<Shop>> {
        let shop_id = self.resolve_shop_id(shop_id)?;
        self.call_api(Method::GET, &format!("shops/{shop_id}"), None)
            .await
    }

    /// Activates a shop.
    pub async fn shop_activate(
        &self,
        shop_id: impl Into<Option<u32>>,
    ) -> Result<ApiResponse<bool>> {
        let shop_id = self.resolve_shop_id(shop_id)?;
        self.call_api(Method::GET, &format!("shop/activate/{shop_id}"), None)
            .await
    }

    /// Deactivates a shop.
    pub async fn shop_deactivate(
        &self,
        shop_id: impl Into<Option<u32>>,
    ) -> Result<ApiResponse<bool>> {
        let shop_id = self.resolve_shop_id(shop_id)?;
        self.call_api(Method::GET, &format!("shop/deactivate/{shop_id}"), None)
            .await
    }

    /// Deletes a shop.
    pub async fn shop_delete(&self, shop_id: impl Into<Option<u32>>) -> Result<ApiResponse<bool>> {
        let shop_id = self.resolve_shop_id(shop_id)?;
        self.call_api(Method::GET, &format!("shop/delete/{shop_id}"), None)
            .await
    }

    /// Returns deposits matching the query.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use swiftpay_rs::types::{FilterOp, OrderField, OrdersQuery};
    /// use swiftpay_rs::SwiftPayClient;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = SwiftPayClient::new("your-api-key", None)?;
    /// let query = OrdersQuery::sorted_by(OrderField::CreatedAt)
    ///     .descending()
    ///     .with_filter(OrderField::Amount, FilterOp::Ge, "100")
    ///     .with_limit(25);
    /// for order in client.orders(&query).await?.data {
    ///     println!("#{} {} {:?}", order.id, order.amount, order.cur_name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn orders(&self, query: &OrdersQuery) -> Result<ApiResponse<Vec<Order>>> {
        self.call_api(Method::POST, "orders", Some(serde_json::to_value(query)?))
            .await
    }

    /// Checks a payment by its order token.
    ///
    /// # Arguments
    ///
    /// * `order_token` - Order token of at least 10 characters.
    pub async fn order(&self, order_token: &str) -> Result<ApiResponse<Value>> {
        if order_token.len() < 10 {
            return Err(SwiftPayError::InvalidParams(
                "orderToken required".to_string(),
            ));
        }
        self.call_api(Method::GET, &format!("order/{order_token}"), None)
            .await
    }

    /// Returns withdrawals matching the query.
    pub async fn payouts(&self, query: &PayoutsQuery) -> Result<ApiResponse<Vec<Payout>>> {
        self.call_api(Method::POST, "payouts", Some(serde_json::to_value(query)?))
            .await
    }

    /// Returns details of one payout.
    pub async fn payout(&self, payout_id: u64) -> Result<ApiResponse<Value>> {
        require_id(payout_id, "payoutId")?;
        self.call_api(Method::GET, &format!("payout/{payout_id}"), None)
            .await
    }

    /// Confirms a payout (when automatic payouts are disabled).
    pub async fn payout_accept(&self, payout_id: u64) -> Result<ApiResponse<Value>> {
        require_id(payout_id, "payoutId")?;
        self.call_api(Method::GET, &format!("payoutAccept/{payout_id}"), None)
            .await
    }

    /// Declines a payout (when automatic payouts are disabled).
    pub async fn payout_decline(&self, payout_id: u64) -> Result<ApiResponse<Value>> {
        require_id(payout_id, "payoutId")?;
        self.call_api(Method::GET, &format!("payoutDecline/{payout_id}"), None)
            .await
    }

    /// Returns the active payment systems and their commissions.
    pub async fn systems(&self) -> Result<ApiResponse<Vec<System>>> {
        self.call_api(Method::GET, "systems", None).await
    }

    /// Returns details of one order by its SwiftPay id.
    pub async fn order_by_id(&self, order_id: u64) -> Result<ApiResponse<Value>> {
        require_id(order_id, "orderId")?;
        self.call_api(Method::GET, &format!("orderById/{order_id}"), None)
            .await
    }

    /// Creates a payment link.
    ///
    /// # Arguments
    ///
    /// * `params` - Order parameters.
    /// * `shop_id` - Shop id, or `None` to use the configured default.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use swiftpay_rs::types::CreateOrderRequest;
    /// use swiftpay_rs::SwiftPayClient;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = SwiftPayClient::new("your-api-key", 22)?;
    /// let request = CreateOrderRequest::new(1001, 250.0).with_desc("Subscription");
    /// let created = client.create_order(&request, None).await?;
    /// println!("pay at {}", created.data.link);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_order(
        &self,
        params: &CreateOrderRequest,
        shop_id: impl Into<Option<u32>>,
    ) -> Result<ApiResponse<CreatedOrder>> {
        let shop_id = self.resolve_shop_id(shop_id)?;
        let mut body = serde_json::to_value(params)?;
        insert_field(&mut body, "shop_id", Value::from(shop_id));
        self.call_api(Method::POST, "createOrder", Some(body)).await
    }

    /// Creates a payout.
    ///
    /// # Arguments
    ///
    /// * `system_id` - Payment system to pay out through.
    /// * `amount` - Amount to withdraw, greater than zero.
    /// * `wallet` - Destination wallet.
    pub async fn create_payout(
        &self,
        system_id: SystemId,
        amount: f64,
        wallet: impl Into<String>,
    ) -> Result<ApiResponse<Value>> {
        if amount.is_nan() || amount <= 0.0 {
            return Err(SwiftPayError::InvalidParams(
                "amount should be a number greater than 0".to_string(),
            ));
        }
        let body = json!({
            "system_id": system_id,
            "amount": amount,
            "wallet": wallet.into(),
        });
        self.call_api(Method::POST, "createPayout", Some(body)).await
    }

    /// Creates a host-to-host payment.
    pub async fn pay_in_create(
        &self,
        params: &PayInRequest,
        shop_id: impl Into<Option<u32>>,
    ) -> Result<ApiResponse<Value>> {
        let shop_id = self.resolve_shop_id(shop_id)?;
        let mut body = serde_json::to_value(params)?;
        insert_field(&mut body, "shop_id", Value::from(shop_id));
        self.call_api(Method::POST, "payIn/create", Some(body)).await
    }

    /// Charges a card directly through the gateway.
    pub async fn gate_pay(
        &self,
        params: &GatePayRequest,
        shop_id: impl Into<Option<u32>>,
    ) -> Result<ApiResponse<Value>> {
        let shop_id = self.resolve_shop_id(shop_id)?;
        let mut body = serde_json::to_value(params)?;
        insert_field(&mut body, "shop_id", Value::from(shop_id));
        self.call_api(Method::POST, "gate/pay", Some(body)).await
    }

    /// Verifies the signature of an inbound payment notification with this
    /// client's API key.
    ///
    /// See [`crate::signature::verify_notification`] for the standalone form.
    pub fn verify_notification(&self, notification: &Notification) -> bool {
        signature::verify_notification(notification, &self.api_key)
    }
}

/// Rejects zero-valued identifiers before any request is built.
fn require_id(id: u64, name: &str) -> Result<()> {
    if id == 0 {
        return Err(SwiftPayError::InvalidParams(format!(
            "{name} should be a number greater than 0"
        )));
    }
    Ok(())
}

fn insert_field(body: &mut Value, key: &str, value: Value) {
    if let Value::Object(map) = body {
        map.insert(key.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with_shop(shop_id: impl Into<Option<u32>>) -> SwiftPayClient {
        SwiftPayClient::new("APIdi7O4mSNzd5ZJiMLEWKw", shop_id).unwrap()
    }

    fn invalid_params_message<T: std::fmt::Debug>(result: Result<T>) -> String {
        match result {
            Err(SwiftPayError::InvalidParams(message)) => message,
            other => panic!("expected InvalidParams, got {other:?}"),
        }
    }

    #[test]
    fn test_client_defaults() {
        let client = client_with_shop(22);
        assert_eq!(client.shop_id(), Some(22));
        assert_eq!(client.base_url().as_str(), "https://api.swiftpay.store/");
    }

    #[test]
    fn test_builder_overrides() {
        let client = SwiftPayClient::builder("key-of-any-length")
            .with_base_url("http://localhost:8080")
            .with_timeout(Duration::from_secs(3))
            .build()
            .unwrap();

        assert_eq!(client.shop_id(), None);
        assert_eq!(client.base_url().as_str(), "http://localhost:8080/");
    }

    #[test]
    fn test_builder_rejects_bad_base_url() {
        let result = SwiftPayClient::builder("key").with_base_url("not a url").build();
        assert!(matches!(result, Err(SwiftPayError::UrlParseError(_))));
    }

    #[test]
    fn test_endpoint_url_joins_relative_paths() {
        let client = client_with_shop(None);
        assert_eq!(
            client.endpoint_url("shops/22").unwrap().as_str(),
            "https://api.swiftpay.store/shops/22"
        );

        let local = SwiftPayClient::builder("key")
            .with_base_url("http://localhost:8080/gateway/")
            .build()
            .unwrap();
        assert_eq!(
            local.endpoint_url("payIn/create").unwrap().as_str(),
            "http://localhost:8080/gateway/payIn/create"
        );
    }

    #[test]
    fn test_require_id() {
        assert!(require_id(5, "payoutId").is_ok());

        let message = invalid_params_message(require_id(0, "orderId"));
        assert_eq!(message, "orderId should be a number greater than 0");
    }

    #[test]
    fn test_resolve_shop_id_prefers_explicit_argument() {
        let client = client_with_shop(22);
        assert_eq!(client.resolve_shop_id(7).unwrap(), 7);
        assert_eq!(client.resolve_shop_id(None).unwrap(), 22);
        // Resolution never writes the stored default back.
        assert_eq!(client.shop_id(), Some(22));
    }

    #[test]
    fn test_resolve_shop_id_without_default() {
        let client = client_with_shop(None);
        let message = invalid_params_message(client.resolve_shop_id(None));
        assert_eq!(message, "shopId should be a number greater than 0");
    }

    #[test]
    fn test_resolve_shop_id_rejects_explicit_zero() {
        // An explicit 0 is invalid, not a request for the default.
        let client = client_with_shop(22);
        let message = invalid_params_message(client.resolve_shop_id(0));
        assert_eq!(message, "shopId should be a number greater than 0");
    }

    #[tokio::test]
    async fn test_order_rejects_short_token() {
        let client = client_with_shop(None);
        for token in ["", "short", "123456789"] {
            let message = invalid_params_message(client.order(token).await);
            assert_eq!(message, "orderToken required");
        }
    }

    #[tokio::test]
    async fn test_create_payout_rejects_non_positive_amount() {
        let client = client_with_shop(None);
        for amount in [0.0, -5.0, f64::NAN] {
            let message = invalid_params_message(
                client.create_payout(SystemId::Card, amount, "wallet").await,
            );
            assert_eq!(message, "amount should be a number greater than 0");
        }
    }

    #[tokio::test]
    async fn test_shop_methods_require_some_id() {
        let client = client_with_shop(None);
        let message = invalid_params_message(client.shop(None).await);
        assert_eq!(message, "shopId should be a number greater than 0");

        let message = invalid_params_message(client.shop_activate(0).await);
        assert_eq!(message, "shopId should be a number greater than 0");
    }

    #[test]
    fn test_insert_field_overwrites_existing_key() {
        let mut body = json!({"amount": 10, "token": "stale"});
        insert_field(&mut body, "token", Value::String("fresh".to_string()));
        assert_eq!(body["token"], "fresh");
        assert_eq!(body["amount"], 10);
    }

    #[test]
    fn test_user_agent_names_the_crate() {
        assert!(USER_AGENT.starts_with("swiftpay-rs/"));
    }
}
