//! Core type definitions for the SwiftPay API.
//!
//! This module contains the response envelope, the request and response
//! shapes for every endpoint, and the inbound payment-notification payload.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope wrapping every successful SwiftPay response.
///
/// The gateway nests the endpoint-specific payload under `data`. Some
/// responses additionally carry a `status`/`desc` pair; both are preserved
/// when present.
///
/// # Examples
///
/// ```
/// use swiftpay_rs::types::ApiResponse;
///
/// let envelope: ApiResponse<bool> =
///     serde_json::from_str(r#"{"data":true}"#).unwrap();
/// assert!(envelope.data);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiResponse<T> {
    /// Endpoint-specific payload, returned verbatim.
    pub data: T,

    /// Optional response status label (e.g. `"success"`, `"info"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Optional response description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

/// Currencies supported by SwiftPay accounts and wallets.
///
/// Serialized as the uppercase currency code, which also makes the enum
/// usable as a JSON map key (see [`Account::wallets`]).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::upper_case_acronyms, missing_docs)]
pub enum Currency {
    BCH,
    BTC,
    DAI,
    ETH,
    EUR,
    LTC,
    RUB,
    UAH,
    USD,
    USDC,
}

/// Payment systems (rails) identified by fixed numeric ids.
///
/// Ids the gateway may introduce later are preserved as
/// [`SystemId::Other`] instead of failing deserialization.
///
/// # Examples
///
/// ```
/// use swiftpay_rs::types::SystemId;
///
/// assert_eq!(SystemId::Card.id(), 40);
/// assert_eq!(SystemId::from(99), SystemId::Other(99));
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(from = "u32", into = "u32")]
pub enum SystemId {
    /// Bank cards (id 40).
    Card,
    /// QIWI wallet (id 41).
    Qiwi,
    /// Bank cards, trusted tier (id 42).
    CardTrusted,
    /// Bank transfers (id 43).
    CardTransfer,
    /// Bank cards in UAH (id 44).
    CardUah,
    /// USDT Tether TRC-20 (id 45).
    UsdtTrc20,
    /// Any id not covered by a named variant.
    Other(u32),
}

impl SystemId {
    /// Returns the numeric id the gateway uses for this system.
    pub fn id(self) -> u32 {
        self.into()
    }
}

impl From<u32> for SystemId {
    fn from(id: u32) -> Self {
        match id {
            40 => SystemId::Card,
            41 => SystemId::Qiwi,
            42 => SystemId::CardTrusted,
            43 => SystemId::CardTransfer,
            44 => SystemId::CardUah,
            45 => SystemId::UsdtTrc20,
            other => SystemId::Other(other),
        }
    }
}

impl From<SystemId> for u32 {
    fn from(id: SystemId) -> u32 {
        match id {
            SystemId::Card => 40,
            SystemId::Qiwi => 41,
            SystemId::CardTrusted => 42,
            SystemId::CardTransfer => 43,
            SystemId::CardUah => 44,
            SystemId::UsdtTrc20 => 45,
            SystemId::Other(other) => other,
        }
    }
}

/// Payment outcome reported in notifications.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentStatus {
    /// The payment completed (status code 1).
    Paid,
    /// The payment was rejected (status code 2).
    Rejected,
    /// Any status value this crate does not know about.
    #[serde(other)]
    Unknown,
}

/// Status block carried by payment notifications.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StatusInfo {
    /// Numeric status code.
    pub code: i64,
    /// Status value as a string.
    pub value: PaymentStatus,
}

impl StatusInfo {
    /// Returns `true` if the status reports a completed payment.
    pub fn is_paid(&self) -> bool {
        self.value == PaymentStatus::Paid
    }
}

/// Account information returned by the `account` endpoint.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Account {
    /// Account id.
    pub id: u32,

    /// Account holder name.
    pub name: String,

    /// Current balance in the account currency.
    pub balance: f64,

    /// Currency of the main balance.
    #[serde(rename = "balanceCurrency")]
    pub balance_currency: Currency,

    /// Per-currency wallet balances.
    pub wallets: HashMap<Currency, f64>,
}

/// Turnover amounts for one statistics period.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StatsEntry {
    /// Total deposited during the period.
    pub add: f64,
    /// Total withdrawn during the period.
    pub sub: f64,
}

/// Account statistics returned by the `stats` endpoint.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Stats {
    /// Turnover for today.
    pub today: StatsEntry,
    /// Turnover for yesterday.
    pub yesterday: StatsEntry,
    /// Turnover for the current month.
    pub month: StatsEntry,
    /// Turnover for the current year.
    pub year: StatsEntry,
}

/// One entry of the merchant list returned by the `shops` endpoint.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ShopSummary {
    /// Shop id.
    pub id: u32,
    /// Shop name.
    pub name: String,
    /// Shop site URL.
    pub url: String,
    /// Verification flag.
    pub verified: u32,
    /// Balance available for P2P operations.
    pub p2p_balance: f64,
}

/// Commission entry for a payment system available to a shop.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ShopSystem {
    /// System id.
    pub id: SystemId,
    /// System display name.
    pub name: String,
    /// Deposit commission percentage.
    pub commission: f64,
}

/// Full merchant details returned by `shops/{id}`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Shop {
    /// Shop id.
    pub id: u32,

    /// Shop name.
    pub name: String,

    /// Shop site URL.
    pub url: String,

    /// Verification flag.
    pub verified: u32,

    /// Balance available for P2P operations.
    pub p2p_balance: f64,

    /// Deposit commission percentage.
    pub commission: f64,

    /// URL the payer is sent to after a successful payment.
    pub url_success: String,

    /// URL the payer is redirected to after payment.
    pub url_redirect: String,

    /// Shop payment token.
    pub token: String,

    /// P2P notification settings; shape not documented by the gateway.
    pub p2p_notify: Option<Value>,

    /// P2P up-income flag.
    pub p2p_upincome: u32,

    /// Ids of the systems enabled for this shop.
    pub systems: Vec<SystemId>,

    /// Every system available to the shop with its commission.
    #[serde(rename = "allSystems")]
    pub all_systems: Vec<ShopSystem>,

    /// Per-system balances; shape not documented by the gateway.
    pub balances: Option<Value>,
}

/// Sort direction for list queries.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

/// Comparison operator usable in list-query filters.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    /// Equal.
    #[serde(rename = "=")]
    Eq,
    /// Greater than.
    #[serde(rename = ">")]
    Gt,
    /// Less than.
    #[serde(rename = "<")]
    Lt,
    /// Greater than or equal.
    #[serde(rename = ">=")]
    Ge,
    /// Less than or equal.
    #[serde(rename = "<=")]
    Le,
    /// Not equal.
    #[serde(rename = "!=")]
    Ne,
}

/// Order-list fields usable for sorting and filtering.
///
/// The gateway refuses to sort by `email` and `status`; they remain valid
/// filter fields.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum OrderField {
    Id,
    Amount,
    OrderId,
    CreatedAt,
    PaidAt,
    ShopId,
    Email,
    Status,
}

/// Payout-list fields usable for sorting and filtering.
///
/// The gateway refuses to sort by `status`; it remains a valid filter field.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum PayoutField {
    Id,
    Amount,
    SystemId,
    Wallet,
    CreatedAt,
    PaidAt,
    Api,
    Status,
}

/// One filter condition of a list query.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Filter<F> {
    /// Field the condition applies to.
    pub field: F,

    /// Comparison operator.
    #[serde(rename = "type")]
    pub op: FilterOp,

    /// Value to compare against, always sent as a string.
    pub value: String,
}

/// Sort/filter/pagination parameters for the `orders` and `payouts`
/// endpoints.
///
/// `F` is the field enum of the listed resource ([`OrderField`] or
/// [`PayoutField`]). Filters are passed through to the gateway unmodified;
/// an empty filter list selects all records.
///
/// # Examples
///
/// ```
/// use swiftpay_rs::types::{FilterOp, ListQuery, OrderField};
///
/// let query = ListQuery::sorted_by(OrderField::CreatedAt)
///     .descending()
///     .with_filter(OrderField::Amount, FilterOp::Ge, "100")
///     .with_limit(50);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ListQuery<F> {
    /// Field to sort by.
    pub sort: F,

    /// Sort direction; the gateway default applies when omitted.
    #[serde(rename = "sortType", skip_serializing_if = "Option::is_none")]
    pub sort_type: Option<SortDirection>,

    /// Filter conditions; an empty list selects all records.
    pub data: Vec<Filter<F>>,

    /// Number of records to return, between 25 and 250.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Offset into the result set. With `limit = 25`, `offset = 25` is the
    /// second page, `offset = 50` the third.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl<F> ListQuery<F> {
    /// Creates a query sorted by the given field with no filters.
    pub fn sorted_by(field: F) -> Self {
        ListQuery {
            sort: field,
            sort_type: None,
            data: Vec::new(),
            limit: None,
            offset: None,
        }
    }

    /// Sorts ascending.
    pub fn ascending(mut self) -> Self {
        self.sort_type = Some(SortDirection::Asc);
        self
    }

    /// Sorts descending.
    pub fn descending(mut self) -> Self {
        self.sort_type = Some(SortDirection::Desc);
        self
    }

    /// Adds a filter condition.
    pub fn with_filter(mut self, field: F, op: FilterOp, value: impl Into<String>) -> Self {
        self.data.push(Filter {
            field,
            op,
            value: value.into(),
        });
        self
    }

    /// Sets the page size (25 to 250).
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the offset into the result set.
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }
}

/// Query over the order list.
pub type OrdersQuery = ListQuery<OrderField>;

/// Query over the payout list.
pub type PayoutsQuery = ListQuery<PayoutField>;

/// One deposit returned by the `orders` endpoint.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Order {
    /// Order id in the SwiftPay database.
    pub id: u64,

    /// Shop the order belongs to.
    pub shop_id: u32,

    /// Support ticket attached to the order, if any.
    pub ticket: Option<Value>,

    /// Order amount.
    pub amount: f64,

    /// Numeric status code (1 paid, 2 rejected).
    pub status: i64,

    /// Amount in the order currency.
    pub amount_in_cur: f64,

    /// Numeric currency id.
    pub cur: i64,

    /// Currency code.
    pub cur_name: Currency,

    /// Creation timestamp, gateway-formatted.
    pub created_at: String,

    /// Payment timestamp, if paid.
    pub paid_at: Option<String>,

    /// Payer email.
    pub email: String,

    /// Order description.
    pub description: Option<String>,

    /// Gateway processing log.
    pub log: String,

    /// Order token used for payment-status lookups.
    pub token: String,

    /// Merchant-supplied order id.
    pub order_id: String,

    /// Status of the attached ticket, if any.
    pub ticket_status: Option<Value>,
}

/// One withdrawal returned by the `payouts` endpoint.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Payout {
    /// Payout id in the SwiftPay database.
    pub id: u64,

    /// Payment system the payout goes through.
    pub system_id: SystemId,

    /// Payout amount.
    pub amount: f64,

    /// Amount in the payout currency.
    pub amount_in_cur: f64,

    /// Numeric currency id.
    pub cur: i64,

    /// Currency code.
    pub cur_name: Currency,

    /// Destination wallet.
    pub wallet: String,

    /// Creation timestamp, gateway-formatted.
    pub created_at: String,

    /// Completion timestamp, if completed.
    pub paid_at: Option<String>,

    /// Numeric status code.
    pub status: i64,

    /// Whether the payout was created through the API.
    pub api: i64,

    /// USDT equivalent.
    pub usdt: f64,
}

/// One payment system returned by the `systems` endpoint.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct System {
    /// System id.
    pub id: SystemId,

    /// System display name.
    pub name: String,

    /// Payout commission percentage.
    pub payout_commission: f64,

    /// Fixed payout commission.
    pub payout_fixed_commission: f64,

    /// Regular expression the destination wallet must match.
    pub regexp: String,
}

/// Parameters for creating a payment link via `createOrder`.
///
/// # Examples
///
/// ```
/// use swiftpay_rs::types::CreateOrderRequest;
///
/// let request = CreateOrderRequest::new(1001, 250.0)
///     .with_desc("Subscription renewal");
/// ```
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateOrderRequest {
    /// Order id in the merchant's own system. Must be unique.
    pub order_id: i64,

    /// Amount to charge.
    pub amount: f64,

    /// Optional order description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,

    /// Optional payload echoed back in the payment notification.
    /// At most 5 fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<HashMap<String, Value>>,
}

impl CreateOrderRequest {
    /// Creates a request with the required fields only.
    pub fn new(order_id: i64, amount: f64) -> Self {
        CreateOrderRequest {
            order_id,
            amount,
            desc: None,
            data: None,
        }
    }

    /// Sets the order description.
    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    /// Sets the payload echoed back in the payment notification.
    pub fn with_data(mut self, data: HashMap<String, Value>) -> Self {
        self.data = Some(data);
        self
    }
}

/// Merchant-side details echoed back by `createOrder`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreatedOrderInfo {
    /// Order id in the merchant's own system.
    pub order_id: String,

    /// Amount, rendered as a string by the gateway.
    pub amount: String,

    /// Payload supplied at creation time.
    #[serde(default)]
    pub data: HashMap<String, Value>,
}

/// Payment link returned by `createOrder`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreatedOrder {
    /// Order id in the SwiftPay database.
    pub id: u64,

    /// Payment link to hand to the payer.
    pub link: String,

    /// Echo of the creation parameters.
    pub info: CreatedOrderInfo,
}

/// Parameters for host-to-host payment creation via `payIn/create`.
///
/// The gateway documents this endpoint only partially; fields beyond the
/// typed ones travel in [`PayInRequest::extra`] and are serialized at the
/// top level of the request body.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PayInRequest {
    /// Order id in the merchant's own system. Must be unique.
    pub order_id: i64,

    /// Amount to charge.
    pub amount: f64,

    /// Payment system to charge through.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_id: Option<SystemId>,

    /// Payer email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Optional order description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,

    /// Additional gateway-specific fields, flattened into the body.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl PayInRequest {
    /// Creates a request with the required fields only.
    pub fn new(order_id: i64, amount: f64) -> Self {
        PayInRequest {
            order_id,
            amount,
            system_id: None,
            email: None,
            desc: None,
            extra: HashMap::new(),
        }
    }
}

/// Parameters for charging a card directly via `gate/pay`.
///
/// Card credentials are gateway-specific and travel in
/// [`GatePayRequest::extra`], flattened into the body.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GatePayRequest {
    /// Order id in the merchant's own system. Must be unique.
    pub order_id: i64,

    /// Amount to charge.
    pub amount: f64,

    /// Payment system to charge through.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_id: Option<SystemId>,

    /// Payer email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Optional order description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,

    /// Additional gateway-specific fields, flattened into the body.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl GatePayRequest {
    /// Creates a request with the required fields only.
    pub fn new(order_id: i64, amount: f64) -> Self {
        GatePayRequest {
            order_id,
            amount,
            system_id: None,
            email: None,
            desc: None,
            extra: HashMap::new(),
        }
    }
}

/// Inbound payment notification delivered to the merchant's webhook.
///
/// The `sign` field authenticates the notification; validate it with
/// [`crate::signature::verify_notification`] before trusting the payload.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Notification {
    /// Signature over `order_id`, `amount`, the API key, and `shop_id`.
    pub sign: String,

    /// Deposit id in the SwiftPay database.
    pub id: u64,

    /// Payment system the deposit came through.
    pub system_id: SystemId,

    /// Order id in the merchant's own system.
    pub order_id: String,

    /// Shop the deposit belongs to.
    pub shop_id: u32,

    /// Deposit amount.
    pub amount: f64,

    /// Amount in the deposit currency.
    pub amount_in_cur: f64,

    /// Numeric currency id.
    pub cur: i64,

    /// Gateway fee.
    pub gate_fee: f64,

    /// Payment status.
    pub status: StatusInfo,

    /// Creation timestamp, gateway-formatted.
    pub created_at: String,

    /// Payment timestamp, gateway-formatted.
    pub paid_at: String,

    /// Payer email.
    pub email: String,

    /// Order description.
    pub description: Option<String>,

    /// Payload supplied when the order was created.
    #[serde(default)]
    pub data: Option<Value>,

    /// SwiftPay commission for the transaction.
    pub commission: f64,

    /// Card mask, e.g. `427638******3007`.
    pub card_mask: Option<String>,

    /// Payer phone number.
    pub phone: Option<String>,

    /// Order token.
    pub token: String,

    /// Notification hash.
    pub hash: String,
}
