use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Product identifier.
///
/// Stored documents use either numeric or string ids. Matching is strict:
/// `1` and `"1"` are different products.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ProductId {
    Number(u64),
    Text(String),
}

impl ProductId {
    /// Interprets a raw JSON value as an id. Whole floats such as `1.0` name
    /// the same product as `1`. Values no stored product could carry
    /// (negative numbers, fractions, booleans, objects) yield `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n
                .as_u64()
                .or_else(|| n.as_f64().and_then(whole_u64))
                .map(ProductId::Number),
            Value::String(s) => Some(ProductId::Text(s.clone())),
            _ => None,
        }
    }
}

/// `f` as a `u64` when it is finite, non-negative, whole and in range.
pub(crate) fn whole_u64(f: f64) -> Option<u64> {
    // 2^64 is the first float past u64::MAX; `as` would saturate it.
    let in_range = f.is_finite() && f >= 0.0 && f < u64::MAX as f64;
    (in_range && f.fract() == 0.0).then_some(f as u64)
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{}", n),
            ProductId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl FromStr for ProductId {
    type Err = std::convert::Infallible;

    /// Digit-only input becomes a numeric id, anything else a text id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<u64>() {
            Ok(n) => ProductId::Number(n),
            Err(_) => ProductId::Text(s.to_string()),
        })
    }
}

impl From<u64> for ProductId {
    fn from(n: u64) -> Self {
        ProductId::Number(n)
    }
}

/// Non-negative price.
///
/// Keeps the JSON number exactly as read so rewriting the document leaves
/// `2499` as `2499` and `19.99` as `19.99`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "Number", into = "Number")]
#[schema(value_type = f64)]
pub struct Price(Number);

impl Price {
    pub fn as_f64(&self) -> f64 {
        self.0.as_f64().unwrap_or_default()
    }
}

impl TryFrom<Number> for Price {
    type Error = String;

    fn try_from(n: Number) -> Result<Self, Self::Error> {
        match n.as_f64() {
            Some(v) if v >= 0.0 => Ok(Price(n)),
            _ => Err(format!("price must be a non-negative number, got {}", n)),
        }
    }
}

impl From<Price> for Number {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl From<u64> for Price {
    fn from(n: u64) -> Self {
        Price(Number::from(n))
    }
}

/// A stocked product as persisted in the products document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier, stable across updates
    pub id: ProductId,
    /// Display name
    pub name: String,
    /// Unit price
    pub price: Price,
    /// Units on hand
    pub stock: u64,
    /// Stock level under which the product counts as low
    pub low_stock_threshold: u64,
    /// Optional image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Any further fields present in the document, written back untouched
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// `0 < stock < lowStockThreshold`
    pub fn is_low_stock(&self) -> bool {
        self.stock > 0 && self.stock < self.low_stock_threshold
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }

    /// Below threshold, out-of-stock included. Drives the card alert badge.
    pub fn is_critical(&self) -> bool {
        self.stock < self.low_stock_threshold
    }
}

/// Aggregate counts over a product list. Computed on demand, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InventoryStats {
    pub total: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
}

impl InventoryStats {
    pub fn from_products(products: &[Product]) -> Self {
        Self {
            total: products.len(),
            low_stock: products.iter().filter(|p| p.is_low_stock()).count(),
            out_of_stock: products.iter().filter(|p| p.is_out_of_stock()).count(),
        }
    }
}

/// Body of `POST /update-stock`.
///
/// Both fields stay raw JSON so a missing field, a non-numeric quantity and a
/// negative quantity can each be reported with their own message. `null`
/// counts as missing, and a body that is not a JSON object carries neither
/// field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStockRequest {
    #[schema(value_type = Option<Object>, example = 1)]
    pub id: Option<Value>,
    #[schema(value_type = Option<f64>, example = 12)]
    pub new_quantity: Option<Value>,
}

impl From<Value> for UpdateStockRequest {
    fn from(body: Value) -> Self {
        let Value::Object(mut fields) = body else {
            return Self::default();
        };
        let mut take = |key: &str| fields.remove(key).filter(|v| !v.is_null());

        Self {
            id: take("id"),
            new_quantity: take("newQuantity"),
        }
    }
}

impl UpdateStockRequest {
    pub fn new(id: &ProductId, new_quantity: u64) -> Self {
        let id = match id {
            ProductId::Number(n) => Value::from(*n),
            ProductId::Text(s) => Value::from(s.as_str()),
        };
        Self {
            id: Some(id),
            new_quantity: Some(Value::from(new_quantity)),
        }
    }
}

/// Success envelope: `{ "success": true, "data": ... }`.
///
/// Failures use the same shape with `data` absent and `error` set, see
/// [`axum_helpers::ErrorResponse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}
