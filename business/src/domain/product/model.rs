use serde::{Deserialize, Deserializer, Serialize};

use super::errors::ProductError;
use crate::domain::shared::value_objects::{ProductId, UserId};

pub const DEFAULT_DESCRIPTION: &str = "new product description default value";
pub const DEFAULT_IMAGE_URL: &str = "https://picsum.photos/500/500";
pub const DEFAULT_PRICE: f64 = 2.0;
pub const DEFAULT_STOCK: u32 = 50;
pub const DEFAULT_DISCOUNT_PCT: f64 = 0.0;

/// A sellable catalog item as the storefront API returns it.
///
/// Decoding is lenient: `null` reads as the field's default and a
/// fractional stock is truncated, so one sloppy record does not fail the
/// whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "imageURL", default, deserialize_with = "null_as_default")]
    pub image_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(default, deserialize_with = "whole_count")]
    pub stock: u32,
    #[serde(rename = "isONdiscount", default, deserialize_with = "null_as_default")]
    pub is_on_discount: bool,
    /// Only meaningful while `is_on_discount` is set.
    #[serde(rename = "discountPct", default, deserialize_with = "null_as_default")]
    pub discount_pct: f64,
    #[serde(rename = "isHidden", default, deserialize_with = "null_as_default")]
    pub is_hidden: bool,
    #[serde(rename = "_createdBy", default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<UserId>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Any JSON number is accepted; `as` truncates, saturates and maps NaN to 0.
fn whole_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default() as u32)
}

/// Payload for creating a product. Everything but the name is optional
/// and gets filled with defaults by [`NewProductRequest::normalized`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewProductRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "imageURL", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    #[serde(rename = "isONdiscount", default, skip_serializing_if = "Option::is_none")]
    pub is_on_discount: Option<bool>,
    #[serde(rename = "discountPct", default, skip_serializing_if = "Option::is_none")]
    pub discount_pct: Option<f64>,
    #[serde(rename = "isHidden", default, skip_serializing_if = "Option::is_none")]
    pub is_hidden: Option<bool>,
    #[serde(rename = "_createdBy", default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<UserId>,
}

impl NewProductRequest {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ProductError> {
        if self.name.trim().is_empty() {
            return Err(ProductError::Validation { field: "Name" });
        }
        Ok(())
    }

    /// Replaces every missing or falsy optional field with its default and
    /// stamps the creator. Values that are already set and truthy are kept,
    /// so normalizing twice gives the same request.
    pub fn normalized(self, creator: &UserId) -> Self {
        Self {
            name: self.name,
            description: Some(
                non_empty(self.description).unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            ),
            image_url: Some(
                non_empty(self.image_url).unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string()),
            ),
            price: Some(non_zero(self.price).unwrap_or(DEFAULT_PRICE)),
            stock: Some(self.stock.filter(|s| *s != 0).unwrap_or(DEFAULT_STOCK)),
            is_on_discount: Some(self.is_on_discount.unwrap_or(false)),
            discount_pct: Some(non_zero(self.discount_pct).unwrap_or(DEFAULT_DISCOUNT_PCT)),
            is_hidden: Some(self.is_hidden.unwrap_or(false)),
            created_by: Some(creator.clone()),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

// NaN and zero both count as "not provided".
fn non_zero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

/// Partial update; only the fields that are set go over the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "imageURL", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    #[serde(rename = "isONdiscount", default, skip_serializing_if = "Option::is_none")]
    pub is_on_discount: Option<bool>,
    #[serde(rename = "discountPct", default, skip_serializing_if = "Option::is_none")]
    pub discount_pct: Option<f64>,
    #[serde(rename = "isHidden", default, skip_serializing_if = "Option::is_none")]
    pub is_hidden: Option<bool>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Body of a successful update. Servers do not always answer with the
/// updated document: a JSON `{"message": ...}` reply keeps its message and
/// any other body is kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UpdateResponse {
    Product(Product),
    Raw { message: String },
}

#[derive(Deserialize)]
struct MessageBody {
    message: String,
}

impl UpdateResponse {
    pub fn from_body(body: &str) -> Self {
        if let Ok(product) = serde_json::from_str::<Product>(body) {
            return UpdateResponse::Product(product);
        }
        let message = serde_json::from_str::<MessageBody>(body)
            .map(|reply| reply.message)
            .unwrap_or_else(|_| body.to_string());
        UpdateResponse::Raw { message }
    }
}

/// One element of the locally cached product list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CatalogEntry {
    Product(Product),
    /// Placeholder left by an update whose response could not be decoded.
    /// Replaced by the next successful fetch.
    Unconfirmed { id: ProductId, message: String },
}

impl CatalogEntry {
    pub fn id(&self) -> &ProductId {
        match self {
            CatalogEntry::Product(product) => &product.id,
            CatalogEntry::Unconfirmed { id, .. } => id,
        }
    }

    pub fn as_product(&self) -> Option<&Product> {
        match self {
            CatalogEntry::Product(product) => Some(product),
            CatalogEntry::Unconfirmed { .. } => None,
        }
    }

    pub fn from_update(id: &ProductId, response: UpdateResponse) -> Self {
        match response {
            UpdateResponse::Product(product) => CatalogEntry::Product(product),
            UpdateResponse::Raw { message } => CatalogEntry::Unconfirmed {
                id: id.clone(),
                message,
            },
        }
    }
}

impl From<Product> for CatalogEntry {
    fn from(product: Product) -> Self {
        CatalogEntry::Product(product)
    }
}
