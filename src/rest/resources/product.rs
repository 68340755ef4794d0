//! The Product resource and the sub-resources embedded in it.
//!
//! Variants, options and images travel inside the product body, so one PUT
//! of a [`Product`] commits the whole graph. Sub-resources serialize their
//! `id` when they have one, which tells Shopify to update that record in
//! place instead of creating a new one.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_mcp::rest::resources::{Product, ProductListParams};
//! use shopify_mcp::rest::RestResource;
//!
//! let page = Product::all(&client, Some(ProductListParams {
//!     limit: Some(50),
//!     ..Default::default()
//! })).await?;
//!
//! let mut product = Product::find(&client, 632_910_392).await?.into_inner();
//! product.title = Some("IPod Nano - 8GB".to_string());
//! let saved = product.save(&client).await?;
//! ```

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

use crate::rest::RestResource;

/// Whether a product is visible to customers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    /// Visible in the storefront.
    #[default]
    Active,
    /// Hidden and no longer sold.
    Archived,
    /// Hidden until published.
    Draft,
}

/// A product in a Shopify store.
///
/// Timestamps keep the offset Shopify sent them with, so they render back
/// exactly as the shop reports them.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Product {
    /// The unique identifier of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The name of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The description of the product in HTML format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,

    /// The name of the product's vendor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    /// A categorization for the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,

    /// The URL-friendly name of the product.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub handle: Option<String>,

    /// When the product was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<FixedOffset>>,

    /// When the product was last updated.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<FixedOffset>>,

    /// The status of the product. A status this crate does not know reads
    /// as `None`, so it is left untouched on save.
    #[serde(
        default,
        deserialize_with = "known_status",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<ProductStatus>,

    /// A comma-separated list of tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    /// The variants of the product.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<ProductVariant>,

    /// The options of the product (e.g., Size, Color).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ProductOption>,

    /// All images of the product.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<ProductImage>,
}

fn known_status<'de, D>(deserializer: D) -> Result<Option<ProductStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let status = match raw.as_str() {
        "active" => ProductStatus::Active,
        "archived" => ProductStatus::Archived,
        "draft" => ProductStatus::Draft,
        other => {
            tracing::debug!(status = other, "Unrecognized product status");
            return Ok(None);
        }
    };
    Ok(Some(status))
}

impl RestResource for Product {
    type Id = u64;
    type AllParams = ProductListParams;

    const NAME: &'static str = "Product";
    const PLURAL: &'static str = "products";

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

/// A variant embedded in a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductVariant {
    /// The unique identifier of the variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The ID of the product this variant belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// The title of the variant, derived from its option values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The price as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// The stock keeping unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// The position in the product's variant list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,

    /// Units in stock.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_quantity: Option<i64>,

    /// Value of the first option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option1: Option<String>,

    /// Value of the second option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option2: Option<String>,

    /// Value of the third option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option3: Option<String>,

    /// Read-only field.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<FixedOffset>>,

    /// Read-only field.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

/// A product option (e.g., Size, Color).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductOption {
    /// The unique identifier of the option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The ID of the product this option belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// The option name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The 1-based position among the product's options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,

    /// The allowed values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

/// An image attached to a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductImage {
    /// The unique identifier of the image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The ID of the product this image belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// The position in the product's image list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,

    /// The source URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    /// Alternative text for the image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,

    /// Read-only field.
    #[serde(skip_serializing)]
    pub width: Option<i64>,

    /// Read-only field.
    #[serde(skip_serializing)]
    pub height: Option<i64>,
}

/// Query parameters for listing products.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductListParams {
    /// Page size (Shopify caps this at 250).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Cursor from the previous page's `Link` header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
}
