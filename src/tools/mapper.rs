//! Conversions between tool arguments, products and tool output.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::rest::resources::{
    Product, ProductImage, ProductOption, ProductStatus, ProductVariant,
};
use crate::tools::args::ProductFields;
use crate::tools::reconcile::{overwrite, Patch};
use crate::tools::request::NewProduct;

impl ProductFields {
    /// Copies every field that is present onto `product`.
    pub fn apply_to(&self, product: &mut Product) {
        overwrite(&mut product.title, &self.title);
        overwrite(&mut product.body_html, &self.body_html);
        overwrite(&mut product.vendor, &self.vendor);
        overwrite(&mut product.product_type, &self.product_type);
        overwrite(&mut product.tags, &self.tags);
        overwrite(&mut product.status, &self.status);
    }
}

/// Builds the product to send for `create_product`.
///
/// Options without an explicit position are numbered from 1 in the order
/// given.
#[must_use]
pub fn new_product(request: &NewProduct) -> Product {
    let mut product = Product::default();
    request.fields.apply_to(&mut product);

    product.variants = request
        .variants
        .iter()
        .map(|args| {
            let mut variant = ProductVariant::default();
            args.apply_to(&mut variant);
            variant
        })
        .collect();

    product.options = request
        .options
        .iter()
        .zip(1_i64..)
        .map(|(args, index)| {
            let mut option = ProductOption::default();
            args.apply_to(&mut option);
            option.position = Some(args.position.unwrap_or(index));
            option
        })
        .collect();

    product.images = request
        .images
        .iter()
        .map(|args| {
            let mut image = ProductImage::default();
            args.apply_to(&mut image);
            image
        })
        .collect();

    product
}

/// The lightweight projection returned by `list_products`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProductSummary {
    /// Product ID.
    pub id: Option<u64>,
    /// Product name.
    pub title: Option<String>,
    /// Vendor name.
    pub vendor: Option<String>,
    /// Product type.
    pub product_type: Option<String>,
    /// Creation time, in the shop's offset.
    pub created_at: Option<DateTime<FixedOffset>>,
    /// Last update time, in the shop's offset.
    pub updated_at: Option<DateTime<FixedOffset>>,
    /// Visibility status; `null` when Shopify sent one this crate does not know.
    pub status: Option<ProductStatus>,
    /// Number of variants.
    pub variants_count: usize,
    /// Number of images.
    pub images_count: usize,
}

impl From<&Product> for ProductSummary {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            vendor: product.vendor.clone(),
            product_type: product.product_type.clone(),
            created_at: product.created_at,
            updated_at: product.updated_at,
            status: product.status,
            variants_count: product.variants.len(),
            images_count: product.images.len(),
        }
    }
}

/// The full projection returned by `get_product`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProductDetail {
    /// Product ID.
    pub id: Option<u64>,
    /// Product name.
    pub title: Option<String>,
    /// Description in HTML.
    pub body_html: Option<String>,
    /// Vendor name.
    pub vendor: Option<String>,
    /// Product type.
    pub product_type: Option<String>,
    /// Creation time, in the shop's offset.
    pub created_at: Option<DateTime<FixedOffset>>,
    /// Last update time, in the shop's offset.
    pub updated_at: Option<DateTime<FixedOffset>>,
    /// Visibility status.
    pub status: Option<ProductStatus>,
    /// Comma-separated tags.
    pub tags: Option<String>,
    /// Every variant, in Shopify's order.
    pub variants: Vec<VariantDetail>,
    /// Every option, in Shopify's order.
    pub options: Vec<OptionDetail>,
    /// Every image, in Shopify's order.
    pub images: Vec<ImageDetail>,
}

/// One variant inside a [`ProductDetail`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VariantDetail {
    /// Variant ID.
    pub id: Option<u64>,
    /// Title derived from the option values.
    pub title: Option<String>,
    /// Price as Shopify formats it.
    pub price: Option<String>,
    /// Stock keeping unit.
    pub sku: Option<String>,
    /// Units in stock.
    pub inventory_quantity: Option<i64>,
    /// Value for the first option.
    pub option1: Option<String>,
    /// Value for the second option.
    pub option2: Option<String>,
    /// Value for the third option.
    pub option3: Option<String>,
}

/// One option inside a [`ProductDetail`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OptionDetail {
    /// Option ID.
    pub id: Option<u64>,
    /// Option name, e.g. `Size`.
    pub name: Option<String>,
    /// Allowed values.
    pub values: Option<Vec<String>>,
}

/// One image inside a [`ProductDetail`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ImageDetail {
    /// Image ID.
    pub id: Option<u64>,
    /// Image URL.
    pub src: Option<String>,
    /// Alternative text.
    pub alt: Option<String>,
}

impl From<&Product> for ProductDetail {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            body_html: product.body_html.clone(),
            vendor: product.vendor.clone(),
            product_type: product.product_type.clone(),
            created_at: product.created_at,
            updated_at: product.updated_at,
            status: product.status,
            tags: product.tags.clone(),
            variants: product
                .variants
                .iter()
                .map(|v| VariantDetail {
                    id: v.id,
                    title: v.title.clone(),
                    price: v.price.clone(),
                    sku: v.sku.clone(),
                    inventory_quantity: v.inventory_quantity,
                    option1: v.option1.clone(),
                    option2: v.option2.clone(),
                    option3: v.option3.clone(),
                })
                .collect(),
            options: product
                .options
                .iter()
                .map(|o| OptionDetail {
                    id: o.id,
                    name: o.name.clone(),
                    values: o.values.clone(),
                })
                .collect(),
            images: product
                .images
                .iter()
                .map(|i| ImageDetail {
                    id: i.id,
                    src: i.src.clone(),
                    alt: i.alt.clone(),
                })
                .collect(),
        }
    }
}

/// Result of `create_product` and `update_product`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MutationResult {
    /// Always `true`; failures are reported as errors instead.
    pub success: bool,
    /// ID of the saved product.
    pub product_id: Option<u64>,
    /// Human-readable confirmation.
    pub message: String,
}

impl MutationResult {
    /// `"Product '{title}' has been {verb}"` for the saved product.
    #[must_use]
    pub fn new(product: &Product, verb: &str) -> Self {
        Self {
            success: true,
            product_id: product.id,
            message: format!(
                "Product '{}' has been {verb}",
                product.title.as_deref().unwrap_or_default()
            ),
        }
    }
}

/// Result of `delete_product`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DeleteResult {
    /// Always `true`; failures are reported as errors instead.
    pub success: bool,
    /// Human-readable confirmation.
    pub message: String,
}

impl DeleteResult {
    /// `"Product '{title}' has been deleted"`, with the title fetched before
    /// deletion.
    #[must_use]
    pub fn new(title: Option<&str>) -> Self {
        Self {
            success: true,
            message: format!("Product '{}' has been deleted", title.unwrap_or_default()),
        }
    }
}
