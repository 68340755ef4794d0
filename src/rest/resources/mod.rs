//! REST resources used by the catalog.

mod product;

pub use product::{
    Product, ProductImage, ProductListParams, ProductOption, ProductStatus, ProductVariant,
};
