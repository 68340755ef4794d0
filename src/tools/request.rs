//! Validated tool requests.
//!
//! [`ToolRequest::parse`] turns a tool name and its raw JSON arguments into
//! one typed variant per tool. All argument checks happen here, so a request
//! that parses can be executed without further validation and a request that
//! does not parse never reaches the catalog.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::tools::args::{
    ImageArgs, ListProductsArgs, OptionArgs, ProductArgs, ProductFields, ProductIdArgs,
    VariantArgs,
};
use crate::tools::{ToolError, ToolName};

/// Number of products `list_products` returns when no limit is given.
pub const DEFAULT_LIST_LIMIT: usize = 50;

/// A product to create. `fields.title` is always a non-empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewProduct {
    /// Scalar fields.
    pub fields: ProductFields,
    /// Variants, in order.
    pub variants: Vec<VariantArgs>,
    /// Options, in order; each has a name and values.
    pub options: Vec<OptionArgs>,
    /// Images, in order; each has a source URL.
    pub images: Vec<ImageArgs>,
}

/// Changes to an existing product.
///
/// Sub-resource records with an `id` patch the matching existing record;
/// records without one are appended and carry every field a new record needs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductUpdate {
    /// Product to update.
    pub product_id: u64,
    /// Scalar fields to overwrite.
    pub fields: ProductFields,
    /// Variant records.
    pub variants: Vec<VariantArgs>,
    /// Option records.
    pub options: Vec<OptionArgs>,
    /// Image records.
    pub images: Vec<ImageArgs>,
}

/// A validated call to one of the catalog tools.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToolRequest {
    /// `list_products`: up to `limit` product summaries.
    ListProducts {
        /// Total number of products to return.
        limit: usize,
    },
    /// `get_product`: one product with its sub-resources.
    GetProduct {
        /// Product to fetch.
        product_id: u64,
    },
    /// `create_product`
    CreateProduct(NewProduct),
    /// `update_product`
    UpdateProduct(ProductUpdate),
    /// `delete_product`
    DeleteProduct {
        /// Product to delete.
        product_id: u64,
    },
}

impl ToolRequest {
    /// Parses and validates a tool call.
    ///
    /// `arguments` may be `null`, which is read as an empty object.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::UnknownTool`] for names outside the five tools and
    /// [`ToolError::InvalidArgument`] for missing or malformed arguments.
    pub fn parse(name: &str, arguments: Value) -> Result<Self, ToolError> {
        let tool =
            ToolName::from_name(name).ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;

        let arguments = match arguments {
            Value::Null => Value::Object(serde_json::Map::new()),
            Value::Object(map) => Value::Object(map),
            other => {
                return Err(ToolError::InvalidArgument(format!(
                    "arguments must be an object, got {other}"
                )))
            }
        };

        match tool {
            ToolName::ListProducts => {
                let args: ListProductsArgs = decode(arguments)?;
                let limit = args.limit.map_or(Ok(DEFAULT_LIST_LIMIT), |limit| {
                    usize::try_from(limit)
                        .map_err(|_| ToolError::InvalidArgument(format!("limit {limit} is too large")))
                })?;
                Ok(Self::ListProducts { limit })
            }
            ToolName::GetProduct => Ok(Self::GetProduct {
                product_id: required_product_id(decode::<ProductIdArgs>(arguments)?.product_id)?,
            }),
            ToolName::DeleteProduct => Ok(Self::DeleteProduct {
                product_id: required_product_id(decode::<ProductIdArgs>(arguments)?.product_id)?,
            }),
            ToolName::CreateProduct => {
                let args: ProductArgs = decode(arguments)?;
                if args.fields.title.as_deref().map_or(true, str::is_empty) {
                    return Err(ToolError::InvalidArgument("title is required".to_string()));
                }
                check_new_records(&args.options, &args.images, |_| true)?;
                Ok(Self::CreateProduct(NewProduct {
                    fields: args.fields,
                    variants: args.variants,
                    options: args.options,
                    images: args.images,
                }))
            }
            ToolName::UpdateProduct => {
                let args: ProductArgs = decode(arguments)?;
                let product_id = required_product_id(args.product_id)?;
                check_new_records(&args.options, &args.images, |id| id.is_none())?;
                Ok(Self::UpdateProduct(ProductUpdate {
                    product_id,
                    fields: args.fields,
                    variants: args.variants,
                    options: args.options,
                    images: args.images,
                }))
            }
        }
    }

    /// Returns which tool this request is for.
    #[must_use]
    pub const fn tool(&self) -> ToolName {
        match self {
            Self::ListProducts { .. } => ToolName::ListProducts,
            Self::GetProduct { .. } => ToolName::GetProduct,
            Self::CreateProduct(_) => ToolName::CreateProduct,
            Self::UpdateProduct(_) => ToolName::UpdateProduct,
            Self::DeleteProduct { .. } => ToolName::DeleteProduct,
        }
    }
}

fn decode<T: DeserializeOwned>(arguments: Value) -> Result<T, ToolError> {
    serde_json::from_value(arguments).map_err(|e| ToolError::InvalidArgument(e.to_string()))
}

fn required_product_id(product_id: Option<u64>) -> Result<u64, ToolError> {
    product_id.ok_or_else(|| ToolError::InvalidArgument("product_id is required".to_string()))
}

/// Records that will become new sub-resources must be complete: options need
/// a name and values, images need a source URL. `is_new` receives the
/// record's `id`.
fn check_new_records(
    options: &[OptionArgs],
    images: &[ImageArgs],
    is_new: impl Fn(Option<u64>) -> bool,
) -> Result<(), ToolError> {
    for (index, option) in options.iter().enumerate() {
        if !is_new(option.id) {
            continue;
        }
        if option.name.as_deref().map_or(true, str::is_empty) {
            return Err(ToolError::InvalidArgument(format!(
                "options[{index}].name is required"
            )));
        }
        if option.values.is_none() {
            return Err(ToolError::InvalidArgument(format!(
                "options[{index}].values is required"
            )));
        }
    }

    for (index, image) in images.iter().enumerate() {
        if is_new(image.id) && image.src.as_deref().map_or(true, str::is_empty) {
            return Err(ToolError::InvalidArgument(format!(
                "images[{index}].src is required"
            )));
        }
    }

    Ok(())
}
