//! Typed tool arguments.
//!
//! Each tool's JSON arguments deserialize into one of the `*Args` structs
//! below. `null` counts as absent for every optional field. Numeric fields
//! are lenient about representation: `42`, `42.0` and `"42"` are all the
//! integer 42, since MCP clients disagree about how to send numbers.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

use crate::rest::resources::ProductStatus;

/// Arguments of `list_products`.
#[derive(Debug, Default, Deserialize)]
pub struct ListProductsArgs {
    /// Total number of products to return.
    #[serde(default, deserialize_with = "non_negative_integer")]
    pub limit: Option<u64>,
}

/// Arguments of the tools addressing one product by ID.
#[derive(Debug, Default, Deserialize)]
pub struct ProductIdArgs {
    /// `None` when missing, `null`, `0` or an empty string.
    #[serde(default, deserialize_with = "product_id")]
    pub product_id: Option<u64>,
}

/// Scalar product fields shared by `create_product` and `update_product`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ProductFields {
    /// Product name.
    #[serde(default)]
    pub title: Option<String>,
    /// Description in HTML.
    #[serde(default)]
    pub body_html: Option<String>,
    /// Vendor name.
    #[serde(default)]
    pub vendor: Option<String>,
    /// Product type.
    #[serde(default)]
    pub product_type: Option<String>,
    /// Comma-separated tags.
    #[serde(default)]
    pub tags: Option<String>,
    /// Visibility status.
    #[serde(default)]
    pub status: Option<ProductStatus>,
}

/// Arguments of `create_product` and `update_product`.
#[derive(Debug, Default, Deserialize)]
pub struct ProductArgs {
    /// Target product for updates; ignored on create.
    #[serde(default, deserialize_with = "product_id")]
    pub product_id: Option<u64>,
    /// Scalar fields.
    #[serde(flatten)]
    pub fields: ProductFields,
    /// Variant records.
    #[serde(default, deserialize_with = "list")]
    pub variants: Vec<VariantArgs>,
    /// Option records.
    #[serde(default, deserialize_with = "list")]
    pub options: Vec<OptionArgs>,
    /// Image records.
    #[serde(default, deserialize_with = "list")]
    pub images: Vec<ImageArgs>,
}

/// A variant record. With an `id` it patches an existing variant.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct VariantArgs {
    /// Existing variant to patch.
    #[serde(default, deserialize_with = "non_negative_integer")]
    pub id: Option<u64>,
    /// Price; numbers are accepted and kept in decimal string form.
    #[serde(default, deserialize_with = "decimal_string")]
    pub price: Option<String>,
    /// Stock keeping unit.
    #[serde(default)]
    pub sku: Option<String>,
    /// Units in stock.
    #[serde(default, deserialize_with = "integer")]
    pub inventory_quantity: Option<i64>,
    /// Value of the first option.
    #[serde(default)]
    pub option1: Option<String>,
    /// Value of the second option.
    #[serde(default)]
    pub option2: Option<String>,
    /// Value of the third option.
    #[serde(default)]
    pub option3: Option<String>,
}

/// An option record. With an `id` it patches an existing option.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct OptionArgs {
    /// Existing option to patch.
    #[serde(default, deserialize_with = "non_negative_integer")]
    pub id: Option<u64>,
    /// Option name.
    #[serde(default)]
    pub name: Option<String>,
    /// Position among the product's options. Only read on create.
    #[serde(default, deserialize_with = "integer")]
    pub position: Option<i64>,
    /// Allowed values.
    #[serde(default)]
    pub values: Option<Vec<String>>,
}

/// An image record. With an `id` it patches an existing image.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ImageArgs {
    /// Existing image to patch.
    #[serde(default, deserialize_with = "non_negative_integer")]
    pub id: Option<u64>,
    /// Image URL.
    #[serde(default)]
    pub src: Option<String>,
    /// Alternative text.
    #[serde(default)]
    pub alt: Option<String>,
}

/// Integer given as a JSON number or a numeric string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Text(String),
    Other(Value),
}

impl RawNumber {
    fn into_i128<E: de::Error>(self) -> Result<Option<i128>, E> {
        match self {
            Self::Unsigned(n) => Ok(Some(i128::from(n))),
            Self::Signed(n) => Ok(Some(i128::from(n))),
            #[allow(clippy::cast_possible_truncation)]
            Self::Float(f) if f.fract() == 0.0 && f.abs() < 9.0e15 => Ok(Some(f as i128)),
            Self::Float(f) => Err(E::custom(format!("expected an integer, got {f}"))),
            Self::Text(s) if s.trim().is_empty() => Ok(None),
            Self::Text(s) => s
                .trim()
                .parse::<i128>()
                .map(Some)
                .map_err(|_| E::custom(format!("expected an integer, got '{s}'"))),
            Self::Other(Value::Null) => Ok(None),
            Self::Other(v) => Err(E::custom(format!("expected an integer, got {v}"))),
        }
    }
}

fn integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<RawNumber>::deserialize(deserializer)? else {
        return Ok(None);
    };
    raw.into_i128()?
        .map(|n| i64::try_from(n).map_err(|_| de::Error::custom(format!("{n} is out of range"))))
        .transpose()
}

fn non_negative_integer<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<RawNumber>::deserialize(deserializer)? else {
        return Ok(None);
    };
    raw.into_i128()?
        .map(|n| {
            u64::try_from(n)
                .map_err(|_| de::Error::custom(format!("expected a non-negative integer, got {n}")))
        })
        .transpose()
}

fn product_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(non_negative_integer(deserializer)?.filter(|id| *id != 0))
}

fn decimal_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "expected a decimal string, got {other}"
        ))),
    }
}

fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
