//! Tool names, descriptions and input schemas.

use std::fmt;

use serde::Serialize;
use serde_json::{json, Value};

/// The five catalog tools.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToolName {
    /// `list_products`
    ListProducts,
    /// `get_product`
    GetProduct,
    /// `create_product`
    CreateProduct,
    /// `update_product`
    UpdateProduct,
    /// `delete_product`
    DeleteProduct,
}

impl ToolName {
    /// Every tool, in listing order.
    pub const ALL: [Self; 5] = [
        Self::ListProducts,
        Self::GetProduct,
        Self::CreateProduct,
        Self::UpdateProduct,
        Self::DeleteProduct,
    ];

    /// Looks a tool up by its wire name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.as_str() == name)
    }

    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ListProducts => "list_products",
            Self::GetProduct => "get_product",
            Self::CreateProduct => "create_product",
            Self::UpdateProduct => "update_product",
            Self::DeleteProduct => "delete_product",
        }
    }

    const fn description(self) -> &'static str {
        match self {
            Self::ListProducts => "Get product list",
            Self::GetProduct => "Get detailed product information",
            Self::CreateProduct => "Create a new product",
            Self::UpdateProduct => "Update a product",
            Self::DeleteProduct => "Delete a product",
        }
    }

    fn input_schema(self) -> Value {
        match self {
            Self::ListProducts => json!({
                "type": "object",
                "properties": {
                    "limit": {
                        "type": "integer",
                        "description": "Number of products to retrieve (maximum 250)",
                        "minimum": 1,
                        "maximum": 250,
                        "default": 50
                    }
                }
            }),
            Self::GetProduct | Self::DeleteProduct => json!({
                "type": "object",
                "properties": {
                    "product_id": product_id_schema()
                },
                "required": ["product_id"]
            }),
            Self::CreateProduct => {
                let mut properties = product_field_schemas(Some("active"));
                properties.insert("variants".into(), variants_schema(false));
                properties.insert("options".into(), options_schema(false));
                properties.insert("images".into(), images_schema(false));
                json!({
                    "type": "object",
                    "properties": properties,
                    "required": ["title"]
                })
            }
            Self::UpdateProduct => {
                let mut properties = serde_json::Map::new();
                properties.insert("product_id".into(), product_id_schema());
                properties.extend(product_field_schemas(None));
                properties.insert("variants".into(), variants_schema(true));
                properties.insert("options".into(), options_schema(true));
                properties.insert("images".into(), images_schema(true));
                json!({
                    "type": "object",
                    "properties": properties,
                    "required": ["product_id"]
                })
            }
        }
    }

    /// Builds the descriptor advertised to clients.
    #[must_use]
    pub fn definition(self) -> ToolDefinition {
        ToolDefinition {
            name: self.as_str().to_string(),
            description: self.description().to_string(),
            input_schema: self.input_schema(),
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tool as advertised by `tools/list`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    /// Wire name.
    pub name: String,
    /// Human-readable summary.
    pub description: String,
    /// JSON Schema of the arguments object.
    pub input_schema: Value,
}

/// Returns the descriptors of every tool.
#[must_use]
pub fn tool_definitions() -> Vec<ToolDefinition> {
    ToolName::ALL.into_iter().map(ToolName::definition).collect()
}

fn product_id_schema() -> Value {
    json!({"type": "integer", "description": "Product ID"})
}

fn product_field_schemas(default_status: Option<&str>) -> serde_json::Map<String, Value> {
    let mut status = json!({
        "type": "string",
        "description": "Status",
        "enum": ["active", "draft", "archived"]
    });
    if let (Some(default), Some(map)) = (default_status, status.as_object_mut()) {
        map.insert("default".into(), json!(default));
    }

    let mut properties = serde_json::Map::new();
    properties.insert("title".into(), json!({"type": "string", "description": "Product name"}));
    properties.insert(
        "body_html".into(),
        json!({"type": "string", "description": "Product description (HTML format)"}),
    );
    properties.insert("vendor".into(), json!({"type": "string", "description": "Vendor name"}));
    properties.insert(
        "product_type".into(),
        json!({"type": "string", "description": "Product type"}),
    );
    properties.insert(
        "tags".into(),
        json!({"type": "string", "description": "Tags (comma-separated)"}),
    );
    properties.insert("status".into(), status);
    properties
}

fn with_id(mut properties: Value, with_id: bool, description: &str) -> Value {
    if let (true, Some(map)) = (with_id, properties.as_object_mut()) {
        map.insert(
            "id".into(),
            json!({"type": "integer", "description": description}),
        );
    }
    properties
}

fn variants_schema(update: bool) -> Value {
    let properties = with_id(
        json!({
            "price": {"type": "string", "description": "Price"},
            "sku": {"type": "string", "description": "SKU"},
            "inventory_quantity": {"type": "integer", "description": "Inventory quantity"},
            "option1": {"type": "string", "description": "Option 1 value"},
            "option2": {"type": "string", "description": "Option 2 value"},
            "option3": {"type": "string", "description": "Option 3 value"}
        }),
        update,
        "Variant ID",
    );
    let mut items = json!({"type": "object", "properties": properties});
    if !update {
        items["required"] = json!(["price"]);
    }
    json!({"type": "array", "description": "Variants", "items": items})
}

fn options_schema(update: bool) -> Value {
    let mut properties = with_id(
        json!({
            "name": {"type": "string", "description": "Option name"},
            "values": {
                "type": "array",
                "description": "Option values",
                "items": {"type": "string"}
            }
        }),
        update,
        "Option ID",
    );
    if !update {
        properties["position"] = json!({"type": "integer", "description": "Option order"});
    }
    json!({
        "type": "array",
        "description": "Options",
        "items": {"type": "object", "properties": properties, "required": ["name", "values"]}
    })
}

fn images_schema(update: bool) -> Value {
    let properties = with_id(
        json!({
            "src": {"type": "string", "description": "Image URL"},
            "alt": {"type": "string", "description": "Alternative text"}
        }),
        update,
        "Image ID",
    );
    json!({
        "type": "array",
        "description": "Images",
        "items": {"type": "object", "properties": properties, "required": ["src"]}
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_tools_in_order() {
        let names: Vec<String> = tool_definitions().into_iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec![
                "list_products",
                "get_product",
                "create_product",
                "update_product",
                "delete_product"
            ]
        );
    }

    #[test]
    fn test_from_name_round_trips() {
        for tool in ToolName::ALL {
            assert_eq!(ToolName::from_name(tool.as_str()), Some(tool));
        }
        assert_eq!(ToolName::from_name("drop_database"), None);
    }

    #[test]
    fn test_required_arguments() {
        let required = |tool: ToolName| tool.definition().input_schema["required"].clone();

        assert_eq!(required(ToolName::GetProduct), json!(["product_id"]));
        assert_eq!(required(ToolName::UpdateProduct), json!(["product_id"]));
        assert_eq!(required(ToolName::DeleteProduct), json!(["product_id"]));
        assert_eq!(required(ToolName::CreateProduct), json!(["title"]));
        assert_eq!(required(ToolName::ListProducts), Value::Null);
    }

    #[test]
    fn test_update_records_accept_ids_and_create_records_do_not() {
        let create = ToolName::CreateProduct.definition().input_schema;
        let update = ToolName::UpdateProduct.definition().input_schema;

        assert!(create["properties"]["variants"]["items"]["properties"]["id"].is_null());
        assert_eq!(
            update["properties"]["variants"]["items"]["properties"]["id"]["type"],
            "integer"
        );
        assert_eq!(create["properties"]["status"]["default"], "active");
        assert!(update["properties"]["status"]["default"].is_null());
    }

    #[test]
    fn test_option_position_is_only_offered_on_create() {
        let create = ToolName::CreateProduct.definition().input_schema;
        let update = ToolName::UpdateProduct.definition().input_schema;

        assert_eq!(
            create["properties"]["options"]["items"]["properties"]["position"]["type"],
            "integer"
        );
        assert!(update["properties"]["options"]["items"]["properties"]["position"].is_null());
    }

    #[test]
    fn test_definition_serializes_input_schema_in_camel_case() {
        let value = serde_json::to_value(ToolName::GetProduct.definition()).unwrap();
        assert!(value.get("inputSchema").is_some());
        assert!(value.get("input_schema").is_none());
    }
}
