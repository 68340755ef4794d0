//! The [`RestResource`] trait.
//!
//! A resource declares its name, its URL plural and how to read its ID, and
//! gets `find`, `all`, `save` and `delete` against
//! `/admin/api/{version}/{plural}[/{id}].json` for free. Request bodies and
//! responses are wrapped in the lowercase resource name
//! (`{"product": {...}}`), collections in the plural (`{"products": [...]}`).
//!
//! Failed calls come back as [`ResourceError`], with 404 and 422 already
//! mapped to [`ResourceError::NotFound`] and [`ResourceError::ValidationFailed`].

use std::collections::HashMap;
use std::fmt::Display;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::clients::RestClient;
use crate::rest::{ResourceError, ResourceResponse};

/// A REST resource that can be fetched, listed, created, updated and deleted.
#[allow(async_fn_in_trait)]
pub trait RestResource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// The type of the resource's identifier.
    type Id: Display + Clone + Send + Sync;

    /// Query parameters accepted by [`RestResource::all`].
    type AllParams: Serialize + Default + Send + Sync;

    /// The singular name of the resource (e.g., "Product").
    const NAME: &'static str;

    /// The plural name used in URL paths and collection bodies.
    const PLURAL: &'static str;

    /// Returns the resource's ID, or `None` if it has not been saved yet.
    fn get_id(&self) -> Option<Self::Id>;

    /// Returns the lowercase key used in single-resource bodies.
    #[must_use]
    fn resource_key() -> String {
        Self::NAME.to_lowercase()
    }

    /// Fetches a single resource by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the resource doesn't exist.
    async fn find(client: &RestClient, id: Self::Id) -> Result<ResourceResponse<Self>, ResourceError> {
        let id = id.to_string();
        let response = client
            .get(&format!("{}/{id}", Self::PLURAL), None)
            .await
            .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, Some(&id)))?;

        ResourceResponse::from_http_response(response, &Self::resource_key())
    }

    /// Fetches one page of resources.
    ///
    /// The cursor for the following page is in the pagination half of
    /// [`ResourceResponse::into_parts`].
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request fails or the body is malformed.
    async fn all(
        client: &RestClient,
        params: Option<Self::AllParams>,
    ) -> Result<ResourceResponse<Vec<Self>>, ResourceError> {
        let query = params
            .map(|p| serialize_to_query::<Self, _>(&p))
            .transpose()?
            .filter(|q| !q.is_empty());

        let response = client
            .get(Self::PLURAL, query)
            .await
            .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, None))?;

        ResourceResponse::from_http_response(response, Self::PLURAL)
    }

    /// Creates the resource (POST) when it has no ID, otherwise updates it
    /// (PUT). Returns the resource as stored by Shopify.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if Shopify rejects the
    /// payload and [`ResourceError::NotFound`] when updating a resource that
    /// no longer exists.
    async fn save(&self, client: &RestClient) -> Result<Self, ResourceError> {
        let key = Self::resource_key();

        let resource = serde_json::to_value(self).map_err(|source| {
            ResourceError::Serialization {
                resource: Self::NAME,
                source,
            }
        })?;
        let mut body = serde_json::Map::new();
        body.insert(key.clone(), resource);
        let body = Value::Object(body);

        let response = match self.get_id() {
            None => client
                .post(Self::PLURAL, body, None)
                .await
                .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, None))?,
            Some(id) => {
                let id = id.to_string();
                client
                    .put(&format!("{}/{id}", Self::PLURAL), body, None)
                    .await
                    .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, Some(&id)))?
            }
        };

        let saved: ResourceResponse<Self> = ResourceResponse::from_http_response(response, &key)?;
        Ok(saved.into_inner())
    }

    /// Deletes the resource with the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the resource doesn't exist.
    async fn delete(client: &RestClient, id: Self::Id) -> Result<(), ResourceError> {
        let id = id.to_string();
        client
            .delete(&format!("{}/{id}", Self::PLURAL), None)
            .await
            .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, Some(&id)))?;
        Ok(())
    }
}

/// Flattens a params struct into query parameters.
///
/// `null` fields are skipped and arrays become comma-separated lists.
fn serialize_to_query<R: RestResource, T: Serialize>(
    params: &T,
) -> Result<HashMap<String, String>, ResourceError> {
    let value = serde_json::to_value(params).map_err(|source| ResourceError::Serialization {
        resource: R::NAME,
        source,
    })?;

    let mut query = HashMap::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null | Value::Object(_) => {}
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                Value::Array(arr) => {
                    let values: Vec<String> = arr
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        query.insert(key, values.join(","));
                    }
                }
            }
        }
    }

    Ok(query)
}
