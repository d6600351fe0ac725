use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use super::LoadError;
use crate::utils::spec::SpecFormat;

/// Top level of an OpenAPI document, deserialized just far enough to walk
/// paths and components in source order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDocument {
  pub openapi: Option<String>,
  pub swagger: Option<String>,
  #[serde(default)]
  pub info: RawInfo,
  /// Path template to path item. Items stay untyped so that one malformed
  /// operation does not reject the whole document.
  #[serde(default)]
  pub paths: IndexMap<String, Value>,
  #[serde(default)]
  pub components: RawComponents,
}

impl RawDocument {
  pub fn from_slice(bytes: &[u8], format: SpecFormat) -> Result<Self, LoadError> {
    match format {
      SpecFormat::Json => Ok(serde_json::from_slice(bytes)?),
      SpecFormat::Yaml => {
        let yaml: serde_yaml::Value = serde_yaml::from_slice(bytes)?;
        let json = serde_json::to_value(yaml)?;
        Ok(serde_json::from_value(json)?)
      }
    }
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawInfo {
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub version: String,
  pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawComponents {
  #[serde(default)]
  pub schemas: IndexMap<String, Value>,
  #[serde(default)]
  pub parameters: IndexMap<String, Value>,
  #[serde(default)]
  pub request_bodies: IndexMap<String, Value>,
  #[serde(default)]
  pub responses: IndexMap<String, Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOperation {
  #[serde(default)]
  pub tags: Vec<String>,
  pub summary: Option<String>,
  pub description: Option<String>,
  #[serde(default)]
  pub deprecated: bool,
  #[serde(default)]
  pub parameters: Vec<Value>,
  pub request_body: Option<Value>,
  /// Status code to response. YAML integer keys arrive here as strings.
  #[serde(default)]
  pub responses: IndexMap<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawParameter {
  pub name: String,
  #[serde(rename = "in")]
  pub location: String,
  #[serde(default)]
  pub required: bool,
  pub schema: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRequestBody {
  #[serde(default)]
  pub content: IndexMap<String, RawMediaType>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawResponse {
  #[serde(default)]
  pub content: IndexMap<String, RawMediaType>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMediaType {
  pub schema: Option<Value>,
}
