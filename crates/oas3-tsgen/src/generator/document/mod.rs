mod raw;

#[cfg(test)]
mod tests;

use indexmap::{IndexMap, IndexSet};
pub use raw::RawDocument;
use raw::{RawComponents, RawMediaType, RawOperation, RawParameter, RawRequestBody, RawResponse};
use serde_json::Value;

use crate::{
  generator::{
    ast::{HttpMethod, Operation, OperationKey, Parameter, ParameterLocation, SchemaNode},
    metrics::GenerationWarning,
  },
  utils::{ComponentKind, parse_component_ref},
};

/// Longest chain of component-to-component `$ref`s followed before giving up.
const MAX_REF_DEPTH: usize = 16;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
  #[error("invalid JSON document: {0}")]
  Json(#[from] serde_json::Error),
  #[error("invalid YAML document: {0}")]
  Yaml(#[from] serde_yaml::Error),
  #[error("Swagger {0} documents are not supported; convert to OpenAPI 3 first")]
  Swagger(String),
  #[error("document has no `openapi` version field")]
  MissingVersion,
  #[error("unsupported OpenAPI version {0}")]
  UnsupportedVersion(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentInfo {
  pub title: String,
  pub version: String,
  pub description: Option<String>,
}

/// Validated document: component schemas and operations lowered into the
/// closed model, both in source order.
#[derive(Debug, Clone, Default)]
pub struct ApiDocument {
  pub info: DocumentInfo,
  pub schemas: IndexMap<String, SchemaNode>,
  pub operations: Vec<Operation>,
  /// Issues found while lowering; the affected items were dropped or degraded.
  pub warnings: Vec<GenerationWarning>,
}

impl ApiDocument {
  pub fn from_raw(raw: RawDocument) -> Result<Self, LoadError> {
    if let Some(version) = raw.swagger {
      return Err(LoadError::Swagger(version));
    }
    let version = raw.openapi.ok_or(LoadError::MissingVersion)?;
    if !version.trim().starts_with("3.") {
      return Err(LoadError::UnsupportedVersion(version));
    }

    let schemas = raw
      .components
      .schemas
      .iter()
      .map(|(name, schema)| (name.clone(), SchemaNode::from_value(schema)))
      .collect();

    let mut lowering = OperationLowering {
      components: &raw.components,
      operations: vec![],
      warnings: vec![],
    };
    for (path, item) in &raw.paths {
      lowering.lower_path(path, item);
    }

    Ok(Self {
      info: DocumentInfo {
        title: raw.info.title,
        version: raw.info.version,
        description: raw.info.description,
      },
      schemas,
      operations: lowering.operations,
      warnings: lowering.warnings,
    })
  }
}

/// `application/json`, `text/json` and any `+json` structured suffix.
pub fn is_json_media_type(media_type: &str) -> bool {
  mediatype::MediaType::parse(media_type).is_ok_and(|media| {
    media.subty.as_str().eq_ignore_ascii_case("json")
      || media
        .suffix
        .is_some_and(|suffix| suffix.as_str().eq_ignore_ascii_case("json"))
  })
}

fn resolve_component<'a>(
  value: &'a Value,
  kind: ComponentKind,
  pool: &'a IndexMap<String, Value>,
) -> Result<&'a Value, String> {
  let mut current = value;
  for _ in 0..MAX_REF_DEPTH {
    let Some(pointer) = current.get("$ref").and_then(Value::as_str) else {
      return Ok(current);
    };
    let name = parse_component_ref(pointer, kind)
      .ok_or_else(|| format!("reference '{pointer}' does not point into components.{}", kind.section()))?;
    current = pool
      .get(&name)
      .ok_or_else(|| format!("reference '{pointer}' does not resolve"))?;
  }
  Err(format!("reference chain longer than {MAX_REF_DEPTH}"))
}

fn first_json_schema(content: &IndexMap<String, RawMediaType>) -> Option<Option<&Value>> {
  content
    .iter()
    .find(|(media_type, _)| is_json_media_type(media_type))
    .map(|(_, media)| media.schema.as_ref())
}

struct OperationLowering<'a> {
  components: &'a RawComponents,
  operations: Vec<Operation>,
  warnings: Vec<GenerationWarning>,
}

impl<'a> OperationLowering<'a> {
  fn lower_path(&mut self, path: &str, item: &Value) {
    let Some(item) = item.as_object() else {
      return;
    };

    let shared = item
      .get("parameters")
      .and_then(Value::as_array)
      .map(Vec::as_slice)
      .unwrap_or_default();

    for (key, value) in item {
      let Ok(method) = key.parse::<HttpMethod>() else {
        continue;
      };
      let label = format!("{} {path}", method.as_str().to_uppercase());

      let raw = match serde_json::from_value::<RawOperation>(value.clone()) {
        Ok(raw) => raw,
        Err(error) => {
          self.warnings.push(GenerationWarning::OperationSkipped {
            operation: label,
            error: error.to_string(),
          });
          continue;
        }
      };

      let operation = self.lower_operation(OperationKey(self.operations.len()), method, path, &label, shared, raw);
      self.operations.push(operation);
    }
  }

  fn lower_operation(
    &mut self,
    key: OperationKey,
    method: HttpMethod,
    path: &str,
    label: &str,
    shared: &[Value],
    raw: RawOperation,
  ) -> Operation {
    let mut parameters = IndexMap::<(String, ParameterLocation), Parameter>::new();
    for value in shared.iter().chain(&raw.parameters) {
      if let Some(param) = self.lower_parameter(label, value) {
        parameters.insert((param.name.clone(), param.location), param);
      }
    }

    let tags = raw
      .tags
      .iter()
      .map(|tag| tag.trim())
      .filter(|tag| !tag.is_empty())
      .map(String::from)
      .collect::<IndexSet<_>>();

    let request_body = raw
      .request_body
      .as_ref()
      .and_then(|body| self.lower_request_body(label, body));
    let response = raw
      .responses
      .get("200")
      .and_then(|response| self.lower_response(label, response));

    Operation {
      key,
      method,
      path: path.to_string(),
      tags: tags.into_iter().collect(),
      parameters: parameters.into_values().collect(),
      request_body,
      response,
      summary: raw.summary.filter(|text| !text.trim().is_empty()),
      description: raw.description.filter(|text| !text.trim().is_empty()),
      deprecated: raw.deprecated,
    }
  }

  fn lower_parameter(&mut self, label: &str, value: &Value) -> Option<Parameter> {
    let resolved = self.resolve(label, value, ComponentKind::Parameters)?;
    let raw = match serde_json::from_value::<RawParameter>(resolved.clone()) {
      Ok(raw) => raw,
      Err(error) => {
        self.warn(label, format!("ignored malformed parameter: {error}"));
        return None;
      }
    };

    let location = match raw.location.as_str() {
      "path" => ParameterLocation::Path,
      "query" => ParameterLocation::Query,
      _ => return None,
    };

    Some(Parameter {
      name: raw.name,
      location,
      required: raw.required || location == ParameterLocation::Path,
      schema: raw.schema.as_ref().map(SchemaNode::from_value),
    })
  }

  fn lower_request_body(&mut self, label: &str, value: &Value) -> Option<SchemaNode> {
    let resolved = self.resolve(label, value, ComponentKind::RequestBodies)?;
    let body = match serde_json::from_value::<RawRequestBody>(resolved.clone()) {
      Ok(body) => body,
      Err(error) => {
        self.warn(label, format!("malformed request body typed as any: {error}"));
        return Some(SchemaNode::Any);
      }
    };

    if body.content.is_empty() {
      return None;
    }
    match first_json_schema(&body.content) {
      Some(schema) => Some(schema.map_or(SchemaNode::Any, SchemaNode::from_value)),
      None => {
        let media_types = body.content.keys().map(String::as_str).collect::<Vec<_>>().join(", ");
        self.warn(label, format!("request body has no JSON media type ({media_types}); typed as any"));
        Some(SchemaNode::Any)
      }
    }
  }

  fn lower_response(&mut self, label: &str, value: &Value) -> Option<SchemaNode> {
    let resolved = self.resolve(label, value, ComponentKind::Responses)?;
    let response = serde_json::from_value::<RawResponse>(resolved.clone()).ok()?;
    first_json_schema(&response.content)?.map(SchemaNode::from_value)
  }

  fn resolve<'v>(&mut self, label: &str, value: &'v Value, kind: ComponentKind) -> Option<&'v Value>
  where
    'a: 'v,
  {
    let components = self.components;
    let pool = match kind {
      ComponentKind::Schemas => &components.schemas,
      ComponentKind::Parameters => &components.parameters,
      ComponentKind::RequestBodies => &components.request_bodies,
      ComponentKind::Responses => &components.responses,
    };
    match resolve_component(value, kind, pool) {
      Ok(resolved) => Some(resolved),
      Err(reason) => {
        self.warn(label, reason);
        None
      }
    }
  }

  fn warn(&mut self, label: &str, message: String) {
    self.warnings.push(GenerationWarning::OperationSpecific {
      operation: label.to_string(),
      message,
    });
  }
}
