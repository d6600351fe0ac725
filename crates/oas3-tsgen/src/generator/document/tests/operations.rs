use serde_json::json;

use super::load_json;
use crate::generator::{
  ast::{ParameterLocation, PrimitiveKind, SchemaNode},
  metrics::GenerationWarning,
};

#[test]
fn test_path_level_parameters_merge_with_operation_parameters() {
  let document = load_json(&json!({
    "openapi": "3.0.0",
    "paths": {
      "/users/{id}": {
        "parameters": [
          { "name": "id", "in": "path", "schema": { "type": "string" } },
          { "name": "verbose", "in": "query", "schema": { "type": "boolean" } }
        ],
        "get": {
          "parameters": [
            { "name": "id", "in": "path", "required": true, "schema": { "type": "integer" } },
            { "name": "X-Request-Id", "in": "header", "schema": { "type": "string" } },
            { "name": "session", "in": "cookie" }
          ],
          "responses": {}
        }
      }
    }
  }))
  .unwrap();

  let operation = &document.operations[0];
  assert_eq!(operation.parameters.len(), 2);

  let id = operation.parameters_in(ParameterLocation::Path).next().unwrap();
  assert_eq!(id.schema, Some(SchemaNode::Primitive(PrimitiveKind::Integer)));
  assert!(id.required);

  let verbose = operation.parameters_in(ParameterLocation::Query).next().unwrap();
  assert_eq!(verbose.name, "verbose");
  assert!(!verbose.required);
}

#[test]
fn test_path_parameters_are_always_required() {
  let document = load_json(&json!({
    "openapi": "3.0.0",
    "paths": {
      "/files/{name}": {
        "get": { "parameters": [{ "name": "name", "in": "path" }] }
      }
    }
  }))
  .unwrap();
  assert!(document.operations[0].parameters[0].required);
}

#[test]
fn test_tags_are_trimmed_and_deduplicated() {
  let document = load_json(&json!({
    "openapi": "3.0.0",
    "paths": {
      "/a": { "get": { "tags": [" users ", "users", "", "admin"] } },
      "/b": { "get": {} }
    }
  }))
  .unwrap();
  assert_eq!(document.operations[0].tags, ["users", "admin"]);
  assert!(document.operations[1].tags.is_empty());
  assert_eq!(document.operations[1].effective_tags("common"), ["common"]);
}

#[test]
fn test_non_json_request_body_degrades_with_warning() {
  let document = load_json(&json!({
    "openapi": "3.0.0",
    "paths": {
      "/upload": {
        "post": {
          "requestBody": {
            "content": { "multipart/form-data": { "schema": { "type": "object" } } }
          }
        }
      }
    }
  }))
  .unwrap();

  assert_eq!(document.operations[0].request_body, Some(SchemaNode::Any));
  assert!(matches!(
    &document.warnings[..],
    [GenerationWarning::OperationSpecific { operation, message }]
      if operation == "POST /upload" && message.contains("multipart/form-data")
  ));
}

#[test]
fn test_empty_request_body_and_missing_success_response() {
  let document = load_json(&json!({
    "openapi": "3.0.0",
    "paths": {
      "/ping": {
        "post": {
          "requestBody": { "content": {} },
          "responses": {
            "201": {
              "content": { "application/json": { "schema": { "type": "string" } } }
            }
          }
        }
      }
    }
  }))
  .unwrap();

  let operation = &document.operations[0];
  assert_eq!(operation.request_body, None);
  assert_eq!(operation.response, None);
  assert!(document.warnings.is_empty());
}

#[test]
fn test_unresolvable_component_refs_are_reported() {
  let document = load_json(&json!({
    "openapi": "3.0.0",
    "paths": {
      "/a": {
        "get": {
          "parameters": [{ "$ref": "#/components/parameters/Missing" }],
          "requestBody": { "$ref": "#/components/schemas/NotABody" }
        }
      }
    }
  }))
  .unwrap();

  let operation = &document.operations[0];
  assert!(operation.parameters.is_empty());
  assert_eq!(operation.request_body, None);
  assert_eq!(document.warnings.len(), 2);
}

#[test]
fn test_malformed_operations_are_skipped() {
  let document = load_json(&json!({
    "openapi": "3.0.0",
    "paths": {
      "/a": {
        "get": { "tags": "not-a-list" },
        "post": { "summary": "fine" },
        "x-internal": true
      }
    }
  }))
  .unwrap();

  assert_eq!(document.operations.len(), 1);
  assert_eq!(document.operations[0].summary.as_deref(), Some("fine"));
  assert!(matches!(
    &document.warnings[..],
    [GenerationWarning::OperationSkipped { operation, .. }] if operation == "GET /a"
  ));
}
