use serde_json::json;

use super::load_json;
use crate::{
  generator::{
    ast::{HttpMethod, SchemaNode},
    document::{ApiDocument, LoadError, RawDocument, is_json_media_type},
  },
  utils::spec::SpecFormat,
};

#[test]
fn test_swagger_documents_are_rejected() {
  let err = load_json(&json!({ "swagger": "2.0", "info": { "title": "Old", "version": "1" } })).unwrap_err();
  assert!(matches!(err, LoadError::Swagger(ref version) if version == "2.0"));
}

#[test]
fn test_version_is_required_and_checked() {
  assert!(matches!(
    load_json(&json!({ "info": { "title": "x", "version": "1" } })),
    Err(LoadError::MissingVersion)
  ));
  assert!(matches!(
    load_json(&json!({ "openapi": "4.0.0" })),
    Err(LoadError::UnsupportedVersion(_))
  ));
  assert!(load_json(&json!({ "openapi": "3.1.0" })).is_ok());
}

#[test]
fn test_malformed_input_is_an_error() {
  assert!(matches!(
    RawDocument::from_slice(b"{ not json", SpecFormat::Json),
    Err(LoadError::Json(_))
  ));
  assert!(matches!(
    RawDocument::from_slice(b"openapi: [unclosed", SpecFormat::Yaml),
    Err(LoadError::Yaml(_))
  ));
}

#[test]
fn test_schemas_and_paths_keep_source_order() {
  let raw = RawDocument::from_slice(crate::fixtures::PETSTORE.as_bytes(), SpecFormat::Json).unwrap();
  let document = ApiDocument::from_raw(raw).unwrap();

  assert_eq!(document.info.title, "Petstore");
  assert_eq!(document.info.version, "1.0.0");
  let names: Vec<_> = document.schemas.keys().map(String::as_str).collect();
  assert_eq!(
    names,
    ["CreateUser", "User", "UserList", "Order", "OrderItem", "Status", "Unused"]
  );

  let labels: Vec<_> = document.operations.iter().map(|operation| operation.label()).collect();
  assert_eq!(
    labels,
    [
      "GET /api/users",
      "POST /api/users",
      "GET /api/users/{id}",
      "DELETE /api/users/{id}",
      "POST /api/orders",
      "PUT /api/orders/{orderId}/items",
      "PUT /items/{itemId}/status",
      "GET /health",
    ]
  );
  for (index, operation) in document.operations.iter().enumerate() {
    assert_eq!(operation.key.0, index);
  }
}

#[test]
fn test_yaml_integer_status_keys_and_component_refs() {
  let raw = RawDocument::from_slice(crate::fixtures::SHOP_YAML.as_bytes(), SpecFormat::Yaml).unwrap();
  let document = ApiDocument::from_raw(raw).unwrap();
  assert_eq!(document.info.title, "Shop");
  assert_eq!(document.info.version, "2.4");

  let list = &document.operations[0];
  assert_eq!(list.method, HttpMethod::Get);
  assert_eq!(
    list.response,
    Some(SchemaNode::Array(Box::new(SchemaNode::Reference(
      "#/components/schemas/Product".to_string()
    ))))
  );
  assert_eq!(list.parameters.len(), 1);
  assert_eq!(list.parameters[0].name, "limit");
  assert!(list.parameters[0].required);

  let create = &document.operations[1];
  let product = Some(SchemaNode::Reference("#/components/schemas/Product".to_string()));
  assert_eq!(create.request_body, product);
  assert_eq!(create.response, product);
}

#[test]
fn test_json_media_types() {
  assert!(is_json_media_type("application/json"));
  assert!(is_json_media_type("application/json; charset=utf-8"));
  assert!(is_json_media_type("application/problem+json"));
  assert!(is_json_media_type("text/json"));
  assert!(!is_json_media_type("text/plain"));
  assert!(!is_json_media_type("multipart/form-data"));
  assert!(!is_json_media_type("not a media type"));
}
