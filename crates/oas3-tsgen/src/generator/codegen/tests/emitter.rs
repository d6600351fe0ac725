use indexmap::IndexMap;
use serde_json::{Value, json};

use crate::{
  generator::{
    ast::DtoNames,
    codegen::{TagEmitter, tag_emitter::TagModule},
    converter::{OperationCompiler, SchemaResolver},
    document::{ApiDocument, RawDocument},
    metrics::GenerationWarning,
  },
  utils::spec::SpecFormat,
};

fn document(value: &Value) -> ApiDocument {
  let bytes = serde_json::to_vec(value).unwrap();
  ApiDocument::from_raw(RawDocument::from_slice(&bytes, SpecFormat::Json).unwrap()).unwrap()
}

fn emit(document: &ApiDocument) -> (IndexMap<String, TagModule>, Vec<GenerationWarning>) {
  let resolver = SchemaResolver::new(&document.schemas);
  let compiler = OperationCompiler::new(&resolver);
  let dto_names = DtoNames::default();
  let emitter = TagEmitter::new(&compiler, "common", &dto_names);
  let mut warnings = vec![];
  let modules = emitter.handle(&document.operations, &mut warnings);
  (modules, warnings)
}

fn function_names(module: &TagModule) -> Vec<&str> {
  module.methods().iter().map(|method| method.function_name.as_str()).collect()
}

#[test]
fn test_operations_are_grouped_by_tag_in_document_order() {
  let raw = RawDocument::from_slice(crate::fixtures::PETSTORE.as_bytes(), SpecFormat::Json).unwrap();
  let document = ApiDocument::from_raw(raw).unwrap();
  let (modules, warnings) = emit(&document);

  assert!(warnings.is_empty());
  let tags: Vec<_> = modules.keys().map(String::as_str).collect();
  assert_eq!(tags, ["users", "orders", "inventory", "common"]);

  assert_eq!(
    function_names(&modules["users"]),
    ["getUsers", "postUsers", "getUsersById", "deleteUsersById"]
  );
  assert_eq!(
    function_names(&modules["orders"]),
    ["postOrders", "putOrdersByOrderIdItems", "putItemsByItemIdStatus"]
  );
  assert_eq!(function_names(&modules["inventory"]), ["putItemsByItemIdStatus"]);
  assert_eq!(function_names(&modules["common"]), ["getHealth"]);
}

#[test]
fn test_multi_tag_operations_render_in_every_tag() {
  let raw = RawDocument::from_slice(crate::fixtures::PETSTORE.as_bytes(), SpecFormat::Json).unwrap();
  let document = ApiDocument::from_raw(raw).unwrap();
  let (modules, _) = emit(&document);

  for tag in ["orders", "inventory"] {
    let module = &modules[tag];
    let body = module
      .declarations()
      .iter()
      .map(|declaration| declaration.name().render(module.functions()).unwrap())
      .find(|name| name.starts_with("Body_putItems"));
    assert_eq!(body.as_deref(), Some("Body_putItemsByItemIdStatus"), "{tag}");
  }
}

#[test]
fn test_duplicate_function_names_are_skipped_per_tag() {
  let document = document(&json!({
    "openapi": "3.0.0",
    "paths": {
      "/api/users": { "get": { "tags": ["users"] } },
      "/users": { "get": { "tags": ["users", "legacy"] } }
    }
  }));
  let (modules, warnings) = emit(&document);

  assert_eq!(function_names(&modules["users"]), ["getUsers"]);
  assert_eq!(function_names(&modules["legacy"]), ["getUsers"]);
  assert!(matches!(
    &warnings[..],
    [GenerationWarning::DuplicateFunctionName { tag, operation, function }]
      if tag == "users" && operation == "GET /users" && function == "getUsers"
  ));
}

#[test]
fn test_tags_with_clashing_identifiers_are_numbered() {
  let document = document(&json!({
    "openapi": "3.0.0",
    "paths": {
      "/a": { "get": { "tags": ["pet"] } },
      "/b": { "get": { "tags": ["Pet"] } },
      "/c": { "get": { "tags": ["Pet", "pet"] } }
    }
  }));
  let (modules, warnings) = emit(&document);

  let idents: Vec<_> = modules
    .values()
    .map(|module| {
      (
        module.idents.file_stem.as_str(),
        module.idents.class_name.as_str(),
        module.idents.instance_name.as_str(),
      )
    })
    .collect();
  assert_eq!(idents, [("pet", "Pet", "petApi"), ("Pet2", "Pet2", "Pet2Api")]);
  assert_eq!(function_names(&modules["pet"]), ["getA", "getC"]);
  assert_eq!(function_names(&modules["Pet"]), ["getB", "getC"]);

  assert!(matches!(
    &warnings[..],
    [GenerationWarning::TagRenamed { tag, class_name, existing, renamed }]
      if tag == "Pet" && class_name == "Pet" && existing == "pet" && renamed == "Pet2"
  ));
  assert!(!warnings[0].is_skipped_item());
}

#[test]
fn test_numbered_tags_skip_taken_identifiers() {
  let document = document(&json!({
    "openapi": "3.0.0",
    "paths": {
      "/a": { "get": { "tags": ["user-admin", "userAdmin2", "userAdmin"] } }
    }
  }));
  let (modules, warnings) = emit(&document);

  let classes: Vec<_> = modules.values().map(|module| module.idents.class_name.as_str()).collect();
  assert_eq!(classes, ["UserAdmin", "UserAdmin2", "UserAdmin3"]);
  assert_eq!(warnings.len(), 1);
}

#[test]
fn test_referenced_names_cover_methods_and_local_declarations() {
  let document = document(&json!({
    "openapi": "3.0.0",
    "paths": {
      "/pets": {
        "post": {
          "tags": ["pets"],
          "requestBody": {
            "content": {
              "application/json": {
                "schema": { "type": "object", "properties": { "owner": { "$ref": "#/components/schemas/Owner" } } }
              }
            }
          },
          "responses": {
            "200": { "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Pet" } } } }
          }
        }
      }
    },
    "components": {
      "schemas": {
        "Owner": { "type": "string" },
        "Pet": { "type": "string" }
      }
    }
  }));
  let (modules, _) = emit(&document);
  let module = &modules["pets"];

  let mut names: Vec<_> = module
    .referenced_names()
    .into_iter()
    .filter(|name| name.is_dto())
    .map(|name| name.render(module.functions()).unwrap())
    .collect();
  names.sort();
  assert_eq!(names, ["Dto_Owner", "Dto_Pet"]);
}
