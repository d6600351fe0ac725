use serde_json::json;

use super::{render_all, schemas};
use crate::generator::{
  ast::{DeclName, FunctionNames},
  converter::{DtoRegistry, SchemaResolver},
  metrics::GenerationWarning,
};

#[test]
fn test_every_component_schema_gets_a_root_declaration() {
  let pool = schemas(&json!({
    "Status": { "type": "string" },
    "Tags": { "type": "array", "items": { "type": "string" } },
    "Owner": { "$ref": "#/components/schemas/Status" },
    "Pet": {
      "type": "object",
      "properties": {
        "owner": { "$ref": "#/components/schemas/Owner" },
        "tags": { "$ref": "#/components/schemas/Tags" }
      }
    }
  }));
  let resolver = SchemaResolver::new(&pool);
  let mut warnings = vec![];
  let registry = DtoRegistry::build_all(&resolver, &mut warnings);

  assert!(warnings.is_empty());
  assert_eq!(
    render_all(registry.pool(), &FunctionNames::default()),
    [
      "export type Dto_Status = string",
      "export type Dto_Tags = string[]",
      "export type Dto_Owner = Dto_Status",
      "export interface Dto_Pet {\n  owner?: Dto_Owner\n  tags?: Dto_Tags\n}",
    ]
  );
  assert!(registry.get(&DeclName::dto("Pet")).is_some());
}

#[test]
fn test_nested_shapes_precede_their_root() {
  let raw = crate::fixtures::PETSTORE;
  let document: serde_json::Value = serde_json::from_str(raw).unwrap();
  let pool = schemas(&document["components"]["schemas"]);
  let resolver = SchemaResolver::new(&pool);
  let mut warnings = vec![];
  let registry = DtoRegistry::build_all(&resolver, &mut warnings);

  let functions = FunctionNames::default();
  let names: Vec<_> = registry
    .pool()
    .iter()
    .map(|declaration| declaration.name().render(&functions).unwrap())
    .collect();
  assert_eq!(
    names,
    [
      "Dto_CreateUser",
      "Dto_User_address_geo",
      "Dto_User_address",
      "Dto_User",
      "Dto_UserList_item",
      "Dto_UserList",
      "Dto_Order",
      "Dto_OrderItem",
      "Dto_Status",
      "Dto_Unused",
    ]
  );
  assert_eq!(registry.len(), names.len());
  assert!(matches!(
    &warnings[..],
    [GenerationWarning::SchemaDegraded { context, .. }] if context == "schema 'Order' (at 'meta')"
  ));
}

#[test]
fn test_self_alias_degrades_to_any() {
  let pool = schemas(&json!({
    "Loop": { "$ref": "#/components/schemas/Loop" },
    "Broken": { "type": "object" }
  }));
  let resolver = SchemaResolver::new(&pool);
  let mut warnings = vec![];
  let registry = DtoRegistry::build_all(&resolver, &mut warnings);

  assert_eq!(
    render_all(registry.pool(), &FunctionNames::default()),
    ["export type Dto_Loop = any", "export type Dto_Broken = any"]
  );
  assert_eq!(warnings.len(), 2);
  assert!(warnings[0].to_string().contains("alias of itself"));
}

#[test]
fn test_cycles_include_mutual_and_self_references() {
  let document: serde_json::Value = serde_json::from_str(crate::fixtures::CYCLES).unwrap();
  let pool = schemas(&document["components"]["schemas"]);
  let resolver = SchemaResolver::new(&pool);
  let mut warnings = vec![];
  let registry = DtoRegistry::build_all(&resolver, &mut warnings);

  let mut cycles = registry.cycles();
  cycles.sort_by_key(Vec::len);
  assert_eq!(cycles.len(), 2);
  assert_eq!(cycles[0], [&DeclName::dto("Node")]);
  assert_eq!(cycles[1], [&DeclName::dto("A"), &DeclName::dto("B")]);
}

#[test]
fn test_clashing_identifiers_are_renamed_once_for_every_tag() {
  let pool = schemas(&json!({
    "User": {
      "type": "object",
      "properties": { "address": { "type": "object", "properties": { "street": { "type": "string" } } } }
    },
    "User_address": { "type": "object", "properties": { "zip": { "type": "string" } } }
  }));
  let resolver = SchemaResolver::new(&pool);
  let mut warnings = vec![];
  let registry = DtoRegistry::build_all(&resolver, &mut warnings);

  let functions = FunctionNames::with_dto_names(registry.names().clone());
  assert_eq!(
    render_all(registry.pool(), &functions),
    [
      "export interface Dto_User_address_2 {\n  street?: string\n}",
      "export interface Dto_User {\n  address?: Dto_User_address_2\n}",
      "export interface Dto_User_address {\n  zip?: string\n}",
    ]
  );
  assert!(matches!(
    &warnings[..],
    [GenerationWarning::DeclarationRenamed { name, renamed }]
      if name == "Dto_User_address" && renamed == "Dto_User_address_2"
  ));
}
