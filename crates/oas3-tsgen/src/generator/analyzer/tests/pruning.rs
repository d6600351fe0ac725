use indexmap::IndexMap;
use serde_json::json;

use crate::generator::{
  analyzer::{DependencyGraph, DependencyPruner},
  ast::{DeclName, Declaration, FunctionNames, SchemaNode, TypeExpr},
  converter::{DtoRegistry, SchemaResolver},
};

fn registry_for(schemas: &serde_json::Value) -> DtoRegistry {
  let pool: IndexMap<String, SchemaNode> = schemas
    .as_object()
    .unwrap()
    .iter()
    .map(|(name, schema)| (name.clone(), SchemaNode::from_value(schema)))
    .collect();
  let resolver = SchemaResolver::new(&pool);
  DtoRegistry::build_all(&resolver, &mut vec![])
}

fn rendered(declarations: &[&Declaration]) -> Vec<String> {
  let functions = FunctionNames::default();
  declarations
    .iter()
    .map(|declaration| declaration.name().render(&functions).unwrap())
    .collect()
}

#[test]
fn test_mutual_references_are_inlined_once_each() {
  let registry = registry_for(&json!({
    "A": { "type": "object", "properties": { "b": { "$ref": "#/components/schemas/B" } } },
    "B": { "type": "object", "properties": { "a": { "$ref": "#/components/schemas/A" } } },
    "C": { "type": "string" }
  }));
  let pruner = DependencyPruner::new(&registry);

  let root = DeclName::dto("A");
  assert_eq!(rendered(&pruner.prune([&root])), ["Dto_A", "Dto_B"]);

  let roots = [DeclName::dto("B"), DeclName::dto("A"), DeclName::dto("B")];
  assert_eq!(rendered(&pruner.prune(&roots)), ["Dto_A", "Dto_B"]);
}

#[test]
fn test_closure_follows_nested_shapes_in_pool_order() {
  let document: serde_json::Value = serde_json::from_str(crate::fixtures::PETSTORE).unwrap();
  let registry = registry_for(&document["components"]["schemas"]);
  let pruner = DependencyPruner::new(&registry);

  let root = DeclName::dto("UserList");
  assert_eq!(
    rendered(&pruner.prune([&root])),
    [
      "Dto_User_address_geo",
      "Dto_User_address",
      "Dto_User",
      "Dto_UserList_item",
      "Dto_UserList",
      "Dto_Status",
    ]
  );
}

#[test]
fn test_names_outside_the_pool_are_ignored() {
  let registry = registry_for(&json!({ "A": { "type": "string" } }));
  let pruner = DependencyPruner::new(&registry);

  let unknown = [DeclName::dto("Missing"), DeclName::dto("A").child("x")];
  assert!(pruner.prune(&unknown).is_empty());
  assert!(pruner.prune(std::iter::empty()).is_empty());
}

#[test]
fn test_graph_reports_self_cycles() {
  let node = DeclName::dto("Node");
  let leaf = DeclName::dto("Leaf");
  let declarations = [
    Declaration::alias(leaf.clone(), TypeExpr::Any),
    Declaration::alias(node.clone(), TypeExpr::array(TypeExpr::Named(node.clone()))),
  ];

  let graph = DependencyGraph::build(&declarations);
  assert_eq!(graph.cycles(), [vec![&node]]);

  let reached = graph.reachable_from([&node]);
  assert_eq!(reached.into_iter().collect::<Vec<_>>(), [&node]);
}
