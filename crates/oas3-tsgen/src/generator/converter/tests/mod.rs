mod registry;

use indexmap::IndexMap;
use serde_json::Value;

use crate::generator::{
  ast::{FunctionNames, SchemaNode},
  codegen::declarations::render_declaration,
  converter::DeclarationBuffer,
};

pub(super) fn schemas(value: &Value) -> IndexMap<String, SchemaNode> {
  value
    .as_object()
    .map(|map| {
      map
        .iter()
        .map(|(name, schema)| (name.clone(), SchemaNode::from_value(schema)))
        .collect()
    })
    .unwrap_or_default()
}

/// Renders every declaration of `buffer` in registration order.
pub(super) fn render_all(buffer: &DeclarationBuffer, functions: &FunctionNames) -> Vec<String> {
  buffer
    .iter()
    .map(|declaration| render_declaration(declaration, functions).unwrap())
    .collect()
}
