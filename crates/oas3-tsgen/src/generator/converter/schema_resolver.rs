use indexmap::IndexMap;

use super::{ResolutionContext, ResolveError};
use crate::{
  generator::{
    ast::{DeclName, Declaration, ObjectNode, Property, SchemaNode, TypeExpr},
    naming::constants::ARRAY_ITEM_KEY,
  },
  utils::parse_schema_ref_path,
};

/// Turns schema nodes into type expressions, registering a declaration for
/// every anonymous object shape it meets.
///
/// Recursion only follows structural nesting. References stop at the target's
/// `Dto_` name, so reference cycles never recurse here.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SchemaResolver<'s> {
  schemas: &'s IndexMap<String, SchemaNode>,
}

impl<'s> SchemaResolver<'s> {
  pub(crate) const fn new(schemas: &'s IndexMap<String, SchemaNode>) -> Self {
    Self { schemas }
  }

  pub(crate) fn schemas(&self) -> &'s IndexMap<String, SchemaNode> {
    self.schemas
  }

  pub(crate) fn resolve(&self, node: &SchemaNode, ctx: &mut ResolutionContext<'_>) -> TypeExpr {
    let root = ctx.root().clone();
    self.resolve_at(node, &root, ctx)
  }

  fn resolve_at(&self, node: &SchemaNode, name: &DeclName, ctx: &mut ResolutionContext<'_>) -> TypeExpr {
    let resolved = match node {
      SchemaNode::Primitive(kind) => Ok(TypeExpr::Primitive(*kind)),
      SchemaNode::Any => Ok(TypeExpr::Any),
      SchemaNode::Reference(pointer) => self.resolve_reference(pointer),
      SchemaNode::Array(item) => {
        let item_name = if name.is_root() {
          name.child(ARRAY_ITEM_KEY)
        } else {
          name.clone()
        };
        Ok(TypeExpr::array(self.resolve_at(item, &item_name, ctx)))
      }
      SchemaNode::Object(object) => self.resolve_object(object, name, ctx),
    };

    resolved.unwrap_or_else(|error| {
      ctx.degrade(name, &error);
      TypeExpr::Any
    })
  }

  fn resolve_reference(&self, pointer: &str) -> Result<TypeExpr, ResolveError> {
    let target = parse_schema_ref_path(pointer).ok_or_else(|| ResolveError::ForeignReference(pointer.to_string()))?;
    if !self.schemas.contains_key(&target) {
      return Err(ResolveError::DanglingReference(pointer.to_string()));
    }
    Ok(TypeExpr::Named(DeclName::dto(target)))
  }

  fn resolve_object(
    &self,
    object: &ObjectNode,
    name: &DeclName,
    ctx: &mut ResolutionContext<'_>,
  ) -> Result<TypeExpr, ResolveError> {
    let properties = object.properties.as_ref().ok_or(ResolveError::UnusableProperties)?;

    if !ctx.contains(name) {
      let members = properties
        .iter()
        .map(|(key, schema)| Property {
          name: key.clone(),
          ty: self.resolve_at(schema, &name.child(key), ctx),
          optional: !object.is_required(key),
        })
        .collect();
      ctx.register(Declaration::interface(name.clone(), members));
    }

    Ok(TypeExpr::Named(name.clone()))
  }
}
