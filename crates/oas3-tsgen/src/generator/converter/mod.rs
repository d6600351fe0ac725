mod dto_registry;
mod operation_compiler;
mod schema_resolver;

#[cfg(test)]
mod tests;

pub(crate) use dto_registry::DtoRegistry;
use indexmap::IndexMap;
pub(crate) use operation_compiler::{CompiledOperation, OperationCompiler};
pub(crate) use schema_resolver::SchemaResolver;

use crate::generator::{
  ast::{DeclName, Declaration},
  metrics::GenerationWarning,
};

/// Recoverable failure while turning one schema node into a type.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub(crate) enum ResolveError {
  #[error("object schema has no usable `properties` mapping")]
  UnusableProperties,
  #[error("reference '{0}' does not point into components.schemas")]
  ForeignReference(String),
  #[error("reference '{0}' does not resolve to a component schema")]
  DanglingReference(String),
  #[error("schema '{0}' is an alias of itself")]
  SelfAlias(String),
}

/// Destination for declarations synthesized during resolution.
pub(crate) trait DeclarationSink {
  fn contains(&self, name: &DeclName) -> bool;

  /// Stores `declaration` unless its name is already present. Returns whether
  /// it was stored.
  fn register(&mut self, declaration: Declaration) -> bool;
}

/// Name-keyed declarations in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct DeclarationBuffer {
  declarations: IndexMap<DeclName, Declaration>,
}

impl DeclarationBuffer {
  #[cfg(test)]
  pub(crate) fn get(&self, name: &DeclName) -> Option<&Declaration> {
    self.declarations.get(name)
  }

  pub(crate) fn iter(&self) -> impl Iterator<Item = &Declaration> {
    self.declarations.values()
  }

  pub(crate) fn len(&self) -> usize {
    self.declarations.len()
  }

  #[cfg(test)]
  pub(crate) fn is_empty(&self) -> bool {
    self.declarations.is_empty()
  }

  /// Copies every declaration of `other` not already present.
  pub(crate) fn extend_from(&mut self, other: &Self) {
    for declaration in other.iter() {
      self.register(declaration.clone());
    }
  }
}

impl DeclarationSink for DeclarationBuffer {
  fn contains(&self, name: &DeclName) -> bool {
    self.declarations.contains_key(name)
  }

  fn register(&mut self, declaration: Declaration) -> bool {
    if self.declarations.contains_key(declaration.name()) {
      return false;
    }
    self.declarations.insert(declaration.name().clone(), declaration);
    true
  }
}

/// State threaded through one resolution: the root name (prefix and owner),
/// the sink receiving synthesized declarations, and the warning log.
pub(crate) struct ResolutionContext<'a> {
  root: DeclName,
  sink: &'a mut dyn DeclarationSink,
  warnings: &'a mut Vec<GenerationWarning>,
  origin: String,
}

impl<'a> ResolutionContext<'a> {
  pub(crate) fn new(
    root: DeclName,
    sink: &'a mut dyn DeclarationSink,
    warnings: &'a mut Vec<GenerationWarning>,
    origin: impl Into<String>,
  ) -> Self {
    Self {
      root,
      sink,
      warnings,
      origin: origin.into(),
    }
  }

  pub(crate) const fn root(&self) -> &DeclName {
    &self.root
  }

  pub(crate) fn contains(&self, name: &DeclName) -> bool {
    self.sink.contains(name)
  }

  pub(crate) fn register(&mut self, declaration: Declaration) -> bool {
    self.sink.register(declaration)
  }

  pub(crate) fn degrade(&mut self, at: &DeclName, error: &ResolveError) {
    let context = if at.is_root() {
      self.origin.clone()
    } else {
      format!("{} (at '{}')", self.origin, at.keys().join("."))
    };
    self.warnings.push(GenerationWarning::SchemaDegraded {
      context,
      reason: error.to_string(),
    });
  }
}
