use super::DependencyGraph;
use crate::generator::{
  ast::{DeclName, Declaration},
  converter::DtoRegistry,
};

/// Selects the Dto declarations a tag module needs.
pub(crate) struct DependencyPruner<'a> {
  registry: &'a DtoRegistry,
  graph: DependencyGraph<'a>,
}

impl<'a> DependencyPruner<'a> {
  pub(crate) fn new(registry: &'a DtoRegistry) -> Self {
    Self {
      registry,
      graph: registry.dependency_graph(),
    }
  }

  /// Transitive closure of the Dto names in `roots`, returned in pool order.
  /// Names outside the pool are ignored.
  pub(crate) fn prune<'r>(&self, roots: impl IntoIterator<Item = &'r DeclName>) -> Vec<&'a Declaration> {
    let reached = self.graph.reachable_from(roots);
    self
      .registry
      .pool()
      .iter()
      .filter(|declaration| reached.contains(declaration.name()))
      .collect()
  }
}
