use super::{DeclarationBuffer, ResolutionContext, ResolveError, SchemaResolver};
use crate::generator::{
  analyzer::DependencyGraph,
  ast::{DeclName, Declaration, DtoNames, TypeExpr},
  metrics::GenerationWarning,
};

/// Global pool of `Dto_*` declarations, one root per component schema plus
/// the nested shapes they contain. Built once, read-only afterwards.
///
/// Dto identifiers do not depend on function names, so clashes between them
/// are settled here once for every tag.
#[derive(Debug, Clone, Default)]
pub(crate) struct DtoRegistry {
  pool: DeclarationBuffer,
  names: DtoNames,
}

impl DtoRegistry {
  pub(crate) fn build_all(resolver: &SchemaResolver<'_>, warnings: &mut Vec<GenerationWarning>) -> Self {
    let mut pool = DeclarationBuffer::default();

    for (name, schema) in resolver.schemas() {
      let root = DeclName::dto(name);
      let origin = format!("schema '{name}'");
      let mut ctx = ResolutionContext::new(root.clone(), &mut pool, warnings, origin);

      let binding = resolver.resolve(schema, &mut ctx);
      match binding {
        TypeExpr::Named(ref target) if *target == root => {
          if !ctx.contains(&root) {
            ctx.degrade(&root, &ResolveError::SelfAlias(name.clone()));
            ctx.register(Declaration::alias(root, TypeExpr::Any));
          }
        }
        other => {
          ctx.register(Declaration::alias(root, other));
        }
      }
    }

    let names = DtoNames::assign(pool.iter().map(Declaration::name));
    for (name, assigned) in names.iter() {
      if let Some(rendered) = name.schema_rendering() {
        warnings.push(GenerationWarning::DeclarationRenamed {
          name: rendered,
          renamed: assigned.to_string(),
        });
      }
    }

    Self { pool, names }
  }

  pub(crate) const fn pool(&self) -> &DeclarationBuffer {
    &self.pool
  }

  pub(crate) const fn names(&self) -> &DtoNames {
    &self.names
  }

  #[cfg(test)]
  pub(crate) fn get(&self, name: &DeclName) -> Option<&Declaration> {
    self.pool.get(name)
  }

  pub(crate) fn len(&self) -> usize {
    self.pool.len()
  }

  pub(crate) fn dependency_graph(&self) -> DependencyGraph<'_> {
    DependencyGraph::build(self.pool.iter())
  }

  /// Reference cycles among Dto declarations, including self references.
  pub(crate) fn cycles(&self) -> Vec<Vec<&DeclName>> {
    self.dependency_graph().cycles()
  }
}
