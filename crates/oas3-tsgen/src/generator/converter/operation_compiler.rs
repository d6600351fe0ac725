use super::{DeclarationBuffer, DeclarationSink, ResolutionContext, SchemaResolver};
use crate::generator::{
  ast::{
    DeclName, DeclPrefix, Declaration, MethodDef, Operation, ParameterLocation, PathArg, PrimitiveKind, Property,
    SchemaNode, TypeExpr,
  },
  metrics::GenerationWarning,
  naming::{
    functions::{function_name, path_placeholders},
    identifiers::param_identifier,
  },
};

/// One operation compiled in isolation: its method and the per-operation
/// declarations (`Query_`, `Body_`, `Res_` and their nested shapes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CompiledOperation {
  pub method: MethodDef,
  pub declarations: DeclarationBuffer,
}

pub(crate) struct OperationCompiler<'r, 's> {
  resolver: &'r SchemaResolver<'s>,
}

impl<'r, 's> OperationCompiler<'r, 's> {
  pub(crate) const fn new(resolver: &'r SchemaResolver<'s>) -> Self {
    Self { resolver }
  }

  pub(crate) fn compile(&self, operation: &Operation, warnings: &mut Vec<GenerationWarning>) -> CompiledOperation {
    let label = operation.label();
    let mut declarations = DeclarationBuffer::default();

    let path_args = Self::path_args(operation);
    let query = self.query_interface(operation, &label, &mut declarations, warnings);

    let body = operation.request_body.as_ref().map(|node| {
      self.bind_alias(
        DeclName::operation(DeclPrefix::Body, operation.key),
        node,
        &mut declarations,
        warnings,
        format!("{label} request body"),
      )
    });

    let response = operation.response.as_ref().map_or(TypeExpr::Any, |node| {
      self.bind_alias(
        DeclName::operation(DeclPrefix::Res, operation.key),
        node,
        &mut declarations,
        warnings,
        format!("{label} response"),
      )
    });

    CompiledOperation {
      method: MethodDef {
        key: operation.key,
        function_name: function_name(operation.method, &operation.path),
        method: operation.method,
        path: operation.path.clone(),
        path_args,
        query,
        body,
        response,
        summary: operation.summary.clone(),
        description: operation.description.clone(),
        deprecated: operation.deprecated,
      },
      declarations,
    }
  }

  /// One argument per template placeholder, typed by the matching path
  /// parameter's primitive type and `string` otherwise.
  fn path_args(operation: &Operation) -> Vec<PathArg> {
    path_placeholders(&operation.path)
      .into_iter()
      .map(|placeholder| {
        let kind = operation
          .parameters_in(ParameterLocation::Path)
          .find(|param| param.name == placeholder)
          .and_then(|param| param.schema.as_ref())
          .and_then(SchemaNode::as_primitive)
          .unwrap_or(PrimitiveKind::String);
        PathArg {
          ident: param_identifier(&placeholder),
          ty: TypeExpr::Primitive(kind),
        }
      })
      .collect()
  }

  fn query_interface(
    &self,
    operation: &Operation,
    label: &str,
    declarations: &mut DeclarationBuffer,
    warnings: &mut Vec<GenerationWarning>,
  ) -> Option<TypeExpr> {
    let params: Vec<_> = operation.parameters_in(ParameterLocation::Query).collect();
    if params.is_empty() {
      return None;
    }

    let name = DeclName::operation(DeclPrefix::Query, operation.key);
    let members = params
      .into_iter()
      .map(|param| {
        let ty = param.schema.as_ref().map_or(TypeExpr::Any, |schema| {
          let origin = format!("{label} query parameter '{}'", param.name);
          let mut ctx = ResolutionContext::new(name.child(&param.name), declarations, warnings, origin);
          self.resolver.resolve(schema, &mut ctx)
        });
        Property {
          name: param.name.clone(),
          ty,
          optional: !param.required,
        }
      })
      .collect();

    declarations.register(Declaration::interface(name.clone(), members));
    Some(TypeExpr::Named(name))
  }

  /// Resolves a body or response schema under `alias`.
  ///
  /// When the element type (arrays peeled) is a declaration, `alias` is bound
  /// to it and the result is `alias` re-wrapped in the peeled array layers.
  /// Primitives and `any` are returned as resolved.
  fn bind_alias(
    &self,
    alias: DeclName,
    node: &SchemaNode,
    declarations: &mut DeclarationBuffer,
    warnings: &mut Vec<GenerationWarning>,
    origin: String,
  ) -> TypeExpr {
    let mut ctx = ResolutionContext::new(alias.clone(), declarations, warnings, origin);
    let resolved = self.resolver.resolve(node, &mut ctx);

    let (element, depth) = resolved.peel_arrays();
    let TypeExpr::Named(target) = element else {
      return resolved;
    };
    if *target != alias {
      ctx.register(Declaration::alias(alias.clone(), element.clone()));
    }
    TypeExpr::Named(alias).wrap_arrays(depth)
  }
}
