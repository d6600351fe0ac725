use indexmap::IndexSet;

use super::{DeclName, HttpMethod, OperationKey, TypeExpr};

/// Positional argument bound to a `{name}` placeholder of the path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathArg {
  pub ident: String,
  pub ty: TypeExpr,
}

/// Compiled client method, independent of the tag it is emitted under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDef {
  pub key: OperationKey,
  pub function_name: String,
  pub method: HttpMethod,
  pub path: String,
  pub path_args: Vec<PathArg>,
  pub query: Option<TypeExpr>,
  pub body: Option<TypeExpr>,
  pub response: TypeExpr,
  pub summary: Option<String>,
  pub description: Option<String>,
  pub deprecated: bool,
}

impl MethodDef {
  /// Declaration names used directly by the signature.
  pub fn references(&self) -> IndexSet<&DeclName> {
    let mut found = IndexSet::new();
    for arg in &self.path_args {
      arg.ty.collect_names(&mut found);
    }
    for ty in [&self.query, &self.body].into_iter().flatten() {
      ty.collect_names(&mut found);
    }
    self.response.collect_names(&mut found);
    found
  }
}
