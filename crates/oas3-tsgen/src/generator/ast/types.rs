use std::collections::HashSet;

use indexmap::{IndexMap, IndexSet};
use strum::Display;

use super::{OperationKey, PrimitiveKind};
use crate::generator::naming::identifiers::sanitize_fragment;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RenderError {
  #[error("operation {0} has no bound function name")]
  UnboundOperation(OperationKey),
}

/// Synthesis context a declaration name belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub enum DeclPrefix {
  Dto,
  Body,
  Res,
  Query,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
enum NameOwner {
  Schema(String),
  Operation(OperationKey),
}

/// Structured declaration name: `<prefix>_<owner>(_<key>)*`.
///
/// Names owned by an operation can only be rendered once the operation's
/// function name has been bound in a [`FunctionNames`] table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeclName {
  prefix: DeclPrefix,
  owner: NameOwner,
  keys: Vec<String>,
}

impl DeclName {
  pub fn dto(schema: impl Into<String>) -> Self {
    Self {
      prefix: DeclPrefix::Dto,
      owner: NameOwner::Schema(schema.into()),
      keys: vec![],
    }
  }

  pub const fn operation(prefix: DeclPrefix, key: OperationKey) -> Self {
    Self {
      prefix,
      owner: NameOwner::Operation(key),
      keys: vec![],
    }
  }

  /// Name of an anonymous object nested under property `key`.
  #[must_use]
  pub fn child(&self, key: &str) -> Self {
    let mut keys = self.keys.clone();
    keys.push(key.to_string());
    Self {
      prefix: self.prefix,
      owner: self.owner.clone(),
      keys,
    }
  }

  pub fn keys(&self) -> &[String] {
    &self.keys
  }

  pub const fn is_root(&self) -> bool {
    self.keys.is_empty()
  }

  #[cfg(test)]
  pub fn is_dto(&self) -> bool {
    self.prefix == DeclPrefix::Dto
  }

  /// Identifier of a schema-owned name before disambiguation. `None` for
  /// names owned by an operation.
  pub fn schema_rendering(&self) -> Option<String> {
    match &self.owner {
      NameOwner::Schema(name) => Some(self.join(&sanitize_fragment(name))),
      NameOwner::Operation(_) => None,
    }
  }

  pub fn render(&self, functions: &FunctionNames) -> Result<String, RenderError> {
    if let Some(assigned) = functions.dto_names.get(self) {
      return Ok(assigned.to_string());
    }

    let owner = match &self.owner {
      NameOwner::Schema(name) => sanitize_fragment(name),
      NameOwner::Operation(key) => functions.get(*key).ok_or(RenderError::UnboundOperation(*key))?.to_string(),
    };
    Ok(self.join(&owner))
  }

  fn join(&self, owner: &str) -> String {
    let mut rendered = format!("{}_{owner}", self.prefix);
    for key in &self.keys {
      rendered.push('_');
      rendered.push_str(&sanitize_fragment(key));
    }
    rendered
  }
}

/// Identifiers assigned to schema-owned names whose default rendering is
/// shared with another name.
///
/// Schema roots claim their default identifier before nested shapes, each
/// group in registration order. A later claimant takes the smallest free
/// `_<n>` suffix with `n >= 2`, free meaning neither assigned nor the default
/// identifier of any other name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DtoNames {
  renamed: IndexMap<DeclName, String>,
}

impl DtoNames {
  pub fn assign<'a>(names: impl IntoIterator<Item = &'a DeclName>) -> Self {
    let mut defaults = names
      .into_iter()
      .filter_map(|name| name.schema_rendering().map(|rendered| (name, rendered)))
      .collect::<Vec<_>>();
    defaults.sort_by_key(|(name, _)| !name.is_root());

    let reserved = defaults.iter().map(|(_, rendered)| rendered.as_str()).collect::<HashSet<_>>();
    let mut taken = HashSet::new();
    let mut renamed = IndexMap::new();

    for (name, rendered) in &defaults {
      if taken.insert(rendered.clone()) {
        continue;
      }

      let mut ordinal = 2;
      let assigned = loop {
        let candidate = format!("{rendered}_{ordinal}");
        if !reserved.contains(candidate.as_str()) && !taken.contains(&candidate) {
          break candidate;
        }
        ordinal += 1;
      };
      taken.insert(assigned.clone());
      renamed.insert((*name).clone(), assigned);
    }

    Self { renamed }
  }

  pub fn get(&self, name: &DeclName) -> Option<&str> {
    self.renamed.get(name).map(String::as_str)
  }

  /// Renamed names with their assigned identifiers, in assignment order.
  pub fn iter(&self) -> impl Iterator<Item = (&DeclName, &str)> {
    self.renamed.iter().map(|(name, assigned)| (name, assigned.as_str()))
  }
}

/// Per-tag table binding operation keys to their function names. Also
/// carries the [`DtoNames`] shared by every tag.
#[derive(Debug, Clone, Default)]
pub struct FunctionNames {
  by_key: IndexMap<OperationKey, String>,
  taken: HashSet<String>,
  dto_names: DtoNames,
}

impl FunctionNames {
  pub fn with_dto_names(dto_names: DtoNames) -> Self {
    Self {
      dto_names,
      ..Self::default()
    }
  }

  pub fn get(&self, key: OperationKey) -> Option<&str> {
    self.by_key.get(&key).map(String::as_str)
  }

  #[cfg(test)]
  pub fn is_taken(&self, name: &str) -> bool {
    self.taken.contains(name)
  }

  /// Binds `name` to `key`. Returns `false` if either is already bound.
  pub fn bind(&mut self, key: OperationKey, name: &str) -> bool {
    if self.by_key.contains_key(&key) || self.taken.contains(name) {
      return false;
    }
    self.by_key.insert(key, name.to_string());
    self.taken.insert(name.to_string());
    true
  }

  #[cfg(test)]
  pub fn len(&self) -> usize {
    self.by_key.len()
  }
}

/// Resolved type of a schema node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeExpr {
  Primitive(PrimitiveKind),
  Any,
  Array(Box<TypeExpr>),
  Named(DeclName),
}

impl TypeExpr {
  pub fn array(item: Self) -> Self {
    Self::Array(Box::new(item))
  }

  /// Strips array layers, returning the element type and the layer count.
  pub fn peel_arrays(&self) -> (&Self, usize) {
    let mut current = self;
    let mut depth = 0;
    while let Self::Array(inner) = current {
      current = inner;
      depth += 1;
    }
    (current, depth)
  }

  #[must_use]
  pub fn wrap_arrays(self, depth: usize) -> Self {
    (0..depth).fold(self, |inner, _| Self::array(inner))
  }

  pub fn collect_names<'a>(&'a self, out: &mut IndexSet<&'a DeclName>) {
    match self {
      Self::Named(name) => {
        out.insert(name);
      }
      Self::Array(inner) => inner.collect_names(out),
      Self::Primitive(_) | Self::Any => {}
    }
  }

  pub fn render(&self, functions: &FunctionNames) -> Result<String, RenderError> {
    Ok(match self {
      Self::Primitive(kind) => kind.keyword().to_string(),
      Self::Any => "any".to_string(),
      Self::Array(inner) => format!("{}[]", inner.render(functions)?),
      Self::Named(name) => name.render(functions)?,
    })
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
  pub name: String,
  pub ty: TypeExpr,
  pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclBody {
  Interface(Vec<Property>),
  Alias(TypeExpr),
}

/// A named interface or type alias, with the names it references recorded at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
  name: DeclName,
  body: DeclBody,
  references: IndexSet<DeclName>,
}

impl Declaration {
  pub fn interface(name: DeclName, properties: Vec<Property>) -> Self {
    Self::new(name, DeclBody::Interface(properties))
  }

  pub fn alias(name: DeclName, target: TypeExpr) -> Self {
    Self::new(name, DeclBody::Alias(target))
  }

  fn new(name: DeclName, body: DeclBody) -> Self {
    let mut found = IndexSet::new();
    match &body {
      DeclBody::Interface(properties) => {
        for property in properties {
          property.ty.collect_names(&mut found);
        }
      }
      DeclBody::Alias(target) => target.collect_names(&mut found),
    }
    let references = found.into_iter().cloned().collect();

    Self { name, body, references }
  }

  pub const fn name(&self) -> &DeclName {
    &self.name
  }

  pub const fn body(&self) -> &DeclBody {
    &self.body
  }

  /// Declarations this one refers to in first-use order, itself included when
  /// self-referential.
  pub const fn references(&self) -> &IndexSet<DeclName> {
    &self.references
  }
}
