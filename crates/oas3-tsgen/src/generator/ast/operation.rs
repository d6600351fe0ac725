use std::fmt;

use strum::{Display, EnumString, IntoStaticStr};

use super::SchemaNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum HttpMethod {
  Get,
  Put,
  Post,
  Delete,
  Options,
  Head,
  Patch,
  Trace,
}

impl HttpMethod {
  pub fn as_str(self) -> &'static str {
    self.into()
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterLocation {
  Path,
  Query,
}

/// Synthetic per-operation identifier: the operation's position in document
/// order. Declarations owned by an operation are named against this key until
/// the operation's function name is bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OperationKey(pub usize);

impl fmt::Display for OperationKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "#{}", self.0)
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
  pub name: String,
  pub location: ParameterLocation,
  pub required: bool,
  pub schema: Option<SchemaNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
  pub key: OperationKey,
  pub method: HttpMethod,
  pub path: String,
  /// Declared tags, trimmed and deduplicated; may be empty.
  pub tags: Vec<String>,
  pub parameters: Vec<Parameter>,
  pub request_body: Option<SchemaNode>,
  pub response: Option<SchemaNode>,
  pub summary: Option<String>,
  pub description: Option<String>,
  pub deprecated: bool,
}

impl Operation {
  /// Tags the operation is emitted under; falls back to `default_tag`.
  pub fn effective_tags<'a>(&'a self, default_tag: &'a str) -> Vec<&'a str> {
    if self.tags.is_empty() {
      vec![default_tag]
    } else {
      self.tags.iter().map(String::as_str).collect()
    }
  }

  pub fn parameters_in(&self, location: ParameterLocation) -> impl Iterator<Item = &Parameter> {
    self.parameters.iter().filter(move |param| param.location == location)
  }

  /// `GET /users/{id}` style label used in diagnostics.
  pub fn label(&self) -> String {
    format!("{} {}", self.method.as_str().to_uppercase(), self.path)
  }
}
