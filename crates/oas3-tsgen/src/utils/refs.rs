/// Component sections a local `$ref` can point into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
  Schemas,
  Parameters,
  RequestBodies,
  Responses,
}

impl ComponentKind {
  pub const fn section(self) -> &'static str {
    match self {
      Self::Schemas => "schemas",
      Self::Parameters => "parameters",
      Self::RequestBodies => "requestBodies",
      Self::Responses => "responses",
    }
  }
}

/// Parses a local component reference of the given kind and returns the
/// component name.
///
/// Only pointers of the form `#/components/<section>/<name>` are accepted.
/// The name is unescaped according to JSON Pointer rules (`~1` is `/`, `~0` is
/// `~`). External documents and pointers into other sections yield `None`.
pub fn parse_component_ref(ref_path: &str, kind: ComponentKind) -> Option<String> {
  let rest = ref_path.strip_prefix("#/components/")?;
  let (section, name) = rest.split_once('/')?;
  if section != kind.section() || name.is_empty() || name.contains('/') {
    return None;
  }
  Some(name.replace("~1", "/").replace("~0", "~"))
}

/// Extracts the schema name from a `#/components/schemas/<name>` pointer.
pub fn parse_schema_ref_path(ref_path: &str) -> Option<String> {
  parse_component_ref(ref_path, ComponentKind::Schemas)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn schema_refs_resolve_to_names() {
    assert_eq!(parse_schema_ref_path("#/components/schemas/User"), Some("User".to_string()));
    assert_eq!(
      parse_schema_ref_path("#/components/schemas/a~1b~0c"),
      Some("a/b~c".to_string())
    );
  }

  #[test]
  fn foreign_refs_are_rejected() {
    assert_eq!(parse_schema_ref_path("#/components/parameters/Page"), None);
    assert_eq!(parse_schema_ref_path("other.json#/components/schemas/User"), None);
    assert_eq!(parse_schema_ref_path("#/components/schemas/"), None);
    assert_eq!(parse_schema_ref_path("#/components/schemas/User/properties/id"), None);
  }

  #[test]
  fn component_kinds_match_their_section() {
    assert_eq!(
      parse_component_ref("#/components/requestBodies/NewPet", ComponentKind::RequestBodies),
      Some("NewPet".to_string())
    );
    assert_eq!(
      parse_component_ref("#/components/responses/NotFound", ComponentKind::Parameters),
      None
    );
  }
}
