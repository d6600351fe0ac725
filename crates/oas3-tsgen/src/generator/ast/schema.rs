use indexmap::{IndexMap, IndexSet};
use serde_json::{Map, Value};

/// Scalar schema types, as declared by the `type` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveKind {
  String,
  Number,
  Integer,
  Boolean,
}

impl PrimitiveKind {
  pub fn from_type_name(name: &str) -> Option<Self> {
    match name {
      "string" => Some(Self::String),
      "number" => Some(Self::Number),
      "integer" => Some(Self::Integer),
      "boolean" => Some(Self::Boolean),
      _ => None,
    }
  }

  /// TypeScript has a single numeric type, so `integer` maps to `number`.
  pub const fn keyword(self) -> &'static str {
    match self {
      Self::String => "string",
      Self::Number | Self::Integer => "number",
      Self::Boolean => "boolean",
    }
  }
}

/// Object schema with its properties in document order.
///
/// `properties` is `None` when the schema declares no usable property map
/// (missing, or not a mapping).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectNode {
  pub properties: Option<IndexMap<String, SchemaNode>>,
  pub required: IndexSet<String>,
}

impl ObjectNode {
  pub fn is_required(&self, name: &str) -> bool {
    self.required.contains(name)
  }
}

/// Validated subset of the OpenAPI Schema Object consumed by the generator.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
  Primitive(PrimitiveKind),
  Array(Box<SchemaNode>),
  Object(ObjectNode),
  Reference(String),
  /// Untyped schemas, composition keywords and anything not modelled above.
  Any,
}

impl SchemaNode {
  /// Lowers a raw JSON schema value. Never fails: shapes that cannot be
  /// modelled become [`SchemaNode::Any`] or an object without properties.
  pub fn from_value(value: &Value) -> Self {
    let Value::Object(map) = value else {
      return Self::Any;
    };

    if let Some(Value::String(pointer)) = map.get("$ref") {
      return Self::Reference(pointer.clone());
    }

    if ["oneOf", "anyOf", "allOf"].iter().any(|key| map.contains_key(*key)) {
      return Self::Any;
    }

    match declared_type(map) {
      Some("array") => Self::array_from(map),
      Some("object") => Self::object_from(map),
      Some(other) => PrimitiveKind::from_type_name(other).map_or(Self::Any, Self::Primitive),
      None if map.contains_key("properties") => Self::object_from(map),
      None if map.contains_key("items") => Self::array_from(map),
      None => Self::Any,
    }
  }

  fn array_from(map: &Map<String, Value>) -> Self {
    let item = map.get("items").map_or(Self::Any, Self::from_value);
    Self::Array(Box::new(item))
  }

  fn object_from(map: &Map<String, Value>) -> Self {
    let properties = map.get("properties").and_then(Value::as_object).map(|props| {
      props
        .iter()
        .map(|(name, schema)| (name.clone(), Self::from_value(schema)))
        .collect::<IndexMap<_, _>>()
    });

    let required = map
      .get("required")
      .and_then(Value::as_array)
      .map(|names| names.iter().filter_map(Value::as_str).map(String::from).collect())
      .unwrap_or_default();

    Self::Object(ObjectNode { properties, required })
  }

  pub const fn as_primitive(&self) -> Option<PrimitiveKind> {
    match self {
      Self::Primitive(kind) => Some(*kind),
      _ => None,
    }
  }
}

/// Reads `type`, accepting the 3.1 list form and skipping `"null"`.
fn declared_type(map: &Map<String, Value>) -> Option<&str> {
  match map.get("type")? {
    Value::String(name) => Some(name.as_str()),
    Value::Array(names) => names.iter().filter_map(Value::as_str).find(|name| *name != "null"),
    _ => None,
  }
}
