use std::{collections::HashSet, sync::LazyLock};

use any_ascii::any_ascii;
use inflections::Inflect;
use regex::Regex;

use crate::generator::naming::constants::INSTANCE_SUFFIX;

/// Words that cannot name a function parameter or binding in TypeScript.
pub(crate) static RESERVED_WORDS: LazyLock<HashSet<&str>> = LazyLock::new(|| {
  [
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do", "else", "enum",
    "export", "extends", "false", "finally", "for", "function", "if", "import", "in", "instanceof", "new", "null",
    "return", "super", "switch", "this", "throw", "true", "try", "typeof", "var", "void", "while", "with", "let",
    "static", "yield", "await", "implements", "interface", "package", "private", "protected", "public",
    // generated signatures already bind these
    "params", "data", "axiosConfig",
  ]
  .into_iter()
  .collect()
});

static IDENTIFIER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());
static INVALID_CHAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_$]").unwrap());
static WORD_SPLIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]+").unwrap());

pub fn is_ts_identifier(name: &str) -> bool {
  IDENTIFIER_RE.is_match(name)
}

/// Transliterates to ASCII and replaces every character that is not valid in
/// a TypeScript identifier with `_`. Used for declaration name fragments.
pub fn sanitize_fragment(input: &str) -> String {
  let ascii = any_ascii(input);
  let replaced = INVALID_CHAR_RE.replace_all(&ascii, "_");
  if replaced.is_empty() {
    "_".to_string()
  } else {
    replaced.into_owned()
  }
}

/// Property key as written inside an interface body.
pub fn quote_property(name: &str) -> String {
  if is_ts_identifier(name) {
    name.to_string()
  } else {
    format!("'{}'", name.replace('\\', "\\\\").replace('\'', "\\'"))
  }
}

/// Upper-cases the first character and keeps the rest.
pub fn capitalize(word: &str) -> String {
  let mut chars = word.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

/// Splits a free-form fragment into ASCII words and joins them capitalized.
/// `"user-profiles"` becomes `"UserProfiles"`.
pub fn pascal_words(input: &str) -> String {
  let ascii = any_ascii(input);
  WORD_SPLIT_RE
    .split(&ascii)
    .filter(|word| !word.is_empty())
    .map(capitalize)
    .collect()
}

fn guard_identifier(candidate: String) -> String {
  let starts_with_digit = candidate.chars().next().is_some_and(|ch| ch.is_ascii_digit());
  if starts_with_digit || RESERVED_WORDS.contains(candidate.as_str()) {
    format!("_{candidate}")
  } else {
    candidate
  }
}

/// Argument name for a path parameter.
///
/// Valid identifiers are kept as written; anything else is camel-cased from its
/// ASCII words. Reserved words and leading digits gain a `_` prefix.
pub fn param_identifier(name: &str) -> String {
  if is_ts_identifier(name) {
    return guard_identifier(name.to_string());
  }

  let camel = any_ascii(name).to_camel_case();
  let cleaned = INVALID_CHAR_RE.replace_all(&camel, "").into_owned();
  if cleaned.is_empty() {
    return "param".to_string();
  }
  guard_identifier(cleaned)
}

/// Identifiers derived from a tag name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagIdents {
  /// Module file name without extension.
  pub file_stem: String,
  pub class_name: String,
  pub instance_name: String,
}

impl TagIdents {
  pub fn from_tag(tag: &str) -> Self {
    let tag = tag.trim();
    let base = if is_ts_identifier(tag) {
      tag.to_string()
    } else {
      let camel = INVALID_CHAR_RE
        .replace_all(&any_ascii(tag).to_camel_case(), "")
        .into_owned();
      if camel.is_empty() {
        "_".to_string()
      } else {
        guard_identifier(camel)
      }
    };

    Self::from_base(base)
  }

  /// The same identifiers with `ordinal` appended to the base name.
  #[must_use]
  pub fn numbered(&self, ordinal: usize) -> Self {
    Self::from_base(format!("{}{ordinal}", self.file_stem))
  }

  /// Key under which two tags clash: equal class names, or file stems that
  /// differ only in case.
  pub fn clash_key(&self) -> String {
    self.file_stem.to_lowercase()
  }

  fn from_base(base: String) -> Self {
    Self {
      class_name: capitalize(&base),
      instance_name: format!("{base}{INSTANCE_SUFFIX}"),
      file_stem: base,
    }
  }
}
