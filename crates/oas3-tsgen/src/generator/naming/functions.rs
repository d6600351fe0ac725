use std::sync::LazyLock;

use indexmap::IndexSet;
use regex::Regex;

use crate::generator::{
  ast::HttpMethod,
  naming::{
    constants::{API_PATH_PREFIX, BY_PARAM_PREFIX},
    identifiers::{capitalize, param_identifier, pascal_words},
  },
};

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{([^{}]*)\}").unwrap());

/// Piece of a path segment: literal text or a `{name}` placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Piece<'a> {
  Literal(&'a str),
  Placeholder(&'a str),
}

fn pieces(segment: &str) -> Vec<Piece<'_>> {
  let mut out = vec![];
  let mut last = 0;
  for captures in PLACEHOLDER_RE.captures_iter(segment) {
    let (Some(whole), Some(name)) = (captures.get(0), captures.get(1)) else {
      continue;
    };
    if whole.start() > last {
      out.push(Piece::Literal(&segment[last..whole.start()]));
    }
    out.push(Piece::Placeholder(name.as_str()));
    last = whole.end();
  }
  if last < segment.len() {
    out.push(Piece::Literal(&segment[last..]));
  }
  out
}

/// Derives a method name from the HTTP method and path template alone.
///
/// ```text
/// GET /api/users/{id}        => getUsersById
/// PUT /items/{itemId}/status => putItemsByItemIdStatus
/// ```
pub fn function_name(method: HttpMethod, path: &str) -> String {
  let mut segments = path.split('/').filter(|segment| !segment.is_empty()).peekable();
  if segments.peek() == Some(&API_PATH_PREFIX) {
    segments.next();
  }

  let mut name = method.as_str().to_string();
  for segment in segments {
    for piece in pieces(segment) {
      match piece {
        Piece::Placeholder(param) => {
          name.push_str(BY_PARAM_PREFIX);
          name.push_str(&capitalize(&pascal_words_preserving(param)));
        }
        Piece::Literal(text) => name.push_str(&pascal_words_preserving(text)),
      }
    }
  }
  name
}

/// Capitalizes a plain word as-is, splitting on invalid characters otherwise.
fn pascal_words_preserving(text: &str) -> String {
  if text.chars().all(|ch| ch.is_ascii_alphanumeric()) {
    capitalize(text)
  } else {
    pascal_words(text)
  }
}

/// Placeholder names of a path template in order of first appearance.
pub fn path_placeholders(path: &str) -> IndexSet<String> {
  PLACEHOLDER_RE
    .captures_iter(path)
    .filter_map(|captures| captures.get(1))
    .map(|name| name.as_str().to_string())
    .collect()
}

/// Renders the request URL expression.
///
/// Templates without placeholders become single-quoted strings; otherwise a
/// template literal interpolating each placeholder's argument name.
pub fn url_expression(path: &str) -> String {
  if !PLACEHOLDER_RE.is_match(path) {
    return format!("'{}'", path.replace('\\', "\\\\").replace('\'', "\\'"));
  }

  let mut out = String::from("`");
  for piece in pieces(path) {
    match piece {
      Piece::Literal(text) => out.push_str(&text.replace('\\', "\\\\").replace('`', "\\`")),
      Piece::Placeholder(name) => {
        out.push_str("${");
        out.push_str(&param_identifier(name));
        out.push('}');
      }
    }
  }
  out.push('`');
  out
}
