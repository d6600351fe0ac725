use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};

use crate::{
  generator::{document::ApiDocument, naming::functions::function_name},
  ui::{Colors, term_width},
  utils::spec::{SpecLoader, SpecSource},
};

/// Function name, method, path and tags of one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
struct OperationRow {
  function: String,
  method: String,
  path: String,
  tags: String,
}

fn operation_rows(document: &ApiDocument, default_tag: &str) -> Vec<OperationRow> {
  let mut rows = document
    .operations
    .iter()
    .map(|operation| OperationRow {
      function: function_name(operation.method, &operation.path),
      method: operation.method.as_str().to_uppercase(),
      path: operation.path.clone(),
      tags: operation.effective_tags(default_tag).join(", "),
    })
    .collect::<Vec<_>>();
  rows.sort_by(|a, b| a.tags.cmp(&b.tags).then_with(|| a.function.cmp(&b.function)));
  rows
}

pub async fn list_operations(input: &str, default_tag: &str, colors: &Colors) -> anyhow::Result<()> {
  let document = SpecLoader::open(&SpecSource::parse(input)).await?.parse()?;

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut header = Row::new();
  for title in ["FUNCTION", "METHOD", "PATH", "TAGS"] {
    header.add_cell(Cell::new(title).fg(Colors::table(colors.label())));
  }
  table.set_header(header);

  for operation in operation_rows(&document, default_tag.trim()) {
    let mut row = Row::new();
    row.add_cell(
      Cell::new(operation.function)
        .fg(Colors::table(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(
      Cell::new(operation.method)
        .fg(Colors::table(colors.accent()))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(Cell::new(operation.path).fg(Colors::table(colors.primary())));
    row.add_cell(Cell::new(operation.tags).fg(Colors::table(colors.info())));
    table.add_row(row);
  }

  println!("{table}");

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{generator::document::RawDocument, utils::spec::SpecFormat};

  #[test]
  fn rows_are_grouped_by_tag_and_named_like_the_client() {
    let raw = RawDocument::from_slice(crate::fixtures::PETSTORE.as_bytes(), SpecFormat::Json).unwrap();
    let document = ApiDocument::from_raw(raw).unwrap();

    let rows = operation_rows(&document, "common");
    assert_eq!(rows.len(), document.operations.len());

    let health = rows.iter().find(|row| row.path == "/health").unwrap();
    assert_eq!(health.tags, "common");
    assert_eq!(health.function, "getHealth");
    assert_eq!(health.method, "GET");

    let by_id = rows.iter().find(|row| row.function == "getUsersById").unwrap();
    assert_eq!(by_id.path, "/api/users/{id}");

    let tags = rows.iter().map(|row| row.tags.as_str()).collect::<Vec<_>>();
    let mut sorted = tags.clone();
    sorted.sort_unstable();
    assert_eq!(tags, sorted);
  }
}
