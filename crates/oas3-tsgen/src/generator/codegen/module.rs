use std::collections::HashSet;

use itertools::Itertools;

use super::{declarations::render_declaration, methods::render_method, tag_emitter::TagModule};
use crate::generator::{
  ast::{Declaration, RenderError},
  metrics::GenerationWarning,
  naming::{constants::MODULES_DIR, identifiers::TagIdents},
};

const ESLINT_HEADER: &str = "/* eslint-disable @typescript-eslint/no-explicit-any */";
const GENERATED_NOTICE: &str = "AUTO-GENERATED by oas3-tsgen. DO NOT EDIT!";

/// Written once to `http.ts`; the user points it at their own HTTP instance.
pub const HTTP_STUB: &str = "/**
 * This file is only written once and never overwritten.
 * Import your axios instance (or anything exposing a compatible `request`
 * method) and export it as `$http`.
 */
import $http from '@/utils/http'

export { $http }
";

/// Written once to `responseType.ts`; `T` is the type of the response data.
pub const RESPONSE_TYPE_STUB: &str = "/* eslint-disable @typescript-eslint/no-explicit-any */
/**
 * This file is only written once and never overwritten.
 * Adjust the envelope to match your API; the generic `T` is the response data type.
 */
export type { AxiosRequestConfig } from 'axios'

export interface ResponseType<T = any> {
  code?: number
  status?: number
  message?: string
  success?: boolean
  data?: T
}
";

/// Document details and import paths shared by every rendered module.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ModuleContext<'a> {
  pub title: &'a str,
  pub version: &'a str,
  pub transport_module: &'a str,
  pub response_module: &'a str,
}

impl ModuleContext<'_> {
  fn banner(&self) -> String {
    let heading = [self.title.trim(), self.version.trim()]
      .into_iter()
      .filter(|part| !part.is_empty())
      .join(" ")
      .replace("*/", "*\\/");
    if heading.is_empty() {
      format!("/**\n * {GENERATED_NOTICE}\n */")
    } else {
      format!("/**\n * {GENERATED_NOTICE}\n * {heading}\n */")
    }
  }
}

/// Renders one tag module: header, imports, the pruned Dto declarations, the
/// tag-local declarations, the class and its singleton.
///
/// Dto identifiers are already unique. Two operation-local names can still
/// render alike when their property keys differ only in characters replaced
/// by `_`; the first one wins and a warning is recorded.
pub(crate) fn render_tag_module(
  module: &TagModule,
  dtos: &[&Declaration],
  context: &ModuleContext<'_>,
  warnings: &mut Vec<GenerationWarning>,
) -> Result<String, RenderError> {
  let functions = module.functions();
  let mut seen = HashSet::new();
  let mut blocks = vec![
    format!("{ESLINT_HEADER}\n{}", context.banner()),
    format!(
      "import {{ $http }} from '{}'\nimport {{ ResponseType, AxiosRequestConfig }} from '{}'",
      context.transport_module, context.response_module
    ),
  ];

  for declaration in dtos.iter().copied().chain(module.declarations().iter()) {
    let name = declaration.name().render(functions)?;
    if !seen.insert(name.clone()) {
      warnings.push(GenerationWarning::DeclarationCollision {
        tag: module.tag.clone(),
        name,
      });
      continue;
    }
    blocks.push(render_declaration(declaration, functions)?);
  }

  let methods = module
    .methods()
    .iter()
    .map(|method| render_method(method, functions))
    .collect::<Result<Vec<_>, _>>()?;
  let class_name = &module.idents.class_name;
  if methods.is_empty() {
    blocks.push(format!("export class {class_name} {{}}"));
  } else {
    blocks.push(format!("export class {class_name} {{\n{}\n}}", methods.join("\n\n")));
  }
  blocks.push(format!(
    "export const {} = new {class_name}()",
    module.idents.instance_name
  ));

  let mut out = blocks.join("\n\n");
  out.push('\n');
  Ok(out)
}

/// Type-only re-export of each class plus a value re-export of its instance.
pub(crate) fn render_index<'a>(modules: impl IntoIterator<Item = &'a TagIdents>) -> String {
  let mut out = format!("/* {GENERATED_NOTICE} */\n");
  for idents in modules {
    let source = format!("./{MODULES_DIR}/{}", idents.file_stem);
    out.push_str(&format!("export type {{ {} }} from '{source}'\n", idents.class_name));
    out.push_str(&format!("export {{ {} }} from '{source}'\n", idents.instance_name));
  }
  out
}
