use crate::generator::{
  ast::{FunctionNames, MethodDef, RenderError},
  naming::{
    constants::{BODY_ARG, CONFIG_ARG, QUERY_ARG},
    functions::url_expression,
  },
};

const INDENT: &str = "  ";

pub(crate) fn render_method(method: &MethodDef, functions: &FunctionNames) -> Result<String, RenderError> {
  let mut args = vec![];
  for arg in &method.path_args {
    args.push(format!("{}: {}", arg.ident, arg.ty.render(functions)?));
  }
  if let Some(query) = &method.query {
    args.push(format!("{QUERY_ARG}: {}", query.render(functions)?));
  }
  if let Some(body) = &method.body {
    args.push(format!("{BODY_ARG}: {}", body.render(functions)?));
  }
  args.push(format!("{CONFIG_ARG}: AxiosRequestConfig = {{}}"));

  let mut fields = vec![
    format!("url: {}", url_expression(&method.path)),
    format!("method: '{}'", method.method.as_str()),
  ];
  if method.query.is_some() {
    fields.push(QUERY_ARG.to_string());
  }
  if method.body.is_some() {
    fields.push(BODY_ARG.to_string());
  }
  fields.push(format!("...{CONFIG_ARG}"));

  let mut out = render_jsdoc(method).unwrap_or_default();
  out.push_str(&format!(
    "{INDENT}{}({}): Promise<ResponseType<{}>> {{\n",
    method.function_name,
    args.join(", "),
    method.response.render(functions)?
  ));
  out.push_str(&format!(
    "{INDENT}{INDENT}return $http.request({{ {} }})\n",
    fields.join(", ")
  ));
  out.push_str(INDENT);
  out.push('}');
  Ok(out)
}

fn render_jsdoc(method: &MethodDef) -> Option<String> {
  let mut sections: Vec<Vec<String>> = vec![];
  for text in [&method.summary, &method.description].into_iter().flatten() {
    if text.trim().is_empty() {
      continue;
    }
    sections.push(text.trim().lines().map(|line| line.trim_end().replace("*/", "*\\/")).collect());
  }
  if method.deprecated {
    sections.push(vec!["@deprecated".to_string()]);
  }
  if sections.is_empty() {
    return None;
  }

  let mut out = format!("{INDENT}/**\n");
  for (index, section) in sections.iter().enumerate() {
    if index > 0 {
      out.push_str(&format!("{INDENT} *\n"));
    }
    for line in section {
      if line.is_empty() {
        out.push_str(&format!("{INDENT} *\n"));
      } else {
        out.push_str(&format!("{INDENT} * {line}\n"));
      }
    }
  }
  out.push_str(&format!("{INDENT} */\n"));
  Some(out)
}
