use crate::generator::{
  ast::{DeclBody, Declaration, FunctionNames, Property, RenderError},
  naming::identifiers::quote_property,
};

pub(crate) fn render_declaration(declaration: &Declaration, functions: &FunctionNames) -> Result<String, RenderError> {
  let name = declaration.name().render(functions)?;

  match declaration.body() {
    DeclBody::Alias(target) => Ok(format!("export type {name} = {}", target.render(functions)?)),
    DeclBody::Interface(properties) if properties.is_empty() => Ok(format!("export interface {name} {{}}")),
    DeclBody::Interface(properties) => {
      let members = properties
        .iter()
        .map(|property| render_property(property, functions))
        .collect::<Result<Vec<_>, _>>()?;
      Ok(format!("export interface {name} {{\n{}\n}}", members.join("\n")))
    }
  }
}

fn render_property(property: &Property, functions: &FunctionNames) -> Result<String, RenderError> {
  let marker = if property.optional { "?" } else { "" };
  Ok(format!(
    "  {}{marker}: {}",
    quote_property(&property.name),
    property.ty.render(functions)?
  ))
}
