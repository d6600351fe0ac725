pub(crate) mod declarations;
pub(crate) mod methods;
pub(crate) mod module;
pub(crate) mod tag_emitter;

#[cfg(test)]
mod tests;

pub(crate) use module::{ModuleContext, render_index, render_tag_module};
pub(crate) use tag_emitter::TagEmitter;
