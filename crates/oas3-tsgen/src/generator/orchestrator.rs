//! Orchestration for the OpenAPI to TypeScript client pipeline.
//!
//! The [`Orchestrator`] owns a loaded [`ApiDocument`] and runs the engine end
//! to end, in memory:
//!
//! 1. builds the `Dto_*` pool from `components.schemas`
//! 2. compiles every operation once and groups the results by tag
//! 3. prunes the Dto pool down to what each tag references
//! 4. renders one module per tag plus the index
//!
//! Nothing is written here; the caller formats and writes [`GeneratedOutput`].

use crate::generator::{
  GeneratorConfig,
  analyzer::DependencyPruner,
  ast::FunctionNames,
  codegen::{ModuleContext, TagEmitter, render_index, render_tag_module},
  converter::{DtoRegistry, OperationCompiler, SchemaResolver},
  document::{ApiDocument, DocumentInfo},
  metrics::GenerationStats,
};

pub struct Orchestrator {
  document: ApiDocument,
  config: GeneratorConfig,
}

/// One rendered tag module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModule {
  pub tag: String,
  /// File name under `modules/`, without the `.ts` extension.
  pub file_stem: String,
  pub code: String,
}

#[derive(Debug, Clone)]
pub struct GeneratedOutput {
  pub modules: Vec<GeneratedModule>,
  pub index: String,
  pub stats: GenerationStats,
}

impl Orchestrator {
  pub fn new(document: ApiDocument, config: GeneratorConfig) -> Self {
    Self { document, config }
  }

  pub fn metadata(&self) -> &DocumentInfo {
    &self.document.info
  }

  /// Runs the whole pipeline.
  ///
  /// Malformed schemas, unresolvable references and naming clashes are
  /// recovered from and reported in [`GenerationStats::warnings`].
  ///
  /// # Errors
  ///
  /// Fails only if a declaration name cannot be rendered, which means an
  /// operation-owned name escaped the tag it was compiled for.
  pub fn generate(&self) -> anyhow::Result<GeneratedOutput> {
    let mut stats = GenerationStats {
      operations_loaded: self.document.operations.len(),
      ..GenerationStats::default()
    };
    let mut warnings = self.document.warnings.clone();

    let resolver = SchemaResolver::new(&self.document.schemas);
    let registry = DtoRegistry::build_all(&resolver, &mut warnings);
    stats.dto_declarations = registry.len();

    let dto_names = FunctionNames::with_dto_names(registry.names().clone());
    let cycles = registry
      .cycles()
      .into_iter()
      .map(|cycle| cycle.into_iter().map(|name| name.render(&dto_names)).collect())
      .collect::<Result<Vec<Vec<String>>, _>>()?;
    stats.record_cycles(cycles);

    let compiler = OperationCompiler::new(&resolver);
    let emitter = TagEmitter::new(&compiler, &self.config.default_tag, registry.names());
    let tag_modules = emitter.handle(&self.document.operations, &mut warnings);

    let pruner = DependencyPruner::new(&registry);
    let context = ModuleContext {
      title: &self.document.info.title,
      version: &self.document.info.version,
      transport_module: &self.config.transport_module,
      response_module: &self.config.response_module,
    };

    let mut modules = Vec::with_capacity(tag_modules.len());
    for (tag, module) in &tag_modules {
      let dtos = pruner.prune(module.referenced_names());
      let code = render_tag_module(module, &dtos, &context, &mut warnings)?;
      stats.record_tag(module.methods().len(), dtos.len(), module.declarations().len());
      modules.push(GeneratedModule {
        tag: tag.clone(),
        file_stem: module.idents.file_stem.clone(),
        code,
      });
    }

    let index = render_index(tag_modules.values().map(|module| &module.idents));
    stats.record_warnings(warnings);

    Ok(GeneratedOutput { modules, index, stats })
  }
}
