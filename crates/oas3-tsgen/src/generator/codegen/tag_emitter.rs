use indexmap::{IndexMap, IndexSet};

use crate::generator::{
  ast::{DeclName, DtoNames, FunctionNames, MethodDef, Operation},
  converter::{CompiledOperation, DeclarationBuffer, OperationCompiler},
  metrics::GenerationWarning,
  naming::identifiers::TagIdents,
};

/// Methods and tag-local declarations collected for one tag.
#[derive(Debug, Clone)]
pub(crate) struct TagModule {
  pub tag: String,
  pub idents: TagIdents,
  methods: Vec<MethodDef>,
  declarations: DeclarationBuffer,
  functions: FunctionNames,
}

impl TagModule {
  pub(crate) fn new(tag: &str, idents: TagIdents, dto_names: &DtoNames) -> Self {
    Self {
      tag: tag.to_string(),
      idents,
      methods: vec![],
      declarations: DeclarationBuffer::default(),
      functions: FunctionNames::with_dto_names(dto_names.clone()),
    }
  }

  /// Adds a compiled operation, binding its function name in this tag's name
  /// table. Returns `false` when the name is already bound to another
  /// operation of this tag; nothing is added in that case.
  pub(crate) fn absorb(&mut self, compiled: &CompiledOperation) -> bool {
    if !self.functions.bind(compiled.method.key, &compiled.method.function_name) {
      return false;
    }
    self.declarations.extend_from(&compiled.declarations);
    self.methods.push(compiled.method.clone());
    true
  }

  pub(crate) fn methods(&self) -> &[MethodDef] {
    &self.methods
  }

  pub(crate) const fn declarations(&self) -> &DeclarationBuffer {
    &self.declarations
  }

  pub(crate) const fn functions(&self) -> &FunctionNames {
    &self.functions
  }

  /// Names referenced by the tag-local declarations and method signatures.
  pub(crate) fn referenced_names(&self) -> IndexSet<&DeclName> {
    let mut names = IndexSet::new();
    for declaration in self.declarations.iter() {
      names.extend(declaration.references());
    }
    for method in &self.methods {
      names.extend(method.references());
    }
    names
  }
}

/// Groups compiled operations by tag in document order.
pub(crate) struct TagEmitter<'c, 'r, 's> {
  compiler: &'c OperationCompiler<'r, 's>,
  default_tag: &'c str,
  dto_names: &'c DtoNames,
}

impl<'c, 'r, 's> TagEmitter<'c, 'r, 's> {
  pub(crate) const fn new(
    compiler: &'c OperationCompiler<'r, 's>,
    default_tag: &'c str,
    dto_names: &'c DtoNames,
  ) -> Self {
    Self {
      compiler,
      default_tag,
      dto_names,
    }
  }

  /// Compiles every operation once and adds it to each tag it carries.
  ///
  /// Tags are created on first use. A tag whose identifiers clash with an
  /// earlier tag's is numbered (`Pet2`, `Pet3`, ...) with a warning. An
  /// operation whose function name is already bound within a tag is skipped.
  pub(crate) fn handle(
    &self,
    operations: &[Operation],
    warnings: &mut Vec<GenerationWarning>,
  ) -> IndexMap<String, TagModule> {
    let mut modules = IndexMap::<String, TagModule>::new();
    let mut claimed = IndexMap::<String, String>::new();

    for operation in operations {
      let compiled = self.compiler.compile(operation, warnings);

      for tag in operation.effective_tags(self.default_tag) {
        let module = modules.entry(tag.to_string()).or_insert_with(|| {
          let idents = Self::unique_idents(tag, &mut claimed, warnings);
          TagModule::new(tag, idents, self.dto_names)
        });

        if !module.absorb(&compiled) {
          warnings.push(GenerationWarning::DuplicateFunctionName {
            tag: tag.to_string(),
            operation: operation.label(),
            function: compiled.method.function_name.clone(),
          });
        }
      }
    }

    modules
  }

  fn unique_idents(
    tag: &str,
    claimed: &mut IndexMap<String, String>,
    warnings: &mut Vec<GenerationWarning>,
  ) -> TagIdents {
    let preferred = TagIdents::from_tag(tag);
    let Some(existing) = claimed.get(&preferred.clash_key()).cloned() else {
      claimed.insert(preferred.clash_key(), tag.to_string());
      return preferred;
    };

    let mut ordinal = 2;
    let idents = loop {
      let candidate = preferred.numbered(ordinal);
      if !claimed.contains_key(&candidate.clash_key()) {
        break candidate;
      }
      ordinal += 1;
    };
    warnings.push(GenerationWarning::TagRenamed {
      tag: tag.to_string(),
      class_name: preferred.class_name,
      existing,
      renamed: idents.class_name.clone(),
    });
    claimed.insert(idents.clash_key(), tag.to_string());
    idents
  }
}
