use strum::Display;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub tags_generated: usize,
  pub operations_loaded: usize,
  pub methods_generated: usize,
  pub dto_declarations: usize,
  pub dto_inlined: usize,
  pub local_declarations: usize,
  pub cycles_detected: usize,
  pub cycle_details: Vec<Vec<String>>,
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub fn record_tag(&mut self, methods: usize, inlined: usize, local: usize) {
    self.tags_generated += 1;
    self.methods_generated += methods;
    self.dto_inlined += inlined;
    self.local_declarations += local;
  }

  pub fn record_cycle(&mut self, cycle: Vec<String>) {
    self.cycles_detected += 1;
    self.cycle_details.push(cycle);
  }

  pub fn record_cycles(&mut self, cycles: Vec<Vec<String>>) {
    for cycle in cycles {
      self.record_cycle(cycle);
    }
  }

  pub fn record_warnings(&mut self, warnings: impl IntoIterator<Item = GenerationWarning>) {
    self.warnings.extend(warnings);
  }

  pub fn skipped_count(&self) -> usize {
    self.warnings.iter().filter(|warning| warning.is_skipped_item()).count()
  }
}

/// Non-fatal issue found while loading or generating.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "{context}: {reason}; typed as any")]
  SchemaDegraded { context: String, reason: String },
  #[strum(to_string = "Skipped operation '{operation}': {error}")]
  OperationSkipped { operation: String, error: String },
  #[strum(to_string = "[{operation}] {message}")]
  OperationSpecific { operation: String, message: String },
  #[strum(to_string = "Tag '{tag}': '{operation}' derives function name '{function}' which is already used; skipped")]
  DuplicateFunctionName {
    tag: String,
    operation: String,
    function: String,
  },
  #[strum(to_string = "Declaration name '{name}' is produced by more than one shape; one is emitted as '{renamed}'")]
  DeclarationRenamed { name: String, renamed: String },
  #[strum(to_string = "Tag '{tag}': declaration name '{name}' is produced by more than one shape; kept the first")]
  DeclarationCollision { tag: String, name: String },
  #[strum(to_string = "Tag '{tag}' maps to class '{class_name}' already used by tag '{existing}'; emitted as '{renamed}'")]
  TagRenamed {
    tag: String,
    class_name: String,
    existing: String,
    renamed: String,
  },
}

impl GenerationWarning {
  pub fn is_skipped_item(&self) -> bool {
    matches!(self, Self::OperationSkipped { .. } | Self::DuplicateFunctionName { .. })
  }
}
