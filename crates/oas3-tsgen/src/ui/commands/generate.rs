use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{Local, Timelike};
use crossterm::style::Stylize;

use crate::{
  generator::{
    GeneratorConfig,
    codegen::module::{HTTP_STUB, RESPONSE_TYPE_STUB},
    document::ApiDocument,
    metrics::GenerationStats,
    naming::constants::{HTTP_FILE, INDEX_FILE, MODULES_DIR, RESPONSE_TYPE_FILE},
    orchestrator::{GeneratedOutput, Orchestrator},
  },
  ui::{Colors, FormatterKind, GenerateCommand},
  utils::{
    format::SourceFormatter,
    spec::{SpecLoader, SpecSource},
  },
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub input: SpecSource,
  /// `<root>/<out-dir>`.
  pub output_dir: PathBuf,
  pub generator: GeneratorConfig,
  pub formatter: SourceFormatter,
  pub verbose: bool,
  pub quiet: bool,
}

/// A formatted file ready to be written, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
struct OutputFile {
  path: PathBuf,
  contents: String,
  /// Support files are created once and then left to the user.
  write_once: bool,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let GenerateCommand {
      root,
      input,
      out_dir,
      default_tag,
      formatter,
      prettier_bin,
      line_ending,
      verbose,
      quiet,
    } = command;

    if verbose && quiet {
      anyhow::bail!("--verbose and --quiet cannot be used together");
    }
    if input.trim().is_empty() {
      anyhow::bail!("Input (-i) must be a URL or a file path");
    }
    let default_tag = default_tag.trim();
    if default_tag.is_empty() {
      anyhow::bail!("--default-tag must not be empty");
    }

    let formatter = match formatter {
      FormatterKind::Builtin => SourceFormatter::Builtin { line_ending },
      FormatterKind::Prettier => SourceFormatter::Prettier {
        binary: prettier_bin,
        line_ending,
      },
    };

    Ok(Self {
      input: SpecSource::parse(&input),
      output_dir: root.join(out_dir),
      generator: GeneratorConfig::builder().default_tag(default_tag).build(),
      formatter,
      verbose,
      quiet,
    })
  }

  async fn load_document(&self) -> anyhow::Result<ApiDocument> {
    SpecLoader::open(&self.input).await?.parse()
  }

  /// Formats every generated file in memory. Nothing is written if any of
  /// them fails.
  async fn format_output(&self, output: &GeneratedOutput) -> anyhow::Result<Vec<OutputFile>> {
    let mut files = Vec::with_capacity(output.modules.len() + 3);

    for module in &output.modules {
      let path = Path::new(MODULES_DIR).join(format!("{}.ts", module.file_stem));
      files.push(OutputFile {
        contents: self
          .formatter
          .format(&module.code)
          .await
          .with_context(|| format!("failed to format {}", path.display()))?,
        path,
        write_once: false,
      });
    }

    let generated = [(INDEX_FILE, output.index.as_str(), false)];
    let support = [(HTTP_FILE, HTTP_STUB, true), (RESPONSE_TYPE_FILE, RESPONSE_TYPE_STUB, true)];
    for (name, source, write_once) in generated.into_iter().chain(support) {
      files.push(OutputFile {
        path: PathBuf::from(name),
        contents: self
          .formatter
          .format(source)
          .await
          .with_context(|| format!("failed to format {name}"))?,
        write_once,
      });
    }

    Ok(files)
  }

  /// Writes `files` under the output directory and returns the paths
  /// actually written.
  async fn write_output(&self, files: &[OutputFile]) -> anyhow::Result<Vec<PathBuf>> {
    let modules_dir = self.output_dir.join(MODULES_DIR);
    tokio::fs::create_dir_all(&modules_dir)
      .await
      .with_context(|| format!("failed to create {}", modules_dir.display()))?;

    let mut written = vec![];
    for file in files {
      let target = self.output_dir.join(&file.path);
      if file.write_once
        && tokio::fs::try_exists(&target)
          .await
          .with_context(|| format!("failed to check {}", target.display()))?
      {
        continue;
      }
      tokio::fs::write(&target, &file.contents)
        .await
        .with_context(|| format!("failed to write {}", target.display()))?;
      written.push(target);
    }
    Ok(written)
  }
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  const fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading OpenAPI document from: {}", self.config.input)
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_generating(&self, title: &str) {
    let message = if title.is_empty() {
      "Generating TypeScript client modules...".to_string()
    } else {
      format!("Generating TypeScript client modules for {title}...")
    };
    self.info(&message.with(self.colors.primary()).to_string());
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Operations loaded:", stats.operations_loaded.to_string());
    self.stat("Tags generated:", stats.tags_generated.to_string());
    self.stat("Methods generated:", stats.methods_generated.to_string());
    self.stat("Dto declarations:", stats.dto_declarations.to_string());
    self.stat("", format!("{} inlined across tags", stats.dto_inlined));
    self.stat("", format!("{} operation-local", stats.local_declarations));
    let skipped = stats.skipped_count();
    if skipped > 0 {
      self.stat("Skipped:", skipped.to_string());
    }
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }

    self.print_cycles(stats);
    self.print_warnings(stats);
  }

  fn print_cycles(&self, stats: &GenerationStats) {
    if stats.cycles_detected == 0 {
      return;
    }

    self.stat("Cycles:", stats.cycles_detected.to_string());

    if self.config.verbose {
      for (i, cycle) in stats.cycle_details.iter().enumerate() {
        println!(
          "              {}: {}",
          format!("Cycle {}", i + 1).with(self.colors.accent()),
          cycle.join(" -> ").with(self.colors.info())
        );
      }
    }
  }

  /// Label and message of every warning. Skipped items are labelled as such.
  fn warning_lines(&self, stats: &GenerationStats) -> Vec<(&'static str, String)> {
    if self.config.quiet {
      return vec![];
    }

    stats
      .warnings
      .iter()
      .map(|warning| {
        let label = if warning.is_skipped_item() { "Skipped:" } else { "Warning:" };
        (label, warning.to_string())
      })
      .collect()
  }

  fn print_warnings(&self, stats: &GenerationStats) {
    let lines = self.warning_lines(stats);
    if lines.is_empty() {
      return;
    }

    println!();
    for (label, message) in lines {
      eprintln!("{} {}", label.with(self.colors.accent()), message.with(self.colors.primary()));
    }
  }

  fn log_writing(&self) {
    self.info(
      &format!("Writing to: {}", self.config.output_dir.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_written(&self, written: &[PathBuf]) {
    if !self.config.verbose {
      return;
    }
    for path in written {
      println!("              {}", path.display().to_string().with(self.colors.info()));
    }
  }

  fn log_success(&self) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        "Successfully generated TypeScript client modules".with(self.colors.success())
      );
    }
  }
}

pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let document = config.load_document().await?;

  let orchestrator = Orchestrator::new(document, config.generator.clone());
  logger.log_generating(&orchestrator.metadata().title);
  let output = orchestrator.generate()?;
  logger.print_statistics(&output.stats);

  let files = config.format_output(&output).await?;
  logger.log_writing();
  let written = config.write_output(&files).await?;
  logger.log_written(&written);

  logger.log_success();
  Ok(())
}
