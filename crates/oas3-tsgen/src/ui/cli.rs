use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use super::colors::{ColorMode, Colors, ThemeMode};
use crate::{
  generator::{DEFAULT_TAG, naming::constants::DEFAULT_OUTPUT_DIR},
  utils::format::LineEnding,
};

const DEFAULT_INPUT: &str = "http://localhost:3000/api-json";

#[derive(Parser, Debug)]
#[command(name = "oas3-tsgen")]
#[command(author, version, about = "OpenAPI to TypeScript client generator")]
#[command(styles = Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information from an OpenAPI document
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Generate TypeScript client modules from an OpenAPI document
  Generate(GenerateCommand),
}

#[derive(Args, Debug)]
pub struct GenerateCommand {
  /// Project root the output directory is resolved against
  #[arg(short, long, value_name = "DIR", default_value = ".")]
  pub root: PathBuf,

  /// URL or path of the OpenAPI document (JSON or YAML)
  #[arg(short, long, value_name = "URL|FILE", default_value = DEFAULT_INPUT)]
  pub input: String,

  /// Output directory, relative to the project root
  #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
  pub out_dir: PathBuf,

  /// Tag assigned to operations that declare none
  #[arg(long, value_name = "TAG", default_value = DEFAULT_TAG)]
  pub default_tag: String,

  /// Formatter applied to generated sources
  #[arg(long, value_enum, default_value = "builtin")]
  pub formatter: FormatterKind,

  /// Prettier executable used with `--formatter prettier`
  #[arg(long, value_name = "BIN", default_value = "prettier")]
  pub prettier_bin: PathBuf,

  /// Line endings of the generated files
  #[arg(long, value_enum, default_value = "lf")]
  pub line_ending: LineEnding,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatterKind {
  Builtin,
  Prettier,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List all operations with the client method names they generate
  Operations {
    /// URL or path of the OpenAPI document (JSON or YAML)
    #[arg(short, long, value_name = "URL|FILE")]
    input: String,

    /// Tag assigned to operations that declare none
    #[arg(long, value_name = "TAG", default_value = DEFAULT_TAG)]
    default_tag: String,
  },
}
