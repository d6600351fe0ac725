use std::{path::PathBuf, process::Stdio};

use anyhow::Context;
use clap::ValueEnum;
use tokio::{io::AsyncWriteExt, process::Command};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LineEnding {
  #[default]
  Lf,
  Crlf,
}

impl LineEnding {
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Lf => "\n",
      Self::Crlf => "\r\n",
    }
  }

  const fn prettier_flag(self) -> &'static str {
    match self {
      Self::Lf => "lf",
      Self::Crlf => "crlf",
    }
  }
}

/// Plain-text-in, plain-text-out formatter applied to every generated file.
#[derive(Debug, Clone)]
pub enum SourceFormatter {
  Builtin { line_ending: LineEnding },
  Prettier { binary: PathBuf, line_ending: LineEnding },
}

impl SourceFormatter {
  pub async fn format(&self, source: &str) -> anyhow::Result<String> {
    match self {
      Self::Builtin { line_ending } => Ok(normalize_source(source, *line_ending)),
      Self::Prettier { binary, line_ending } => format_with_prettier(binary, source, *line_ending).await,
    }
  }
}

/// Strips trailing whitespace, collapses runs of blank lines, trims leading
/// blank lines and ends the text with exactly one line ending.
#[must_use]
pub fn normalize_source(source: &str, line_ending: LineEnding) -> String {
  let mut lines = Vec::new();
  let mut previous_blank = true;

  for line in source.lines() {
    let line = line.trim_end();
    let blank = line.is_empty();
    if blank && previous_blank {
      continue;
    }
    lines.push(line);
    previous_blank = blank;
  }

  while lines.last().is_some_and(|line| line.is_empty()) {
    lines.pop();
  }

  let eol = line_ending.as_str();
  let mut out = lines.join(eol);
  out.push_str(eol);
  out
}

async fn format_with_prettier(binary: &PathBuf, input: &str, line_ending: LineEnding) -> anyhow::Result<String> {
  let mut child = Command::new(binary)
    .args(["--parser", "typescript"])
    .arg("--no-semi")
    .arg("--single-quote")
    .args(["--print-width", "80"])
    .args(["--tab-width", "2"])
    .args(["--trailing-comma", "none"])
    .args(["--end-of-line", line_ending.prettier_flag()])
    .stdin(Stdio::piped())
    .stdout(Stdio::piped())
    .stderr(Stdio::piped())
    .spawn()
    .with_context(|| format!("failed to start {}", binary.display()))?;

  if let Some(mut stdin) = child.stdin.take() {
    stdin.write_all(input.as_bytes()).await?;
  }

  let output = child.wait_with_output().await?;
  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    anyhow::bail!("prettier failed: {stderr}");
  }

  Ok(String::from_utf8(output.stdout)?)
}
