use std::{
  ffi::OsStr,
  fmt,
  path::{Path, PathBuf},
};

use anyhow::Context;
use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};
use reqwest::header::CONTENT_TYPE;

use crate::generator::document::{ApiDocument, RawDocument};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpecFormat {
  #[default]
  Json,
  Yaml,
}

impl SpecFormat {
  #[must_use]
  pub fn from_extension(ext: &str) -> Self {
    match ext {
      "yaml" | "yml" => Self::Yaml,
      _ => Self::Json,
    }
  }

  #[must_use]
  pub fn from_path(path: &Path) -> Self {
    path
      .extension()
      .and_then(OsStr::to_str)
      .map_or(Self::default(), Self::from_extension)
  }

  /// Servers label YAML as `application/yaml`, `application/x-yaml` or `text/yaml`.
  #[must_use]
  pub fn from_content_type(content_type: &str) -> Option<Self> {
    let media = mediatype::MediaType::parse(content_type).ok()?;
    match media.subty.as_str() {
      "yaml" | "x-yaml" => Some(Self::Yaml),
      "json" => Some(Self::Json),
      _ => media
        .suffix
        .as_ref()
        .filter(|suffix| suffix.as_str() == "json")
        .map(|_| Self::Json),
    }
  }
}

/// Where the OpenAPI document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecSource {
  Url(String),
  File(PathBuf),
}

impl SpecSource {
  #[must_use]
  pub fn parse(input: &str) -> Self {
    let trimmed = input.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
      Self::Url(trimmed.to_string())
    } else {
      Self::File(PathBuf::from(trimmed))
    }
  }
}

impl fmt::Display for SpecSource {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Url(url) => f.write_str(url),
      Self::File(path) => write!(f, "{}", path.display()),
    }
  }
}

enum Contents {
  Mapped(AsyncMmapFile),
  Fetched(Vec<u8>),
}

pub struct SpecLoader {
  contents: Contents,
  format: SpecFormat,
}

impl SpecLoader {
  pub async fn open(source: &SpecSource) -> anyhow::Result<Self> {
    match source {
      SpecSource::File(path) => {
        let file = AsyncMmapFile::open(path)
          .await
          .with_context(|| format!("failed to read {}", path.display()))?;
        Ok(Self {
          contents: Contents::Mapped(file),
          format: SpecFormat::from_path(path),
        })
      }
      SpecSource::Url(url) => Self::fetch(url).await,
    }
  }

  async fn fetch(url: &str) -> anyhow::Result<Self> {
    let response = reqwest::get(url)
      .await
      .with_context(|| format!("failed to fetch {url}"))?
      .error_for_status()
      .with_context(|| format!("server rejected request for {url}"))?;

    let by_header = response
      .headers()
      .get(CONTENT_TYPE)
      .and_then(|value| value.to_str().ok())
      .and_then(SpecFormat::from_content_type);
    let format = by_header.unwrap_or_else(|| {
      let path = url.split(['?', '#']).next().unwrap_or(url);
      SpecFormat::from_path(Path::new(path))
    });

    let body = response
      .bytes()
      .await
      .with_context(|| format!("failed to read response body from {url}"))?;

    Ok(Self {
      contents: Contents::Fetched(body.to_vec()),
      format,
    })
  }

  #[cfg(test)]
  pub const fn format(&self) -> SpecFormat {
    self.format
  }

  fn as_slice(&self) -> &[u8] {
    match &self.contents {
      Contents::Mapped(file) => file.as_slice(),
      Contents::Fetched(bytes) => bytes.as_slice(),
    }
  }

  pub fn parse(&self) -> anyhow::Result<ApiDocument> {
    let raw = RawDocument::from_slice(self.as_slice(), self.format)?;
    Ok(ApiDocument::from_raw(raw)?)
  }
}
