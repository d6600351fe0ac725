pub(crate) mod analyzer;
pub(crate) mod ast;
pub(crate) mod codegen;
pub(crate) mod converter;
pub mod document;
pub mod metrics;
pub mod naming;
pub mod orchestrator;


/// Tag given to operations that declare none.
pub const DEFAULT_TAG: &str = "common";
pub const DEFAULT_TRANSPORT_MODULE: &str = "../http";
pub const DEFAULT_RESPONSE_MODULE: &str = "../responseType";

/// Engine options. Everything defaults to the layout the write-once support
/// files expect.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct GeneratorConfig {
  #[builder(into, default = DEFAULT_TAG.to_string())]
  pub default_tag: String,
  /// Import path of `$http`, relative to a tag module.
  #[builder(into, default = DEFAULT_TRANSPORT_MODULE.to_string())]
  pub transport_module: String,
  /// Import path of `ResponseType` and `AxiosRequestConfig`, relative to a tag module.
  #[builder(into, default = DEFAULT_RESPONSE_MODULE.to_string())]
  pub response_module: String,
}

impl Default for GeneratorConfig {
  fn default() -> Self {
    Self::builder().build()
  }
}
