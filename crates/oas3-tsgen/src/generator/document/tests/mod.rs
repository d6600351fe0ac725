mod loading;
mod operations;

use serde_json::Value;

use crate::{
  generator::document::{ApiDocument, LoadError, RawDocument},
  utils::spec::SpecFormat,
};

pub(super) fn load_json(value: &Value) -> Result<ApiDocument, LoadError> {
  let bytes = serde_json::to_vec(value)?;
  ApiDocument::from_raw(RawDocument::from_slice(&bytes, SpecFormat::Json)?)
}
