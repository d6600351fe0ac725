pub mod format;
pub mod refs;
pub mod spec;

pub(crate) use refs::{ComponentKind, parse_component_ref, parse_schema_ref_path};
