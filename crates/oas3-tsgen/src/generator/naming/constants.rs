/// Output directory, relative to the project root.
pub const DEFAULT_OUTPUT_DIR: &str = "src/_api";
pub const MODULES_DIR: &str = "modules";
pub const INDEX_FILE: &str = "index.ts";
pub const HTTP_FILE: &str = "http.ts";
pub const RESPONSE_TYPE_FILE: &str = "responseType.ts";

/// Key used for anonymous object items of a root-level array.
pub const ARRAY_ITEM_KEY: &str = "item";

/// Path segment dropped from the front of every path when deriving function names.
pub const API_PATH_PREFIX: &str = "api";

pub const BY_PARAM_PREFIX: &str = "By";
pub const INSTANCE_SUFFIX: &str = "Api";

pub const QUERY_ARG: &str = "params";
pub const BODY_ARG: &str = "data";
pub const CONFIG_ARG: &str = "axiosConfig";
