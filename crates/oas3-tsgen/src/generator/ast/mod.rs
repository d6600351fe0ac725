mod method;
mod operation;
mod schema;
mod types;


pub use method::{MethodDef, PathArg};
pub use operation::{HttpMethod, Operation, OperationKey, Parameter, ParameterLocation};
pub use schema::{ObjectNode, PrimitiveKind, SchemaNode};
pub use types::{
  DeclBody, DeclName, DeclPrefix, Declaration, DtoNames, FunctionNames, Property, RenderError, TypeExpr,
};
