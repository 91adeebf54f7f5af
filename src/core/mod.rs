pub mod ast;
pub mod errors;
pub mod findings;
pub mod types;

pub use ast::{ClosureNode, FunctionLike, FunctionNode, MethodNode, ParamNode, TypeHint};
pub use errors::{Error, Result};
pub use findings::Finding;
pub use types::{CallableSignature, Parameter, Ty};
