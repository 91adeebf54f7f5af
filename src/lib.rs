// Export modules for library usage
pub mod analysis;
pub mod core;
pub mod symbols;

// Re-export commonly used types
pub use crate::core::ast::{
    ClosureNode, FunctionLike, FunctionNode, MethodNode, ParamNode, TypeHint,
};
pub use crate::core::errors::{Error, Result};
pub use crate::core::findings::{render_messages, Finding};
pub use crate::core::types::{CallableSignature, Parameter, Ty};

pub use crate::analysis::annotation_check::AnnotationCheck;
pub use crate::analysis::case_sensitivity::{CaseSensitivityCheck, DeclaredCaseCheck};
pub use crate::analysis::signature_resolver::{resolve_signature, RawSignature, ResolvedSignature};

pub use crate::symbols::{Scope, SymbolIndex, SymbolTable};
