//! Annotation validation
//!
//! Validates parameter and return type annotations on callables against the
//! program's symbol table: references to unknown classes, casing that
//! disagrees with the declared name, and parent-relative types without a
//! registered parent. Resolution of the evidence source (reflected signature
//! or raw syntax) is separated from the validation itself.

pub mod annotation_check;
pub mod case_sensitivity;
pub mod signature_resolver;

pub use annotation_check::AnnotationCheck;
pub use case_sensitivity::{CaseSensitivityCheck, DeclaredCaseCheck};
pub use signature_resolver::{resolve_signature, RawSignature, ResolvedSignature};
