//! Evidence-source selection for callable nodes
//!
//! A callable's annotations can be validated from two representations: the
//! reflected signature the symbol table holds for methods and registered
//! named functions, or the raw syntactic hints on the node itself (closures
//! are never registered by name). Resolution picks one of them in a single
//! match so no validation logic is duplicated across node kinds.

use crate::core::ast::{FunctionLike, ParamNode, TypeHint};
use crate::core::types::CallableSignature;
use crate::symbols::{Scope, SymbolTable};

/// Evidence source picked for one callable node
#[derive(Debug)]
pub enum ResolvedSignature<'a> {
    /// Reflected signature of a method on the scope's class
    ReflectedFromMethod(&'a CallableSignature),
    /// Reflected signature of a registered named function
    ReflectedFromFunction(&'a CallableSignature),
    /// Raw syntactic hints taken directly from the node
    RawFromSyntax(RawSignature<'a>),
    /// Nothing to validate against; the check short-circuits to no findings
    NoEvidence,
}

/// Syntactic fallback signature: parameter hints plus the return hint,
/// borrowed from the node for the duration of one validation call
#[derive(Debug, Clone, Copy)]
pub struct RawSignature<'a> {
    pub params: &'a [ParamNode],
    pub return_hint: Option<&'a TypeHint>,
}

/// Pick the evidence source for a callable node.
///
/// Methods are reflected through the scope's class; the traversal driver
/// guarantees the class and method are known, so a miss here is a caller
/// contract violation. Named functions absent from the symbol table
/// (conditionally or dynamically defined) yield no evidence. Closures and
/// arrow functions always validate their raw syntax.
pub fn resolve_signature<'a>(
    function: &'a FunctionLike,
    scope: &Scope,
    symbols: &'a dyn SymbolTable,
) -> ResolvedSignature<'a> {
    match function {
        FunctionLike::Method(method) => {
            let class = scope
                .class_name()
                .expect("method node resolved outside a class scope");
            let signature = symbols
                .method_signature(class, &method.name)
                .expect("scoped class is missing the traversed method");
            ResolvedSignature::ReflectedFromMethod(signature)
        }
        FunctionLike::Function(node) => {
            let name = node.qualified_name();
            if !symbols.has_function(name) {
                log::debug!("function {name} is not registered, nothing to validate against");
                return ResolvedSignature::NoEvidence;
            }
            let signature = symbols
                .function_signature(name)
                .expect("registered function has no signature");
            ResolvedSignature::ReflectedFromFunction(signature)
        }
        FunctionLike::Closure(node) | FunctionLike::ArrowFunction(node) => {
            ResolvedSignature::RawFromSyntax(RawSignature {
                params: &node.params,
                return_hint: node.return_hint.as_ref(),
            })
        }
    }
}
