//! Type-reference validation over resolved signatures
//!
//! Walks each parameter type and the return type of a callable, classifies
//! every referenced class against the symbol table and hands the referenced
//! set to the case-sensitivity check. Reflected and raw signatures go
//! through separate paths: reflected types decompose nullability, unions and
//! container hints via [`Ty::referenced_classes`], while a raw hint carries
//! at most one class name behind an optional nullability marker and is
//! validated as-is.

use crate::analysis::case_sensitivity::CaseSensitivityCheck;
use crate::analysis::signature_resolver::{resolve_signature, RawSignature, ResolvedSignature};
use crate::core::ast::{FunctionLike, TypeHint};
use crate::core::findings::{render_messages, Finding};
use crate::core::types::{CallableSignature, Ty};
use crate::symbols::{Scope, SymbolTable};
use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    /// Built-in and pseudo type names accepted in raw hints without a
    /// class-existence check. Closed and case-sensitive.
    static ref BUILTIN_TYPEHINTS: HashSet<&'static str> = [
        "self", "static", "array", "callable", "string", "int", "bool", "float", "void",
        "iterable",
    ]
    .iter()
    .copied()
    .collect();
}

/// Validates the type annotations on a callable against the symbol table
pub struct AnnotationCheck<'a> {
    symbols: &'a dyn SymbolTable,
    case_sensitivity: &'a dyn CaseSensitivityCheck,
}

impl<'a> AnnotationCheck<'a> {
    pub fn new(
        symbols: &'a dyn SymbolTable,
        case_sensitivity: &'a dyn CaseSensitivityCheck,
    ) -> Self {
        Self {
            symbols,
            case_sensitivity,
        }
    }

    /// Validate one callable node in the given scope.
    ///
    /// Findings come back in a stable order: for each parameter in
    /// declaration order its unknown-class findings, then its casing
    /// findings, then its unresolved-parent finding; the return type follows
    /// with the same internal ordering. Callers may rely on this for
    /// deterministic output.
    pub fn check_function(&self, function: &FunctionLike, scope: &Scope) -> Vec<Finding> {
        match resolve_signature(function, scope, self.symbols) {
            ResolvedSignature::ReflectedFromMethod(signature)
            | ResolvedSignature::ReflectedFromFunction(signature) => {
                self.check_reflected(signature)
            }
            ResolvedSignature::RawFromSyntax(raw) => self.check_raw(&raw),
            ResolvedSignature::NoEvidence => Vec::new(),
        }
    }

    /// [`Self::check_function`] rendered through the caller's `%s` templates:
    /// a two-slot template for parameter findings (parameter name, class
    /// name) and a one-slot template for return findings (class name)
    pub fn check_function_messages(
        &self,
        function: &FunctionLike,
        scope: &Scope,
        parameter_message: &str,
        return_message: &str,
    ) -> Vec<String> {
        render_messages(
            &self.check_function(function, scope),
            parameter_message,
            return_message,
        )
    }

    /// Validate a reflected signature
    pub fn check_reflected(&self, signature: &CallableSignature) -> Vec<Finding> {
        let mut findings = Vec::new();

        for parameter in &signature.parameters {
            let referenced = parameter.ty.referenced_classes();
            for class_name in &referenced {
                if !self.symbols.has_class(class_name) {
                    findings.push(Finding::UnknownParameterType {
                        parameter: parameter.name.clone(),
                        class_name: class_name.clone(),
                    });
                }
            }
            self.append_case_findings(&referenced, &mut findings);
            if let Ty::NonexistentParent { description } = &parameter.ty {
                findings.push(Finding::UnresolvedParentParameter {
                    parameter: parameter.name.clone(),
                    description: description.clone(),
                });
            }
        }

        let referenced = signature.return_type.referenced_classes();
        for class_name in &referenced {
            if !self.symbols.has_class(class_name) {
                findings.push(Finding::UnknownReturnType {
                    class_name: class_name.clone(),
                });
            }
        }
        self.append_case_findings(&referenced, &mut findings);
        if let Ty::NonexistentParent { description } = &signature.return_type {
            findings.push(Finding::UnresolvedParentReturn {
                description: description.clone(),
            });
        }

        findings
    }

    /// Validate raw syntactic hints.
    ///
    /// A raw hint holds at most one class-name candidate; unions, container
    /// hints and parent resolution exist only on the reflected path.
    pub fn check_raw(&self, raw: &RawSignature<'_>) -> Vec<Finding> {
        let mut findings = Vec::new();

        for param in raw.params {
            let Some(candidate) = param.hint.as_ref().and_then(TypeHint::class_candidate) else {
                continue;
            };
            if BUILTIN_TYPEHINTS.contains(candidate) {
                continue;
            }
            if !self.symbols.has_class(candidate) {
                findings.push(Finding::UnknownParameterType {
                    parameter: param.name.clone(),
                    class_name: candidate.to_string(),
                });
            } else {
                self.append_case_findings(&[candidate.to_string()], &mut findings);
            }
        }

        if let Some(candidate) = raw.return_hint.and_then(TypeHint::class_candidate) {
            if !BUILTIN_TYPEHINTS.contains(candidate) {
                if !self.symbols.has_class(candidate) {
                    findings.push(Finding::UnknownReturnType {
                        class_name: candidate.to_string(),
                    });
                } else {
                    self.append_case_findings(&[candidate.to_string()], &mut findings);
                }
            }
        }

        findings
    }

    fn append_case_findings(&self, class_names: &[String], findings: &mut Vec<Finding>) {
        findings.extend(
            self.case_sensitivity
                .check_class_names(class_names)
                .into_iter()
                .map(|message| Finding::CaseMismatch { message }),
        );
    }
}
