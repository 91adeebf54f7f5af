//! Type model for reflected callable signatures
//!
//! Values of [`Ty`] describe what an annotation means once reflection has
//! resolved it: a scalar, a class reference, or structure over those
//! (nullability, unions, parameterized container hints). The model answers
//! one question for validation: which concrete class names does this type
//! mention.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type value attached to a reflected parameter or return position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ty {
    /// Built-in scalar or pseudo type (`int`, `string`, `void`, `mixed`, ...)
    Builtin(String),
    /// Class or interface reference, name exactly as written in the annotation
    Object(String),
    /// Nullable wrapper around an inner type
    Nullable(Box<Ty>),
    /// Union of member types
    Union(Vec<Ty>),
    /// Parameterized container hint, e.g. a collection typed over its element
    Generic { base: Box<Ty>, args: Vec<Ty> },
    /// A `parent`-relative type whose enclosing class has no registered parent
    NonexistentParent { description: String },
}

impl Ty {
    pub fn builtin(name: impl Into<String>) -> Self {
        Ty::Builtin(name.into())
    }

    pub fn object(name: impl Into<String>) -> Self {
        Ty::Object(name.into())
    }

    pub fn nullable(inner: Ty) -> Self {
        Ty::Nullable(Box::new(inner))
    }

    /// Concrete class names this type mentions, in first-mention order and
    /// without duplicates. Nullability, unions and container hints are walked
    /// structurally; built-ins and unresolved parent references contribute
    /// nothing.
    pub fn referenced_classes(&self) -> Vec<String> {
        let mut classes = Vec::new();
        self.collect_referenced(&mut classes);
        classes
    }

    fn collect_referenced(&self, classes: &mut Vec<String>) {
        match self {
            Ty::Builtin(_) | Ty::NonexistentParent { .. } => {}
            Ty::Object(name) => {
                if !classes.iter().any(|seen| seen == name) {
                    classes.push(name.clone());
                }
            }
            Ty::Nullable(inner) => inner.collect_referenced(classes),
            Ty::Union(members) => {
                for member in members {
                    member.collect_referenced(classes);
                }
            }
            Ty::Generic { base, args } => {
                base.collect_referenced(classes);
                for arg in args {
                    arg.collect_referenced(classes);
                }
            }
        }
    }

    /// Human-readable rendering; for an unresolved parent reference this is
    /// the carried description verbatim
    pub fn describe(&self) -> String {
        match self {
            Ty::Builtin(name) | Ty::Object(name) => name.clone(),
            Ty::Nullable(inner) => format!("{}|null", inner.describe()),
            Ty::Union(members) => {
                let parts: Vec<String> = members.iter().map(Ty::describe).collect();
                parts.join("|")
            }
            Ty::Generic { base, args } => {
                let rendered: Vec<String> = args.iter().map(Ty::describe).collect();
                format!("{}<{}>", base.describe(), rendered.join(", "))
            }
            Ty::NonexistentParent { description } => description.clone(),
        }
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

/// Reflected parameter: declared name plus its annotated type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub ty: Ty,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: Ty) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Reflected callable signature: parameters in declaration order plus the
/// return type. Immutable snapshot owned by the symbol table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallableSignature {
    pub parameters: Vec<Parameter>,
    pub return_type: Ty,
}

impl CallableSignature {
    pub fn new(parameters: Vec<Parameter>, return_type: Ty) -> Self {
        Self {
            parameters,
            return_type,
        }
    }
}
