//! Symbol table interface and in-memory implementation
//!
//! The annotation check only reads from the symbol table; population and
//! ownership belong to the surrounding pipeline. Class and function names
//! resolve case-insensitively in the analyzed language, so lookups here fold
//! case, and the declared casing is exposed as a separate query for the
//! case-sensitivity check.

use crate::core::errors::Result;
use crate::core::types::CallableSignature;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Read-only queries the annotation check makes against program symbols
pub trait SymbolTable {
    /// Whether a class or interface exists under any casing
    fn has_class(&self, name: &str) -> bool {
        self.canonical_class_name(name).is_some()
    }

    /// Declared casing of a class known under any casing
    fn canonical_class_name(&self, name: &str) -> Option<&str>;

    /// Whether a named function is registered
    fn has_function(&self, name: &str) -> bool;

    /// Reflected signature of a registered function
    fn function_signature(&self, name: &str) -> Option<&CallableSignature>;

    /// Reflected signature of a method declared on a known class
    fn method_signature(&self, class: &str, method: &str) -> Option<&CallableSignature>;
}

/// Analysis scope a callable is validated in; carries the enclosing class
/// used for method reflection
#[derive(Debug, Clone, Default)]
pub struct Scope {
    class: Option<String>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope inside a class body
    pub fn in_class(name: impl Into<String>) -> Self {
        Self {
            class: Some(name.into()),
        }
    }

    pub fn class_name(&self) -> Option<&str> {
        self.class.as_deref()
    }
}

/// Registry of the classes, functions and methods known to an analysis run.
///
/// Keys are folded to lowercase; the declared casing is kept as the stored
/// value so the case-sensitivity check can recover it. Serializable so each
/// worker can be handed its own read-only snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SymbolIndex {
    /// Lowercased class name to declared casing
    classes: HashMap<String, String>,
    /// Lowercased function name to reflected signature
    functions: HashMap<String, CallableSignature>,
    /// Lowercased class name to lowercased method name to reflected signature
    methods: HashMap<String, HashMap<String, CallableSignature>>,
}

impl SymbolIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class or interface under its declared casing
    pub fn register_class(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.classes.insert(name.to_lowercase(), name);
    }

    /// Register a named function's reflected signature
    pub fn register_function(&mut self, name: impl Into<String>, signature: CallableSignature) {
        self.functions.insert(name.into().to_lowercase(), signature);
    }

    /// Register a method's reflected signature; the owning class becomes
    /// known as a side effect if it was not already
    pub fn register_method(
        &mut self,
        class: impl Into<String>,
        method: impl Into<String>,
        signature: CallableSignature,
    ) {
        let class = class.into();
        let class_key = class.to_lowercase();
        self.classes.entry(class_key.clone()).or_insert(class);
        self.methods
            .entry(class_key)
            .or_default()
            .insert(method.into().to_lowercase(), signature);
    }

    /// Load a snapshot serialized with [`SymbolIndex::to_json`]
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a snapshot from disk
    pub fn from_json_file(path: &Path) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Serialize the registry for handing workers their own snapshots
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl SymbolTable for SymbolIndex {
    fn canonical_class_name(&self, name: &str) -> Option<&str> {
        self.classes.get(&name.to_lowercase()).map(String::as_str)
    }

    fn has_function(&self, name: &str) -> bool {
        self.functions.contains_key(&name.to_lowercase())
    }

    fn function_signature(&self, name: &str) -> Option<&CallableSignature> {
        self.functions.get(&name.to_lowercase())
    }

    fn method_signature(&self, class: &str, method: &str) -> Option<&CallableSignature> {
        self.methods
            .get(&class.to_lowercase())?
            .get(&method.to_lowercase())
    }
}
