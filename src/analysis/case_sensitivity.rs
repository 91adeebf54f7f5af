//! Class-name casing verification
//!
//! Class names resolve under any casing, so an annotation can reference an
//! existing class while spelling it differently from its declaration. This
//! check reports those spellings; whether a class exists at all is the
//! annotation check's concern, not this one's.

use crate::symbols::SymbolTable;

/// Verifies referenced class names against their canonical declared casing
pub trait CaseSensitivityCheck {
    /// One formatted message per name whose casing disagrees with the
    /// declared casing. Order is stable for a given input.
    fn check_class_names(&self, class_names: &[String]) -> Vec<String>;
}

/// Case check backed by the symbol table's declared names
pub struct DeclaredCaseCheck<'a> {
    symbols: &'a dyn SymbolTable,
}

impl<'a> DeclaredCaseCheck<'a> {
    pub fn new(symbols: &'a dyn SymbolTable) -> Self {
        Self { symbols }
    }
}

impl CaseSensitivityCheck for DeclaredCaseCheck<'_> {
    fn check_class_names(&self, class_names: &[String]) -> Vec<String> {
        class_names
            .iter()
            .filter_map(|written| {
                // Names the table does not know produce nothing here.
                let canonical = self.symbols.canonical_class_name(written)?;
                (canonical != written.as_str()).then(|| {
                    format!("Class {canonical} referenced with incorrect case: {written}.")
                })
            })
            .collect()
    }
}
