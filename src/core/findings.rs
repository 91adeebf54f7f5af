//! Structured findings produced by the annotation check
//!
//! The check reports content only; the hosting rule engine owns severity,
//! location and final presentation. Rendering through the caller's `%s`
//! templates is applied here, after validation, so the validation logic
//! never touches message formatting.

use serde::{Deserialize, Serialize};

/// One validation finding, qualified by the position it was found at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Finding {
    /// A parameter annotation references a class unknown to the symbol table
    UnknownParameterType { parameter: String, class_name: String },
    /// The return annotation references a class unknown to the symbol table
    UnknownReturnType { class_name: String },
    /// A referenced class exists but was written with non-canonical casing;
    /// the message comes fully formatted from the case-sensitivity check
    CaseMismatch { message: String },
    /// A parameter type was written relative to a parent class that does not exist
    UnresolvedParentParameter { parameter: String, description: String },
    /// The return type was written relative to a parent class that does not exist
    UnresolvedParentReturn { description: String },
}

impl Finding {
    /// Render to a message through the caller's templates.
    ///
    /// Parameter-position findings fill the two-slot parameter template,
    /// return-position findings the one-slot return template; case
    /// mismatches pass through unchanged.
    pub fn render(&self, parameter_message: &str, return_message: &str) -> String {
        match self {
            Finding::UnknownParameterType {
                parameter,
                class_name,
            } => fill(parameter_message, &[parameter.as_str(), class_name.as_str()]),
            Finding::UnknownReturnType { class_name } => {
                fill(return_message, &[class_name.as_str()])
            }
            Finding::CaseMismatch { message } => message.clone(),
            Finding::UnresolvedParentParameter {
                parameter,
                description,
            } => fill(parameter_message, &[parameter.as_str(), description.as_str()]),
            Finding::UnresolvedParentReturn { description } => {
                fill(return_message, &[description.as_str()])
            }
        }
    }
}

/// Render a whole result, preserving finding order
pub fn render_messages(
    findings: &[Finding],
    parameter_message: &str,
    return_message: &str,
) -> Vec<String> {
    findings
        .iter()
        .map(|finding| finding.render(parameter_message, return_message))
        .collect()
}

/// Substitute `%s` placeholders left to right; placeholders beyond the
/// supplied values are left as written
fn fill(template: &str, values: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut values = values.iter();
    while let Some(idx) = rest.find("%s") {
        out.push_str(&rest[..idx]);
        match values.next() {
            Some(value) => out.push_str(value),
            None => out.push_str("%s"),
        }
        rest = &rest[idx + 2..];
    }
    out.push_str(rest);
    out
}
