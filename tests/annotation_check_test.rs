use hintcheck::{
    AnnotationCheck, CallableSignature, DeclaredCaseCheck, Finding, FunctionLike, FunctionNode,
    MethodNode, Parameter, Scope, SymbolIndex, Ty,
};
use pretty_assertions::assert_eq;

const PARAM_MESSAGE: &str = "Parameter $%s of function handle() has invalid typehint type %s.";
const RETURN_MESSAGE: &str = "Return typehint of function handle() has invalid type %s.";

fn check(index: &SymbolIndex, function: &FunctionLike, scope: &Scope) -> Vec<Finding> {
    let case = DeclaredCaseCheck::new(index);
    AnnotationCheck::new(index, &case).check_function(function, scope)
}

fn register_handle(index: &mut SymbolIndex, parameters: Vec<Parameter>, return_type: Ty) {
    index.register_function("handle", CallableSignature::new(parameters, return_type));
}

#[test]
fn test_known_class_produces_no_findings() {
    let mut index = SymbolIndex::new();
    index.register_class("Request");
    register_handle(
        &mut index,
        vec![Parameter::new("request", Ty::object("Request"))],
        Ty::builtin("void"),
    );

    let node = FunctionLike::Function(FunctionNode::new("handle"));
    assert_eq!(check(&index, &node, &Scope::new()), Vec::new());
}

#[test]
fn test_unknown_parameter_class_is_reported() {
    let mut index = SymbolIndex::new();
    register_handle(
        &mut index,
        vec![Parameter::new("user", Ty::object("Uzer"))],
        Ty::builtin("void"),
    );

    let node = FunctionLike::Function(FunctionNode::new("handle"));
    assert_eq!(
        check(&index, &node, &Scope::new()),
        vec![Finding::UnknownParameterType {
            parameter: "user".to_string(),
            class_name: "Uzer".to_string(),
        }]
    );
}

#[test]
fn test_wrong_case_reports_mismatch_without_unknown() {
    let mut index = SymbolIndex::new();
    index.register_class("Foo");
    register_handle(
        &mut index,
        vec![Parameter::new("value", Ty::object("foo"))],
        Ty::builtin("void"),
    );

    let node = FunctionLike::Function(FunctionNode::new("handle"));
    assert_eq!(
        check(&index, &node, &Scope::new()),
        vec![Finding::CaseMismatch {
            message: "Class Foo referenced with incorrect case: foo.".to_string(),
        }]
    );
}

#[test]
fn test_unregistered_function_yields_nothing() {
    let index = SymbolIndex::new();
    let node = FunctionLike::Function(FunctionNode::new("conditionally_defined"));
    assert_eq!(check(&index, &node, &Scope::new()), Vec::new());
}

#[test]
fn test_method_resolves_through_scope_class() {
    let mut index = SymbolIndex::new();
    index.register_method(
        "Controller",
        "handle",
        CallableSignature::new(
            vec![Parameter::new("input", Ty::object("MissingInput"))],
            Ty::builtin("void"),
        ),
    );

    let node = FunctionLike::Method(MethodNode::new("handle"));
    assert_eq!(
        check(&index, &node, &Scope::in_class("Controller")),
        vec![Finding::UnknownParameterType {
            parameter: "input".to_string(),
            class_name: "MissingInput".to_string(),
        }]
    );
}

#[test]
fn test_union_and_container_types_decompose() {
    let mut index = SymbolIndex::new();
    index.register_class("Request");
    index.register_class("Collection");
    register_handle(
        &mut index,
        vec![Parameter::new(
            "input",
            Ty::Union(vec![Ty::object("Request"), Ty::object("Payload")]),
        )],
        Ty::Generic {
            base: Box::new(Ty::object("Collection")),
            args: vec![Ty::object("Item")],
        },
    );

    let node = FunctionLike::Function(FunctionNode::new("handle"));
    assert_eq!(
        check(&index, &node, &Scope::new()),
        vec![
            Finding::UnknownParameterType {
                parameter: "input".to_string(),
                class_name: "Payload".to_string(),
            },
            Finding::UnknownReturnType {
                class_name: "Item".to_string(),
            },
        ]
    );
}

#[test]
fn test_unresolved_parent_reported_for_both_positions() {
    let mut index = SymbolIndex::new();
    register_handle(
        &mut index,
        vec![Parameter::new(
            "obj",
            Ty::NonexistentParent {
                description: "parent".to_string(),
            },
        )],
        Ty::NonexistentParent {
            description: "parent".to_string(),
        },
    );

    let node = FunctionLike::Function(FunctionNode::new("handle"));
    assert_eq!(
        check(&index, &node, &Scope::new()),
        vec![
            Finding::UnresolvedParentParameter {
                parameter: "obj".to_string(),
                description: "parent".to_string(),
            },
            Finding::UnresolvedParentReturn {
                description: "parent".to_string(),
            },
        ]
    );
}

#[test]
fn test_findings_follow_declaration_order() {
    let mut index = SymbolIndex::new();
    index.register_class("Foo");
    register_handle(
        &mut index,
        vec![
            Parameter::new(
                "first",
                Ty::Union(vec![Ty::object("MissingA"), Ty::object("foo")]),
            ),
            Parameter::new("second", Ty::object("MissingB")),
        ],
        Ty::object("MissingReturn"),
    );

    let node = FunctionLike::Function(FunctionNode::new("handle"));
    assert_eq!(
        check(&index, &node, &Scope::new()),
        vec![
            Finding::UnknownParameterType {
                parameter: "first".to_string(),
                class_name: "MissingA".to_string(),
            },
            Finding::CaseMismatch {
                message: "Class Foo referenced with incorrect case: foo.".to_string(),
            },
            Finding::UnknownParameterType {
                parameter: "second".to_string(),
                class_name: "MissingB".to_string(),
            },
            Finding::UnknownReturnType {
                class_name: "MissingReturn".to_string(),
            },
        ]
    );
}

#[test]
fn test_check_is_idempotent() {
    let mut index = SymbolIndex::new();
    index.register_class("Foo");
    register_handle(
        &mut index,
        vec![Parameter::new("value", Ty::object("foo"))],
        Ty::object("Missing"),
    );

    let node = FunctionLike::Function(FunctionNode::new("handle"));
    let scope = Scope::new();
    assert_eq!(check(&index, &node, &scope), check(&index, &node, &scope));
}

#[test]
fn test_messages_render_through_templates() {
    let mut index = SymbolIndex::new();
    register_handle(
        &mut index,
        vec![Parameter::new("user", Ty::object("Uzer"))],
        Ty::object("Rezponse"),
    );

    let node = FunctionLike::Function(FunctionNode::new("handle"));
    let case = DeclaredCaseCheck::new(&index);
    let messages = AnnotationCheck::new(&index, &case).check_function_messages(
        &node,
        &Scope::new(),
        PARAM_MESSAGE,
        RETURN_MESSAGE,
    );
    assert_eq!(
        messages,
        vec![
            "Parameter $user of function handle() has invalid typehint type Uzer.".to_string(),
            "Return typehint of function handle() has invalid type Rezponse.".to_string(),
        ]
    );
}
