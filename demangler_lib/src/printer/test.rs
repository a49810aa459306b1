use ast::{Identifier, Node, Type};
use parser::{parse, parse_identifier, Options};

use super::{print, print_identifier, print_type, unsupported, NodePrinter};

macro_rules! assert_print {
    ($node:expr => $expected:expr) => {{
        let printed = print(&$node);
        let expected = Ok(String::from($expected));
        if printed != expected {
            panic!("Expected:\n{:?}\nPrinted:\n{:?}", expected, printed);
        }
    }};
}

fn id(text: &str) -> Identifier {
    Identifier::new(0, text)
}

fn start() -> Node {
    Node::Start {
        position: 0,
        text: "$S".into(),
    }
}

fn function(labels: Vec<Identifier>, arg_type: Type) -> Node {
    Node::Function {
        name: id("isEven"),
        labels,
        return_type: Type::single("Swift.Bool"),
        arg_type,
    }
}

#[test]
fn print_symbol() {
    assert_print!(
        Node::symbol(
            start(),
            Node::entity(
                Node::Module(id("ExampleNumber")),
                function(vec![id("number")], Type::List(vec![Type::single("Swift.Int")])),
            ),
        ) => "func ExampleNumber.isEven(number: Swift.Int) -> Swift.Bool"
    );
}

#[test]
fn print_parsed_symbol() {
    let symbol = parse("$S13ExampleNumber6isEven6numberSbSi_tF", &Options::default()).unwrap();
    assert_print!(symbol => "func ExampleNumber.isEven(number: Swift.Int) -> Swift.Bool");
}

#[test]
fn print_placeholders_and_empty_lists() {
    assert_print!(
        Node::entity(
            Node::Module(id("m")),
            Node::Function {
                name: id("f"),
                labels: vec![id(""), id("x")],
                return_type: Type::empty(),
                arg_type: Type::List(vec![Type::single("Swift.Int"), Type::empty()]),
            },
        ) => "func m.f(_: Swift.Int, x: ()) -> ()"
    );
    assert_print!(
        Node::entity(Node::Module(id("m")), function(vec![], Type::empty()))
            => "func m.isEven() -> Swift.Bool"
    );
}

#[test]
fn print_types() {
    assert_eq!(print_type(&Type::single("Swift.Int")), "Swift.Int");
    assert_eq!(print_type(&Type::empty()), "()");
    assert_eq!(
        print_type(&Type::List(vec![
            Type::single("Swift.Int"),
            Type::single("Swift.Bool"),
        ])),
        "(Swift.Int, Swift.Bool)"
    );
    assert_eq!(
        print_type(&Type::List(vec![
            Type::single("Swift.Int"),
            Type::List(vec![Type::single("Swift.Bool"), Type::empty()]),
        ])),
        "(Swift.Int, (Swift.Bool, ()))"
    );
}

#[test]
fn print_identifiers() {
    assert_eq!(print_identifier(&id("isEven")), "6isEven");
    assert_eq!(print_identifier(&id("ExampleNumber")), "13ExampleNumber");
    let identifier = id("number");
    assert_eq!(parse_identifier(&print_identifier(&identifier)), Ok(identifier));
}

#[test]
fn print_garbage() {
    let printed = print(&Node::symbol(
        start(),
        Node::entity(
            Node::Module(id("a")),
            Node::Garbage {
                position: 4,
                text: "1fyyQ".into(),
            },
        ),
    ));
    assert_eq!(printed, Ok("<unparsed \"1fyyQ\">".to_owned()));
    assert_print!(Node::Garbage { position: 0, text: String::new() } => "<unparsed \"\">");
}

#[test]
fn print_standalone_nodes() {
    assert_print!(start() => "");
    assert_print!(Node::Module(id("ExampleNumber")) => "ExampleNumber");
}

#[test]
fn unsupported_context() {
    let node = Node::entity(
        Node::Garbage {
            position: 2,
            text: "x".into(),
        },
        function(vec![], Type::empty()),
    );
    assert_eq!(print(&node), Err(unsupported("module context", "garbage")));
}

#[test]
fn function_needs_context() {
    assert_eq!(
        NodePrinter::default().print(&function(vec![], Type::empty())),
        Err(unsupported("function inside an entity", "function without context"))
    );
}

#[test]
fn argument_type_must_be_list() {
    let node = Node::entity(
        Node::Module(id("m")),
        function(vec![id("number")], Type::single("Swift.Int")),
    );
    assert_eq!(
        print(&node),
        Err(unsupported("argument list", "single type Swift.Int"))
    );
}

#[test]
fn label_count_must_match() {
    let node = Node::entity(
        Node::Module(id("m")),
        function(
            vec![id("a"), id("b")],
            Type::List(vec![Type::single("Swift.Int")]),
        ),
    );
    assert_eq!(
        print(&node),
        Err(unsupported("2 argument types", "1 argument types"))
    );
}
