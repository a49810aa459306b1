use std::fmt;

/// Length-prefixed name token.
///
/// Equality only looks at the text, the position is kept for diagnostics.
#[derive(Debug, Clone)]
pub struct Identifier {
    pub position: usize,
    pub text: String,
}

impl Identifier {
    pub fn new<S: Into<String>>(position: usize, text: S) -> Self {
        Identifier {
            position,
            text: text.into(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.text.is_empty()
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Identifier) -> bool {
        self.text == other.text
    }
}

impl Eq for Identifier {}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Type {
    Single(String),
    List(Vec<Type>),
}

impl Type {
    pub fn single<S: Into<String>>(name: S) -> Self {
        Type::Single(name.into())
    }

    pub fn empty() -> Self {
        Type::List(vec![])
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Node {
    Start {
        position: usize,
        text: String,
    },
    Module(Identifier),
    Function {
        name: Identifier,
        labels: Vec<Identifier>,
        return_type: Type,
        arg_type: Type,
    },
    Entity {
        context: Box<Node>,
        body: Box<Node>,
    },
    Symbol {
        start: Box<Node>,
        entity: Box<Node>,
    },
    Garbage {
        position: usize,
        text: String,
    },
}

impl Node {
    pub fn entity(context: Node, body: Node) -> Self {
        Node::Entity {
            context: Box::new(context),
            body: Box::new(body),
        }
    }

    pub fn symbol(start: Node, entity: Node) -> Self {
        Node::Symbol {
            start: Box::new(start),
            entity: Box::new(entity),
        }
    }

    pub fn kind(&self) -> &'static str {
        use self::Node::*;
        match *self {
            Start { .. } => "start",
            Module(_) => "module",
            Function { .. } => "function",
            Entity { .. } => "entity",
            Symbol { .. } => "symbol",
            Garbage { .. } => "garbage",
        }
    }
}
