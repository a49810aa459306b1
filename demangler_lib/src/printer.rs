use itertools::Itertools;

use ast::{Identifier, Node, Type};

use self::PrintError::*;

#[cfg(test)]
mod test;

type Result<T> = ::std::result::Result<T, PrintError>;

#[derive(Debug, Fail, PartialEq, Eq, Clone)]
pub enum PrintError {
    #[fail(display = "Unsupported node shape: expected {}, found {}", expected, found)]
    UnsupportedNodeShape { expected: String, found: String },
}

fn unsupported<A: Into<String>, B: Into<String>>(expected: A, found: B) -> PrintError {
    UnsupportedNodeShape {
        expected: expected.into(),
        found: found.into(),
    }
}

pub fn print(node: &Node) -> Result<String> {
    let printed = NodePrinter::default().print(node)?;
    debug!("Printed {:?}", printed);
    Ok(printed)
}

pub fn print_type(ty: &Type) -> String {
    match *ty {
        Type::Single(ref name) => name.clone(),
        Type::List(ref elements) => format!("({})", elements.iter().map(print_type).join(", ")),
    }
}

pub fn print_identifier(identifier: &Identifier) -> String {
    format!("{}{}", identifier.text.chars().count(), identifier.text)
}

#[derive(Debug, Default)]
pub struct NodePrinter {
    context: Option<String>,
}

impl NodePrinter {
    pub fn print(&mut self, node: &Node) -> Result<String> {
        use ast::Node::*;
        Ok(match *node {
            Symbol {
                ref start,
                ref entity,
            } => {
                let mut f = self.print(start)?;
                f.push_str(&self.print(entity)?);
                f
            }
            // The sigil only marks the encoding.
            Start { .. } => String::new(),
            Entity {
                ref context,
                ref body,
            } => {
                match **context {
                    Module(ref name) => self.context = Some(name.text.clone()),
                    ref other => return Err(unsupported("module context", other.kind())),
                }
                self.print(body)?
            }
            Module(ref name) => name.text.clone(),
            Function {
                ref name,
                ref labels,
                ref return_type,
                ref arg_type,
            } => self.function(name, labels, return_type, arg_type)?,
            Garbage { ref text, .. } => format!("<unparsed {:?}>", text),
        })
    }

    fn function(
        &self,
        name: &Identifier,
        labels: &[Identifier],
        return_type: &Type,
        arg_type: &Type,
    ) -> Result<String> {
        let context = self
            .context
            .as_ref()
            .ok_or_else(|| unsupported("function inside an entity", "function without context"))?;
        let args = match *arg_type {
            Type::List(ref args) => args,
            Type::Single(ref name) => {
                return Err(unsupported("argument list", format!("single type {}", name)))
            }
        };
        if args.len() != labels.len() {
            return Err(unsupported(
                format!("{} argument types", labels.len()),
                format!("{} argument types", args.len()),
            ));
        }
        let params = labels
            .iter()
            .zip(args)
            .map(|(label, ty)| {
                let label = if label.is_placeholder() { "_" } else { label.text.as_str() };
                format!("{}: {}", label, print_type(ty))
            })
            .join(", ");
        Ok(format!(
            "func {}.{}({}) -> {}",
            context,
            name,
            params,
            print_type(return_type)
        ))
    }
}
