use nom::character::complete::{anychar, char};
use nom::combinator::{eof, rest};
use nom::sequence::terminated;
use nom::{Err, IResult};

use ast::Node;

use self::error::{Failure, Reason};

pub use self::error::ParseError;

mod error;
mod names;
mod types;

pub const SIGIL: &str = "$S";
pub const EMPTY_LIST: char = 'y';
pub const PLACEHOLDER: char = '_';
pub const FUNCTION_TERMINATOR: char = 'F';
pub const DEFAULT_MAX_DEPTH: usize = 64;

type PResult<'a, O> = IResult<&'a str, O, Failure<'a>>;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Terminator {
    Required,
    Optional,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Recovery {
    Strict,
    /// Keep the unparsed remainder as a garbage node.
    Permissive,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Options {
    pub terminator: Terminator,
    pub recovery: Recovery,
    pub max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            terminator: Terminator::Required,
            recovery: Recovery::Strict,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Options {
    pub fn with_terminator(mut self, terminator: Terminator) -> Self {
        self.terminator = terminator;
        self
    }

    pub fn with_recovery(mut self, recovery: Recovery) -> Self {
        self.recovery = recovery;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

pub fn parse(text: &str, options: &Options) -> Result<Node, ParseError> {
    debug!("Parsing {:?} with {:?}", text, options);
    let grammar = Grammar::new(text, options);
    let symbol = grammar.finish(grammar.symbol(text))?;
    debug!("Parsed {:?}", symbol);
    Ok(symbol)
}

pub fn parse_identifier(text: &str) -> Result<::ast::Identifier, ParseError> {
    let options = Options::default();
    let grammar = Grammar::new(text, &options);
    let result = terminated(|i| grammar.identifier(i), eof)(text);
    grammar.finish(result)
}

/// Runs `rule` speculatively.
///
/// On success the consumed input is committed. A recoverable failure hands back
/// the untouched input and `None`, anything else is passed on.
pub(crate) fn may_parse<'a, O, F>(mut rule: F) -> impl FnMut(&'a str) -> PResult<'a, Option<O>>
where
    F: FnMut(&'a str) -> PResult<'a, O>,
{
    move |input: &'a str| match rule(input) {
        Ok((rest, value)) => Ok((rest, Some(value))),
        Err(Err::Error(failure)) => {
            trace!("Rolled back speculative parse after {:?}", failure.reason);
            Ok((input, None))
        }
        Err(e) => Err(e),
    }
}

pub(crate) struct Grammar<'a> {
    source: &'a str,
    options: &'a Options,
    // Character offset of every char boundary, absent for ASCII sources.
    offsets: Option<Vec<usize>>,
}

fn char_offsets(source: &str) -> Option<Vec<usize>> {
    if source.is_ascii() {
        return None;
    }
    let mut offsets = vec![0; source.len() + 1];
    let mut count = 0;
    for (index, _) in source.char_indices() {
        offsets[index] = count;
        count += 1;
    }
    offsets[source.len()] = count;
    Some(offsets)
}

impl<'a> Grammar<'a> {
    pub fn new(source: &'a str, options: &'a Options) -> Self {
        Grammar {
            source,
            options,
            offsets: char_offsets(source),
        }
    }

    /// Character offset of `input` within the source.
    pub fn offset(&self, input: &'a str) -> usize {
        let consumed = self.source.len() - input.len();
        match self.offsets {
            Some(ref offsets) => offsets[consumed],
            None => consumed,
        }
    }

    fn finish<O>(&self, result: PResult<'a, O>) -> Result<O, ParseError> {
        match result {
            Ok((_, value)) => Ok(value),
            Err(Err::Error(failure)) | Err(Err::Failure(failure)) => {
                let error = failure.into_error(self.offset(failure.input));
                debug!("Parsing failed: {}", error);
                Err(error)
            }
            Err(Err::Incomplete(_)) => Err(ParseError::UnexpectedEndOfInput {
                position: self.offset(""),
            }),
        }
    }

    pub fn symbol(&self, input: &'a str) -> PResult<'a, Node> {
        let (input, start) = self.start(input)?;
        let (input, entity) = self.entity(input)?;
        Ok((input, Node::symbol(start, entity)))
    }

    fn start(&self, input: &'a str) -> PResult<'a, Node> {
        let position = self.offset(input);
        let mut input = input;
        for expected in SIGIL.chars() {
            let (rest, found) = anychar::<_, Failure<'a>>(input)?;
            if found != expected {
                return Err(Failure::at(input, Reason::Start));
            }
            input = rest;
        }
        Ok((
            input,
            Node::Start {
                position,
                text: SIGIL.to_owned(),
            },
        ))
    }

    fn entity(&self, input: &'a str) -> PResult<'a, Node> {
        let (input, context) = self.context(input)?;
        let (input, body) = self.entity_spec(input)?;
        Ok((input, Node::entity(context, body)))
    }

    // Only single level modules so far.
    fn context(&self, input: &'a str) -> PResult<'a, Node> {
        let (input, name) = self.identifier(input)?;
        Ok((input, Node::Module(name)))
    }

    fn entity_spec(&self, input: &'a str) -> PResult<'a, Node> {
        let complete = |i: &'a str| terminated(|i: &'a str| self.function(i), eof)(i);
        match self.options.recovery {
            Recovery::Strict => complete(input),
            Recovery::Permissive => match may_parse(complete)(input)? {
                (rest, Some(function)) => Ok((rest, function)),
                (rest, None) => self.garbage(rest),
            },
        }
    }

    fn function(&self, input: &'a str) -> PResult<'a, Node> {
        let (input, name) = self.identifier(input)?;
        let (input, labels) = self.label_list(input)?;
        let (input, (return_type, arg_type)) = self.signature(input)?;
        let (input, _) = match self.options.terminator {
            Terminator::Required => {
                let (rest, terminator) = char::<_, Failure<'a>>(FUNCTION_TERMINATOR)(input)?;
                (rest, Some(terminator))
            }
            Terminator::Optional => may_parse(char(FUNCTION_TERMINATOR))(input)?,
        };
        Ok((
            input,
            Node::Function {
                name,
                labels,
                return_type,
                arg_type,
            },
        ))
    }

    fn garbage(&self, input: &'a str) -> PResult<'a, Node> {
        let position = self.offset(input);
        warn!(
            "Keeping {} unparsed characters at {} as garbage",
            input.chars().count(),
            position
        );
        let (input, text) = rest::<_, Failure<'a>>(input)?;
        Ok((
            input,
            Node::Garbage {
                position,
                text: text.to_owned(),
            },
        ))
    }
}
