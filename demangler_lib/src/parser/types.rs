use nom::character::complete::{anychar, char};
use nom::Err;

use ast::Type;

use super::error::{Failure, Reason};
use super::{may_parse, Grammar, PResult, EMPTY_LIST};

pub const ATOM_PREFIX: char = 'S';
pub const LIST_SEPARATOR: char = '_';
pub const LIST_CLOSE: char = 't';

pub const BUILTINS: &[(char, &str)] = &[
    ('i', "Swift.Int"),
    ('b', "Swift.Bool"),
    ('S', "Swift.String"),
    ('f', "Swift.Float"),
    ('d', "Swift.Double"),
    ('u', "Swift.UInt"),
];

pub fn builtin(suffix: char) -> Option<&'static str> {
    BUILTINS
        .iter()
        .find(|&&(c, _)| c == suffix)
        .map(|&(_, name)| name)
}

impl<'a> Grammar<'a> {
    pub fn signature(&self, input: &'a str) -> PResult<'a, (Type, Type)> {
        let (input, return_type) = self.ty(input, 0)?;
        let (input, arg_type) = self.ty(input, 0)?;
        Ok((input, (return_type, arg_type)))
    }

    // `depth` counts the lists enclosing this type.
    pub fn ty(&self, input: &'a str, depth: usize) -> PResult<'a, Type> {
        if let (rest, Some(_)) = may_parse(char(EMPTY_LIST))(input)? {
            return Ok((rest, Type::empty()));
        }
        let (input, first) = self.generic_atom(input)?;
        let (mut input, separator) = match may_parse(char(LIST_SEPARATOR))(input)? {
            (_, Some(_)) if depth >= self.options.max_depth => {
                let limit = self.options.max_depth;
                return Err(Err::Failure(Failure::new(input, Reason::Depth(limit))));
            }
            result => result,
        };
        if separator.is_none() {
            return Ok((input, first));
        }
        let mut elements = vec![first];
        while let (rest, Some(element)) = may_parse(|i| self.ty(i, depth + 1))(input)? {
            elements.push(element);
            input = rest;
        }
        let (input, _) = may_parse(char(LIST_CLOSE))(input)?;
        Ok((input, Type::List(elements)))
    }

    fn generic_atom(&self, input: &'a str) -> PResult<'a, Type> {
        let (rest, _) = char::<_, Failure<'a>>(ATOM_PREFIX)(input)?;
        let (next, suffix) = anychar::<_, Failure<'a>>(rest)?;
        match builtin(suffix) {
            Some(name) => Ok((next, Type::single(name))),
            None => Err(Failure::at(rest, Reason::Character)),
        }
    }
}
