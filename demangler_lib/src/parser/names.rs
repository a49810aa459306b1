use nom::character::complete::{anychar, char, digit0, satisfy};
use nom::combinator::recognize;
use nom::multi::many0;
use nom::sequence::pair;
use nom::{AsChar, Err};

use ast::Identifier;

use super::error::{Failure, Reason};
use super::{may_parse, Grammar, PResult, EMPTY_LIST, PLACEHOLDER};

pub const IDENTIFIER_EXTRA: char = '$';

pub fn is_identifier_start(c: char) -> bool {
    c == '_' || c.is_alpha()
}

pub fn is_identifier_body(c: char) -> bool {
    is_identifier_start(c) || c.is_dec_digit() || c == IDENTIFIER_EXTRA
}

impl<'a> Grammar<'a> {
    pub fn natural(&self, input: &'a str) -> PResult<'a, usize> {
        let invalid = |_| Failure::new(input, Reason::Number);
        let (rest, digits) = recognize(pair(satisfy(|c| ('1'..='9').contains(&c)), digit0))(input)
            .map_err(|e: Err<Failure<'a>>| e.map(invalid))?;
        let number = digits
            .parse::<usize>()
            .map_err(|_| Failure::at(input, Reason::Number))?;
        Ok((rest, number))
    }

    pub fn identifier(&self, input: &'a str) -> PResult<'a, Identifier> {
        let position = self.offset(input);
        let (mut input, length) = self.natural(input)?;
        let mut text = String::with_capacity(length.min(input.len()));
        for index in 0..length {
            let (rest, c) = anychar::<_, Failure<'a>>(input)?;
            let valid = if index == 0 {
                is_identifier_start(c)
            } else {
                is_identifier_body(c)
            };
            if !valid {
                return Err(Failure::at(input, Reason::Identifier));
            }
            text.push(c);
            input = rest;
        }
        Ok((input, Identifier::new(position, text)))
    }

    pub fn label_list(&self, input: &'a str) -> PResult<'a, Vec<Identifier>> {
        if let (rest, Some(_)) = may_parse(char(EMPTY_LIST))(input)? {
            return Ok((rest, vec![]));
        }
        many0(|i| self.label(i))(input)
    }

    fn label(&self, input: &'a str) -> PResult<'a, Identifier> {
        if let (rest, Some(placeholder)) = may_parse(|i| self.placeholder(i))(input)? {
            return Ok((rest, placeholder));
        }
        self.identifier(input)
    }

    fn placeholder(&self, input: &'a str) -> PResult<'a, Identifier> {
        let position = self.offset(input);
        let (rest, _) = char::<_, Failure<'a>>(PLACEHOLDER)(input)?;
        Ok((rest, Identifier::new(position, String::new())))
    }
}
