extern crate failure;
#[macro_use]
extern crate failure_derive;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate nom;
#[cfg(test)]
extern crate proptest;

pub mod ast;
pub mod parser;
pub mod printer;

use parser::{Options, ParseError};
use printer::PrintError;

#[derive(Debug, Fail, PartialEq, Eq, Clone)]
pub enum Error {
    #[fail(display = "{}", _0)]
    Parse(#[cause] ParseError),
    #[fail(display = "{}", _0)]
    Print(#[cause] PrintError),
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Parse(e)
    }
}

impl From<PrintError> for Error {
    fn from(e: PrintError) -> Self {
        Error::Print(e)
    }
}

pub fn decode(text: &str) -> Result<String, Error> {
    decode_with(text, &Options::default())
}

pub fn decode_with(text: &str, options: &Options) -> Result<String, Error> {
    let symbol = parser::parse(text, options)?;
    Ok(printer::print(&symbol)?)
}
