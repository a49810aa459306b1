use nom::error::{ErrorKind, ParseError as NomParseError};

/// Public parse failure. Positions count characters from the start of the input.
#[derive(Debug, Fail, PartialEq, Eq, Clone)]
pub enum ParseError {
    #[fail(display = "Unexpected end of input at {}", position)]
    UnexpectedEndOfInput { position: usize },
    #[fail(display = "Invalid start character {:?} at {}", character, position)]
    InvalidStartCharacter { position: usize, character: char },
    #[fail(display = "Invalid number starting with {:?} at {}", character, position)]
    InvalidNumber { position: usize, character: char },
    #[fail(display = "Invalid identifier character {:?} at {}", character, position)]
    InvalidIdentifierCharacter { position: usize, character: char },
    #[fail(display = "Invalid character {:?} at {}", character, position)]
    InvalidCharacter { position: usize, character: char },
    #[fail(display = "Types nested deeper than {} levels at {}", limit, position)]
    RecursionLimitExceeded { position: usize, limit: usize },
}

impl ParseError {
    pub fn position(&self) -> usize {
        use self::ParseError::*;
        match *self {
            UnexpectedEndOfInput { position }
            | InvalidStartCharacter { position, .. }
            | InvalidNumber { position, .. }
            | InvalidIdentifierCharacter { position, .. }
            | InvalidCharacter { position, .. }
            | RecursionLimitExceeded { position, .. } => position,
        }
    }

    pub fn character(&self) -> Option<char> {
        use self::ParseError::*;
        match *self {
            InvalidStartCharacter { character, .. }
            | InvalidNumber { character, .. }
            | InvalidIdentifierCharacter { character, .. }
            | InvalidCharacter { character, .. } => Some(character),
            UnexpectedEndOfInput { .. } | RecursionLimitExceeded { .. } => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum Reason {
    Start,
    Number,
    Identifier,
    Character,
    Depth(usize),
}

/// Error threaded through the nom rules.
///
/// Only remembers where the rule stopped; the character offset is computed
/// against the source once parsing is over.
#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) struct Failure<'a> {
    pub input: &'a str,
    pub reason: Reason,
}

impl<'a> Failure<'a> {
    pub fn new(input: &'a str, reason: Reason) -> Self {
        Failure { input, reason }
    }

    pub fn at(input: &'a str, reason: Reason) -> ::nom::Err<Self> {
        ::nom::Err::Error(Failure::new(input, reason))
    }

    pub fn into_error(self, position: usize) -> ParseError {
        use self::ParseError::*;
        let character = match (self.reason, self.input.chars().next()) {
            (Reason::Depth(limit), _) => return RecursionLimitExceeded { position, limit },
            (_, None) => return UnexpectedEndOfInput { position },
            (_, Some(c)) => c,
        };
        match self.reason {
            Reason::Start => InvalidStartCharacter { position, character },
            Reason::Number => InvalidNumber { position, character },
            Reason::Identifier => InvalidIdentifierCharacter { position, character },
            Reason::Character | Reason::Depth(_) => InvalidCharacter { position, character },
        }
    }
}

impl<'a> NomParseError<&'a str> for Failure<'a> {
    fn from_error_kind(input: &'a str, _kind: ErrorKind) -> Self {
        Failure::new(input, Reason::Character)
    }

    // The innermost failure is the one worth reporting.
    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}
