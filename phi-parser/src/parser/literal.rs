use crate::{
    parser::{error::{kind, Error}, Parse, Parser},
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parses the text of a [`TokenKind::Number`] token. Both `.` and `,` are accepted as the decimal
/// separator. Returns [`None`] if the text is not a valid number, such as `1.2.3` or `.`.
pub fn parse_number(lexeme: &str) -> Option<f64> {
    lexeme.replace(',', ".").parse::<f64>().ok()
}

/// A number literal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitNum {
    /// The value of the number literal.
    pub value: f64,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitNum {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        let value = match token.kind {
            TokenKind::Number => parse_number(token.lexeme),
            _ => None,
        };

        match value {
            Some(value) => Ok(Self { value, span: token.span }),
            None => Err(Error::new(vec![token.span], kind::UnexpectedToken {
                expected: &[TokenKind::Number],
                found: token.kind,
            })),
        }
    }
}

impl fmt::Display for LitNum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
