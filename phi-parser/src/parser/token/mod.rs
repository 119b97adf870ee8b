pub mod op;

use crate::{
    parser::{error::{kind, Error}, Parser, Parse},
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Generates a unit struct for each token kind, as well as a simple [`Parse`] implementation for
/// each token kind. This enables the parser to use and request token kinds as a type.
macro_rules! token_kinds {
    ($($name:ident)*) => {
        $(
            #[derive(Clone, Debug, PartialEq)]
            pub struct $name {
                pub span: Range<usize>,
            }

            impl Parse for $name {
                fn parse(input: &mut Parser) -> Result<Self, Error> {
                    let token = input.next_token()?;

                    if token.kind == TokenKind::$name {
                        Ok(Self { span: token.span })
                    } else {
                        Err(Error::new(vec![token.span], kind::UnexpectedToken {
                            expected: &[TokenKind::$name],
                            found: token.kind,
                        }))
                    }
                }
            }
        )*
    };
}

token_kinds!(
    OpenParen
    CloseParen
    Exp
);

/// One of the three symbolic parameters of an equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Symbol {
    /// The data point, `xi`.
    Xi,

    /// The mean, `mi`.
    Mi,

    /// The deviation, `di`.
    Di,
}

impl Symbol {
    /// All symbols, in declaration order.
    pub const ALL: [Symbol; 3] = [Symbol::Xi, Symbol::Mi, Symbol::Di];

    /// Returns the two-letter name of the symbol.
    pub fn name(self) -> &'static str {
        match self {
            Self::Xi => "xi",
            Self::Mi => "mi",
            Self::Di => "di",
        }
    }

    /// Returns the first letter of the symbol's name, used when rendering a variable of an
    /// earlier iteration, such as `x(i-1)`.
    pub fn letter(self) -> char {
        match self {
            Self::Xi => 'x',
            Self::Mi => 'm',
            Self::Di => 'd',
        }
    }

    /// Returns the symbol that the given token kind names, if any.
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Xi => Some(Self::Xi),
            TokenKind::Mi => Some(Self::Mi),
            TokenKind::Di => Some(Self::Di),
            _ => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing a [`Symbol`] from an unknown name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSymbol(pub String);

impl fmt::Display for UnknownSymbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown symbol `{}`; expected one of xi, mi, di", self.0)
    }
}

impl std::error::Error for UnknownSymbol {}

impl FromStr for Symbol {
    type Err = UnknownSymbol;

    /// Accepts either the full name (`xi`) or its first letter (`x`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xi" | "x" => Ok(Self::Xi),
            "mi" | "m" => Ok(Self::Mi),
            "di" | "d" => Ok(Self::Di),
            _ => Err(UnknownSymbol(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_names() {
        assert_eq!("m".parse::<Symbol>(), Ok(Symbol::Mi));
        assert_eq!("di".parse::<Symbol>(), Ok(Symbol::Di));
        assert!("q".parse::<Symbol>().is_err());
        assert_eq!(Symbol::from_token(TokenKind::Xi), Some(Symbol::Xi));
        assert_eq!(Symbol::from_token(TokenKind::Previous), None);
    }
}
