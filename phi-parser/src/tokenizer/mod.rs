pub mod error;
pub mod token;

use crate::parser::literal::parse_number;
use levenshtein::levenshtein;
use log::trace;
use logos::{Lexer, Logos};
use phi_error::Error;
pub use token::{Token, TokenKind};

/// Names recognized by the tokenizer, paired with the text to suggest for them.
const KNOWN_NAMES: [(&str, &str); 5] = [
    ("xi", "xi"),
    ("mi", "mi"),
    ("di", "di"),
    ("exp", "exp"),
    ("phi", "phi(i-1)"),
];

/// Returns up to three known names that are similar to the given unknown name.
pub fn similar_names(name: &str) -> Vec<&'static str> {
    KNOWN_NAMES
        .iter()
        .filter(|(known, _)| levenshtein(known, name) < 2)
        .map(|(_, suggestion)| *suggestion)
        .take(3)
        .collect()
}

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer. This allows the
/// parser to backtrack.
///
/// Every token that cannot appear in an equation produces an error. The whole input is scanned
/// before returning, so that all the errors are reported together.
pub fn tokenize_complete(input: &str) -> Result<Box<[Token]>, Vec<Error>> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let lexeme = lexer.slice();
        let Ok(kind) = result else {
            errors.push(Error::new(vec![span], error::UnexpectedSymbol {
                symbol: lexeme.to_owned(),
            }));
            continue;
        };

        match kind {
            TokenKind::Whitespace => {
                errors.push(Error::new(vec![span], error::UnexpectedWhitespace));
            },
            TokenKind::Name => {
                errors.push(Error::new(vec![span], error::UnknownName {
                    name: lexeme.to_owned(),
                    suggestions: similar_names(lexeme),
                }));
            },
            TokenKind::Symbol => {
                errors.push(Error::new(vec![span], error::UnexpectedSymbol {
                    symbol: lexeme.to_owned(),
                }));
            },
            TokenKind::Number if parse_number(lexeme).is_none() => {
                errors.push(Error::new(vec![span], error::InvalidNumber {
                    lexeme: lexeme.to_owned(),
                }));
            },
            _ => tokens.push(Token { span, kind, lexeme }),
        }
    }

    if errors.is_empty() {
        trace!("tokenized {:?} into {} tokens", input, tokens.len());
        Ok(tokens.into_boxed_slice())
    } else {
        Err(errors)
    }
}
