use crate::{
    parser::{
        error::{kind, Error},
        group::{GroupToken, Lexeme},
        paren::parse_bracket,
        token::Exp,
        Parser,
    },
    tokenizer::TokenKind,
};

/// Parses a call to `exp`, which must be followed directly by a parenthesized argument.
pub fn parse_exp_call(input: &mut Parser) -> Result<GroupToken, Error> {
    let exp = input.try_parse::<Exp>()?;
    if input.peek_kind() != Some(TokenKind::OpenParen) {
        return Err(Error::new(vec![exp.span, input.span()], kind::ExpectedExpCall));
    }

    let bracket = parse_bracket(input)?;
    Ok(GroupToken::exp_call(Lexeme { kind: TokenKind::Exp, span: exp.span }, bracket))
}
