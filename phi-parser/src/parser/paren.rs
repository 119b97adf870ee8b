use crate::{
    parser::{
        error::{kind, Error},
        group::GroupToken,
        token::{CloseParen, OpenParen},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};

/// Parses a parenthesized expression into a [`GroupKind::Bracket`] group.
///
/// [`GroupKind::Bracket`]: crate::parser::group::GroupKind::Bracket
pub fn parse_bracket(input: &mut Parser) -> Result<GroupToken, Error> {
    let open = input.try_parse::<OpenParen>()?;
    if let Some(close) = input.current_token().filter(|token| token.kind == TokenKind::CloseParen) {
        return Err(Error::new(vec![open.span.start..close.span.end], kind::EmptyParenthesis));
    }

    let inner = GroupToken::parse(input)?;
    if input.current_token().is_none() {
        return Err(Error::new(vec![open.span], kind::UnclosedParenthesis { opening: true }));
    }

    let close = input.try_parse::<CloseParen>()?;
    Ok(GroupToken::bracket(inner, open.span.start..close.span.end))
}
