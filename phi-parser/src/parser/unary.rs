//! Parsing of the leading minus.
//!
//! A leading minus applies to the single operand right after it, so it binds tighter than any
//! binary operator, including `^`: `-xi^2` is `(-xi)^2`. The one exception is a minus in front of
//! a parenthesized base raised to a power, `-(xi-mi)^2`, which negates the whole power.

use crate::{
    parser::{
        binary,
        error::Error,
        expr::parse_primary,
        group::{GroupKind, GroupToken},
        token::op::BinOp,
        Parser,
        Precedence,
    },
    tokenizer::TokenKind,
};

/// Parses an operand, which is either a primary or a leading minus applied to an operand.
pub fn parse_operand(input: &mut Parser) -> Result<GroupToken, Error> {
    if input.peek_kind() != Some(TokenKind::Sub) {
        return parse_primary(input);
    }

    let minus = input.next_token()?;
    let operand = parse_negated(input)?;
    Ok(GroupToken::unary_minus(minus.into(), operand))
}

/// Parses the target of a leading minus.
fn parse_negated(input: &mut Parser) -> Result<GroupToken, Error> {
    if input.peek_kind() == Some(TokenKind::Sub) {
        return parse_operand(input);
    }

    let primary = parse_primary(input)?;
    if primary.group_kind() == Some(GroupKind::Bracket) && input.peek_kind() == Some(TokenKind::Pow) {
        let op = input.try_parse::<BinOp>()?;
        let exponent = parse_operand(input)?;
        let exponent = binary::parse_expr(input, exponent, Precedence::Exp)?;
        return Ok(GroupToken::binary(primary, op, exponent));
    }

    Ok(primary)
}
