use crate::parser::{
    error::Error,
    group::GroupToken,
    token::op::{BinOp, BinOpKind},
    unary::parse_operand,
    Associativity,
    Parser,
    Precedence,
};

/// Returns the binary operator at the cursor, without consuming it.
fn peek_op(input: &Parser) -> Option<BinOp> {
    let token = input.current_token()?;
    BinOpKind::from_token(token.kind).map(|kind| BinOp { kind, span: token.span.clone() })
}

/// After parsing the left-hand side of a potential binary expression, parses the operators and
/// operands that follow, grouping them by precedence and associativity.
///
/// Only operators with a precedence of at least `precedence` are consumed; the first operator
/// with a lower precedence is left for the caller.
pub fn parse_expr(
    input: &mut Parser,
    mut lhs: GroupToken,
    precedence: Precedence,
) -> Result<GroupToken, Error> {
    while let Some(op) = peek_op(input).filter(|op| op.precedence() >= precedence) {
        input.next_token()?;
        let mut rhs = parse_operand(input)?;

        // operators that bind tighter than `op` take the right-hand side as their own left-hand
        // side
        while let Some(next) = peek_op(input) {
            let binds_tighter = next.precedence() > op.precedence()
                || (next.precedence() == op.precedence()
                    && next.associativity() == Associativity::Right);
            if !binds_tighter {
                break;
            }
            rhs = parse_expr(input, rhs, next.precedence())?;
        }

        lhs = GroupToken::binary(lhs, op, rhs);
    }

    Ok(lhs)
}
