//! Conversion of a reduced [`GroupToken`] tree into an [`Operator`] tree.

use crate::{
    error::{kind, Error},
    symbolic::operator::{BinOpKind, Operator, Symbol, UnaryOpKind},
};
use phi_parser::{
    parser::group::{Group, GroupKind, GroupToken, Lexeme},
    tokenizer::TokenKind,
};
use std::sync::Arc;

/// Builds the operator tree for the given group tree.
///
/// `previous` is the tree that `phi(i-1)` refers to. Every occurrence of `phi(i-1)` shares it.
pub fn build(token: &GroupToken, previous: Option<&Arc<Operator>>) -> Result<Operator, Error> {
    match token {
        GroupToken::Literal(literal) => Ok(Operator::from_literal(literal.value)),
        GroupToken::Lexeme(lexeme) => build_lexeme(lexeme, previous),
        GroupToken::Group(group) => build_group(group, previous),
    }
}

/// Builds the operand for a single token.
fn build_lexeme(lexeme: &Lexeme, previous: Option<&Arc<Operator>>) -> Result<Operator, Error> {
    if let Some(symbol) = Symbol::from_token(lexeme.kind) {
        return Ok(Operator::variable(symbol, 0));
    }

    match lexeme.kind {
        TokenKind::Previous => previous
            .map(|tree| Operator::Functional(Arc::clone(tree)))
            .ok_or_else(|| Error::new(vec![lexeme.span.clone()], kind::UnboundPlaceholder)),
        _ => Err(Error::new(vec![lexeme.span.clone()], kind::UnexpectedGroupToken {
            token: lexeme.to_string(),
        })),
    }
}

/// Builds the operation for a group.
fn build_group(group: &Group, previous: Option<&Arc<Operator>>) -> Result<Operator, Error> {
    let malformed = || Error::new(vec![group.span.clone()], kind::MalformedGroup { kind: group.kind });
    if group.children.len() != group.kind.arity() {
        return Err(malformed());
    }

    let children = &group.children;
    match group.kind {
        GroupKind::Bracket => Ok(Operator::unary(UnaryOpKind::Bracket, build(&children[0], previous)?)),
        GroupKind::ExpCall => {
            let is_exp = matches!(&children[0], GroupToken::Lexeme(lexeme) if lexeme.kind == TokenKind::Exp);
            if !is_exp || children[1].group_kind() != Some(GroupKind::Bracket) {
                return Err(malformed());
            }
            Ok(Operator::unary(UnaryOpKind::Exp, build(&children[1], previous)?))
        },
        GroupKind::UnaryMinus => {
            if !matches!(&children[0], GroupToken::Lexeme(lexeme) if lexeme.kind == TokenKind::Sub) {
                return Err(malformed());
            }
            Ok(Operator::unary(UnaryOpKind::Neg, build(&children[1], previous)?))
        },
        GroupKind::Power
            | GroupKind::Product
            | GroupKind::Quotient
            | GroupKind::Sum
            | GroupKind::Difference => {
            let op = match &children[1] {
                GroupToken::Lexeme(lexeme) => BinOpKind::from_token(lexeme.kind)
                    .filter(|op| op.group_kind() == group.kind)
                    .ok_or_else(malformed)?,
                _ => return Err(malformed()),
            };
            Ok(Operator::binary(build(&children[0], previous)?, op, build(&children[2], previous)?))
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use phi_parser::parser::{literal::LitNum, reduce};
    use super::*;

    fn build_source(source: &str, previous: Option<&Arc<Operator>>) -> Result<Operator, Error> {
        build(&reduce(source).unwrap(), previous)
    }

    #[test]
    fn literals() {
        assert_eq!(build_source("1", None).unwrap(), Operator::OneValue);
        assert_eq!(build_source("2", None).unwrap(), Operator::Square);
        assert_eq!(build_source("2,5", None).unwrap(), Operator::Constant(2.5));
    }

    #[test]
    fn operations() {
        let tree = build_source("exp(-xi)*mi", None).unwrap();
        assert_eq!(tree, Operator::binary(
            Operator::unary(UnaryOpKind::Exp, Operator::unary(
                UnaryOpKind::Bracket,
                Operator::unary(UnaryOpKind::Neg, Operator::variable(Symbol::Xi, 0)),
            )),
            BinOpKind::Mul,
            Operator::variable(Symbol::Mi, 0),
        ));
    }

    #[test]
    fn render_round_trip() {
        for source in [
            "xi+2*xi^2",
            "exp((-(xi-mi)^2)/(2*di^2))",
            "-(xi)^2",
            "-xi^2",
            "xi-mi-di",
            "xi^-2",
            "0.5*xi",
        ] {
            let tree = build_source(source, None).unwrap();
            assert_eq!(tree.to_string(), source);
            assert_eq!(build_source(&tree.to_string(), None).unwrap(), tree);
        }
    }

    #[test]
    fn placeholder_shares_previous() {
        let previous = Arc::new(build_source("xi^2", None).unwrap());
        let tree = build_source("phi(i-1)+phi(i-1)", Some(&previous)).unwrap();

        assert_eq!(tree.to_string(), "xi^2+xi^2");
        assert_eq!(Arc::strong_count(&previous), 3);
    }

    #[test]
    fn unbound_placeholder() {
        let err = build_source("xi+phi(i-1)", None).unwrap_err();
        assert!(err.is::<kind::UnboundPlaceholder>());
        assert_eq!(err.spans, vec![3..11]);

        let mut buf = Vec::new();
        err.build_report("input")
            .write(("input", ariadne::Source::from("xi+phi(i-1)")), &mut buf)
            .unwrap();
        let report = String::from_utf8_lossy(&buf);
        assert!(report.contains("stands for the whole equation of the previous iteration"));
    }

    #[test]
    fn malformed_groups() {
        let group = GroupToken::Group(Group {
            kind: GroupKind::Sum,
            children: vec![GroupToken::Literal(LitNum { value: 3.0, span: 0..1 })],
            span: 0..1,
        });
        let err = build(&group, None).unwrap_err();
        assert_eq!(err.downcast_ref(), Some(&kind::MalformedGroup { kind: GroupKind::Sum }));

        let operator = GroupToken::Lexeme(Lexeme { kind: TokenKind::Mul, span: 1..2 });
        let group = GroupToken::Group(Group {
            kind: GroupKind::Sum,
            children: vec![operator.clone(), operator.clone(), operator],
            span: 0..3,
        });
        let err = build(&group, None).unwrap_err();
        assert!(err.is::<kind::MalformedGroup>());
    }

    #[test]
    fn operator_as_operand() {
        let err = build(&GroupToken::Lexeme(Lexeme { kind: TokenKind::Add, span: 0..1 }), None)
            .unwrap_err();
        let kind = err.downcast_ref::<kind::UnexpectedGroupToken>().unwrap();
        assert_eq!(kind.token, "+");
    }
}
