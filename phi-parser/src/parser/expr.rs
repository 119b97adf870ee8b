use crate::{
    parser::{
        binary,
        call,
        error::{kind, Error},
        group::{GroupToken, Lexeme},
        literal::LitNum,
        paren,
        unary,
        Parse,
        Parser,
        Precedence,
    },
    tokenizer::TokenKind,
};

/// The tokens that can begin an operand.
const OPERAND_START: &[TokenKind] = &[
    TokenKind::Number,
    TokenKind::Xi,
    TokenKind::Mi,
    TokenKind::Di,
    TokenKind::Previous,
    TokenKind::OpenParen,
    TokenKind::Exp,
    TokenKind::Sub,
];

impl Parse for GroupToken {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let lhs = unary::parse_operand(input)?;
        binary::parse_expr(input, lhs, Precedence::Any)
    }
}

/// Parses a single operand that is not preceded by a minus sign: a number, a symbol, `phi(i-1)`,
/// a parenthesized expression, or an `exp` call.
pub fn parse_primary(input: &mut Parser) -> Result<GroupToken, Error> {
    let (kind, span) = match input.current_token() {
        Some(token) => (token.kind, token.span.clone()),
        None => return Err(input.error(kind::UnexpectedEof)),
    };

    match kind {
        TokenKind::Number => input.try_parse::<LitNum>().map(GroupToken::Literal),
        TokenKind::Xi | TokenKind::Mi | TokenKind::Di | TokenKind::Previous => {
            let token = input.next_token()?;
            Ok(GroupToken::Lexeme(Lexeme::from(token)))
        },
        TokenKind::OpenParen => paren::parse_bracket(input),
        TokenKind::Exp => call::parse_exp_call(input),
        found => Err(Error::new(vec![span], kind::UnexpectedToken {
            expected: OPERAND_START,
            found,
        })),
    }
}
