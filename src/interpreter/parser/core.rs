use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_logical_or},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, logical OR, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := logical_or`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, offset)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_logical_or(tokens)
}

/// Parses one expression and requires the whole token stream to be consumed.
///
/// Any token left over after a complete expression is rejected, so adjacent
/// literals with no operator between them (`1 1`) are an error rather than
/// two expressions.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, offset)` pairs, terminated
///   by [`Token::End`].
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// - `UnexpectedTrailingTokens` if input remains after the expression.
/// - Propagates any error from expression parsing.
pub fn parse_complete<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_expression(tokens)?;

    match tokens.next() {
        Some((Token::End, _)) | None => Ok(expr),
        Some((tok, offset)) => {
            Err(ParseError::UnexpectedTrailingTokens { token:  format!("{tok:?}"),
                                                       offset: *offset, })
        },
    }
}
