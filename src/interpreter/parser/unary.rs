use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        evaluator::function::core::lookup,
        lexer::Token,
        parser::{
            binary::parse_relational,
            core::{ParseResult, parse_expression},
            utils::parse_comma_separated,
        },
    },
};

/// Parses a logical negation.
///
/// The `not` keyword is a prefix operator sitting between `and` and the
/// relational operators, so `not 1 = 2` negates the whole comparison.
/// Repeated application (`not not x`) is legal.
///
/// Grammar: `negation := "not" negation | relational`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or the underlying relational expression.
pub(crate) fn parse_not<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Identifier(name), offset)) = tokens.peek()
       && name == "not"
    {
        tokens.next();
        let expr = parse_not(tokens)?;
        Ok(Expr::UnaryOp { op:     UnaryOperator::Not,
                           expr:   Box::new(expr),
                           offset: *offset, })
    } else {
        parse_relational(tokens)
    }
}

/// Parses a unary expression.
///
/// Supports the prefix operator `-` (numeric negation). The operator is
/// right-associative and may be repeated: double negation cancels, so
/// `--1` is `1`.
///
/// If no operator is present, the function delegates to [`parse_primary`].
///
/// Grammar: `unary := "-" unary | primary`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, offset)) = tokens.peek() {
        tokens.next();
        let expr = parse_unary(tokens)?;
        Ok(Expr::UnaryOp { op:     UnaryOperator::Negate,
                           expr:   Box::new(expr),
                           offset: *offset, })
    } else {
        parse_primary(tokens)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric and string literals
/// - the boolean keywords `true` and `false`
/// - bare identifiers (property references)
/// - namespaced function calls
/// - the `if(condition, then, else)` form
/// - parenthesized sub-expressions
///
/// This function does not handle unary operators. It dispatches to
/// specialized parsing functions depending on the leading token.
///
/// Grammar (simplified):
/// ```text
///     primary := literal
///              | identifier_or_function
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { offset: 0 })?;

    match peeked {
        (Token::Integer(..) | Token::Real(..) | Token::Str(..), _) => parse_literal(tokens),
        (Token::LParen, _) => parse_grouping(tokens),
        (Token::Identifier(_), _) => parse_identifier_or_function(tokens),
        (Token::End, offset) => Err(ParseError::UnexpectedEndOfInput { offset: *offset }),
        (tok, offset) => Err(ParseError::UnexpectedToken { token:  format!("{tok:?}"),
                                                           offset: *offset, }),
    }
}

/// Parses a numeric or string literal.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a literal.
///
/// # Returns
/// An [`Expr::Literal`] containing the parsed value.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Integer(n), offset)) => Ok(Expr::Literal { value:  (*n).into(),
                                                                offset: *offset, }),
        Some((Token::Real(r), offset)) => Ok(Expr::Literal { value:  (*r).into(),
                                                             offset: *offset, }),
        Some((Token::Str(s), offset)) => Ok(Expr::Literal { value:  s.clone().into(),
                                                            offset: *offset, }),
        _ => unreachable!("parse_literal called on a non literal token"),
    }
}

/// Parses a parenthesized sub-expression.
///
/// The function consumes the opening `(`, parses an expression, and expects
/// a closing `)`. The sub-expression becomes the result directly; no
/// grouping node is kept in the tree.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
///
/// # Returns
/// The inner expression.
///
/// # Errors
/// `ExpectedClosingParen` when the `)` is missing; if the stream runs out
/// first, the error points at the end of the text.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next(); // consume '('
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        Some((_, offset)) => Err(ParseError::ExpectedClosingParen { offset: *offset }),
        None => Err(ParseError::ExpectedClosingParen { offset: 0 }),
    }
}

/// Parses an identifier-led primary.
///
/// Depending on what follows, an identifier is:
/// - the boolean literal `true` or `false`,
/// - the head of the `if(...)` conditional form,
/// - a function namespace when followed by `::`, or
/// - a bare property reference.
///
/// Function calls are validated against the builtin registry while parsing:
/// an unknown `namespace::name` or a wrong argument count is rejected here,
/// before evaluation is ever attempted. The reserved keywords `and`, `or`
/// and `not` cannot appear in operand position.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// The parsed [`Expr`].
///
/// # Errors
/// - `IdentifierReserved` for a keyword in operand position.
/// - `UnknownFunction` when `namespace::name` is not registered.
/// - `ExpectedArgumentList` when a function name is not followed by `(`.
/// - `ArgumentCountMismatch` for a wrong number of arguments.
fn parse_identifier_or_function<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, offset) = match tokens.next() {
        Some((Token::Identifier(n), offset)) => (n.as_str(), *offset),
        Some((tok, offset)) => {
            return Err(ParseError::UnexpectedToken { token:  format!("{tok:?}"),
                                                     offset: *offset, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { offset: 0 }),
    };

    match name {
        "true" => return Ok(Expr::Literal { value: true.into(),
                                            offset }),
        "false" => return Ok(Expr::Literal { value: false.into(),
                                             offset }),
        "if" => return parse_conditional(tokens, offset),
        "and" | "or" | "not" => {
            return Err(ParseError::IdentifierReserved { name: name.to_string(),
                                                        offset });
        },
        _ => {},
    }

    if let Some((Token::ColonColon, _)) = tokens.peek() {
        tokens.next();

        let function_name = match tokens.next() {
            Some((Token::Identifier(n), _)) => n.as_str(),
            Some((tok, offset)) => {
                return Err(ParseError::UnexpectedToken { token:  format!("{tok:?}"),
                                                         offset: *offset, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { offset: 0 }),
        };

        let qualified = format!("{name}::{function_name}");
        let Some(builtin) = lookup(name, function_name) else {
            return Err(ParseError::UnknownFunction { function: qualified,
                                                     offset });
        };

        match tokens.peek() {
            Some((Token::LParen, _)) => {
                tokens.next();
            },
            _ => {
                return Err(ParseError::ExpectedArgumentList { function: qualified,
                                                              offset });
            },
        }

        let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
        if arguments.len() != builtin.params.len() {
            return Err(ParseError::ArgumentCountMismatch { function: qualified,
                                                           expected: builtin.params.len(),
                                                           found: arguments.len(),
                                                           offset });
        }

        return Ok(Expr::FunctionCall { namespace: name.to_string(),
                                       name: function_name.to_string(),
                                       arguments,
                                       offset });
    }

    Ok(Expr::Property { name: name.to_string(),
                        offset })
}

/// Parses the `if(condition, then, else)` special form.
///
/// The form looks like a call but is parsed into a distinct node: exactly
/// three arguments are required, and at evaluation time only the branch
/// selected by the condition runs, while ordinary function calls evaluate
/// all arguments eagerly.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `if` keyword.
/// - `offset`: Byte offset of the `if` keyword.
///
/// # Returns
/// An [`Expr::Conditional`] node.
///
/// # Errors
/// - `ExpectedArgumentList` when `(` does not follow.
/// - `ArgumentCountMismatch` for anything other than three arguments.
fn parse_conditional<'a, I>(tokens: &mut Peekable<I>, offset: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::LParen, _)) => {
            tokens.next();
        },
        _ => {
            return Err(ParseError::ExpectedArgumentList { function: "if".to_string(),
                                                          offset });
        },
    }

    let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
    let found = arguments.len();

    let mut arguments = arguments.into_iter();
    let (Some(condition), Some(then_branch), Some(else_branch), None) =
        (arguments.next(), arguments.next(), arguments.next(), arguments.next())
    else {
        return Err(ParseError::ArgumentCountMismatch { function: "if".to_string(),
                                                       expected: 3,
                                                       found,
                                                       offset });
    };

    Ok(Expr::Conditional { condition:   Box::new(condition),
                           then_branch: Box::new(then_branch),
                           else_branch: Box::new(else_branch),
                           offset })
}
