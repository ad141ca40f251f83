use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in an expression string.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens of the property-expression
/// language.
///
/// Whitespace between tokens is insignificant and never required. The
/// keywords `true`, `false`, `and`, `or`, `not` and `if` are ordinary
/// [`Token::Identifier`] tokens; the parser is what reserves them.
#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    /// Real literal tokens, such as `5.0`. At least one fractional digit is
    /// required; a digit run followed by a bare `.` is a lexical error.
    #[regex(r"[0-9]+\.[0-9]+", parse_real)]
    Real(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Single-quoted string literal tokens. An embedded quote is written as
    /// two consecutive quotes and decodes to one quote character.
    #[regex(r"'(?:[^']|'')*'", unquote)]
    Str(String),
    /// Identifier tokens: property names, keywords, function namespaces and
    /// function names such as `to-double`. Letter-led, with digits and
    /// hyphens allowed after the first character.
    #[regex(r"[A-Za-z][A-Za-z0-9-]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `::`
    #[token("::")]
    ColonColon,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `==`, a synonym of `=`
    #[token("==")]
    EqualEqual,
    /// `=`
    #[token("=")]
    Equal,
    /// `<>`
    #[token("<>")]
    NotEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,

    /// End of input. Appended by [`tokenize`] with the text length as its
    /// offset, so end-of-input errors carry a real position.
    #[token("\0")]
    End,
    /// Spaces, tabs and line breaks.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Turns an expression string into a sequence of `(Token, byte offset)`
/// pairs.
///
/// The returned stream always ends with a single [`Token::End`] carrying the
/// text length, which the parser uses both to report end-of-input positions
/// and to reject trailing input after a complete expression.
///
/// # Parameters
/// - `text`: The raw expression text.
///
/// # Returns
/// The token stream, or the first lexical error encountered.
///
/// # Errors
/// - `UnterminatedString` for a quote that is never closed.
/// - `MalformedNumber` for a digit run followed by `.` with no digit.
/// - `LiteralTooLarge` for an integer literal exceeding 64 bits.
/// - `InvalidCharacter` for anything no token can start with.
pub fn tokenize(text: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(text);

    while let Some(token) = lexer.next() {
        let offset = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, offset)),
            Err(()) => return Err(classify_failure(lexer.slice(), offset)),
        }
    }

    tokens.push((Token::End, text.len()));
    Ok(tokens)
}

/// Maps a failing slice to the lexical error it represents.
///
/// logos reports every failure the same way; the slice tells an unterminated
/// string, a stray dot after a digit run, and an oversized integer literal
/// apart from a genuinely unrecognized character.
fn classify_failure(slice: &str, offset: usize) -> ParseError {
    if slice.starts_with('\'') {
        ParseError::UnterminatedString { offset }
    } else if slice.starts_with('.') {
        ParseError::MalformedNumber { offset }
    } else if !slice.is_empty() && slice.chars().all(|c| c.is_ascii_digit()) {
        ParseError::LiteralTooLarge { offset }
    } else {
        ParseError::InvalidCharacter { text: slice.to_string(),
                                       offset }
    }
}

/// Parses a real literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid real number.
fn parse_real(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the literal does not fit in 64 bits.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Decodes a quoted string literal from the current token slice.
///
/// Strips the delimiting quotes and collapses every doubled quote to a
/// single quote character.
fn unquote(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].replace("''", "'")
}

#[cfg(test)]
mod test {
    use super::{Token, tokenize};
    use crate::error::ParseError;

    fn tokens_of(text: &str) -> Vec<Token> {
        tokenize(text).unwrap().into_iter().map(|(tok, _)| tok).collect()
    }

    #[test]
    fn reads_numbers_and_operators() {
        let tokens = tokens_of("1+2*3.5");
        let expected = &[Token::Integer(1),
                         Token::Plus,
                         Token::Integer(2),
                         Token::Star,
                         Token::Real(3.5),
                         Token::End];

        assert_eq!(tokens, expected);
    }

    #[test]
    fn decodes_doubled_quotes() {
        let tokens = tokens_of("'d''Artagnan'");
        assert_eq!(tokens, &[Token::Str("d'Artagnan".to_string()), Token::End]);
    }

    #[test]
    fn identifiers_may_contain_hyphens() {
        let tokens = tokens_of("convert::to-double");
        let expected = &[Token::Identifier("convert".to_string()),
                         Token::ColonColon,
                         Token::Identifier("to-double".to_string()),
                         Token::End];

        assert_eq!(tokens, expected);
    }

    #[test]
    fn stray_dot_is_a_malformed_number() {
        assert_eq!(tokenize("1.aaaa"),
                   Err(ParseError::MalformedNumber { offset: 1 }));
    }

    #[test]
    fn unterminated_string_fails() {
        assert!(matches!(tokenize("'abc"),
                         Err(ParseError::UnterminatedString { .. })));
    }

    #[test]
    fn offsets_are_byte_positions() {
        let tokens = tokenize("10 % 3").unwrap();
        let offsets: Vec<usize> = tokens.iter().map(|(_, offset)| *offset).collect();

        assert_eq!(offsets, &[0, 3, 5, 6]);
    }
}
