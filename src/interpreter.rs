/// The evaluator module executes expression trees and computes results.
///
/// The evaluator traverses the AST, evaluates literals, property references,
/// unary and binary operations, function calls and conditionals, and
/// produces a single runtime value. It is the core execution engine of the
/// expression language.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Resolves property references through the supplied lookup capability.
/// - Reports runtime errors such as division by zero or type violations.
pub mod evaluator;
/// The lexer module tokenizes expression text for further parsing.
///
/// The lexer (tokenizer) reads the raw expression string and produces a
/// stream of tokens, each corresponding to meaningful language elements such
/// as numbers, string literals, identifiers, operators and delimiters. This
/// is the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with byte offsets.
/// - Handles numeric and quoted string literals, identifiers and operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of the
/// expression. Function calls are validated against the builtin registry as
/// they are parsed, so structural and arity errors surface before any
/// evaluation is attempted.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates grammar and syntax, reporting errors with byte offsets.
/// - Checks `namespace::name` existence and argument counts while parsing.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value types used during evaluation: integers,
/// floating-point numbers, booleans, strings, and date-times. It also
/// provides the promotion and canonical string-formatting rules applied
/// throughout evaluation and placeholder substitution.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements numeric promotion and kind checks with useful errors.
/// - Formats values in their canonical substitution form.
pub mod value;
