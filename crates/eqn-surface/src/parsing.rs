use crate::{
    error::{ParseError, SyntaxError},
    lex::{Lexer, Token},
    syntax::{Definition, Definitions, Expression, Term},
};
use log::{debug, trace};
use std::mem;
use std::ops::Range;

type Result<T> = std::result::Result<T, SyntaxError>;

fn invalid_character(span: Range<usize>) -> SyntaxError {
    SyntaxError::InvalidCharacter {
        column: span.start + 1,
    }
}

/// Classify the text of one term. All-digit text is a literal, anything else
/// names a variable. Whether that variable exists is not checked here.
fn p_term(text: String) -> Result<Term> {
    if text.is_empty() {
        return Err(SyntaxError::EmptyTerm);
    }
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(Term::Reference(text));
    }
    match text.parse::<u64>() {
        Ok(value) => Ok(Term::Literal(value)),
        Err(_) => Err(SyntaxError::LiteralOutOfRange(text)),
    }
}

/// Parse everything to the left of the first `=`.
fn p_name(line: &str, lexer: &mut Lexer) -> Result<String> {
    let mut name = String::new();
    loop {
        match lexer.next() {
            None => return Err(SyntaxError::MissingEquals),
            Some(Err(span)) => return Err(invalid_character(span)),
            Some(Ok((Token::Equal, _))) => break,
            Some(Ok((_, span))) => name.push_str(&line[span]),
        }
    }
    if name.is_empty() {
        return Err(SyntaxError::MissingName);
    }
    Ok(name)
}

/// Parse the `+`-separated terms to the right of the `=`.
fn p_expression(line: &str, lexer: &mut Lexer) -> Result<Expression> {
    let mut terms = Vec::new();
    let mut current = String::new();
    let mut separated = false;
    for item in lexer {
        let (token, span) = item.map_err(invalid_character)?;
        match token {
            Token::Word => current.push_str(&line[span]),
            Token::Plus => {
                terms.push(p_term(mem::take(&mut current))?);
                separated = true;
            }
            Token::Equal => {
                return Err(SyntaxError::UnexpectedEquals {
                    column: span.start + 1,
                })
            }
        }
    }
    // A right-hand side with no text at all is an empty sum.
    if separated || !current.is_empty() {
        terms.push(p_term(current)?);
    }
    Ok(Expression::new(terms))
}

/// Parse a single `name = term + term ...` line.
pub fn parse_line(line: &str) -> Result<Definition> {
    let mut lexer = Lexer::new(line);
    let name = p_name(line, &mut lexer)?;
    let expression = p_expression(line, &mut lexer)?;
    Ok(Definition::new(name, expression))
}

/// Parse a whole document, one definition per non-blank line.
pub fn parse(text: &str) -> std::result::Result<Definitions, ParseError> {
    let mut definitions = Definitions::new();
    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let definition =
            parse_line(line).map_err(|error| ParseError::MalformedLine {
                line: index + 1,
                error,
            })?;
        trace!("line {}: {definition}", index + 1);
        definitions.insert(definition);
    }
    debug!("parsed {} definitions", definitions.len());
    Ok(definitions)
}
