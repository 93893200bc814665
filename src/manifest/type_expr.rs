//! Parse Java-like type expressions such as `java.util.List<? extends T>`.

use bindcheck_common::types::{PRIMITIVES, TypeRef};

use crate::error::{BindcheckError, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Token {
    Name(String),
    Open,
    Close,
    Comma,
    Question,
}

fn tokenise(text: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = text.chars().peekable();
    while let Some(&character) = chars.peek() {
        match character {
            '<' => tokens.push(Token::Open),
            '>' => tokens.push(Token::Close),
            ',' => tokens.push(Token::Comma),
            '?' => tokens.push(Token::Question),
            c if c.is_whitespace() => {}
            c if c.is_alphanumeric() || matches!(c, '_' | '$' | '.') => {
                let mut name = String::new();
                while let Some(&next) = chars.peek() {
                    if !(next.is_alphanumeric() || matches!(next, '_' | '$' | '.')) {
                        break;
                    }
                    name.push(next);
                    chars.next();
                }
                tokens.push(Token::Name(name));
                continue;
            }
            other => return Err(invalid(text, format!("unexpected character `{other}`"))),
        }
        chars.next();
    }
    Ok(tokens)
}

fn invalid(text: &str, reason: impl Into<String>) -> BindcheckError {
    BindcheckError::TypeExpression {
        text: text.to_owned(),
        reason: reason.into(),
    }
}

/// Parses `text` into a [`TypeRef`].
///
/// Names listed in `variables` become type variables, primitive keywords
/// become primitives and `void` is only accepted at the top level. Any other
/// name is a declared type, whether or not the type universe knows it.
///
/// # Errors
///
/// Returns [`BindcheckError::TypeExpression`] when the text is not a single
/// well-formed type.
///
/// # Examples
///
/// ```
/// use bindcheck::manifest::parse_type;
///
/// let ty = parse_type("java.util.List<? extends T>", &[String::from("T")]).unwrap();
/// assert_eq!(ty.to_string(), "java.util.List<? extends T>");
/// ```
pub fn parse_type(text: &str, variables: &[String]) -> Result<TypeRef> {
    let tokens = tokenise(text)?;
    let mut parser = Parser {
        text,
        tokens: tokens.into_iter().peekable(),
        variables,
    };
    let parsed = parser.parse(Position::TopLevel)?;
    match parser.tokens.next() {
        None => Ok(parsed),
        Some(token) => Err(invalid(text, format!("unexpected {token:?} after the type"))),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Position {
    TopLevel,
    Argument,
    Bound,
}

struct Parser<'a> {
    text: &'a str,
    tokens: std::iter::Peekable<std::vec::IntoIter<Token>>,
    variables: &'a [String],
}

impl Parser<'_> {
    fn parse(&mut self, position: Position) -> Result<TypeRef> {
        match self.tokens.next() {
            Some(Token::Question) if position == Position::Argument => self.parse_wildcard(),
            Some(Token::Question) => Err(invalid(self.text, "wildcards are only valid as type arguments")),
            Some(Token::Name(name)) => self.parse_named(name, position),
            Some(token) => Err(invalid(self.text, format!("expected a type, found {token:?}"))),
            None => Err(invalid(self.text, "expected a type")),
        }
    }

    fn parse_wildcard(&mut self) -> Result<TypeRef> {
        if !matches!(self.tokens.peek(), Some(Token::Name(keyword)) if keyword == "extends") {
            return Ok(TypeRef::wildcard());
        }
        self.tokens.next();
        let bound = self.parse(Position::Bound)?;
        Ok(TypeRef::wildcard_extends(bound))
    }

    fn parse_named(&mut self, name: String, position: Position) -> Result<TypeRef> {
        if name == "void" {
            return if position == Position::TopLevel {
                Ok(TypeRef::Void)
            } else {
                Err(invalid(self.text, "`void` cannot be a type argument"))
            };
        }
        if PRIMITIVES.contains(&name.as_str()) {
            return if position == Position::TopLevel {
                Ok(TypeRef::primitive(name))
            } else {
                Err(invalid(self.text, format!("primitive `{name}` cannot be a type argument")))
            };
        }
        if self.variables.contains(&name) {
            return Ok(TypeRef::variable(name));
        }
        if name.split('.').any(str::is_empty) {
            return Err(invalid(self.text, format!("`{name}` is not a qualified name")));
        }

        if self.tokens.peek() != Some(&Token::Open) {
            return Ok(TypeRef::declared(&name));
        }
        self.tokens.next();
        let mut arguments = vec![self.parse(Position::Argument)?];
        loop {
            match self.tokens.next() {
                Some(Token::Comma) => arguments.push(self.parse(Position::Argument)?),
                Some(Token::Close) => break,
                _ => return Err(invalid(self.text, format!("unclosed type arguments for `{name}`"))),
            }
        }
        Ok(TypeRef::generic(&name, arguments))
    }
}
