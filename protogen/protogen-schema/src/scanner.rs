//! Tolerant single-pass scanner for `package` and `message` declarations.
//!
//! This is deliberately not a protobuf grammar. At every word boundary the
//! scanner tries two nom parsers:
//!
//! - `package <dotted.name> ;`
//! - `message <Name> {`
//!
//! and otherwise skips one character. Nested messages are therefore captured
//! with the same flat name as top-level ones (`Outer.Inner` is reported as
//! `Inner`).

use nom::{
    IResult,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::char,
    combinator::map,
    sequence::tuple,
};

use crate::{error::ScanError, lex::blank_comments};

/// Declarations recovered from one schema file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScannedSchema {
    /// Declared package, if any.
    pub package: Option<String>,
    /// Message names in declaration order, unqualified.
    pub messages: Vec<String>,
}

impl ScannedSchema {
    /// Fully qualified names of every declared message.
    pub fn qualified_messages(&self) -> impl Iterator<Item = String> + '_ {
        self.messages
            .iter()
            .map(|m| qualify(self.package.as_deref(), m))
    }
}

/// `package.message`, or the bare message name without a package.
pub fn qualify(package: Option<&str>, message: &str) -> String {
    match package {
        Some(pkg) => format!("{pkg}.{message}"),
        None => message.to_string(),
    }
}

/// Scan schema text for its package and message declarations.
///
/// Comments are blanked first. Returns [`ScanError::MultiplePackages`] when
/// more than one `package` statement is found.
pub fn scan_schema(text: &str) -> Result<ScannedSchema, ScanError> {
    let text = blank_comments(text);
    let mut packages: Vec<String> = Vec::new();
    let mut messages = Vec::new();

    let mut rest = text.as_str();
    let mut prev_is_word = false;
    while let Some(ch) = rest.chars().next() {
        if !prev_is_word {
            if let Ok((after, name)) = package_stmt(rest) {
                packages.push(name.to_string());
                rest = after;
                continue;
            }
            if let Ok((after, name)) = message_open(rest) {
                messages.push(name.to_string());
                rest = after;
                continue;
            }
        }
        prev_is_word = is_word_char(ch);
        rest = &rest[ch.len_utf8()..];
    }

    if packages.len() > 1 {
        return Err(ScanError::MultiplePackages { packages });
    }
    Ok(ScannedSchema {
        package: packages.pop(),
        messages,
    })
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Any Unicode whitespace, including vertical tab and form feed.
fn ws0(input: &str) -> IResult<&str, &str> {
    take_while(|c: char| c.is_whitespace())(input)
}

fn ws1(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_whitespace())(input)
}

fn is_package_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

/// package foo.bar ;
fn package_stmt(input: &str) -> IResult<&str, &str> {
    map(
        tuple((
            tag("package"),
            ws1,
            take_while1(is_package_char),
            ws0,
            char(';'),
        )),
        |(_, _, name, _, _)| name,
    )(input)
}

/// message Name {
fn message_open(input: &str) -> IResult<&str, &str> {
    map(
        tuple((
            tag("message"),
            ws1,
            take_while1(is_word_char),
            ws0,
            char('{'),
        )),
        |(_, _, name, _, _)| name,
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_requires_whitespace_after_keyword() {
        assert!(package_stmt("packagefoo;").is_err());
        assert_eq!(package_stmt("package\n  a.b_c ;").unwrap().1, "a.b_c");
    }

    #[test]
    fn vertical_tab_and_form_feed_separate_tokens() {
        let scanned = scan_schema("package\x0cfoo;\nmessage\x0bBar\x0c{}").unwrap();
        assert_eq!(scanned.package.as_deref(), Some("foo"));
        assert_eq!(scanned.messages, vec!["Bar"]);
    }

    #[test]
    fn message_requires_open_brace() {
        assert!(message_open("message Foo;").is_err());
        assert_eq!(message_open("message Foo{").unwrap().1, "Foo");
    }

    #[test]
    fn keywords_must_start_at_word_boundary() {
        let scanned = scan_schema("submessage Hidden {}\nmypackage x;").unwrap();
        assert!(scanned.messages.is_empty());
        assert_eq!(scanned.package, None);
    }
}
