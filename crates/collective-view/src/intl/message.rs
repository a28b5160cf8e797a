//! ICU Message Format
//!
//! Supports the subset used by the page components:
//! - `{name}` and `{name, number}`
//! - `{name, select, key {...} other {...}}`
//! - `{name, plural, =0 {...} one {...} other {...}}` with `#`
//! - apostrophe quoting: `''` is a literal quote, `'{'` escapes syntax

use std::collections::BTreeMap;

use crate::error::MessageError;
use super::money::format_number;

/// A value substituted into a message
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Text(String),
    Number(f64),
    /// Rich content supplied by the caller at render time (links, styled amounts)
    Slot,
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        ArgValue::Text(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        ArgValue::Text(value)
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        ArgValue::Number(value as f64)
    }
}

impl From<u32> for ArgValue {
    fn from(value: u32) -> Self {
        ArgValue::Number(f64::from(value))
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        ArgValue::Number(value)
    }
}

impl ArgValue {
    /// Key used to pick a `select` branch
    fn select_key(&self) -> String {
        match self {
            ArgValue::Text(s) => s.clone(),
            ArgValue::Number(n) if n.fract() == 0.0 => format!("{}", *n as i64),
            ArgValue::Number(n) => n.to_string(),
            ArgValue::Slot => String::new(),
        }
    }
}

/// Named message arguments
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageArgs {
    values: BTreeMap<String, ArgValue>,
}

impl MessageArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl Into<ArgValue>) -> Self {
        self.values.insert(name.to_string(), value.into());
        self
    }

    /// Set `name` only when a value is present; absent args select `other`
    pub fn with_opt<V: Into<ArgValue>>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.with(name, v),
            None => self,
        }
    }

    /// Mark `name` as a rich placeholder filled in by the caller
    pub fn slot(self, name: &str) -> Self {
        self.with(name, ArgValue::Slot)
    }

    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.values.get(name)
    }
}

/// A piece of a formatted message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessagePart {
    Text(String),
    Placeholder(String),
}

#[derive(Debug, Clone, PartialEq)]
enum PluralKey {
    Exact(f64),
    Category(String),
}

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Literal(String),
    Argument(String),
    Number(String),
    Select {
        arg: String,
        branches: Vec<(String, Vec<Node>)>,
    },
    Plural {
        arg: String,
        branches: Vec<(PluralKey, Vec<Node>)>,
    },
    Pound,
}

/// A parsed message pattern
#[derive(Debug, Clone, PartialEq)]
pub struct MessageFormat {
    nodes: Vec<Node>,
}

impl MessageFormat {
    pub fn parse(pattern: &str) -> Result<Self, MessageError> {
        let mut parser = Parser { src: pattern, pos: 0 };
        let nodes = parser.parse_nodes(false, false)?;
        Ok(Self { nodes })
    }

    /// Format to plain text; slots render as `{name}`
    pub fn format(&self, args: &MessageArgs) -> String {
        self.format_parts(args)
            .into_iter()
            .map(|part| match part {
                MessagePart::Text(text) => text,
                MessagePart::Placeholder(name) => format!("{{{}}}", name),
            })
            .collect()
    }

    /// Format to text and placeholder parts, adjacent text merged
    pub fn format_parts(&self, args: &MessageArgs) -> Vec<MessagePart> {
        let mut parts = Vec::new();
        render(&self.nodes, args, None, &mut parts);
        parts
    }
}

fn push_text(parts: &mut Vec<MessagePart>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(MessagePart::Text(last)) = parts.last_mut() {
        last.push_str(text);
    } else {
        parts.push(MessagePart::Text(text.to_string()));
    }
}

fn render(nodes: &[Node], args: &MessageArgs, pound: Option<f64>, parts: &mut Vec<MessagePart>) {
    for node in nodes {
        match node {
            Node::Literal(text) => push_text(parts, text),
            Node::Argument(name) | Node::Number(name) => match args.get(name) {
                Some(ArgValue::Text(text)) => push_text(parts, text),
                Some(ArgValue::Number(n)) => push_text(parts, &format_number(*n)),
                Some(ArgValue::Slot) => parts.push(MessagePart::Placeholder(name.clone())),
                None => log::debug!("message argument `{}` not provided", name),
            },
            Node::Pound => {
                if let Some(n) = pound {
                    push_text(parts, &format_number(n));
                }
            }
            Node::Select { arg, branches } => {
                let key = args.get(arg).map(ArgValue::select_key);
                let branch = key
                    .and_then(|k| branches.iter().find(|(name, _)| *name == k))
                    .or_else(|| branches.iter().find(|(name, _)| name == "other"));
                if let Some((_, body)) = branch {
                    render(body, args, pound, parts);
                }
            }
            Node::Plural { arg, branches } => {
                let value = match args.get(arg) {
                    Some(ArgValue::Number(n)) => *n,
                    _ => 0.0,
                };
                let category = plural_category(value);
                let branch = branches
                    .iter()
                    .find(|(key, _)| *key == PluralKey::Exact(value))
                    .or_else(|| {
                        branches
                            .iter()
                            .find(|(key, _)| matches!(key, PluralKey::Category(c) if c == category))
                    })
                    .or_else(|| {
                        branches
                            .iter()
                            .find(|(key, _)| matches!(key, PluralKey::Category(c) if c == "other"))
                    });
                if let Some((_, body)) = branch {
                    render(body, args, Some(value), parts);
                }
            }
        }
    }
}

/// English plural rules
fn plural_category(n: f64) -> &'static str {
    if n == 1.0 {
        "one"
    } else {
        "other"
    }
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    fn read_word(&mut self) -> &'a str {
        let src = self.src;
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_whitespace() || c == ',' || c == '{' || c == '}' {
                break;
            }
            self.bump();
        }
        &src[start..self.pos]
    }

    fn expect(&mut self, expected: char, err: MessageError) -> Result<(), MessageError> {
        if self.peek() == Some(expected) {
            self.bump();
            Ok(())
        } else {
            Err(err)
        }
    }

    fn parse_nodes(&mut self, in_plural: bool, nested: bool) -> Result<Vec<Node>, MessageError> {
        let mut nodes = Vec::new();
        let mut buf = String::new();

        loop {
            match self.peek() {
                None if nested => return Err(MessageError::UnbalancedBrace(self.pos)),
                None => break,
                Some('}') if nested => break,
                Some('}') => return Err(MessageError::UnbalancedBrace(self.pos)),
                Some('{') => {
                    if !buf.is_empty() {
                        nodes.push(Node::Literal(std::mem::take(&mut buf)));
                    }
                    nodes.push(self.parse_argument(in_plural)?);
                }
                Some('#') if in_plural => {
                    if !buf.is_empty() {
                        nodes.push(Node::Literal(std::mem::take(&mut buf)));
                    }
                    self.bump();
                    nodes.push(Node::Pound);
                }
                Some('\'') => self.parse_quote(in_plural, &mut buf),
                Some(c) => {
                    buf.push(c);
                    self.bump();
                }
            }
        }

        if !buf.is_empty() {
            nodes.push(Node::Literal(buf));
        }
        Ok(nodes)
    }

    fn parse_quote(&mut self, in_plural: bool, buf: &mut String) {
        self.bump();
        match self.peek() {
            Some('\'') => {
                self.bump();
                buf.push('\'');
            }
            Some(c) if c == '{' || c == '}' || (c == '#' && in_plural) => {
                while let Some(c) = self.bump() {
                    if c == '\'' {
                        if self.peek() == Some('\'') {
                            self.bump();
                            buf.push('\'');
                        } else {
                            return;
                        }
                    } else {
                        buf.push(c);
                    }
                }
            }
            _ => buf.push('\''),
        }
    }

    fn parse_argument(&mut self, in_plural: bool) -> Result<Node, MessageError> {
        let start = self.pos;
        self.bump();
        self.skip_ws();
        let name = self.read_word().to_string();
        if name.is_empty() {
            return Err(MessageError::EmptyArgument(start));
        }
        self.skip_ws();

        match self.peek() {
            Some('}') => {
                self.bump();
                Ok(Node::Argument(name))
            }
            Some(',') => {
                self.bump();
                self.skip_ws();
                let kind_pos = self.pos;
                let kind = self.read_word().to_string();
                self.skip_ws();
                match kind.as_str() {
                    "number" => {
                        if self.peek() == Some(',') {
                            // Styles are accepted and ignored
                            while !matches!(self.peek(), Some('}') | None) {
                                self.bump();
                            }
                        }
                        self.expect('}', MessageError::UnbalancedBrace(start))?;
                        Ok(Node::Number(name))
                    }
                    "select" => {
                        self.expect(',', MessageError::MalformedBranch(name.clone()))?;
                        let branches = self.parse_branches(&name, in_plural)?;
                        Ok(Node::Select { arg: name, branches })
                    }
                    "plural" => {
                        self.expect(',', MessageError::MalformedBranch(name.clone()))?;
                        let branches = self
                            .parse_branches(&name, true)?
                            .into_iter()
                            .map(|(key, body)| {
                                let key = match key.strip_prefix('=').map(str::parse::<f64>) {
                                    Some(Ok(n)) => PluralKey::Exact(n),
                                    Some(Err(_)) => return Err(MessageError::MalformedBranch(name.clone())),
                                    None => PluralKey::Category(key),
                                };
                                Ok((key, body))
                            })
                            .collect::<Result<Vec<_>, _>>()?;
                        Ok(Node::Plural { arg: name, branches })
                    }
                    _ => Err(MessageError::UnknownArgumentType { kind, position: kind_pos }),
                }
            }
            _ => Err(MessageError::UnbalancedBrace(start)),
        }
    }

    fn parse_branches(
        &mut self,
        arg: &str,
        in_plural: bool,
    ) -> Result<Vec<(String, Vec<Node>)>, MessageError> {
        let mut branches = Vec::new();
        loop {
            self.skip_ws();
            match self.peek() {
                None => return Err(MessageError::UnbalancedBrace(self.pos)),
                Some('}') => {
                    self.bump();
                    break;
                }
                Some(_) => {}
            }

            let key = self.read_word().to_string();
            if key.is_empty() {
                return Err(MessageError::MalformedBranch(arg.to_string()));
            }
            self.skip_ws();
            self.expect('{', MessageError::MalformedBranch(arg.to_string()))?;
            let body = self.parse_nodes(in_plural, true)?;
            self.expect('}', MessageError::UnbalancedBrace(self.pos))?;
            branches.push((key, body));
        }

        if !branches.iter().any(|(key, _)| key == "other") {
            return Err(MessageError::MissingOther(arg.to_string()));
        }
        Ok(branches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(pattern: &str, args: &MessageArgs) -> String {
        MessageFormat::parse(pattern).unwrap().format(args)
    }

    #[test]
    fn test_plain_text_and_arguments() {
        let args = MessageArgs::new().with("name", "Webpack");
        assert_eq!(fmt("Hello {name}!", &args), "Hello Webpack!");
        assert_eq!(fmt("{ name }", &args), "Webpack");
    }

    #[test]
    fn test_number_argument_is_grouped() {
        let args = MessageArgs::new().with("n", 1234567i64);
        assert_eq!(fmt("{n, number} views", &args), "1,234,567 views");
        assert_eq!(fmt("{n} views", &args), "1,234,567 views");
    }

    #[test]
    fn test_select_falls_back_to_other() {
        let pattern = "{kind, select, backer {Become a backer} other {Join us}}";
        assert_eq!(fmt(pattern, &MessageArgs::new().with("kind", "backer")), "Become a backer");
        assert_eq!(fmt(pattern, &MessageArgs::new().with("kind", "gold")), "Join us");
        assert_eq!(fmt(pattern, &MessageArgs::new()), "Join us");
    }

    #[test]
    fn test_select_on_number_zero() {
        let pattern = "{min, select, 0 {free} other {paid}}";
        assert_eq!(fmt(pattern, &MessageArgs::new().with("min", 0i64)), "free");
        assert_eq!(fmt(pattern, &MessageArgs::new().with("min", 500i64)), "paid");
    }

    #[test]
    fn test_nested_select() {
        let pattern = "{a, select, x {X{b, select, y {Y} other {?}}} other {-}}";
        let args = MessageArgs::new().with("a", "x").with("b", "y");
        assert_eq!(fmt(pattern, &args), "XY");
    }

    #[test]
    fn test_plural_exact_before_category() {
        let pattern = "{count, plural, =0 {nobody} one {# person} other {# people}}";
        assert_eq!(fmt(pattern, &MessageArgs::new().with("count", 0u32)), "nobody");
        assert_eq!(fmt(pattern, &MessageArgs::new().with("count", 1u32)), "1 person");
        assert_eq!(fmt(pattern, &MessageArgs::new().with("count", 1500u32)), "1,500 people");
    }

    #[test]
    fn test_pound_is_literal_outside_plural() {
        assert_eq!(fmt("issue #4", &MessageArgs::new()), "issue #4");
    }

    #[test]
    fn test_apostrophe_quoting() {
        assert_eq!(fmt("don't worry", &MessageArgs::new()), "don't worry");
        assert_eq!(fmt("it''s", &MessageArgs::new()), "it's");
        assert_eq!(fmt("'{literal}' braces", &MessageArgs::new()), "{literal} braces");
    }

    #[test]
    fn test_slots_become_placeholders() {
        let format = MessageFormat::parse("{amount} goal").unwrap();
        let parts = format.format_parts(&MessageArgs::new().slot("amount"));
        assert_eq!(
            parts,
            vec![
                MessagePart::Placeholder("amount".to_string()),
                MessagePart::Text(" goal".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(MessageFormat::parse("oops {name"), Err(MessageError::UnbalancedBrace(5)));
        assert_eq!(MessageFormat::parse("oops }"), Err(MessageError::UnbalancedBrace(5)));
        assert_eq!(MessageFormat::parse("{}"), Err(MessageError::EmptyArgument(0)));
        assert_eq!(
            MessageFormat::parse("{a, select, x {X}}"),
            Err(MessageError::MissingOther("a".to_string()))
        );
        assert!(matches!(
            MessageFormat::parse("{a, date}"),
            Err(MessageError::UnknownArgumentType { .. })
        ));
    }
}
