//! Relation projections such as `handlingUnit{stockOwner{name}}`
//!
//! A list field may select a value through nested relations. The text form is
//! what the GraphQL query layer needs; the parsed tree gives the table a
//! stable column key and an accessor path into the returned JSON.

use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    #[error("empty projection")]
    Empty,

    #[error("unexpected '{ch}' at position {pos} in \"{input}\"")]
    UnexpectedChar { input: String, ch: char, pos: usize },

    #[error("unbalanced braces in \"{0}\"")]
    Unbalanced(String),

    #[error("empty selection in \"{0}\"")]
    EmptySelection(String),
}

/// One node of a projection tree: a field name and the sub-fields selected on it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Projection {
    pub name: String,
    pub children: Vec<Projection>,
}

impl Projection {
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn nested(name: impl Into<String>, child: Projection) -> Self {
        Self {
            name: name.into(),
            children: vec![child],
        }
    }

    pub fn parse(input: &str) -> Result<Self, ProjectionError> {
        if input.trim().is_empty() {
            return Err(ProjectionError::Empty);
        }

        let mut parser = Parser {
            input,
            bytes: input.as_bytes(),
            pos: 0,
        };
        let projection = parser.projection()?;
        parser.skip_whitespace();
        if parser.pos != parser.bytes.len() {
            return Err(parser.unexpected());
        }
        Ok(projection)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Name of the outermost field (`handlingUnit` for `handlingUnit{stockOwner{name}}`)
    pub fn root(&self) -> &str {
        &self.name
    }

    /// Segments of the single chain from root to leaf.
    /// `None` when some node selects more than one sub-field.
    pub fn path(&self) -> Option<Vec<&str>> {
        let mut segments = vec![self.name.as_str()];
        let mut node = self;
        while !node.is_leaf() {
            if node.children.len() != 1 {
                return None;
            }
            node = &node.children[0];
            segments.push(node.name.as_str());
        }
        Some(segments)
    }

    /// Flattened identity used as a table column key: `handlingUnit_stockOwner_name`
    pub fn column_key(&self) -> Option<String> {
        self.path().map(|p| p.join("_"))
    }

    /// Dotted accessor: `handlingUnit.stockOwner.name`
    pub fn dotted(&self) -> Option<String> {
        self.path().map(|p| p.join("."))
    }

    /// Follow the projection path through a JSON row.
    pub fn resolve<'v>(&self, row: &'v Value) -> Option<&'v Value> {
        let mut current = row;
        for segment in self.path()? {
            current = current.get(segment)?;
        }
        Some(current)
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.children.is_empty() {
            f.write_str("{")?;
            for (i, child) in self.children.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", child)?;
            }
            f.write_str("}")?;
        }
        Ok(())
    }
}

impl FromStr for Projection {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Projection::parse(s)
    }
}

struct Parser<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b) if b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    // Sub-fields may be separated by whitespace or commas
    fn skip_separators(&mut self) {
        while matches!(self.peek(), Some(b) if b.is_ascii_whitespace() || b == b',') {
            self.pos += 1;
        }
    }

    fn unexpected(&self) -> ProjectionError {
        match self.input[self.pos..].chars().next() {
            Some(ch) => ProjectionError::UnexpectedChar {
                input: self.input.to_string(),
                ch,
                pos: self.pos,
            },
            None => ProjectionError::Unbalanced(self.input.to_string()),
        }
    }

    fn ident(&mut self) -> Result<String, ProjectionError> {
        let start = self.pos;
        while matches!(self.peek(), Some(b) if b.is_ascii_alphanumeric() || b == b'_') {
            self.pos += 1;
        }
        if start == self.pos {
            return Err(self.unexpected());
        }
        Ok(self.input[start..self.pos].to_string())
    }

    fn projection(&mut self) -> Result<Projection, ProjectionError> {
        self.skip_whitespace();
        let name = self.ident()?;
        self.skip_whitespace();

        let mut children = Vec::new();
        if self.peek() == Some(b'{') {
            self.pos += 1;
            loop {
                self.skip_separators();
                match self.peek() {
                    Some(b'}') => {
                        self.pos += 1;
                        break;
                    }
                    None => return Err(ProjectionError::Unbalanced(self.input.to_string())),
                    Some(_) => children.push(self.projection()?),
                }
            }
            if children.is_empty() {
                return Err(ProjectionError::EmptySelection(self.input.to_string()));
            }
        }

        Ok(Projection { name, children })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_plain_field() {
        let p = Projection::parse("name").unwrap();
        assert_eq!(p, Projection::leaf("name"));
        assert_eq!(p.column_key().as_deref(), Some("name"));
    }

    #[test]
    fn test_parse_nested_relation() {
        let p = Projection::parse("handlingUnit{stockOwner{name}}").unwrap();
        assert_eq!(
            p,
            Projection::nested(
                "handlingUnit",
                Projection::nested("stockOwner", Projection::leaf("name"))
            )
        );
        assert_eq!(p.root(), "handlingUnit");
        assert_eq!(p.column_key().as_deref(), Some("handlingUnit_stockOwner_name"));
        assert_eq!(p.dotted().as_deref(), Some("handlingUnit.stockOwner.name"));
        assert_eq!(p.to_string(), "handlingUnit{stockOwner{name}}");
    }

    #[test]
    fn test_parse_branching_selection() {
        let p = Projection::parse("stockOwner { id, name }").unwrap();
        assert_eq!(p.children.len(), 2);
        assert_eq!(p.path(), None);
        assert_eq!(p.to_string(), "stockOwner{id name}");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Projection::parse("  "), Err(ProjectionError::Empty));
        assert!(matches!(
            Projection::parse("stockOwner{name"),
            Err(ProjectionError::Unbalanced(_))
        ));
        assert!(matches!(
            Projection::parse("stockOwner{}"),
            Err(ProjectionError::EmptySelection(_))
        ));
        assert!(matches!(
            Projection::parse("stockOwner}name"),
            Err(ProjectionError::UnexpectedChar { ch: '}', pos: 10, .. })
        ));
        assert!(matches!(
            Projection::parse("a.b"),
            Err(ProjectionError::UnexpectedChar { ch: '.', .. })
        ));
    }

    #[test]
    fn test_resolve_row_value() {
        let row = json!({
            "id": "1",
            "stockOwner": { "name": "ACME" }
        });
        let p: Projection = "stockOwner{name}".parse().unwrap();
        assert_eq!(p.resolve(&row), Some(&json!("ACME")));

        let missing: Projection = "carrier{name}".parse().unwrap();
        assert_eq!(missing.resolve(&row), None);
    }
}
