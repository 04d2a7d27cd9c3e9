use std::{error::Error, fmt::Display, iter::Copied, num::ParseIntError, slice::Iter};

use log::trace;

const DELIMITER: char = ',';
const NODE_PREFIX: &str = "N_";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    MissingDelimiter,
    MissingPrefix(String),
    InvalidNumber(String, ParseIntError),
}

/// A malformed line in an edge list. `line` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            ParseErrorKind::InvalidNumber(_, err) => Some(err),
            _ => None,
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ParseErrorKind::MissingDelimiter => {
                write!(f, "line {}: no '{}' delimiter found", self.line, DELIMITER)
            }
            ParseErrorKind::MissingPrefix(token) => write!(
                f,
                "line {}: node '{}' does not start with '{}'",
                self.line, token, NODE_PREFIX
            ),
            ParseErrorKind::InvalidNumber(token, err) => write!(
                f,
                "line {}: node '{}' has no valid index: {}",
                self.line, token, err
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeList {
    edges: Box<[(usize, usize)]>,
}

impl EdgeList {
    pub fn new(edges: Vec<(usize, usize)>) -> Self {
        Self {
            edges: edges.into_boxed_slice(),
        }
    }

    pub fn edges(&self) -> Copied<Iter<'_, (usize, usize)>> {
        self.edges.iter().copied()
    }
}

fn parse_node(token: &str) -> Result<usize, ParseErrorKind> {
    let token = token.trim();
    let index = token
        .strip_prefix(NODE_PREFIX)
        .ok_or_else(|| ParseErrorKind::MissingPrefix(token.to_owned()))?;

    index
        .parse()
        .map_err(|err| ParseErrorKind::InvalidNumber(token.to_owned(), err))
}

/// Parse one `N_<source>,N_<target>` line.
pub fn parse_edge(line: &str) -> Result<(usize, usize), ParseErrorKind> {
    let (source, target) = line
        .split_once(DELIMITER)
        .ok_or(ParseErrorKind::MissingDelimiter)?;

    Ok((parse_node(source)?, parse_node(target)?))
}

/// Parses an edge list with one `N_<source>,N_<target>` edge per line.
///
/// Blank lines are skipped. The first malformed line aborts parsing.
impl TryFrom<&str> for EdgeList {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut result: Vec<(usize, usize)> = vec![];

        for (index, line) in value.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let edge = parse_edge(line).map_err(|kind| ParseError {
                line: index + 1,
                kind,
            })?;
            trace!("parsed edge {:?} from line {}", edge, index + 1);
            result.push(edge);
        }

        Ok(EdgeList::new(result))
    }
}
