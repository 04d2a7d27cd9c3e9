use std::{error, fmt::Display, io, path::PathBuf};

use graph_rs::{GraphError, input::edgelist::ParseError};

#[derive(Debug)]
pub enum Error {
    FileNotFound(PathBuf),
    Io(io::Error),
    Parse(ParseError),
    Graph(GraphError),
    Json(serde_json::Error),
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::FileNotFound(_) => None,
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Graph(err) => Some(err),
            Self::Json(err) => Some(err),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileNotFound(path) => write!(f, "input file '{}' not found", path.display()),
            Self::Io(err) => write!(f, "could not read input: {err}"),
            Self::Parse(err) => write!(f, "malformed edge list: {err}"),
            Self::Graph(err) => write!(f, "invalid graph: {err}"),
            Self::Json(err) => write!(f, "could not serialize results: {err}"),
        }
    }
}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<GraphError> for Error {
    fn from(value: GraphError) -> Self {
        Self::Graph(value)
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
